use std::sync::Arc;

use crate::{
    core::{bbox::Bbox, hit_record::HitRecord, ray::Ray, rng::Rng},
    material::Material,
};

use super::{HitableT, LightTargetT};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Plane {
    Xy,
    Xz,
    Yz,
}

impl Plane {
    /// (first in-plane axis, second in-plane axis, fixed axis)
    fn axes(self) -> (usize, usize, usize) {
        match self {
            Plane::Xy => (0, 1, 2),
            Plane::Xz => (0, 2, 1),
            Plane::Yz => (1, 2, 0),
        }
    }
}

/// Rectangle lying in `plane` at `k` along the fixed axis, spanning
/// `[a0, a1] x [b0, b1]` on the two in-plane axes.
#[derive(Clone)]
pub struct AxisRect {
    plane: Plane,
    a0: f32,
    a1: f32,
    b0: f32,
    b1: f32,
    k: f32,
    flipped: bool,
    material: Arc<Material>,
}

impl AxisRect {
    const THICKNESS_EPS: f32 = 0.0001;

    pub fn new(
        plane: Plane,
        (a0, a1): (f32, f32),
        (b0, b1): (f32, f32),
        k: f32,
        material: Arc<Material>,
    ) -> Self {
        Self {
            plane,
            a0,
            a1,
            b0,
            b1,
            k,
            flipped: false,
            material,
        }
    }

    pub fn xy(x0: f32, x1: f32, y0: f32, y1: f32, k: f32, material: Arc<Material>) -> Self {
        Self::new(Plane::Xy, (x0, x1), (y0, y1), k, material)
    }

    pub fn xz(x0: f32, x1: f32, z0: f32, z1: f32, k: f32, material: Arc<Material>) -> Self {
        Self::new(Plane::Xz, (x0, x1), (z0, z1), k, material)
    }

    pub fn yz(y0: f32, y1: f32, z0: f32, z1: f32, k: f32, material: Arc<Material>) -> Self {
        Self::new(Plane::Yz, (y0, y1), (z0, z1), k, material)
    }

    /// the same rectangle with its normal pointing the other way
    pub fn flip(mut self) -> Self {
        self.flipped = !self.flipped;
        self
    }

    pub fn area(&self) -> f32 {
        (self.a1 - self.a0) * (self.b1 - self.b0)
    }

    pub fn normal(&self) -> glam::Vec3A {
        let (_, _, k_axis) = self.plane.axes();
        let mut normal = glam::Vec3A::ZERO;
        normal[k_axis] = if self.flipped { -1.0 } else { 1.0 };
        normal
    }
}

impl HitableT for AxisRect {
    fn hit(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<HitRecord<'_>> {
        let (a_axis, b_axis, k_axis) = self.plane.axes();
        let t = (self.k - ray.origin[k_axis]) / ray.direction[k_axis];
        // also rejects NaN from rays parallel to the plane
        if !(t >= t_min && t <= t_max) {
            return None;
        }

        let position = ray.point_at(t);
        let a = position[a_axis];
        let b = position[b_axis];
        if !(a >= self.a0 && a <= self.a1 && b >= self.b0 && b <= self.b1) {
            return None;
        }

        Some(HitRecord {
            t,
            texcoords: glam::Vec2::new(
                (a - self.a0) / (self.a1 - self.a0),
                (b - self.b0) / (self.b1 - self.b0),
            ),
            position,
            normal: self.normal(),
            material: self.material.as_ref(),
        })
    }

    fn bbox(&self, _time0: f32, _time1: f32) -> Option<Bbox> {
        let (a_axis, b_axis, k_axis) = self.plane.axes();
        let mut p_min = glam::Vec3A::ZERO;
        let mut p_max = glam::Vec3A::ZERO;
        p_min[a_axis] = self.a0;
        p_max[a_axis] = self.a1;
        p_min[b_axis] = self.b0;
        p_max[b_axis] = self.b1;
        p_min[k_axis] = self.k - Self::THICKNESS_EPS;
        p_max[k_axis] = self.k + Self::THICKNESS_EPS;
        Some(Bbox::new(p_min, p_max))
    }
}

impl LightTargetT for AxisRect {
    fn pdf_value(&self, origin: glam::Vec3A, direction: glam::Vec3A) -> f32 {
        let toward = Ray::new(origin, direction, 0.0);
        if let Some(rec) = self.hit(&toward, 0.001, f32::MAX) {
            let dist_sqr = rec.t * rec.t * direction.length_squared();
            let cosine = (direction.dot(rec.normal) / direction.length()).abs();
            dist_sqr / (cosine * self.area())
        } else {
            0.0
        }
    }

    fn random(&self, origin: glam::Vec3A, rng: &mut Rng) -> glam::Vec3A {
        let (a_axis, b_axis, k_axis) = self.plane.axes();
        let (rand_a, rand_b) = rng.uniform_2d();
        let mut point = glam::Vec3A::ZERO;
        point[a_axis] = self.a0 + rand_a * (self.a1 - self.a0);
        point[b_axis] = self.b0 + rand_b * (self.b1 - self.b0);
        point[k_axis] = self.k;
        point - origin
    }
}
