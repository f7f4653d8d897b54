use std::sync::Arc;

use crate::{
    core::{bbox::Bbox, coord::Coordinate, hit_record::HitRecord, ray::Ray, rng::Rng},
    material::Material,
};

use super::{HitableT, LightTargetT};

/// A sphere whose center moves linearly from `center0` at `time0` to
/// `center1` at `time1`. Stationary spheres have equal end points.
#[derive(Clone)]
pub struct Sphere {
    center0: glam::Vec3A,
    center1: glam::Vec3A,
    time0: f32,
    time1: f32,
    radius: f32,
    material: Arc<Material>,
}

impl Sphere {
    pub fn new(center: glam::Vec3A, radius: f32, material: Arc<Material>) -> Self {
        Self::moving(center, center, 0.0, 1.0, radius, material)
    }

    pub fn moving(
        center0: glam::Vec3A,
        center1: glam::Vec3A,
        time0: f32,
        time1: f32,
        radius: f32,
        material: Arc<Material>,
    ) -> Self {
        Self {
            center0,
            center1,
            time0,
            time1,
            radius,
            material,
        }
    }

    pub fn center(&self, time: f32) -> glam::Vec3A {
        if self.time1 == self.time0 {
            self.center0
        } else {
            let s = (time - self.time0) / (self.time1 - self.time0);
            self.center0 + (self.center1 - self.center0) * s
        }
    }

    fn bbox_at(&self, time: f32) -> Bbox {
        let center = self.center(time);
        let delta = glam::Vec3A::splat(self.radius);
        Bbox::new(center - delta, center + delta)
    }

    fn record_at(&self, ray: &Ray, t: f32, center: glam::Vec3A) -> HitRecord<'_> {
        let position = ray.point_at(t);
        let normal = (position - center) / self.radius;
        HitRecord {
            t,
            texcoords: sphere_normal_to_texcoords(normal),
            position,
            normal,
            material: self.material.as_ref(),
        }
    }
}

impl HitableT for Sphere {
    fn hit(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<HitRecord<'_>> {
        let center = self.center(ray.time);
        let oc = ray.origin - center;
        let a = ray.direction.length_squared();
        let b = oc.dot(ray.direction);
        let c = oc.length_squared() - self.radius * self.radius;
        let delta = b * b - a * c;
        if delta <= 0.0 {
            return None;
        }

        let delta = delta.sqrt();
        let near = (-b - delta) / a;
        if near < t_max && near > t_min {
            return Some(self.record_at(ray, near, center));
        }
        let far = (-b + delta) / a;
        if far < t_max && far > t_min {
            return Some(self.record_at(ray, far, center));
        }
        None
    }

    fn bbox(&self, time0: f32, time1: f32) -> Option<Bbox> {
        Some(self.bbox_at(time0).merge(self.bbox_at(time1)))
    }
}

impl LightTargetT for Sphere {
    fn pdf_value(&self, origin: glam::Vec3A, direction: glam::Vec3A) -> f32 {
        let toward = Ray::new(origin, direction, self.time0);
        if self.hit(&toward, 0.001, f32::MAX).is_some() {
            let dist_sqr = (self.center(self.time0) - origin).length_squared();
            let cos_theta_max = (1.0 - self.radius * self.radius / dist_sqr).max(0.0).sqrt();
            let solid_angle = 2.0 * std::f32::consts::PI * (1.0 - cos_theta_max);
            1.0 / solid_angle
        } else {
            0.0
        }
    }

    fn random(&self, origin: glam::Vec3A, rng: &mut Rng) -> glam::Vec3A {
        let direction = self.center(self.time0) - origin;
        let dist_sqr = direction.length_squared();
        let coord = Coordinate::from_z(direction);
        coord.to_world(rng.uniform_in_cone_to_sphere(self.radius, dist_sqr))
    }
}

fn sphere_normal_to_texcoords(p: glam::Vec3A) -> glam::Vec2 {
    let phi = p.z.atan2(p.x);
    let theta = p.y.clamp(-1.0, 1.0).asin();
    glam::Vec2::new(
        1.0 - (phi + std::f32::consts::PI) * 0.5 * std::f32::consts::FRAC_1_PI,
        (theta + std::f32::consts::FRAC_PI_2) * std::f32::consts::FRAC_1_PI,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        material::{Lambertian, Material},
        texture::ConstantTex,
    };
    use approx::assert_abs_diff_eq;

    fn gray() -> Arc<Material> {
        Arc::new(Lambertian::new(Arc::new(ConstantTex::gray(0.5).into())).into())
    }

    #[test]
    fn hit_front_and_from_inside() {
        let sphere = Sphere::new(glam::Vec3A::new(0.0, 0.0, -1.0), 0.5, gray());
        let ray = Ray::new(glam::Vec3A::ZERO, -glam::Vec3A::Z, 0.0);
        let rec = sphere.hit(&ray, 0.001, f32::MAX).expect("ray should hit");
        assert_abs_diff_eq!(rec.t, 0.5, epsilon = 1e-5);
        assert!(rec.normal.abs_diff_eq(glam::Vec3A::Z, 1e-5));

        let inside = Ray::new(glam::Vec3A::new(0.0, 0.0, -1.0), glam::Vec3A::Y, 0.0);
        let rec = sphere.hit(&inside, 0.001, f32::MAX).expect("ray should hit");
        assert_abs_diff_eq!(rec.t, 0.5, epsilon = 1e-5);
        // normals stay outward-facing
        assert!(rec.normal.abs_diff_eq(glam::Vec3A::Y, 1e-5));
    }

    #[test]
    fn miss() {
        let sphere = Sphere::new(glam::Vec3A::new(0.0, 0.0, -1.0), 0.5, gray());
        let away = Ray::new(glam::Vec3A::ZERO, glam::Vec3A::Y, 0.0);
        assert!(sphere.hit(&away, 0.001, f32::MAX).is_none());
        let short = Ray::new(glam::Vec3A::ZERO, -glam::Vec3A::Z, 0.0);
        assert!(sphere.hit(&short, 0.001, 0.4).is_none());
    }

    #[test]
    fn moving_sphere_follows_ray_time() {
        let sphere = Sphere::moving(
            glam::Vec3A::ZERO,
            glam::Vec3A::new(10.0, 0.0, 0.0),
            0.0,
            1.0,
            1.0,
            gray(),
        );
        let origin = glam::Vec3A::new(10.0, 5.0, 0.0);
        assert!(sphere
            .hit(&Ray::new(origin, -glam::Vec3A::Y, 0.0), 0.001, f32::MAX)
            .is_none());
        assert!(sphere
            .hit(&Ray::new(origin, -glam::Vec3A::Y, 1.0), 0.001, f32::MAX)
            .is_some());

        let bbox = sphere.bbox(0.0, 1.0).expect("sphere is bounded");
        assert_eq!(bbox.p_min, glam::Vec3A::splat(-1.0));
        assert_eq!(bbox.p_max, glam::Vec3A::new(11.0, 1.0, 1.0));
    }

    #[test]
    fn texcoords_in_unit_square() {
        let sphere = Sphere::new(glam::Vec3A::ZERO, 2.0, gray());
        let mut rng = Rng::with_seed(11);
        for _ in 0..200 {
            let origin = rng.uniform_on_sphere() * 10.0;
            let rec = sphere
                .hit(&Ray::new(origin, -origin, 0.0), 0.001, f32::MAX)
                .expect("ray aimed at center should hit");
            assert!((0.0..=1.0).contains(&rec.u()));
            assert!((0.0..=1.0).contains(&rec.v()));
        }
    }

    #[test]
    fn cone_pdf_matches_sampling() {
        let sphere = Sphere::new(glam::Vec3A::new(0.0, 0.0, 4.0), 1.0, gray());
        let origin = glam::Vec3A::ZERO;
        let expected = 1.0 / (2.0 * std::f32::consts::PI * (1.0 - (15.0f32 / 16.0).sqrt()));
        let mut rng = Rng::with_seed(5);
        for _ in 0..100 {
            let dir = sphere.random(origin, &mut rng);
            assert_abs_diff_eq!(sphere.pdf_value(origin, dir), expected, epsilon = 1e-2);
        }
        assert_eq!(sphere.pdf_value(origin, -glam::Vec3A::Z), 0.0);
    }
}
