use std::sync::Arc;

use crate::{
    core::{bbox::Bbox, hit_record::HitRecord, ray::Ray, rng::Rng},
    material::Material,
};

use super::{AxisRect, HitableList, HitableT, LightTargetT};

/// Axis-aligned box made of six rectangles with outward normals.
pub struct Cuboid {
    sides: HitableList,
}

impl Cuboid {
    pub fn new(p0: glam::Vec3A, p1: glam::Vec3A, material: Arc<Material>) -> Self {
        let sides = vec![
            AxisRect::xy(p0.x, p1.x, p0.y, p1.y, p1.z, material.clone()),
            AxisRect::xy(p0.x, p1.x, p0.y, p1.y, p0.z, material.clone()).flip(),
            AxisRect::xz(p0.x, p1.x, p0.z, p1.z, p1.y, material.clone()),
            AxisRect::xz(p0.x, p1.x, p0.z, p1.z, p0.y, material.clone()).flip(),
            AxisRect::yz(p0.y, p1.y, p0.z, p1.z, p1.x, material.clone()),
            AxisRect::yz(p0.y, p1.y, p0.z, p1.z, p0.x, material).flip(),
        ];
        Self {
            sides: HitableList::from_hitables(sides.into_iter().map(Into::into)),
        }
    }
}

impl HitableT for Cuboid {
    fn hit(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<HitRecord<'_>> {
        self.sides.hit(ray, t_min, t_max)
    }

    fn bbox(&self, time0: f32, time1: f32) -> Option<Bbox> {
        self.sides.bbox(time0, time1)
    }
}

/// Boxes are never sampled as lights.
impl LightTargetT for Cuboid {
    fn pdf_value(&self, _origin: glam::Vec3A, _direction: glam::Vec3A) -> f32 {
        0.0
    }

    fn random(&self, _origin: glam::Vec3A, _rng: &mut Rng) -> glam::Vec3A {
        glam::Vec3A::X
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        material::{Lambertian, Material},
        texture::ConstantTex,
    };

    fn unit_cube() -> Cuboid {
        let gray: Arc<Material> =
            Arc::new(Lambertian::new(Arc::new(ConstantTex::gray(0.5).into())).into());
        Cuboid::new(glam::Vec3A::ZERO, glam::Vec3A::ONE, gray)
    }

    #[test]
    fn all_normals_point_outward() {
        let cube = unit_cube();
        let center = glam::Vec3A::splat(0.5);
        for axis in [glam::Vec3A::X, glam::Vec3A::Y, glam::Vec3A::Z] {
            for sign in [1.0, -1.0] {
                let outward = axis * sign;
                let origin = center + outward * 3.0;
                let rec = cube
                    .hit(&Ray::new(origin, -outward, 0.0), 0.001, f32::MAX)
                    .expect("ray aimed at the cube should hit");
                assert_eq!(rec.normal, outward);
                assert!((rec.t - 2.5).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn bbox_encloses_cube() {
        let bbox = unit_cube().bbox(0.0, 1.0).expect("cube is bounded");
        assert!(bbox.p_min.cmple(glam::Vec3A::ZERO).all());
        assert!(bbox.p_max.cmpge(glam::Vec3A::ONE).all());
    }

    #[test]
    fn not_a_light_target() {
        let mut rng = Rng::with_seed(1);
        let cube = unit_cube();
        assert_eq!(cube.pdf_value(glam::Vec3A::splat(3.0), -glam::Vec3A::ONE), 0.0);
        assert_eq!(cube.random(glam::Vec3A::splat(3.0), &mut rng), glam::Vec3A::X);
    }
}
