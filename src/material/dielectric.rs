use crate::core::{
    color::Color, hit_record::HitRecord, ray::Ray, rng::Rng, scatter::ScatterRecord,
};

use super::{util, MaterialT};

/// Clear glass-like material with refractive index `ior`.
pub struct Dielectric {
    ior: f32,
}

impl Dielectric {
    pub fn new(ior: f32) -> Self {
        Self { ior }
    }
}

impl MaterialT for Dielectric {
    fn scatter(&self, ray: &Ray, rec: &HitRecord<'_>, rng: &mut Rng) -> Option<ScatterRecord> {
        let d_dot_n = ray.direction.dot(rec.normal);
        let (outward_normal, ni_over_nt, cosine) = if d_dot_n > 0.0 {
            // leaving the object
            (
                -rec.normal,
                self.ior,
                self.ior * d_dot_n / ray.direction.length(),
            )
        } else {
            (
                rec.normal,
                1.0 / self.ior,
                -d_dot_n / ray.direction.length(),
            )
        };

        let direction = match util::refract(ray.direction, outward_normal, ni_over_nt) {
            Some(refracted) if rng.uniform_1d() >= util::schlick_fresnel(self.ior, cosine) => {
                refracted
            }
            _ => util::reflect(ray.direction, rec.normal),
        };

        Some(ScatterRecord::Specular {
            ray: Ray::new(rec.position, direction, ray.time),
            attenuation: Color::WHITE,
        })
    }
}
