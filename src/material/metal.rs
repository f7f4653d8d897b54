use crate::core::{
    color::Color, hit_record::HitRecord, ray::Ray, rng::Rng, scatter::ScatterRecord,
};

use super::{util, MaterialT};

pub struct Metal {
    albedo: Color,
    fuzz: f32,
}

impl Metal {
    pub fn new(albedo: Color, fuzz: f32) -> Self {
        Self { albedo, fuzz }
    }
}

impl MaterialT for Metal {
    fn scatter(&self, ray: &Ray, rec: &HitRecord<'_>, rng: &mut Rng) -> Option<ScatterRecord> {
        let reflected = util::reflect(ray.direction.normalize(), rec.normal);
        let direction = reflected + self.fuzz * rng.uniform_in_sphere();
        Some(ScatterRecord::Specular {
            ray: Ray::new(rec.position, direction, ray.time),
            attenuation: self.albedo,
        })
    }
}
