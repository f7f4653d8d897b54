use std::sync::Arc;

use crate::{
    core::{color::Color, hit_record::HitRecord, ray::Ray, rng::Rng, scatter::ScatterRecord},
    texture::{Texture, TextureT},
};

use super::MaterialT;

/// Emitter that lights only the side its surface normal faces.
pub struct DiffuseLight {
    emit: Arc<Texture>,
}

impl DiffuseLight {
    pub fn new(emit: Arc<Texture>) -> Self {
        Self { emit }
    }
}

impl MaterialT for DiffuseLight {
    fn scatter(&self, _ray: &Ray, _rec: &HitRecord<'_>, _rng: &mut Rng) -> Option<ScatterRecord> {
        None
    }

    fn emitted(
        &self,
        ray: &Ray,
        rec: &HitRecord<'_>,
        u: f32,
        v: f32,
        position: glam::Vec3A,
    ) -> Color {
        if rec.normal.dot(ray.direction) < 0.0 {
            self.emit.value(u, v, position)
        } else {
            Color::BLACK
        }
    }
}
