use std::sync::Arc;

use crate::{
    core::{hit_record::HitRecord, ray::Ray, rng::Rng, scatter::ScatterRecord},
    pdf::{CosinePdf, Pdf},
    texture::{Texture, TextureT},
};

use super::MaterialT;

/// Phase function of a participating medium.
///
/// `scattering_pdf` keeps the trait's zero default, so under the mixture
/// estimator the scattered term of an isotropic surface contributes nothing.
/// A uniform-sphere lobe would be `1 / (4 * PI)`.
pub struct Isotropic {
    albedo: Arc<Texture>,
}

impl Isotropic {
    pub fn new(albedo: Arc<Texture>) -> Self {
        Self { albedo }
    }
}

impl MaterialT for Isotropic {
    fn scatter(&self, _ray: &Ray, rec: &HitRecord<'_>, _rng: &mut Rng) -> Option<ScatterRecord> {
        Some(ScatterRecord::Diffuse {
            attenuation: self.albedo.value(rec.u(), rec.v(), rec.position),
            pdf: Pdf::Cosine(CosinePdf::new(rec.normal)),
        })
    }
}
