use crate::{
    core::{color::Color, ray::Ray, rng::Rng, scatter::ScatterRecord, scene::Scene},
    material::MaterialT,
    pdf::{HitablePdf, Pdf},
    primitive::HitableT,
};

/// Recursive Monte Carlo radiance estimator.
///
/// Diffuse bounces sample an equal mixture of the scene's light targets and
/// the material lobe; specular bounces follow the material's ray.
pub struct PathTracer {
    max_depth: u32,
}

impl PathTracer {
    pub const DEFAULT_MAX_DEPTH: u32 = 50;
    const T_MIN: f32 = 0.001;

    pub fn new(max_depth: u32) -> Self {
        Self { max_depth }
    }

    /// Radiance arriving along `ray`, with every non-finite channel zeroed.
    pub fn radiance(&self, scene: &Scene, ray: &Ray, rng: &mut Rng) -> Color {
        self.trace(scene, ray, 0, rng).de_nan()
    }

    fn trace(&self, scene: &Scene, ray: &Ray, depth: u32, rng: &mut Rng) -> Color {
        let rec = match scene.world().hit(ray, Self::T_MIN, f32::MAX) {
            Some(rec) => rec,
            None => return Color::BLACK,
        };

        let material = rec.material;
        let emitted = material.emitted(ray, &rec, rec.u(), rec.v(), rec.position);
        if depth >= self.max_depth {
            return emitted;
        }

        match material.scatter(ray, &rec, rng) {
            None => emitted,
            Some(ScatterRecord::Specular {
                ray: scattered,
                attenuation,
            }) => emitted + attenuation * self.trace(scene, &scattered, depth + 1, rng),
            Some(ScatterRecord::Diffuse { attenuation, pdf }) => {
                let pdf = match scene.lights() {
                    Some(lights) => Pdf::from(HitablePdf::new(lights, rec.position)).mix(pdf),
                    None => pdf,
                };
                let scattered = Ray::new(rec.position, pdf.generate(rng), ray.time);
                let pdf_value = pdf.value(scattered.direction);
                let scattering_pdf = material.scattering_pdf(ray, &rec, &scattered);
                let incoming = self.trace(scene, &scattered, depth + 1, rng);
                emitted + attenuation * scattering_pdf * incoming / pdf_value
            }
        }
    }
}

impl Default for PathTracer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_DEPTH)
    }
}
