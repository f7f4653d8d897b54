use std::sync::Arc;

use crate::{
    core::{hit_record::HitRecord, ray::Ray, rng::Rng, scatter::ScatterRecord},
    pdf::{CosinePdf, Pdf},
    texture::{Texture, TextureT},
};

use super::MaterialT;

pub struct Lambertian {
    albedo: Arc<Texture>,
}

impl Lambertian {
    pub fn new(albedo: Arc<Texture>) -> Self {
        Self { albedo }
    }
}

impl MaterialT for Lambertian {
    fn scatter(&self, _ray: &Ray, rec: &HitRecord<'_>, _rng: &mut Rng) -> Option<ScatterRecord> {
        Some(ScatterRecord::Diffuse {
            attenuation: self.albedo.value(rec.u(), rec.v(), rec.position),
            pdf: Pdf::Cosine(CosinePdf::new(rec.normal)),
        })
    }

    fn scattering_pdf(&self, _ray: &Ray, rec: &HitRecord<'_>, scattered: &Ray) -> f32 {
        let cosine = rec.normal.dot(scattered.direction.normalize());
        cosine.max(0.0) * std::f32::consts::FRAC_1_PI
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::color::Color, material::Material, texture::ConstantTex};
    use approx::assert_abs_diff_eq;

    #[test]
    fn diffuse_record_and_cosine_density() {
        let material: Material = Lambertian::new(Arc::new(ConstantTex::gray(0.3).into())).into();
        let rec = HitRecord {
            t: 1.0,
            texcoords: glam::Vec2::ZERO,
            position: glam::Vec3A::ZERO,
            normal: glam::Vec3A::Y,
            material: &material,
        };
        let ray_in = Ray::new(glam::Vec3A::Y, -glam::Vec3A::Y, 0.0);
        let mut rng = Rng::with_seed(0);
        match material.scatter(&ray_in, &rec, &mut rng) {
            Some(ScatterRecord::Diffuse { attenuation, pdf }) => {
                assert_eq!(attenuation, Color::gray(0.3));
                assert_abs_diff_eq!(
                    pdf.value(glam::Vec3A::Y),
                    std::f32::consts::FRAC_1_PI,
                    epsilon = 1e-6
                );
            }
            _ => panic!("lambertian must scatter diffusely"),
        }

        let up = Ray::new(glam::Vec3A::ZERO, glam::Vec3A::Y * 2.0, 0.0);
        let down = Ray::new(glam::Vec3A::ZERO, -glam::Vec3A::Y, 0.0);
        assert_abs_diff_eq!(
            material.scattering_pdf(&ray_in, &rec, &up),
            std::f32::consts::FRAC_1_PI,
            epsilon = 1e-6
        );
        assert_eq!(material.scattering_pdf(&ray_in, &rec, &down), 0.0);
    }
}
