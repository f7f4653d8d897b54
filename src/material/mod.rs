pub mod util;

mod dielectric;
mod diffuse_light;
mod isotropic;
mod lambertian;
mod metal;

pub use dielectric::*;
pub use diffuse_light::*;
pub use isotropic::*;
pub use lambertian::*;
pub use metal::*;

use crate::core::{
    color::Color, hit_record::HitRecord, ray::Ray, rng::Rng, scatter::ScatterRecord,
};

#[enum_dispatch::enum_dispatch(Material)]
pub trait MaterialT: Send + Sync {
    /// `None` when the material absorbs the ray
    fn scatter(&self, ray: &Ray, rec: &HitRecord<'_>, rng: &mut Rng) -> Option<ScatterRecord>;

    fn emitted(
        &self,
        _ray: &Ray,
        _rec: &HitRecord<'_>,
        _u: f32,
        _v: f32,
        _position: glam::Vec3A,
    ) -> Color {
        Color::BLACK
    }

    /// density of the material's own BRDF lobe for `scattered`
    fn scattering_pdf(&self, _ray: &Ray, _rec: &HitRecord<'_>, _scattered: &Ray) -> f32 {
        0.0
    }
}

#[enum_dispatch::enum_dispatch]
pub enum Material {
    Lambertian,
    Metal,
    Dielectric,
    DiffuseLight,
    Isotropic,
}
