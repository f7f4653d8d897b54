mod perspective;

pub use perspective::*;

use crate::core::{ray::Ray, rng::Rng};

#[enum_dispatch::enum_dispatch(Camera)]
pub trait CameraT: Send + Sync {
    /// primary ray through film coordinates `(s, t)`, both in `[0, 1]` with
    /// `(0, 0)` at the lower-left corner
    fn generate_ray(&self, s: f32, t: f32, rng: &mut Rng) -> Ray;
}

#[enum_dispatch::enum_dispatch]
pub enum Camera {
    PerspectiveCamera,
}
