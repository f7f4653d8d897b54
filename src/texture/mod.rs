mod checker;
mod constant;

pub use checker::*;
pub use constant::*;

use crate::core::color::Color;

#[enum_dispatch::enum_dispatch(Texture)]
pub trait TextureT: Send + Sync {
    fn value(&self, u: f32, v: f32, position: glam::Vec3A) -> Color;
}

#[enum_dispatch::enum_dispatch]
pub enum Texture {
    ConstantTex,
    CheckerTex,
}
