use crate::core::color::Color;

use super::TextureT;

pub struct ConstantTex {
    value: Color,
}

impl ConstantTex {
    pub fn new(value: Color) -> Self {
        Self { value }
    }

    pub fn gray(value: f32) -> Self {
        Self::new(Color::gray(value))
    }
}

impl TextureT for ConstantTex {
    fn value(&self, _u: f32, _v: f32, _position: glam::Vec3A) -> Color {
        self.value
    }
}
