use std::sync::Arc;

use crate::core::color::Color;

use super::{Texture, TextureT};

/// 3D checker pattern selecting between two textures by position.
pub struct CheckerTex {
    odd: Arc<Texture>,
    even: Arc<Texture>,
    frequency: f32,
}

impl CheckerTex {
    pub fn new(odd: Arc<Texture>, even: Arc<Texture>) -> Self {
        Self {
            odd,
            even,
            frequency: 10.0,
        }
    }
}

impl TextureT for CheckerTex {
    fn value(&self, u: f32, v: f32, position: glam::Vec3A) -> Color {
        let p = position * self.frequency;
        let sines = p.x.sin() * p.y.sin() * p.z.sin();
        if sines < 0.0 {
            self.odd.value(u, v, position)
        } else {
            self.even.value(u, v, position)
        }
    }
}
