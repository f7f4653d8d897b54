use crate::{core::rng::Rng, primitive::LightTargetT};

/// Directions from a fixed origin towards a light target.
pub struct HitablePdf<'a> {
    target: &'a dyn LightTargetT,
    origin: glam::Vec3A,
}

impl<'a> HitablePdf<'a> {
    pub fn new(target: &'a dyn LightTargetT, origin: glam::Vec3A) -> Self {
        Self { target, origin }
    }

    pub fn value(&self, direction: glam::Vec3A) -> f32 {
        self.target.pdf_value(self.origin, direction)
    }

    pub fn generate(&self, rng: &mut Rng) -> glam::Vec3A {
        self.target.random(self.origin, rng)
    }
}
