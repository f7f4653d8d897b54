use crate::core::rng::Rng;

use super::Pdf;

/// Equal-weight mixture of two densities.
pub struct MixturePdf<'a> {
    pdfs: [Box<Pdf<'a>>; 2],
}

impl<'a> MixturePdf<'a> {
    pub fn new(first: Pdf<'a>, second: Pdf<'a>) -> Self {
        Self {
            pdfs: [Box::new(first), Box::new(second)],
        }
    }

    pub fn value(&self, direction: glam::Vec3A) -> f32 {
        0.5 * self.pdfs[0].value(direction) + 0.5 * self.pdfs[1].value(direction)
    }

    pub fn generate(&self, rng: &mut Rng) -> glam::Vec3A {
        if rng.uniform_1d() < 0.5 {
            self.pdfs[0].generate(rng)
        } else {
            self.pdfs[1].generate(rng)
        }
    }
}
