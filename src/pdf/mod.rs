mod cosine;
mod hitable;
mod mixture;

pub use cosine::*;
pub use hitable::*;
pub use mixture::*;

use crate::core::rng::Rng;

/// A direction distribution the integrator can both sample and evaluate.
///
/// `value` and `generate` of the same variant describe the same density, so a
/// direction from `generate` always has a positive `value` unless it was
/// drawn from a zero-measure region.
pub enum Pdf<'a> {
    Cosine(CosinePdf),
    Hitable(HitablePdf<'a>),
    Mixture(MixturePdf<'a>),
}

impl<'a> Pdf<'a> {
    /// density of `direction` with respect to solid angle
    pub fn value(&self, direction: glam::Vec3A) -> f32 {
        match self {
            Pdf::Cosine(pdf) => pdf.value(direction),
            Pdf::Hitable(pdf) => pdf.value(direction),
            Pdf::Mixture(pdf) => pdf.value(direction),
        }
    }

    pub fn generate(&self, rng: &mut Rng) -> glam::Vec3A {
        match self {
            Pdf::Cosine(pdf) => pdf.generate(rng),
            Pdf::Hitable(pdf) => pdf.generate(rng),
            Pdf::Mixture(pdf) => pdf.generate(rng),
        }
    }

    /// equal-weight mixture of `self` and `other`
    pub fn mix(self, other: Pdf<'a>) -> Pdf<'a> {
        Pdf::Mixture(MixturePdf::new(self, other))
    }
}

impl From<CosinePdf> for Pdf<'_> {
    fn from(pdf: CosinePdf) -> Self {
        Pdf::Cosine(pdf)
    }
}

impl<'a> From<HitablePdf<'a>> for Pdf<'a> {
    fn from(pdf: HitablePdf<'a>) -> Self {
        Pdf::Hitable(pdf)
    }
}

impl<'a> From<MixturePdf<'a>> for Pdf<'a> {
    fn from(pdf: MixturePdf<'a>) -> Self {
        Pdf::Mixture(pdf)
    }
}
