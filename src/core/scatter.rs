use crate::{
    core::{color::Color, ray::Ray},
    pdf::Pdf,
};

/// Outcome of a successful `MaterialT::scatter`.
pub enum ScatterRecord {
    /// deterministic outgoing direction, no density
    Specular { ray: Ray, attenuation: Color },
    /// outgoing direction distributed according to `pdf`
    Diffuse { attenuation: Color, pdf: Pdf<'static> },
}

impl ScatterRecord {
    pub fn attenuation(&self) -> Color {
        match self {
            ScatterRecord::Specular { attenuation, .. } => *attenuation,
            ScatterRecord::Diffuse { attenuation, .. } => *attenuation,
        }
    }

    pub fn is_specular(&self) -> bool {
        matches!(self, ScatterRecord::Specular { .. })
    }
}
