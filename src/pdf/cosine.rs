use crate::core::{coord::Coordinate, rng::Rng};

/// Cosine-weighted hemisphere around a surface normal.
pub struct CosinePdf {
    coord: Coordinate,
}

impl CosinePdf {
    pub fn new(normal: glam::Vec3A) -> Self {
        Self {
            coord: Coordinate::from_z(normal),
        }
    }

    pub fn value(&self, direction: glam::Vec3A) -> f32 {
        let cos = direction.normalize().dot(self.coord.z());
        if cos > 0.0 {
            cos * std::f32::consts::FRAC_1_PI
        } else {
            0.0
        }
    }

    pub fn generate(&self, rng: &mut Rng) -> glam::Vec3A {
        self.coord.to_world(rng.cosine_weighted_on_hemisphere())
    }
}
