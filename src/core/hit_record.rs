use crate::material::Material;

/// Surface data of one ray/shape intersection.
pub struct HitRecord<'a> {
    pub t: f32,
    pub texcoords: glam::Vec2,
    pub position: glam::Vec3A,
    pub normal: glam::Vec3A,
    pub material: &'a Material,
}

impl HitRecord<'_> {
    pub fn u(&self) -> f32 {
        self.texcoords.x
    }

    pub fn v(&self) -> f32 {
        self.texcoords.y
    }
}
