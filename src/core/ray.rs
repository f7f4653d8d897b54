#[derive(Debug, Copy, Clone)]
pub struct Ray {
    pub origin: glam::Vec3A,
    pub direction: glam::Vec3A,
    pub time: f32,
}

impl Ray {
    pub fn new(origin: glam::Vec3A, direction: glam::Vec3A, time: f32) -> Self {
        Self {
            origin,
            direction,
            time,
        }
    }

    pub fn point_at(&self, t: f32) -> glam::Vec3A {
        self.origin + self.direction * t
    }
}
