use crate::{camera::Camera, primitive::Hitable};

/// Everything a render needs, immutable once built and shared by all workers.
pub struct Scene {
    camera: Camera,
    world: Hitable,
    lights: Option<Hitable>,
}

impl Scene {
    /// `lights` is the target the integrator importance-samples, usually the
    /// emitters plus any glass; without one only material lobes are sampled.
    pub fn new(camera: Camera, world: Hitable, lights: Option<Hitable>) -> Self {
        Self {
            camera,
            world,
            lights,
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn world(&self) -> &Hitable {
        &self.world
    }

    pub fn lights(&self) -> Option<&Hitable> {
        self.lights.as_ref()
    }
}
