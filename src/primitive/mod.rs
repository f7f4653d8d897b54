mod bvh;
mod cuboid;
mod list;
mod rect;
mod sphere;

pub use bvh::*;
pub use cuboid::*;
pub use list::*;
pub use rect::*;
pub use sphere::*;

use crate::core::{bbox::Bbox, hit_record::HitRecord, ray::Ray, rng::Rng};

#[enum_dispatch::enum_dispatch(Hitable)]
pub trait HitableT: Send + Sync {
    /// closest intersection with t in [t_min, t_max], if any
    fn hit(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<HitRecord<'_>>;

    /// `None` for shapes that cannot be bounded
    fn bbox(&self, time0: f32, time1: f32) -> Option<Bbox>;
}

/// The part of a shape the PDF layer needs to sample it as a light source.
#[enum_dispatch::enum_dispatch(Hitable)]
pub trait LightTargetT: Send + Sync {
    /// solid-angle density of `direction` as seen from `origin`
    fn pdf_value(&self, origin: glam::Vec3A, direction: glam::Vec3A) -> f32;

    /// a direction from `origin` towards the shape, not normalized
    fn random(&self, origin: glam::Vec3A, rng: &mut Rng) -> glam::Vec3A;
}

#[enum_dispatch::enum_dispatch]
pub enum Hitable {
    Sphere,
    AxisRect,
    Cuboid,
    HitableList,
    BvhNode,
}

impl Hitable {
    pub fn kind(&self) -> &'static str {
        match self {
            Hitable::Sphere(_) => "sphere",
            Hitable::AxisRect(_) => "axis-aligned rectangle",
            Hitable::Cuboid(_) => "box",
            Hitable::HitableList(_) => "list",
            Hitable::BvhNode(_) => "bvh node",
        }
    }
}
