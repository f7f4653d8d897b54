use std::sync::Arc;

use crate::core::{bbox::Bbox, hit_record::HitRecord, ray::Ray, rng::Rng};

use super::{Hitable, HitableT, LightTargetT};

pub struct HitableList {
    hitables: Vec<Arc<Hitable>>,
}

impl HitableList {
    pub fn new(hitables: Vec<Arc<Hitable>>) -> Self {
        Self { hitables }
    }

    pub fn from_hitables<I: IntoIterator<Item = Hitable>>(hitables: I) -> Self {
        Self::new(hitables.into_iter().map(Arc::new).collect())
    }

    pub fn len(&self) -> usize {
        self.hitables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hitables.is_empty()
    }
}

impl HitableT for HitableList {
    fn hit(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<HitRecord<'_>> {
        let mut closest = None;
        let mut closest_t = t_max;
        for hitable in &self.hitables {
            if let Some(rec) = hitable.hit(ray, t_min, closest_t) {
                closest_t = rec.t;
                closest = Some(rec);
            }
        }
        closest
    }

    /// union of all children, `None` if the list is empty or any child is unbounded
    fn bbox(&self, time0: f32, time1: f32) -> Option<Bbox> {
        let (first, rest) = self.hitables.split_first()?;
        rest.iter().try_fold(first.bbox(time0, time1)?, |acc, hitable| {
            Some(acc.merge(hitable.bbox(time0, time1)?))
        })
    }
}

impl LightTargetT for HitableList {
    fn pdf_value(&self, origin: glam::Vec3A, direction: glam::Vec3A) -> f32 {
        let weight = 1.0 / self.hitables.len() as f32;
        self.hitables
            .iter()
            .map(|hitable| weight * hitable.pdf_value(origin, direction))
            .sum()
    }

    fn random(&self, origin: glam::Vec3A, rng: &mut Rng) -> glam::Vec3A {
        if self.hitables.is_empty() {
            return glam::Vec3A::X;
        }
        let index = rng.uniform_index(self.hitables.len());
        self.hitables[index].random(origin, rng)
    }
}
