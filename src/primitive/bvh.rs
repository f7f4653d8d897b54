use std::sync::Arc;

use anyhow::Context;

use crate::core::{bbox::Bbox, hit_record::HitRecord, ray::Ray, rng::Rng};

use super::{Hitable, HitableT, LightTargetT};

/// Binary BVH node. A node built over a single primitive has that
/// primitive as both children.
pub struct BvhNode {
    left: Arc<Hitable>,
    right: Arc<Hitable>,
    bbox: Bbox,
}

impl BvhNode {
    /// Builds a hierarchy over `primitives`, reordering the slice in place.
    /// Fails if the slice is empty or any primitive has no bounding box.
    pub fn new(
        primitives: &mut [Arc<Hitable>],
        time0: f32,
        time1: f32,
        rng: &mut Rng,
    ) -> anyhow::Result<Self> {
        if primitives.is_empty() {
            anyhow::bail!("cannot build a BVH over an empty primitive list");
        }
        for (index, prim) in primitives.iter().enumerate() {
            if prim.bbox(time0, time1).is_none() {
                anyhow::bail!(
                    "primitive #{} ({}) has no bounding box and cannot be put in a BVH",
                    index,
                    prim.kind()
                );
            }
        }
        let node = Self::build(primitives, time0, time1, rng, 0)?;
        log::debug!(
            "built BVH over {} primitives, depth {}, bbox {:?}",
            primitives.len(),
            node.depth(),
            node.bbox
        );
        Ok(node)
    }

    fn build(
        primitives: &mut [Arc<Hitable>],
        time0: f32,
        time1: f32,
        rng: &mut Rng,
        depth: u32,
    ) -> anyhow::Result<Self> {
        let axis = rng.uniform_index(3);
        let mut keyed: Vec<(f32, Arc<Hitable>)> = primitives
            .iter()
            .map(|prim| {
                let key = prim
                    .bbox(time0, time1)
                    .map_or(f32::MAX, |bbox| bbox.axis_min(axis));
                (key, prim.clone())
            })
            .collect();
        keyed.sort_by(|(a, _), (b, _)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        for (slot, (_, prim)) in primitives.iter_mut().zip(keyed) {
            *slot = prim;
        }

        let (left, right) = match primitives.len() {
            1 => (primitives[0].clone(), primitives[0].clone()),
            2 => (primitives[0].clone(), primitives[1].clone()),
            len => {
                let (lower, upper) = primitives.split_at_mut(len / 2);
                let left = Self::build(lower, time0, time1, rng, depth + 1)?;
                let right = Self::build(upper, time0, time1, rng, depth + 1)?;
                (Arc::new(left.into()), Arc::new(right.into()))
            }
        };

        let left_bbox = left.bbox(time0, time1).with_context(|| {
            format!("unbounded left child ({}) at BVH depth {}", left.kind(), depth)
        })?;
        let right_bbox = right.bbox(time0, time1).with_context(|| {
            format!("unbounded right child ({}) at BVH depth {}", right.kind(), depth)
        })?;

        Ok(Self {
            left,
            right,
            bbox: left_bbox.merge(right_bbox),
        })
    }
}

impl BvhNode {
    /// number of node levels, 1 for a node whose children are both leaves
    pub fn depth(&self) -> u32 {
        let child_depth = |child: &Hitable| match child {
            Hitable::BvhNode(node) => node.depth(),
            _ => 0,
        };
        1 + child_depth(&*self.left).max(child_depth(&*self.right))
    }
}

impl HitableT for BvhNode {
    fn hit(&self, ray: &Ray, t_min: f32, t_max: f32) -> Option<HitRecord<'_>> {
        if !self.bbox.hit(ray, t_min, t_max) {
            return None;
        }

        let left = self.left.hit(ray, t_min, t_max);
        let right = self.right.hit(ray, t_min, t_max);
        match (left, right) {
            (Some(l), Some(r)) => {
                if l.t < r.t {
                    Some(l)
                } else {
                    Some(r)
                }
            }
            (Some(l), None) => Some(l),
            (None, r) => r,
        }
    }

    fn bbox(&self, _time0: f32, _time1: f32) -> Option<Bbox> {
        Some(self.bbox)
    }
}

/// BVH nodes are never sampled as lights; light targets are passed
/// to the integrator separately.
impl LightTargetT for BvhNode {
    fn pdf_value(&self, _origin: glam::Vec3A, _direction: glam::Vec3A) -> f32 {
        0.0
    }

    fn random(&self, _origin: glam::Vec3A, _rng: &mut Rng) -> glam::Vec3A {
        glam::Vec3A::X
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        material::{Lambertian, Material},
        primitive::{AxisRect, Cuboid, HitableList, Sphere},
        texture::ConstantTex,
    };
    use approx::assert_abs_diff_eq;

    fn random_scene(rng: &mut Rng, count: usize) -> Vec<Arc<Hitable>> {
        let materials: Vec<Arc<Material>> = (0..4)
            .map(|i| {
                Arc::new(
                    Lambertian::new(Arc::new(ConstantTex::gray(0.2 * i as f32).into())).into(),
                )
            })
            .collect();
        (0..count)
            .map(|i| {
                let center = (glam::Vec3A::new(rng.uniform_1d(), rng.uniform_1d(), rng.uniform_1d())
                    - glam::Vec3A::splat(0.5))
                    * 20.0;
                let size = 0.2 + rng.uniform_1d();
                let material = materials[i % materials.len()].clone();
                let hitable: Hitable = match i % 3 {
                    0 => Sphere::new(center, size, material).into(),
                    1 => Cuboid::new(center, center + glam::Vec3A::splat(size), material).into(),
                    _ => AxisRect::xz(
                        center.x,
                        center.x + size,
                        center.z,
                        center.z + size,
                        center.y,
                        material,
                    )
                    .into(),
                };
                Arc::new(hitable)
            })
            .collect()
    }

    fn direct_union(primitives: &[Arc<Hitable>]) -> Bbox {
        primitives
            .iter()
            .map(|prim| prim.bbox(0.0, 1.0).expect("test primitives are bounded"))
            .reduce(|acc, bbox| acc.merge(bbox))
            .expect("test scene is not empty")
    }

    #[test]
    fn bbox_equals_union_for_any_seed() {
        let mut scene_rng = Rng::with_seed(100);
        let mut primitives = random_scene(&mut scene_rng, 37);
        let expected = direct_union(&primitives);
        for seed in 0..8 {
            let mut rng = Rng::with_seed(seed);
            let bvh = BvhNode::new(&mut primitives, 0.0, 1.0, &mut rng).expect("valid primitives");
            let bbox = bvh.bbox(0.0, 1.0).expect("bvh is bounded");
            assert!(bbox.p_min.abs_diff_eq(expected.p_min, 1e-5));
            assert!(bbox.p_max.abs_diff_eq(expected.p_max, 1e-5));
        }
    }

    #[test]
    fn matches_linear_scan() {
        let mut rng = Rng::with_seed(2024);
        let mut primitives = random_scene(&mut rng, 60);
        let list = HitableList::new(primitives.clone());
        let bvh = BvhNode::new(&mut primitives, 0.0, 1.0, &mut rng).expect("valid primitives");

        let mut hits = 0;
        for _ in 0..500 {
            let origin = rng.uniform_on_sphere() * 30.0;
            let target = (glam::Vec3A::new(rng.uniform_1d(), rng.uniform_1d(), rng.uniform_1d())
                - glam::Vec3A::splat(0.5))
                * 16.0;
            let ray = Ray::new(origin, target - origin, 0.0);
            let expected = list.hit(&ray, 0.001, f32::MAX);
            let actual = bvh.hit(&ray, 0.001, f32::MAX);
            match (expected, actual) {
                (Some(e), Some(a)) => {
                    hits += 1;
                    assert_abs_diff_eq!(e.t, a.t, epsilon = 1e-5);
                    assert!(e.position.abs_diff_eq(a.position, 1e-3));
                    assert_eq!(e.normal, a.normal);
                    assert!(std::ptr::eq(e.material, a.material));
                }
                (None, None) => {}
                (e, a) => panic!(
                    "bvh and list disagree: list hit {}, bvh hit {}",
                    e.is_some(),
                    a.is_some()
                ),
            }
        }
        assert!(hits > 50);
    }

    #[test]
    fn single_and_pair_leaves() {
        let mut rng = Rng::with_seed(1);
        let mut one = random_scene(&mut rng, 1);
        let bvh = BvhNode::new(&mut one, 0.0, 1.0, &mut rng).expect("valid primitives");
        assert!(Arc::ptr_eq(&bvh.left, &bvh.right));

        let mut two = random_scene(&mut rng, 2);
        let bvh = BvhNode::new(&mut two, 0.0, 1.0, &mut rng).expect("valid primitives");
        assert!(!Arc::ptr_eq(&bvh.left, &bvh.right));
    }

    #[test]
    fn sorts_by_box_minimum_and_halves() {
        let gray: Arc<Material> =
            Arc::new(Lambertian::new(Arc::new(ConstantTex::gray(0.5).into())).into());
        // minima ordered the same way along every axis
        let order = [7, 2, 9, 0, 4, 8, 1, 6, 3, 5];
        let mut primitives: Vec<Arc<Hitable>> = order
            .iter()
            .map(|&i| {
                let center = glam::Vec3A::splat(i as f32 * 3.0);
                Arc::new(Sphere::new(center, 1.0, gray.clone()).into())
            })
            .collect();
        let mut rng = Rng::with_seed(6);
        let bvh = BvhNode::new(&mut primitives, 0.0, 1.0, &mut rng).expect("valid primitives");

        let minima: Vec<f32> = primitives
            .iter()
            .map(|prim| prim.bbox(0.0, 1.0).expect("bounded").p_min.x)
            .collect();
        assert!(minima.windows(2).all(|pair| pair[0] < pair[1]), "{:?}", minima);
        // 10 -> 5 -> 3 -> 2
        assert_eq!(bvh.depth(), 4);
    }

    #[test]
    fn depth_of_midpoint_split() {
        let mut rng = Rng::with_seed(1);
        for &(count, depth) in [(1, 1), (2, 1), (3, 2), (5, 3), (37, 6)].iter() {
            let mut primitives = random_scene(&mut rng, count);
            let bvh = BvhNode::new(&mut primitives, 0.0, 1.0, &mut rng).expect("valid primitives");
            assert_eq!(bvh.depth(), depth, "{} primitives", count);
        }
    }

    #[test]
    fn rejects_unbounded_primitive() {
        let mut rng = Rng::with_seed(1);
        let mut primitives = random_scene(&mut rng, 3);
        primitives.push(Arc::new(HitableList::new(vec![]).into()));
        let err = match BvhNode::new(&mut primitives, 0.0, 1.0, &mut rng) {
            Ok(_) => panic!("unbounded primitive must be rejected"),
            Err(err) => err,
        };
        assert!(err.to_string().contains("#3"));
        assert!(err.to_string().contains("list"));

        assert!(BvhNode::new(&mut [], 0.0, 1.0, &mut rng).is_err());
    }
}
