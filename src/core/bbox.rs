use crate::core::ray::Ray;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bbox {
    pub p_min: glam::Vec3A,
    pub p_max: glam::Vec3A,
}

impl Bbox {
    pub fn new(p_min: glam::Vec3A, p_max: glam::Vec3A) -> Self {
        Self { p_min, p_max }
    }

    pub fn merge(mut self, another: Bbox) -> Self {
        self.p_min = self.p_min.min(another.p_min);
        self.p_max = self.p_max.max(another.p_max);
        self
    }

    /// slab test against the open interval (t_min, t_max)
    pub fn hit(&self, ray: &Ray, mut t_min: f32, mut t_max: f32) -> bool {
        for axis in 0..3 {
            let inv_d = 1.0 / ray.direction[axis];
            let mut t0 = (self.p_min[axis] - ray.origin[axis]) * inv_d;
            let mut t1 = (self.p_max[axis] - ray.origin[axis]) * inv_d;
            if inv_d < 0.0 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_min = if t0 > t_min { t0 } else { t_min };
            t_max = if t1 < t_max { t1 } else { t_max };
            if t_max <= t_min {
                return false;
            }
        }
        true
    }

    pub fn axis_min(&self, axis: usize) -> f32 {
        self.p_min[axis]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_is_componentwise() {
        let a = Bbox::new(glam::Vec3A::new(0.0, -1.0, 2.0), glam::Vec3A::new(1.0, 1.0, 3.0));
        let b = Bbox::new(glam::Vec3A::new(-2.0, 0.0, 2.5), glam::Vec3A::new(0.5, 4.0, 5.0));
        let m = a.merge(b);
        assert_eq!(m.p_min, glam::Vec3A::new(-2.0, -1.0, 2.0));
        assert_eq!(m.p_max, glam::Vec3A::new(1.0, 4.0, 5.0));
    }

    #[test]
    fn slab_test() {
        let bbox = Bbox::new(glam::Vec3A::splat(-1.0), glam::Vec3A::splat(1.0));
        let towards = Ray::new(glam::Vec3A::new(0.0, 0.0, -5.0), glam::Vec3A::Z, 0.0);
        let away = Ray::new(glam::Vec3A::new(0.0, 0.0, -5.0), -glam::Vec3A::Z, 0.0);
        let beside = Ray::new(glam::Vec3A::new(3.0, 0.0, -5.0), glam::Vec3A::Z, 0.0);
        assert!(bbox.hit(&towards, 0.001, f32::MAX));
        assert!(!bbox.hit(&towards, 0.001, 3.0));
        assert!(!bbox.hit(&away, 0.001, f32::MAX));
        assert!(!bbox.hit(&beside, 0.001, f32::MAX));
    }
}
