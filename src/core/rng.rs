use rand::SeedableRng;

pub struct Rng {
    rng: rand::rngs::SmallRng,
}

impl Rng {
    pub fn new() -> Self {
        Self {
            rng: rand::rngs::SmallRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: rand::rngs::SmallRng::seed_from_u64(seed),
        }
    }

    /// seeded when `seed` is given, from entropy otherwise
    pub fn from_seed_or_entropy(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    pub fn uniform_1d(&mut self) -> f32 {
        rand::Rng::gen(&mut self.rng)
    }

    pub fn uniform_2d(&mut self) -> (f32, f32) {
        (self.uniform_1d(), self.uniform_1d())
    }

    /// uniform index in `0..len`, `len` must be positive
    pub fn uniform_index(&mut self, len: usize) -> usize {
        let index = self.uniform_1d() * len as f32;
        (index as usize).min(len - 1)
    }

    pub fn uniform_in_disk(&mut self) -> (f32, f32) {
        loop {
            let (rand_x, rand_y) = self.uniform_2d();
            let x = rand_x * 2.0 - 1.0;
            let y = rand_y * 2.0 - 1.0;
            if x * x + y * y < 1.0 {
                return (x, y);
            }
        }
    }

    pub fn uniform_in_sphere(&mut self) -> glam::Vec3A {
        loop {
            let (rand_x, rand_y) = self.uniform_2d();
            let p = glam::Vec3A::new(rand_x, rand_y, self.uniform_1d()) * 2.0 - glam::Vec3A::ONE;
            if p.length_squared() < 1.0 {
                return p;
            }
        }
    }

    #[cfg(test)]
    pub fn uniform_on_sphere(&mut self) -> glam::Vec3A {
        let (rand_x, rand_y) = self.uniform_2d();
        let phi = rand_x * 2.0 * std::f32::consts::PI;
        let (sin_phi, cos_phi) = phi.sin_cos();
        let cos_theta = 1.0 - 2.0 * rand_y;
        let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();
        glam::Vec3A::new(sin_theta * cos_phi, sin_theta * sin_phi, cos_theta)
    }

    pub fn cosine_weighted_on_hemisphere(&mut self) -> glam::Vec3A {
        let (rand_x, rand_y) = self.uniform_2d();
        let phi = rand_x * 2.0 * std::f32::consts::PI;
        let (sin_phi, cos_phi) = phi.sin_cos();
        let sin_theta_sqr = rand_y;
        let sin_theta = sin_theta_sqr.sqrt();
        let cos_theta = (1.0 - sin_theta_sqr).sqrt();
        glam::Vec3A::new(sin_theta * cos_phi, sin_theta * sin_phi, cos_theta)
    }

    /// uniform direction (local, +z up) inside the cone subtended by a sphere
    /// of `radius` whose center is `dist_sqr` away
    pub fn uniform_in_cone_to_sphere(&mut self, radius: f32, dist_sqr: f32) -> glam::Vec3A {
        let (rand_x, rand_y) = self.uniform_2d();
        let cos_theta_max = (1.0 - radius * radius / dist_sqr).max(0.0).sqrt();
        let cos_theta = 1.0 + rand_y * (cos_theta_max - 1.0);
        let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();
        let phi = rand_x * 2.0 * std::f32::consts::PI;
        let (sin_phi, cos_phi) = phi.sin_cos();
        glam::Vec3A::new(sin_theta * cos_phi, sin_theta * sin_phi, cos_theta)
    }
}

impl Default for Rng {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Rng::with_seed(42);
        let mut b = Rng::with_seed(42);
        for _ in 0..16 {
            assert_eq!(a.uniform_1d(), b.uniform_1d());
        }
    }

    #[test]
    fn cone_samples_stay_inside_cone() {
        let mut rng = Rng::with_seed(7);
        let cos_theta_max = (1.0f32 - 1.0 / 16.0).sqrt();
        for _ in 0..1000 {
            let d = rng.uniform_in_cone_to_sphere(1.0, 16.0);
            assert!(d.z >= cos_theta_max - 1e-5);
            assert!((d.length() - 1.0).abs() < 1e-4);
        }
    }
}
