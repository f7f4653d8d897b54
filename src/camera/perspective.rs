use crate::core::{ray::Ray, rng::Rng};

use super::CameraT;

/// Thin-lens pinhole camera with an open shutter interval.
pub struct PerspectiveCamera {
    eye: glam::Vec3A,
    lower_left: glam::Vec3A,
    horizontal: glam::Vec3A,
    vertical: glam::Vec3A,
    right: glam::Vec3A,
    up: glam::Vec3A,
    lens_radius: f32,
    time0: f32,
    time1: f32,
}

/// Placement and lens of a [`PerspectiveCamera`].
#[derive(Copy, Clone, Debug)]
pub struct CameraParams {
    pub eye: glam::Vec3A,
    pub look_at: glam::Vec3A,
    pub up: glam::Vec3A,
    /// vertical field of view in degrees
    pub fov: f32,
    pub aspect: f32,
    pub aperture: f32,
    pub focus_dist: f32,
    pub time0: f32,
    pub time1: f32,
}

impl CameraParams {
    /// pinhole at `eye` with an instantaneous shutter
    pub fn pinhole(
        eye: glam::Vec3A,
        look_at: glam::Vec3A,
        up: glam::Vec3A,
        fov: f32,
        aspect: f32,
    ) -> Self {
        Self {
            eye,
            look_at,
            up,
            fov,
            aspect,
            aperture: 0.0,
            focus_dist: (look_at - eye).length(),
            time0: 0.0,
            time1: 0.0,
        }
    }
}

impl PerspectiveCamera {
    pub fn new(params: CameraParams) -> Self {
        let theta = params.fov.to_radians();
        let half_height = (theta * 0.5).tan();
        let half_width = params.aspect * half_height;

        let backward = (params.eye - params.look_at).normalize();
        let right = params.up.cross(backward).normalize();
        let up = backward.cross(right);

        let focus_dist = params.focus_dist;
        let lower_left = params.eye
            - half_width * focus_dist * right
            - half_height * focus_dist * up
            - focus_dist * backward;

        Self {
            eye: params.eye,
            lower_left,
            horizontal: 2.0 * half_width * focus_dist * right,
            vertical: 2.0 * half_height * focus_dist * up,
            right,
            up,
            lens_radius: params.aperture * 0.5,
            time0: params.time0,
            time1: params.time1,
        }
    }
}

impl CameraT for PerspectiveCamera {
    fn generate_ray(&self, s: f32, t: f32, rng: &mut Rng) -> Ray {
        let offset = if self.lens_radius > 0.0 {
            let (x, y) = rng.uniform_in_disk();
            self.right * (x * self.lens_radius) + self.up * (y * self.lens_radius)
        } else {
            glam::Vec3A::ZERO
        };
        let time = if self.time1 > self.time0 {
            self.time0 + rng.uniform_1d() * (self.time1 - self.time0)
        } else {
            self.time0
        };

        let origin = self.eye + offset;
        let direction = self.lower_left + s * self.horizontal + t * self.vertical - origin;
        Ray::new(origin, direction, time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn looking_down_z() -> PerspectiveCamera {
        PerspectiveCamera::new(CameraParams::pinhole(
            glam::Vec3A::ZERO,
            -glam::Vec3A::Z,
            glam::Vec3A::Y,
            90.0,
            2.0,
        ))
    }

    #[test]
    fn center_ray_points_at_target() {
        let camera = looking_down_z();
        let mut rng = Rng::with_seed(0);
        let ray = camera.generate_ray(0.5, 0.5, &mut rng);
        assert_eq!(ray.origin, glam::Vec3A::ZERO);
        assert!(ray.direction.normalize().abs_diff_eq(-glam::Vec3A::Z, 1e-6));
        assert_eq!(ray.time, 0.0);
    }

    #[test]
    fn corners_follow_fov_and_aspect() {
        let camera = looking_down_z();
        let mut rng = Rng::with_seed(0);
        // tan(45 deg) = 1 at unit focus distance, doubled horizontally
        let lower_left = camera.generate_ray(0.0, 0.0, &mut rng).direction;
        assert!(lower_left.abs_diff_eq(glam::Vec3A::new(-2.0, -1.0, -1.0), 1e-5));
        let upper_right = camera.generate_ray(1.0, 1.0, &mut rng).direction;
        assert!(upper_right.abs_diff_eq(glam::Vec3A::new(2.0, 1.0, -1.0), 1e-5));
    }

    #[test]
    fn lens_and_shutter_sampling() {
        let camera = PerspectiveCamera::new(CameraParams {
            aperture: 0.5,
            time0: 1.0,
            time1: 2.0,
            ..CameraParams::pinhole(
                glam::Vec3A::ZERO,
                -glam::Vec3A::Z,
                glam::Vec3A::Y,
                40.0,
                1.0,
            )
        });
        let mut rng = Rng::with_seed(9);
        for _ in 0..100 {
            let ray = camera.generate_ray(0.5, 0.5, &mut rng);
            assert!(ray.origin.length() <= 0.25 + 1e-6);
            assert_abs_diff_eq!(ray.origin.z, 0.0, epsilon = 1e-6);
            assert!((1.0..=2.0).contains(&ray.time));
            // every lens sample converges on the focus point
            let focus = ray.point_at(1.0);
            assert!(focus.abs_diff_eq(-glam::Vec3A::Z, 1e-5));
        }
    }
}
