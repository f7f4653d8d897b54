/// mirror `v` about `n`
pub fn reflect(v: glam::Vec3A, n: glam::Vec3A) -> glam::Vec3A {
    v - 2.0 * v.dot(n) * n
}

/// Snell refraction of `v` through a surface with normal `n` facing the
/// incoming side; `None` on total internal reflection
pub fn refract(v: glam::Vec3A, n: glam::Vec3A, ni_over_nt: f32) -> Option<glam::Vec3A> {
    let uv = v.normalize();
    let dt = uv.dot(n);
    let discriminant = 1.0 - ni_over_nt * ni_over_nt * (1.0 - dt * dt);
    if discriminant > 0.0 {
        Some(ni_over_nt * (uv - n * dt) - n * discriminant.sqrt())
    } else {
        None
    }
}

pub fn fresnel_r0(ior: f32) -> f32 {
    pow2((1.0 - ior) / (1.0 + ior))
}

pub fn schlick_fresnel(ior: f32, cos: f32) -> f32 {
    let r0 = fresnel_r0(ior);
    r0 + (1.0 - r0) * pow5(1.0 - cos)
}

fn pow2(x: f32) -> f32 {
    x * x
}

fn pow5(x: f32) -> f32 {
    x * x * x * x * x
}
