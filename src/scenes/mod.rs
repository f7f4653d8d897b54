use std::{str::FromStr, sync::Arc};

use crate::{
    camera::{CameraParams, PerspectiveCamera},
    core::{color::Color, rng::Rng, scene::Scene},
    material::{Dielectric, DiffuseLight, Lambertian, Material},
    primitive::{AxisRect, BvhNode, Cuboid, Hitable, HitableList, Sphere},
    texture::ConstantTex,
};

/// Built-in scenes selectable from the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SceneKind {
    Cornell,
    LitSphere,
}

impl SceneKind {
    pub fn build(self, aspect: f32, rng: &mut Rng) -> anyhow::Result<Scene> {
        match self {
            SceneKind::Cornell => cornell_box(aspect, rng),
            SceneKind::LitSphere => lit_sphere(aspect, rng),
        }
    }
}

impl FromStr for SceneKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "cornell" => Ok(SceneKind::Cornell),
            "lit-sphere" => Ok(SceneKind::LitSphere),
            _ => anyhow::bail!("unknown scene '{}', expected 'cornell' or 'lit-sphere'", s),
        }
    }
}

fn diffuse(color: Color) -> Arc<Material> {
    Arc::new(Lambertian::new(Arc::new(ConstantTex::new(color).into())).into())
}

fn emitter(color: Color) -> Arc<Material> {
    Arc::new(DiffuseLight::new(Arc::new(ConstantTex::new(color).into())).into())
}

/// The 555-unit Cornell box with a glass sphere and a white box, lit by a
/// ceiling panel.
pub fn cornell_box(aspect: f32, rng: &mut Rng) -> anyhow::Result<Scene> {
    let red = diffuse(Color::new(0.65, 0.05, 0.05));
    let white = diffuse(Color::gray(0.73));
    let green = diffuse(Color::new(0.12, 0.45, 0.15));
    let light = emitter(Color::gray(15.0));
    let glass: Arc<Material> = Arc::new(Dielectric::new(1.5).into());

    let ceiling_light = AxisRect::xz(213.0, 343.0, 227.0, 332.0, 554.0, light).flip();
    let glass_sphere = Sphere::new(glam::Vec3A::new(190.0, 90.0, 190.0), 90.0, glass);

    let mut primitives: Vec<Arc<Hitable>> = vec![
        Arc::new(AxisRect::yz(0.0, 555.0, 0.0, 555.0, 555.0, green).flip().into()),
        Arc::new(AxisRect::yz(0.0, 555.0, 0.0, 555.0, 0.0, red).into()),
        Arc::new(ceiling_light.clone().into()),
        Arc::new(AxisRect::xz(0.0, 555.0, 0.0, 555.0, 555.0, white.clone()).flip().into()),
        Arc::new(AxisRect::xz(0.0, 555.0, 0.0, 555.0, 0.0, white.clone()).into()),
        Arc::new(AxisRect::xy(0.0, 555.0, 0.0, 555.0, 555.0, white.clone()).flip().into()),
        Arc::new(glass_sphere.clone().into()),
        Arc::new(
            Cuboid::new(
                glam::Vec3A::new(265.0, 0.0, 295.0),
                glam::Vec3A::new(430.0, 330.0, 460.0),
                white,
            )
            .into(),
        ),
    ];
    let num_primitives = primitives.len();
    let world = BvhNode::new(&mut primitives, 0.0, 1.0, rng)?;

    let lights = HitableList::from_hitables(vec![ceiling_light.into(), glass_sphere.into()]);
    log::info!(
        "cornell box: {} primitives, {} light targets",
        num_primitives,
        lights.len()
    );

    let camera = PerspectiveCamera::new(CameraParams {
        time1: 1.0,
        ..CameraParams::pinhole(
            glam::Vec3A::new(278.0, 278.0, -800.0),
            glam::Vec3A::new(278.0, 278.0, 0.0),
            glam::Vec3A::Y,
            40.0,
            aspect,
        )
    });

    Ok(Scene::new(camera.into(), world.into(), Some(lights.into())))
}

/// A unit diffuse sphere under a 10x10 panel nine units above its top, seen
/// from straight above through a narrow lens.
pub fn lit_sphere(aspect: f32, rng: &mut Rng) -> anyhow::Result<Scene> {
    let panel = AxisRect::xz(-5.0, 5.0, -5.0, 5.0, 10.0, emitter(Color::WHITE)).flip();
    let sphere = Sphere::new(glam::Vec3A::ZERO, 1.0, diffuse(Color::gray(0.5)));

    let mut primitives: Vec<Arc<Hitable>> =
        vec![Arc::new(panel.clone().into()), Arc::new(sphere.into())];
    let world = BvhNode::new(&mut primitives, 0.0, 0.0, rng)?;
    log::info!("lit sphere: {} primitives, 1 light target", primitives.len());

    let camera = PerspectiveCamera::new(CameraParams::pinhole(
        glam::Vec3A::new(0.0, 5.0, 0.0),
        glam::Vec3A::ZERO,
        glam::Vec3A::Z,
        10.0,
        aspect,
    ));

    Ok(Scene::new(camera.into(), world.into(), Some(panel.into())))
}

/// Radiance leaving the top of the [`lit_sphere`] sphere: albedo times the
/// form factor of the panel, a parallel 10x10 square centered 9 units above.
#[cfg(test)]
pub(crate) fn lit_sphere_top_radiance() -> f64 {
    // one quadrant of the panel, a rect with a corner straight above the point
    let quadrant = |x: f64, y: f64| {
        let a = (1.0 + x * x).sqrt();
        let b = (1.0 + y * y).sqrt();
        (x / a * (y / a).atan() + y / b * (x / b).atan()) / (2.0 * std::f64::consts::PI)
    };
    let side = 5.0 / 9.0;
    0.5 * 4.0 * quadrant(side, side)
}
