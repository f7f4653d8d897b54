use crossbeam::channel;

use crate::{
    camera::CameraT,
    core::{
        color::Color,
        film::{self, Film, Strip},
        rng::Rng,
        scene::Scene,
    },
};

use super::{util, PathTracer, RenderConfig};

enum Job<'a> {
    Strip(Strip<'a>),
    Stop,
}

/// Renders a scene strip by strip on a fixed pool of worker threads.
pub struct TileRenderer {
    integrator: PathTracer,
}

impl TileRenderer {
    pub fn new(integrator: PathTracer) -> Self {
        Self { integrator }
    }

    pub fn render(&self, scene: &Scene, config: &RenderConfig) -> anyhow::Result<Film> {
        config.validate()?;
        if scene.lights().is_none() {
            log::warn!("scene has no light targets, sampling material lobes only");
        }
        log::info!(
            "rendering {}x{} at {} spp on {} workers",
            config.width,
            config.height,
            config.samples,
            config.num_workers
        );

        let mut film = Film::new(config.width, config.height);
        let progress_bar =
            util::render_progress_bar(util::num_strips(config.height), config.show_progress);

        let strips: Vec<Strip<'_>> = film.strips_mut(util::STRIP_HEIGHT).collect();

        let scope_result = crossbeam::scope(|scope| -> anyhow::Result<()> {
            let (sender, receiver) = channel::bounded(config.num_workers);

            let mut workers = Vec::with_capacity(config.num_workers);
            for worker in 0..config.num_workers {
                let receiver: channel::Receiver<Job<'_>> = receiver.clone();
                let progress_bar = progress_bar.clone();
                workers.push(scope.spawn(move |_| {
                    while let Ok(Job::Strip(mut strip)) = receiver.recv() {
                        log::debug!("worker {} takes strip {}", worker, strip.index);
                        self.render_strip(scene, config, &mut strip);
                        log::debug!("worker {} finished strip {}", worker, strip.index);
                        progress_bar.inc(1);
                    }
                    log::debug!("worker {} stops", worker);
                }));
            }
            drop(receiver);

            for strip in strips {
                sender
                    .send(Job::Strip(strip))
                    .map_err(|_| anyhow::anyhow!("all render workers exited early"))?;
            }
            for _ in 0..config.num_workers {
                sender
                    .send(Job::Stop)
                    .map_err(|_| anyhow::anyhow!("all render workers exited early"))?;
            }

            for (worker, handle) in workers.into_iter().enumerate() {
                if handle.join().is_err() {
                    anyhow::bail!("render worker {} panicked", worker);
                }
            }
            Ok(())
        });
        progress_bar.finish_and_clear();

        match scope_result {
            Ok(result) => result?,
            Err(_) => anyhow::bail!("render worker panicked"),
        }
        Ok(film)
    }

    fn render_strip(&self, scene: &Scene, config: &RenderConfig, strip: &mut Strip<'_>) {
        let mut rng = Rng::from_seed_or_entropy(config.strip_seed(strip.index));
        let camera = scene.camera();
        let width_inv = 1.0 / config.width as f32;
        let height_inv = 1.0 / config.height as f32;
        let samples_inv = 1.0 / config.samples as f32;

        for row in 0..strip.rows() {
            // image row 0 is the top of the frame, camera t = 0 is the bottom
            let y = config.height - 1 - (strip.row_start + row);
            for x in 0..strip.width {
                let mut color = Color::BLACK;
                for _ in 0..config.samples {
                    let (jitter_x, jitter_y) = rng.uniform_2d();
                    let s = (x as f32 + jitter_x) * width_inv;
                    let t = (y as f32 + jitter_y) * height_inv;
                    let ray = camera.generate_ray(s, t, &mut rng);
                    color += self.integrator.radiance(scene, &ray, &mut rng);
                }
                strip.set_pixel(x, row, film::color_to_rgb(color * samples_inv));
            }
        }
    }
}

impl Default for TileRenderer {
    fn default() -> Self {
        Self::new(PathTracer::default())
    }
}
