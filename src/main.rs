use std::path::PathBuf;

use anyhow::Context;
use structopt::StructOpt;

use tiled_path_tracer::{
    core::rng::Rng,
    renderer::{RenderConfig, TileRenderer},
    scenes::SceneKind,
};

/// Render a built-in scene with a tile-parallel Monte Carlo path tracer.
#[derive(StructOpt)]
struct Opt {
    /// number of worker threads, defaults to the number of logical CPUs
    #[structopt(short = "j", long = "num-workers")]
    num_workers: Option<usize>,
    /// output image width
    #[structopt(short = "x", long = "width", default_value = "500")]
    width: u32,
    /// output image height
    #[structopt(short = "y", long = "height", default_value = "500")]
    height: u32,
    /// samples per pixel
    #[structopt(short = "s", long = "samples", default_value = "100")]
    samples: u32,
    /// base seed for reproducible output
    #[structopt(long)]
    seed: Option<u64>,
    /// built-in scene, `cornell` or `lit-sphere`
    #[structopt(long, default_value = "cornell")]
    scene: SceneKind,
    /// output file; `.ppm` writes plain PPM, other extensions go through `image`.
    /// Plain PPM goes to stdout when omitted
    #[structopt(short = "o", long = "output", parse(from_os_str))]
    output: Option<PathBuf>,
    /// hide the progress bar
    #[structopt(short = "q", long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opt = Opt::from_args();
    let config = RenderConfig {
        width: opt.width,
        height: opt.height,
        samples: opt.samples,
        num_workers: opt.num_workers.unwrap_or_else(num_cpus::get),
        seed: opt.seed,
        show_progress: !opt.quiet,
    };
    config.validate()?;

    let mut rng = Rng::from_seed_or_entropy(config.scene_seed());
    let scene = opt
        .scene
        .build(config.aspect(), &mut rng)
        .with_context(|| format!("failed to build scene {:?}", opt.scene))?;

    let begin_time = std::time::Instant::now();
    let film = TileRenderer::default().render(&scene, &config)?;
    log::info!("finished, time used: {:?}", begin_time.elapsed());

    match &opt.output {
        Some(path) => film.save(path)?,
        None => {
            let stdout = std::io::stdout();
            film.write_ppm(std::io::BufWriter::new(stdout.lock()))
                .context("failed to write image to stdout")?;
        }
    }
    Ok(())
}
