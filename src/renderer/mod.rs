mod pt;
mod tile;
mod util;

pub use pt::*;
pub use tile::*;

/// Output and sampling settings of one render.
#[derive(Clone, Debug)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub samples: u32,
    pub num_workers: usize,
    /// base seed, strip `i` draws from `seed + i`
    pub seed: Option<u64>,
    pub show_progress: bool,
}

impl RenderConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.width == 0 || self.height == 0 {
            anyhow::bail!("image size must be positive, got {}x{}", self.width, self.height);
        }
        if self.samples == 0 {
            anyhow::bail!("samples per pixel must be positive");
        }
        if self.num_workers == 0 {
            anyhow::bail!("worker count must be positive");
        }
        Ok(())
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// seed of the handle rendering strip `index`
    pub fn strip_seed(&self, index: usize) -> Option<u64> {
        self.seed.map(|seed| seed.wrapping_add(index as u64))
    }

    /// seed of the scene-construction handle, past the last strip seed
    pub fn scene_seed(&self) -> Option<u64> {
        self.seed
            .map(|seed| seed.wrapping_add(util::num_strips(self.height) as u64))
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
            samples: 100,
            num_workers: num_cpus::get(),
            seed: None,
            show_progress: false,
        }
    }
}
