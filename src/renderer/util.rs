/// Rows per unit of work.
pub const STRIP_HEIGHT: u32 = 10;

pub fn num_strips(height: u32) -> u32 {
    (height + STRIP_HEIGHT - 1) / STRIP_HEIGHT
}

pub fn render_progress_bar(num_strips: u32, visible: bool) -> indicatif::ProgressBar {
    if !visible {
        return indicatif::ProgressBar::hidden();
    }
    let progress_bar = indicatif::ProgressBar::new(num_strips as u64);
    progress_bar.set_style(
        indicatif::ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} strips (eta: {eta})")
            .progress_chars("#>-"),
    );
    progress_bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_count_keeps_partial_strip() {
        assert_eq!(num_strips(1), 1);
        assert_eq!(num_strips(10), 1);
        assert_eq!(num_strips(11), 2);
        assert_eq!(num_strips(500), 50);
    }
}
