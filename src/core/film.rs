use std::{io::Write, path::Path};

use anyhow::Context;
use image::{Rgb, RgbImage};

use crate::core::color::Color;

/// 8-bit RGB framebuffer, row 0 is the top scanline.
pub struct Film {
    image: RgbImage,
}

/// A run of whole rows borrowed mutably out of a [`Film`].
pub struct Strip<'a> {
    pub index: usize,
    pub row_start: u32,
    pub width: u32,
    pixels: &'a mut [u8],
}

impl Film {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbImage::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        self.image.get_pixel(x, y).0
    }

    /// Splits the film into disjoint strips of `rows` rows each, the last one
    /// possibly shorter.
    pub fn strips_mut(&mut self, rows: u32) -> impl Iterator<Item = Strip<'_>> {
        let width = self.image.width();
        let rows = rows.max(1);
        let stride = (width as usize * 3 * rows as usize).max(1);
        self.image
            .chunks_mut(stride)
            .enumerate()
            .map(move |(index, pixels)| Strip {
                index,
                row_start: index as u32 * rows,
                width,
                pixels,
            })
    }

    /// Plain PPM (P3), one pixel per line from the top row down.
    pub fn write_ppm<W: Write>(&self, mut writer: W) -> anyhow::Result<()> {
        writeln!(writer, "P3")?;
        writeln!(writer, "{} {}", self.width(), self.height())?;
        writeln!(writer, "255")?;
        for pixel in self.image.pixels() {
            let Rgb([r, g, b]) = *pixel;
            writeln!(writer, "{} {} {}", r, g, b)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Writes P3 for a `.ppm` extension and lets `image` pick the encoder
    /// otherwise.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        let is_ppm = path
            .extension()
            .map_or(false, |ext| ext.eq_ignore_ascii_case("ppm"));
        if is_ppm {
            let file = std::fs::File::create(path)
                .with_context(|| format!("failed to create '{}'", path.display()))?;
            self.write_ppm(std::io::BufWriter::new(file))
                .with_context(|| format!("failed to write '{}'", path.display()))
        } else {
            self.image
                .save(path)
                .with_context(|| format!("failed to save image to '{}'", path.display()))
        }
    }
}

impl Strip<'_> {
    pub fn rows(&self) -> u32 {
        if self.width == 0 {
            0
        } else {
            (self.pixels.len() / (self.width as usize * 3)) as u32
        }
    }

    /// `row` is relative to the strip
    pub fn set_pixel(&mut self, x: u32, row: u32, rgb: [u8; 3]) {
        let offset = (row as usize * self.width as usize + x as usize) * 3;
        self.pixels[offset..offset + 3].copy_from_slice(&rgb);
    }
}

/// Gamma 2 then quantize, with `255.99` so that 1.0 lands on 255.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let quantize = |c: f32| (255.99 * c.max(0.0).sqrt()).min(255.0) as u8;
    [quantize(color.r), quantize(color.g), quantize(color.b)]
}
