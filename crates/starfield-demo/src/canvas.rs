//! Software RGBA8 canvas implementing [`DrawSurface`].

use std::path::Path;

use starfield_core::{DrawSurface, Rgb};

use crate::error::DemoError;

/// Row-major RGBA8 pixel buffer with source-over circle fills.
pub struct PixelCanvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    path: Vec<(f64, f64, f64)>,
    fill: Rgb,
    alpha: f64,
}

impl PixelCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
            path: Vec::new(),
            fill: Rgb::WHITE,
            alpha: 1.0,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[cfg(test)]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// RGBA of one pixel, or `None` outside the canvas.
    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.index(x, y);
        Some([
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ])
    }

    /// Fill every pixel with an opaque color.
    pub fn clear(&mut self, color: Rgb) {
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&[color.r, color.g, color.b, 255]);
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    fn blend(&mut self, x: u32, y: u32, color: Rgb, alpha: f64) {
        let i = self.index(x, y);
        let a = alpha.clamp(0.0, 1.0);
        for (offset, src) in [color.r, color.g, color.b].into_iter().enumerate() {
            let dst = self.pixels[i + offset] as f64;
            self.pixels[i + offset] = (src as f64 * a + dst * (1.0 - a)).round() as u8;
        }
        self.pixels[i + 3] = 255;
    }

    /// Rasterize one filled circle. Circles smaller than a pixel light the
    /// pixel under their center with alpha scaled by their area.
    fn fill_disc(&mut self, cx: f64, cy: f64, radius: f64, color: Rgb, alpha: f64) {
        if !(cx.is_finite() && cy.is_finite() && radius.is_finite()) || radius <= 0.0 {
            return;
        }

        if radius < 0.5 {
            let coverage = std::f64::consts::PI * radius * radius;
            if cx >= 0.0 && cy >= 0.0 && cx < self.width as f64 && cy < self.height as f64 {
                self.blend(cx as u32, cy as u32, color, alpha * coverage);
            }
            return;
        }

        let min_x = (cx - radius).floor().max(0.0);
        let max_x = (cx + radius).ceil().min(self.width as f64);
        let min_y = (cy - radius).floor().max(0.0);
        let max_y = (cy + radius).ceil().min(self.height as f64);
        if min_x >= max_x || min_y >= max_y {
            return;
        }

        let r2 = radius * radius;
        for y in min_y as u32..max_y as u32 {
            let py = y as f64 + 0.5 - cy;
            for x in min_x as u32..max_x as u32 {
                let px = x as f64 + 0.5 - cx;
                if px * px + py * py <= r2 {
                    self.blend(x, y, color, alpha);
                }
            }
        }
    }

    /// Encode the canvas as an RGBA8 PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>, DemoError> {
        let mut png_buf = Vec::new();
        {
            let mut encoder =
                png::Encoder::new(std::io::Cursor::new(&mut png_buf), self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header()?;
            writer.write_image_data(&self.pixels)?;
            writer.finish()?;
        }
        Ok(png_buf)
    }

    /// Write the canvas to `path` as PNG, creating parent directories.
    pub fn save_png(&self, path: &Path) -> Result<(), DemoError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.encode_png()?)?;
        Ok(())
    }
}

impl DrawSurface for PixelCanvas {
    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, _start: f64, _end: f64) {
        self.path.push((cx, cy, radius));
    }

    fn set_fill_rgba(&mut self, color: Rgb, alpha: f64) {
        self.fill = color;
        self.alpha = alpha;
    }

    fn fill(&mut self) {
        let (color, alpha) = (self.fill, self.alpha);
        let path = std::mem::take(&mut self.path);
        for &(cx, cy, radius) in &path {
            self.fill_disc(cx, cy, radius, color, alpha);
        }
        self.path = path;
    }
}
