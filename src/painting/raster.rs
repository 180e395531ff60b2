//! Raster preview of a painting

use super::Painting;
use crate::error::Result;
use crate::types::Dot;
use image::{Rgb, RgbImage};
use std::path::Path;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

impl Painting {
    /// Draw every dot, in sampling order, onto a white canvas of the source size
    pub fn render(&self) -> RgbImage {
        let (height, width) = self.dimensions;
        let mut canvas = RgbImage::from_pixel(width, height, BACKGROUND);
        for dot in &self.dots {
            fill_disk(&mut canvas, dot);
        }
        canvas
    }

    /// Render and save the preview; the format follows the file extension
    pub fn make_image(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.render().save(path)?;
        log::info!("Wrote preview {}", path.display());
        Ok(())
    }
}

/// Fill the disk whose bounding box is `center ± radius` on both axes.
/// Pixels outside the canvas are skipped.
fn fill_disk(canvas: &mut RgbImage, dot: &Dot) {
    let r = dot.pixel_radius() as i64;
    let (cx, cy) = (dot.center.0 as i64, dot.center.1 as i64);
    let (w, h) = (canvas.width() as i64, canvas.height() as i64);
    let color: Rgb<u8> = dot.color.into();

    for y in (cy - r).max(0)..=(cy + r).min(h - 1) {
        let dy = y - cy;
        for x in (cx - r).max(0)..=(cx + r).min(w - 1) {
            let dx = x - cx;
            if dx * dx + dy * dy <= r * r {
                canvas.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}
