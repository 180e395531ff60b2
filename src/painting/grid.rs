use super::Painting;
use crate::error::{BenDayError, Result};
use image::{GenericImageView, Rgb};

impl Painting {
    /// Tile the image into `cell` x `cell` blocks and add one dot per block.
    ///
    /// Tiles are visited row by row. Each dot is centred on its tile with
    /// diameter `cell`; tiles on the right and bottom edges are clipped to
    /// the image and sampled as-is. Returns the number of dots added.
    pub fn sample_grid<I>(&mut self, image: &I, cell: u32) -> Result<usize>
    where
        I: GenericImageView<Pixel = Rgb<u8>>,
    {
        if cell == 0 {
            return Err(BenDayError::precondition("cell size must be positive"));
        }

        let (width, height) = image.dimensions();
        let half = (cell / 2) as i32;
        let mut added = 0;
        let mut clipped = 0;

        for y0 in (0..height).step_by(cell as usize) {
            for x0 in (0..width).step_by(cell as usize) {
                let w = cell.min(width - x0);
                let h = cell.min(height - y0);
                if w < cell || h < cell {
                    clipped += 1;
                }

                let block = image.view(x0, y0, w, h);
                self.add_dot((x0 as i32 + half, y0 as i32 + half), cell, &*block)?;
                added += 1;
            }
        }

        if clipped > 0 {
            log::warn!(
                "{} of {} tiles clipped by the image edge ({}x{} image, cell {})",
                clipped,
                added,
                width,
                height,
                cell
            );
        }
        log::debug!("Sampled {} dots from {}x{} image", added, width, height);

        Ok(added)
    }
}
