//! Dominant colour extraction for a sample block

use crate::types::DotColor;
use image::{GenericImageView, Rgb};
use indexmap::IndexMap;

/// Most frequent exact colour in `block`, or `None` for an empty block.
///
/// Pixels are scanned in row-major order; on a tie the colour seen first wins.
pub fn dominant_color<I>(block: &I) -> Option<DotColor>
where
    I: GenericImageView<Pixel = Rgb<u8>>,
{
    // insertion order is first-seen order
    let mut counts: IndexMap<DotColor, usize> = IndexMap::new();
    for (_, _, pixel) in block.pixels() {
        *counts.entry(DotColor::from(pixel)).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .fold(None::<(DotColor, usize)>, |best, (color, count)| match best {
            Some((_, best_count)) if count <= best_count => best,
            _ => Some((color, count)),
        })
        .map(|(color, _)| color)
}
