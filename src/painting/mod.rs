//! Painting: the ordered dot collection for one source image
//!
//! Dots are appended by sampling a block of source pixels and taking its
//! dominant colour. Rendering and layer export only read the collection.

mod grid;
mod raster;
mod sample;

use crate::error::{BenDayError, Result};
use crate::types::{Dot, DotId};
use image::{GenericImageView, Rgb};

pub use sample::dominant_color;

/// Clustering parameters carried with a painting.
///
/// None of these are consumed yet: they are reserved for a colour
/// quantization pass that would run before layer export.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintingConfig {
    /// Target number of colour clusters
    pub cluster_count: usize,
    /// Maximum channel distance for two colours to share a cluster
    pub color_spread_tolerance: u32,
    /// Smallest dot diameter worth keeping, in source pixels
    pub minimum_dot_size: u32,
}

impl Default for PaintingConfig {
    fn default() -> Self {
        Self {
            cluster_count: 8,
            color_spread_tolerance: 0,
            minimum_dot_size: 1,
        }
    }
}

/// A Ben-Day dot rendering of one source image
#[derive(Debug, Clone)]
pub struct Painting {
    dots: Vec<Dot>,
    config: PaintingConfig,
    /// (height, width) of the source raster in pixels
    dimensions: (u32, u32),
}

impl Painting {
    pub fn new(config: PaintingConfig, dimensions: (u32, u32)) -> Self {
        Self {
            dots: Vec::new(),
            config,
            dimensions,
        }
    }

    pub fn config(&self) -> &PaintingConfig {
        &self.config
    }

    /// (height, width) of the source raster
    pub fn dimensions(&self) -> (u32, u32) {
        self.dimensions
    }

    /// All dots in sampling order
    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    pub fn dot(&self, id: DotId) -> Option<&Dot> {
        self.dots.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.dots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    /// Iterate dots together with their ids
    pub fn iter(&self) -> impl Iterator<Item = (DotId, &Dot)> {
        self.dots.iter().enumerate().map(|(i, dot)| (DotId(i), dot))
    }

    /// Sample `block` and append a dot coloured with its most frequent pixel.
    pub fn add_dot<I>(&mut self, center: (i32, i32), diameter: u32, block: &I) -> Result<DotId>
    where
        I: GenericImageView<Pixel = Rgb<u8>>,
    {
        let color = dominant_color(block).ok_or_else(|| {
            BenDayError::precondition(format!("empty sample block for dot at {:?}", center))
        })?;
        Ok(self.push(Dot::new(diameter, center, color)))
    }

    /// Append an already sampled dot
    pub fn push(&mut self, dot: Dot) -> DotId {
        self.dots.push(dot);
        DotId(self.dots.len() - 1)
    }
}
