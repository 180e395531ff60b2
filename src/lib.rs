//! # ben-day
//!
//! Turn an image into Ben-Day dot art and the layered sheets needed to
//! laser-cut it.
//!
//! ## Features
//!
//! - **Sampling**: every dot takes the most frequent colour of its source block
//! - **Preview**: raster rendering of the dot field
//! - **Layer export**: one inverse-mask DXF per colour with registration holes
//!
//! ## Example
//!
//! ```rust,ignore
//! use ben_day::{ExportOptions, Painting, PaintingConfig};
//!
//! let img = image::open("input.png").unwrap().to_rgb8();
//! let mut painting = Painting::new(PaintingConfig::default(), (img.height(), img.width()));
//! painting.sample_grid(&img, 10).unwrap();
//! painting.make_image("preview.png").unwrap();
//! painting.make_dxfs("out/art", &ExportOptions::new(600.0, 400.0)).unwrap();
//! ```

pub mod error;
pub mod layers;
pub mod painting;
pub mod types;

// Re-export commonly used items
pub use error::{BenDayError, Result};
pub use layers::{ColorLayer, CutShape, ExportOptions, LayerSheet, Layout, layer_path};
pub use painting::{Painting, PaintingConfig, dominant_color};
pub use types::{Dot, DotColor, DotId};
