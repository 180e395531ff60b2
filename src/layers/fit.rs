//! Fit the dot field into the physical sheet
//!
//! The dot field is scaled uniformly so that it fills the sheet minus the
//! border on the binding axis; leftover space on the other axis is split
//! evenly between the two borders on that axis (letterboxing).

use super::ExportOptions;
use crate::error::{BenDayError, Result};
use crate::types::Dot;

/// Tight bounding extent of the dot field, in source pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub max_x: f64,
    pub max_y: f64,
}

impl Extent {
    /// Largest `center + radius` on each axis, never below zero
    pub fn of(dots: &[Dot]) -> Self {
        let mut extent = Extent {
            max_x: 0.0,
            max_y: 0.0,
        };
        for dot in dots {
            let radius = dot.radius();
            extent.max_x = extent.max_x.max(dot.center.0 as f64 + radius);
            extent.max_y = extent.max_y.max(dot.center.1 as f64 + radius);
        }
        extent
    }
}

/// Uniform scale plus per-axis borders placing the dot field on the sheet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub extent: Extent,
    pub scale: f64,
    pub border_x: f64,
    pub border_y: f64,
}

impl Layout {
    pub fn fit(extent: Extent, options: &ExportOptions) -> Result<Self> {
        let border = options.border;
        if !positive(border) {
            return Err(BenDayError::precondition(format!(
                "border must be positive and finite, got {}",
                border
            )));
        }
        if !positive(options.width) || !positive(options.height) {
            return Err(BenDayError::precondition(format!(
                "sheet dimensions must be positive and finite, got {} x {}",
                options.width, options.height
            )));
        }

        let canvas_width = options.width - 2.0 * border;
        let canvas_height = options.height - 2.0 * border;
        if canvas_width <= 0.0 || canvas_height <= 0.0 {
            return Err(BenDayError::precondition(format!(
                "border {} leaves no room on a {} x {} sheet",
                border, options.width, options.height
            )));
        }
        if extent.max_x <= 0.0 || extent.max_y <= 0.0 {
            return Err(BenDayError::precondition(format!(
                "dot field has zero extent ({} x {})",
                extent.max_x, extent.max_y
            )));
        }

        let scale_x = canvas_width / extent.max_x;
        let scale_y = canvas_height / extent.max_y;
        let mut border_x = border;
        let mut border_y = border;

        let scale = if scale_x <= scale_y {
            border_y += (canvas_height - scale_x * extent.max_y) / 2.0;
            scale_x
        } else {
            border_x += (canvas_width - scale_y * extent.max_x) / 2.0;
            scale_y
        };

        Ok(Self {
            extent,
            scale,
            border_x,
            border_y,
        })
    }

    /// Sheet position of a dot centre. Y is flipped: image rows grow down,
    /// sheet coordinates grow up.
    pub fn place(&self, dot: &Dot) -> (f64, f64) {
        (
            dot.center.0 as f64 * self.scale + self.border_x,
            (self.extent.max_y - dot.center.1 as f64) * self.scale + self.border_y,
        )
    }

    /// Cut radius of a dot on the sheet
    pub fn cut_radius(&self, dot: &Dot) -> f64 {
        dot.diameter as f64 * self.scale / 2.0
    }
}

/// Rejects zero, negatives, NaN and infinity
fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
