//! Multi-layer DXF export
//!
//! Each distinct dot colour becomes one sheet. A sheet is an inverse mask:
//! every dot *not* of that colour is cut out, so when the sheets are stacked
//! each colour shows through the holes of the sheets above it.
//!
//! The export process:
//! 1. Measure the dot field extent
//! 2. Partition dots by colour (first-seen order, white always present)
//! 3. Fit the field into the sheet with a uniform, letterboxed scale
//! 4. Build each sheet's registration geometry and cut circles
//! 5. Write one R12 DXF per sheet

mod fit;
mod partition;
mod sheet;

use crate::error::{BenDayError, Result};
use crate::painting::Painting;
use crate::types::DotColor;
use dxf::entities::{Circle, Entity, EntityType, Line};
use dxf::enums::AcadVersion;
use dxf::{Drawing, Point};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub use fit::{Extent, Layout};
pub use partition::{ColorLayer, partition};
pub use sheet::{CutShape, LayerSheet};

/// File extension of layer sheets
pub const LAYER_EXTENSION: &str = "dxf";

/// Physical sheet the layers are cut from
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    /// Sheet width in output units
    pub width: f64,
    /// Sheet height in output units
    pub height: f64,
    /// Margin between sheet edge and dot field (default: 25)
    pub border: f64,
    /// Add hanging holes and slots to coloured sheets (default: true)
    pub hanging_holes: bool,
}

impl ExportOptions {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            border: 25.0,
            hanging_holes: true,
        }
    }

    pub fn with_border(mut self, border: f64) -> Self {
        self.border = border;
        self
    }

    pub fn with_hanging_holes(mut self, hanging_holes: bool) -> Self {
        self.hanging_holes = hanging_holes;
        self
    }
}

/// `{base}_{(r, g, b)}.dxf`
pub fn layer_path(base: impl AsRef<Path>, color: DotColor) -> PathBuf {
    let mut name = base.as_ref().as_os_str().to_owned();
    name.push(format!("_{}.{}", color, LAYER_EXTENSION));
    PathBuf::from(name)
}

impl Painting {
    /// Placement of the dot field on the sheet described by `options`
    pub fn layout(&self, options: &ExportOptions) -> Result<Layout> {
        if self.is_empty() {
            return Err(BenDayError::precondition("painting has no dots to export"));
        }
        Layout::fit(Extent::of(self.dots()), options)
    }

    /// Cut geometry for every layer, in emission order
    pub fn layer_sheets(&self, options: &ExportOptions) -> Result<Vec<LayerSheet>> {
        let layout = self.layout(options)?;
        let sheets = partition(self)
            .iter()
            .enumerate()
            .map(|(index, layer)| LayerSheet::build(index, layer, self, &layout, options))
            .collect();
        Ok(sheets)
    }

    /// Write one DXF per colour layer next to `base`.
    ///
    /// Returns the written paths in emission order.
    pub fn make_dxfs(
        &self,
        base: impl AsRef<Path>,
        options: &ExportOptions,
    ) -> Result<Vec<PathBuf>> {
        let base = base.as_ref();
        let sheets = self.layer_sheets(options)?;
        let mut written = Vec::with_capacity(sheets.len());

        for sheet in &sheets {
            let path = layer_path(base, sheet.color);
            write_sheet(sheet, &path)?;
            log::debug!(
                "Layer {} {}: {} shapes -> {}",
                sheet.index,
                sheet.color,
                sheet.shapes.len(),
                path.display()
            );
            written.push(path);
        }

        log::info!(
            "Wrote {} layer(s) for {} dots to {}_*.{}",
            written.len(),
            self.len(),
            base.display(),
            LAYER_EXTENSION
        );
        Ok(written)
    }
}

/// Convert a sheet into an R12 drawing
fn sheet_drawing(sheet: &LayerSheet) -> Drawing {
    let mut drawing = Drawing::new();
    drawing.header.version = AcadVersion::R12;

    for shape in &sheet.shapes {
        let specific = match *shape {
            CutShape::Circle { center, radius } => {
                EntityType::Circle(Circle::new(Point::new(center.0, center.1, 0.0), radius))
            }
            CutShape::Line { start, end } => EntityType::Line(Line::new(
                Point::new(start.0, start.1, 0.0),
                Point::new(end.0, end.1, 0.0),
            )),
        };
        drawing.add_entity(Entity::new(specific));
    }

    drawing
}

fn write_sheet(sheet: &LayerSheet, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    sheet_drawing(sheet).save(&mut writer)?;
    writer.flush()?;
    Ok(())
}
