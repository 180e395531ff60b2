//! Cut geometry for one layer sheet

use super::ExportOptions;
use super::fit::Layout;
use super::partition::ColorLayer;
use crate::painting::Painting;
use crate::types::DotColor;

/// A single cut primitive in sheet coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CutShape {
    Circle { center: (f64, f64), radius: f64 },
    Line { start: (f64, f64), end: (f64, f64) },
}

impl CutShape {
    fn circle(x: f64, y: f64, radius: f64) -> Self {
        CutShape::Circle {
            center: (x, y),
            radius,
        }
    }

    fn line(start: (f64, f64), end: (f64, f64)) -> Self {
        CutShape::Line { start, end }
    }
}

/// Everything cut from one colour's sheet
#[derive(Debug, Clone, PartialEq)]
pub struct LayerSheet {
    /// Emission index; odd sheets get slots instead of plain hanging holes
    pub index: usize,
    pub color: DotColor,
    pub shapes: Vec<CutShape>,
}

impl LayerSheet {
    pub fn build(
        index: usize,
        layer: &ColorLayer,
        painting: &Painting,
        layout: &Layout,
        options: &ExportOptions,
    ) -> Self {
        let mut shapes = Vec::new();

        // The white sheet is the front and is never hung
        if options.hanging_holes && !layer.color.is_white() {
            hanging_holes(&mut shapes, index, layout, options);
        }
        sheet_outline(&mut shapes, options);
        corner_holes(&mut shapes, layout, options);

        for (id, dot) in painting.iter() {
            if layer.contains(id) {
                continue;
            }
            let (x, y) = layout.place(dot);
            shapes.push(CutShape::circle(x, y, layout.cut_radius(dot)));
        }

        Self {
            index,
            color: layer.color,
            shapes,
        }
    }

    pub fn circles(&self) -> impl Iterator<Item = ((f64, f64), f64)> + '_ {
        self.shapes.iter().filter_map(|shape| match *shape {
            CutShape::Circle { center, radius } => Some((center, radius)),
            CutShape::Line { .. } => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = ((f64, f64), (f64, f64))> + '_ {
        self.shapes.iter().filter_map(|shape| match *shape {
            CutShape::Line { start, end } => Some((start, end)),
            CutShape::Circle { .. } => None,
        })
    }
}

/// Four holes near the side edges at 2/3 of the sheet height, plus slots
/// through them on odd sheets.
fn hanging_holes(
    shapes: &mut Vec<CutShape>,
    index: usize,
    layout: &Layout,
    options: &ExportOptions,
) {
    let border = options.border;
    let radius = border / 4.0;
    let low = 2.0 / 3.0 * options.height;
    let high = low + border;
    let left = layout.border_x / 2.0;
    let right = options.width - layout.border_x / 2.0;

    for x in [left, right] {
        shapes.push(CutShape::circle(x, low, radius));
        shapes.push(CutShape::circle(x, high, radius));
    }

    if index % 2 == 1 {
        for x in [left, right] {
            for edge in [x - radius, x + radius] {
                shapes.push(CutShape::line((edge, low), (edge, high)));
            }
        }
    }
}

fn sheet_outline(shapes: &mut Vec<CutShape>, options: &ExportOptions) {
    let (w, h) = (options.width, options.height);
    shapes.push(CutShape::line((0.0, 0.0), (w, 0.0)));
    shapes.push(CutShape::line((w, 0.0), (w, h)));
    shapes.push(CutShape::line((w, h), (0.0, h)));
    shapes.push(CutShape::line((0.0, h), (0.0, 0.0)));
}

fn corner_holes(shapes: &mut Vec<CutShape>, layout: &Layout, options: &ExportOptions) {
    let radius = options.border / 4.0;
    let left = layout.border_x / 2.0;
    let right = options.width - layout.border_x / 2.0;
    let bottom = layout.border_y / 2.0;
    let top = options.height - layout.border_y / 2.0;

    shapes.push(CutShape::circle(left, bottom, radius));
    shapes.push(CutShape::circle(right, bottom, radius));
    shapes.push(CutShape::circle(left, top, radius));
    shapes.push(CutShape::circle(right, top, radius));
}
