use image::Rgb;
use std::fmt;

/// Exact RGB colour of a dot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DotColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl DotColor {
    /// The uncut front layer colour
    pub const WHITE: DotColor = DotColor::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn is_white(&self) -> bool {
        *self == Self::WHITE
    }
}

impl From<Rgb<u8>> for DotColor {
    fn from(pixel: Rgb<u8>) -> Self {
        let Rgb([r, g, b]) = pixel;
        Self { r, g, b }
    }
}

impl From<DotColor> for Rgb<u8> {
    fn from(color: DotColor) -> Self {
        Rgb([color.r, color.g, color.b])
    }
}

/// Renders as the literal tuple, e.g. `(255, 0, 0)`. Layer filenames depend on this form.
impl fmt::Display for DotColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Index of a dot inside its painting.
///
/// Two dots with identical diameter, centre and colour are still distinct
/// dots; layer membership is decided by id, never by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DotId(pub usize);

/// One sampled dot in source-image pixel space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub diameter: u32,
    /// Centre (x, y) in source pixels, y growing downwards
    pub center: (i32, i32),
    pub color: DotColor,
}

impl Dot {
    pub fn new(diameter: u32, center: (i32, i32), color: impl Into<DotColor>) -> Self {
        Self {
            diameter,
            center,
            color: color.into(),
        }
    }

    /// Radius used for raster drawing (diameter / 2, floored)
    pub fn pixel_radius(&self) -> i32 {
        (self.diameter / 2) as i32
    }

    /// Exact radius used for layout and cutting
    pub fn radius(&self) -> f64 {
        self.diameter as f64 / 2.0
    }
}
