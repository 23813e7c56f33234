// Plain geometry used by the compositing steps.

use std::fmt::{self, Display};

/// Width and height of an image or canvas, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn of<I: image::GenericImageView>(img: &I) -> Self {
        let (width, height) = img.dimensions();
        Self { width, height }
    }
}

impl Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Top-left corner where an image lands on a canvas.
/// Negative when the image is larger than the canvas on that axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset {
    pub x: i64,
    pub y: i64,
}
