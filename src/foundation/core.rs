use std::ops::Add;

use crate::foundation::error::{CamoError, CamoResult};

/// Per-frame cyclic displacement.
///
/// `dx` moves along the row axis (down the raster), `dy` along the column axis (across).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ShiftVector {
    /// Row-axis offset.
    pub dx: i64,
    /// Column-axis offset.
    pub dy: i64,
}

impl ShiftVector {
    pub const ZERO: Self = Self { dx: 0, dy: 0 };

    pub fn new(dx: i64, dy: i64) -> Self {
        Self { dx, dy }
    }
}

impl Add for ShiftVector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            dx: self.dx + rhs.dx,
            dy: self.dy + rhs.dy,
        }
    }
}

/// Inclusive axis-aligned box, in the same axis convention as [`ShiftVector`]:
/// `x` indexes rows, `y` indexes columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BoundingBox {
    pub x_min: usize,
    pub x_max: usize,
    pub y_min: usize,
    pub y_max: usize,
}

impl BoundingBox {
    /// Return `true` when `(row, col)` lies inside the box.
    pub fn contains(self, row: usize, col: usize) -> bool {
        self.x_min <= row && row <= self.x_max && self.y_min <= col && col <= self.y_max
    }
}

/// Tightly packed RGB8 raster, row-major.
///
/// Used both for the incoming glyph raster and for every composited frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbFrame {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 3` bytes.
    pub data: Vec<u8>,
}

impl RgbFrame {
    /// All-black frame.
    pub fn black(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width as usize) * (height as usize) * 3],
        }
    }

    /// Wrap an RGB8 buffer, checking its length against the dimensions.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> CamoResult<Self> {
        let expected_len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|v| v.checked_mul(3))
            .ok_or_else(|| CamoError::invalid_parameter("raster buffer size overflow"))?;
        if data.len() != expected_len {
            return Err(CamoError::invalid_parameter(format!(
                "raster buffer has {} bytes, expected {width}x{height}x3",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// `(height, width)` as grid dimensions.
    pub fn dims(&self) -> (usize, usize) {
        (self.height as usize, self.width as usize)
    }

    pub fn pixel(&self, row: usize, col: usize) -> [u8; 3] {
        let idx = (row * self.width as usize + col) * 3;
        [self.data[idx], self.data[idx + 1], self.data[idx + 2]]
    }

    pub fn set_pixel(&mut self, row: usize, col: usize, rgb: [u8; 3]) {
        let idx = (row * self.width as usize + col) * 3;
        self.data[idx..idx + 3].copy_from_slice(&rgb);
    }

    pub fn from_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            data: img.into_raw(),
        }
    }

    pub fn into_image(self) -> CamoResult<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.data)
            .ok_or_else(|| CamoError::invalid_parameter("frame buffer does not match dimensions"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
