use std::ops::{Index, IndexMut};

use crate::foundation::core::ShiftVector;
use crate::foundation::error::{CamoError, CamoResult};

/// Row-major `height x width` matrix.
///
/// Indexing is `(row, col)` and panics when out of bounds, like slice indexing. Use
/// [`Grid::get`] for a checked lookup.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    height: usize,
    width: usize,
    data: Vec<T>,
}

/// Scalar noise texture with values in `[0, 1)`.
pub type NoiseField = Grid<f64>;

/// Binary zone membership.
pub type Mask = Grid<bool>;

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `value`.
    pub fn filled(height: usize, width: usize, value: T) -> Self {
        Self {
            height,
            width,
            data: vec![value; height * width],
        }
    }
}

impl<T> Grid<T> {
    /// Wrap a row-major buffer. Fails when `data.len() != height * width`.
    pub fn from_vec(height: usize, width: usize, data: Vec<T>) -> CamoResult<Self> {
        let expected = height
            .checked_mul(width)
            .ok_or_else(|| CamoError::invalid_parameter("grid size overflow"))?;
        if data.len() != expected {
            return Err(CamoError::invalid_parameter(format!(
                "grid buffer has {} cells, expected {height}x{width}",
                data.len()
            )));
        }
        Ok(Self {
            height,
            width,
            data,
        })
    }

    /// Build a grid by evaluating `f(row, col)` for every cell in row-major order.
    pub fn from_fn(height: usize, width: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(height * width);
        for r in 0..height {
            for c in 0..width {
                data.push(f(r, c));
            }
        }
        Self {
            height,
            width,
            data,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// `(height, width)`.
    pub fn dims(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.height && col < self.width {
            self.data.get(row * self.width + col)
        } else {
            None
        }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Return `true` when both grids share the same `(height, width)`.
    pub fn same_dims<U>(&self, other: &Grid<U>) -> bool {
        self.dims() == other.dims()
    }
}

impl<T: Copy> Grid<T> {
    /// Cyclic translation on a torus.
    ///
    /// Cell `(r, c)` moves to `((r + v.dx) mod height, (c + v.dy) mod width)`. Content leaving one
    /// edge re-enters at the opposite edge, so `shift(shift(g, a), b) == shift(g, a + b)` and
    /// `shift(g, ShiftVector::ZERO) == g`.
    pub fn shift(&self, v: ShiftVector) -> Self {
        if self.data.is_empty() {
            return self.clone();
        }
        let h = self.height as i64;
        let w = self.width as i64;
        let dr = v.dx.rem_euclid(h) as usize;
        let dc = v.dy.rem_euclid(w) as usize;
        if dr == 0 && dc == 0 {
            return self.clone();
        }

        let mut data = Vec::with_capacity(self.data.len());
        for r in 0..self.height {
            let src_r = (r + self.height - dr) % self.height;
            let row = &self.data[src_r * self.width..(src_r + 1) * self.width];
            // Output row starts with the last `dc` source cells.
            data.extend_from_slice(&row[self.width - dc..]);
            data.extend_from_slice(&row[..self.width - dc]);
        }
        Self {
            height: self.height,
            width: self.width,
            data,
        }
    }
}

impl Mask {
    /// Number of `true` cells.
    pub fn count_true(&self) -> usize {
        self.data.iter().filter(|&&b| b).count()
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.height && col < self.width,
            "grid index ({row}, {col}) out of bounds for {}x{}",
            self.height,
            self.width
        );
        &self.data[row * self.width + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.height && col < self.width,
            "grid index ({row}, {col}) out of bounds for {}x{}",
            self.height,
            self.width
        );
        &mut self.data[row * self.width + col]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/grid.rs"]
mod tests;
