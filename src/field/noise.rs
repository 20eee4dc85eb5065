use rand::Rng;

use crate::foundation::error::{CamoError, CamoResult};
use crate::foundation::grid::NoiseField;

/// Fresh `h x w` field of independent uniform draws in `[0, 1)`.
pub fn generate<R: Rng + ?Sized>(height: usize, width: usize, rng: &mut R) -> NoiseField {
    NoiseField::from_fn(height, width, |_, _| rng.random::<f64>())
}

/// Number of coordinate draws [`mutate`] makes for a field of this size.
pub fn mutation_draws(height: usize, width: usize, rate: f64) -> usize {
    ((height * width) as f64 * rate).floor() as usize
}

/// Re-roll a random subset of cells in place.
///
/// Draws `floor(h * w * rate)` row indices, then as many column indices, then as many fresh
/// values, and writes value `i` to `(rows[i], cols[i])`. Coordinates are drawn with replacement,
/// so repeated pairs make the number of distinct cells touched smaller than the draw count; on a
/// repeat the later value wins.
///
/// Returns the draw count.
pub fn mutate<R: Rng + ?Sized>(field: &mut NoiseField, rate: f64, rng: &mut R) -> CamoResult<usize> {
    if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
        return Err(CamoError::invalid_parameter(format!(
            "mutation rate must be in [0, 1], got {rate}"
        )));
    }
    let (h, w) = field.dims();
    let count = mutation_draws(h, w, rate);
    if count == 0 {
        return Ok(0);
    }

    let rows: Vec<usize> = (0..count).map(|_| rng.random_range(0..h)).collect();
    let cols: Vec<usize> = (0..count).map(|_| rng.random_range(0..w)).collect();
    for (&r, &c) in rows.iter().zip(&cols) {
        field[(r, c)] = rng.random::<f64>();
    }
    Ok(count)
}

#[cfg(test)]
#[path = "../../tests/unit/field/noise.rs"]
mod tests;
