use rand::Rng;

use crate::foundation::core::{BoundingBox, ShiftVector};
use crate::foundation::error::{CamoError, CamoResult};

/// Inclusive limits on the cumulative drift along each axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShiftBounds {
    pub low_x: i64,
    pub high_x: i64,
    pub low_y: i64,
    pub high_y: i64,
}

impl ShiftBounds {
    /// Bounds that keep `bbox` inside a `height x width` canvas for every cumulative shift.
    ///
    /// Draws are high-exclusive, so a cumulative offset never reaches `high_*` and the box's
    /// far edge stays at most on the last row/column.
    pub fn for_canvas(bbox: BoundingBox, height: usize, width: usize) -> Self {
        Self {
            low_x: -(bbox.x_min as i64),
            high_x: height as i64 - bbox.x_max as i64,
            low_y: -(bbox.y_min as i64),
            high_y: width as i64 - bbox.y_max as i64,
        }
    }

    /// Return `true` when `cum` lies inside the inclusive bounds.
    pub fn contains(self, cum: ShiftVector) -> bool {
        self.low_x <= cum.dx && cum.dx <= self.high_x && self.low_y <= cum.dy && cum.dy <= self.high_y
    }
}

/// Bounded random walk of `count` per-frame shifts.
///
/// Each step draws `dx` from `[max(low_x - cum_x, -smoothness), min(high_x - cum_x, smoothness))`
/// and `dy` likewise, then accumulates. An empty interval on either axis at any step is an
/// [`CamoError::InvalidRange`].
pub fn generate<R: Rng + ?Sized>(
    bounds: ShiftBounds,
    count: usize,
    smoothness: i64,
    rng: &mut R,
) -> CamoResult<Vec<ShiftVector>> {
    if smoothness <= 0 {
        return Err(CamoError::invalid_range(format!(
            "shift smoothness must be > 0, got {smoothness}"
        )));
    }

    let mut out = Vec::with_capacity(count);
    let mut cum = ShiftVector::ZERO;
    for step in 0..count {
        let dx = draw_axis(rng, "x", step, bounds.low_x, bounds.high_x, cum.dx, smoothness)?;
        let dy = draw_axis(rng, "y", step, bounds.low_y, bounds.high_y, cum.dy, smoothness)?;
        let v = ShiftVector::new(dx, dy);
        cum = cum + v;
        out.push(v);
    }
    Ok(out)
}

fn draw_axis<R: Rng + ?Sized>(
    rng: &mut R,
    axis: &str,
    step: usize,
    low: i64,
    high: i64,
    cum: i64,
    smoothness: i64,
) -> CamoResult<i64> {
    let lo = (low - cum).max(-smoothness);
    let hi = (high - cum).min(smoothness);
    if lo >= hi {
        return Err(CamoError::invalid_range(format!(
            "empty {axis} shift interval [{lo}, {hi}) at step {step} (bounds [{low}, {high}], cumulative {cum})"
        )));
    }
    Ok(rng.random_range(lo..hi))
}

/// Running sums of a shift sequence.
pub fn cumulative(shifts: &[ShiftVector]) -> Vec<ShiftVector> {
    shifts
        .iter()
        .scan(ShiftVector::ZERO, |cum, &v| {
            *cum = *cum + v;
            Some(*cum)
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/motion/sequence.rs"]
mod tests;
