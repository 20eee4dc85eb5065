use rand::Rng;

use crate::color::palette::Palette;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::field::noise;
use crate::foundation::core::{BoundingBox, RgbFrame, ShiftVector};
use crate::foundation::error::{CamoError, CamoResult};
use crate::foundation::grid::{Mask, NoiseField};
use crate::motion::sequence::{self, ShiftBounds};
use crate::render::composite::{NoiseLayers, composite};
use crate::zones::extract::extract;

/// Knobs of one animation run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationParams {
    /// Contour band thickness; even and > 0.
    pub edge_width: u32,
    /// Number of frames to emit; > 0.
    pub frame_count: usize,
    /// Fraction of word/background noise cells re-rolled per frame, in `[0, 1]`.
    pub mutation_coefficient: f64,
    /// Maximum per-axis shift per frame; > 0.
    pub shift_smoothness: i64,
}

impl Default for AnimationParams {
    fn default() -> Self {
        Self {
            edge_width: 4,
            frame_count: 50,
            mutation_coefficient: 0.04,
            shift_smoothness: 10,
        }
    }
}

impl AnimationParams {
    pub fn validate(&self) -> CamoResult<()> {
        if self.edge_width == 0 || self.edge_width % 2 != 0 {
            return Err(CamoError::invalid_parameter(format!(
                "edge_width must be even and > 0, got {}",
                self.edge_width
            )));
        }
        if self.frame_count == 0 {
            return Err(CamoError::invalid_parameter("frame_count must be > 0"));
        }
        if !self.mutation_coefficient.is_finite()
            || !(0.0..=1.0).contains(&self.mutation_coefficient)
        {
            return Err(CamoError::invalid_parameter(format!(
                "mutation_coefficient must be in [0, 1], got {}",
                self.mutation_coefficient
            )));
        }
        if self.shift_smoothness <= 0 {
            return Err(CamoError::invalid_parameter(format!(
                "shift_smoothness must be > 0, got {}",
                self.shift_smoothness
            )));
        }
        Ok(())
    }
}

/// Everything one frame depends on.
///
/// Masks drift cumulatively, word/background noise shimmers, contour noise is replaced wholesale.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationState {
    pub word_mask: Mask,
    pub contour_mask: Mask,
    pub word_noise: NoiseField,
    pub background_noise: NoiseField,
    pub contour_noise: NoiseField,
}

impl AnimationState {
    /// One step of the fold: `(state, shift) -> (next state, frame)`.
    ///
    /// Only the mask shift depends on the previous state's geometry; the contour field drawn
    /// here is independent of every earlier frame.
    pub fn advance<R: Rng + ?Sized>(
        self,
        shift: ShiftVector,
        mutation_coefficient: f64,
        rng: &mut R,
        palette: &dyn Palette,
    ) -> CamoResult<(Self, RgbFrame)> {
        let Self {
            word_mask,
            contour_mask,
            mut word_noise,
            mut background_noise,
            contour_noise: _,
        } = self;
        let (h, w) = word_mask.dims();

        let word_mask = word_mask.shift(shift);
        let contour_mask = contour_mask.shift(shift);
        noise::mutate(&mut word_noise, mutation_coefficient, rng)?;
        noise::mutate(&mut background_noise, mutation_coefficient, rng)?;
        let contour_noise = noise::generate(h, w, rng);

        let frame = composite(
            &word_mask,
            &contour_mask,
            NoiseLayers {
                word: &word_noise,
                background: &background_noise,
                contour: &contour_noise,
            },
            palette,
        )?;

        let next = Self {
            word_mask,
            contour_mask,
            word_noise,
            background_noise,
            contour_noise,
        };
        Ok((next, frame))
    }
}

/// Single-pass frame generator.
///
/// Yields exactly `frame_count` frames in order. Iteration consumes the animation state, so a
/// second pass needs a new `Animator`. After the first error the iterator is exhausted.
pub struct Animator<'p, R> {
    state: Option<AnimationState>,
    shifts: Vec<ShiftVector>,
    next: usize,
    mutation_coefficient: f64,
    bbox: BoundingBox,
    rng: R,
    palette: &'p dyn Palette,
}

impl<'p, R: Rng> Animator<'p, R> {
    /// Extract zones, seed the three noise fields and precompute the shift walk.
    #[tracing::instrument(skip(glyph, rng, palette), fields(width = glyph.width, height = glyph.height))]
    pub fn new(
        glyph: &RgbFrame,
        params: AnimationParams,
        mut rng: R,
        palette: &'p dyn Palette,
    ) -> CamoResult<Self> {
        params.validate()?;
        let zones = extract(glyph, params.edge_width)?;
        let (h, w) = glyph.dims();

        let word_noise = noise::generate(h, w, &mut rng);
        let background_noise = noise::generate(h, w, &mut rng);
        let contour_noise = noise::generate(h, w, &mut rng);

        let bounds = ShiftBounds::for_canvas(zones.bbox, h, w);
        let shifts = sequence::generate(
            bounds,
            params.frame_count,
            params.shift_smoothness,
            &mut rng,
        )?;
        tracing::debug!(bbox = ?zones.bbox, ?bounds, frames = shifts.len(), "animation set up");

        Ok(Self {
            state: Some(AnimationState {
                word_mask: zones.word,
                contour_mask: zones.contour,
                word_noise,
                background_noise,
                contour_noise,
            }),
            shifts,
            next: 0,
            mutation_coefficient: params.mutation_coefficient,
            bbox: zones.bbox,
            rng,
            palette,
        })
    }

    /// Bounding box of the dilated glyph before any drift.
    pub fn bbox(&self) -> BoundingBox {
        self.bbox
    }

    /// The precomputed per-frame shifts.
    pub fn shifts(&self) -> &[ShiftVector] {
        &self.shifts
    }

    /// State the next frame will be derived from, or `None` once finished or failed.
    pub fn state(&self) -> Option<&AnimationState> {
        self.state.as_ref()
    }

    /// Frames not yet emitted.
    pub fn remaining(&self) -> usize {
        if self.state.is_none() {
            0
        } else {
            self.shifts.len() - self.next
        }
    }

    /// Drain every frame into a vector, failing on the first error.
    pub fn collect_frames(self) -> CamoResult<Vec<RgbFrame>> {
        self.collect()
    }

    /// Stream every frame into `sink` in order. Returns the number of frames pushed.
    pub fn render_to_sink(mut self, sink: &mut dyn FrameSink) -> CamoResult<usize> {
        let Some(state) = self.state.as_ref() else {
            return Err(CamoError::invalid_parameter("animation already consumed"));
        };
        let (h, w) = state.word_mask.dims();
        sink.begin(SinkConfig {
            width: w as u32,
            height: h as u32,
            frame_count: self.remaining(),
        })?;

        match self.stream_frames(sink) {
            Ok(pushed) => {
                sink.end()?;
                Ok(pushed)
            }
            Err(e) => {
                sink.abort();
                Err(e)
            }
        }
    }

    fn stream_frames(&mut self, sink: &mut dyn FrameSink) -> CamoResult<usize> {
        let mut pushed = 0usize;
        while let Some(frame) = self.next() {
            sink.push_frame(pushed, &frame?)?;
            pushed += 1;
        }
        Ok(pushed)
    }
}

impl<R: Rng> Iterator for Animator<'_, R> {
    type Item = CamoResult<RgbFrame>;

    fn next(&mut self) -> Option<Self::Item> {
        let shift = *self.shifts.get(self.next)?;
        let state = self.state.take()?;
        match state.advance(shift, self.mutation_coefficient, &mut self.rng, self.palette) {
            Ok((state, frame)) => {
                tracing::trace!(frame = self.next, ?shift, "frame composited");
                self.next += 1;
                if self.next < self.shifts.len() {
                    self.state = Some(state);
                }
                Some(Ok(frame))
            }
            Err(e) => Some(Err(e)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

/// Run a whole animation: setup plus `frame_count` steps.
pub fn generate_frames<R: Rng>(
    glyph: &RgbFrame,
    params: AnimationParams,
    rng: R,
    palette: &dyn Palette,
) -> CamoResult<Vec<RgbFrame>> {
    Animator::new(glyph, params, rng, palette)?.collect_frames()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/driver.rs"]
mod tests;
