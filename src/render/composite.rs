use rayon::prelude::*;

use crate::color::palette::{Palette, map_field};
use crate::foundation::core::RgbFrame;
use crate::foundation::error::{CamoError, CamoResult};
use crate::foundation::grid::{Mask, NoiseField};

/// Which noise source colors a pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    Contour,
    Word,
    Background,
}

/// Priority rule: contour band, then word, then background.
pub fn source_at(word: &Mask, contour: &Mask, row: usize, col: usize) -> Source {
    if contour[(row, col)] {
        Source::Contour
    } else if word[(row, col)] {
        Source::Word
    } else {
        Source::Background
    }
}

/// The three noise layers of one frame.
#[derive(Clone, Copy, Debug)]
pub struct NoiseLayers<'a> {
    pub word: &'a NoiseField,
    pub background: &'a NoiseField,
    pub contour: &'a NoiseField,
}

/// Merge three noise fields through the word and contour masks into one RGB frame.
///
/// Each layer is colored whole with [`map_field`], then every pixel takes its color from the
/// layer its zone selects.
///
/// All inputs must share dimensions. The masks must be disjoint; an overlap means the zone
/// invariant was broken upstream and is reported instead of being resolved silently.
pub fn composite(
    word_mask: &Mask,
    contour_mask: &Mask,
    noise: NoiseLayers<'_>,
    palette: &dyn Palette,
) -> CamoResult<RgbFrame> {
    let (h, w) = word_mask.dims();
    if !contour_mask.same_dims(word_mask)
        || !noise.word.same_dims(word_mask)
        || !noise.background.same_dims(word_mask)
        || !noise.contour.same_dims(word_mask)
    {
        return Err(CamoError::invalid_parameter(
            "composite expects masks and noise fields of equal dimensions",
        ));
    }
    if let Some(i) = word_mask
        .as_slice()
        .iter()
        .zip(contour_mask.as_slice())
        .position(|(&a, &b)| a && b)
    {
        return Err(CamoError::invalid_parameter(format!(
            "word and contour masks overlap at ({}, {})",
            i / w,
            i % w
        )));
    }

    let mut out = RgbFrame::black(w as u32, h as u32);
    if w == 0 {
        return Ok(out);
    }

    let (contour_rgb, (word_rgb, background_rgb)) = rayon::join(
        || map_field(noise.contour, palette),
        || {
            rayon::join(
                || map_field(noise.word, palette),
                || map_field(noise.background, palette),
            )
        },
    );

    let stride = w * 3;
    out.data
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(r, row)| {
            for (c, px) in row.chunks_exact_mut(3).enumerate() {
                let layer = match source_at(word_mask, contour_mask, r, c) {
                    Source::Contour => &contour_rgb,
                    Source::Word => &word_rgb,
                    Source::Background => &background_rgb,
                };
                let idx = r * stride + c * 3;
                px.copy_from_slice(&layer.data[idx..idx + 3]);
            }
        });
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
