use crate::foundation::core::{BoundingBox, RgbFrame};
use crate::foundation::error::{CamoError, CamoResult};
use crate::foundation::grid::Mask;

/// A pixel is ink when the mean of its channels exceeds this value.
pub const MID_INTENSITY_THRESHOLD: u8 = 127;

/// Zones derived from a glyph raster.
#[derive(Clone, Debug, PartialEq)]
pub struct Zones {
    /// Core glyph pixels.
    pub word: Mask,
    /// Band around the glyph edge: dilated glyph minus `word`.
    pub contour: Mask,
    /// Tight box around the dilated glyph.
    pub bbox: BoundingBox,
}

/// Split a glyph raster into word, contour and bounding-box zones.
///
/// `edge_width` must be even and positive; the max-filter kernel is `edge_width + 1` pixels
/// square, which grows the ink by `edge_width / 2` pixels on every side.
#[tracing::instrument(skip(glyph), fields(width = glyph.width, height = glyph.height))]
pub fn extract(glyph: &RgbFrame, edge_width: u32) -> CamoResult<Zones> {
    if edge_width == 0 || edge_width % 2 != 0 {
        return Err(CamoError::invalid_parameter(format!(
            "edge width must be even and > 0, got {edge_width}"
        )));
    }
    let (h, w) = glyph.dims();
    if glyph.data.len() != h * w * 3 {
        return Err(CamoError::invalid_parameter(
            "glyph raster buffer does not match its dimensions",
        ));
    }

    let word = threshold(&glyph.data, h, w);
    let dilated_px = max_filter_rgb8(&glyph.data, h, w, (edge_width / 2) as usize);
    let dilated = threshold(&dilated_px, h, w);

    let bbox = bounding_box(&dilated)
        .ok_or_else(|| CamoError::empty_mask("glyph raster has no ink above threshold"))?;

    let contour = Mask::from_fn(h, w, |r, c| dilated[(r, c)] && !word[(r, c)]);
    tracing::debug!(?bbox, ink = word.count_true(), band = contour.count_true(), "zones extracted");

    Ok(Zones {
        word,
        contour,
        bbox,
    })
}

/// Minimal inclusive box around every `true` cell, or `None` for an all-false mask.
pub fn bounding_box(mask: &Mask) -> Option<BoundingBox> {
    let (h, w) = mask.dims();
    let mut bbox: Option<BoundingBox> = None;
    for r in 0..h {
        for c in 0..w {
            if !mask[(r, c)] {
                continue;
            }
            bbox = Some(match bbox {
                None => BoundingBox {
                    x_min: r,
                    x_max: r,
                    y_min: c,
                    y_max: c,
                },
                Some(b) => BoundingBox {
                    x_min: b.x_min.min(r),
                    x_max: b.x_max.max(r),
                    y_min: b.y_min.min(c),
                    y_max: b.y_max.max(c),
                },
            });
        }
    }
    bbox
}

fn threshold(px: &[u8], h: usize, w: usize) -> Mask {
    let limit = 3 * u16::from(MID_INTENSITY_THRESHOLD);
    Mask::from_fn(h, w, |r, c| {
        let idx = (r * w + c) * 3;
        let sum = u16::from(px[idx]) + u16::from(px[idx + 1]) + u16::from(px[idx + 2]);
        sum > limit
    })
}

/// Per-channel maximum over a `(2 * radius + 1)` square window, edges clamped.
pub(crate) fn max_filter_rgb8(src: &[u8], h: usize, w: usize, radius: usize) -> Vec<u8> {
    if radius == 0 {
        return src.to_vec();
    }
    let mut tmp = vec![0u8; src.len()];
    let mut out = vec![0u8; src.len()];
    horizontal_max(src, &mut tmp, h, w, radius);
    vertical_max(&tmp, &mut out, h, w, radius);
    out
}

fn horizontal_max(src: &[u8], dst: &mut [u8], h: usize, w: usize, radius: usize) {
    for y in 0..h {
        for x in 0..w {
            let lo = x.saturating_sub(radius);
            let hi = (x + radius).min(w - 1);
            let mut acc = [0u8; 3];
            for sx in lo..=hi {
                let idx = (y * w + sx) * 3;
                for c in 0..3 {
                    acc[c] = acc[c].max(src[idx + c]);
                }
            }
            let out_idx = (y * w + x) * 3;
            dst[out_idx..out_idx + 3].copy_from_slice(&acc);
        }
    }
}

fn vertical_max(src: &[u8], dst: &mut [u8], h: usize, w: usize, radius: usize) {
    for y in 0..h {
        let lo = y.saturating_sub(radius);
        let hi = (y + radius).min(h - 1);
        for x in 0..w {
            let mut acc = [0u8; 3];
            for sy in lo..=hi {
                let idx = (sy * w + x) * 3;
                for c in 0..3 {
                    acc[c] = acc[c].max(src[idx + c]);
                }
            }
            let out_idx = (y * w + x) * 3;
            dst[out_idx..out_idx + 3].copy_from_slice(&acc);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/zones/extract.rs"]
mod tests;
