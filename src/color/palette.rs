use crate::foundation::core::RgbFrame;
use crate::foundation::error::{CamoError, CamoResult};
use crate::foundation::grid::NoiseField;

/// Maps a scalar in `[0, 1)` to an RGB8 color.
///
/// Any `Fn(f64) -> [u8; 3] + Sync` closure is a palette.
pub trait Palette: Sync {
    fn rgb(&self, v: f64) -> [u8; 3];
}

impl<F> Palette for F
where
    F: Fn(f64) -> [u8; 3] + Sync,
{
    fn rgb(&self, v: f64) -> [u8; 3] {
        self(v)
    }
}

/// Qualitative palette: `[0, 1)` is split into `colors.len()` equal bins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListedPalette {
    colors: Vec<[u8; 3]>,
}

impl ListedPalette {
    pub fn new(colors: Vec<[u8; 3]>) -> CamoResult<Self> {
        if colors.is_empty() {
            return Err(CamoError::invalid_parameter(
                "listed palette needs at least one color",
            ));
        }
        Ok(Self { colors })
    }

    /// Twelve paired light/dark hues; the default noise palette.
    pub fn paired() -> Self {
        Self {
            colors: vec![
                [0xa6, 0xce, 0xe3],
                [0x1f, 0x78, 0xb4],
                [0xb2, 0xdf, 0x8a],
                [0x33, 0xa0, 0x2c],
                [0xfb, 0x9a, 0x99],
                [0xe3, 0x1a, 0x1c],
                [0xfd, 0xbf, 0x6f],
                [0xff, 0x7f, 0x00],
                [0xca, 0xb2, 0xd6],
                [0x6a, 0x3d, 0x9a],
                [0xff, 0xff, 0x99],
                [0xb1, 0x59, 0x28],
            ],
        }
    }

    /// Twelve soft pastel hues.
    pub fn set3() -> Self {
        Self {
            colors: vec![
                [0x8d, 0xd3, 0xc7],
                [0xff, 0xff, 0xb3],
                [0xbe, 0xba, 0xda],
                [0xfb, 0x80, 0x72],
                [0x80, 0xb1, 0xd3],
                [0xfd, 0xb4, 0x62],
                [0xb3, 0xde, 0x69],
                [0xfc, 0xcd, 0xe5],
                [0xd9, 0xd9, 0xd9],
                [0xbc, 0x80, 0xbd],
                [0xcc, 0xeb, 0xc5],
                [0xff, 0xed, 0x6f],
            ],
        }
    }

    pub fn colors(&self) -> &[[u8; 3]] {
        &self.colors
    }
}

impl Palette for ListedPalette {
    fn rgb(&self, v: f64) -> [u8; 3] {
        if v.is_nan() {
            return [0, 0, 0];
        }
        let n = self.colors.len();
        let idx = (v * n as f64).floor().clamp(0.0, (n - 1) as f64) as usize;
        self.colors[idx]
    }
}

/// Sequential palette: linear interpolation between evenly spaced stops.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GradientPalette {
    stops: Vec<[u8; 3]>,
}

impl GradientPalette {
    pub fn new(stops: Vec<[u8; 3]>) -> CamoResult<Self> {
        if stops.len() < 2 {
            return Err(CamoError::invalid_parameter(
                "gradient palette needs at least two stops",
            ));
        }
        Ok(Self { stops })
    }

    pub fn grayscale() -> Self {
        Self {
            stops: vec![[0, 0, 0], [255, 255, 255]],
        }
    }
}

impl Palette for GradientPalette {
    fn rgb(&self, v: f64) -> [u8; 3] {
        if v.is_nan() {
            return [0, 0, 0];
        }
        let segments = (self.stops.len() - 1) as f64;
        let pos = v.clamp(0.0, 1.0) * segments;
        let i = (pos.floor() as usize).min(self.stops.len() - 2);
        let t = pos - i as f64;
        let (a, b) = (self.stops[i], self.stops[i + 1]);

        let mut out = [0u8; 3];
        for c in 0..3 {
            let x = f64::from(a[c]) + (f64::from(b[c]) - f64::from(a[c])) * t;
            out[c] = x.round().clamp(0.0, 255.0) as u8;
        }
        out
    }
}

/// Named built-in palettes, as used in configuration files.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PaletteChoice {
    #[default]
    Paired,
    Set3,
    Grayscale,
}

impl PaletteChoice {
    pub fn build(self) -> Box<dyn Palette> {
        match self {
            Self::Paired => Box::new(ListedPalette::paired()),
            Self::Set3 => Box::new(ListedPalette::set3()),
            Self::Grayscale => Box::new(GradientPalette::grayscale()),
        }
    }
}

/// Color every cell of `field` through `palette`.
pub fn map_field(field: &NoiseField, palette: &dyn Palette) -> RgbFrame {
    let (h, w) = field.dims();
    let mut data = Vec::with_capacity(h * w * 3);
    for &v in field.as_slice() {
        data.extend_from_slice(&palette.rgb(v));
    }
    RgbFrame {
        width: w as u32,
        height: h as u32,
        data,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/palette.rs"]
mod tests;
