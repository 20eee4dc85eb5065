use std::path::Path;

use anyhow::Context as _;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::animation::driver::AnimationParams;
use crate::color::palette::PaletteChoice;
use crate::foundation::error::{CamoError, CamoResult};

/// User-facing generation settings, loadable from JSON.
///
/// Missing keys take the defaults below; unknown keys are rejected.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CamoConfig {
    /// Contour band thickness in pixels (even, > 0).
    pub edge_width: u32,
    /// Frames per animation (> 0).
    pub frame_count: u32,
    /// Fraction of word/background noise re-rolled each frame.
    pub mutation_coefficient: f64,
    /// Largest per-axis drift per frame.
    pub shift_smoothness: i64,
    pub palette: PaletteChoice,
    /// Fixed seed for reproducible output; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for CamoConfig {
    fn default() -> Self {
        let p = AnimationParams::default();
        Self {
            edge_width: p.edge_width,
            frame_count: p.frame_count as u32,
            mutation_coefficient: p.mutation_coefficient,
            shift_smoothness: p.shift_smoothness,
            palette: PaletteChoice::default(),
            seed: None,
        }
    }
}

impl CamoConfig {
    pub fn from_json_str(s: &str) -> CamoResult<Self> {
        serde_json::from_str(s).map_err(|e| CamoError::serde(e.to_string()))
    }

    pub fn from_path(path: impl AsRef<Path>) -> CamoResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    pub fn params(&self) -> AnimationParams {
        AnimationParams {
            edge_width: self.edge_width,
            frame_count: self.frame_count as usize,
            mutation_coefficient: self.mutation_coefficient,
            shift_smoothness: self.shift_smoothness,
        }
    }

    pub fn validate(&self) -> CamoResult<()> {
        self.params().validate()
    }

    /// Generator for one run: seeded when `seed` is set.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
