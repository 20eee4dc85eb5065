//! Glyphcamo renders a word glyph as animated, noise-camouflaged frames.
//!
//! Two independent noise fields fill the inside and the outside of the glyph, and a flickering
//! contour band separates them. The word is only visible through its shape, never through sharp
//! edges. The pipeline:
//!
//! - [`extract`] splits a glyph raster into word and contour masks plus a bounding box
//! - [`Animator`] drifts the masks along a bounded random walk, shimmers the word and background
//!   noise, regenerates the contour noise, and composites one [`RgbFrame`] per step
//! - a [`FrameSink`] (for example [`GifSink`]) consumes the frames
//!
//! All randomness comes from a caller-supplied [`rand::Rng`], so seeded runs are reproducible.
#![forbid(unsafe_code)]

mod foundation;

pub mod animation;
pub mod color;
pub mod config;
pub mod encode;
pub mod field;
pub mod motion;
pub mod render;
pub mod zones;

pub use crate::foundation::core::{BoundingBox, RgbFrame, ShiftVector};
pub use crate::foundation::error::{CamoError, CamoResult};
pub use crate::foundation::grid::{Grid, Mask, NoiseField};

pub use crate::animation::driver::{AnimationParams, AnimationState, Animator, generate_frames};
pub use crate::color::palette::{GradientPalette, ListedPalette, Palette, PaletteChoice, map_field};
pub use crate::config::CamoConfig;
pub use crate::encode::gif::{GifSink, GifSinkOpts};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::motion::sequence::ShiftBounds;
pub use crate::render::composite::{NoiseLayers, Source, composite};
pub use crate::zones::extract::{MID_INTENSITY_THRESHOLD, Zones, extract};
