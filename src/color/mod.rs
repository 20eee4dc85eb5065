/// Scalar-to-RGB palettes.
pub mod palette;
