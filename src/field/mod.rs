/// Noise-field generation and fractional mutation.
pub mod noise;
