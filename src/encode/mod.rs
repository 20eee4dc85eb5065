//! Frame sinks.
//!
//! The animation core only produces frames; sinks decide where they go.

/// Animated GIF output via `image`.
pub mod gif;
/// Generic frame sink trait and the in-memory sink.
pub mod sink;
