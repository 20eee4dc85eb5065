/// Bounded random-walk shift sequences.
pub mod sequence;
