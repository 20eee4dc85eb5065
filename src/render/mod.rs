/// Per-pixel frame compositing.
pub mod composite;
