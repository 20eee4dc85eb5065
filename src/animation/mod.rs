/// Stateful per-frame animation driver.
pub mod driver;
