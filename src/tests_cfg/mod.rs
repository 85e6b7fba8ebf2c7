//! Configurations for test cases and examples. Not intended for actual use.

mod faulty;
pub mod satellite;

pub use faulty::*;
