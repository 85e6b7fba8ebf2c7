mod active_value;
pub mod prelude;
pub mod satellite;

pub use active_value::*;
