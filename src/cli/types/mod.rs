//! Type-safe wrappers for seasons and positions.

pub mod position;
pub mod season;

pub use position::{is_quarterback, Position};
pub use season::Season;
