//! CLI surface: argument structures and value types.

pub mod args;
pub mod types;

pub use args::{Commands, CommonArgs, FflScoring};
