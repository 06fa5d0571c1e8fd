//! The scoring pipeline: profile → points → aggregates → positional ranks
//! → cross-profile comparison.

pub mod aggregate;
pub mod compare;
pub mod points;
pub mod profile;
pub mod rank;

pub use aggregate::{aggregate_rows, PlayerAggregate};
pub use compare::{run_comparison, ComparisonResult, LabeledAverage, ProfileSet};
pub use points::fantasy_points;
pub use profile::ScoringProfile;
pub use rank::{top_n_position_averages, PositionAverage};
