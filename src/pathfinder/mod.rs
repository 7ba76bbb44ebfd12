//! Overland pathfinder configuration
//!
//! Only the option set and rule-set construction are provided here.

pub mod options;

pub use options::{PathfinderConfig, PathfinderOptions, PathfindingRule};
