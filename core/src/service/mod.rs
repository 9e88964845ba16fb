pub mod tracker;

mod tracker_test;

// Re-export
pub use tracker::{StepTracker, DEFAULT_GOAL};
