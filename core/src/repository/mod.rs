pub mod snapshot;

// Re-export
pub use snapshot::FileSnapshotRepository;
pub use snapshot::SnapshotRepository;
