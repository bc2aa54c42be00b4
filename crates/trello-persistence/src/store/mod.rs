pub mod atomic_writer;
pub mod json_snapshot_store;

pub use atomic_writer::AtomicWriter;
pub use json_snapshot_store::JsonSnapshotStore;
