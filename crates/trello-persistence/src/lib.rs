pub mod store;
pub mod traits;

pub use store::{AtomicWriter, JsonSnapshotStore};
pub use traits::SnapshotStore;
