//! Shared board state and the background refresh that feeds it.

pub mod poller;
pub mod store;

pub use poller::{Poller, PollerHandle};
pub use store::StateStore;
