pub mod app;
pub mod components;
pub mod events;
pub mod keybindings;
pub mod state;
pub mod theme;
pub mod ui;

pub use app::App;
pub use state::{Poller, PollerHandle, StateStore};
