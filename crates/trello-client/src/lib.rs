pub mod client;
mod models;

pub use client::{TrelloClient, DEFAULT_BASE_URL};
