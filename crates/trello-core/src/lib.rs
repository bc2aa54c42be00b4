pub mod config;
pub mod error;
pub mod logging;
pub mod pagination;
pub mod result;

pub use config::AppConfig;
pub use error::TrelloError;
pub use pagination::{first_visible, PageInfo};
pub use result::TrelloResult;
