pub mod board;
pub mod card;
pub mod fetcher;
pub mod lifecycle;
pub mod list;
pub mod navigation;
pub mod snapshot;

pub use board::Board;
pub use card::{Card, CardId, Label};
pub use fetcher::BoardFetcher;
pub use lifecycle::{BoardState, FailureKind, FetchFailure, LoadedBoard};
pub use list::List;
pub use navigation::NavigationPosition;
pub use snapshot::BoardSnapshot;
