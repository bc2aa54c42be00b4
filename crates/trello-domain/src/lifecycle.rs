//! Board lifecycle state machine.
//!
//! ```text
//!   Loading ──online──▶ Online ◀──online── Offline
//!      │                  │                  ▲ │
//!   offline            offline ──────────────┘ │ offline
//!      ▼                                       ▼
//!   LoadingOffline ──online──▶ Online       Offline
//! ```
//!
//! Every transition and command takes `&self` and returns a new state; a
//! published state is never mutated. Query methods answer for every variant,
//! with empty answers while no board has been loaded.

use crate::board::Board;
use crate::card::{CardId, Label};
use crate::navigation::NavigationPosition;
use crate::snapshot::BoardSnapshot;
use chrono::{DateTime, Local, Utc};
use std::sync::Arc;
use trello_core::TrelloError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    BoardNotFound,
    Timeout,
    Other,
}

/// A fetch error captured as data inside the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Other, message)
    }
}

impl From<&TrelloError> for FetchFailure {
    fn from(err: &TrelloError) -> Self {
        let kind = match err {
            TrelloError::BoardNotFound(_) => FailureKind::BoardNotFound,
            TrelloError::Timeout(_) => FailureKind::Timeout,
            _ => FailureKind::Other,
        };
        FetchFailure::new(kind, err.to_string())
    }
}

impl From<TrelloError> for FetchFailure {
    fn from(err: TrelloError) -> Self {
        FetchFailure::from(&err)
    }
}

/// Board data together with the user's position in it.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedBoard {
    pub board: Arc<Board>,
    pub navigation: NavigationPosition,
}

impl LoadedBoard {
    fn fresh(board: Board) -> Self {
        let navigation = NavigationPosition::initial(&board);
        Self {
            board: Arc::new(board),
            navigation,
        }
    }

    fn refreshed(&self, board: Board) -> Self {
        let navigation = self.navigation.reconcile(&board);
        Self {
            board: Arc::new(board),
            navigation,
        }
    }

    fn with_navigation(&self, navigation: NavigationPosition) -> Self {
        Self {
            board: Arc::clone(&self.board),
            navigation,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BoardState {
    /// No fetch has completed yet. `seed` is a snapshot restored from disk,
    /// used only once the first fetch outcome arrives.
    Loading {
        board_name: String,
        seed: Option<LoadedBoard>,
    },
    /// Every fetch so far has failed and there is nothing to show.
    LoadingOffline {
        board_name: String,
        failure: FetchFailure,
    },
    Online {
        board_name: String,
        loaded: LoadedBoard,
    },
    /// The last fetch failed; the last known board stays navigable.
    Offline {
        board_name: String,
        loaded: LoadedBoard,
        failure: FetchFailure,
        since: DateTime<Utc>,
    },
}

impl BoardState {
    pub fn loading(board_name: impl Into<String>) -> Self {
        BoardState::Loading {
            board_name: board_name.into(),
            seed: None,
        }
    }

    /// Start loading with a restored snapshot. Snapshots of another board are ignored.
    pub fn seeded(board_name: impl Into<String>, snapshot: Option<BoardSnapshot>) -> Self {
        let board_name = board_name.into();
        let seed = snapshot
            .filter(|s| s.board_name == board_name)
            .map(|s| {
                let navigation = s.navigation.reconcile(&s.board);
                LoadedBoard {
                    board: Arc::new(s.board),
                    navigation,
                }
            });
        BoardState::Loading { board_name, seed }
    }

    pub fn board_name(&self) -> &str {
        match self {
            BoardState::Loading { board_name, .. }
            | BoardState::LoadingOffline { board_name, .. }
            | BoardState::Online { board_name, .. }
            | BoardState::Offline { board_name, .. } => board_name,
        }
    }

    /// Short variant name, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            BoardState::Loading { .. } => "loading",
            BoardState::LoadingOffline { .. } => "loading-offline",
            BoardState::Online { .. } => "online",
            BoardState::Offline { .. } => "offline",
        }
    }

    pub fn failure(&self) -> Option<&FetchFailure> {
        match self {
            BoardState::LoadingOffline { failure, .. } | BoardState::Offline { failure, .. } => {
                Some(failure)
            }
            _ => None,
        }
    }

    /// The board currently on screen, if any. A seed is not on screen.
    pub fn loaded(&self) -> Option<&LoadedBoard> {
        match self {
            BoardState::Online { loaded, .. } | BoardState::Offline { loaded, .. } => Some(loaded),
            _ => None,
        }
    }

    fn board(&self) -> Option<&Board> {
        self.loaded().map(|l| l.board.as_ref())
    }

    fn navigation(&self) -> Option<&NavigationPosition> {
        self.loaded().map(|l| &l.navigation)
    }

    // Transitions

    /// A fetch succeeded.
    pub fn online(&self, board: Board) -> BoardState {
        let board_name = self.board_name().to_string();
        let loaded = match self {
            BoardState::Loading { seed: Some(seed), .. } => seed.refreshed(board),
            BoardState::Loading { seed: None, .. } | BoardState::LoadingOffline { .. } => {
                LoadedBoard::fresh(board)
            }
            BoardState::Online { loaded, .. } | BoardState::Offline { loaded, .. } => {
                loaded.refreshed(board)
            }
        };
        BoardState::Online { board_name, loaded }
    }

    /// A fetch failed.
    pub fn offline(&self, failure: impl Into<FetchFailure>) -> BoardState {
        let failure = failure.into();
        let board_name = self.board_name().to_string();
        match self {
            BoardState::Loading { seed: None, .. } | BoardState::LoadingOffline { .. } => {
                BoardState::LoadingOffline {
                    board_name,
                    failure,
                }
            }
            BoardState::Loading {
                seed: Some(loaded), ..
            }
            | BoardState::Online { loaded, .. } => BoardState::Offline {
                board_name,
                loaded: loaded.clone(),
                failure,
                since: Utc::now(),
            },
            BoardState::Offline { loaded, since, .. } => BoardState::Offline {
                board_name,
                loaded: loaded.clone(),
                failure,
                since: *since,
            },
        }
    }

    // Header

    pub fn header_title(&self) -> String {
        let status = match self {
            BoardState::Loading { .. } => "loading",
            BoardState::LoadingOffline { .. } | BoardState::Offline { .. } => "offline",
            BoardState::Online { .. } => "online",
        };
        format!("{} - {}", self.board_name(), status)
    }

    pub fn header_subtitle(&self) -> String {
        match self {
            BoardState::Loading { .. } => "...".to_string(),
            BoardState::LoadingOffline {
                board_name,
                failure,
            } => {
                let headline = match failure.kind {
                    FailureKind::BoardNotFound => {
                        format!("Board \"{board_name}\" was not found.")
                    }
                    FailureKind::Timeout => "Could not load board: the request timed out.".into(),
                    FailureKind::Other => "Could not load board.".into(),
                };
                format!("{headline}\nDetails:\n{}", failure.message)
            }
            BoardState::Online { loaded, .. } => loaded.board.description.clone(),
            BoardState::Offline {
                loaded,
                failure,
                since,
                ..
            } => format!(
                "Showing board as of {}, offline since {}.\nDetails:\n{}",
                loaded.board.updated_at.with_timezone(&Local).format("%H:%M:%S"),
                since.with_timezone(&Local).format("%H:%M:%S"),
                failure.message
            ),
        }
    }

    // Queries

    pub fn lists_len(&self) -> usize {
        self.board().map_or(0, Board::lists_len)
    }

    pub fn list_name(&self, idx: usize) -> &str {
        self.board()
            .and_then(|b| b.list(idx))
            .map_or("", |l| l.name.as_str())
    }

    pub fn list_card_ids(&self, idx: usize) -> &[CardId] {
        self.board()
            .and_then(|b| b.list(idx))
            .map(|l| l.card_ids())
            .unwrap_or(&[])
    }

    pub fn card_name(&self, id: CardId) -> &str {
        self.board()
            .and_then(|b| b.card_by_id(id))
            .map_or("", |c| c.name.as_str())
    }

    pub fn card_labels(&self, id: CardId) -> &[Label] {
        self.board()
            .and_then(|b| b.card_by_id(id))
            .map(|c| c.labels.as_slice())
            .unwrap_or(&[])
    }

    pub fn card_description(&self, id: CardId) -> &str {
        self.board()
            .and_then(|b| b.card_by_id(id))
            .map_or("", |c| c.description.as_str())
    }

    pub fn selected_card_id(&self) -> Option<CardId> {
        self.navigation().and_then(|n| n.selected_card_id)
    }

    pub fn is_list_selected(&self, idx: usize) -> bool {
        self.navigation().is_some_and(|n| n.is_list_selected(idx))
    }

    pub fn is_card_selected(&self, id: CardId) -> bool {
        self.navigation().is_some_and(|n| n.is_card_selected(id))
    }

    pub fn is_card_popup_open(&self) -> bool {
        self.navigation().is_some_and(|n| n.card_popup_open)
    }

    pub fn first_visible_list_index(&self, lists_per_page: usize) -> usize {
        match self.loaded() {
            Some(l) => l.navigation.first_visible_list_index(&l.board, lists_per_page),
            None => 0,
        }
    }

    pub fn first_visible_card_index(&self, list_index: usize, cards_per_page: usize) -> usize {
        match self.loaded() {
            Some(l) => l
                .navigation
                .first_visible_card_index(&l.board, list_index, cards_per_page),
            None => 0,
        }
    }

    // Commands

    pub fn move_left(&self) -> BoardState {
        self.navigate(|nav, board| nav.move_left(board))
    }

    pub fn move_right(&self) -> BoardState {
        self.navigate(|nav, board| nav.move_right(board))
    }

    pub fn move_up(&self) -> BoardState {
        self.navigate(|nav, board| nav.move_up(board))
    }

    pub fn move_down(&self) -> BoardState {
        self.navigate(|nav, board| nav.move_down(board))
    }

    pub fn open_card_popup(&self) -> BoardState {
        self.navigate(|nav, _| nav.open_card_popup())
    }

    pub fn close_card_popup(&self) -> BoardState {
        self.navigate(|nav, _| nav.close_card_popup())
    }

    /// Commit scroll windows for a viewport; `None` when nothing moved.
    pub fn settle_windows(
        &self,
        lists_per_page: usize,
        cards_per_page: usize,
    ) -> Option<BoardState> {
        let loaded = self.loaded()?;
        let mut navigation = loaded.navigation.clone();
        if !navigation.settle_windows(&loaded.board, lists_per_page, cards_per_page) {
            return None;
        }
        Some(self.with_loaded(loaded.with_navigation(navigation)))
    }

    fn navigate(&self, f: impl FnOnce(&mut NavigationPosition, &Board)) -> BoardState {
        let Some(loaded) = self.loaded() else {
            return self.clone();
        };
        let mut navigation = loaded.navigation.clone();
        f(&mut navigation, &loaded.board);
        self.with_loaded(loaded.with_navigation(navigation))
    }

    fn with_loaded(&self, loaded: LoadedBoard) -> BoardState {
        match self {
            BoardState::Online { board_name, .. } => BoardState::Online {
                board_name: board_name.clone(),
                loaded,
            },
            BoardState::Offline {
                board_name,
                failure,
                since,
                ..
            } => BoardState::Offline {
                board_name: board_name.clone(),
                loaded,
                failure: failure.clone(),
                since: *since,
            },
            _ => self.clone(),
        }
    }

    /// Board and navigation worth persisting, if any are loaded or seeded.
    pub fn snapshot(&self) -> Option<BoardSnapshot> {
        let loaded = match self {
            BoardState::Loading { seed, .. } => seed.as_ref(),
            _ => self.loaded(),
        }?;
        Some(BoardSnapshot::new(
            self.board_name(),
            loaded.board.as_ref().clone(),
            loaded.navigation.clone(),
        ))
    }
}
