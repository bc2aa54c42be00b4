//! Selection and scroll-window tracking for a loaded board.
//!
//! A [`NavigationPosition`] is a plain value. Commands mutate a copy which the
//! lifecycle state machine then publishes as part of a new state, so nothing
//! here is ever shared mutably.

use crate::board::Board;
use crate::card::CardId;
use serde::{Deserialize, Serialize};
use trello_core::first_visible;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationPosition {
    pub selected_list_index: usize,
    /// `None` only while the board has no cards at all.
    pub selected_card_id: Option<CardId>,
    pub card_popup_open: bool,
    pub first_visible_list_index: usize,
    /// One committed card window per list, indexed like `Board::lists`.
    pub first_visible_card_indices: Vec<usize>,
}

impl NavigationPosition {
    /// Select the first card of the first non-empty list.
    pub fn initial(board: &Board) -> Self {
        let mut nav = NavigationPosition {
            first_visible_card_indices: vec![0; board.lists_len()],
            ..NavigationPosition::default()
        };
        nav.select_first_available(board);
        nav
    }

    /// Carry this position over to a freshly fetched board.
    ///
    /// The selection is kept when its card still exists (following the card if
    /// it moved to another list); otherwise the first available card is
    /// selected and the popup closes.
    pub fn reconcile(&self, board: &Board) -> Self {
        let mut nav = self.clone();
        nav.reset_windows(board);

        match nav.selected_card_id.and_then(|id| board.locate_card(id)) {
            Some((list_idx, _)) => nav.selected_list_index = list_idx,
            None => {
                nav.card_popup_open = false;
                nav.select_first_available(board);
            }
        }
        nav
    }

    fn select_first_available(&mut self, board: &Board) {
        match board.first_available_card() {
            Some((list_idx, card_id)) => {
                self.selected_list_index = list_idx;
                self.selected_card_id = Some(card_id);
            }
            None => {
                self.selected_list_index = 0;
                self.selected_card_id = None;
                self.card_popup_open = false;
            }
        }
    }

    /// Window offsets are rebuilt whenever the list set changes shape.
    fn reset_windows(&mut self, board: &Board) {
        if self.first_visible_card_indices.len() == board.lists_len() {
            for (offset, list) in self.first_visible_card_indices.iter_mut().zip(&board.lists) {
                *offset = (*offset).min(list.len().saturating_sub(1));
            }
        } else {
            self.first_visible_card_indices = vec![0; board.lists_len()];
        }
        self.first_visible_list_index = self
            .first_visible_list_index
            .min(board.lists_len().saturating_sub(1));
    }

    pub fn is_list_selected(&self, idx: usize) -> bool {
        self.selected_list_index == idx
    }

    pub fn is_card_selected(&self, id: CardId) -> bool {
        self.selected_card_id == Some(id)
    }

    /// Jump to the first card of the nearest non-empty list on the left.
    pub fn move_left(&mut self, board: &Board) {
        if board.is_empty {
            return;
        }
        let target = (0..self.selected_list_index.min(board.lists_len()))
            .rev()
            .find_map(|idx| board.lists[idx].first_card_id().map(|id| (idx, id)));
        if let Some((idx, id)) = target {
            self.selected_list_index = idx;
            self.selected_card_id = Some(id);
        }
    }

    /// Jump to the first card of the nearest non-empty list on the right.
    pub fn move_right(&mut self, board: &Board) {
        if board.is_empty {
            return;
        }
        let target = (self.selected_list_index + 1..board.lists_len())
            .find_map(|idx| board.lists[idx].first_card_id().map(|id| (idx, id)));
        if let Some((idx, id)) = target {
            self.selected_list_index = idx;
            self.selected_card_id = Some(id);
        }
    }

    pub fn move_up(&mut self, board: &Board) {
        if let Some((ids, pos)) = self.selected_in_list(board) {
            if pos > 0 {
                self.selected_card_id = Some(ids[pos - 1]);
            }
        }
    }

    pub fn move_down(&mut self, board: &Board) {
        if let Some((ids, pos)) = self.selected_in_list(board) {
            if pos + 1 < ids.len() {
                self.selected_card_id = Some(ids[pos + 1]);
            }
        }
    }

    fn selected_in_list<'a>(&self, board: &'a Board) -> Option<(&'a [CardId], usize)> {
        if board.is_empty {
            return None;
        }
        let list = board.list(self.selected_list_index)?;
        let pos = list.position_of(self.selected_card_id?)?;
        Some((list.card_ids(), pos))
    }

    pub fn open_card_popup(&mut self) {
        if self.selected_card_id.is_some() {
            self.card_popup_open = true;
        }
    }

    pub fn close_card_popup(&mut self) {
        self.card_popup_open = false;
    }

    pub fn first_visible_list_index(&self, board: &Board, lists_per_page: usize) -> usize {
        first_visible(
            self.selected_list_index,
            lists_per_page,
            board.lists_len(),
            self.first_visible_list_index,
        )
    }

    /// First visible card of `list_index`. Lists that do not hold the
    /// selection keep their committed window, clamped so the last page is full.
    pub fn first_visible_card_index(
        &self,
        board: &Board,
        list_index: usize,
        cards_per_page: usize,
    ) -> usize {
        let current = self
            .first_visible_card_indices
            .get(list_index)
            .copied()
            .unwrap_or(0);
        let Some(list) = board.list(list_index) else {
            return current;
        };
        let selected = self
            .selected_card_id
            .and_then(|id| list.position_of(id));
        match selected {
            Some(pos) => first_visible(pos, cards_per_page, list.len(), current),
            None => current.min(list.len().saturating_sub(cards_per_page.max(1))),
        }
    }

    /// Commit the windows computed for the given viewport. Returns whether
    /// anything changed.
    pub fn settle_windows(
        &mut self,
        board: &Board,
        lists_per_page: usize,
        cards_per_page: usize,
    ) -> bool {
        let mut changed = false;

        let first_list = self.first_visible_list_index(board, lists_per_page);
        if first_list != self.first_visible_list_index {
            self.first_visible_list_index = first_list;
            changed = true;
        }

        if self.first_visible_card_indices.len() != board.lists_len() {
            self.first_visible_card_indices.resize(board.lists_len(), 0);
            changed = true;
        }
        let list_idx = self.selected_list_index;
        if list_idx < board.lists_len() {
            let first_card = self.first_visible_card_index(board, list_idx, cards_per_page);
            if first_card != self.first_visible_card_indices[list_idx] {
                self.first_visible_card_indices[list_idx] = first_card;
                changed = true;
            }
        }
        changed
    }
}
