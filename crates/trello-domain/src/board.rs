use crate::card::{Card, CardId};
use crate::list::List;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A whole board as delivered by one fetch. Replaced wholesale on refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub is_empty: bool,
    pub lists: Vec<List>,
    pub updated_at: DateTime<Utc>,
}

impl Board {
    pub fn new(name: impl Into<String>, description: impl Into<String>, lists: Vec<List>) -> Self {
        let is_empty = lists.iter().all(List::is_empty);
        Self {
            name: name.into(),
            description: description.into(),
            is_empty,
            lists,
            updated_at: Utc::now(),
        }
    }

    pub fn list(&self, idx: usize) -> Option<&List> {
        self.lists.get(idx)
    }

    pub fn lists_len(&self) -> usize {
        self.lists.len()
    }

    pub fn card_by_id(&self, id: CardId) -> Option<&Card> {
        self.lists.iter().find_map(|list| list.card(id))
    }

    pub fn contains_card(&self, id: CardId) -> bool {
        self.locate_card(id).is_some()
    }

    /// Returns `(list index, index within list)` for a card.
    pub fn locate_card(&self, id: CardId) -> Option<(usize, usize)> {
        self.lists
            .iter()
            .enumerate()
            .find_map(|(list_idx, list)| list.position_of(id).map(|pos| (list_idx, pos)))
    }

    /// First card of the first non-empty list, with that list's index.
    pub fn first_available_card(&self) -> Option<(usize, CardId)> {
        self.lists
            .iter()
            .enumerate()
            .find_map(|(idx, list)| list.first_card_id().map(|id| (idx, id)))
    }
}
