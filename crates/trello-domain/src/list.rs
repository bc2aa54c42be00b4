use crate::card::{Card, CardId};
use serde::{Deserialize, Serialize};

/// A board column. Cards are kept ordered by ascending position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ListRecord", into = "ListRecord")]
pub struct List {
    pub id: String,
    pub name: String,
    cards: Vec<Card>,
    card_ids: Vec<CardId>,
}

#[derive(Serialize, Deserialize)]
struct ListRecord {
    id: String,
    name: String,
    #[serde(default)]
    cards: Vec<Card>,
}

impl List {
    /// Build a list, ordering cards by position.
    ///
    /// The sort is stable: cards sharing a position keep the order in which
    /// they were delivered.
    pub fn new(id: impl Into<String>, name: impl Into<String>, mut cards: Vec<Card>) -> Self {
        cards.sort_by(|a, b| a.position.total_cmp(&b.position));
        let card_ids = cards.iter().map(|c| c.id).collect();
        Self {
            id: id.into(),
            name: name.into(),
            cards,
            card_ids,
        }
    }

    pub fn card_ids(&self) -> &[CardId] {
        &self.card_ids
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Index of the card within this list's ordering.
    pub fn position_of(&self, id: CardId) -> Option<usize> {
        self.card_ids.iter().position(|&c| c == id)
    }

    pub fn first_card_id(&self) -> Option<CardId> {
        self.card_ids.first().copied()
    }

    pub fn len(&self) -> usize {
        self.card_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.card_ids.is_empty()
    }
}

impl From<ListRecord> for List {
    fn from(record: ListRecord) -> Self {
        List::new(record.id, record.name, record.cards)
    }
}

impl From<List> for ListRecord {
    fn from(list: List) -> Self {
        ListRecord {
            id: list.id,
            name: list.name,
            cards: list.cards,
        }
    }
}
