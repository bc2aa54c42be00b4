use serde::{Deserialize, Serialize};

/// Short numeric card id, unique within a board.
pub type CardId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
    pub color: String,
}

impl Label {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub position: f64,
    #[serde(default)]
    pub labels: Vec<Label>,
}

impl Card {
    pub fn new(
        id: CardId,
        name: impl Into<String>,
        description: impl Into<String>,
        position: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            position,
            labels: Vec::new(),
        }
    }

    /// Attach labels, dropping duplicates while keeping first-seen order.
    pub fn with_labels(mut self, labels: impl IntoIterator<Item = Label>) -> Self {
        for label in labels {
            if !self.labels.contains(&label) {
                self.labels.push(label);
            }
        }
        self
    }
}
