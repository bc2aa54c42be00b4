//! Wire types for the subset of the Trello API we read, and their mapping
//! onto the domain model.

use serde::Deserialize;
use std::collections::HashMap;
use trello_domain::{Board, Card, Label, List};

#[derive(Debug, Deserialize)]
pub(crate) struct ApiBoard {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub desc: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiList {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiCard {
    pub id_short: i64,
    pub id_list: String,
    pub name: String,
    #[serde(default)]
    pub desc: String,
    pub pos: f64,
    #[serde(default)]
    pub labels: Vec<ApiLabel>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiLabel {
    #[serde(default)]
    pub name: String,
    pub color: Option<String>,
}

/// Case-insensitive board lookup by name.
pub(crate) fn find_board(boards: Vec<ApiBoard>, name: &str) -> Option<ApiBoard> {
    let wanted = name.to_lowercase();
    boards.into_iter().find(|b| b.name.to_lowercase() == wanted)
}

/// Group cards under their lists, keeping the list order the API returned.
/// Cards pointing at unknown lists are dropped.
pub(crate) fn build_board(board: ApiBoard, lists: Vec<ApiList>, cards: Vec<ApiCard>) -> Board {
    let mut cards_by_list: HashMap<String, Vec<Card>> = HashMap::new();
    for card in cards {
        let labels = card.labels.into_iter().map(|l| {
            Label::new(l.name, l.color.unwrap_or_else(|| "none".to_string()))
        });
        cards_by_list.entry(card.id_list).or_default().push(
            Card::new(card.id_short, card.name, card.desc, card.pos).with_labels(labels),
        );
    }

    let lists = lists
        .into_iter()
        .map(|list| {
            let cards = cards_by_list.remove(&list.id).unwrap_or_default();
            List::new(list.id, list.name, cards)
        })
        .collect();

    Board::new(board.name, board.desc, lists)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse<T: serde::de::DeserializeOwned>(json: &str) -> T {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_find_board_ignores_case() {
        let boards: Vec<ApiBoard> = parse(
            r#"[{"id":"b1","name":"Personal"},{"id":"b2","name":"Team Roadmap","desc":"x"}]"#,
        );
        let found = find_board(boards, "team roadmap").unwrap();
        assert_eq!(found.id, "b2");
    }

    #[test]
    fn test_find_board_missing() {
        let boards: Vec<ApiBoard> = parse(r#"[{"id":"b1","name":"Personal"}]"#);
        assert!(find_board(boards, "Work").is_none());
    }

    #[test]
    fn test_build_board_groups_and_orders_cards() {
        let board: ApiBoard = parse(r#"{"id":"b1","name":"Team","desc":"Team board"}"#);
        let lists: Vec<ApiList> = parse(
            r#"[{"id":"l2","name":"Doing"},{"id":"l1","name":"Todo"},{"id":"l3","name":"Done"}]"#,
        );
        let cards: Vec<ApiCard> = parse(
            r#"[
                {"id":"c1","idShort":4,"idList":"l1","name":"Write docs","pos":32768.5,
                 "labels":[{"name":"docs","color":"blue"},{"name":"","color":null}]},
                {"id":"c2","idShort":2,"idList":"l1","name":"Fix bug","desc":"crash","pos":16384},
                {"id":"c3","idShort":7,"idList":"l2","name":"Review","pos":1},
                {"id":"c4","idShort":8,"idList":"gone","name":"Orphan","pos":1}
            ]"#,
        );

        let board = build_board(board, lists, cards);
        assert_eq!(board.name, "Team");
        assert_eq!(board.description, "Team board");
        assert!(!board.is_empty);

        let names: Vec<&str> = board.lists.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Doing", "Todo", "Done"]);
        assert_eq!(board.lists[0].card_ids(), &[7]);
        assert_eq!(board.lists[1].card_ids(), &[2, 4]);
        assert!(board.lists[2].is_empty());
        assert!(board.card_by_id(8).is_none());

        let card = board.card_by_id(4).unwrap();
        assert_eq!(
            card.labels,
            vec![Label::new("docs", "blue"), Label::new("", "none")]
        );
        assert_eq!(board.card_by_id(2).unwrap().description, "crash");
    }

    #[test]
    fn test_board_without_cards_is_empty() {
        let board: ApiBoard = parse(r#"{"id":"b1","name":"Empty"}"#);
        let lists: Vec<ApiList> = parse(r#"[{"id":"l1","name":"Todo"}]"#);
        let board = build_board(board, lists, vec![]);
        assert!(board.is_empty);
        assert_eq!(board.lists_len(), 1);
    }
}
