use super::colors::*;
use ratatui::style::{Color, Modifier, Style};
use trello_domain::BoardState;

pub fn focused_border() -> Style {
    Style::default().fg(FOCUSED_BORDER)
}

pub fn unfocused_border() -> Style {
    Style::default().fg(UNFOCUSED_BORDER)
}

pub fn selected_item(focused: bool) -> Style {
    if focused {
        Style::default().bg(SELECTED_BG).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

pub fn normal_text() -> Style {
    Style::default().fg(NORMAL_TEXT)
}

pub fn label_text() -> Style {
    Style::default().fg(LABEL_TEXT)
}

pub fn highlight_text() -> Style {
    Style::default().fg(HIGHLIGHT_TEXT)
}

pub fn bold_highlight() -> Style {
    Style::default()
        .fg(HIGHLIGHT_TEXT)
        .add_modifier(Modifier::BOLD)
}

pub fn popup_bg() -> Style {
    Style::default().bg(POPUP_BG)
}

/// Border colour of the header, reflecting the board's lifecycle state.
pub fn status_style(state: &BoardState) -> Style {
    let color = match state {
        BoardState::Loading { .. } => STATUS_LOADING,
        BoardState::Online { .. } => STATUS_ONLINE,
        BoardState::LoadingOffline { .. } | BoardState::Offline { .. } => STATUS_OFFLINE,
    };
    Style::default().fg(color)
}

/// Map a Trello label colour name (including `_dark`/`_light` variants) to a terminal colour.
pub fn label_color(name: &str) -> Color {
    let base = name
        .trim_end_matches("_dark")
        .trim_end_matches("_light");
    match base {
        "green" => TRELLO_GREEN,
        "yellow" => TRELLO_YELLOW,
        "orange" => TRELLO_ORANGE,
        "red" => TRELLO_RED,
        "purple" => TRELLO_PURPLE,
        "blue" => TRELLO_BLUE,
        "sky" => TRELLO_SKY,
        "lime" => TRELLO_LIME,
        "pink" => TRELLO_PINK,
        "black" => TRELLO_BLACK,
        _ => LABEL_TEXT,
    }
}

pub fn label_style(color: &str) -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(label_color(color))
}
