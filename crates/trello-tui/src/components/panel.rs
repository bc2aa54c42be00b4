use crate::theme::{focused_border, highlight_text, label_text, unfocused_border};
use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders},
};

/// Frame of one board list, titled with the list name and its card count.
pub struct ListColumn<'a> {
    pub name: &'a str,
    pub card_count: usize,
    pub is_selected: bool,
}

impl<'a> ListColumn<'a> {
    pub fn new(name: &'a str, card_count: usize) -> Self {
        Self {
            name,
            card_count,
            is_selected: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.is_selected = selected;
        self
    }

    pub fn block(&self) -> Block<'a> {
        let name_style = if self.is_selected {
            highlight_text()
        } else {
            Style::default()
        };
        let title = Line::from(vec![
            Span::styled(format!(" {}", self.name), name_style),
            Span::styled(format!(" ({}) ", self.card_count), label_text()),
        ]);
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(self.is_selected))
            .title(title)
    }
}

/// Frame of a single card tile.
pub fn card_block(is_selected: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(is_selected))
}

fn border_style(is_selected: bool) -> Style {
    if is_selected {
        focused_border()
    } else {
        unfocused_border()
    }
}
