use crate::components::*;
use crate::keybindings;
use crate::theme::*;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use trello_core::PageInfo;
use trello_domain::{BoardState, CardId};

/// Width of one list column, borders included.
pub const LIST_WIDTH: u16 = 32;
/// Height of one card, borders included.
pub const CARD_HEIGHT: u16 = 3;
const HEADER_HEIGHT: u16 = 5;
const FOOTER_HEIGHT: u16 = 3;

/// How many lists and cards fit on screen for the last drawn frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub lists_per_page: usize,
    pub cards_per_page: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            lists_per_page: 1,
            cards_per_page: 1,
        }
    }
}

pub fn render(state: &BoardState, frame: &mut Frame) -> Viewport {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(frame.area());

    render_header(state, frame, chunks[0]);
    let viewport = render_board(state, frame, chunks[1]);
    render_footer(state, frame, chunks[2]);

    if state.is_card_popup_open() {
        if let Some(card_id) = state.selected_card_id() {
            render_card_popup(state, card_id, frame);
        }
    }

    viewport
}

fn render_header(state: &BoardState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(status_style(state))
        .title(Span::styled(
            format!(" {} ", state.header_title()),
            bold_highlight(),
        ));

    let subtitle: Vec<Line> = state
        .header_subtitle()
        .lines()
        .map(|line| Line::from(Span::styled(line.to_string(), normal_text())))
        .collect();

    let paragraph = Paragraph::new(subtitle)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_board(state: &BoardState, frame: &mut Frame, area: Rect) -> Viewport {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);
    let columns_area = chunks[1];

    // one row above and one below the cards are kept for scroll indicators
    let cards_height = columns_area.height.saturating_sub(2).saturating_sub(2);
    let viewport = Viewport {
        lists_per_page: usize::from(area.width / LIST_WIDTH).max(1),
        cards_per_page: usize::from(cards_height / CARD_HEIGHT).max(1),
    };

    let total_lists = state.lists_len();
    if total_lists == 0 {
        if state.loaded().is_some() {
            let empty = Paragraph::new("This board has no lists.")
                .style(label_text())
                .alignment(Alignment::Center);
            frame.render_widget(empty, columns_area);
        }
        return viewport;
    }

    let first_list = state.first_visible_list_index(viewport.lists_per_page);
    let page = PageInfo::new(first_list, viewport.lists_per_page, total_lists);
    render_list_indicators(&page, frame, chunks[0]);

    for (slot, &list_idx) in page.visible_indices.iter().enumerate() {
        let x = columns_area.x + slot as u16 * LIST_WIDTH;
        let width = LIST_WIDTH.min(columns_area.right().saturating_sub(x));
        if width == 0 {
            break;
        }
        let column = Rect::new(x, columns_area.y, width, columns_area.height);
        render_list(state, list_idx, viewport.cards_per_page, frame, column);
    }

    viewport
}

fn render_list_indicators(page: &PageInfo, frame: &mut Frame, area: Rect) {
    if page.show_above_indicator {
        let left = Paragraph::new(format!("◀ {} more", page.items_above)).style(label_text());
        frame.render_widget(left, area);
    }
    if page.show_below_indicator {
        let right = Paragraph::new(format!("{} more ▶", page.items_below))
            .style(label_text())
            .alignment(Alignment::Right);
        frame.render_widget(right, area);
    }
}

fn render_list(
    state: &BoardState,
    list_idx: usize,
    cards_per_page: usize,
    frame: &mut Frame,
    area: Rect,
) {
    let is_selected = state.is_list_selected(list_idx);
    let card_ids = state.list_card_ids(list_idx);
    let block = ListColumn::new(state.list_name(list_idx), card_ids.len())
        .selected(is_selected)
        .block();
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if card_ids.is_empty() {
        let empty = Paragraph::new("No cards").style(label_text());
        frame.render_widget(empty, inner);
        return;
    }

    let first_card = state.first_visible_card_index(list_idx, cards_per_page);
    let page = PageInfo::new(first_card, cards_per_page, card_ids.len());

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    if page.show_above_indicator {
        let above = Paragraph::new(format!("▲ {} more", page.items_above)).style(label_text());
        frame.render_widget(above, rows[0]);
    }

    let cards_area = rows[1];
    for (slot, &pos) in page.visible_indices.iter().enumerate() {
        let y = cards_area.y + slot as u16 * CARD_HEIGHT;
        if y + CARD_HEIGHT > cards_area.bottom() {
            break;
        }
        let card_area = Rect::new(cards_area.x, y, cards_area.width, CARD_HEIGHT);
        render_card(state, card_ids[pos], frame, card_area);
    }

    if page.show_below_indicator {
        let below = Paragraph::new(format!("▼ {} more", page.items_below)).style(label_text());
        frame.render_widget(below, rows[2]);
    }
}

fn render_card(state: &BoardState, card_id: CardId, frame: &mut Frame, area: Rect) {
    let is_selected = state.is_card_selected(card_id);

    let mut spans: Vec<Span> = state
        .card_labels(card_id)
        .iter()
        .map(|label| Span::styled("▌", Style::default().fg(label_color(&label.color))))
        .collect();
    spans.push(Span::styled(state.card_name(card_id).to_string(), normal_text()));

    let paragraph = Paragraph::new(Line::from(spans))
        .block(card_block(is_selected))
        .style(selected_item(is_selected));
    frame.render_widget(paragraph, area);
}

fn render_card_popup(state: &BoardState, card_id: CardId, frame: &mut Frame) {
    CardPopup {
        name: state.card_name(card_id),
        labels: state.card_labels(card_id),
        description: state.card_description(card_id),
    }
    .render(frame);
}

fn render_footer(state: &BoardState, frame: &mut Frame, area: Rect) {
    let mut spans = vec![];
    for (idx, binding) in keybindings::hints(state.is_card_popup_open())
        .iter()
        .enumerate()
    {
        if idx > 0 {
            spans.push(Span::styled("  ", label_text()));
        }
        spans.push(Span::styled(binding.key, highlight_text()));
        spans.push(Span::styled(format!(": {}", binding.short_description), label_text()));
    }

    let help = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}
