use crate::theme::{focused_border, label_style, label_text, normal_text, popup_bg};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use trello_domain::Label;

/// A rectangle covering `percent_x` by `percent_y` of `area`, centered in it.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Percentage(percent_y),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, center, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Percentage(percent_x),
        Constraint::Fill(1),
    ])
    .areas(middle);
    center
}

/// Full view of one card drawn over the board.
pub struct CardPopup<'a> {
    pub name: &'a str,
    pub labels: &'a [Label],
    pub description: &'a str,
}

impl CardPopup<'_> {
    pub fn render(&self, frame: &mut Frame) {
        let area = centered_rect(60, 60, frame.area());
        frame.render_widget(Clear, area);

        let block = Block::default()
            .title(format!(" {} ", self.name))
            .borders(Borders::ALL)
            .border_style(focused_border())
            .style(popup_bg());

        let paragraph = Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![];

        if !self.labels.is_empty() {
            let mut spans = vec![];
            for label in self.labels {
                // unnamed labels show their colour instead
                let text = if label.name.is_empty() {
                    &label.color
                } else {
                    &label.name
                };
                spans.push(Span::styled(format!(" {text} "), label_style(&label.color)));
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(spans));
            lines.push(Line::default());
        }

        if self.description.is_empty() {
            lines.push(Line::from(Span::styled("No description", label_text())));
        } else {
            lines.extend(
                self.description
                    .lines()
                    .map(|line| Line::from(Span::styled(line.to_string(), normal_text()))),
            );
        }
        lines
    }
}
