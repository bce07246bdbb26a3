use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::ui::theme::Theme;

const SOON_ART: &[&str] = &[
    " ██████  ██████  ███    ███ ██ ███    ██  ██████ ",
    "██      ██    ██ ████  ████ ██ ████   ██ ██      ",
    "██      ██    ██ ██ ████ ██ ██ ██ ██  ██ ██  ███ ",
    "██      ██    ██ ██  ██  ██ ██ ██  ██ ██ ██   ██ ",
    " ██████  ██████  ██      ██ ██ ██   ████  ██████ ",
    "",
    "███████  ██████   ██████  ███    ██",
    "██      ██    ██ ██    ██ ████   ██",
    "███████ ██    ██ ██    ██ ██ ██  ██",
    "     ██ ██    ██ ██    ██ ██  ██ ██",
    "███████  ██████   ██████  ██   ████",
];

/// The screen behind the door. Terminal for the session; the only way back
/// to the entrance is a reset.
pub struct SoonScreen<'a> {
    pub theme: &'a Theme,
}

impl Widget for SoonScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(SOON_ART.len() as u16),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);

        let art_lines: Vec<Line> = SOON_ART
            .iter()
            .map(|row| {
                Line::from(Span::styled(
                    *row,
                    Style::default()
                        .fg(colors.success())
                        .add_modifier(Modifier::BOLD),
                ))
            })
            .collect();
        Paragraph::new(art_lines)
            .alignment(Alignment::Center)
            .render(layout[1], buf);

        let caption = vec![
            Line::from(""),
            Line::from(Span::styled(
                "The door swings open. The prologue begins... soon.",
                Style::default().fg(colors.text_dim()),
            )),
        ];
        Paragraph::new(caption)
            .alignment(Alignment::Center)
            .render(layout[2], buf);
    }
}
