use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Widget};

use crate::ui::theme::Theme;

/// Blocking yes/no prompt rendered over the current screen. Input goes
/// nowhere else while it is up.
pub struct ConfirmDialog<'a> {
    pub message: &'a str,
    pub theme: &'a Theme,
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let width = (self.message.chars().count() as u16 + 6)
            .max(30)
            .min(area.width);
        let height: u16 = 5;
        let left = area.x + area.width.saturating_sub(width) / 2;
        let top = area.y + area.height.saturating_sub(height) / 2;
        let dialog_area = Rect::new(left, top, width, height.min(area.height));

        Clear.render(dialog_area, buf);

        let block = Block::bordered()
            .border_style(Style::default().fg(colors.accent()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(dialog_area);
        block.render(dialog_area, buf);

        let lines = vec![
            Line::from(Span::styled(
                self.message,
                Style::default()
                    .fg(colors.fg())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("[y]", Style::default().fg(colors.error())),
                Span::styled(" Yes   ", Style::default().fg(colors.fg())),
                Span::styled("[n]", Style::default().fg(colors.success())),
                Span::styled(" No", Style::default().fg(colors.fg())),
            ]),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
