use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::ui::theme::Theme;

/// A collapsible disclosure panel: one header line when closed, header plus
/// body when open. Open/closed state lives in the progress record, not here.
pub struct HintPanel<'a> {
    pub key_label: &'a str,
    pub title: &'a str,
    pub body: &'a [&'a str],
    pub open: bool,
    pub theme: &'a Theme,
}

impl<'a> HintPanel<'a> {
    pub fn new(
        key_label: &'a str,
        title: &'a str,
        body: &'a [&'a str],
        open: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            key_label,
            title,
            body,
            open,
            theme,
        }
    }

    /// Rows this panel occupies, used by the screen layout.
    pub fn height(&self) -> u16 {
        if self.open {
            1 + self.body.len() as u16
        } else {
            1
        }
    }
}

impl Widget for HintPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let marker = if self.open { "▾" } else { "▸" };

        let mut lines = vec![Line::from(vec![
            Span::styled(
                format!(" {marker} "),
                Style::default().fg(colors.accent()),
            ),
            Span::styled(
                format!("[{}] ", self.key_label),
                Style::default().fg(colors.accent_dim()),
            ),
            Span::styled(
                self.title,
                Style::default()
                    .fg(colors.fg())
                    .add_modifier(if self.open {
                        Modifier::BOLD
                    } else {
                        Modifier::empty()
                    }),
            ),
        ])];

        if self.open {
            for body_line in self.body {
                lines.push(Line::from(Span::styled(
                    format!("     {body_line}"),
                    Style::default().fg(colors.text_dim()),
                )));
            }
        }

        Paragraph::new(lines).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_panel_is_one_row() {
        let theme = Theme::fallback();
        let panel = HintPanel::new("F1", "A note", &["line", "line"], false, &theme);
        assert_eq!(panel.height(), 1);
    }

    #[test]
    fn open_panel_includes_body_rows() {
        let theme = Theme::fallback();
        let panel = HintPanel::new("F1", "A note", &["one", "two", "three"], true, &theme);
        assert_eq!(panel.height(), 4);
    }
}
