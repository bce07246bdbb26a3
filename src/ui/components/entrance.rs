use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::ui::components::hint_panel::HintPanel;
use crate::ui::theme::Theme;
use crate::unlock::CODE_LEN;

const DOOR_ART: &[&str] = &[
    "      ________      ",
    "     |  ____  |     ",
    "     | |    | |     ",
    "     | | () | |     ",
    "     | |____| |     ",
    "     |________|     ",
];

const HINT1_TITLE: &str = "The White Rabbit's note";
const HINT1_BODY: &[&str] = &[
    "\"I'm late, I'm late! Two turns of the clock",
    " hand, then seven steps down the stair.\"",
];

const HINT2_TITLE: &str = "Floor diagram";
const HINT2_BODY: &[&str] = &[
    "+--------+---------+",
    "| parlor |  study  |",
    "+---+----+----+----+",
    "    |  hallway |",
    "    +---[D]----+",
];

const ANNOTATION_TITLE: &str = "Diagram notes";
const ANNOTATION_BODY: &[&str] = &[
    "[D]  the brass plate on the hallway door.",
    "     Its number reads top to bottom.",
];

/// The password-gated entrance screen: door art, the 3-slot code field, an
/// inline feedback line, and the two disclosure panels. The annotation block
/// under the diagram renders if and only if hint panel 2 is open.
pub struct EntranceScreen<'a> {
    pub code: &'a str,
    pub message: Option<&'a str>,
    pub hint1_open: bool,
    pub hint2_open: bool,
    pub theme: &'a Theme,
}

impl Widget for EntranceScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let hint1 = HintPanel::new("F1", HINT1_TITLE, HINT1_BODY, self.hint1_open, self.theme);
        let hint2 = HintPanel::new("F2", HINT2_TITLE, HINT2_BODY, self.hint2_open, self.theme);

        let annotation_height: u16 = if self.hint2_open {
            ANNOTATION_BODY.len() as u16 + 2
        } else {
            0
        };

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(DOOR_ART.len() as u16),
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(hint1.height()),
                Constraint::Length(hint2.height()),
                Constraint::Length(annotation_height),
                Constraint::Min(0),
            ])
            .split(area);

        let art_lines: Vec<Line> = DOOR_ART
            .iter()
            .map(|row| Line::from(Span::styled(*row, Style::default().fg(colors.accent_dim()))))
            .collect();
        Paragraph::new(art_lines)
            .alignment(Alignment::Center)
            .render(layout[0], buf);

        Paragraph::new(Line::from(Span::styled(
            "A locked door. A brass plate asks for three digits.",
            Style::default().fg(colors.fg()),
        )))
        .alignment(Alignment::Center)
        .render(layout[1], buf);

        render_code_field(self.code, self.theme, layout[2], buf);

        let message_line = match self.message {
            Some(text) => Line::from(Span::styled(text, Style::default().fg(colors.error()))),
            None => Line::from(""),
        };
        Paragraph::new(message_line)
            .alignment(Alignment::Center)
            .render(layout[3], buf);

        hint1.render(layout[5], buf);
        hint2.render(layout[6], buf);

        if self.hint2_open {
            render_annotation(self.theme, layout[7], buf);
        }
    }
}

/// Three fixed slots inside a small bordered box; the next empty slot gets
/// the block cursor.
fn render_code_field(code: &str, theme: &Theme, area: Rect, buf: &mut Buffer) {
    let colors = &theme.colors;

    let field_width: u16 = (CODE_LEN as u16) * 2 + 3;
    let left = area.x + area.width.saturating_sub(field_width) / 2;
    let field_area = Rect::new(left, area.y, field_width.min(area.width), area.height.min(3));

    let block = Block::bordered().border_style(Style::default().fg(colors.border()));
    let inner = block.inner(field_area);
    block.render(field_area, buf);

    let entered: Vec<char> = code.chars().collect();
    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    for slot in 0..CODE_LEN {
        let (text, style) = match entered.get(slot) {
            Some(ch) => (
                ch.to_string(),
                Style::default()
                    .fg(colors.fg())
                    .add_modifier(Modifier::BOLD),
            ),
            None if slot == entered.len() => (
                "_".to_string(),
                Style::default().fg(colors.cursor_fg()).bg(colors.cursor_bg()),
            ),
            None => ("_".to_string(), Style::default().fg(colors.text_dim())),
        };
        spans.push(Span::styled(text, style));
        spans.push(Span::raw(" "));
    }

    Paragraph::new(Line::from(spans)).render(inner, buf);
}

fn render_annotation(theme: &Theme, area: Rect, buf: &mut Buffer) {
    let colors = &theme.colors;

    let block = Block::bordered()
        .title(format!(" {ANNOTATION_TITLE} "))
        .border_style(Style::default().fg(colors.accent_dim()));
    let inner = block.inner(area);
    block.render(area, buf);

    let lines: Vec<Line> = ANNOTATION_BODY
        .iter()
        .map(|row| Line::from(Span::styled(*row, Style::default().fg(colors.text_dim()))))
        .collect();
    Paragraph::new(lines).render(inner, buf);
}
