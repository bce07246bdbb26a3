use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use crate::ui::theme::Theme;

/// Opaque full-screen cover used to stage the entrance→soon swap: the
/// overlay goes up, the screen flag flips behind it on the fade deadline,
/// then the overlay comes down.
pub struct FadeOverlay<'a> {
    pub theme: &'a Theme,
}

impl Widget for FadeOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default().bg(self.theme.colors.overlay());
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(" ");
                    cell.set_style(style);
                }
            }
        }
    }
}
