//! Row of focusable buttons after the combo box

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Buttons rendered left to right; `focused` is the index holding focus
pub struct ButtonRow<'a> {
    labels: &'a [&'a str],
    focused: Option<usize>,
    theme: &'a Theme,
}

impl<'a> ButtonRow<'a> {
    /// Create a new button row
    #[must_use]
    pub const fn new(labels: &'a [&'a str], focused: Option<usize>, theme: &'a Theme) -> Self {
        Self {
            labels,
            focused,
            theme,
        }
    }
}

impl Widget for ButtonRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            let (text, style) = if self.focused == Some(i) {
                (format!("> [ {label} ]"), self.theme.cursor_style())
            } else {
                (format!("  [ {label} ]"), self.theme.normal_style())
            };
            spans.push(Span::styled(text, style));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
