//! Pill bar widget showing the current selection

use crate::combo::ComboOption;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Selected options rendered as pills, oldest first
pub struct PillBar<'a> {
    selected: &'a [ComboOption],
    theme: &'a Theme,
}

impl<'a> PillBar<'a> {
    /// Create a new pill bar widget
    #[must_use]
    pub const fn new(selected: &'a [ComboOption], theme: &'a Theme) -> Self {
        Self { selected, theme }
    }

    fn spans(&self) -> Vec<Span<'a>> {
        if self.selected.is_empty() {
            return vec![Span::styled("nothing selected", self.theme.dimmed_style())];
        }

        let mut spans = Vec::with_capacity(self.selected.len() * 2);
        for (i, option) in self.selected.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(
                format!(" {} × ", option.label),
                self.theme.pill_style(),
            ));
        }
        spans
    }
}

impl Widget for PillBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" Selected ({}) ", self.selected.len());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(title);

        Paragraph::new(Line::from(self.spans()))
            .wrap(Wrap { trim: false })
            .block(block)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_placeholder() {
        let theme = Theme::dark();
        let bar = PillBar::new(&[], &theme);
        let spans = bar.spans();
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].content, "nothing selected");
    }

    #[test]
    fn test_pills_in_selection_order() {
        let theme = Theme::dark();
        let selected = vec![ComboOption::labelled("Red"), ComboOption::labelled("Blue")];
        let bar = PillBar::new(&selected, &theme);
        let text: String = bar.spans().iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, " Red ×   Blue × ");
    }
}
