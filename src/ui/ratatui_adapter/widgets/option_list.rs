//! Option list widget with group headings

use crate::combo::MatchSet;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Widget},
};

/// One rendered line of the option list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row<'a> {
    /// Group heading, not selectable
    Header(&'a str),
    /// Option at `index` in the match set
    Option {
        /// Index in the match set
        index: usize,
        /// Option label
        label: &'a str,
    },
}

/// Flatten a match set into heading and option rows
#[must_use]
pub fn rows(matches: &MatchSet) -> Vec<Row<'_>> {
    let mut rows = Vec::with_capacity(matches.len());
    let mut index = 0;
    for (group, options) in matches.grouped() {
        if let Some(group) = group {
            rows.push(Row::Header(group));
        }
        for option in options {
            rows.push(Row::Option {
                index,
                label: option.label.as_str(),
            });
            index += 1;
        }
    }
    rows
}

/// First visible row so that `focus_row` stays within `height` rows
#[must_use]
pub const fn scroll_offset(focus_row: Option<usize>, total: usize, height: usize) -> usize {
    match focus_row {
        Some(row) if height > 0 && total > height && row >= height => {
            let offset = row + 1 - height;
            let max = total - height;
            if offset > max { max } else { offset }
        }
        _ => 0,
    }
}

/// Option list widget; renders nothing useful while the list is closed
pub struct OptionList<'a> {
    matches: &'a MatchSet,
    active: Option<usize>,
    theme: &'a Theme,
    /// Hint shown when nothing matches
    empty_hint: Option<String>,
}

impl<'a> OptionList<'a> {
    /// Create a new option list widget
    #[must_use]
    pub const fn new(matches: &'a MatchSet, active: Option<usize>, theme: &'a Theme) -> Self {
        Self {
            matches,
            active,
            theme,
            empty_hint: None,
        }
    }

    /// Set the hint shown in place of an empty list
    #[must_use]
    pub fn empty_hint(mut self, hint: impl Into<String>) -> Self {
        self.empty_hint = Some(hint.into());
        self
    }

    fn render_row(&self, row: &Row<'a>) -> ListItem<'a> {
        match *row {
            Row::Header(group) => ListItem::new(Line::from(Span::styled(
                group.to_string(),
                self.theme.group_style(),
            ))),
            Row::Option { index, label } => {
                let is_active = self.active == Some(index);
                let cursor = if is_active { ">" } else { " " };
                let line = Line::from(vec![
                    Span::styled(cursor, self.theme.cursor_style()),
                    Span::raw("   "),
                    Span::raw(label.to_string()),
                ]);
                if is_active {
                    ListItem::new(line).style(self.theme.active_style())
                } else {
                    ListItem::new(line).style(self.theme.normal_style())
                }
            }
        }
    }
}

impl Widget for OptionList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" Options ({}) ", self.matches.len());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(title);

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        if self.matches.is_empty() {
            let hint = self.empty_hint.as_deref().unwrap_or("No matches");
            let item = ListItem::new(Line::from(Span::styled(
                hint.to_string(),
                self.theme.create_style(),
            )));
            List::new(vec![item]).render(inner, buf);
            return;
        }

        let rows = rows(self.matches);
        let focus_row = self.active.and_then(|active| {
            rows.iter()
                .position(|row| matches!(row, Row::Option { index, .. } if *index == active))
        });
        let height = inner.height as usize;
        let start = scroll_offset(focus_row, rows.len(), height);
        let end = (start + height).min(rows.len());

        let items: Vec<ListItem> = rows[start..end]
            .iter()
            .map(|row| self.render_row(row))
            .collect();
        List::new(items).render(inner, buf);
    }
}
