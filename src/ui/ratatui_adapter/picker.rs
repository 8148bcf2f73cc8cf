//! Ratatui-based picker
//!
//! Draws the combo box with ratatui and feeds it crossterm events.

use super::events::poll_and_handle;
use super::state::{CANCEL_BUTTON, DONE_BUTTON, EventResult, PickerState, SEARCH_FIELD};
use super::theme::Theme;
use super::widgets::{ButtonRow, HelpBar, OptionList, PillBar, SearchBar};
use crate::combo::{CatalogEntry, ComboOption, flatten_catalog};
use crate::ui::error::{Result, UiError};
use crate::ui::settings::PickerSettings;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
};
use std::io::{self, Stdout};
use std::time::Duration;

/// How long one frame waits for input before ticking
const FRAME: Duration = Duration::from_millis(50);

/// Outcome of a picker session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerResult {
    /// Final selection, in the order it was built
    pub selected: Vec<ComboOption>,
    /// Whether the user cancelled
    pub aborted: bool,
}

/// Ratatui-based picker
pub struct RatatuiPicker {
    settings: PickerSettings,
    theme: Theme,
}

impl RatatuiPicker {
    /// Create a new picker
    #[must_use]
    pub fn new(settings: PickerSettings) -> Self {
        Self {
            settings,
            theme: Theme::default(),
        }
    }

    /// Run the picker until the user confirms or cancels
    ///
    /// # Errors
    ///
    /// Returns `UiError::EmptyCatalog` when there is nothing to pick and
    /// creation is disabled, or an I/O error from the terminal.
    pub fn run(&self, catalog: Vec<CatalogEntry>, selected: Vec<ComboOption>) -> Result<PickerResult> {
        if !self.settings.allow_create && flatten_catalog(&catalog).is_empty() {
            return Err(UiError::EmptyCatalog);
        }

        let state = PickerState::new(catalog, selected, self.settings.clone());

        let mut terminal = Self::setup_terminal()?;
        let result = self.run_loop(&mut terminal, state);

        // Cleanup terminal (always, even on error)
        if let Err(e) = Self::cleanup_terminal() {
            tracing::warn!(error = %e, "terminal cleanup failed");
            eprintln!("Warning: terminal cleanup failed: {e}");
        }

        result
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        Ok(())
    }

    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        mut state: PickerState,
    ) -> Result<PickerResult> {
        loop {
            terminal.draw(|frame| self.render(frame, &state))?;

            match poll_and_handle(&mut state, FRAME)? {
                EventResult::Continue => state.tick(),
                EventResult::Confirm => {
                    tracing::debug!(ticks = state.tick_count(), "picker confirmed");
                    return Ok(PickerResult {
                        selected: state.into_selection(),
                        aborted: false,
                    });
                }
                EventResult::Abort => {
                    tracing::debug!(ticks = state.tick_count(), "picker aborted");
                    state.unmount();
                    return Ok(PickerResult {
                        selected: Vec::new(),
                        aborted: true,
                    });
                }
            }
        }
    }

    fn render(&self, frame: &mut Frame, state: &PickerState) {
        let theme = &self.theme;
        let combo = state.combo();
        let list_rows = if combo.is_list_open() {
            u16::try_from(state.max_visible).unwrap_or(u16::MAX).saturating_add(2)
        } else {
            0
        };

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),         // Pills
                Constraint::Length(3),         // Search bar
                Constraint::Length(list_rows), // Option list
                Constraint::Length(1),         // Buttons
                Constraint::Min(0),
                Constraint::Length(1), // Help bar
            ])
            .split(frame.area());

        frame.render_widget(PillBar::new(combo.selected(), theme), layout[0]);

        let search_bar = SearchBar::new(combo.search_value(), &state.prompt, theme)
            .focused(state.focused() == Some(SEARCH_FIELD))
            .list_open(combo.is_list_open());
        frame.render_widget(search_bar, layout[1]);

        if combo.is_list_open() {
            let mut list = OptionList::new(combo.match_set(), combo.active_option_index(), theme);
            let search = combo.search_value().trim();
            if state.allow_create && !search.is_empty() {
                list = list.empty_hint(format!("Press Enter to create \"{search}\""));
            }
            frame.render_widget(list, layout[2]);
        }

        let focused_button = match state.focused() {
            Some(id) if id == DONE_BUTTON => Some(0),
            Some(id) if id == CANCEL_BUTTON => Some(1),
            _ => None,
        };
        frame.render_widget(ButtonRow::new(&["Done", "Cancel"], focused_button, theme), layout[3]);

        let hints = if state.focus_in_widget() {
            HelpBar::combo_hints(state.allow_create)
        } else {
            HelpBar::button_hints()
        };
        frame.render_widget(HelpBar::new(&hints, theme), layout[5]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_catalog_rejected_without_create() {
        let picker = RatatuiPicker::new(PickerSettings::default());
        let err = picker.run(Vec::new(), Vec::new()).unwrap_err();
        assert!(matches!(err, UiError::EmptyCatalog));
    }
}
