//! Keyboard vocabulary and Enter resolution
//!
//! The combo box reacts to a small fixed set of keys. Everything else
//! (typing, cursor movement inside the text field) is the host's business
//! and reaches the combo box as `ComboBox::set_search`.

use super::matching::fold_eq;
use super::option::ComboOption;
use super::selection::SelectionModel;
use std::fmt;

/// Keys routed to the combo box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Previous option, wrapping to the last
    Up,
    /// Next option, wrapping to the first
    Down,
    /// Remove the last pill when the search is empty
    Backspace,
    /// Leave the option list for the search field
    Escape,
    /// Commit or create
    Enter,
    /// Next tabbable element after the combo box
    Tab,
    /// Previous tabbable element before the combo box
    ShiftTab,
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Backspace => "backspace",
            Self::Escape => "escape",
            Self::Enter => "enter",
            Self::Tab => "tab",
            Self::ShiftTab => "shift-tab",
        };
        f.write_str(name)
    }
}

/// What the host should do with a key after the combo box saw it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The combo box acted; suppress the host's default behaviour
    Handled,
    /// Not consumed; the host's default behaviour applies
    Propagate,
}

/// Decision taken for an Enter press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnterCommand<V = String> {
    /// Add this option to the selection
    Commit(ComboOption<V>),
    /// Hand the search value to the create-option callback
    Create,
    /// Nothing to do
    Ignore,
}

/// Inputs to the Enter decision
#[derive(Debug)]
pub struct EnterContext<'a, V> {
    /// Current search value
    pub search: &'a str,
    /// Current match list
    pub matches: &'a [ComboOption<V>],
    /// Option under the active index, if any
    pub active: Option<&'a ComboOption<V>>,
    /// Caller-owned selection
    pub selection: &'a SelectionModel<V>,
    /// Whether a create-option callback is configured
    pub can_create: bool,
}

/// Resolve Enter, in priority order
///
/// 1. a single match whose label equals the search (case-folded) commits;
/// 2. an active option commits;
/// 3. without a create callback nothing happens;
/// 4. a search naming an already selected option does nothing;
/// 5. with no active option and no matches, a non-blank search is created.
#[must_use]
pub fn resolve_enter<V: Clone>(ctx: EnterContext<'_, V>) -> EnterCommand<V> {
    if let [only] = ctx.matches
        && fold_eq(&only.label, ctx.search)
    {
        return EnterCommand::Commit(only.clone());
    }

    if let Some(active) = ctx.active {
        return EnterCommand::Commit(active.clone());
    }

    if !ctx.can_create || ctx.selection.contains_label(ctx.search) {
        return EnterCommand::Ignore;
    }

    if ctx.matches.is_empty() && !ctx.search.trim().is_empty() {
        EnterCommand::Create
    } else {
        EnterCommand::Ignore
    }
}
