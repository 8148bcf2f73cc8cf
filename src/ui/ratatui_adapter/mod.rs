//! Ratatui-based picker adapter
//!
//! The terminal host for the combo box: ratatui draws it, crossterm feeds it
//! key events, and a [`ScreenDocument`](crate::ui::document::ScreenDocument)
//! stands in for the page's focus tree.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              RatatuiPicker                  │
//! │       (terminal setup, render loop)         │
//! └────────────────────┬────────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │PickerState │ │  Ratatui  │ │ Crossterm │
//! │ (ComboBox) │ │ (widgets) │ │  (events) │
//! └────────────┘ └───────────┘ └───────────┘
//! ```
//!
//! One loop iteration draws a frame, waits up to one frame for a key, and
//! then advances the tick that drives the deferred blur check.

mod events;
mod picker;
mod state;
mod theme;
pub mod widgets;

pub use events::{poll_and_handle, translate_key};
pub use picker::{PickerResult, RatatuiPicker};
pub use state::{
    CANCEL_BUTTON, DONE_BUTTON, EventResult, Input, PickerState, ROOT, SEARCH_FIELD,
    option_target,
};
pub use theme::Theme;
