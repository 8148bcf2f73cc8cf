//! Ratatui widgets for the picker TUI

mod button_row;
mod help_bar;
mod option_list;
mod pill_bar;
mod search_bar;

pub use button_row::ButtonRow;
pub use help_bar::{HelpBar, KeyHint};
pub use option_list::{OptionList, Row, rows, scroll_offset};
pub use pill_bar::PillBar;
pub use search_bar::SearchBar;
