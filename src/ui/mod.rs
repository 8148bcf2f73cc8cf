//! Terminal host for the combo box
//!
//! Everything here consumes the [`crate::combo`] interfaces; nothing in the
//! core depends on it.
//!
//! # Layout
//!
//! - [`document`]: the screen's focus tree, implementing
//!   [`FocusDocument`](crate::combo::FocusDocument)
//! - [`output`]: reporting the final selection on stdout
//! - `ratatui_adapter`: the interactive picker (feature `ratatui-tui`)
//!
//! ## Running the picker
//!
//! ```no_run
//! # #[cfg(feature = "ratatui-tui")]
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use pillbox::combo::labels_catalog;
//! use pillbox::ui::PickerSettings;
//! use pillbox::ui::ratatui_adapter::RatatuiPicker;
//!
//! let picker = RatatuiPicker::new(PickerSettings::default());
//! let result = picker.run(labels_catalog(["Red", "Green", "Blue"]), Vec::new())?;
//!
//! if !result.aborted {
//!     println!("Selected: {:?}", result.selected);
//! }
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "ratatui-tui"))]
//! # fn main() {}
//! ```

mod error;
mod settings;

pub mod document;
pub mod output;

#[cfg(feature = "ratatui-tui")]
pub mod ratatui_adapter;

pub use document::{FocusEvent, ScreenDocument};
pub use error::{Result, UiError};
pub use output::{OutputWriter, SelectionFormat, StdoutWriter, report_selection};
pub use settings::PickerSettings;

#[cfg(feature = "ratatui-tui")]
pub use ratatui_adapter::RatatuiPicker;
