//! Multi-select combo box interaction core
//!
//! This module is independent of any rendering technology. A host (the
//! terminal front end in [`crate::ui`], or anything else) feeds it the
//! catalog, the selection, key and focus events, and render ticks, and reads
//! back the state it needs to draw.
//!
//! # Data flow
//!
//! ```text
//! key / focus / input events
//!          │
//!          ▼
//! ┌─────────────────────┐   on_change(next)   ┌──────────────┐
//! │      ComboBox       │ ──────────────────▶ │ caller-owned │
//! │  keyboard router    │ ◀────────────────── │  selection   │
//! │  focus boundary     │   set_selected()    └──────────────┘
//! └─────────┬───────────┘
//!           │ recompute
//!           ▼
//!   compute_matches ──▶ NavigationController::reconcile
//!           │
//!           ▼
//! { matches, active index, search value, list open } ──▶ render consumer
//! ```
//!
//! # Example
//!
//! ```
//! use pillbox::combo::{
//!     ComboBox, ComboCallbacks, ComboSettings, ElementId, WidgetElements, labels_catalog,
//! };
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let requested = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&requested);
//!
//! let mut combo = ComboBox::new(
//!     labels_catalog(["Red", "Green", "Blue"]),
//!     Vec::new(),
//!     ComboCallbacks::new(move |next| *sink.borrow_mut() = next),
//!     ComboSettings::default(),
//!     WidgetElements::new(ElementId(1), ElementId(2)),
//! );
//!
//! combo.set_search("re");
//! let labels: Vec<&str> = combo.matching_options().iter().map(|o| o.label.as_str()).collect();
//! assert_eq!(labels, vec!["Red", "Green"]);
//! ```

mod callbacks;
mod focus;
mod keyboard;
mod matching;
mod navigation;
mod option;
mod selection;
mod tick;
mod widget;

#[cfg(test)]
pub mod mock;

pub use callbacks::ComboCallbacks;
pub use focus::{
    ElementId, FocusBoundary, FocusDocument, FocusError, TabDirection, WidgetElements,
    request_focus, tab_escape_target,
};
pub use keyboard::{EnterCommand, EnterContext, Key, KeyOutcome, resolve_enter};
pub use matching::{MatchSet, compute_matches, flatten_catalog, fold_contains, fold_eq};
pub use navigation::{NavState, NavigationController, Step, TargetRegistry};
pub use option::{CatalogEntry, ComboOption, OptionGroup, labels_catalog};
pub use selection::SelectionModel;
pub use tick::{DeferredTask, Tick};
pub use widget::{ComboBox, ComboSettings};
