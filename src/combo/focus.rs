//! Focus boundary handling
//!
//! The combo box never talks to a concrete screen or document. Everything it
//! needs from the host goes through [`FocusDocument`]: which element holds
//! focus, ancestry, the tab order, and a way to move focus.
//!
//! Option targets are kept out of the tab order so the arrow keys own
//! navigation inside the widget. Tab and Shift+Tab are therefore handled
//! here explicitly: the widget looks up its search field in the document's
//! tab order and focuses the neighbour, wrapping at both ends.

use super::tick::{DeferredTask, Tick};
use std::fmt;
use thiserror::Error;

/// Opaque handle for a focusable element in the host document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Errors raised by the host when moving focus
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FocusError {
    /// The element is not (or no longer) part of the document
    #[error("element {0} is not attached to the document")]
    Detached(ElementId),
}

/// Host capability used by the focus boundary
pub trait FocusDocument {
    /// Element currently holding focus, if any
    fn active_element(&self) -> Option<ElementId>;

    /// Whether `element` is `ancestor` or one of its descendants
    fn contains(&self, ancestor: ElementId, element: ElementId) -> bool;

    /// Whether `element` is still part of the document
    fn is_attached(&self, element: ElementId) -> bool;

    /// Tabbable elements in document order
    fn tabbable_elements(&self) -> Vec<ElementId>;

    /// Move focus to `element`
    ///
    /// # Errors
    ///
    /// Returns a `FocusError` if the element is detached or not focusable.
    fn focus(&mut self, element: ElementId) -> Result<(), FocusError>;
}

/// Direction of an explicit tab move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabDirection {
    /// Tab
    Forward,
    /// Shift+Tab
    Backward,
}

/// Neighbour of `from` in `tabbables`, wrapping at both ends
///
/// Returns `None` when `from` is not in the list.
#[must_use]
pub fn tab_escape_target(
    tabbables: &[ElementId],
    from: ElementId,
    direction: TabDirection,
) -> Option<ElementId> {
    let position = tabbables.iter().position(|&element| element == from)?;
    let last = tabbables.len() - 1;
    let target = match direction {
        TabDirection::Forward if position == last => 0,
        TabDirection::Forward => position + 1,
        TabDirection::Backward if position == 0 => last,
        TabDirection::Backward => position - 1,
    };
    tabbables.get(target).copied()
}

/// Move focus, treating host failures as a no-op
///
/// Returns whether focus actually moved.
pub fn request_focus(document: &mut dyn FocusDocument, element: ElementId) -> bool {
    match document.focus(element) {
        Ok(()) => true,
        Err(err) => {
            tracing::debug!(%element, error = %err, "focus request ignored");
            false
        }
    }
}

/// Elements that make up the widget in the host document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetElements {
    /// Root element; every widget element descends from it
    pub root: ElementId,
    /// The text field holding the search value
    pub search_field: ElementId,
}

impl WidgetElements {
    /// Describe a widget by its root and search field
    #[must_use]
    pub const fn new(root: ElementId, search_field: ElementId) -> Self {
        Self { root, search_field }
    }
}

/// Tracks whether interactive focus is still inside the widget
#[derive(Debug, Clone)]
pub struct FocusBoundary {
    elements: WidgetElements,
    blur_check: DeferredTask,
    mounted: bool,
}

impl FocusBoundary {
    /// Create a mounted boundary for the given elements
    #[must_use]
    pub const fn new(elements: WidgetElements) -> Self {
        Self {
            elements,
            blur_check: DeferredTask::new(),
            mounted: true,
        }
    }

    /// Widget elements
    #[must_use]
    pub const fn elements(&self) -> WidgetElements {
        self.elements
    }

    /// Whether the widget is still mounted
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Whether a blur check is waiting for the next tick
    #[must_use]
    pub const fn blur_check_pending(&self) -> bool {
        self.blur_check.is_pending()
    }

    /// Schedule a focus-left check for the tick after `now`
    ///
    /// Checking in the same tick would observe the transient state where
    /// the old element has blurred and the new one is not focused yet.
    pub fn schedule_blur_check(&mut self, now: Tick) {
        if self.mounted {
            self.blur_check.schedule(now, 1);
        }
    }

    /// Tear down: cancel the pending check and ignore all later ticks
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.blur_check.cancel();
    }

    /// Run the pending check if due; true when focus has left the widget
    ///
    /// Preconditions are re-validated here rather than captured when the
    /// check was scheduled.
    pub fn focus_left(&mut self, now: Tick, document: &dyn FocusDocument) -> bool {
        if !self.blur_check.take_if_due(now) || !self.mounted {
            return false;
        }
        if !document.is_attached(self.elements.root) {
            tracing::debug!(root = %self.elements.root, "blur check skipped, root detached");
            return false;
        }
        !self.contains_focus(document)
    }

    /// Whether the document's focused element sits inside the widget root
    #[must_use]
    pub fn contains_focus(&self, document: &dyn FocusDocument) -> bool {
        document
            .active_element()
            .is_some_and(|active| document.contains(self.elements.root, active))
    }

    /// Move focus out of the widget along the document tab order
    ///
    /// Returns whether focus moved.
    pub fn tab_escape(&self, document: &mut dyn FocusDocument, direction: TabDirection) -> bool {
        let tabbables = document.tabbable_elements();
        match tab_escape_target(&tabbables, self.elements.search_field, direction) {
            Some(target) => request_focus(document, target),
            None => {
                tracing::debug!(
                    search_field = %self.elements.search_field,
                    "search field not in tab order"
                );
                false
            }
        }
    }
}
