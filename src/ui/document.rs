//! Focus tree for the terminal screen
//!
//! A terminal has no DOM, so the front end keeps a small tree of focusable
//! elements itself. [`ScreenDocument`] implements [`FocusDocument`] for the
//! combo box and queues focus/blur notifications for the host to dispatch,
//! the way a browser fires `focus` and `blur` after focus moves.

use crate::combo::{ElementId, FocusDocument, FocusError};
use std::collections::{HashMap, HashSet, VecDeque};

/// Focus notification produced by a focus move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusEvent {
    /// Element gained focus
    Focus(ElementId),
    /// Element lost focus
    Blur(ElementId),
}

/// Focusable elements of the terminal screen
#[derive(Debug, Default)]
pub struct ScreenDocument {
    parents: HashMap<ElementId, Option<ElementId>>,
    order: Vec<ElementId>,
    tabbable: HashSet<ElementId>,
    active: Option<ElementId>,
    events: VecDeque<FocusEvent>,
}

impl ScreenDocument {
    /// Create an empty document
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`attach`](Self::attach)
    #[must_use]
    pub fn with_element(mut self, element: ElementId, parent: Option<ElementId>, tabbable: bool) -> Self {
        self.attach(element, parent, tabbable);
        self
    }

    /// Attach `element` under `parent`, appending it to document order
    ///
    /// Re-attaching an existing element only updates its parent and tab stop.
    pub fn attach(&mut self, element: ElementId, parent: Option<ElementId>, tabbable: bool) {
        if self.parents.insert(element, parent).is_none() {
            self.order.push(element);
        }
        if tabbable {
            self.tabbable.insert(element);
        } else {
            self.tabbable.remove(&element);
        }
    }

    /// Remove `element` and its descendants
    ///
    /// Removing the focused element blurs it without focusing anything else.
    pub fn detach(&mut self, element: ElementId) {
        let doomed: Vec<ElementId> = self
            .order
            .iter()
            .copied()
            .filter(|&candidate| self.contains(element, candidate))
            .collect();
        if doomed.is_empty() {
            return;
        }

        if let Some(active) = self.active
            && doomed.contains(&active)
        {
            self.active = None;
            self.events.push_back(FocusEvent::Blur(active));
        }

        for id in &doomed {
            self.parents.remove(id);
            self.tabbable.remove(id);
        }
        self.order.retain(|id| !doomed.contains(id));
    }

    /// Drain queued focus notifications
    pub fn take_events(&mut self) -> Vec<FocusEvent> {
        self.events.drain(..).collect()
    }

    fn parent_of(&self, element: ElementId) -> Option<ElementId> {
        self.parents.get(&element).copied().flatten()
    }
}

impl FocusDocument for ScreenDocument {
    fn active_element(&self) -> Option<ElementId> {
        self.active
    }

    fn contains(&self, ancestor: ElementId, element: ElementId) -> bool {
        if !self.is_attached(element) {
            return false;
        }
        let mut current = Some(element);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent_of(id);
        }
        false
    }

    fn is_attached(&self, element: ElementId) -> bool {
        self.parents.contains_key(&element)
    }

    fn tabbable_elements(&self) -> Vec<ElementId> {
        self.order
            .iter()
            .copied()
            .filter(|id| self.tabbable.contains(id))
            .collect()
    }

    fn focus(&mut self, element: ElementId) -> Result<(), FocusError> {
        if !self.is_attached(element) {
            return Err(FocusError::Detached(element));
        }
        if self.active == Some(element) {
            return Ok(());
        }
        if let Some(previous) = self.active.replace(element) {
            self.events.push_back(FocusEvent::Blur(previous));
        }
        self.events.push_back(FocusEvent::Focus(element));
        Ok(())
    }
}
