//! Mock focus document for testing

use super::focus::{ElementId, FocusDocument, FocusError};
use std::collections::{HashMap, HashSet};

/// In-memory document with a parent map and a tab order
///
/// Records every successful focus move in `focus_log`.
#[derive(Debug, Clone, Default)]
pub struct MockDocument {
    parents: HashMap<ElementId, Option<ElementId>>,
    order: Vec<ElementId>,
    tabbable: HashSet<ElementId>,
    detached: HashSet<ElementId>,
    active: Option<ElementId>,
    /// Elements focused, oldest first
    pub focus_log: Vec<ElementId>,
}

impl MockDocument {
    /// Create an empty document
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a focusable element outside the tab order
    #[must_use]
    pub fn with_element(mut self, id: ElementId, parent: Option<ElementId>) -> Self {
        self.parents.insert(id, parent);
        self.order.push(id);
        self
    }

    /// Add an element that takes part in the tab order
    #[must_use]
    pub fn with_tabbable(mut self, id: ElementId, parent: Option<ElementId>) -> Self {
        self.tabbable.insert(id);
        self.with_element(id, parent)
    }

    /// Force the focused element without logging
    pub fn set_active(&mut self, active: Option<ElementId>) {
        self.active = active;
    }

    /// Detach an element; focusing it afterwards fails
    pub fn detach(&mut self, id: ElementId) {
        self.detached.insert(id);
    }

    /// Last element focused through `focus`
    #[must_use]
    pub fn last_focused(&self) -> Option<ElementId> {
        self.focus_log.last().copied()
    }
}

impl FocusDocument for MockDocument {
    fn active_element(&self) -> Option<ElementId> {
        self.active
    }

    fn contains(&self, ancestor: ElementId, element: ElementId) -> bool {
        let mut current = Some(element);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parents.get(&id).copied().flatten();
        }
        false
    }

    fn is_attached(&self, element: ElementId) -> bool {
        self.parents.contains_key(&element) && !self.detached.contains(&element)
    }

    fn tabbable_elements(&self) -> Vec<ElementId> {
        self.order
            .iter()
            .copied()
            .filter(|id| self.tabbable.contains(id) && !self.detached.contains(id))
            .collect()
    }

    fn focus(&mut self, element: ElementId) -> Result<(), FocusError> {
        if !self.is_attached(element) {
            return Err(FocusError::Detached(element));
        }
        self.active = Some(element);
        self.focus_log.push(element);
        Ok(())
    }
}
