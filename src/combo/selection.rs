//! Selection model
//!
//! The selected options belong to the caller. This model keeps the last
//! selection the caller supplied and computes the *requested* next state for
//! add and remove operations; it never applies a request on its own.

use super::matching::fold_eq;
use super::option::ComboOption;

/// Caller-owned selection, as last supplied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionModel<V = String> {
    selected: Vec<ComboOption<V>>,
}

impl<V> Default for SelectionModel<V> {
    fn default() -> Self {
        Self {
            selected: Vec::new(),
        }
    }
}

impl<V: Clone> SelectionModel<V> {
    /// Wrap the caller's current selection
    #[must_use]
    pub const fn new(selected: Vec<ComboOption<V>>) -> Self {
        Self { selected }
    }

    /// Replace the selection with a state supplied by the caller
    pub fn replace(&mut self, selected: Vec<ComboOption<V>>) {
        self.selected = selected;
    }

    /// Selected options in insertion order
    #[must_use]
    pub fn options(&self) -> &[ComboOption<V>] {
        &self.selected
    }

    /// Whether nothing is selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Most recently added option
    #[must_use]
    pub fn last(&self) -> Option<&ComboOption<V>> {
        self.selected.last()
    }

    /// Whether some selected option's label case-fold-equals `text`
    #[must_use]
    pub fn contains_label(&self, text: &str) -> bool {
        self.selected.iter().any(|option| fold_eq(&option.label, text))
    }

    /// Next state for adding `option`: appended at the end
    ///
    /// No de-duplication happens here; label uniqueness is a catalog
    /// invariant.
    #[must_use]
    pub fn request_add(&self, option: ComboOption<V>) -> Vec<ComboOption<V>> {
        let mut next = self.selected.clone();
        next.push(option);
        next
    }

    /// Next state for removing `option`, or `None` when it is not selected
    ///
    /// Only the first matching entry is dropped.
    #[must_use]
    pub fn request_remove(&self, option: &ComboOption<V>) -> Option<Vec<ComboOption<V>>> {
        let position = self
            .selected
            .iter()
            .position(|chosen| chosen.same_option(option))?;
        let mut next = self.selected.clone();
        next.remove(position);
        Some(next)
    }
}
