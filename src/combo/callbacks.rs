//! Outbound notifications from the combo box

use super::option::ComboOption;
use std::fmt;

type ChangeFn<V> = Box<dyn FnMut(Vec<ComboOption<V>>)>;
type SearchChangeFn = Box<dyn FnMut(&str)>;
type CreateFn<V> = Box<dyn FnMut(&str, &[ComboOption<V>])>;

/// Callbacks supplied by the owner of the selection
///
/// `on_change` is required and receives the *requested* next selection;
/// the owner applies it by calling `ComboBox::set_selected`. Without an
/// `on_create_option` callback, Enter never creates custom options.
pub struct ComboCallbacks<V = String> {
    on_change: ChangeFn<V>,
    on_search_change: Option<SearchChangeFn>,
    on_create_option: Option<CreateFn<V>>,
}

impl<V> ComboCallbacks<V> {
    /// Create callbacks with the required change handler
    #[must_use]
    pub fn new(on_change: impl FnMut(Vec<ComboOption<V>>) + 'static) -> Self {
        Self {
            on_change: Box::new(on_change),
            on_search_change: None,
            on_create_option: None,
        }
    }

    /// Observe every search edit, before the combo box applies it
    #[must_use]
    pub fn with_search_change(mut self, on_search_change: impl FnMut(&str) + 'static) -> Self {
        self.on_search_change = Some(Box::new(on_search_change));
        self
    }

    /// Enable custom option creation
    ///
    /// The callback gets the search value and the full flattened catalog.
    #[must_use]
    pub fn with_create_option(
        mut self,
        on_create_option: impl FnMut(&str, &[ComboOption<V>]) + 'static,
    ) -> Self {
        self.on_create_option = Some(Box::new(on_create_option));
        self
    }

    /// Whether custom option creation is enabled
    #[must_use]
    pub const fn can_create(&self) -> bool {
        self.on_create_option.is_some()
    }

    pub(crate) fn change(&mut self, next: Vec<ComboOption<V>>) {
        (self.on_change)(next);
    }

    pub(crate) fn search_change(&mut self, next: &str) {
        if let Some(callback) = self.on_search_change.as_mut() {
            callback(next);
        }
    }

    pub(crate) fn create_option(&mut self, search: &str, catalog: &[ComboOption<V>]) -> bool {
        match self.on_create_option.as_mut() {
            Some(callback) => {
                callback(search, catalog);
                true
            }
            None => false,
        }
    }
}

impl<V> fmt::Debug for ComboCallbacks<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComboCallbacks")
            .field("on_search_change", &self.on_search_change.is_some())
            .field("on_create_option", &self.on_create_option.is_some())
            .finish_non_exhaustive()
    }
}
