//! The combo box itself
//!
//! Owns the search value, the active index and the option target registry,
//! and keeps the last computed match set. The catalog and selection belong
//! to the caller: they are passed in, and changes to the selection are only
//! ever requested through the `on_change` callback.

use super::callbacks::ComboCallbacks;
use super::focus::{
    ElementId, FocusBoundary, FocusDocument, TabDirection, WidgetElements, request_focus,
};
use super::keyboard::{EnterCommand, EnterContext, Key, KeyOutcome, resolve_enter};
use super::matching::{MatchSet, compute_matches, flatten_catalog};
use super::navigation::{NavigationController, Step, TargetRegistry};
use super::option::{CatalogEntry, ComboOption};
use super::selection::SelectionModel;
use super::tick::Tick;
use serde::{Deserialize, Serialize};

/// Start-up settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboSettings {
    /// Whether the option list starts open
    #[serde(default)]
    pub list_open_initial: bool,
}

impl ComboSettings {
    /// Start with the list open or closed
    #[must_use]
    pub const fn with_list_open(mut self, open: bool) -> Self {
        self.list_open_initial = open;
        self
    }
}

/// Multi-select combo box state
#[derive(Debug)]
pub struct ComboBox<V = String> {
    catalog: Vec<CatalogEntry<V>>,
    selection: SelectionModel<V>,
    search: String,
    matches: MatchSet<V>,
    navigation: NavigationController,
    boundary: FocusBoundary,
    list_open: bool,
    callbacks: ComboCallbacks<V>,
}

impl<V: Clone> ComboBox<V> {
    /// Mount a combo box
    #[must_use]
    pub fn new(
        catalog: Vec<CatalogEntry<V>>,
        selected: Vec<ComboOption<V>>,
        callbacks: ComboCallbacks<V>,
        settings: ComboSettings,
        elements: WidgetElements,
    ) -> Self {
        let mut combo = Self {
            catalog,
            selection: SelectionModel::new(selected),
            search: String::new(),
            matches: MatchSet::default(),
            navigation: NavigationController::new(),
            boundary: FocusBoundary::new(elements),
            list_open: settings.list_open_initial,
            callbacks,
        };
        combo.recompute();
        combo
    }

    // ------------------------------------------------------------------
    // Inputs from the caller
    // ------------------------------------------------------------------

    /// Replace the catalog
    pub fn set_catalog(&mut self, catalog: Vec<CatalogEntry<V>>) {
        self.catalog = catalog;
        self.recompute();
    }

    /// Apply a selection state decided by the caller
    pub fn set_selected(&mut self, selected: Vec<ComboOption<V>>) {
        self.selection.replace(selected);
        self.recompute();
    }

    /// Edit the search value
    ///
    /// `on_search_change` sees the new value before it is applied. Editing
    /// opens the list.
    pub fn set_search(&mut self, next: impl Into<String>) {
        let next = next.into();
        self.callbacks.search_change(&next);
        self.search = next;
        self.list_open = true;
        self.recompute();
    }

    // ------------------------------------------------------------------
    // Outputs for the render consumer
    // ------------------------------------------------------------------

    /// Options currently eligible for selection
    #[must_use]
    pub fn matching_options(&self) -> &[ComboOption<V>] {
        self.matches.options()
    }

    /// Matching options together with their group association
    #[must_use]
    pub const fn match_set(&self) -> &MatchSet<V> {
        &self.matches
    }

    /// Active option index, if any
    #[must_use]
    pub const fn active_option_index(&self) -> Option<usize> {
        self.navigation.active()
    }

    /// Option under the active index
    #[must_use]
    pub fn active_option(&self) -> Option<&ComboOption<V>> {
        self.navigation
            .active()
            .and_then(|index| self.matches.get(index))
    }

    /// Current search value
    #[must_use]
    pub fn search_value(&self) -> &str {
        &self.search
    }

    /// Whether the option list is open
    #[must_use]
    pub const fn is_list_open(&self) -> bool {
        self.list_open
    }

    /// Selection as last supplied by the caller
    #[must_use]
    pub fn selected(&self) -> &[ComboOption<V>] {
        self.selection.options()
    }

    /// Catalog as last supplied by the caller
    #[must_use]
    pub fn catalog(&self) -> &[CatalogEntry<V>] {
        &self.catalog
    }

    /// Widget elements in the host document
    #[must_use]
    pub const fn elements(&self) -> WidgetElements {
        self.boundary.elements()
    }

    /// Option focus targets
    #[must_use]
    pub const fn registry(&self) -> &TargetRegistry {
        self.navigation.registry()
    }

    /// Register the focus target rendered for the option at `index`
    pub fn register_option_target(&mut self, index: usize, target: ElementId) {
        self.navigation.registry_mut().register(index, target);
    }

    /// Forget the focus target at `index`
    pub fn unregister_option_target(&mut self, index: usize) {
        self.navigation.registry_mut().unregister(index);
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// Request `option` be appended to the selection
    ///
    /// Clears the search value and the active index and returns focus to
    /// the search field.
    pub fn add_option(&mut self, option: ComboOption<V>, document: &mut dyn FocusDocument) {
        tracing::debug!(label = %option.label, "requesting option add");
        let next = self.selection.request_add(option);
        self.callbacks.change(next);
        self.search.clear();
        self.navigation.clear();
        self.recompute();
        request_focus(document, self.boundary.elements().search_field);
    }

    /// Request `option` be removed from the selection
    ///
    /// Does nothing when the option is not selected.
    pub fn remove_option(&mut self, option: &ComboOption<V>) {
        match self.selection.request_remove(option) {
            Some(next) => {
                tracing::debug!(label = %option.label, "requesting option removal");
                self.callbacks.change(next);
            }
            None => tracing::debug!(label = %option.label, "remove ignored, not selected"),
        }
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// Move the active option one step, focusing its target
    pub fn increment(&mut self, step: Step, document: &mut dyn FocusDocument) {
        if let Some(index) = self.navigation.increment(step, self.matches.len()) {
            self.focus_option(index, document);
        }
    }

    /// Activate the option at `index` (pointer hover or click)
    pub fn activate_option(&mut self, index: usize, document: &mut dyn FocusDocument) {
        if self.navigation.activate(index) {
            self.focus_option(index, document);
        }
    }

    /// Drop the active option
    pub fn clear_active(&mut self) {
        self.navigation.clear();
    }

    fn focus_option(&self, index: usize, document: &mut dyn FocusDocument) {
        match self.navigation.registry().get(index) {
            Some(target) => {
                request_focus(document, target);
            }
            None => tracing::debug!(index, "no focus target registered for option"),
        }
    }

    // ------------------------------------------------------------------
    // Keyboard
    // ------------------------------------------------------------------

    /// Route a key press
    pub fn handle_key(&mut self, key: Key, document: &mut dyn FocusDocument) -> KeyOutcome {
        tracing::trace!(%key, search = %self.search, "combo key");
        match key {
            Key::Up => {
                self.increment(Step::Previous, document);
                KeyOutcome::Handled
            }
            Key::Down => {
                self.increment(Step::Next, document);
                KeyOutcome::Handled
            }
            Key::Backspace => {
                if !self.search.is_empty() {
                    return KeyOutcome::Propagate;
                }
                match self.selection.last().cloned() {
                    Some(last) => {
                        self.remove_option(&last);
                        KeyOutcome::Handled
                    }
                    None => KeyOutcome::Propagate,
                }
            }
            Key::Escape => {
                if self.navigation.active().is_none() {
                    return KeyOutcome::Propagate;
                }
                self.navigation.clear();
                request_focus(document, self.boundary.elements().search_field);
                KeyOutcome::Handled
            }
            Key::Enter => self.handle_enter(document),
            Key::Tab => {
                self.boundary.tab_escape(document, TabDirection::Forward);
                KeyOutcome::Handled
            }
            Key::ShiftTab => {
                self.boundary.tab_escape(document, TabDirection::Backward);
                KeyOutcome::Handled
            }
        }
    }

    fn handle_enter(&mut self, document: &mut dyn FocusDocument) -> KeyOutcome {
        let command = resolve_enter(EnterContext {
            search: &self.search,
            matches: self.matches.options(),
            active: self.active_option(),
            selection: &self.selection,
            can_create: self.callbacks.can_create(),
        });

        match command {
            EnterCommand::Commit(option) => {
                self.add_option(option, document);
                KeyOutcome::Handled
            }
            EnterCommand::Create => {
                self.create_option();
                KeyOutcome::Handled
            }
            EnterCommand::Ignore => KeyOutcome::Propagate,
        }
    }

    /// Hand the search value to the create-option callback and clear it
    fn create_option(&mut self) {
        let catalog = flatten_catalog(&self.catalog);
        if self.callbacks.create_option(&self.search, &catalog) {
            tracing::debug!(search = %self.search, "custom option requested");
            self.search.clear();
            self.recompute();
        }
    }

    // ------------------------------------------------------------------
    // Focus
    // ------------------------------------------------------------------

    /// Focus arrived at `target` inside the widget
    ///
    /// The search field opens the list; an option target becomes active.
    pub fn on_focus(&mut self, target: ElementId, document: &mut dyn FocusDocument) {
        let search_field = self.boundary.elements().search_field;
        if target == search_field {
            if document.active_element() != Some(search_field) {
                request_focus(document, search_field);
            }
            self.list_open = true;
        } else if let Some(index) = self.navigation.registry().position_of(target) {
            self.navigation.activate(index);
        }
    }

    /// Some widget element lost focus during tick `now`
    pub fn on_blur(&mut self, now: Tick) {
        self.boundary.schedule_blur_check(now);
    }

    /// Run deferred work for tick `now`
    pub fn on_tick(&mut self, now: Tick, document: &dyn FocusDocument) {
        if self.boundary.focus_left(now, document) {
            tracing::debug!("focus left the combo box, closing list");
            self.close_list();
        }
    }

    /// Open the option list
    pub const fn open_list(&mut self) {
        self.list_open = true;
    }

    /// Close the list, dropping the active option and the search value
    pub fn close_list(&mut self) {
        self.list_open = false;
        self.navigation.clear();
        if !self.search.is_empty() {
            self.search.clear();
            self.recompute();
        }
    }

    /// Tear the widget down; pending deferred work is cancelled
    pub fn unmount(&mut self) {
        self.boundary.unmount();
    }

    /// Whether the widget is still mounted
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.boundary.is_mounted()
    }

    fn recompute(&mut self) {
        let previous = self.active_option().map(|option| option.label.clone());
        self.matches = compute_matches(&self.catalog, self.selection.options(), &self.search);
        let follow = previous.and_then(|label| self.matches.position(&label));
        self.navigation.reconcile(self.matches.len(), follow);
    }
}
