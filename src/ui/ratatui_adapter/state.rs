//! Picker state for the ratatui TUI
//!
//! Owns the combo box, the screen focus tree and the caller side of the
//! selection. The combo box only *requests* selection changes; this state
//! queues those requests and applies them with `set_selected`, the same way
//! a page that owns the selection would.

use crate::catalog::find_option;
use crate::combo::{
    CatalogEntry, ComboBox, ComboCallbacks, ComboOption, ComboSettings, ElementId, FocusDocument,
    Key, KeyOutcome, TabDirection, Tick, WidgetElements, flatten_catalog, fold_eq,
    tab_escape_target,
};
use crate::ui::document::{FocusEvent, ScreenDocument};
use crate::ui::settings::PickerSettings;
use std::cell::RefCell;
use std::rc::Rc;

/// Root element of the combo box
pub const ROOT: ElementId = ElementId(1);
/// The search field inside the combo box
pub const SEARCH_FIELD: ElementId = ElementId(2);
/// "Done" button after the combo box
pub const DONE_BUTTON: ElementId = ElementId(3);
/// "Cancel" button after the combo box
pub const CANCEL_BUTTON: ElementId = ElementId(4);

const OPTION_BASE: u64 = 100;

/// Focus target rendered for the option row at `index`
#[must_use]
pub const fn option_target(index: usize) -> ElementId {
    ElementId(OPTION_BASE + index as u64)
}

/// Host-level input, already translated from terminal events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// A key the combo box routes
    Key(Key),
    /// Printable character for the search field
    Char(char),
    /// Ctrl+C
    Interrupt,
}

/// Result of handling an input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Keep running the event loop
    Continue,
    /// Exit and report the selection
    Confirm,
    /// Exit without a selection
    Abort,
}

#[derive(Default)]
struct Requests {
    changes: Vec<Vec<ComboOption>>,
    creations: Vec<String>,
}

/// Application state for the picker
pub struct PickerState {
    combo: ComboBox,
    document: ScreenDocument,
    requests: Rc<RefCell<Requests>>,
    tick: Tick,
    option_targets: usize,
    /// Prompt shown in front of the search field
    pub prompt: String,
    /// Maximum number of option rows shown at once
    pub max_visible: usize,
    /// Whether creating options is enabled
    pub allow_create: bool,
}

impl PickerState {
    /// Build the picker and place focus in the search field
    #[must_use]
    pub fn new(catalog: Vec<CatalogEntry>, selected: Vec<ComboOption>, settings: PickerSettings) -> Self {
        let requests = Rc::new(RefCell::new(Requests::default()));

        let changes = Rc::clone(&requests);
        let mut callbacks = ComboCallbacks::new(move |next| changes.borrow_mut().changes.push(next));
        if settings.allow_create {
            let creations = Rc::clone(&requests);
            callbacks = callbacks.with_create_option(move |search, _catalog| {
                creations.borrow_mut().creations.push(search.to_string());
            });
        }

        let combo = ComboBox::new(
            catalog,
            selected,
            callbacks,
            ComboSettings::default().with_list_open(settings.list_open_initial),
            WidgetElements::new(ROOT, SEARCH_FIELD),
        );

        let document = ScreenDocument::new()
            .with_element(ROOT, None, false)
            .with_element(SEARCH_FIELD, Some(ROOT), true)
            .with_element(DONE_BUTTON, None, true)
            .with_element(CANCEL_BUTTON, None, true);

        let mut state = Self {
            combo,
            document,
            requests,
            tick: 0,
            option_targets: 0,
            prompt: settings.prompt,
            max_visible: settings.max_visible,
            allow_create: settings.allow_create,
        };

        // Autofocus: the initial focus does not count as a user focus, so
        // `list_open_initial` decides whether the list starts open.
        if state.document.focus(SEARCH_FIELD).is_ok() {
            state.document.take_events();
        }
        state.sync_option_targets();
        state
    }

    /// The combo box
    #[must_use]
    pub const fn combo(&self) -> &ComboBox {
        &self.combo
    }

    /// The screen focus tree
    #[must_use]
    pub const fn document(&self) -> &ScreenDocument {
        &self.document
    }

    /// Element currently holding focus
    #[must_use]
    pub fn focused(&self) -> Option<ElementId> {
        self.document.active_element()
    }

    /// Current host tick
    #[must_use]
    pub const fn tick_count(&self) -> Tick {
        self.tick
    }

    /// Labels of the options declared in the catalog
    #[must_use]
    pub fn catalog_labels(&self) -> Vec<String> {
        flatten_catalog(self.combo.catalog())
            .into_iter()
            .map(|option| option.label)
            .collect()
    }

    /// Unmount the combo box, cancelling any pending blur check
    pub fn unmount(&mut self) {
        self.combo.unmount();
    }

    /// Unmount the combo box and hand back the final selection
    #[must_use]
    pub fn into_selection(mut self) -> Vec<ComboOption> {
        self.unmount();
        self.combo.selected().to_vec()
    }

    /// Whether focus is inside the combo box
    #[must_use]
    pub fn focus_in_widget(&self) -> bool {
        self.focused()
            .is_some_and(|element| self.document.contains(ROOT, element))
    }

    /// Advance one render tick, running the deferred blur check
    pub fn tick(&mut self) {
        self.tick += 1;
        self.combo.on_tick(self.tick, &self.document);
        self.settle();
    }

    /// Handle one input
    pub fn handle_input(&mut self, input: Input) -> EventResult {
        let result = match input {
            Input::Interrupt => EventResult::Abort,
            Input::Char(c) => {
                self.type_char(c);
                EventResult::Continue
            }
            Input::Key(key) if self.focus_in_widget() => self.widget_key(key),
            Input::Key(key) => self.outside_key(key),
        };
        self.settle();
        result
    }

    fn type_char(&mut self, c: char) {
        if self.focused() != Some(SEARCH_FIELD) {
            self.focus_element(SEARCH_FIELD);
        }
        let mut next = self.combo.search_value().to_string();
        next.push(c);
        self.combo.set_search(next);
    }

    fn widget_key(&mut self, key: Key) -> EventResult {
        if matches!(key, Key::Up | Key::Down) && !self.combo.is_list_open() {
            self.combo.open_list();
        }

        // Option targets appear with the list, so register them before the
        // combo box tries to focus one.
        self.sync_option_targets();

        if self.combo.handle_key(key, &mut self.document) == KeyOutcome::Handled {
            return EventResult::Continue;
        }

        match key {
            Key::Backspace => {
                let mut next = self.combo.search_value().to_string();
                if next.pop().is_some() {
                    self.combo.set_search(next);
                }
                EventResult::Continue
            }
            Key::Escape if self.combo.is_list_open() => {
                self.combo.close_list();
                EventResult::Continue
            }
            Key::Escape => EventResult::Abort,
            Key::Enter if self.combo.search_value().trim().is_empty() => EventResult::Confirm,
            _ => EventResult::Continue,
        }
    }

    fn outside_key(&mut self, key: Key) -> EventResult {
        let focused = self.focused();
        match key {
            Key::Enter if focused == Some(DONE_BUTTON) => EventResult::Confirm,
            Key::Enter if focused == Some(CANCEL_BUTTON) => EventResult::Abort,
            Key::Escape => EventResult::Abort,
            Key::Tab | Key::ShiftTab => {
                let direction = if key == Key::Tab {
                    TabDirection::Forward
                } else {
                    TabDirection::Backward
                };
                let tabbables = self.document.tabbable_elements();
                let target = focused
                    .and_then(|from| tab_escape_target(&tabbables, from, direction))
                    .unwrap_or(SEARCH_FIELD);
                self.focus_element(target);
                EventResult::Continue
            }
            Key::Up | Key::Down | Key::Backspace | Key::Enter => EventResult::Continue,
        }
    }

    fn focus_element(&mut self, element: ElementId) {
        if let Err(e) = self.document.focus(element) {
            tracing::debug!(%element, error = %e, "host focus request failed");
        }
    }

    /// Apply queued requests and dispatch focus events until quiet
    fn settle(&mut self) {
        loop {
            let applied = self.apply_requests();
            self.sync_option_targets();
            let events = self.document.take_events();
            if events.is_empty() && !applied {
                break;
            }
            for event in events {
                self.dispatch(event);
            }
        }
    }

    fn dispatch(&mut self, event: FocusEvent) {
        match event {
            FocusEvent::Focus(element) if self.document.contains(ROOT, element) => {
                self.combo.on_focus(element, &mut self.document);
            }
            FocusEvent::Blur(element) if Self::is_widget_element(element) => {
                self.combo.on_blur(self.tick);
            }
            FocusEvent::Focus(_) | FocusEvent::Blur(_) => {}
        }
    }

    /// Blur targets may already be detached, so match on id ranges
    const fn is_widget_element(element: ElementId) -> bool {
        element.0 == ROOT.0 || element.0 == SEARCH_FIELD.0 || element.0 >= OPTION_BASE
    }

    fn apply_requests(&mut self) -> bool {
        let Requests { changes, creations } = std::mem::take(&mut *self.requests.borrow_mut());
        let applied = !changes.is_empty() || !creations.is_empty();

        for next in changes {
            self.combo.set_selected(next);
        }
        for search in creations {
            self.create(&search);
        }

        applied
    }

    fn create(&mut self, search: &str) {
        let label = search.trim();
        if label.is_empty() {
            return;
        }

        let mut selected = self.combo.selected().to_vec();
        if selected.iter().any(|option| fold_eq(&option.label, label)) {
            return;
        }

        // Surrounding whitespace can hide a catalog label from the matcher
        if let Some(existing) = find_option(self.combo.catalog(), label) {
            tracing::debug!(label = %existing.label, "created label already in catalog");
            selected.push(existing);
            self.combo.set_selected(selected);
            return;
        }

        let option = ComboOption::labelled(label);
        tracing::debug!(label, "adding created option");
        let mut catalog = self.combo.catalog().to_vec();
        catalog.push(CatalogEntry::Option(option.clone()));
        self.combo.set_catalog(catalog);
        selected.push(option);
        self.combo.set_selected(selected);
    }

    /// Mirror the match list into the focus tree and the target registry
    fn sync_option_targets(&mut self) {
        let wanted = if self.combo.is_list_open() {
            self.combo.matching_options().len()
        } else {
            0
        };

        for index in wanted..self.option_targets {
            self.document.detach(option_target(index));
            self.combo.unregister_option_target(index);
        }
        for index in 0..wanted {
            let target = option_target(index);
            self.document.attach(target, Some(ROOT), false);
            self.combo.register_option_target(index, target);
        }
        self.option_targets = wanted;
    }
}
