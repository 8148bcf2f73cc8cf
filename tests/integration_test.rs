//! Integration tests for pillbox
//!
//! These drive the combo box through its public API with the terminal's
//! focus tree as the host document, the way an embedding page would.

use pillbox::combo::{
    CatalogEntry, ComboBox, ComboCallbacks, ComboOption, ComboSettings, ElementId, FocusDocument,
    Key, KeyOutcome, OptionGroup, WidgetElements, compute_matches, labels_catalog,
};
use pillbox::ui::{FocusEvent, ScreenDocument};
use std::cell::RefCell;
use std::rc::Rc;

const ROOT: ElementId = ElementId(1);
const SEARCH: ElementId = ElementId(2);
const OUTSIDE: ElementId = ElementId(3);

fn option_target(index: usize) -> ElementId {
    ElementId(10 + index as u64)
}

/// A page with the combo box and one button after it
struct Page {
    combo: ComboBox,
    doc: ScreenDocument,
    changes: Rc<RefCell<Vec<Vec<ComboOption>>>>,
    created: Rc<RefCell<Vec<(String, Vec<String>)>>>,
    tick: u64,
}

impl Page {
    fn new(catalog: Vec<CatalogEntry>, selected: &[&str], with_create: bool) -> Self {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let created = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&changes);
        let mut callbacks = ComboCallbacks::new(move |next| sink.borrow_mut().push(next));
        if with_create {
            let sink = Rc::clone(&created);
            callbacks = callbacks.with_create_option(move |search, catalog| {
                let labels: Vec<String> = catalog.iter().map(|o| o.label.clone()).collect();
                sink.borrow_mut().push((search.to_string(), labels));
            });
        }

        let combo = ComboBox::new(
            catalog,
            selected.iter().map(|l| ComboOption::labelled(*l)).collect(),
            callbacks,
            ComboSettings::default(),
            WidgetElements::new(ROOT, SEARCH),
        );
        let doc = ScreenDocument::new()
            .with_element(ROOT, None, false)
            .with_element(SEARCH, Some(ROOT), true)
            .with_element(OUTSIDE, None, true);

        let mut page = Self {
            combo,
            doc,
            changes,
            created,
            tick: 0,
        };
        page.focus(SEARCH);
        page
    }

    /// Move focus like a user click, dispatching the resulting events
    fn focus(&mut self, element: ElementId) {
        self.doc.focus(element).unwrap();
        self.dispatch();
    }

    fn dispatch(&mut self) {
        for event in self.doc.take_events() {
            match event {
                FocusEvent::Focus(el) if self.doc.contains(ROOT, el) => {
                    self.combo.on_focus(el, &mut self.doc);
                }
                FocusEvent::Blur(el) if el != OUTSIDE => self.combo.on_blur(self.tick),
                _ => {}
            }
        }
    }

    fn register_targets(&mut self) {
        for index in 0..self.combo.matching_options().len() {
            let target = option_target(index);
            self.doc.attach(target, Some(ROOT), false);
            self.combo.register_option_target(index, target);
        }
    }

    fn key(&mut self, key: Key) -> KeyOutcome {
        let outcome = self.combo.handle_key(key, &mut self.doc);
        self.dispatch();
        outcome
    }

    /// Apply the last requested selection, as the owner of the state would
    fn apply_changes(&mut self) {
        if let Some(next) = self.changes.borrow_mut().drain(..).last() {
            self.combo.set_selected(next);
        }
    }

    fn tick(&mut self) {
        self.tick += 1;
        self.combo.on_tick(self.tick, &self.doc);
    }

    fn selected(&self) -> Vec<&str> {
        self.combo.selected().iter().map(|o| o.label.as_str()).collect()
    }

    fn matches(&self) -> Vec<&str> {
        self.combo
            .matching_options()
            .iter()
            .map(|o| o.label.as_str())
            .collect()
    }
}

#[test]
fn test_exact_single_match_commit() {
    let mut page = Page::new(labels_catalog(["Red", "Green"]), &[], false);
    page.combo.set_search("Red");
    assert_eq!(page.matches(), vec!["Red"]);

    assert_eq!(page.key(Key::Enter), KeyOutcome::Handled);
    assert_eq!(page.combo.search_value(), "");
    assert_eq!(page.changes.borrow().len(), 1);

    page.apply_changes();
    assert_eq!(page.selected(), vec!["Red"]);
    assert_eq!(page.matches(), vec!["Green"]);
    assert_eq!(page.doc.active_element(), Some(SEARCH));
}

#[test]
fn test_custom_creation() {
    let mut page = Page::new(labels_catalog(["Red", "Green"]), &[], true);
    page.combo.set_search("Blue");
    assert!(page.matches().is_empty());

    assert_eq!(page.key(Key::Enter), KeyOutcome::Handled);
    assert_eq!(
        *page.created.borrow(),
        vec![(
            "Blue".to_string(),
            vec!["Red".to_string(), "Green".to_string()]
        )]
    );
    assert_eq!(page.combo.search_value(), "");
    assert!(page.changes.borrow().is_empty());
    assert!(page.selected().is_empty());
}

#[test]
fn test_creation_needs_callback() {
    let mut page = Page::new(labels_catalog(["Red", "Green"]), &[], false);
    page.combo.set_search("Blue");
    assert_eq!(page.key(Key::Enter), KeyOutcome::Propagate);
    assert_eq!(page.combo.search_value(), "Blue");
}

#[test]
fn test_backspace_pill_deletion() {
    let mut page = Page::new(labels_catalog(["Red", "Green", "Blue"]), &["Red", "Green"], false);

    assert_eq!(page.key(Key::Backspace), KeyOutcome::Handled);
    page.apply_changes();
    assert_eq!(page.selected(), vec!["Red"]);

    page.combo.set_search("x");
    assert_eq!(page.key(Key::Backspace), KeyOutcome::Propagate);
    assert!(page.changes.borrow().is_empty());
    assert_eq!(page.selected(), vec!["Red"]);
}

#[test]
fn test_blur_closes_list() {
    let mut page = Page::new(labels_catalog(["Red", "Green"]), &[], false);
    assert!(page.combo.is_list_open());
    page.register_targets();

    page.key(Key::Down);
    assert_eq!(page.combo.active_option_index(), Some(0));
    assert_eq!(page.doc.active_element(), Some(option_target(0)));

    page.focus(OUTSIDE);
    assert!(page.combo.is_list_open());

    page.tick();
    assert!(!page.combo.is_list_open());
    assert_eq!(page.combo.active_option_index(), None);
}

#[test]
fn test_focus_returning_before_tick_keeps_list_open() {
    let mut page = Page::new(labels_catalog(["Red", "Green"]), &[], false);
    page.focus(OUTSIDE);
    page.focus(SEARCH);

    page.tick();
    assert!(page.combo.is_list_open());
}

#[test]
fn test_unmount_cancels_blur_check() {
    let mut page = Page::new(labels_catalog(["Red"]), &[], false);
    page.focus(OUTSIDE);
    page.combo.unmount();
    page.doc.detach(ROOT);

    page.tick();
    assert!(page.combo.is_list_open());
    assert!(!page.combo.is_mounted());
}

#[test]
fn test_tab_escapes_to_next_field() {
    let mut page = Page::new(labels_catalog(["Red", "Green"]), &[], false);
    page.register_targets();
    page.key(Key::Down);

    assert_eq!(page.key(Key::Tab), KeyOutcome::Handled);
    assert_eq!(page.doc.active_element(), Some(OUTSIDE));

    page.focus(SEARCH);
    assert_eq!(page.key(Key::ShiftTab), KeyOutcome::Handled);
    assert_eq!(page.doc.active_element(), Some(OUTSIDE));
}

#[test]
fn test_navigation_wraps_and_escape_returns_to_search() {
    let mut page = Page::new(labels_catalog(["Red", "Green", "Blue"]), &[], false);
    page.register_targets();

    page.key(Key::Up);
    assert_eq!(page.combo.active_option_index(), Some(2));
    page.key(Key::Down);
    assert_eq!(page.combo.active_option_index(), Some(0));

    assert_eq!(page.key(Key::Escape), KeyOutcome::Handled);
    assert_eq!(page.combo.active_option_index(), None);
    assert_eq!(page.doc.active_element(), Some(SEARCH));
    assert_eq!(page.key(Key::Escape), KeyOutcome::Propagate);
}

#[test]
fn test_enter_commits_active_option() {
    let mut page = Page::new(labels_catalog(["Red", "Green", "Blue"]), &[], false);
    page.register_targets();
    page.key(Key::Down);
    page.key(Key::Down);

    assert_eq!(page.key(Key::Enter), KeyOutcome::Handled);
    page.apply_changes();
    assert_eq!(page.selected(), vec!["Green"]);
}

#[test]
fn test_groups_survive_filtering() {
    let catalog = vec![
        ComboOption::labelled("Red").into(),
        OptionGroup::new(
            "Fruit",
            vec![ComboOption::labelled("Apple"), ComboOption::labelled("Cherry")],
        )
        .into(),
    ];
    let matches = compute_matches(&catalog, &[], "e");
    let labels: Vec<&str> = matches.options().iter().map(|o| o.label.as_str()).collect();
    assert_eq!(labels, vec!["Red", "Apple", "Cherry"]);
    assert_eq!(matches.group_of(&matches.options()[2]), Some("Fruit"));
    assert_eq!(matches.group_of(&matches.options()[0]), None);
}

mod properties {
    use super::*;
    use pillbox::combo::{NavigationController, Step, flatten_catalog, fold_contains};
    use proptest::prelude::*;

    /// Unique labels, dealt out in runs of three as loose options or groups
    fn catalog_strategy() -> impl Strategy<Value = (Vec<String>, Vec<CatalogEntry>)> {
        (
            prop::collection::hash_set("[a-zA-Z]{1,6}", 0..12),
            prop::collection::vec(any::<bool>(), 4),
        )
            .prop_map(|(labels, grouped)| {
                let labels: Vec<String> = labels.into_iter().collect();
                let mut catalog = Vec::new();
                for (run, chunk) in labels.chunks(3).enumerate() {
                    let options = chunk.iter().map(|l| ComboOption::labelled(l.clone()));
                    if grouped[run] {
                        catalog.push(OptionGroup::new(format!("G{run}"), options.collect()).into());
                    } else {
                        catalog.extend(options.map(CatalogEntry::from));
                    }
                }
                (labels, catalog)
            })
    }

    proptest! {
        #[test]
        fn matches_are_unselected_catalog_subsequence(
            (labels, catalog) in catalog_strategy(),
            picks in prop::collection::vec(any::<prop::sample::Index>(), 0..4),
            search in "[a-zA-Z]{0,3}",
        ) {
            let selected: Vec<ComboOption> = if labels.is_empty() {
                Vec::new()
            } else {
                picks.iter().map(|i| ComboOption::labelled(i.get(&labels).clone())).collect()
            };

            let matches = compute_matches(&catalog, &selected, &search);
            let flat = flatten_catalog(&catalog);
            let mut cursor = flat.iter();
            for option in matches.options() {
                prop_assert!(!selected.iter().any(|s| s.label == option.label));
                prop_assert!(fold_contains(&option.label, &search));

                // Same relative order as the catalog, group kept
                let source = cursor.find(|candidate| candidate.label == option.label);
                prop_assert!(source.is_some(), "{} out of catalog order", option.label);
                if let Some(source) = source {
                    prop_assert_eq!(matches.group_of(option), source.group_label.as_deref());
                }
            }
        }

        #[test]
        fn active_index_stays_in_bounds(
            steps in prop::collection::vec((any::<bool>(), 0usize..6, any::<bool>()), 0..40),
        ) {
            let mut nav = NavigationController::new();
            for (forward, count, keep) in steps {
                let follow = nav.active().filter(|_| keep);
                nav.reconcile(count, follow);
                if let Some(index) = nav.active() {
                    prop_assert!(index < count);
                }

                let step = if forward { Step::Next } else { Step::Previous };
                nav.increment(step, count);
                match nav.active() {
                    Some(index) => prop_assert!(index < count),
                    None => prop_assert_eq!(count, 0),
                }
            }
        }
    }
}
