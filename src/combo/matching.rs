//! Option matching
//!
//! Flattens a (possibly grouped) catalog and filters it against the current
//! search value and selection. Matching is a case-folded substring test over
//! ASCII; there is no fuzzy scoring and the catalog order is preserved.

use super::option::{CatalogEntry, ComboOption};
use std::collections::HashMap;

/// Result of matching a catalog against a search value and selection
///
/// Recomputed from scratch on every input change. Callers should not hold
/// on to one across updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSet<V = String> {
    options: Vec<ComboOption<V>>,
    groups: HashMap<String, Option<String>>,
}

impl<V> Default for MatchSet<V> {
    fn default() -> Self {
        Self {
            options: Vec::new(),
            groups: HashMap::new(),
        }
    }
}

impl<V> MatchSet<V> {
    /// Matching options in catalog order
    #[must_use]
    pub fn options(&self) -> &[ComboOption<V>] {
        &self.options
    }

    /// Number of matching options
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether nothing matched
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Option at a position in the match list
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ComboOption<V>> {
        self.options.get(index)
    }

    /// Position of the option with the given label
    #[must_use]
    pub fn position(&self, label: &str) -> Option<usize> {
        self.options.iter().position(|option| option.label == label)
    }

    /// Group label recorded for a matching option
    ///
    /// Returns `None` both for ungrouped options and for options that are
    /// not part of this match set.
    #[must_use]
    pub fn group_of(&self, option: &ComboOption<V>) -> Option<&str> {
        self.groups
            .get(&option.label)
            .and_then(|group| group.as_deref())
    }

    /// Consecutive runs of options sharing a group, for section headers
    #[must_use]
    pub fn grouped(&self) -> Vec<(Option<&str>, &[ComboOption<V>])> {
        let mut runs: Vec<(Option<&str>, &[ComboOption<V>])> = Vec::new();
        let mut start = 0;

        for index in 1..=self.options.len() {
            let boundary = index == self.options.len()
                || self.group_of(&self.options[index]) != self.group_of(&self.options[start]);
            if boundary {
                runs.push((
                    self.group_of(&self.options[start]),
                    &self.options[start..index],
                ));
                start = index;
            }
        }

        runs
    }
}

/// Flatten a catalog into its leaf options in declaration order
///
/// Options inside a group take that group's label; standalone options keep
/// whatever `group_label` they already carry.
#[must_use]
pub fn flatten_catalog<V: Clone>(catalog: &[CatalogEntry<V>]) -> Vec<ComboOption<V>> {
    let mut flat = Vec::new();
    for entry in catalog {
        match entry {
            CatalogEntry::Option(option) => flat.push(option.clone()),
            CatalogEntry::Group(group) => {
                flat.extend(group.options.iter().map(|option| ComboOption {
                    group_label: Some(group.label.clone()),
                    ..option.clone()
                }));
            }
        }
    }
    flat
}

/// Case-folded substring test; an empty needle matches everything
#[must_use]
pub fn fold_contains(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_ascii_lowercase().contains(&needle.to_ascii_lowercase())
}

/// Case-folded equality
#[must_use]
pub fn fold_eq(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// Compute the options eligible for selection
///
/// Keeps every catalog option whose label contains `search` (case-folded)
/// and which is not already in `selected`. Groups left without members
/// simply produce no entries.
#[must_use]
pub fn compute_matches<V: Clone>(
    catalog: &[CatalogEntry<V>],
    selected: &[ComboOption<V>],
    search: &str,
) -> MatchSet<V> {
    let mut options = Vec::new();
    let mut groups = HashMap::new();

    for option in flatten_catalog(catalog) {
        if selected.iter().any(|chosen| chosen.same_option(&option)) {
            continue;
        }
        if !fold_contains(&option.label, search) {
            continue;
        }
        // Duplicate labels are a caller error; the later group wins here.
        groups.insert(option.label.clone(), option.group_label.clone());
        options.push(option);
    }

    MatchSet { options, groups }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combo::option::{OptionGroup, labels_catalog};

    fn grouped_catalog() -> Vec<CatalogEntry> {
        vec![
            ComboOption::labelled("Red").into(),
            OptionGroup::new(
                "Fruit",
                vec![ComboOption::labelled("Apple"), ComboOption::labelled("Banana")],
            )
            .into(),
            OptionGroup::new(
                "Vegetables",
                vec![ComboOption::labelled("Carrot"), ComboOption::labelled("Radish")],
            )
            .into(),
        ]
    }

    fn labels<V>(set: &MatchSet<V>) -> Vec<&str> {
        set.options().iter().map(|o| o.label.as_str()).collect()
    }

    #[test]
    fn test_empty_search_matches_everything_in_order() {
        let set = compute_matches(&grouped_catalog(), &[], "");
        assert_eq!(labels(&set), vec!["Red", "Apple", "Banana", "Carrot", "Radish"]);
    }

    #[test]
    fn test_case_insensitive_substring() {
        let catalog = labels_catalog(["Apple"]);
        assert_eq!(labels(&compute_matches(&catalog, &[], "apple")), vec!["Apple"]);
        assert_eq!(labels(&compute_matches(&catalog, &[], "APP")), vec!["Apple"]);
        assert_eq!(labels(&compute_matches(&catalog, &[], "pl")), vec!["Apple"]);
        assert!(compute_matches(&catalog, &[], "pear").is_empty());
    }

    #[test]
    fn test_selected_options_are_excluded() {
        let selected = vec![ComboOption::labelled("Apple")];
        let set = compute_matches(&grouped_catalog(), &selected, "");
        assert_eq!(labels(&set), vec!["Red", "Banana", "Carrot", "Radish"]);
    }

    #[test]
    fn test_group_labels_follow_members() {
        let set = compute_matches(&grouped_catalog(), &[], "r");
        assert_eq!(labels(&set), vec!["Red", "Carrot", "Radish"]);
        assert_eq!(set.group_of(&set.options()[0]), None);
        assert_eq!(set.group_of(&set.options()[1]), Some("Vegetables"));
    }

    #[test]
    fn test_empty_groups_are_dropped() {
        let set = compute_matches(&grouped_catalog(), &[], "an");
        let runs = set.grouped();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].0, Some("Fruit"));
        assert_eq!(runs[0].1.len(), 1);
        assert_eq!(runs[0].1[0].label, "Banana");
    }

    #[test]
    fn test_grouped_runs() {
        let set = compute_matches(&grouped_catalog(), &[], "");
        let runs: Vec<(Option<&str>, usize)> =
            set.grouped().iter().map(|(g, opts)| (*g, opts.len())).collect();
        assert_eq!(runs, vec![(None, 1), (Some("Fruit"), 2), (Some("Vegetables"), 2)]);
    }

    #[test]
    fn test_standalone_option_keeps_its_group() {
        let catalog = vec![CatalogEntry::Option(
            ComboOption::labelled("Lime").with_group("Citrus"),
        )];
        let set = compute_matches(&catalog, &[], "");
        assert_eq!(set.group_of(&set.options()[0]), Some("Citrus"));
    }

    #[test]
    fn test_flatten_catalog_tags_group_members() {
        let flat = flatten_catalog(&grouped_catalog());
        assert_eq!(flat.len(), 5);
        assert_eq!(flat[1].group_label.as_deref(), Some("Fruit"));
        assert_eq!(flat[0].group_label, None);
    }

    #[test]
    fn test_fold_helpers() {
        assert!(fold_contains("Green", ""));
        assert!(fold_contains("Green", "REE"));
        assert!(!fold_contains("Green", "blue"));
        assert!(fold_eq("Red", "rED"));
        assert!(!fold_eq("Red", "Reds"));
    }

    #[test]
    fn test_position_lookup() {
        let set = compute_matches(&grouped_catalog(), &[], "");
        assert_eq!(set.position("Carrot"), Some(3));
        assert_eq!(set.position("Mango"), None);
    }
}
