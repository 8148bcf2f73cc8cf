//! Active option navigation
//!
//! The navigator is either idle or has one active index into the option
//! target registry. The registry is filled by the render consumer, one
//! focusable element per rendered option; it may have holes while a render
//! is in flight and is resized to the match count on every recompute.

use super::focus::ElementId;

/// Direction of an arrow-key step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Down
    Next,
    /// Up
    Previous,
}

/// Navigation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavState {
    /// No option is active
    #[default]
    Idle,
    /// The option at this registry index is active
    Active(usize),
}

/// Index-keyed registry of option focus targets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetRegistry {
    slots: Vec<Option<ElementId>>,
}

impl TargetRegistry {
    /// Create an empty registry
    #[must_use]
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Register the focus target for the option at `index`
    pub fn register(&mut self, index: usize, target: ElementId) {
        if index >= self.slots.len() {
            self.slots.resize(index + 1, None);
        }
        self.slots[index] = Some(target);
    }

    /// Forget the target at `index`, leaving a hole
    pub fn unregister(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = None;
        }
    }

    /// Resize to `len` slots, keeping registrations that are still in range
    pub fn compact(&mut self, len: usize) {
        self.slots.resize(len, None);
    }

    /// Number of slots
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether there are no slots
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Target registered at `index`
    #[must_use]
    pub fn get(&self, index: usize) -> Option<ElementId> {
        self.slots.get(index).copied().flatten()
    }

    /// Registry position of `target`
    #[must_use]
    pub fn position_of(&self, target: ElementId) -> Option<usize> {
        self.slots.iter().position(|slot| *slot == Some(target))
    }
}

/// Active-index state machine
#[derive(Debug, Clone, Default)]
pub struct NavigationController {
    state: NavState,
    registry: TargetRegistry,
}

impl NavigationController {
    /// Create an idle controller with an empty registry
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: NavState::Idle,
            registry: TargetRegistry::new(),
        }
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> NavState {
        self.state
    }

    /// Active index, if any
    #[must_use]
    pub const fn active(&self) -> Option<usize> {
        match self.state {
            NavState::Idle => None,
            NavState::Active(index) => Some(index),
        }
    }

    /// Option target registry
    #[must_use]
    pub const fn registry(&self) -> &TargetRegistry {
        &self.registry
    }

    /// Mutable option target registry
    pub const fn registry_mut(&mut self) -> &mut TargetRegistry {
        &mut self.registry
    }

    /// Step the active index, wrapping at both ends
    ///
    /// With no matches the controller is forced idle. Entering from idle,
    /// `Next` activates the first slot and `Previous` the last. Returns the
    /// newly active index.
    pub fn increment(&mut self, step: Step, match_count: usize) -> Option<usize> {
        let len = self.registry.len();
        if match_count == 0 || len == 0 {
            self.state = NavState::Idle;
            return None;
        }

        let next = match (self.state, step) {
            (NavState::Idle, Step::Next) => 0,
            (NavState::Idle, Step::Previous) => len - 1,
            (NavState::Active(index), Step::Next) => {
                if index + 1 >= len {
                    0
                } else {
                    index + 1
                }
            }
            (NavState::Active(index), Step::Previous) => {
                if index == 0 || index > len {
                    len - 1
                } else {
                    index - 1
                }
            }
        };

        self.state = NavState::Active(next);
        Some(next)
    }

    /// Activate `index` directly; out-of-range indices are ignored
    pub fn activate(&mut self, index: usize) -> bool {
        if index < self.registry.len() {
            self.state = NavState::Active(index);
            true
        } else {
            false
        }
    }

    /// Force idle
    pub fn clear(&mut self) {
        self.state = NavState::Idle;
    }

    /// Reconcile with a freshly computed match set
    ///
    /// The registry is resized to `match_count`. `follow` is the new
    /// position of the previously active option, if it survived.
    pub fn reconcile(&mut self, match_count: usize, follow: Option<usize>) {
        self.registry.compact(match_count);
        self.state = match follow {
            Some(index) if index < match_count => NavState::Active(index),
            _ => NavState::Idle,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(len: usize) -> NavigationController {
        let mut nav = NavigationController::new();
        nav.reconcile(len, None);
        nav
    }

    #[test]
    fn test_enter_from_idle() {
        let mut nav = controller(3);
        assert_eq!(nav.increment(Step::Next, 3), Some(0));

        let mut nav = controller(3);
        assert_eq!(nav.increment(Step::Previous, 3), Some(2));
    }

    #[test]
    fn test_wrap_around() {
        let mut nav = controller(4);
        nav.activate(0);
        assert_eq!(nav.increment(Step::Previous, 4), Some(3));
        assert_eq!(nav.increment(Step::Next, 4), Some(0));
        assert_eq!(nav.increment(Step::Next, 4), Some(1));
    }

    #[test]
    fn test_empty_match_set_forces_idle() {
        let mut nav = controller(2);
        nav.activate(1);
        assert_eq!(nav.increment(Step::Next, 0), None);
        assert_eq!(nav.state(), NavState::Idle);
    }

    #[test]
    fn test_reconcile_follows_or_resets() {
        let mut nav = controller(5);
        nav.activate(4);

        nav.reconcile(3, Some(1));
        assert_eq!(nav.active(), Some(1));

        nav.reconcile(3, None);
        assert_eq!(nav.active(), None);

        nav.activate(2);
        nav.reconcile(0, Some(2));
        assert_eq!(nav.active(), None);
        assert!(nav.registry().is_empty());
    }

    #[test]
    fn test_activate_out_of_range() {
        let mut nav = controller(2);
        assert!(!nav.activate(2));
        assert_eq!(nav.active(), None);
        assert!(nav.activate(1));
        assert_eq!(nav.active(), Some(1));
    }

    #[test]
    fn test_registry_holes_and_compaction() {
        let mut registry = TargetRegistry::new();
        registry.register(2, ElementId(12));
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.get(0), None);
        assert_eq!(registry.get(2), Some(ElementId(12)));
        assert_eq!(registry.position_of(ElementId(12)), Some(2));

        registry.unregister(2);
        assert_eq!(registry.get(2), None);
        assert_eq!(registry.position_of(ElementId(12)), None);

        registry.register(0, ElementId(10));
        registry.compact(1);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(0), Some(ElementId(10)));
    }
}
