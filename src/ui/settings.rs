//! Picker settings resolved from config and command line

use crate::config::PillboxConfig;

/// Settings for one picker session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerSettings {
    /// Prompt shown in front of the search field
    pub prompt: String,
    /// Whether unknown search text may be turned into an option
    pub allow_create: bool,
    /// Open the list before the user types
    pub list_open_initial: bool,
    /// Maximum number of option rows shown at once
    pub max_visible: usize,
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self::from(&PillboxConfig::default())
    }
}

impl From<&PillboxConfig> for PickerSettings {
    fn from(config: &PillboxConfig) -> Self {
        Self {
            prompt: config.prompt.clone(),
            allow_create: config.allow_create,
            list_open_initial: config.list_open_initial,
            max_visible: config.max_visible.max(1),
        }
    }
}
