use serde::{Deserialize, Serialize};

/// Static description of one dropdown instance.
///
/// `id` doubles as the per-instance CSS scope class (`select1`, `select2`),
/// so queries can always be narrowed to a single instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropdownConfig {
    pub id: String,
    pub options: Vec<String>,
}

impl DropdownConfig {
    pub fn new(id: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            id: id.into(),
            options,
        }
    }
}

/// A single dropdown instance: trigger plus hideable option list.
///
/// Each rendered instance owns exactly one `Dropdown` value; there is no
/// shared "any dropdown open" state, so instances cannot affect each other.
#[derive(Debug, Clone, PartialEq)]
pub struct Dropdown {
    config: DropdownConfig,
    open: bool,
    selected: Option<String>,
}

impl Dropdown {
    /// Created closed with nothing selected, as on page load.
    pub fn new(config: DropdownConfig) -> Self {
        Self {
            config,
            open: false,
            selected: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.config.id
    }

    pub fn options(&self) -> &[String] {
        &self.config.options
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Text shown on the trigger: the selection, or a placeholder.
    pub fn label(&self) -> String {
        self.selected
            .clone()
            .unwrap_or_else(|| "Select...".to_string())
    }

    /// Trigger click: flips the open state.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Option click: commits the selection and closes the list.
    ///
    /// Returns `false` without touching state when the list is closed or the
    /// label is not one of the configured options. The list is not
    /// interactable while hidden, so a closed-state call never happens in
    /// normal interaction.
    pub fn select(&mut self, label: &str) -> bool {
        if !self.open || !self.config.options.iter().any(|o| o == label) {
            return false;
        }
        self.selected = Some(label.to_string());
        self.open = false;
        true
    }
}
