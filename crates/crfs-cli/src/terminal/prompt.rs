//! Interactive single-choice menus.

use dialoguer::{Select, theme::ColorfulTheme};

use crfs_core::{
    application::{ApplicationError, ports::Prompter},
    error::CrfsResult,
};

/// Arrow-key menu on the controlling terminal.
///
/// No item is preselected. `Esc`/`q` cancel the prompt.
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn select(&self, label: &str, items: &[&'static str]) -> CrfsResult<usize> {
        let choice = Select::with_theme(&self.theme)
            .with_prompt(label)
            .items(items)
            .interact_opt()
            .map_err(|e| ApplicationError::Prompt {
                label: label.to_string(),
                reason: e.to_string(),
            })?;

        choice.ok_or_else(|| {
            ApplicationError::Cancelled {
                label: label.to_string(),
            }
            .into()
        })
    }
}
