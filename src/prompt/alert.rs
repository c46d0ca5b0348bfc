//! Update alert content

use std::fmt;

/// What the user picked in the update alert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptChoice {
    /// Dismiss this version for good ("Cancel")
    Skip,
    /// Dismiss for now; the next check asks again
    RemindLater,
    /// Open the storefront page
    Update,
}

impl PromptChoice {
    pub fn label(&self) -> &'static str {
        match self {
            PromptChoice::Skip => "Cancel",
            PromptChoice::RemindLater => "Remind Me Later",
            PromptChoice::Update => "Update",
        }
    }
}

impl fmt::Display for PromptChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Choices in display order
pub const ACTIONS: [PromptChoice; 3] = [
    PromptChoice::Skip,
    PromptChoice::RemindLater,
    PromptChoice::Update,
];

/// Modal offered when a new version is available
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateAlert {
    pub title: String,
    pub message: String,
}

impl UpdateAlert {
    pub fn for_version(version: &str) -> Self {
        Self {
            title: "Update to New Version".to_string(),
            message: format!("Version {} is Available", version),
        }
    }

    pub fn actions(&self) -> [PromptChoice; 3] {
        ACTIONS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_version_mentions_version_in_message() {
        let alert = UpdateAlert::for_version("2.1");

        assert_eq!(alert.title, "Update to New Version");
        assert_eq!(alert.message, "Version 2.1 is Available");
    }

    #[test]
    fn actions_are_labelled_cancel_remind_update() {
        let labels: Vec<String> = UpdateAlert::for_version("2.1")
            .actions()
            .iter()
            .map(ToString::to_string)
            .collect();

        assert_eq!(labels, vec!["Cancel", "Remind Me Later", "Update"]);
    }
}
