//! Presenter trait for showing the update alert

#[cfg(test)]
use mockall::automock;

use crate::prompt::alert::{PromptChoice, UpdateAlert};
use crate::prompt::error::PromptError;
use crate::prompt::screen::Screen;

/// Trait for showing a modal alert on a screen and waiting for the choice
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Presenter: Send + Sync {
    /// Shows `alert` on top of `screen`
    ///
    /// # Returns
    /// * `Ok(PromptChoice)` - The action the user picked
    /// * `Err(PromptError)` - If the alert could not be shown
    async fn present(
        &self,
        screen: &Screen,
        alert: &UpdateAlert,
    ) -> Result<PromptChoice, PromptError>;
}
