//! Interactive terminal presenter

use std::io::IsTerminal;

use async_trait::async_trait;
use inquire::Select;
use tracing::debug;

use crate::prompt::alert::{ACTIONS, PromptChoice, UpdateAlert};
use crate::prompt::error::PromptError;
use crate::prompt::presenter::Presenter;
use crate::prompt::screen::Screen;

/// Name of the single screen a terminal offers
pub const TERMINAL_SCREEN: &str = "terminal";

/// Shows the update alert as a select list on the controlling terminal
#[derive(Debug, Default)]
pub struct TerminalPresenter;

impl TerminalPresenter {
    /// The terminal's screen hierarchy: one screen when attached to a tty,
    /// nothing otherwise
    pub fn root_screen() -> Option<Screen> {
        (std::io::stdin().is_terminal() && std::io::stdout().is_terminal())
            .then(|| Screen::leaf(TERMINAL_SCREEN))
    }
}

fn prompt_blocking(alert: &UpdateAlert) -> Result<PromptChoice, PromptError> {
    let message = format!("{}: {}", alert.title, alert.message);
    let options = alert.actions().to_vec();

    // Esc leaves state untouched, same as "Remind Me Later"
    let choice = Select::new(&message, options)
        .with_starting_cursor(options_index(PromptChoice::Update))
        .prompt_skippable()
        .map_err(|e| PromptError::Interaction(e.to_string()))?;

    Ok(choice.unwrap_or(PromptChoice::RemindLater))
}

fn options_index(choice: PromptChoice) -> usize {
    ACTIONS
        .iter()
        .position(|c| *c == choice)
        .unwrap_or_default()
}

#[async_trait]
impl Presenter for TerminalPresenter {
    async fn present(
        &self,
        screen: &Screen,
        alert: &UpdateAlert,
    ) -> Result<PromptChoice, PromptError> {
        debug!("Presenting update alert on {}", screen.name);

        let alert = alert.clone();
        tokio::task::spawn_blocking(move || prompt_blocking(&alert)).await?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_starts_on_update() {
        assert_eq!(options_index(PromptChoice::Update), 2);
    }
}
