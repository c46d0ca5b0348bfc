//! Presenter and link opener doubles

use std::sync::Mutex;

use async_trait::async_trait;
use url::Url;

use store_update_check::prompt::alert::{PromptChoice, UpdateAlert};
use store_update_check::prompt::error::{LinkError, PromptError};
use store_update_check::prompt::link::LinkOpener;
use store_update_check::prompt::presenter::Presenter;
use store_update_check::prompt::screen::Screen;

/// Presenter that always answers with the same choice and records what it showed
pub struct ScriptedPresenter {
    choice: PromptChoice,
    shown: Mutex<Vec<(String, UpdateAlert)>>,
}

impl ScriptedPresenter {
    pub fn new(choice: PromptChoice) -> Self {
        Self {
            choice,
            shown: Mutex::new(Vec::new()),
        }
    }

    /// (screen name, alert) pairs in presentation order
    pub fn shown(&self) -> Vec<(String, UpdateAlert)> {
        self.shown.lock().unwrap().clone()
    }
}

#[async_trait]
impl Presenter for ScriptedPresenter {
    async fn present(
        &self,
        screen: &Screen,
        alert: &UpdateAlert,
    ) -> Result<PromptChoice, PromptError> {
        self.shown
            .lock()
            .unwrap()
            .push((screen.name.clone(), alert.clone()));
        Ok(self.choice)
    }
}

/// Link opener that records URLs instead of launching anything
pub struct RecordingOpener {
    allowed: bool,
    opened: Mutex<Vec<String>>,
}

impl RecordingOpener {
    pub fn new(allowed: bool) -> Self {
        Self {
            allowed,
            opened: Mutex::new(Vec::new()),
        }
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl LinkOpener for RecordingOpener {
    fn can_open(&self, _url: &Url) -> bool {
        self.allowed
    }

    fn open(&self, url: &Url) -> Result<(), LinkError> {
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}
