//! Update check flow: fetch, compare, prompt, act on the choice

use std::sync::Arc;

use tracing::{error, info, warn};
use url::Url;

use crate::config::{DEFAULT_VERSION, HostEnvironment};
use crate::prompt::alert::{PromptChoice, UpdateAlert};
use crate::prompt::link::LinkOpener;
use crate::prompt::presenter::Presenter;
use crate::prompt::screen::{Screen, top_screen};
use crate::version::checker::{PromptDecision, decide};
use crate::version::fetcher::VersionFetcher;
use crate::version::lookup::StorefrontLookup;
use crate::version::preferences::PreferenceStore;
use crate::version::types::StoreRelease;

/// How a single update check ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Lookup failed, was superseded, or returned nothing usable
    NoResult,
    /// Storefront version equals the installed one
    UpToDate { version: String },
    /// Storefront version was skipped earlier
    Skipped { version: String },
    /// An update is available but there is no screen to show it on
    NoScreen { version: String },
    /// The alert could not be shown
    PromptFailed { version: String },
    /// The user answered the alert
    Prompted {
        version: String,
        choice: PromptChoice,
    },
}

pub struct UpdateChecker<S: PreferenceStore> {
    host: HostEnvironment,
    fetcher: VersionFetcher,
    preferences: Arc<S>,
    presenter: Arc<dyn Presenter>,
    opener: Arc<dyn LinkOpener>,
    store_url: Option<String>,
}

impl<S: PreferenceStore> UpdateChecker<S> {
    pub fn new(
        host: HostEnvironment,
        lookup: Arc<dyn StorefrontLookup>,
        preferences: Arc<S>,
        presenter: Arc<dyn Presenter>,
        opener: Arc<dyn LinkOpener>,
    ) -> Self {
        Self {
            host,
            fetcher: VersionFetcher::new(lookup),
            preferences,
            presenter,
            opener,
            store_url: None,
        }
    }

    /// Page opened on "Update"; without one the listing's own URL is used
    pub fn with_store_url(mut self, store_url: Option<String>) -> Self {
        self.store_url = store_url;
        self
    }

    /// Cancel an outstanding check's storefront request
    pub fn cancel(&self) {
        self.fetcher.cancel();
    }

    /// Run one check against the storefront and prompt on `root`'s topmost
    /// screen if a new, not skipped version is published
    ///
    /// A check started while another is still fetching supersedes it; the
    /// older one ends with [`CheckOutcome::NoResult`].
    pub async fn check_and_prompt(&self, root: Option<&Screen>) -> CheckOutcome {
        let Some(release) = self.fetcher.fetch(&self.host.bundle_identifier).await else {
            return CheckOutcome::NoResult;
        };
        let version = release.version.clone();

        let skipped = self
            .preferences
            .skipped_version()
            .inspect_err(|e| error!("Failed to read skipped version: {}", e))
            .unwrap_or_else(|_| DEFAULT_VERSION.to_string());

        match decide(&version, &self.host.installed_version, &skipped) {
            PromptDecision::UpToDate => {
                info!("Installed version {} is current", version);
                return CheckOutcome::UpToDate { version };
            }
            PromptDecision::Skipped => {
                info!("Version {} was skipped, not prompting", version);
                return CheckOutcome::Skipped { version };
            }
            PromptDecision::UpdateAvailable => {
                info!(
                    "Version {} is available (installed {})",
                    version, self.host.installed_version
                );
            }
        }

        let Some(screen) = top_screen(root) else {
            warn!("No visible screen to present the update alert on");
            return CheckOutcome::NoScreen { version };
        };

        let alert = UpdateAlert::for_version(&version);
        let choice = match self.presenter.present(screen, &alert).await {
            Ok(choice) => choice,
            Err(e) => {
                error!("Failed to present update alert: {}", e);
                return CheckOutcome::PromptFailed { version };
            }
        };

        self.apply_choice(choice, &release);
        CheckOutcome::Prompted { version, choice }
    }

    fn apply_choice(&self, choice: PromptChoice, release: &StoreRelease) {
        match choice {
            PromptChoice::Skip => {
                if let Err(e) = self.preferences.set_skipped_version(&release.version) {
                    error!("Failed to skip version {}: {}", release.version, e);
                }
            }
            PromptChoice::RemindLater => {}
            PromptChoice::Update => self.open_store(release),
        }
    }

    fn store_link(&self, release: &StoreRelease) -> Option<Url> {
        let link = self
            .store_url
            .as_deref()
            .or(release.store_url.as_deref())?;

        Url::parse(link)
            .inspect_err(|e| warn!("Ignoring invalid store URL {}: {}", link, e))
            .ok()
    }

    fn open_store(&self, release: &StoreRelease) {
        let Some(url) = self.store_link(release) else {
            warn!("No store URL to open for version {}", release.version);
            return;
        };

        if !self.opener.can_open(&url) {
            info!("Cannot open {}", url);
            return;
        }

        if let Err(e) = self.opener.open(&url) {
            warn!("Failed to open {}: {}", url, e);
        }
    }
}
