//! Opening the storefront page on "Update"

use std::process::{Command, Stdio};

#[cfg(test)]
use mockall::automock;
use tracing::debug;
use url::Url;

use crate::prompt::error::LinkError;

/// Trait for handing a URL to whatever the platform uses to open links
#[cfg_attr(test, automock)]
pub trait LinkOpener: Send + Sync {
    /// Whether the platform is able to open `url`
    fn can_open(&self, url: &Url) -> bool;

    /// Opens `url`
    fn open(&self, url: &Url) -> Result<(), LinkError>;
}

/// Opens links with the desktop's default handler
#[derive(Debug, Default)]
pub struct SystemLinkOpener;

impl SystemLinkOpener {
    fn command(url: &Url) -> Command {
        if cfg!(target_os = "macos") {
            let mut command = Command::new("open");
            command.arg(url.as_str());
            command
        } else if cfg!(target_os = "windows") {
            let mut command = Command::new("cmd");
            command.args(["/C", "start", "", url.as_str()]);
            command
        } else {
            let mut command = Command::new("xdg-open");
            command.arg(url.as_str());
            command
        }
    }
}

impl LinkOpener for SystemLinkOpener {
    fn can_open(&self, url: &Url) -> bool {
        matches!(url.scheme(), "http" | "https" | "itms-apps")
    }

    fn open(&self, url: &Url) -> Result<(), LinkError> {
        if !self.can_open(url) {
            return Err(LinkError::Unsupported(url.to_string()));
        }

        debug!("Opening {}", url);
        Self::command(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        Ok(())
    }
}
