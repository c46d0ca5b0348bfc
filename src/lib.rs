//! Storefront update check
//!
//! Looks up the published version of an app, compares it with the installed
//! and previously skipped versions, and asks the user whether to update.
//!
//! # Modules
//!
//! - [`config`]: Constants, configuration file and host-supplied values
//! - [`prompt`]: Screen hierarchy, alert presentation and link opening
//! - [`update`]: The check flow tying lookup, comparison and prompt together
//! - [`version`]: Storefront lookups, comparison and the skipped-version store

pub mod config;
pub mod prompt;
pub mod update;
pub mod version;
