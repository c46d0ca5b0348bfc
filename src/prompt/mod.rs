//! Update prompt presentation
//!
//! The host hands in its current [`screen::Screen`] hierarchy; the topmost
//! visible screen receives a three-choice [`alert::UpdateAlert`] through a
//! [`presenter::Presenter`]. "Update" opens the storefront page through a
//! [`link::LinkOpener`].
//!
//! # Modules
//!
//! - [`alert`]: Alert text and the three user choices
//! - [`error`]: Error types for prompting and opening links
//! - [`link`]: Opening the storefront page
//! - [`presenter`]: Presenter trait
//! - [`screen`]: Screen hierarchy and the topmost-screen walk
//! - [`terminal`]: Interactive terminal presenter

pub mod alert;
pub mod error;
pub mod link;
pub mod presenter;
pub mod screen;
pub mod terminal;
