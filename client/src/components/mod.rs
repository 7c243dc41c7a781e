//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write the shared auth flag through the Leptos context
//! providers installed by `app::App`.

pub mod auth_updater;
pub mod auth_viewer;
