//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State lives behind an explicit store handed to components through Leptos
//! context, so readers and writers share one source of truth without a
//! framework-global singleton.

pub mod auth;
