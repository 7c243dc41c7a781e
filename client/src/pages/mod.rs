//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages own route-scoped composition and delegate rendering details to
//! `components`.

pub mod home;
