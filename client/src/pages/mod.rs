//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (reading the URL) and delegates
//! rendering details to `components`.

pub mod dashboard;
