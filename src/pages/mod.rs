//! Page modules for top-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its orchestration and delegates rendering details to
//! `components`.

pub mod login;
