//! Client-side state for the login form.
//!
//! DESIGN
//! ======
//! `lockout` owns the persisted lock expiry; `login` is the form state
//! machine built on top of it.

pub mod lockout;
pub mod login;
