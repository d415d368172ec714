//! Networking modules for the mock login endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the login call and `types` defines the wire schema.

pub mod api;
pub mod types;
