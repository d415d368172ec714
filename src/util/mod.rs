//! Browser-facing utilities with host-side stand-ins.
//!
//! ARCHITECTURE
//! ============
//! Each module pairs a small abstraction with a browser implementation
//! (gated by `csr`) and a deterministic one used by tests.

pub mod clock;
pub mod storage;
pub mod timers;
