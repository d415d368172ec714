//! Reusable view components for the login page.
//!
//! Both read the `RwSignal<FormView>` context provided by `App`.

pub mod lock_countdown;
pub mod result_alert;
