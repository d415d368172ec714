//! Tunables for the login form, lockout timer, and mock API.
//!
//! DESIGN
//! ======
//! One `LoginConfig` is built when the page mounts and handed to every
//! collaborator, so tests can shrink durations or swap endpoints without
//! touching globals.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_LOCK_DURATION_MS: u64 = 60 * 1000;
const DEFAULT_ERROR_DISPLAY_MS: u64 = 5 * 1000;
const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;
const DEFAULT_STORAGE_KEY: &str = "loginTimeout";

const DEFAULT_SUCCESS_URL: &str = "https://run.mocky.io/v3/5664b957-eef4-4254-9776-91014939fdfa";
const DEFAULT_ERROR_URL: &str = "https://run.mocky.io/v3/5f5d813a-5eac-45ec-8735-2903cddbec96";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginConfig {
    /// How long the form stays locked after any completed attempt.
    pub lock_duration_ms: u64,
    /// How long a failed result stays visible before it is cleared.
    pub error_display_ms: u64,
    /// Countdown refresh period.
    pub tick_interval_ms: u64,
    /// Persistent storage key holding the lock expiry.
    pub storage_key: String,
    /// Canned endpoint that always answers with a success payload.
    pub success_url: String,
    /// Canned endpoint that always answers with an error payload.
    pub error_url: String,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            lock_duration_ms: DEFAULT_LOCK_DURATION_MS,
            error_display_ms: DEFAULT_ERROR_DISPLAY_MS,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            success_url: DEFAULT_SUCCESS_URL.to_owned(),
            error_url: DEFAULT_ERROR_URL.to_owned(),
        }
    }
}
