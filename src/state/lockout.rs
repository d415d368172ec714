//! Persisted login lockout.
//!
//! DESIGN
//! ======
//! One key in persistent storage holds the lock expiry as a JSON-encoded
//! epoch-millisecond integer. The stored value is the only source of lock
//! state across page reloads; a newer lock overwrites an older one.
//!
//! ERROR HANDLING
//! ==============
//! Unreadable or malformed values count as "no lock" so a corrupted entry
//! can never wedge the form. Malformed values are removed on read.

#[cfg(test)]
#[path = "lockout_test.rs"]
mod lockout_test;

use crate::config::LoginConfig;
use crate::util::storage::{KeyValueStore, StorageError};

pub struct LockoutTimer<S> {
    store: S,
    key: String,
    lock_duration_ms: u64,
}

impl<S: KeyValueStore> LockoutTimer<S> {
    pub fn new(store: S, config: &LoginConfig) -> Self {
        Self {
            store,
            key: config.storage_key.clone(),
            lock_duration_ms: config.lock_duration_ms,
        }
    }

    pub fn lock_duration_ms(&self) -> u64 {
        self.lock_duration_ms
    }

    /// Store `now_ms + lock duration` as the expiry and return it.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the expiry cannot be written.
    pub fn record_lock(&self, now_ms: i64) -> Result<i64, StorageError> {
        let duration = i64::try_from(self.lock_duration_ms).unwrap_or(i64::MAX);
        let expiry = now_ms.saturating_add(duration);
        let encoded = serde_json::to_string(&expiry).map_err(|e| StorageError::Backend(e.to_string()))?;
        self.store.set(&self.key, &encoded)?;
        log::debug!("login lock recorded until {expiry}");
        Ok(expiry)
    }

    /// Stored expiry, if a well-formed one exists.
    pub fn expiry(&self) -> Option<i64> {
        let raw = match self.store.get(&self.key) {
            Ok(raw) => raw?,
            Err(e) => {
                log::warn!("failed to read login lock: {e}");
                return None;
            }
        };
        let parsed = parse_expiry(&raw);
        if parsed.is_none() {
            log::warn!("discarding malformed login lock value {raw:?}");
            self.clear();
        }
        parsed
    }

    /// Milliseconds until the stored lock expires; 0 when unlocked.
    ///
    /// An expired entry is removed, and so is one further away than a full
    /// lock duration, which `record_lock` can never produce.
    pub fn remaining_ms(&self, now_ms: i64) -> u64 {
        let Some(expiry) = self.expiry() else {
            return 0;
        };
        if now_ms >= expiry {
            self.clear();
            return 0;
        }
        let remaining = u64::try_from(expiry.saturating_sub(now_ms)).unwrap_or(u64::MAX);
        if remaining > self.lock_duration_ms {
            log::warn!("discarding login lock {remaining}ms in the future");
            self.clear();
            return 0;
        }
        remaining
    }

    /// Whole seconds until the lock expires, rounded down.
    pub fn remaining_secs(&self, now_ms: i64) -> u64 {
        self.remaining_ms(now_ms) / 1000
    }

    pub fn is_locked(&self, now_ms: i64) -> bool {
        self.remaining_ms(now_ms) > 0
    }

    pub fn clear(&self) {
        if let Err(e) = self.store.remove(&self.key) {
            log::warn!("failed to clear login lock: {e}");
        }
    }
}

/// Accepts any JSON number, or a JSON string holding one. Fractions truncate.
#[allow(clippy::cast_possible_truncation)]
fn parse_expiry(raw: &str) -> Option<i64> {
    let value: serde_json::Value = serde_json::from_str(raw).ok()?;
    if let Some(ms) = value.as_i64() {
        return Some(ms);
    }
    let ms = match &value {
        serde_json::Value::Number(n) => n.as_f64()?,
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    ms.is_finite().then(|| ms as i64)
}
