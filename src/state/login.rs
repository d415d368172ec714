//! Login form state machine.
//!
//! DESIGN
//! ======
//! `LoginFlow` moves between `Idle`, `Submitting`, and `Locked`. It takes the
//! current time as an argument and returns the timers it needs as
//! `Scheduled` values, so the same code runs under browser timeouts and under
//! the virtual `TimerQueue` in tests.
//!
//! Every completed attempt, successful or not, records a lock in the
//! `LockoutTimer`. The stored expiry, not the in-memory phase, decides when
//! the form is released, which keeps reloads and open tabs consistent. If the
//! write fails, the expiry is kept in memory for this page only.
//!
//! ERROR HANDLING
//! ==============
//! API errors stop here: they become failed `ApiResult`s for display and
//! never propagate to the page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use std::cell::RefCell;

use super::lockout::LockoutTimer;
use crate::config::LoginConfig;
use crate::net::api::{ApiError, LoginApi};
use crate::net::types::{ApiResult, LoginCredentials, User};
use crate::util::clock::Clock;
use crate::util::storage::KeyValueStore;
use crate::util::timers::{Scheduled, TimerEvent};

/// Form lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Accepting a submission.
    #[default]
    Idle,
    /// A login request is in flight.
    Submitting,
    /// An attempt completed recently; submissions are blocked.
    Locked,
}

/// Snapshot of everything the page renders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormView {
    pub phase: Phase,
    /// True whenever the submit button must be disabled.
    pub is_loading: bool,
    pub login_result: Option<ApiResult<User>>,
    /// Whole seconds of lock left, as last published by the countdown.
    pub remaining_lock_seconds: Option<u64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Enter your login.")]
    MissingLogin,
    #[error("Enter your password.")]
    MissingPassword,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("A login attempt is already in progress or locked.")]
    Busy,
}

/// Both fields are required; whitespace-only input counts as empty.
///
/// # Errors
///
/// Returns the first missing field.
pub fn validate_credentials(credentials: &LoginCredentials) -> Result<(), ValidationError> {
    if credentials.login.trim().is_empty() {
        return Err(ValidationError::MissingLogin);
    }
    if credentials.password.trim().is_empty() {
        return Err(ValidationError::MissingPassword);
    }
    Ok(())
}

pub struct LoginFlow<S> {
    lockout: LockoutTimer<S>,
    error_display_ms: u64,
    tick_interval_ms: u64,
    phase: Phase,
    login_result: Option<ApiResult<User>>,
    /// Attempt number that produced `login_result`.
    result_attempt: u64,
    attempts: u64,
    remaining_lock_seconds: Option<u64>,
    ticking: bool,
    /// Expiry kept in memory when persisting the lock failed.
    unsaved_expiry: Option<i64>,
}

impl<S: KeyValueStore> LoginFlow<S> {
    pub fn new(store: S, config: &LoginConfig) -> Self {
        Self {
            lockout: LockoutTimer::new(store, config),
            error_display_ms: config.error_display_ms,
            tick_interval_ms: config.tick_interval_ms,
            phase: Phase::Idle,
            login_result: None,
            result_attempt: 0,
            attempts: 0,
            remaining_lock_seconds: None,
            ticking: false,
            unsaved_expiry: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn login_result(&self) -> Option<&ApiResult<User>> {
        self.login_result.as_ref()
    }

    pub fn lockout(&self) -> &LockoutTimer<S> {
        &self.lockout
    }

    pub fn view(&self) -> FormView {
        FormView {
            phase: self.phase,
            is_loading: self.phase != Phase::Idle,
            login_result: self.login_result.clone(),
            remaining_lock_seconds: self.remaining_lock_seconds,
        }
    }

    /// Derive the phase from persisted lock state on page load.
    ///
    /// A lock recorded before a reload keeps its original expiry.
    pub fn init(&mut self, now_ms: i64) -> Vec<Scheduled> {
        let remaining = self.lockout.remaining_ms(now_ms);
        if remaining == 0 {
            self.phase = Phase::Idle;
            self.remaining_lock_seconds = None;
            return Vec::new();
        }
        log::info!("login locked for another {remaining}ms");
        self.phase = Phase::Locked;
        self.remaining_lock_seconds = Some(remaining / 1000);
        let mut timers = vec![Scheduled::new(remaining, TimerEvent::ReleaseLock)];
        timers.extend(self.start_countdown());
        timers
    }

    /// Validate and enter `Submitting`.
    ///
    /// # Errors
    ///
    /// Returns `SubmitRejected::Busy` while submitting or locked and
    /// `SubmitRejected::Invalid` for missing fields. State is unchanged on
    /// error.
    pub fn begin_submit(&mut self, credentials: &LoginCredentials) -> Result<(), SubmitRejected> {
        if self.phase != Phase::Idle {
            return Err(SubmitRejected::Busy);
        }
        validate_credentials(credentials)?;
        self.attempts += 1;
        self.phase = Phase::Submitting;
        log::debug!("login attempt {} started", self.attempts);
        Ok(())
    }

    /// Publish the outcome of the in-flight attempt and lock the form.
    pub fn complete(&mut self, outcome: Result<ApiResult<User>, ApiError>, now_ms: i64) -> Vec<Scheduled> {
        if self.phase != Phase::Submitting {
            log::warn!("ignoring login outcome while {:?}", self.phase);
            return Vec::new();
        }
        let attempt = self.attempts;
        let result = outcome.unwrap_or_else(|e| {
            log::warn!("login attempt {attempt} failed: {e}");
            e.into_result()
        });
        log::info!("login attempt {attempt} completed: success={}", result.success);

        let mut timers = Vec::new();
        if !result.success {
            timers.push(Scheduled::new(self.error_display_ms, TimerEvent::ClearResult { attempt }));
        }
        self.login_result = Some(result);
        self.result_attempt = attempt;

        let lock_ms = self.lockout.lock_duration_ms();
        self.unsaved_expiry = match self.lockout.record_lock(now_ms) {
            Ok(_) => None,
            Err(e) => {
                log::warn!("failed to persist login lock: {e}");
                Some(now_ms.saturating_add(i64::try_from(lock_ms).unwrap_or(i64::MAX)))
            }
        };
        self.phase = Phase::Locked;
        self.remaining_lock_seconds = Some(lock_ms / 1000);
        timers.push(Scheduled::new(lock_ms, TimerEvent::ReleaseLock));
        timers.extend(self.start_countdown());
        timers
    }

    /// Apply a fired timer.
    pub fn on_timer(&mut self, event: TimerEvent, now_ms: i64) -> Vec<Scheduled> {
        match event {
            TimerEvent::ClearResult { attempt } => {
                self.clear_result(attempt);
                Vec::new()
            }
            TimerEvent::ReleaseLock => self.release_lock(now_ms),
            TimerEvent::Tick => self.tick(now_ms),
        }
    }

    /// Only a failed result from the same attempt is cleared, so a stale
    /// timer cannot hide a newer result.
    fn clear_result(&mut self, attempt: u64) {
        let is_own_failure = self.result_attempt == attempt
            && self.login_result.as_ref().is_some_and(|r| !r.success);
        if is_own_failure {
            self.login_result = None;
        }
    }

    fn release_lock(&mut self, now_ms: i64) -> Vec<Scheduled> {
        if self.phase != Phase::Locked {
            return Vec::new();
        }
        let remaining = self.remaining_ms(now_ms);
        if remaining > 0 {
            log::debug!("login lock extended, {remaining}ms left");
            let mut timers = vec![Scheduled::new(remaining, TimerEvent::ReleaseLock)];
            timers.extend(self.start_countdown());
            return timers;
        }
        log::info!("login lock released");
        self.unsaved_expiry = None;
        self.phase = Phase::Idle;
        self.remaining_lock_seconds = None;
        Vec::new()
    }

    fn tick(&mut self, now_ms: i64) -> Vec<Scheduled> {
        let remaining = self.remaining_ms(now_ms);
        self.remaining_lock_seconds = Some(remaining / 1000);
        if remaining == 0 {
            self.ticking = false;
            return Vec::new();
        }
        vec![Scheduled::new(self.tick_interval_ms, TimerEvent::Tick)]
    }

    /// Lock time left: the stored expiry, or the in-memory one if the store
    /// never received it.
    fn remaining_ms(&self, now_ms: i64) -> u64 {
        let stored = self.lockout.remaining_ms(now_ms);
        let unsaved = self
            .unsaved_expiry
            .map_or(0, |expiry| u64::try_from(expiry.saturating_sub(now_ms)).unwrap_or(0));
        stored.max(unsaved)
    }

    fn start_countdown(&mut self) -> Option<Scheduled> {
        if self.ticking {
            return None;
        }
        self.ticking = true;
        Some(Scheduled::new(self.tick_interval_ms, TimerEvent::Tick))
    }
}

/// Run one login attempt: validate, call the API, publish the outcome.
///
/// `publish` receives the view after entering `Submitting` and again after
/// completion. The `RefCell` is never borrowed across the API call.
///
/// # Errors
///
/// Returns `SubmitRejected` if the attempt could not start. No request is
/// made in that case.
pub async fn run_attempt<S, A, C, P>(
    flow: &RefCell<LoginFlow<S>>,
    api: &A,
    clock: &C,
    credentials: &LoginCredentials,
    mut publish: P,
) -> Result<Vec<Scheduled>, SubmitRejected>
where
    S: KeyValueStore,
    A: LoginApi,
    C: Clock,
    P: FnMut(FormView),
{
    flow.borrow_mut().begin_submit(credentials)?;
    publish(flow.borrow().view());

    let outcome = api.attempt_login().await;

    let timers = flow.borrow_mut().complete(outcome, clock.now_ms());
    publish(flow.borrow().view());
    Ok(timers)
}
