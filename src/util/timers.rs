//! Delayed callbacks as data.
//!
//! DESIGN
//! ======
//! The login flow never touches real timers. It returns `Scheduled` values
//! and expects the matching `TimerEvent` back once the delay has elapsed.
//! The browser hands them to `gloo-timers`; tests push them into a
//! `TimerQueue`, a virtual clock that fires events in due order.
//!
//! Timers cannot be cancelled. A fired event is checked against current state
//! by its receiver.

#[cfg(test)]
#[path = "timers_test.rs"]
mod timers_test;

use std::collections::BTreeMap;

use super::clock::Clock;

/// Something the login flow wants to happen later.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerEvent {
    /// Hide the failed result produced by attempt number `attempt`.
    ClearResult { attempt: u64 },
    /// Re-enable the form if the stored lock has expired.
    ReleaseLock,
    /// Refresh the countdown from the stored expiry.
    Tick,
}

/// A `TimerEvent` to deliver after `delay_ms`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scheduled {
    pub delay_ms: u64,
    pub event: TimerEvent,
}

impl Scheduled {
    pub fn new(delay_ms: u64, event: TimerEvent) -> Self {
        Self { delay_ms, event }
    }
}

/// Virtual clock holding pending timers.
///
/// Events due at the same instant fire in the order they were scheduled.
#[derive(Debug, Default)]
pub struct TimerQueue {
    now_ms: i64,
    next_seq: u64,
    pending: BTreeMap<(i64, u64), TimerEvent>,
}

impl TimerQueue {
    pub fn new(start_ms: i64) -> Self {
        Self {
            now_ms: start_ms,
            ..Self::default()
        }
    }

    pub fn schedule(&mut self, timer: Scheduled) {
        let delay = i64::try_from(timer.delay_ms).unwrap_or(i64::MAX);
        let due = self.now_ms.saturating_add(delay);
        self.pending.insert((due, self.next_seq), timer.event);
        self.next_seq += 1;
    }

    pub fn schedule_all(&mut self, timers: impl IntoIterator<Item = Scheduled>) {
        for timer in timers {
            self.schedule(timer);
        }
    }

    /// Pop the earliest event due at or before `until_ms`, moving the clock
    /// to its due time.
    pub fn pop_due(&mut self, until_ms: i64) -> Option<TimerEvent> {
        let (&(due, seq), _) = self.pending.first_key_value()?;
        if due > until_ms {
            return None;
        }
        let event = self.pending.remove(&(due, seq))?;
        self.now_ms = self.now_ms.max(due);
        Some(event)
    }

    /// Advance to `target_ms`, handing each due event to `fire`. Timers
    /// returned by `fire` are scheduled relative to the event's due time and
    /// fire in the same pass if they fall inside the window.
    pub fn run_until<F>(&mut self, target_ms: i64, mut fire: F)
    where
        F: FnMut(TimerEvent, i64) -> Vec<Scheduled>,
    {
        while let Some(event) = self.pop_due(target_ms) {
            let follow_up = fire(event, self.now_ms);
            self.schedule_all(follow_up);
        }
        self.now_ms = self.now_ms.max(target_ms);
    }

    pub fn advance_by<F>(&mut self, ms: u64, fire: F)
    where
        F: FnMut(TimerEvent, i64) -> Vec<Scheduled>,
    {
        let step = i64::try_from(ms).unwrap_or(i64::MAX);
        self.run_until(self.now_ms.saturating_add(step), fire);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Whether an event equal to `event` is pending.
    pub fn contains(&self, event: TimerEvent) -> bool {
        self.pending.values().any(|e| *e == event)
    }
}

impl Clock for TimerQueue {
    fn now_ms(&self) -> i64 {
        self.now_ms
    }
}

/// Longest delay `setTimeout` honours; larger values wrap and fire at once.
#[cfg(any(test, feature = "csr"))]
const MAX_BROWSER_DELAY_MS: u32 = 0x7fff_ffff;

/// Clamp a delay to what `setTimeout` accepts. Receivers re-check state
/// when a clamped timer fires early.
#[cfg(any(test, feature = "csr"))]
fn browser_delay_ms(delay_ms: u64) -> u32 {
    u32::try_from(delay_ms).map_or(MAX_BROWSER_DELAY_MS, |d| d.min(MAX_BROWSER_DELAY_MS))
}

/// Deliver `timer.event` to `fire` after `timer.delay_ms` using a browser
/// timeout.
#[cfg(feature = "csr")]
pub fn schedule_in_browser<F>(timer: Scheduled, fire: F)
where
    F: FnOnce(TimerEvent) + 'static,
{
    let delay = browser_delay_ms(timer.delay_ms);
    let event = timer.event;
    gloo_timers::callback::Timeout::new(delay, move || fire(event)).forget();
}
