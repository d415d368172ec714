use super::*;

// =============================================================
// Scheduling order
// =============================================================

#[test]
fn pop_due_respects_due_time() {
    let mut q = TimerQueue::new(0);
    q.schedule(Scheduled::new(5_000, TimerEvent::ClearResult { attempt: 1 }));
    q.schedule(Scheduled::new(1_000, TimerEvent::Tick));

    assert_eq!(q.pop_due(999), None);
    assert_eq!(q.pop_due(10_000), Some(TimerEvent::Tick));
    assert_eq!(q.now_ms(), 1_000);
    assert_eq!(q.pop_due(10_000), Some(TimerEvent::ClearResult { attempt: 1 }));
    assert_eq!(q.now_ms(), 5_000);
    assert!(q.is_empty());
}

#[test]
fn same_instant_fires_in_schedule_order() {
    let mut q = TimerQueue::new(100);
    q.schedule(Scheduled::new(60_000, TimerEvent::ReleaseLock));
    q.schedule(Scheduled::new(60_000, TimerEvent::Tick));

    assert_eq!(q.pop_due(60_100), Some(TimerEvent::ReleaseLock));
    assert_eq!(q.pop_due(60_100), Some(TimerEvent::Tick));
}

#[test]
fn zero_delay_is_due_immediately() {
    let mut q = TimerQueue::new(7);
    q.schedule(Scheduled::new(0, TimerEvent::ReleaseLock));
    assert_eq!(q.pop_due(7), Some(TimerEvent::ReleaseLock));
}

// =============================================================
// run_until / advance_by
// =============================================================

#[test]
fn run_until_moves_clock_to_target() {
    let mut q = TimerQueue::new(0);
    q.run_until(2_500, |_, _| Vec::new());
    assert_eq!(q.now_ms(), 2_500);
}

#[test]
fn run_until_passes_due_time_to_handler() {
    let mut q = TimerQueue::new(1_000);
    q.schedule(Scheduled::new(500, TimerEvent::Tick));
    let mut seen = Vec::new();
    q.run_until(10_000, |event, now| {
        seen.push((event, now));
        Vec::new()
    });
    assert_eq!(seen, vec![(TimerEvent::Tick, 1_500)]);
}

#[test]
fn follow_up_timers_fire_within_window() {
    let mut q = TimerQueue::new(0);
    q.schedule(Scheduled::new(1_000, TimerEvent::Tick));
    let mut ticks = 0;
    q.advance_by(3_500, |event, _| {
        ticks += 1;
        vec![Scheduled::new(1_000, event)]
    });
    assert_eq!(ticks, 3);
    assert_eq!(q.len(), 1);
    assert!(q.contains(TimerEvent::Tick));
    assert_eq!(q.now_ms(), 3_500);
}

#[test]
fn clock_never_moves_backwards() {
    let mut q = TimerQueue::new(5_000);
    q.run_until(1_000, |_, _| Vec::new());
    assert_eq!(q.now_ms(), 5_000);
}

// =============================================================
// Browser delay clamping
// =============================================================

#[test]
fn browser_delay_passes_small_values_through() {
    assert_eq!(browser_delay_ms(0), 0);
    assert_eq!(browser_delay_ms(60_000), 60_000);
}

#[test]
fn browser_delay_clamps_to_signed_32_bit_range() {
    let thirty_days = 30 * 24 * 60 * 60 * 1000;
    assert_eq!(browser_delay_ms(thirty_days), 0x7fff_ffff);
    assert_eq!(browser_delay_ms(u64::from(u32::MAX)), 0x7fff_ffff);
    assert_eq!(browser_delay_ms(u64::MAX), 0x7fff_ffff);
    assert!(i32::try_from(browser_delay_ms(thirty_days)).is_ok());
}
