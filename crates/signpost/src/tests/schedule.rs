use crate::{Scheduler, TimerKind, Toasts};

#[test]
fn pop_due_fires_in_due_order_then_scheduling_order() {
    let mut toasts = Toasts::new();
    let a = toasts.push("a");
    let b = toasts.push("b");

    let mut scheduler = Scheduler::new();
    scheduler.schedule(TimerKind::ToastDismiss(a), 300);
    scheduler.schedule(TimerKind::ToastDismiss(b), 100);
    scheduler.schedule(TimerKind::ToastRemove(a), 100);

    let fired = std::iter::from_fn(|| scheduler.pop_due(1_000))
        .map(|timer| (timer.due_ms, timer.kind))
        .collect::<Vec<_>>();
    assert_eq!(
        fired,
        vec![
            (100, TimerKind::ToastDismiss(b)),
            (100, TimerKind::ToastRemove(a)),
            (300, TimerKind::ToastDismiss(a)),
        ]
    );
    assert_eq!(scheduler.now_ms(), 300);
}

#[test]
fn pop_due_leaves_future_timers_alone() {
    let mut scheduler = Scheduler::new();
    scheduler.schedule(TimerKind::PillarReset, 3_000);
    assert_eq!(scheduler.pop_due(2_999), None);
    assert_eq!(scheduler.now_ms(), 0);
    assert_eq!(scheduler.pending().len(), 1);
}

#[test]
fn pillar_reset_is_last_write_wins() {
    let mut scheduler = Scheduler::new();
    scheduler.schedule(TimerKind::PillarReset, 3_000);
    scheduler.advance_to(2_000);
    let second = scheduler.schedule(TimerKind::PillarReset, 3_000);

    let pending = scheduler.pending();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].id, second);
    assert_eq!(pending[0].due_ms, 5_000);
}

#[test]
fn toast_timers_do_not_replace_each_other_or_the_pillar_reset() {
    let mut toasts = Toasts::new();
    let id = toasts.push("hello");

    let mut scheduler = Scheduler::new();
    scheduler.schedule(TimerKind::PillarReset, 3_000);
    scheduler.schedule(TimerKind::ToastDismiss(id), 3_000);
    scheduler.schedule(TimerKind::ToastDismiss(id), 3_000);
    assert_eq!(scheduler.pending().len(), 3);
}

#[test]
fn clock_never_runs_backwards() {
    let mut scheduler = Scheduler::new();
    scheduler.advance_to(50);
    scheduler.advance_to(20);
    assert_eq!(scheduler.now_ms(), 50);
}
