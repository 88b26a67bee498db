//! Deterministic one-shot timers on a virtual clock.
//!
//! Nothing fires on its own: the host advances time and drains due timers with
//! [`Scheduler::pop_due`]. Ties fire in scheduling order.

use crate::toast::ToastId;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TimerId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "toast", rename_all = "snake_case")]
pub enum TimerKind {
    /// Returns every pillar to its resting style.
    PillarReset,
    /// Starts a toast's exit animation.
    ToastDismiss(ToastId),
    /// Drops a toast from the page.
    ToastRemove(ToastId),
}

impl TimerKind {
    /// Keyed timers replace the pending timer of the same kind instead of stacking.
    fn is_keyed(self) -> bool {
        matches!(self, TimerKind::PillarReset)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Timer {
    pub id: TimerId,
    pub due_ms: u64,
    pub kind: TimerKind,
}

#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    now_ms: u64,
    next_id: u64,
    timers: Vec<Timer>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn schedule(&mut self, kind: TimerKind, delay_ms: u64) -> TimerId {
        if kind.is_keyed() {
            let before = self.timers.len();
            self.timers.retain(|timer| timer.kind != kind);
            if self.timers.len() != before {
                tracing::debug!(?kind, "replaced pending timer");
            }
        }
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.timers.push(Timer {
            id,
            due_ms: self.now_ms.saturating_add(delay_ms),
            kind,
        });
        id
    }

    /// Pending timers in firing order.
    pub fn pending(&self) -> Vec<Timer> {
        let mut timers = self.timers.clone();
        timers.sort_by_key(|timer| (timer.due_ms, timer.id));
        timers
    }

    /// Removes and returns the next timer due at or before `until_ms`, moving the clock to its
    /// due time. Timers scheduled while handling it are relative to that time.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<Timer> {
        let (index, _) = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due_ms <= until_ms)
            .min_by_key(|(_, timer)| (timer.due_ms, timer.id))?;
        let timer = self.timers.remove(index);
        self.now_ms = self.now_ms.max(timer.due_ms);
        Some(timer)
    }

    /// Moves the clock forward without firing anything. The clock never runs backwards.
    pub fn advance_to(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }
}
