//! Fixed-cadence output tick source.
//!
//! The renderer must update motor outputs at a steady 25 Hz no matter
//! how irregularly contact records arrive, so the main loop polls this
//! scheduler with the monotonic clock instead of sleeping for whole
//! periods. Nothing here blocks.
//!
//! ```text
//!   loop:  drain serial bytes ──▶ channel updates   (event-driven)
//!          poll(now)?        ──▶ tick every channel (fixed-rate)
//! ```
//!
//! If the loop stalls past a whole period (e.g. a burst of logging), the
//! scheduler fires one tick and realigns to `now + period` rather than
//! replaying every missed tick — a burst of catch-up ticks has no value
//! when each tick re-emits absolute duty levels.

use log::warn;

/// Polled fixed-rate tick scheduler on a microsecond monotonic clock.
pub struct TickScheduler {
    period_us: u64,
    next_due_us: u64,
    ticks_fired: u64,
    slips: u32,
}

impl TickScheduler {
    /// `now_us` anchors the first tick one period from now.
    pub fn new(period_us: u64, now_us: u64) -> Self {
        debug_assert!(period_us > 0);
        Self {
            period_us,
            next_due_us: now_us + period_us,
            ticks_fired: 0,
            slips: 0,
        }
    }

    /// Returns `true` when a tick is due. The schedule advances by whole
    /// periods, so jitter in poll timing does not accumulate drift.
    pub fn poll(&mut self, now_us: u64) -> bool {
        if now_us < self.next_due_us {
            return false;
        }

        self.ticks_fired += 1;
        self.next_due_us += self.period_us;

        if now_us >= self.next_due_us {
            // Fell a full period (or more) behind — realign, don't burst.
            let missed = (now_us - self.next_due_us) / self.period_us + 1;
            self.slips += 1;
            warn!("scheduler: slipped {missed} tick(s), realigning");
            self.next_due_us = now_us + self.period_us;
        }

        true
    }

    pub fn period_us(&self) -> u64 {
        self.period_us
    }

    pub fn ticks_fired(&self) -> u64 {
        self.ticks_fired
    }

    /// Times the schedule had to realign after a stall.
    pub fn slip_count(&self) -> u32 {
        self.slips
    }
}
