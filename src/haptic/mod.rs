//! Per-actuator contact state machine and amplitude shaping.
//!
//! Each vibration motor is modelled as one [`HapticChannel`] driving a
//! three-phase contact lifecycle:
//!
//! ```text
//!  IDLE ──[first contact, depth > 0]──▶ ONSET PULSE (fixed duty, 75 ms)
//!    ▲                                        │
//!    │                                  [pulse elapsed]
//!    │                                        ▼
//!    └────────[depth drops to 0]────── SUSTAINED (depth-proportional duty)
//! ```
//!
//! The phase is a tagged variant rather than loose booleans, so the
//! invalid flag combinations (pulse active without contact, contact with
//! zero depth) cannot be represented at all.
//!
//! Two entry points drive a channel:
//!
//! - [`HapticChannel::update`] — a validated sample arrived for this motor.
//! - [`HapticChannel::tick`] — the fixed-rate output tick; only advances
//!   the time-based onset expiry and reports the current duty.
//!
//! One deliberate compatibility quirk: when the onset pulse expires, the
//! duty keeps the onset amplitude until the **next sample** recomputes it.
//! Expiry only unlocks sustained processing; it never invents a new
//! amplitude on its own.

pub mod bank;

use crate::config::HapticConfig;

// ---------------------------------------------------------------------------
// Contact sample
// ---------------------------------------------------------------------------

/// One validated contact event, ready to be consumed into channel state.
///
/// `depth` is post-threshold: values below the contact threshold have
/// already been clamped to `0.0` (and `first_contact` cleared) by
/// ingestion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactSample {
    /// Target motor, `0..NUM_MOTORS`. Guaranteed in range by ingestion.
    pub actuator_id: u8,
    /// Normalised penetration depth in `[0, 1]`.
    pub depth: f32,
    /// Set on the transition into contact; triggers the onset pulse.
    pub first_contact: bool,
}

// ---------------------------------------------------------------------------
// Contact phase
// ---------------------------------------------------------------------------

/// Lifecycle phase of one actuator's contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactPhase {
    /// No contact; motor off.
    Idle,
    /// Fixed-duration high-amplitude burst signalling contact onset.
    OnsetPulse {
        /// Monotonic timestamp (µs) at which the pulse began.
        started_at_us: u64,
    },
    /// Continuous depth-proportional vibration while contact persists.
    Sustained,
}

// ---------------------------------------------------------------------------
// Haptic channel
// ---------------------------------------------------------------------------

/// Contact state and output duty for a single vibration motor.
///
/// Channels are created once at startup and live for the whole process;
/// they are mutated on every accepted sample and every output tick.
#[derive(Debug, Clone)]
pub struct HapticChannel {
    id: u8,
    phase: ContactPhase,
    /// Last accepted post-threshold depth, `[0, 1]`.
    depth: f32,
    /// Current output duty on the 8-bit PWM scale.
    duty: u8,
}

impl HapticChannel {
    pub fn new(id: u8) -> Self {
        Self {
            id,
            phase: ContactPhase::Idle,
            depth: 0.0,
            duty: 0,
        }
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn phase(&self) -> ContactPhase {
        self.phase
    }

    /// Current output duty (0–255).
    pub fn duty(&self) -> u8 {
        self.duty
    }

    pub fn depth(&self) -> f32 {
        self.depth
    }

    /// Whether the channel is in any contact phase.
    pub fn in_contact(&self) -> bool {
        self.phase != ContactPhase::Idle
    }

    /// Consume a validated sample for this motor.
    ///
    /// Onset expiry is applied first, so a sample landing after the pulse
    /// has elapsed (but before the next tick noticed) is processed as
    /// sustained contact.
    pub fn update(&mut self, cfg: &HapticConfig, sample: &ContactSample, now_us: u64) {
        debug_assert_eq!(sample.actuator_id, self.id);
        self.expire_onset(cfg, now_us);

        if sample.depth <= 0.0 {
            // Release ends contact unconditionally, first-contact flag or not.
            self.release();
            return;
        }

        self.depth = sample.depth;

        match self.phase {
            ContactPhase::Idle if sample.first_contact => {
                self.phase = ContactPhase::OnsetPulse {
                    started_at_us: now_us,
                };
                self.duty = cfg.onset_duty;
            }
            ContactPhase::OnsetPulse { .. } => {
                // Depth tracked above; amplitude holds until the pulse elapses.
            }
            // Sustained contact, or contact resuming without a first-contact
            // marker (the upstream may re-enter mid-gesture).
            ContactPhase::Idle | ContactPhase::Sustained => {
                self.phase = ContactPhase::Sustained;
                self.duty = sustained_duty(cfg, self.depth);
            }
        }
    }

    /// Fixed-rate output tick: advance the time-based onset expiry and
    /// report the duty to drive this interval.
    pub fn tick(&mut self, cfg: &HapticConfig, now_us: u64) -> u8 {
        self.expire_onset(cfg, now_us);
        self.duty
    }

    fn expire_onset(&mut self, cfg: &HapticConfig, now_us: u64) {
        if let ContactPhase::OnsetPulse { started_at_us } = self.phase {
            if now_us.saturating_sub(started_at_us) >= cfg.onset_pulse_us() {
                // Duty intentionally untouched: the onset amplitude holds
                // until the next sample recomputes the sustained level.
                self.phase = ContactPhase::Sustained;
            }
        }
    }

    fn release(&mut self) {
        self.phase = ContactPhase::Idle;
        self.depth = 0.0;
        self.duty = 0;
    }
}

// ---------------------------------------------------------------------------
// Amplitude shaping
// ---------------------------------------------------------------------------

/// Map a penetration depth onto the sustained duty band.
///
/// Linear interpolation between the configured minimum and maximum, with
/// the result clamped back into the band to absorb float overshoot.
pub fn sustained_duty(cfg: &HapticConfig, depth: f32) -> u8 {
    let depth = depth.clamp(0.0, 1.0);
    let span = f32::from(cfg.sustained_max_duty - cfg.sustained_min_duty);
    let duty = f32::from(cfg.sustained_min_duty) + span * depth;
    (duty as u8).clamp(cfg.sustained_min_duty, cfg.sustained_max_duty)
}

// ═══════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════
