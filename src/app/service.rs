//! Application service — the hexagonal core.
//!
//! [`AppService`] owns the channel bank and ingestion statistics and
//! exposes a clean, hardware-agnostic API. All I/O flows through port
//! traits injected at call sites, making the entire service testable
//! with mock adapters.
//!
//! ```text
//!  serial line ──▶ ┌────────────────────────┐
//!                  │       AppService       │──▶ EventSink
//!  ActuatorPort ◀──│  ingest · channels     │
//!                  └────────────────────────┘
//! ```
//!
//! Ingestion and the output tick are deliberately decoupled: records
//! mutate channel state whenever they arrive, while [`AppService::tick`]
//! samples that state at its own fixed rate and pushes every channel's
//! duty to the actuator port.

use log::{info, warn};

use crate::config::{HapticConfig, NUM_MOTORS};
use crate::haptic::bank::ChannelBank;
use crate::haptic::{ContactSample, HapticChannel};
use crate::ingest;

use super::events::{AppEvent, TelemetryData};
use super::ports::{ActuatorPort, EventSink};

// ───────────────────────────────────────────────────────────────
// Ingestion counters
// ───────────────────────────────────────────────────────────────

/// Running totals of record acceptance and rejection.
#[derive(Debug, Clone, Copy, Default)]
pub struct IngestStats {
    pub accepted: u32,
    pub rejected: u32,
}

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
pub struct AppService {
    config: HapticConfig,
    bank: ChannelBank,
    stats: IngestStats,
    tick_count: u64,
}

impl AppService {
    /// Construct the service from configuration. The channel bank is
    /// created here and owned for the process lifetime.
    pub fn new(config: HapticConfig) -> Self {
        Self {
            config,
            bank: ChannelBank::new(),
            stats: IngestStats::default(),
            tick_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Announce readiness. The host-side tools wait for this banner
    /// before sending contact records.
    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started);
        info!("Tact haptic controller ready ({NUM_MOTORS} motors)");
    }

    // ── Ingestion path ────────────────────────────────────────

    /// Process one complete line from the contact-event link.
    ///
    /// Malformed records are dropped with a diagnostic; they never stop
    /// ingestion of subsequent lines. Blank lines are ignored outright
    /// (common when a host opens the port and sends a bare newline).
    pub fn handle_line(&mut self, line: &str, now_us: u64, sink: &mut impl EventSink) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }

        match ingest::split_record(line).and_then(|raw| ingest::accept(&self.config, &raw)) {
            Ok(sample) => self.apply_sample(&sample, now_us, sink),
            Err(reason) => {
                self.stats.rejected += 1;
                warn!("ingest: dropped '{line}': {reason}");
                sink.emit(&AppEvent::SampleRejected(reason));
            }
        }
    }

    fn apply_sample(&mut self, sample: &ContactSample, now_us: u64, sink: &mut impl EventSink) {
        // Ingestion guarantees the id is in range; stay panic-free anyway.
        let Some(channel) = self.bank.channel_mut(sample.actuator_id) else {
            return;
        };

        self.stats.accepted += 1;
        let was_in_contact = channel.in_contact();
        channel.update(&self.config, sample, now_us);

        match (was_in_contact, channel.in_contact()) {
            (false, true) => sink.emit(&AppEvent::ContactStarted {
                motor: sample.actuator_id,
                depth: channel.depth(),
            }),
            (true, false) => sink.emit(&AppEvent::ContactEnded {
                motor: sample.actuator_id,
            }),
            _ => {}
        }
    }

    // ── Output path ───────────────────────────────────────────

    /// Fixed-rate output pass: advance onset expiry on every channel and
    /// forward each channel's duty to the actuator port. Duties are
    /// re-emitted every tick for simplicity — the port receives absolute
    /// levels, so repeats are harmless.
    pub fn tick(&mut self, now_us: u64, hw: &mut impl ActuatorPort) {
        self.tick_count += 1;
        for channel in self.bank.channels_mut() {
            let duty = channel.tick(&self.config, now_us);
            hw.set_motor(channel.id(), duty);
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Build a telemetry snapshot of the current renderer state.
    pub fn build_telemetry(&self) -> TelemetryData {
        let mut duties = [0u8; NUM_MOTORS];
        for (slot, channel) in duties.iter_mut().zip(self.bank.channels()) {
            *slot = channel.duty();
        }
        TelemetryData {
            tick_count: self.tick_count,
            accepted: self.stats.accepted,
            rejected: self.stats.rejected,
            duties,
        }
    }

    /// Read-only view of one channel (diagnostics and tests).
    pub fn channel(&self, id: u8) -> Option<&HapticChannel> {
        self.bank.channel(id)
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn stats(&self) -> IngestStats {
        self.stats
    }

    pub fn config(&self) -> &HapticConfig {
        &self.config
    }
}
