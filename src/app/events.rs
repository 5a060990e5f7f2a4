//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port. Adapters on the other
//! side decide what to do with them — log to serial, record in a test
//! harness, etc.

use serde::Serialize;

use crate::config::NUM_MOTORS;
use crate::error::RejectReason;

/// Structured events emitted by the application core.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The renderer has started and is listening for contact records.
    Started,

    /// A motor transitioned from no contact into contact.
    ContactStarted { motor: u8, depth: f32 },

    /// A motor's contact was released.
    ContactEnded { motor: u8 },

    /// An incoming record was dropped (non-fatal; ingestion continues).
    SampleRejected(RejectReason),

    /// Periodic snapshot of the renderer state.
    Telemetry(TelemetryData),
}

/// A point-in-time snapshot suitable for logging or transmission.
#[derive(Debug, Clone, Serialize)]
pub struct TelemetryData {
    /// Output ticks executed since startup.
    pub tick_count: u64,
    /// Records accepted into channel state.
    pub accepted: u32,
    /// Records dropped by validation.
    pub rejected: u32,
    /// Current duty per motor channel.
    pub duties: [u8; NUM_MOTORS],
}
