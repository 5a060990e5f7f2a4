//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the logger (which goes to UART / USB-CDC in production). Telemetry is
//! rendered as a single JSON line so host tooling can scrape it.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started => {
                info!("START | renderer listening for contact records");
            }
            AppEvent::ContactStarted { motor, depth } => {
                info!("CONTACT | motor={motor} depth={depth:.2}");
            }
            AppEvent::ContactEnded { motor } => {
                info!("RELEASE | motor={motor}");
            }
            AppEvent::SampleRejected(reason) => {
                warn!("REJECT | {reason}");
            }
            AppEvent::Telemetry(t) => {
                match serde_json::to_string(t) {
                    Ok(json) => info!("TELEM | {json}"),
                    Err(e) => warn!("TELEM | serialisation failed: {e}"),
                }
            }
        }
    }
}
