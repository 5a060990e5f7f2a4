//! Mock adapters for integration tests.
//!
//! Records every port call so tests can assert on the full command
//! history without touching real GPIO/PWM registers.

use std::collections::VecDeque;

use tact::app::events::AppEvent;
use tact::app::ports::{ActuatorPort, EventSink, TransportPort};
use tact::config::NUM_MOTORS;

// ── MockPwm ───────────────────────────────────────────────────

/// Recording [`ActuatorPort`]: keeps the whole call history plus the
/// latest duty per motor.
pub struct MockPwm {
    pub calls: Vec<(u8, u8)>, // (motor, duty)
    pub duties: [u8; NUM_MOTORS],
}

#[allow(dead_code)]
impl MockPwm {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            duties: [0; NUM_MOTORS],
        }
    }

    /// Latest duty applied to `motor`.
    pub fn duty(&self, motor: u8) -> u8 {
        self.duties[usize::from(motor)]
    }

    /// Every duty value ever written to `motor`, in order.
    pub fn history(&self, motor: u8) -> Vec<u8> {
        self.calls
            .iter()
            .filter(|(m, _)| *m == motor)
            .map(|(_, d)| *d)
            .collect()
    }
}

impl Default for MockPwm {
    fn default() -> Self {
        Self::new()
    }
}

impl ActuatorPort for MockPwm {
    fn set_motor(&mut self, id: u8, duty: u8) {
        self.calls.push((id, duty));
        if let Some(slot) = self.duties.get_mut(usize::from(id)) {
            *slot = duty;
        }
    }

    fn all_off(&mut self) {
        for (id, slot) in self.duties.iter_mut().enumerate() {
            self.calls.push((id as u8, 0));
            *slot = 0;
        }
    }
}

// ── RecordingSink ─────────────────────────────────────────────

/// [`EventSink`] that stores every emitted event.
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn contact_starts(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, AppEvent::ContactStarted { .. }))
            .count()
    }

    pub fn rejections(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, AppEvent::SampleRejected(_)))
            .count()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}

// ── ScriptTransport ───────────────────────────────────────────

/// [`TransportPort`] fed from a queue of canned byte chunks, one chunk
/// per poll — mimics the bursty arrival of serial data.
pub struct ScriptTransport {
    chunks: VecDeque<Vec<u8>>,
}

#[allow(dead_code)]
impl ScriptTransport {
    pub fn new() -> Self {
        Self {
            chunks: VecDeque::new(),
        }
    }

    pub fn push_line(&mut self, line: &str) {
        let mut bytes = line.as_bytes().to_vec();
        bytes.push(b'\n');
        self.chunks.push_back(bytes);
    }

    pub fn push_raw(&mut self, bytes: &[u8]) {
        self.chunks.push_back(bytes.to_vec());
    }
}

impl Default for ScriptTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl TransportPort for ScriptTransport {
    fn poll(&mut self, buf: &mut [u8]) -> usize {
        let Some(chunk) = self.chunks.front_mut() else {
            return 0;
        };
        let n = chunk.len().min(buf.len());
        buf[..n].copy_from_slice(&chunk[..n]);
        if n == chunk.len() {
            self.chunks.pop_front();
        } else {
            chunk.drain(..n);
        }
        n
    }
}
