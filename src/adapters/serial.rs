//! UART transport adapter for the contact-event link.
//!
//! Wraps the ESP-IDF UART driver behind [`TransportPort`] with strictly
//! non-blocking reads: a zero receive timeout returns whatever bytes the
//! driver has buffered, or nothing. The control loop must never stall on
//! the link.
//!
//! On host targets the adapter is an inert stub — tests drive the core
//! with their own in-memory transports instead.

use crate::app::ports::TransportPort;

#[cfg(target_os = "espidf")]
pub struct UartTransport {
    uart: esp_idf_hal::uart::UartDriver<'static>,
}

#[cfg(target_os = "espidf")]
impl UartTransport {
    /// Takes ownership of a configured UART driver (built in `main()`
    /// where peripheral ownership is established).
    pub fn new(uart: esp_idf_hal::uart::UartDriver<'static>) -> Self {
        Self { uart }
    }
}

#[cfg(target_os = "espidf")]
impl TransportPort for UartTransport {
    fn poll(&mut self, buf: &mut [u8]) -> usize {
        // NON_BLOCK: zero timeout drains the driver's RX buffer only.
        self.uart.read(buf, 0).unwrap_or(0)
    }
}

// ── Host stub ─────────────────────────────────────────────────

#[cfg(not(target_os = "espidf"))]
pub struct UartTransport;

#[cfg(not(target_os = "espidf"))]
impl UartTransport {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(not(target_os = "espidf"))]
impl Default for UartTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_os = "espidf"))]
impl TransportPort for UartTransport {
    fn poll(&mut self, _buf: &mut [u8]) -> usize {
        0
    }
}
