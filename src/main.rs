//! Tact Firmware — Main Entry Point
//!
//! Hexagonal architecture around a single cooperative control loop.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  UartTransport      HardwareAdapter     LogEventSink           │
//! │  (TransportPort)    (ActuatorPort)      (EventSink)            │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │              AppService (pure logic)                   │    │
//! │  │  line framing · ingestion · haptic channels            │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! │                                                                │
//! │  TickScheduler (25 Hz output cadence, poll-driven)             │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The loop alternates between draining pending serial bytes
//! (non-blocking) and firing the fixed-rate output tick. Contact
//! records may arrive with arbitrary jitter; motor updates stay on
//! the 25 Hz grid regardless.

#![deny(unused_must_use)]

use anyhow::Result;
use log::info;

use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::AnyIOPin;
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::uart::UartDriver;
use esp_idf_hal::uart::config::Config as UartConfig;
use esp_idf_hal::units::Hertz;

use tact::adapters::hardware::HardwareAdapter;
use tact::adapters::log_sink::LogEventSink;
use tact::adapters::serial::UartTransport;
use tact::adapters::time::MonotonicClock;
use tact::app::events::AppEvent;
use tact::app::ports::{EventSink, TransportPort};
use tact::app::service::AppService;
use tact::config::HapticConfig;
use tact::drivers::hw_init;
use tact::link::LineFramer;
use tact::pins;
use tact::scheduler::TickScheduler;

/// Telemetry snapshot every 250 ticks (10 s at 25 Hz).
const TELEMETRY_EVERY_TICKS: u64 = 250;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("Tact v{} — vibrotactile renderer", env!("CARGO_PKG_VERSION"));

    // ── 2. Initialise hardware peripherals ────────────────────
    if let Err(e) = hw_init::init_peripherals() {
        // Peripheral init failure is critical — log and halt.
        // In production this triggers the watchdog reset after timeout.
        log::error!("HAL init failed: {e} — halting");
        #[allow(clippy::empty_loop)]
        loop {}
    }

    // ── 3. Contact-event link (UART1) ─────────────────────────
    let peripherals = Peripherals::take()?;
    let uart_config = UartConfig::new().baudrate(Hertz(pins::UART_BAUD_RATE));
    // Pin choice matches pins::UART_TX_GPIO / pins::UART_RX_GPIO.
    let uart = UartDriver::new(
        peripherals.uart1,
        peripherals.pins.gpio17,
        peripherals.pins.gpio18,
        Option::<AnyIOPin>::None,
        Option::<AnyIOPin>::None,
        &uart_config,
    )?;
    let mut transport = UartTransport::new(uart);

    // ── 4. Construct adapters and the app service ─────────────
    let clock = MonotonicClock::new();
    let mut hw = HardwareAdapter::new();
    let mut sink = LogEventSink::new();
    let mut framer = LineFramer::new();

    let config = HapticConfig::default();
    let mut sched = TickScheduler::new(config.tick_interval_us(), clock.now_us());
    let mut app = AppService::new(config);
    app.start(&mut sink);

    // ── 5. Control loop ───────────────────────────────────────
    //
    // Single cooperative loop: drain whatever bytes the link has
    // buffered, then fire the output tick if it is due. Neither arm
    // blocks, so ingestion jitter never delays motor updates.
    let mut rx_buf = [0u8; 128];

    loop {
        let n = transport.poll(&mut rx_buf);
        if n > 0 {
            let now_us = clock.now_us();
            framer.feed(&rx_buf[..n], |line| app.handle_line(line, now_us, &mut sink));
        }

        let now_us = clock.now_us();
        if sched.poll(now_us) {
            app.tick(now_us, &mut hw);

            if app.tick_count() % TELEMETRY_EVERY_TICKS == 0 {
                sink.emit(&AppEvent::Telemetry(app.build_telemetry()));
            }
        }

        // Yield to the idle task between polls.
        FreeRtos::delay_ms(1);
    }
}
