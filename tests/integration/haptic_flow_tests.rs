//! Integration tests for the line → ingestion → channel → PWM pipeline.
//!
//! These run on the host (x86_64) and verify that the full rendering
//! chain from an incoming serial line down to a motor duty write works
//! correctly without any real hardware.

use crate::mock_hw::{MockPwm, RecordingSink, ScriptTransport};

use tact::app::events::AppEvent;
use tact::app::ports::TransportPort;
use tact::app::service::AppService;
use tact::config::HapticConfig;
use tact::link::LineFramer;
use tact::scheduler::TickScheduler;

const MS: u64 = 1_000; // µs per ms
const TICK: u64 = 40 * MS;

fn make_app() -> (AppService, MockPwm, RecordingSink) {
    let mut app = AppService::new(HapticConfig::default());
    let hw = MockPwm::new();
    let mut sink = RecordingSink::new();
    app.start(&mut sink);
    (app, hw, sink)
}

// ── Onset pulse end-to-end ────────────────────────────────────

#[test]
fn first_contact_renders_onset_then_sustained() {
    let (mut app, mut hw, mut sink) = make_app();

    app.handle_line("0,0.58,1", 0, &mut sink);
    app.tick(TICK, &mut hw);
    assert_eq!(hw.duty(0), 230, "onset amplitude on the first tick");

    // Keep sending sustained samples inside the 75 ms window; the onset
    // amplitude must hold regardless of arrival rate.
    app.handle_line("0,0.58,0", 50 * MS, &mut sink);
    app.tick(2 * TICK, &mut hw); // t = 80 ms, pulse expired
    assert_eq!(hw.duty(0), 230, "expiry alone must not change the level");

    // The next sample after expiry switches to depth-proportional output.
    app.handle_line("0,0.58,0", 85 * MS, &mut sink);
    app.tick(3 * TICK, &mut hw);
    assert_eq!(hw.duty(0), 125, "51 + 0.58 * 128 ≈ 49% of full scale");
}

#[test]
fn reference_sequence_renders_expected_duties() {
    // The canonical three-line exchange: rest, poke, sustain, release.
    let (mut app, mut hw, mut sink) = make_app();

    app.handle_line("0,0.0,0", 0, &mut sink);
    app.tick(TICK, &mut hw);
    assert_eq!(hw.duty(0), 0);

    app.handle_line("0,0.25,1", 41 * MS, &mut sink);
    app.tick(2 * TICK, &mut hw);
    assert_eq!(hw.duty(0), 230);

    // 75 ms later the pulse is done; the follow-up sample at the same
    // depth lands on the sustained band.
    app.handle_line("0,0.25,0", 120 * MS, &mut sink);
    app.tick(4 * TICK, &mut hw);
    assert_eq!(hw.duty(0), 83, "51 + 0.25 * 128");

    app.handle_line("0,0.0,0", 160 * MS, &mut sink);
    app.tick(5 * TICK, &mut hw);
    assert_eq!(hw.duty(0), 0);
}

#[test]
fn release_below_threshold_zeroes_output_regardless_of_flag() {
    let (mut app, mut hw, mut sink) = make_app();

    app.handle_line("2,0.8,1", 0, &mut sink);
    app.tick(TICK, &mut hw);
    assert!(hw.duty(2) > 0);

    // Below-threshold depth with a bogus first-contact flag still releases.
    app.handle_line("2,0.05,1", 50 * MS, &mut sink);
    app.tick(2 * TICK, &mut hw);
    assert_eq!(hw.duty(2), 0);
}

// ── Multi-channel independence ────────────────────────────────

#[test]
fn channels_render_independently() {
    let (mut app, mut hw, mut sink) = make_app();

    app.handle_line("0,0.5,1", 0, &mut sink);
    app.handle_line("3,0.5,0", 0, &mut sink);
    app.tick(TICK, &mut hw);

    assert_eq!(hw.duty(0), 230, "motor 0 in its onset pulse");
    assert_eq!(hw.duty(3), 115, "motor 3 sustained at the same depth");
    assert_eq!(hw.duty(1), 0);
    assert_eq!(hw.duty(2), 0);

    // Releasing one channel leaves the other untouched.
    app.handle_line("3,0.0,0", 50 * MS, &mut sink);
    app.tick(2 * TICK, &mut hw);
    assert_eq!(hw.duty(0), 230);
    assert_eq!(hw.duty(3), 0);
}

#[test]
fn every_tick_reemits_every_channel() {
    let (mut app, mut hw, mut sink) = make_app();

    app.handle_line("1,0.4,0", 0, &mut sink);
    for i in 1..=5u64 {
        app.tick(i * TICK, &mut hw);
    }

    // Five ticks → five writes per motor, all channels covered.
    for motor in 0..4u8 {
        assert_eq!(hw.history(motor).len(), 5);
    }
    // And no drift on the repeated value.
    assert!(hw.history(1).iter().all(|&d| d == hw.duty(1)));
}

// ── Contact lifecycle events ──────────────────────────────────

#[test]
fn contact_events_bracket_each_touch() {
    let (mut app, mut hw, mut sink) = make_app();

    app.handle_line("1,0.6,1", 0, &mut sink);
    app.tick(TICK, &mut hw);
    app.handle_line("1,0.6,0", 50 * MS, &mut sink);
    app.handle_line("1,0.0,0", 100 * MS, &mut sink);

    assert_eq!(sink.contact_starts(), 1);
    assert!(
        sink.events
            .iter()
            .any(|e| matches!(e, AppEvent::ContactEnded { motor: 1 })),
        "release must emit ContactEnded"
    );
}

// ── Bytes-in end-to-end (framer + scheduler in the loop) ──────

#[test]
fn byte_stream_drives_the_renderer() {
    let (mut app, mut hw, mut sink) = make_app();
    let mut framer = LineFramer::new();
    let mut transport = ScriptTransport::new();
    let mut sched = TickScheduler::new(TICK, 0);

    // Bursty arrival: a split line followed by two whole lines at once.
    transport.push_raw(b"0,0.");
    transport.push_raw(b"5,1\n");
    transport.push_raw(b"1,0.25,1\n2,0.9,0\n");

    let mut buf = [0u8; 32];
    let mut now = 0u64;
    for _ in 0..8 {
        now += 10 * MS;
        let n = transport.poll(&mut buf);
        if n > 0 {
            framer.feed(&buf[..n], |line| app.handle_line(line, now, &mut sink));
        }
        if sched.poll(now) {
            app.tick(now, &mut hw);
        }
    }

    assert_eq!(hw.duty(0), 230);
    assert_eq!(hw.duty(1), 230);
    assert_eq!(hw.duty(2), 166, "51 + 0.9 * 128 = 166.2");
}
