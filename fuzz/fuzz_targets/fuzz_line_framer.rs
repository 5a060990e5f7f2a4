//! Fuzz target: `LineFramer::feed` + record validation.
//!
//! Drives arbitrary byte sequences into the streaming line framer and
//! the full split/accept pipeline, asserting that nothing panics, every
//! yielded line honours the capacity bound, and accepted samples keep
//! their invariants.
//!
//! cargo fuzz run fuzz_line_framer

#![no_main]

use libfuzzer_sys::fuzz_target;
use tact::config::{HapticConfig, NUM_MOTORS};
use tact::ingest;
use tact::link::LineFramer;
use tact::link::framer::MAX_LINE_LEN;

fuzz_target!(|data: &[u8]| {
    let cfg = HapticConfig::default();
    let mut framer = LineFramer::new();

    framer.feed(data, |line| {
        assert!(line.len() <= MAX_LINE_LEN, "line exceeds framer capacity");
        assert!(!line.contains('\n'), "terminator must be stripped");

        // Whatever the line contains, validation must not panic and any
        // accepted sample must be well-formed.
        if let Ok(sample) =
            ingest::split_record(line).and_then(|raw| ingest::accept(&cfg, &raw))
        {
            assert!((sample.actuator_id as usize) < NUM_MOTORS);
            assert!((0.0..=1.0).contains(&sample.depth));
        }
    });

    // After a reset the framer must accept bytes cleanly again.
    framer.reset();
    framer.feed(data, |_| {});
});
