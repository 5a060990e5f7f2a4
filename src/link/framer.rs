//! Streaming newline framer.
//!
//! Accumulates incoming serial bytes into a fixed-capacity buffer and
//! yields complete lines. Handles partial reads gracefully — a single
//! transport poll may deliver part of a line, or several lines
//! concatenated.
//!
//! A line longer than the buffer is discarded in full: the framer drops
//! bytes until the next terminator, then resynchronises. One bad line
//! never poisons the ones after it.

use log::warn;

/// Longest accepted line, terminator excluded. Generous for the
/// `id,depth,flag` record format (worst case ≈ 20 bytes).
pub const MAX_LINE_LEN: usize = 64;

/// Streaming line assembler over a byte transport.
pub struct LineFramer {
    buf: heapless::Vec<u8, MAX_LINE_LEN>,
    /// Set while skipping the remainder of an overlong line.
    discarding: bool,
    overruns: u32,
    invalid_utf8: u32,
}

impl LineFramer {
    pub fn new() -> Self {
        Self {
            buf: heapless::Vec::new(),
            discarding: false,
            overruns: 0,
            invalid_utf8: 0,
        }
    }

    /// Feed a chunk of bytes; `on_line` is invoked once per completed
    /// line, terminator and trailing CR stripped.
    pub fn feed(&mut self, bytes: &[u8], mut on_line: impl FnMut(&str)) {
        for &byte in bytes {
            match byte {
                b'\n' => {
                    if self.discarding {
                        // Overlong line fully skipped — back in sync.
                        self.discarding = false;
                    } else {
                        let payload = strip_cr(&self.buf);
                        match core::str::from_utf8(payload) {
                            Ok(line) => on_line(line),
                            Err(_) => {
                                self.invalid_utf8 += 1;
                                warn!("framer: dropped non-UTF-8 line ({} bytes)", payload.len());
                            }
                        }
                    }
                    self.buf.clear();
                }
                _ => {
                    if self.discarding {
                        continue;
                    }
                    if self.buf.push(byte).is_err() {
                        self.overruns += 1;
                        self.discarding = true;
                        self.buf.clear();
                        warn!("framer: line exceeded {} bytes, discarding", MAX_LINE_LEN);
                    }
                }
            }
        }
    }

    /// Drop any partially accumulated line (e.g. after a transport
    /// reconnect).
    pub fn reset(&mut self) {
        self.buf.clear();
        self.discarding = false;
    }

    /// Lines discarded because they exceeded [`MAX_LINE_LEN`].
    pub fn overrun_count(&self) -> u32 {
        self.overruns
    }

    /// Lines discarded because they were not valid UTF-8.
    pub fn invalid_utf8_count(&self) -> u32 {
        self.invalid_utf8
    }
}

impl Default for LineFramer {
    fn default() -> Self {
        Self::new()
    }
}

fn strip_cr(buf: &[u8]) -> &[u8] {
    match buf.split_last() {
        Some((&b'\r', rest)) => rest,
        _ => buf,
    }
}
