//! Fixed bank of haptic channels, one per motor.
//!
//! Created once at startup and owned by the application core for the
//! whole process lifetime. Stack-allocated — no heap, no resizing.

use super::HapticChannel;
use crate::config::NUM_MOTORS;

/// The fixed array of per-motor channels.
#[derive(Debug, Clone)]
pub struct ChannelBank {
    channels: [HapticChannel; NUM_MOTORS],
}

impl ChannelBank {
    pub fn new() -> Self {
        Self {
            channels: core::array::from_fn(|i| HapticChannel::new(i as u8)),
        }
    }

    /// Borrow one channel by motor id. `None` for out-of-range ids —
    /// callers upstream of ingestion validation must handle it.
    pub fn channel(&self, id: u8) -> Option<&HapticChannel> {
        self.channels.get(usize::from(id))
    }

    pub fn channel_mut(&mut self, id: u8) -> Option<&mut HapticChannel> {
        self.channels.get_mut(usize::from(id))
    }

    pub fn channels(&self) -> &[HapticChannel] {
        &self.channels
    }

    pub fn channels_mut(&mut self) -> &mut [HapticChannel] {
        &mut self.channels
    }

    pub const fn len(&self) -> usize {
        NUM_MOTORS
    }

    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl Default for ChannelBank {
    fn default() -> Self {
        Self::new()
    }
}
