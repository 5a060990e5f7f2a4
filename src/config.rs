//! Fixed haptic rendering parameters.
//!
//! Every value here is calibration baked in at compile time — there is
//! deliberately no runtime tuning path. The struct exists so the values
//! can be injected at startup and threaded through the core as one
//! immutable bundle instead of ambient globals.

use serde::{Deserialize, Serialize};

/// Number of vibration motors on the garment. Channel ids are `0..NUM_MOTORS`.
pub const NUM_MOTORS: usize = 4;

/// Haptic rendering configuration.
///
/// All duty values are on the 8-bit LEDC scale (0–255).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HapticConfig {
    // --- Onset pulse ---
    /// Duration of the fixed high-amplitude burst on first contact (ms).
    pub onset_pulse_ms: u32,
    /// Duty cycle driven during the onset pulse (230 ≈ 90% of full scale).
    pub onset_duty: u8,

    // --- Sustained vibration ---
    /// Duty cycle at the lightest perceptible contact (51 ≈ 20%).
    pub sustained_min_duty: u8,
    /// Duty cycle at full penetration depth (179 ≈ 70%).
    pub sustained_max_duty: u8,

    // --- Contact detection ---
    /// Depths below this are treated as no contact.
    pub penetration_threshold: f32,

    // --- Timing ---
    /// Output update interval (milliseconds). 40 ms = 25 Hz.
    pub tick_interval_ms: u32,
}

impl Default for HapticConfig {
    fn default() -> Self {
        Self {
            // Onset pulse
            onset_pulse_ms: 75,
            onset_duty: 230,

            // Sustained vibration
            sustained_min_duty: 51,
            sustained_max_duty: 179,

            // Contact detection
            penetration_threshold: 0.1,

            // Timing
            tick_interval_ms: 40, // 25 Hz
        }
    }
}

impl HapticConfig {
    /// Onset pulse duration in microseconds (monotonic clock units).
    pub fn onset_pulse_us(&self) -> u64 {
        u64::from(self.onset_pulse_ms) * 1_000
    }

    /// Tick period in microseconds.
    pub fn tick_interval_us(&self) -> u64 {
        u64::from(self.tick_interval_ms) * 1_000
    }
}
