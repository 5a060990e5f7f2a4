//! GPIO / peripheral pin assignments for the Tact controller board.
//!
//! Single source of truth — every driver references this module rather
//! than hard-coding pin numbers. Change a pin here and it propagates
//! everywhere.

// ---------------------------------------------------------------------------
// Vibration motors (DRV2603 low-side drivers, one per motor)
// ---------------------------------------------------------------------------

/// LEDC PWM outputs for the four vibration motors, indexed by motor id.
pub const MOTOR_PWM_GPIOS: [i32; 4] = [4, 5, 6, 7];

// ---------------------------------------------------------------------------
// Contact-event link (UART from the host simulator)
// ---------------------------------------------------------------------------

pub const UART_TX_GPIO: i32 = 17;
pub const UART_RX_GPIO: i32 = 18;
/// Line rate of the contact-event link.
pub const UART_BAUD_RATE: u32 = 115_200;

// ---------------------------------------------------------------------------
// PWM configuration
// ---------------------------------------------------------------------------

/// LEDC timer resolution (bits). 8-bit gives 0 – 255 duty levels.
pub const PWM_RESOLUTION_BITS: u32 = 8;
/// LEDC base frequency for the motor drivers (25 kHz — inaudible).
pub const MOTOR_PWM_FREQ_HZ: u32 = 25_000;
