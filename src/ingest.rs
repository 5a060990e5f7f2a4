//! Contact record validation.
//!
//! Takes the three raw fields split from one serial line and produces a
//! validated [`ContactSample`], or a typed [`RejectReason`]. Rejection is
//! always non-fatal — the caller drops the record and moves on.
//!
//! Validation order is part of the contract:
//!
//! 1. actuator id must be an integer in `[0, NUM_MOTORS)`;
//! 2. depth and first-contact fields must parse;
//! 3. depths below the contact threshold are **clamped** to zero (with
//!    the first-contact flag cleared), not rejected.

use crate::config::{HapticConfig, NUM_MOTORS};
use crate::error::{IngestResult, RejectReason};
use crate::haptic::ContactSample;

/// One unparsed record: the raw fields of a `id,depth,first_contact` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRecord<'a> {
    pub actuator_id: &'a str,
    pub depth: &'a str,
    pub first_contact: &'a str,
}

/// Split a line into its three comma-separated fields.
///
/// Anything other than exactly three fields is malformed.
pub fn split_record(line: &str) -> IngestResult<RawRecord<'_>> {
    let mut fields = line.split(',');
    let actuator_id = fields.next().ok_or(RejectReason::MalformedField)?;
    let depth = fields.next().ok_or(RejectReason::MalformedField)?;
    let first_contact = fields.next().ok_or(RejectReason::MalformedField)?;
    if fields.next().is_some() {
        return Err(RejectReason::MalformedField);
    }
    Ok(RawRecord {
        actuator_id,
        depth,
        first_contact,
    })
}

/// Validate a raw record into a [`ContactSample`].
pub fn accept(cfg: &HapticConfig, raw: &RawRecord<'_>) -> IngestResult<ContactSample> {
    let id: i32 = raw
        .actuator_id
        .trim()
        .parse()
        .map_err(|_| RejectReason::InvalidActuatorId)?;
    if !(0..NUM_MOTORS as i32).contains(&id) {
        return Err(RejectReason::InvalidActuatorId);
    }

    let depth: f32 = raw
        .depth
        .trim()
        .parse()
        .map_err(|_| RejectReason::MalformedField)?;
    if !depth.is_finite() {
        return Err(RejectReason::MalformedField);
    }

    let flag: u32 = raw
        .first_contact
        .trim()
        .parse()
        .map_err(|_| RejectReason::MalformedField)?;

    // The host clamps before sending; tolerate overshoot anyway.
    let mut depth = depth.min(1.0);
    let mut first_contact = flag != 0;

    // Threshold filtering is a clamp, not a rejection.
    if depth < cfg.penetration_threshold {
        depth = 0.0;
        first_contact = false;
    }

    Ok(ContactSample {
        actuator_id: id as u8,
        depth,
        first_contact,
    })
}
