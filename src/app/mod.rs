//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the business rules for the Tact renderer:
//! sample ingestion, the per-motor contact state machines, and the
//! fixed-rate output pass. All interaction with hardware happens through
//! **port traits** defined in [`ports`], keeping this layer fully
//! testable without real peripherals.

pub mod events;
pub mod ports;
pub mod service;
