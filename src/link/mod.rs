//! Serial line protocol.
//!
//! The upstream simulator sends one contact record per line over UART:
//!
//! ```text
//! actuator_id,penetration_depth,first_contact\n      e.g.  2,0.58,1
//! ```
//!
//! [`framer::LineFramer`] turns the raw byte stream into complete lines;
//! field splitting and validation live in [`crate::ingest`].

pub mod framer;

pub use framer::LineFramer;
