//! Error Types
//!
//! Configuration mistakes and malformed input are the only failures in this
//! crate. Per-step numeric edge cases (division by zero, anti-parallel
//! vectors, ...) resolve to documented sentinel values and never show up
//! here.

use thiserror::Error;

/// Unified error type for constraint configuration and raw decoding.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PhysicsError {
    /// A settings object was configured into a state it cannot evaluate.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// Description of the invalid configuration
        reason: &'static str,
    },
    /// Raw state decoding failed (truncated or incompatible data).
    #[error("state deserialization failed")]
    DeserializationFailed,
    /// Raw state was written by an unknown format version.
    #[error("unsupported format version {found} (expected {expected})")]
    UnsupportedVersion {
        /// Version found in the header
        found: u32,
        /// Version this build writes
        expected: u32,
    },
    /// A capacity limit was exceeded (too many materials, record values, ...).
    #[error("{resource} capacity exceeded (limit={limit})")]
    CapacityExceeded {
        /// What resource was exhausted
        resource: &'static str,
        /// The limit that was exceeded
        limit: usize,
    },
    /// A decimal literal could not be parsed.
    #[error("invalid fixed-point literal: {0}")]
    Parse(#[from] ParseFpError),
}

/// Error returned by [`Fp::parse`](crate::Fp::parse).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ParseFpError {
    /// No digits were found (a lone sign or point).
    #[error("no digits")]
    Empty,
    /// A character other than `-`, `.` or an ASCII digit was found.
    #[error("invalid digit")]
    InvalidDigit,
    /// The value does not fit the Q48.16 range.
    #[error("value out of range")]
    OutOfRange,
}

// ============================================================================
// Tests
// ============================================================================
