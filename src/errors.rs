//! Errors this crate can raise.
//!
//! The GPMF decode path itself is almost entirely infallible by design (see
//! the error policy in the top-level docs): truncated input, missing
//! siblings, and unparseable timestamps are absorbed into defaults rather
//! than surfaced here. `GpmfError` exists for the handful of conditions that
//! are genuinely exceptional - a caller-chosen defensive limit being
//! exceeded, or a payload that claims to be ASCII but isn't valid UTF-8 once
//! decoded.

use std::fmt;

#[derive(Debug)]
pub enum GpmfError {
    /// A defensive limit (recursion depth or total item count) was exceeded
    /// while projecting the KLV stream into a tree.
    MalformedInput { reason: String },
    /// FourCC read as `[0, 0, 0, 0]`, used as a guard against zero-padded
    /// trailing bytes being mistaken for a KLV header.
    InvalidFourCc,
    /// A payload expected to be ASCII did not decode as valid UTF-8.
    Utf8Error(std::string::FromUtf8Error),
}

impl std::error::Error for GpmfError {}

impl fmt::Display for GpmfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpmfError::MalformedInput { reason } => write!(f, "malformed GPMF input: {reason}"),
            GpmfError::InvalidFourCc => write!(f, "invalid (zero) FourCC"),
            GpmfError::Utf8Error(err) => write!(f, "{err}"),
        }
    }
}

impl From<std::string::FromUtf8Error> for GpmfError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        GpmfError::Utf8Error(err)
    }
}
