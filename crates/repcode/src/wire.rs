use thiserror::Error;

/// Largest payload the encode direction accepts in one frame.
pub const MAX_PAYLOAD: usize = 256;

/// Largest frame the decode direction accepts. Triple the payload bound plus
/// one terminator byte.
pub const MAX_FRAME: usize = 3 * MAX_PAYLOAD + 1;

/// Sentinel byte marking the logical end of a message inside a frame.
///
/// The wire format is not binary-safe: a zero byte inside payload data is
/// indistinguishable from end-of-message and truncates the message there.
pub const TERMINATOR: u8 = 0;

/// Failure to build a frame from a payload.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// The payload exceeds the wire bound. Reported instead of silently
    /// clamping like the scheme this replaces.
    #[error("payload of {len} bytes exceeds the {max} byte wire bound")]
    PayloadTooLong { len: usize, max: usize },
}

/// Failure to recover a payload from a received frame.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The frame exceeds the wire bound.
    #[error("frame of {len} bytes exceeds the {max} byte wire bound")]
    FrameTooLong { len: usize, max: usize },
    /// The frame ended mid-triplet with no terminator.
    #[error("{trailing} trailing bytes do not form a whole triplet")]
    PartialTriplet { trailing: usize },
}
