/// Wire-format constants and the error types shared by both directions.
pub mod wire;

/// Triple-repetition encoding and bit-majority decoding.
/// <https://en.wikipedia.org/wiki/Repetition_code>
pub mod repetition;

/// Traits for generic processing
pub mod traits;
