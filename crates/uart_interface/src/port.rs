use repcode::{
    repetition::{TripleDecoder, TripleEncoder},
    traits::Function,
};
use std::sync::{Mutex, PoisonError};

/// One transform exposed through write/read calls, the way a character device
/// exposes it through its file operations.
///
/// A write runs the transform and parks the result; a read hands the result
/// over and leaves the port empty. The pending slot is mutex-guarded so
/// concurrent callers are serialized instead of racing on shared buffers.
#[derive(Debug, Default)]
pub struct TransformPort<F> {
    transform: F,
    pending: Mutex<Option<Vec<u8>>>,
}

impl<F, E> TransformPort<F>
where
    F: Function<Input = Vec<u8>, Output = Result<Vec<u8>, E>>,
{
    pub fn new(transform: F) -> Self {
        Self {
            transform,
            pending: Mutex::new(None),
        }
    }

    /// Run the transform on `buf` and make its result the pending message,
    /// replacing whatever a previous write left behind. Returns the number of
    /// bytes accepted. On a transform error the pending message is unchanged.
    pub fn write(&self, buf: &[u8]) -> Result<usize, E> {
        let message = self.transform.map(buf.to_vec())?;
        log::debug!("prepared {} byte message from {} byte write", message.len(), buf.len());
        *self
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(message);
        Ok(buf.len())
    }

    /// Take the pending message, leaving the port empty. Returns an empty
    /// buffer when no write completed since the last read.
    pub fn read(&self) -> Vec<u8> {
        let message = self
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .unwrap_or_default();
        log::debug!("sent {} bytes to the reader", message.len());
        message
    }
}

/// Port wrapping the encode direction: writes accept a payload, reads return
/// the triplicated frame.
pub type EncoderPort = TransformPort<TripleEncoder>;

/// Port wrapping the decode direction: writes accept a received frame, reads
/// return the majority-voted payload.
pub type DecoderPort = TransformPort<TripleDecoder>;
