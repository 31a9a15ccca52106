use crate::{
    traits::Function,
    wire::{DecodeError, EncodeError, MAX_FRAME, MAX_PAYLOAD, TERMINATOR},
};

/// Bit-parallel majority of three received copies. Bit `k` of the result is
/// whichever value at least two of the copies hold at bit `k`.
#[must_use]
pub const fn majority(a: u8, b: u8, c: u8) -> u8 {
    (a & b) | (b & c) | (a & c)
}

/// Encodes data by repeating every payload byte three times so the receiver
/// can vote away corruption of any single copy per bit position.
#[derive(Debug, Clone)]
pub struct TripleEncoder {
    /// Largest payload a single frame may carry.
    pub max_payload: usize,
}

impl Default for TripleEncoder {
    fn default() -> Self {
        Self {
            max_payload: MAX_PAYLOAD,
        }
    }
}

impl TripleEncoder {
    /// Builds the frame for `payload`: each byte tripled in place, followed by
    /// one [`TERMINATOR`].
    ///
    /// A zero byte in the payload is the wire terminator, so encoding stops
    /// there; everything after it is dropped. An empty effective payload
    /// produces an empty frame with no terminator.
    pub fn encode(&self, payload: &[u8]) -> Result<Vec<u8>, EncodeError> {
        if payload.len() > self.max_payload {
            return Err(EncodeError::PayloadTooLong {
                len: payload.len(),
                max: self.max_payload,
            });
        }
        let effective = match payload.iter().position(|&byte| byte == TERMINATOR) {
            Some(idx) => {
                log::debug!(
                    "embedded terminator ends the payload after {idx} of {} bytes",
                    payload.len()
                );
                &payload[..idx]
            }
            None => payload,
        };
        if effective.is_empty() {
            return Ok(Vec::new());
        }
        let mut frame = Vec::with_capacity(3 * effective.len() + 1);
        for &byte in effective {
            frame.extend([byte; 3]);
        }
        frame.push(TERMINATOR);
        Ok(frame)
    }
}

impl Function for TripleEncoder {
    type Input = Vec<u8>;

    type Output = Result<Vec<u8>, EncodeError>;

    fn map(&self, input: Self::Input) -> Self::Output {
        self.encode(&input)
    }
}

/// Decodes a received frame by majority vote over each consecutive triplet of
/// copies.
#[derive(Debug, Clone)]
pub struct TripleDecoder {
    /// Largest frame accepted from the wire.
    pub max_frame: usize,
}

impl Default for TripleDecoder {
    fn default() -> Self {
        Self {
            max_frame: MAX_FRAME,
        }
    }
}

impl TripleDecoder {
    /// Recovers the payload from `frame`.
    ///
    /// Scanning stops at the first [`TERMINATOR`] found at a triplet start,
    /// mirroring the encoder's convention; bytes past it are ignored. A frame
    /// that ends mid-triplet with no terminator is rejected rather than read
    /// past its end. Corruption of at most one copy per bit position is
    /// voted away; two copies agreeing on a flipped bit yield the wrong bit,
    /// an accepted limit of the scheme.
    pub fn decode(&self, frame: &[u8]) -> Result<Vec<u8>, DecodeError> {
        if frame.len() > self.max_frame {
            return Err(DecodeError::FrameTooLong {
                len: frame.len(),
                max: self.max_frame,
            });
        }
        let mut payload = Vec::with_capacity(frame.len() / 3);
        for triplet in frame.chunks(3) {
            if triplet[0] == TERMINATOR {
                log::trace!(
                    "terminator after {} triplets; ignoring {} remaining bytes",
                    payload.len(),
                    frame.len() - 3 * payload.len()
                );
                return Ok(payload);
            }
            match *triplet {
                [a, b, c] => payload.push(majority(a, b, c)),
                _ => {
                    return Err(DecodeError::PartialTriplet {
                        trailing: triplet.len(),
                    })
                }
            }
        }
        Ok(payload)
    }
}

impl Function for TripleDecoder {
    type Input = Vec<u8>;

    type Output = Result<Vec<u8>, DecodeError>;

    fn map(&self, input: Self::Input) -> Self::Output {
        self.decode(&input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use proptest::{collection::vec, prelude::*, proptest};

    #[test]
    fn majority_votes_per_bit() {
        assert_eq!(majority(0b1010_1010, 0b1010_1010, 0b0101_0101), 0b1010_1010);
        assert_eq!(majority(0b1111_0000, 0b1100_1100, 0b1010_1010), 0b1110_1000);
        // One copy wrong in bit 0, another wrong in bit 5. Still recovered.
        assert_eq!(majority(0x41 ^ 0x01, 0x41 ^ 0x20, 0x41), 0x41);
        assert_eq!(majority(0xff, 0xff, 0xff), 0xff);
        assert_eq!(majority(0x00, 0x00, 0xff), 0x00);
    }

    #[test]
    fn encode_triples_and_terminates() {
        let frame = TripleEncoder::default().encode(b"AB").unwrap();
        assert_eq!(frame, [0x41, 0x41, 0x41, 0x42, 0x42, 0x42, 0x00]);
    }

    #[test]
    fn decode_literal() {
        let payload = TripleDecoder::default()
            .decode(&[0x41, 0x41, 0x41, 0x42, 0x42, 0x42])
            .unwrap();
        assert_eq!(payload, b"AB");
    }

    #[test]
    fn empty_in_empty_out() {
        assert!(TripleEncoder::default().encode(&[]).unwrap().is_empty());
        assert!(TripleDecoder::default().decode(&[]).unwrap().is_empty());
    }

    #[test]
    fn encode_at_bound_keeps_terminator() {
        let payload = [0x5a; MAX_PAYLOAD];
        let frame = TripleEncoder::default().encode(&payload).unwrap();
        assert_eq!(frame.len(), MAX_FRAME);
        assert_eq!(*frame.last().unwrap(), TERMINATOR);
        for (a, b, c) in frame.iter().dropping_back(1).tuples() {
            assert_eq!(a, b);
            assert_eq!(b, c);
        }
    }

    #[test]
    fn encode_rejects_over_bound() {
        let payload = [0x5a; MAX_PAYLOAD + 1];
        assert_eq!(
            TripleEncoder::default().encode(&payload),
            Err(EncodeError::PayloadTooLong {
                len: MAX_PAYLOAD + 1,
                max: MAX_PAYLOAD
            })
        );
    }

    #[test]
    fn decode_rejects_over_bound() {
        let frame = [0x5a; MAX_FRAME + 1];
        assert_eq!(
            TripleDecoder::default().decode(&frame),
            Err(DecodeError::FrameTooLong {
                len: MAX_FRAME + 1,
                max: MAX_FRAME
            })
        );
    }

    #[test]
    fn embedded_zero_truncates_encoding() {
        let frame = TripleEncoder::default().encode(&[0x41, 0x00, 0x42]).unwrap();
        assert_eq!(frame, [0x41, 0x41, 0x41, 0x00]);
        assert!(TripleEncoder::default().encode(&[0x00, 0x42]).unwrap().is_empty());
    }

    #[test]
    fn terminator_halts_decoding() {
        let payload = TripleDecoder::default()
            .decode(&[0x41, 0x41, 0x41, 0x00, 0x42, 0x42, 0x42])
            .unwrap();
        assert_eq!(payload, b"A");
    }

    #[test]
    fn terminator_recognized_in_short_tail() {
        // Terminator at a triplet start inside a chunk shorter than three.
        let payload = TripleDecoder::default()
            .decode(&[0x41, 0x41, 0x41, 0x00, 0x42])
            .unwrap();
        assert_eq!(payload, b"A");
    }

    #[test]
    fn partial_triplet_rejected() {
        assert_eq!(
            TripleDecoder::default().decode(&[0x41, 0x41]),
            Err(DecodeError::PartialTriplet { trailing: 2 })
        );
        assert_eq!(
            TripleDecoder::default().decode(&[0x41, 0x41, 0x41, 0x42]),
            Err(DecodeError::PartialTriplet { trailing: 1 })
        );
    }

    #[test]
    fn two_agreeing_corrupt_copies_win_the_vote() {
        let frame = TripleEncoder::default().encode(b"A").unwrap();
        let mut corrupted = frame;
        // Same bit flipped in two of the three copies outvotes the original.
        corrupted[0] ^= 0x04;
        corrupted[1] ^= 0x04;
        let payload = TripleDecoder::default().decode(&corrupted).unwrap();
        assert_eq!(payload, [0x41 ^ 0x04]);
    }

    proptest! {
        #[test]
        fn round_trip(payload in vec(1..=255u8, 0..=MAX_PAYLOAD)) {
            let frame = TripleEncoder::default().encode(&payload).unwrap();
            if !payload.is_empty() {
                prop_assert_eq!(frame.len(), 3 * payload.len() + 1);
            }
            let decoded = TripleDecoder::default().decode(&frame).unwrap();
            prop_assert_eq!(decoded, payload);
        }

        #[test]
        fn single_copy_corruption_tolerated(
            payload in vec(1..=255u8, 1..=MAX_PAYLOAD),
            corruption in vec((0..3usize, 0..=255u8), 1..=MAX_PAYLOAD),
        ) {
            let mut frame = TripleEncoder::default().encode(&payload).unwrap();
            for (triplet_idx, &(copy, mask)) in corruption.iter().enumerate().take(payload.len()) {
                let pos = 3 * triplet_idx + copy;
                // A first copy zeroed by the channel mimics the terminator
                // and halts the scan, so keep that one byte nonzero.
                if copy == 0 && frame[pos] ^ mask == TERMINATOR {
                    continue;
                }
                frame[pos] ^= mask;
            }
            let decoded = TripleDecoder::default().decode(&frame).unwrap();
            prop_assert_eq!(decoded, payload);
        }
    }
}
