//! Canonical byte encodings of the values that are proven.

/// Deterministic serialization of a value stored in the counterparty state.
///
/// The bytes are compared against what the counterparty committed to, so the
/// same logical value must always encode to the same bytes.
pub trait CanonicalEncode {
    /// Canonical bytes of `self`
    fn encode_canonical(&self) -> Vec<u8>;
}

/// Encoding of the next sequence to receive, a big-endian `u64`
#[must_use]
pub const fn encode_next_sequence_recv(sequence: u64) -> [u8; 8] {
    sequence.to_be_bytes()
}
