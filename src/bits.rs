//! Low-level bit manipulation for CAN payloads.
//!
//! A payload is expanded into a flat logical bit sequence whose ordering is
//! selected by [`ByteOrder`]:
//!
//! - [`ByteOrder::LittleEndian`] (Intel): bytes in increasing order, each byte
//!   walked least-significant-bit first. A signal's start bit addresses its
//!   least significant bit.
//! - [`ByteOrder::BigEndian`] (Motorola): bytes in increasing order, each byte
//!   walked most-significant-bit first. Logical index 0 is the MSB of byte 0
//!   and the numbering continues at the MSB of the following byte, so a byte's
//!   physical bit 7 is numbered lower than the next byte's physical bit 0.
//!   A signal's start bit addresses its most significant bit.
//!
//! Extracted value bits are always returned most-significant-first, so the
//! integer conversions below are convention-free.

/// Bit numbering convention of a signal within the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteOrder {
    #[default]
    /// Intel: start bit is the LSB, bits walk upward through each byte.
    LittleEndian,
    /// Motorola: start bit is the MSB, sawtooth numbering across bytes.
    BigEndian,
}

#[cfg(feature = "serde")]
impl From<crate::serde::ByteOrderDef> for ByteOrder {
    fn from(value: crate::serde::ByteOrderDef) -> Self {
        match value {
            crate::serde::ByteOrderDef::LittleEndian => ByteOrder::LittleEndian,
            crate::serde::ByteOrderDef::BigEndian => ByteOrder::BigEndian,
        }
    }
}

/// Expands a payload into its flat logical bit sequence (one bit per element).
pub fn payload_to_bits(payload: &[u8], order: ByteOrder) -> Vec<u8> {
    let mut bits = Vec::with_capacity(payload.len() * 8);

    for &byte in payload {
        match order {
            ByteOrder::BigEndian => {
                for i in (0..8).rev() {
                    bits.push((byte >> i) & 1);
                }
            }
            ByteOrder::LittleEndian => {
                for i in 0..8 {
                    bits.push((byte >> i) & 1);
                }
            }
        }
    }

    bits
}

/// Collapses a flat logical bit sequence back into payload bytes.
/// Exact inverse of [`payload_to_bits`] for the same `order`.
pub fn bits_to_payload(bits: &[u8], order: ByteOrder) -> Vec<u8> {
    let n_bytes = (bits.len() + 7) / 8;
    let mut out = vec![0u8; n_bytes];

    for (i, &bit) in bits.iter().enumerate() {
        let byte_index = i / 8;
        let bit_in_byte = match order {
            ByteOrder::BigEndian => 7 - (i % 8),
            ByteOrder::LittleEndian => i % 8,
        };
        out[byte_index] |= bit << bit_in_byte;
    }

    out
}

/// Copies exactly `len` bits starting at logical position `start_bit`.
///
/// The result is ordered most-significant-first regardless of `order`
/// (little-endian slices walk LSB-first and are reversed here).
pub fn extract_range(bits: &[u8], start_bit: usize, len: usize, order: ByteOrder) -> Vec<u8> {
    debug_assert!(start_bit + len <= bits.len());

    let mut field = bits[start_bit..start_bit + len].to_vec();
    if order == ByteOrder::LittleEndian {
        field.reverse();
    }

    field
}

/// Writes `value_bits` (most-significant-first) into the logical position
/// `start_bit..start_bit + len`, leaving all other bits untouched.
///
/// The value is truncated to its low-order `len` bits when wider than the
/// field, and zero-padded at the top when narrower.
pub fn insert_range(
    bits: &mut [u8],
    value_bits: &[u8],
    start_bit: usize,
    len: usize,
    order: ByteOrder,
) {
    debug_assert!(start_bit + len <= bits.len());

    let mut field = vec![0u8; len];
    let take = value_bits.len().min(len);
    field[len - take..].copy_from_slice(&value_bits[value_bits.len() - take..]);

    if order == ByteOrder::LittleEndian {
        field.reverse();
    }

    bits[start_bit..start_bit + len].copy_from_slice(&field);
}

/// Folds a most-significant-first bit slice into an unsigned value (max 64 bits).
pub fn bits_to_unsigned(bits: &[u8]) -> u64 {
    debug_assert!(bits.len() <= 64);

    bits.iter().fold(0u64, |acc, &bit| (acc << 1) | bit as u64)
}

/// Folds a most-significant-first bit slice into a two's-complement signed value.
pub fn bits_to_signed(bits: &[u8]) -> i64 {
    sign_extend(bits_to_unsigned(bits), bits.len())
}

/// Renders the low `width` bits of `value` most-significant-first.
/// Values wider than `width` wrap rather than fail.
pub fn unsigned_to_bits(value: u64, width: usize) -> Vec<u8> {
    debug_assert!(width >= 1 && width <= 64);

    (0..width).rev().map(|i| ((value >> i) & 1) as u8).collect()
}

/// Two's-complement rendering of `value` in `width` bits, wrapping on overflow.
pub fn signed_to_bits(value: i64, width: usize) -> Vec<u8> {
    unsigned_to_bits(value as u64, width)
}

/// Sign-extends the low `bits` of `value` to a full `i64`.
pub fn sign_extend(value: u64, bits: usize) -> i64 {
    let shift = 64 - bits;
    ((value << shift) as i64) >> shift
}
