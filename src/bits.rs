//! Fixed-width, MSB-first conversion between integers and bit sequences.
//!
//! Every frame prefix and every body byte goes through these two functions.

use crate::error::{Result, StegError};

/// Returns `value` as exactly `width` bits, most significant first, zero padded.
pub fn to_bits(value: u64, width: u32) -> Result<Vec<bool>> {
    if width < u64::BITS && value >> width != 0 {
        return Err(StegError::ValueTooLarge { value, width });
    }

    Ok((0..width)
        .rev()
        .map(|i| i < u64::BITS && (value >> i) & 1 == 1)
        .collect())
}

/// Interprets `bits` MSB first. Sequences longer than 64 bits keep only the low 64.
pub fn from_bits(bits: &[bool]) -> u64 {
    bits.iter().fold(0u64, |acc, &bit| (acc << 1) | u64::from(bit))
}
