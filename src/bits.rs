//! Bit-level utilities shared by the encoder and decoder.
//!
//! The codec works on two representations of a bit sequence: `&[bool]`
//! slices inside the library and `'0'`/`'1'` strings at the API boundary.
//! This module provides the conversions between them, plus the two
//! primitives every convolutional code is built from: parity (modulo-2
//! sum) of a tapped register, and bit-order reversal for translating
//! between generator polynomial notations.

use crate::error::{CodecError, CodecResult};

/// Reverse the order of the low `width` bits of `value`.
///
/// Generator polynomials appear in the literature in two mirror-image
/// numbering conventions (e.g. MATLAB reverses bit significance, so
/// polynomial 6 = 0b110 is written there as 3 = 0b011). Applying this
/// function to each polynomial translates one convention into the other.
///
/// The function is an involution: `reverse_bits(w, reverse_bits(w, v)) == v`
/// for any `v < 2^w`.
pub fn reverse_bits(width: usize, value: u64) -> u64 {
    let mut forward = value;
    let mut reversed = 0u64;
    for _ in 0..width {
        reversed = (reversed << 1) | (forward & 1);
        forward >>= 1;
    }
    reversed
}

/// Evaluate one generator tap: the modulo-2 sum of the register bits
/// selected by the polynomial mask.
///
/// This is the fundamental primitive shared by the encoder and the
/// decoder's expected-output function.
#[inline]
pub fn tap_output(register: u64, polynomial: u64) -> bool {
    (register & polynomial).count_ones() & 1 == 1
}

/// Parse a `'0'`/`'1'` string into a bit vector.
///
/// Any other character is rejected with [`CodecError::InvalidBitChar`]
/// naming the offending character and its position.
pub fn parse_bits(s: &str) -> CodecResult<Vec<bool>> {
    s.chars()
        .enumerate()
        .map(|(position, c)| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            found => Err(CodecError::InvalidBitChar { found, position }),
        })
        .collect()
}

/// Render a bit vector as a `'0'`/`'1'` string.
pub fn format_bits(bits: &[bool]) -> String {
    bits.iter().map(|&b| if b { '1' } else { '0' }).collect()
}
