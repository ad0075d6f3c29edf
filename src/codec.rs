// Bit/hex codec for glyph activation data
//
// A pattern's booleans are read as one big-endian bit string, left-padded with
// zero bits to a nibble boundary and written as lowercase hex. Decoding needs
// the original bit count to strip that padding again.

use crate::glyph_errors::FormatError;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Number of hex digits needed for `bits` booleans
pub fn hex_len(bits: usize) -> usize {
    bits.div_ceil(4)
}

/// Encode booleans as lowercase hex, most significant bit first
pub fn encode_hex(bits: &[bool]) -> String {
    let pad = hex_len(bits.len()) * 4 - bits.len();
    let padded = std::iter::repeat(false).take(pad).chain(bits.iter().copied());

    let mut hex = String::with_capacity(hex_len(bits.len()));
    let mut nibble = 0u8;
    for (i, bit) in padded.enumerate() {
        nibble = (nibble << 1) | bit as u8;
        if i % 4 == 3 {
            hex.push(HEX_DIGITS[nibble as usize] as char);
            nibble = 0;
        }
    }
    hex
}

/// Decode `hex` back into exactly `len` booleans
///
/// Leading padding bits are dropped unchecked. Fails if a character is not a
/// hex digit or if there are not enough bits for `len`.
pub fn decode_hex(hex: &str, len: usize) -> Result<Vec<bool>, FormatError> {
    let mut nibbles = Vec::with_capacity(hex.len());
    for (position, ch) in hex.chars().enumerate() {
        let value = ch
            .to_digit(16)
            .ok_or(FormatError::InvalidHexDigit { ch, position })?;
        nibbles.push(value as u8);
    }

    let available = nibbles.len() * 4;
    if available < len {
        return Err(FormatError::InsufficientBits {
            expected: len,
            available,
        });
    }

    let pad = available - len;
    Ok(nibbles
        .iter()
        .flat_map(|nibble| (0..4).rev().map(move |shift| (nibble >> shift) & 1 == 1))
        .skip(pad)
        .collect())
}
