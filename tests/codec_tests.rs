//! Tests for the bit/hex codec
use glyph_grid::codec::hex_len;
use glyph_grid::{decode_hex, encode_hex, FormatError, PatternDims};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_unit_grid_scenario() {
    let mut bits = vec![false; 13];
    bits[0] = true;
    bits[2] = true;
    assert_eq!(encode_hex(&bits), "1400");
    assert_eq!(decode_hex("1400", 13).unwrap(), bits);
}

#[test]
fn test_random_roundtrip() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..200 {
        let w = rng.gen_range(1..=5);
        let h = rng.gen_range(1..=5);
        let n = PatternDims::new(w, h).unwrap().element_count();
        let bits: Vec<bool> = (0..n).map(|_| rng.gen_bool(0.4)).collect();

        let hex = encode_hex(&bits);
        assert_eq!(hex.len(), hex_len(n));
        assert_eq!(hex, encode_hex(&bits), "encoding is not deterministic");
        assert!(hex.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        assert_eq!(decode_hex(&hex, n).unwrap(), bits);
    }
}

#[test]
fn test_roundtrip_every_length_up_to_64() {
    for n in 0..=64usize {
        let bits: Vec<bool> = (0..n).map(|i| i % 3 == 0).collect();
        assert_eq!(decode_hex(&encode_hex(&bits), n).unwrap(), bits, "length {}", n);
    }
}

#[test]
fn test_empty_input() {
    assert_eq!(encode_hex(&[]), "");
    assert!(decode_hex("", 0).unwrap().is_empty());
}

#[test]
fn test_non_hex_character_rejected() {
    assert!(matches!(
        decode_hex("g", 1),
        Err(FormatError::InvalidHexDigit { ch: 'g', position: 0 })
    ));
    assert!(decode_hex("14-0", 13).is_err());
}

#[test]
fn test_insufficient_bits_rejected() {
    assert_eq!(
        decode_hex("", 1),
        Err(FormatError::InsufficientBits {
            expected: 1,
            available: 0
        })
    );
}
