//! Property tests for the parser and checksum laws.

use lin_frame_codec::{
    classic_checksum, enhanced_checksum, parse_hex_byte, parse_hex_line, to_hex_string,
    CodecError, DEFAULT_MAX_BYTES,
};
use proptest::prelude::*;

/// Strategy for a token that is not a valid hex byte
fn bad_token_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9A-Fa-f]{3,6}",
        "[G-Zg-z][0-9A-Fa-f]?",
        "[0-9A-Fa-f][G-Zg-z]",
    ]
}

proptest! {
    /// Rendering bytes as canonical hex and parsing them back is lossless.
    #[test]
    fn prop_canonical_rendering_round_trips(
        bytes in prop::collection::vec(any::<u8>(), 1..=DEFAULT_MAX_BYTES)
    ) {
        let parsed = parse_hex_line(&to_hex_string(&bytes), DEFAULT_MAX_BYTES).unwrap();
        prop_assert_eq!(parsed.as_slice(), bytes.as_slice());
    }

    /// Enhanced mode with a zero identifier degenerates to classic mode.
    #[test]
    fn prop_enhanced_with_zero_pid_is_classic(
        data in prop::collection::vec(any::<u8>(), 0..=255)
    ) {
        prop_assert_eq!(enhanced_checksum(0, &data), classic_checksum(&data));
    }

    /// A single data byte checksums to its complement.
    #[test]
    fn prop_single_byte_classic_is_complement(b in any::<u8>()) {
        prop_assert_eq!(classic_checksum(&[b]), !b);
    }

    /// Enhanced checksum of empty data is the complement of the PID.
    #[test]
    fn prop_enhanced_empty_is_complement_of_pid(pid in any::<u8>()) {
        prop_assert_eq!(enhanced_checksum(pid, &[]), !pid);
    }

    /// Adding the checksum to the sum of its inputs always yields 0xFF.
    #[test]
    fn prop_checksum_completes_sum(
        pid in any::<u8>(),
        data in prop::collection::vec(any::<u8>(), 0..=255)
    ) {
        let sum = data.iter().fold(pid, |acc, &b| acc.wrapping_add(b));
        prop_assert_eq!(sum.wrapping_add(enhanced_checksum(pid, &data)), 0xFF);
    }

    /// Prefix and case never change the parsed value.
    #[test]
    fn prop_token_spellings_agree(b in any::<u8>()) {
        let upper = format!("{:02X}", b);
        let lower = format!("{:02x}", b);
        prop_assert_eq!(parse_hex_byte(&upper), Ok(b));
        prop_assert_eq!(parse_hex_byte(&lower), Ok(b));
        prop_assert_eq!(parse_hex_byte(&format!("0x{}", lower)), Ok(b));
        prop_assert_eq!(parse_hex_byte(&format!("0X{}", upper)), Ok(b));
    }

    /// One bad token anywhere fails the whole line with no partial output.
    #[test]
    fn prop_bad_token_fails_whole_line(
        bytes in prop::collection::vec(any::<u8>(), 1..20),
        bad in bad_token_strategy(),
        position in any::<prop::sample::Index>()
    ) {
        let mut tokens: Vec<String> = bytes.iter().map(|b| format!("{:02X}", b)).collect();
        let at = position.index(tokens.len() + 1);
        tokens.insert(at, bad);

        let result = parse_hex_line(&tokens.join(" "), DEFAULT_MAX_BYTES);
        prop_assert!(
            matches!(result, Err(CodecError::MalformedToken { .. })),
            "expected MalformedToken, got {:?}", result
        );
    }

    /// Lines longer than the capacity are rejected, never truncated.
    #[test]
    fn prop_over_capacity_rejected(capacity in 1usize..16, extra in 1usize..8) {
        let line = vec!["00"; capacity + extra].join("\t");
        prop_assert_eq!(
            parse_hex_line(&line, capacity),
            Err(CodecError::CapacityExceeded { capacity })
        );
    }
}
