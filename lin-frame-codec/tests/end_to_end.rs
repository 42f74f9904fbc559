// End-to-end decoding of the reference frames
use lin_frame_codec::{ChecksumMode, CodecConfig, CodecError, LineDecoder};

fn decoder(mode: ChecksumMode) -> LineDecoder {
    LineDecoder::with_config(CodecConfig::new().with_mode(mode))
}

#[test]
fn classic_reference_frame() {
    let frame = decoder(ChecksumMode::Classic)
        .decode_line("3A 04 11 22 33 44")
        .unwrap();

    assert_eq!(frame.data(), &[0x11, 0x22, 0x33, 0x44]);
    // 0x11 + 0x22 + 0x33 + 0x44 = 0xAA
    assert_eq!(frame.checksum(), 0x55);
    assert_eq!(frame.render(), "3A 04 11 22 33 44 55");
}

#[test]
fn enhanced_reference_frame() {
    let frame = decoder(ChecksumMode::Enhanced)
        .decode_line("3A 04 11 22 33 44")
        .unwrap();

    // 0x3A + 0xAA = 0xE4
    assert_eq!(frame.checksum(), 0x1B);
    assert_eq!(frame.render(), "3A 04 11 22 33 44 1B");
}

#[test]
fn mixed_separators_match_spaces() {
    let d = decoder(ChecksumMode::Classic);
    let spaced = d.decode_line("3A 04 11 22 33 44").unwrap();
    let tabbed = d.decode_line("3A\t04\t11\t22\t33\t44\n").unwrap();
    let mixed = d.decode_line("  0x3A \t04  11\t 22 0X33 44  \r\n").unwrap();

    assert_eq!(spaced, tabbed);
    assert_eq!(spaced, mixed);
}

#[test]
fn truncated_frame_is_rejected() {
    let err = decoder(ChecksumMode::Classic)
        .decode_line("10 05 20")
        .unwrap_err();

    assert_eq!(
        err,
        CodecError::TruncatedFrame {
            declared: 5,
            available: 1
        }
    );
}

#[test]
fn failures_leave_no_state_behind() {
    let d = decoder(ChecksumMode::Enhanced);

    assert!(d.decode_line("3A 04 11 XX 33 44").is_err());
    assert!(d.decode_line("").is_err());
    assert!(d.decode_line("3A").is_err());

    let frame = d.decode_line("55 00").unwrap();
    assert_eq!(frame.checksum(), 0xAA);
}

#[test]
fn decoder_is_shareable_across_threads() {
    let d = decoder(ChecksumMode::Classic);

    std::thread::scope(|s| {
        let handles: Vec<_> = (0u8..8)
            .map(|i| {
                let d = &d;
                s.spawn(move || d.decode_line(&format!("{:02X} 01 {:02X}", i, i)))
            })
            .collect();

        for (i, h) in handles.into_iter().enumerate() {
            let frame = h.join().unwrap().unwrap();
            assert_eq!(frame.checksum(), !(i as u8));
        }
    });
}
