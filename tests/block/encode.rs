// Integration tests for explicit token encoding (`encode_tokens`).
//
// Coverage:
//   - each command class produced from a hand-built parse
//   - stuffed trailing literals after a match
//   - validation errors: coverage, bad distance, mismatch, unencodable

use lzo1x::block::{decompress_to_vec, encode_tokens, EncodeError, Token};

fn encode_and_check(input: &[u8], tokens: &[Token]) -> Vec<u8> {
    let packed = encode_tokens(input, tokens).unwrap();
    assert_eq!(decompress_to_vec(&packed).unwrap(), input);
    packed
}

#[test]
fn literals_only() {
    assert_eq!(
        encode_and_check(b"hello", &[Token::Literals(5)]),
        vec![22, b'h', b'e', b'l', b'l', b'o', 0x11, 0, 0]
    );
}

#[test]
fn split_literal_tokens_are_merged() {
    let merged = encode_tokens(b"hello", &[Token::Literals(2), Token::Literals(3)]).unwrap();
    assert_eq!(merged, encode_tokens(b"hello", &[Token::Literals(5)]).unwrap());
}

#[test]
fn m1_after_short_run() {
    let packed = encode_and_check(
        b"abab",
        &[Token::Literals(2), Token::Match { distance: 2, length: 2 }],
    );
    assert_eq!(packed, vec![19, b'a', b'b', 0b0000_0100, 0, 0x11, 0, 0]);
}

#[test]
fn m2_with_trailing_literal() {
    let packed = encode_and_check(
        b"abcabcz",
        &[Token::Literals(3), Token::Match { distance: 3, length: 3 }, Token::Literals(1)],
    );
    assert_eq!(packed, vec![20, b'a', b'b', b'c', 0b0100_1001, 0, b'z', 0x11, 0, 0]);
}

#[test]
fn m3_with_length_extension() {
    let input = vec![b'x'; 300];
    let packed = encode_and_check(&input, &[Token::Literals(1), Token::Match { distance: 1, length: 299 }]);
    // 299 - 33 = 266 = one zero byte (255) + 11.
    assert_eq!(&packed[2..5], &[32, 0, 11]);
}

#[test]
fn m4_distance() {
    let mut input = b"0123456789".to_vec();
    input.extend(std::iter::repeat(b'.').take(20_000));
    input.extend_from_slice(b"0123456789");
    let distance = input.len() - 10;
    encode_and_check(
        &input,
        &[
            Token::Literals(11),
            Token::Match { distance: 1, length: 19_999 },
            Token::Match { distance, length: 10 },
        ],
    );
}

#[test]
fn m1_far_form_after_long_run() {
    // Length 3 at a distance between 2049 and 3072 fits the two-byte form once
    // four or more literals precede it.
    let mut input: Vec<u8> = (0..2500u32).map(|i| (i * 7 % 251) as u8).collect();
    let distance = 2500 - 100;
    let copied = input[100..103].to_vec();
    input.extend_from_slice(&copied);
    let packed = encode_and_check(
        &input,
        &[Token::Literals(2500), Token::Match { distance, length: 3 }],
    );
    // end marker (3) + 2-byte match + run bytes + run header (2 + 2482/255).
    assert_eq!(packed.len(), 3 + 2 + 2500 + 2 + 2482 / 255);
}

#[test]
fn coverage_errors() {
    assert_eq!(
        encode_tokens(b"abc", &[Token::Literals(2)]),
        Err(EncodeError::Coverage { covered: 2, expected: 3 })
    );
    assert_eq!(
        encode_tokens(b"abc", &[Token::Literals(4)]),
        Err(EncodeError::Coverage { covered: 4, expected: 3 })
    );
}

#[test]
fn distance_errors() {
    assert_eq!(
        encode_tokens(b"aaaa", &[Token::Literals(1), Token::Match { distance: 2, length: 3 }]),
        Err(EncodeError::BadDistance { position: 1, distance: 2 })
    );
    assert_eq!(
        encode_tokens(b"aaaa", &[Token::Literals(1), Token::Match { distance: 0, length: 3 }]),
        Err(EncodeError::BadDistance { position: 1, distance: 0 })
    );
}

#[test]
fn mismatched_match_is_rejected() {
    assert_eq!(
        encode_tokens(b"abcxyz", &[Token::Literals(3), Token::Match { distance: 3, length: 3 }]),
        Err(EncodeError::Mismatch { position: 3 })
    );
}

#[test]
fn m1_without_literals_is_unencodable() {
    // A two-byte match directly after another match has no encoding.
    let input = b"ababab";
    assert_eq!(
        encode_tokens(
            input,
            &[
                Token::Literals(2),
                Token::Match { distance: 2, length: 2 },
                Token::Match { distance: 2, length: 2 },
            ],
        ),
        Err(EncodeError::Unencodable { distance: 2, length: 2 })
    );
}
