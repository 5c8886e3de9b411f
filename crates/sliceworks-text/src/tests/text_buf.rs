// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;
use sliceworks_seq::GrowableSeq;

use crate::{TextBuf, TextError};

// =============================================================================
// from(), from_utf8(), from_seq()
// =============================================================================

#[test]
fn test_from_str_and_string_match() {
    let a = TextBuf::from("hello world");
    let b = TextBuf::from(String::from("hello world"));

    assert_eq!(a, b);
    assert_eq!(a.len(), 11);
    assert!(!a.shares_text(&b));
}

#[test]
fn test_from_utf8_bytes() {
    let bytes = vec![b'h', b'e', b'l', b'l', b'o', b' ', b'w', b'o', b'r', b'l', b'd'];
    let text = TextBuf::from_utf8(bytes).expect("Failed to from_utf8(..)");

    assert_eq!(text, "hello world");
}

#[test]
fn test_from_utf8_rejects_invalid() {
    let result = TextBuf::from_utf8(vec![b'o', b'k', 0xff, b'!']);

    assert_eq!(result, Err(TextError::InvalidUtf8 { valid_up_to: 2 }));
}

#[test]
fn test_from_seq_copies() {
    let mut seq = GrowableSeq::from(b"hello".as_slice());
    let text = TextBuf::from_seq(&seq).expect("Failed to from_seq(..)");

    seq.set(0, b'j').expect("Failed to set(..)");

    assert_eq!(text, "hello");
}

#[test]
fn test_default_is_empty() {
    let text = TextBuf::default();

    assert!(text.is_empty());
    assert_eq!(text.as_str(), "");
}

// =============================================================================
// slice(), prefix(), suffix()
// =============================================================================

#[test]
fn test_slicing_shares_text() {
    let text = TextBuf::from("hello world");
    let hello = text.prefix(5).expect("Failed to prefix(..)");
    let world = text.suffix(6).expect("Failed to suffix(..)");

    assert_eq!(hello.as_str(), "hello");
    assert_eq!(world.as_str(), "world");
    assert!(hello.shares_text(&text));
    assert!(world.shares_text(&hello));
}

#[test]
fn test_slice_of_slice_is_relative() {
    let text = TextBuf::from("hello world");
    let world = text.suffix(6).expect("Failed to suffix(..)");
    let orl = world.slice(1, 4).expect("Failed to slice(..)");

    assert_eq!(orl, "orl");
    assert_eq!(orl.len(), 3);
}

#[test]
fn test_slice_out_of_range() {
    let text = TextBuf::from("hello");

    assert_eq!(
        text.slice(0, 6),
        Err(TextError::IndexOutOfRange {
            start: 0,
            end: 6,
            len: 5
        })
    );
    assert_eq!(
        text.slice(3, 2),
        Err(TextError::IndexOutOfRange {
            start: 3,
            end: 2,
            len: 5
        })
    );
    assert!(text.slice(5, 5).expect("Failed to slice(..)").is_empty());
}

#[test]
fn test_slice_rejects_split_char() {
    // 'é' is two bytes: 0xC3 0xA9.
    let text = TextBuf::from("café!");

    assert_eq!(
        text.slice(0, 4),
        Err(TextError::NotCharBoundary { index: 4 })
    );
    assert_eq!(text.slice(0, 5).expect("Failed to slice(..)"), "café");
    assert_eq!(text.suffix(5).expect("Failed to suffix(..)"), "!");
}

// =============================================================================
// to_seq(), Display, Debug, Deref
// =============================================================================

#[test]
fn test_to_seq_copies_bytes() {
    let text = TextBuf::from("hello world");
    let mut seq = text.to_seq();

    assert_eq!(seq.len(), 11);
    assert_eq!(seq.capacity(), 11);

    seq.filter_in_place(|byte| *byte == b' ');
    assert_eq!(seq.to_vec(), b"helloworld");
    assert_eq!(text, "hello world");
}

#[test]
fn test_display_and_debug() {
    let text = TextBuf::from("hello world");
    let hello = text.prefix(5).expect("Failed to prefix(..)");

    assert_eq!(format!("{hello} {}", text.suffix(6).expect("Failed to suffix(..)")), "hello world");
    assert_eq!(format!("{hello:?}"), "TextBuf { text: \"hello\", len: 5 }");
}

#[test]
fn test_deref_to_str() {
    let text = TextBuf::from("hello world");

    assert!(text.starts_with("hello"));
    assert_eq!(text.split(' ').count(), 2);
}

proptest! {
    #[test]
    fn slice_matches_str_slicing(
        input in "\\PC{0,24}",
        a in 0..64usize,
        b in 0..64usize
    ) {
        let text = TextBuf::from(input.as_str());
        let (start, end) = if a <= b { (a, b) } else { (b, a) };

        match input.get(start..end) {
            Some(expected) => {
                let sliced = text.slice(start, end).expect("Failed to slice(..)");
                prop_assert_eq!(sliced.as_str(), expected);
                prop_assert!(sliced.shares_text(&text));
            }
            None => prop_assert!(text.slice(start, end).is_err()),
        }
    }
}
