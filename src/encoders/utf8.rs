//! Push-style UTF-8 transcoding.
//!
//! Encoding turns one codepoint into 1-4 bytes handed to a callback, leading
//! byte first. Decoding is a byte-at-a-time state machine that yields a
//! codepoint whenever a sequence completes.
//!
//! The decoder is lenient: overlong forms and UTF-8 encoded
//! surrogates are accepted, and any byte `>= 0x80` is taken as a continuation
//! byte once a sequence has started. Only byte streams that cannot be UTF-8
//! at all are rejected.

use super::errors::Utf8Error;

/// Highest Unicode codepoint.
pub const MAX_CODEPOINT: u32 = 0x10ffff;

/// Encodes `codepoint` as UTF-8, calling `emit` once per byte.
///
/// Fails with [`Utf8Error::InvalidCodepoint`] above U+10FFFF. Surrogate
/// values are encoded like any other 3-byte codepoint.
pub fn codepoint_to_utf8(codepoint: u32, mut emit: impl FnMut(u8)) -> Result<(), Utf8Error> {
    if codepoint <= 0x7f {
        emit(codepoint as u8);
    } else if codepoint <= 0x7ff {
        emit(0xc0 | (codepoint >> 6) as u8);
        emit(0x80 | (codepoint & 0x3f) as u8);
    } else if codepoint <= 0xffff {
        emit(0xe0 | (codepoint >> 12) as u8);
        emit(0x80 | ((codepoint >> 6) & 0x3f) as u8);
        emit(0x80 | (codepoint & 0x3f) as u8);
    } else if codepoint <= MAX_CODEPOINT {
        emit(0xf0 | (codepoint >> 18) as u8);
        emit(0x80 | ((codepoint >> 12) & 0x3f) as u8);
        emit(0x80 | ((codepoint >> 6) & 0x3f) as u8);
        emit(0x80 | (codepoint & 0x3f) as u8);
    } else {
        return Err(Utf8Error::InvalidCodepoint(codepoint));
    }

    Ok(())
}

/// Incremental UTF-8 decoder.
///
/// Holds the number of continuation bytes still expected and the codepoint
/// bits gathered so far. Returns to the idle state after every complete
/// codepoint.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Utf8Decoder {
    remaining: u8,
    codepoint: u32,
}

impl Utf8Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no multi-byte sequence is in progress.
    pub fn is_idle(&self) -> bool {
        self.remaining == 0
    }

    /// Feeds one byte, returning a codepoint when it completes a sequence.
    pub fn push(&mut self, byte: u8) -> Result<Option<u32>, Utf8Error> {
        if self.remaining == 0 {
            if byte <= 0x7f {
                return Ok(Some(byte as u32));
            }

            // Leading ones give the sequence length
            let (length, payload) = match byte.leading_ones() {
                2 => (2, byte & 0x1f),
                3 => (3, byte & 0x0f),
                4 => (4, byte & 0x07),
                _ => return Err(Utf8Error::InvalidSequence { byte }),
            };

            self.remaining = length - 1;
            self.codepoint = payload as u32;
            return Ok(None);
        }

        if byte <= 0x7f {
            return Err(Utf8Error::InvalidSequence { byte });
        }

        self.codepoint = (self.codepoint << 6) | (byte & 0x3f) as u32;
        self.remaining -= 1;

        if self.remaining == 0 {
            Ok(Some(self.codepoint))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_to_vec(codepoint: u32) -> Result<Vec<u8>, Utf8Error> {
        let mut bytes = Vec::new();
        codepoint_to_utf8(codepoint, |b| bytes.push(b))?;
        Ok(bytes)
    }

    fn decode_all(bytes: &[u8]) -> Result<Vec<u32>, Utf8Error> {
        let mut decoder = Utf8Decoder::new();
        let mut codepoints = Vec::new();
        for &byte in bytes {
            if let Some(codepoint) = decoder.push(byte)? {
                codepoints.push(codepoint);
            }
        }
        Ok(codepoints)
    }

    #[test]
    fn test_length_bands() {
        assert_eq!(encode_to_vec(0x00).unwrap(), vec![0x00]);
        assert_eq!(encode_to_vec(0x7f).unwrap(), vec![0x7f]);
        assert_eq!(encode_to_vec(0x80).unwrap(), vec![0xc2, 0x80]);
        assert_eq!(encode_to_vec(0x7ff).unwrap(), vec![0xdf, 0xbf]);
        assert_eq!(encode_to_vec(0x800).unwrap(), vec![0xe0, 0xa0, 0x80]);
        assert_eq!(encode_to_vec(0xffff).unwrap(), vec![0xef, 0xbf, 0xbf]);
        assert_eq!(encode_to_vec(0x10000).unwrap(), vec![0xf0, 0x90, 0x80, 0x80]);
        assert_eq!(encode_to_vec(0x10ffff).unwrap(), vec![0xf4, 0x8f, 0xbf, 0xbf]);
    }

    #[test]
    fn test_matches_std_encoding() {
        for c in ['a', 'é', '€', '😀', '𠀀'] {
            let mut buf = [0u8; 4];
            let expected = c.encode_utf8(&mut buf).as_bytes().to_vec();
            assert_eq!(encode_to_vec(c as u32).unwrap(), expected);
        }
    }

    #[test]
    fn test_surrogate_encodes_as_three_bytes() {
        assert_eq!(encode_to_vec(0xd800).unwrap(), vec![0xed, 0xa0, 0x80]);
    }

    #[test]
    fn test_out_of_range_codepoint() {
        assert_eq!(encode_to_vec(0x110000), Err(Utf8Error::InvalidCodepoint(0x110000)));
    }

    #[test]
    fn test_decode_multibyte() {
        let bytes = "aé€😀".as_bytes();
        assert_eq!(decode_all(bytes).unwrap(), vec![0x61, 0xe9, 0x20ac, 0x1f600]);
    }

    #[test]
    fn test_decoder_returns_to_idle() {
        let mut decoder = Utf8Decoder::new();
        assert!(decoder.is_idle());
        assert_eq!(decoder.push(0xe2), Ok(None));
        assert!(!decoder.is_idle());
        assert_eq!(decoder.push(0x82), Ok(None));
        assert_eq!(decoder.push(0xac), Ok(Some(0x20ac)));
        assert!(decoder.is_idle());
    }

    #[test]
    fn test_ascii_inside_sequence_fails() {
        assert_eq!(decode_all(&[0xc0, 0x20]), Err(Utf8Error::InvalidSequence { byte: 0x20 }));
    }

    #[test]
    fn test_bad_leading_bytes_fail() {
        // Lone continuation byte
        assert_eq!(decode_all(&[0x80]), Err(Utf8Error::InvalidSequence { byte: 0x80 }));
        // Five and six byte forms
        assert_eq!(decode_all(&[0xf8]), Err(Utf8Error::InvalidSequence { byte: 0xf8 }));
        assert_eq!(decode_all(&[0xfc]), Err(Utf8Error::InvalidSequence { byte: 0xfc }));
        assert_eq!(decode_all(&[0xff]), Err(Utf8Error::InvalidSequence { byte: 0xff }));
    }

    #[test]
    fn test_overlong_forms_are_accepted() {
        // 0xc0 0x80 is an overlong NUL
        assert_eq!(decode_all(&[0xc0, 0x80]).unwrap(), vec![0]);
        assert_eq!(decode_all(&[0xe0, 0x81, 0x81]).unwrap(), vec![0x41]);
    }

    #[test]
    fn test_encoded_surrogate_is_accepted() {
        assert_eq!(decode_all(&[0xed, 0xa0, 0x80]).unwrap(), vec![0xd800]);
    }

    #[test]
    fn test_four_byte_form_can_exceed_unicode_range() {
        // Range checks happen when the codepoint is turned into string data
        assert_eq!(decode_all(&[0xf7, 0xbf, 0xbf, 0xbf]).unwrap(), vec![0x1fffff]);
    }
}
