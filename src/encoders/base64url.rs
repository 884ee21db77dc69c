//! Base64-URL on top of the UTF-8 layer.
//!
//! Encoding: string -> UTF-8 bytes -> 6-bit groups -> symbols, never padded.
//! Decoding: symbols -> 6-bit groups -> bytes -> UTF-8 state machine ->
//! codepoints -> string. Whitespace and `=` are skipped, leftover bits that
//! do not fill a byte are dropped.

use crate::core::alphabet::{self, Symbol};

use super::errors::{DecodeError, Utf8Error};
use super::utf16::{CodepointSink, string_to_utf8};
use super::utf8::Utf8Decoder;

/// Bit queue turning bytes into Base64-URL symbols.
///
/// Fewer than 6 bits stay queued between calls to [`push_byte`](Self::push_byte).
#[derive(Debug, Default)]
pub struct Base64UrlEncoder {
    output: String,
    queue: u32,
    queued_bits: u32,
}

impl Base64UrlEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an encoder whose output can hold the symbols for `bytes`
    /// input bytes without reallocating.
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            output: String::with_capacity((bytes * 8).div_ceil(6)),
            ..Self::default()
        }
    }

    pub fn push_byte(&mut self, byte: u8) {
        self.queue = (self.queue << 8) | byte as u32;
        self.queued_bits += 8;

        while self.queued_bits >= 6 {
            self.queued_bits -= 6;
            self.output.push(alphabet::encode(self.queue >> self.queued_bits));
        }
    }

    /// Flushes a partial group, zero-filled on the right, and returns the
    /// encoded text. No `=` padding is ever added.
    pub fn finish(mut self) -> String {
        if self.queued_bits > 0 {
            self.output
                .push(alphabet::encode(self.queue << (6 - self.queued_bits)));
        }
        self.output
    }
}

/// Bit queue turning 6-bit values into bytes, and bytes into codepoints for
/// a [`CodepointSink`].
#[derive(Debug)]
pub struct Base64UrlDecoder<S> {
    sink: S,
    utf8: Utf8Decoder,
    queue: u32,
    queued_bits: u32,
}

impl<S: CodepointSink> Base64UrlDecoder<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            utf8: Utf8Decoder::new(),
            queue: 0,
            queued_bits: 0,
        }
    }

    /// Queues one 6-bit value and forwards every completed byte.
    pub fn push_value(&mut self, value: u8) -> Result<(), Utf8Error> {
        self.queue = (self.queue << 6) | (value & 0x3f) as u32;
        self.queued_bits += 6;

        while self.queued_bits >= 8 {
            self.queued_bits -= 8;
            let byte = (self.queue >> self.queued_bits) as u8;
            if let Some(codepoint) = self.utf8.push(byte)? {
                self.sink.push_codepoint(codepoint)?;
            }
        }

        Ok(())
    }

    /// Drops any leftover bits and returns the sink.
    ///
    /// A UTF-8 sequence cut short by the end of input is dropped as well.
    pub fn finish(self) -> S {
        self.sink
    }
}

/// Encodes a Rust string.
pub fn string_to_base64url(s: &str) -> Result<String, Utf8Error> {
    let mut encoder = Base64UrlEncoder::with_capacity(s.len());
    string_to_utf8(s.encode_utf16(), |byte| encoder.push_byte(byte))?;
    Ok(encoder.finish())
}

/// Encodes a UTF-16 string, surrogates and all.
pub fn utf16_to_base64url(units: &[u16]) -> Result<String, Utf8Error> {
    let mut encoder = Base64UrlEncoder::with_capacity(units.len() * 3);
    string_to_utf8(units.iter().copied(), |byte| encoder.push_byte(byte))?;
    Ok(encoder.finish())
}

/// Decodes into a Rust string.
///
/// Fails on the first character outside the alphabet (whitespace and `=`
/// excepted), reporting its zero-based index. Every character before it is
/// ASCII, so the index is the same whether counted in chars, bytes or UTF-16
/// units.
pub fn string_from_base64url(s: &str) -> Result<String, DecodeError> {
    let sink = String::with_capacity(s.len() * 6 / 8);
    decode_units(s.chars().map(|c| c as u32), || s.to_string(), sink)
}

/// Decodes into UTF-16 code units. Codepoints in the surrogate range are
/// kept as single units rather than rejected.
pub fn utf16_from_base64url(units: &[u16]) -> Result<Vec<u16>, DecodeError> {
    let sink = Vec::with_capacity(units.len() * 6 / 8);
    decode_units(
        units.iter().map(|&unit| unit as u32),
        || String::from_utf16_lossy(units),
        sink,
    )
}

fn decode_units<S, I>(units: I, input: impl FnOnce() -> String, sink: S) -> Result<S, DecodeError>
where
    S: CodepointSink,
    I: IntoIterator<Item = u32>,
{
    let mut decoder = Base64UrlDecoder::new(sink);

    for (position, unit) in units.into_iter().enumerate() {
        match alphabet::decode_unit(unit) {
            Symbol::Value(value) => decoder.push_value(value)?,
            Symbol::Ignore => continue,
            Symbol::Invalid => {
                return Err(match char::from_u32(unit) {
                    Some(c) => DecodeError::invalid_character(c, position, &input()),
                    None => DecodeError::invalid_code_unit(unit as u16, position, &input()),
                });
            }
        }
    }

    Ok(decoder.finish())
}
