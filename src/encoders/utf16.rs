//! Bridges between string data and the UTF-8 byte codec.
//!
//! Native strings here are sequences of UTF-16 code units, the representation
//! cookie values have on the JavaScript side. They may contain surrogate
//! pairs and, unlike Rust strings, unpaired surrogates.

use super::errors::Utf8Error;
use super::utf8::{MAX_CODEPOINT, codepoint_to_utf8};

const HIGH_SURROGATES: std::ops::RangeInclusive<u16> = 0xd800..=0xdbff;

/// Encodes UTF-16 code units as UTF-8, calling `emit` once per byte.
///
/// A high surrogate is always combined with the unit that follows it, which
/// is consumed whether or not it is a low surrogate; a high surrogate at the
/// very end combines with zero low bits. Every other unit, including a lone
/// low surrogate, is encoded as its own codepoint.
pub fn string_to_utf8<I>(units: I, mut emit: impl FnMut(u8)) -> Result<(), Utf8Error>
where
    I: IntoIterator<Item = u16>,
{
    let mut units = units.into_iter();

    while let Some(unit) = units.next() {
        let codepoint = if HIGH_SURROGATES.contains(&unit) {
            let high = (unit as u32 - 0xd800) << 10;
            let low = units
                .next()
                .map_or(0, |next| (next as u32).wrapping_sub(0xdc00) & 0xffff);
            (low | high) + 0x10000
        } else {
            unit as u32
        };

        codepoint_to_utf8(codepoint, &mut emit)?;
    }

    Ok(())
}

/// Splits a codepoint into one code unit, or a surrogate pair above U+FFFF.
pub fn codepoint_to_utf16(codepoint: u32, mut push: impl FnMut(u16)) -> Result<(), Utf8Error> {
    if codepoint <= 0xffff {
        push(codepoint as u16);
    } else if codepoint <= MAX_CODEPOINT {
        let offset = codepoint - 0x10000;
        push(0xd800 | (offset >> 10) as u16);
        push(0xdc00 | (offset & 0x3ff) as u16);
    } else {
        return Err(Utf8Error::InvalidCodepoint(codepoint));
    }

    Ok(())
}

/// Converts a codepoint to a Rust `char`. Surrogate values have no `char`
/// representation and are rejected along with out-of-range values.
pub fn codepoint_to_char(codepoint: u32) -> Result<char, Utf8Error> {
    char::from_u32(codepoint).ok_or(Utf8Error::InvalidCodepoint(codepoint))
}

/// Destination for decoded codepoints.
pub trait CodepointSink {
    fn push_codepoint(&mut self, codepoint: u32) -> Result<(), Utf8Error>;
}

impl CodepointSink for String {
    fn push_codepoint(&mut self, codepoint: u32) -> Result<(), Utf8Error> {
        self.push(codepoint_to_char(codepoint)?);
        Ok(())
    }
}

impl CodepointSink for Vec<u16> {
    fn push_codepoint(&mut self, codepoint: u32) -> Result<(), Utf8Error> {
        codepoint_to_utf16(codepoint, |unit| self.push(unit))
    }
}

impl<S: CodepointSink + ?Sized> CodepointSink for &mut S {
    fn push_codepoint(&mut self, codepoint: u32) -> Result<(), Utf8Error> {
        (**self).push_codepoint(codepoint)
    }
}
