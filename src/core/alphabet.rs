//! URL-safe Base64 alphabet and its decode table.
//!
//! Both tables are built at compile time and never change afterwards.

/// The 64 URL-safe symbols, indexed by their 6-bit value.
pub const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Characters that may appear in encoded input but carry no bits.
pub const IGNORED: &[u8; 5] = b" \t\n\r=";

/// Classification of one input character during decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// An alphabet symbol carrying 6 bits.
    Value(u8),
    /// Whitespace or padding, skipped without touching the bit queue.
    Ignore,
    /// Anything else; decoding must stop.
    Invalid,
}

const DECODE_TABLE: [Symbol; 128] = build_decode_table();

const fn build_decode_table() -> [Symbol; 128] {
    let mut table = [Symbol::Invalid; 128];

    let mut i = 0;
    while i < IGNORED.len() {
        table[IGNORED[i] as usize] = Symbol::Ignore;
        i += 1;
    }

    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = Symbol::Value(i as u8);
        i += 1;
    }

    table
}

/// Returns the symbol for a 6-bit value. Only the low 6 bits are used.
#[inline]
pub fn encode(value: u32) -> char {
    ALPHABET[(value & 0x3f) as usize] as char
}

/// Classifies an input character. Non-ASCII characters are always invalid.
#[inline]
pub fn decode(c: char) -> Symbol {
    decode_unit(c as u32)
}

/// Classifies a raw code unit (ASCII range or not).
#[inline]
pub fn decode_unit(unit: u32) -> Symbol {
    match DECODE_TABLE.get(unit as usize) {
        Some(symbol) => *symbol,
        None => Symbol::Invalid,
    }
}

/// True when every character of `s` is one of the 64 alphabet symbols.
pub fn is_url_safe(s: &str) -> bool {
    s.chars().all(|c| matches!(decode(c), Symbol::Value(_)))
}

/// Human-readable summary of the accepted characters, used in error hints.
pub const VALID_CHARS: &str = "A-Z a-z 0-9 - _ (whitespace and '=' are ignored)";
