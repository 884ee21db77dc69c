//! UTF-8 aware Base64-URL codec for cookie values.
//!
//! Strings are converted to UTF-8, packed into unpadded URL-safe Base64
//! (`A-Z a-z 0-9 - _`) and back again. Decoding skips whitespace and `=`,
//! rejects any other foreign character with its position, and drops trailing
//! bits that do not fill a byte.
//!
//! ```
//! let stored = base64url_cookie::encode("héllo 😀").unwrap();
//! assert_eq!(stored, "aMOpbGxvIPCfmIA");
//! assert_eq!(base64url_cookie::decode(&stored).unwrap(), "héllo 😀");
//! ```
//!
//! JavaScript-style strings, which may hold unpaired surrogates, go through
//! [`utf16_to_base64url`] and [`utf16_from_base64url`] instead.

mod cookie;
mod core;
mod encoders;

pub mod prelude;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use crate::cookie::{CookieEncoding, is_cookie_octet, is_cookie_safe};
pub use crate::core::alphabet;
pub use crate::core::config::{ConfigError, Settings};
pub use crate::encoders::base64url::{
    Base64UrlDecoder, Base64UrlEncoder, string_from_base64url, string_to_base64url,
    utf16_from_base64url, utf16_to_base64url,
};
pub use crate::encoders::errors::{DecodeError, Utf8Error};
pub use crate::encoders::utf16::{
    CodepointSink, codepoint_to_char, codepoint_to_utf16, string_to_utf8,
};
pub use crate::encoders::utf8::{MAX_CODEPOINT, Utf8Decoder, codepoint_to_utf8};

/// Encodes a string as unpadded Base64-URL over its UTF-8 bytes.
pub fn encode(raw: &str) -> Result<String, Utf8Error> {
    string_to_base64url(raw)
}

/// Decodes a Base64-URL string produced by [`encode`].
pub fn decode(encoded: &str) -> Result<String, DecodeError> {
    string_from_base64url(encoded)
}
