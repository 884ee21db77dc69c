//! Convenient re-exports for common usage.
//!
//! This module provides a single import for the most commonly used types
//! and functions in base64url-cookie.
//!
//! # Example
//!
//! ```
//! use base64url_cookie::prelude::*;
//!
//! let stored = CookieEncoding::default().encode_value("session").unwrap();
//! assert_eq!(decode(&stored).unwrap(), "session");
//! ```

pub use crate::{
    // Cookie values
    CookieEncoding,
    // Errors
    DecodeError,
    Settings,
    Utf8Error,
    // Core encoding/decoding
    decode,
    encode,
    utf16_from_base64url,
    utf16_to_base64url,
};
