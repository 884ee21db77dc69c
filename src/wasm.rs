//! WebAssembly bindings for base64url-cookie
//!
//! Provides JavaScript-friendly API for encoding and decoding cookie values.
//! Plain string arguments are converted by wasm-bindgen, which replaces
//! unpaired surrogates; the `*_utf16` variants take and return `Uint16Array`
//! so those survive untouched.

use wasm_bindgen::prelude::*;

use crate::cookie::CookieEncoding;
use crate::encoders::base64url::{
    string_from_base64url, string_to_base64url, utf16_from_base64url, utf16_to_base64url,
};

/// Error type for WASM operations
#[wasm_bindgen]
pub struct WasmError {
    message: String,
}

#[wasm_bindgen]
impl WasmError {
    /// Get the error message
    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl From<String> for WasmError {
    fn from(message: String) -> Self {
        Self { message }
    }
}

impl From<crate::encoders::errors::Utf8Error> for WasmError {
    fn from(err: crate::encoders::errors::Utf8Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

impl From<crate::encoders::errors::DecodeError> for WasmError {
    fn from(err: crate::encoders::errors::DecodeError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// Encode a string as unpadded Base64-URL
#[wasm_bindgen(js_name = encode)]
pub fn encode_string(value: &str) -> Result<String, WasmError> {
    Ok(string_to_base64url(value)?)
}

/// Decode a Base64-URL string
#[wasm_bindgen(js_name = decode)]
pub fn decode_string(encoded: &str) -> Result<String, WasmError> {
    Ok(string_from_base64url(encoded)?)
}

/// Encode UTF-16 code units, lone surrogates included
#[wasm_bindgen(js_name = encodeUtf16)]
pub fn encode_utf16(units: &[u16]) -> Result<String, WasmError> {
    Ok(utf16_to_base64url(units)?)
}

/// Decode to UTF-16 code units, lone surrogates included
#[wasm_bindgen(js_name = decodeUtf16)]
pub fn decode_utf16(encoded: &[u16]) -> Result<Vec<u16>, WasmError> {
    Ok(utf16_from_base64url(encoded)?)
}

/// Encode a cookie value with the named encoding ("raw" or "base64url")
#[wasm_bindgen(js_name = encodeCookieValue)]
pub fn encode_cookie_value(value: &str, encoding: &str) -> Result<String, WasmError> {
    let encoding = CookieEncoding::from_str(encoding)?;
    Ok(encoding.encode_value(value)?)
}

/// Decode a cookie value stored with the named encoding
#[wasm_bindgen(js_name = decodeCookieValue)]
pub fn decode_cookie_value(value: &str, encoding: &str) -> Result<String, WasmError> {
    let encoding = CookieEncoding::from_str(encoding)?;
    Ok(encoding.decode_value(value)?)
}
