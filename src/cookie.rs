use serde::{Deserialize, Serialize};

use crate::encoders::base64url::{string_from_base64url, string_to_base64url};
use crate::encoders::errors::{DecodeError, Utf8Error};

/// How a session payload is written into a cookie value.
///
/// `Base64Url` is the default: it keeps arbitrary Unicode intact and only
/// produces characters that are legal in a cookie value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CookieEncoding {
    /// Store the string unmodified.
    Raw,
    /// Store the UTF-8 bytes of the string as unpadded Base64-URL.
    #[default]
    Base64Url,
}

impl CookieEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            CookieEncoding::Raw => "raw",
            CookieEncoding::Base64Url => "base64url",
        }
    }

    /// Parse an encoding name. Matching is case-insensitive.
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "raw" => Ok(CookieEncoding::Raw),
            "base64url" | "base64-url" => Ok(CookieEncoding::Base64Url),
            _ => Err(format!(
                "Unknown cookie encoding: '{}' (expected 'raw' or 'base64url')",
                s
            )),
        }
    }

    /// Turns a raw value into what gets stored in the cookie.
    pub fn encode_value(&self, value: &str) -> Result<String, Utf8Error> {
        match self {
            CookieEncoding::Raw => Ok(value.to_string()),
            CookieEncoding::Base64Url => string_to_base64url(value),
        }
    }

    /// Recovers the raw value from a stored cookie value.
    pub fn decode_value(&self, value: &str) -> Result<String, DecodeError> {
        match self {
            CookieEncoding::Raw => Ok(value.to_string()),
            CookieEncoding::Base64Url => string_from_base64url(value),
        }
    }
}

/// True for the characters RFC 6265 allows in a cookie value: printable
/// ASCII except space, `"`, `,`, `;` and `\`.
pub fn is_cookie_octet(c: char) -> bool {
    matches!(c, '\x21' | '\x23'..='\x2b' | '\x2d'..='\x3a' | '\x3c'..='\x5b' | '\x5d'..='\x7e')
}

/// True when `value` can be stored in a cookie without further encoding.
pub fn is_cookie_safe(value: &str) -> bool {
    value.chars().all(is_cookie_octet)
}

impl std::fmt::Display for CookieEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SESSION: &str = r#"{"access_token":"eyJhbGciOi.x.y","user":{"name":"Zoë 😀"}}"#;

    #[test]
    fn test_default_is_base64url() {
        assert_eq!(CookieEncoding::default(), CookieEncoding::Base64Url);
    }

    #[test]
    fn test_raw_passes_through() {
        let encoding = CookieEncoding::Raw;
        assert_eq!(encoding.encode_value(SESSION).unwrap(), SESSION);
        assert_eq!(encoding.decode_value("not base64 !").unwrap(), "not base64 !");
    }

    #[test]
    fn test_base64url_round_trip() {
        let encoding = CookieEncoding::Base64Url;
        let stored = encoding.encode_value(SESSION).unwrap();
        assert!(crate::core::alphabet::is_url_safe(&stored));
        assert_eq!(encoding.decode_value(&stored).unwrap(), SESSION);
    }

    #[test]
    fn test_cookie_octets() {
        assert!(is_cookie_safe("a.b!c~d_e-f/g=h"));
        assert!(is_cookie_safe(""));
        for unsafe_value in ["a;b", "a b", "a,b", "a\"b", "a\\b", "Zoë", "a\tb"] {
            assert!(!is_cookie_safe(unsafe_value), "{:?} should be rejected", unsafe_value);
        }
    }

    #[test]
    fn test_base64url_output_is_cookie_safe() {
        let stored = CookieEncoding::Base64Url.encode_value(SESSION).unwrap();
        assert!(is_cookie_safe(&stored));
        assert!(!is_cookie_safe(SESSION));
    }

    #[test]
    fn test_from_str() {
        assert_eq!(CookieEncoding::from_str("raw").unwrap(), CookieEncoding::Raw);
        assert_eq!(CookieEncoding::from_str("Base64URL").unwrap(), CookieEncoding::Base64Url);
        assert!(CookieEncoding::from_str("base64").is_err());
    }

    #[test]
    fn test_serde_names() {
        #[derive(Deserialize, Serialize)]
        struct Wrapper {
            encoding: CookieEncoding,
        }

        let parsed: Wrapper = toml::from_str("encoding = \"raw\"").unwrap();
        assert_eq!(parsed.encoding, CookieEncoding::Raw);

        let rendered = toml::to_string(&Wrapper {
            encoding: CookieEncoding::Base64Url,
        })
        .unwrap();
        assert_eq!(rendered.trim(), "encoding = \"base64url\"");
    }
}
