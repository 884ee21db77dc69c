pub mod base64url;
pub mod errors;
pub mod utf16;
pub mod utf8;

// Re-export error types for public API
pub use errors::{DecodeError, Utf8Error};
