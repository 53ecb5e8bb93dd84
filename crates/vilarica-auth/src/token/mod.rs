//! Signed session tokens.
//!
//! The legacy system trusted a client-supplied `x-user-id` header; here
//! the server issues an HMAC-signed token at login and validates it on
//! every privileged call.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::Claims;
pub use decoder::TokenDecoder;
pub use encoder::TokenEncoder;
