//! Password obfuscation for the storefront user file.
//!
//! **This is not encryption.** The scheme interleaves random padding with the
//! plaintext so that passwords are not stored verbatim, but anyone who knows
//! the layout recovers the plaintext with no secret at all. It exists for
//! compatibility with existing user files and offers no confidentiality.
//!
//! Encoded layout for a plaintext of `n` characters:
//!
//! ```text
//! ^^ r r p0 r r p1 … r r p(n-1) $$
//! ```
//!
//! where each `r` is a random character from `[A-Za-z0-9]`.

mod cipher;
mod error;

pub use cipher::{
    ALPHABET, PREFIX, SUFFIX, decode_password, encode_password, encode_password_with,
    encoded_len, is_encoded, random_string,
};
pub use error::{CipherError, CipherResult};
