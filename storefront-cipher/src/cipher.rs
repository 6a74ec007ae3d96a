//! Encoding and decoding of the `^^ … $$` password format.

use crate::error::{CipherError, CipherResult};
use rand::Rng;

/// Marker every encoded password starts with.
pub const PREFIX: &str = "^^";

/// Marker every encoded password ends with.
pub const SUFFIX: &str = "$$";

/// Characters drawn for the random padding.
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Padding characters inserted before each plaintext character.
const PAD_PER_CHAR: usize = 2;

const BLOCK: usize = PAD_PER_CHAR + 1;

/// Returns `len` characters drawn uniformly from [`ALPHABET`].
pub fn random_string<R: Rng>(len: usize, rng: &mut R) -> String {
    (0..len)
        .map(|_| char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())]))
        .collect()
}

/// Length in characters of the encoding of a plaintext with `plain_chars`
/// characters.
#[must_use]
pub const fn encoded_len(plain_chars: usize) -> usize {
    PREFIX.len() + BLOCK * plain_chars + SUFFIX.len()
}

/// Encodes `plain` with padding from the thread-local RNG.
///
/// Returns `None` for an empty plaintext: there is nothing to store.
#[must_use]
pub fn encode_password(plain: &str) -> Option<String> {
    encode_password_with(plain, &mut rand::thread_rng())
}

/// Encodes `plain` drawing the padding from `rng`.
pub fn encode_password_with<R: Rng>(plain: &str, rng: &mut R) -> Option<String> {
    if plain.is_empty() {
        return None;
    }

    let chars: Vec<char> = plain.chars().collect();
    let padding: Vec<char> = random_string(chars.len() * PAD_PER_CHAR, rng).chars().collect();

    let mut out = String::with_capacity(encoded_len(chars.len()) + plain.len());
    out.push_str(PREFIX);
    for (i, c) in chars.iter().enumerate() {
        out.push(padding[i * PAD_PER_CHAR]);
        out.push(padding[i * PAD_PER_CHAR + 1]);
        out.push(*c);
    }
    out.push_str(SUFFIX);
    Some(out)
}

/// Recovers the plaintext from an encoded password.
///
/// Fails with a [`CipherError`] when the value is too short, lacks either
/// marker, or has a body that is not a whole number of 3-character blocks.
pub fn decode_password(encoded: &str) -> CipherResult<String> {
    let len = encoded.chars().count();
    if len < encoded_len(1) {
        return Err(CipherError::TooShort { len });
    }

    let rest = encoded.strip_prefix(PREFIX).ok_or(CipherError::MissingPrefix)?;
    let body = rest.strip_suffix(SUFFIX).ok_or(CipherError::MissingSuffix)?;

    let body: Vec<char> = body.chars().collect();
    if body.len() % BLOCK != 0 {
        return Err(CipherError::MisalignedBody { len: body.len() });
    }

    Ok(body.chunks_exact(BLOCK).map(|block| block[PAD_PER_CHAR]).collect())
}

/// Returns true if `value` decodes as an encoded password.
#[must_use]
pub fn is_encoded(value: &str) -> bool {
    decode_password(value).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn padding_comes_from_alphabet() {
        let mut rng = StdRng::seed_from_u64(1);
        let s = random_string(500, &mut rng);
        assert_eq!(s.len(), 500);
        assert!(s.bytes().all(|b| ALPHABET.contains(&b)));
    }

    #[test]
    fn same_seed_same_encoding() {
        let a = encode_password_with("hunter2", &mut StdRng::seed_from_u64(9));
        let b = encode_password_with("hunter2", &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn plaintext_sits_at_block_offset_two() {
        let enc = encode_password_with("abc", &mut StdRng::seed_from_u64(3)).unwrap();
        let body: Vec<char> = enc[2..enc.len() - 2].chars().collect();
        assert_eq!(body[2], 'a');
        assert_eq!(body[5], 'b');
        assert_eq!(body[8], 'c');
    }
}
