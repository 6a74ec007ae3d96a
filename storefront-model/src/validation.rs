//! Format checks applied to user input before anything is written.
//!
//! Each check returns `true` when the value is acceptable. Callers turn a
//! `false` into a validation error naming the field.

use regex::Regex;
use std::sync::LazyLock;

/// Minimum length for user names and passwords.
pub const MIN_CREDENTIAL_LEN: usize = 5;

static USERNAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_]{5,}$").expect("valid username pattern"));

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.\-]+@[A-Za-z0-9.\-]+$").expect("valid email pattern")
});

static MOBILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(04|03)[0-9]{8}$").expect("valid mobile pattern"));

/// Letters and underscores only, at least five of them.
pub fn is_valid_username(name: &str) -> bool {
    USERNAME.is_match(name)
}

/// At least five characters on one line, with at least one ASCII letter and
/// one ASCII digit.
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_CREDENTIAL_LEN
        && !password.contains(['\n', '\r'])
        && password.chars().any(|c| c.is_ascii_alphabetic())
        && password.chars().any(|c| c.is_ascii_digit())
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Ten digits starting with `04` or `03`.
pub fn is_valid_mobile(mobile: &str) -> bool {
    MOBILE.is_match(mobile)
}
