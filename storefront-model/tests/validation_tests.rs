use storefront_model::validation::{is_valid_email, is_valid_mobile, is_valid_password, is_valid_username};

// ── Usernames ────────────────────────────────────────────────────

#[test]
fn usernames() {
    for ok in ["alice", "Bob_Smith", "_____", "abcdefghijklmnop"] {
        assert!(is_valid_username(ok), "{ok}");
    }
    for bad in ["", "abcd", "alice1", "al ice", "alicé", "alice\n"] {
        assert!(!is_valid_username(bad), "{bad:?}");
    }
}

// ── Passwords ────────────────────────────────────────────────────

#[test]
fn passwords_need_letter_and_digit() {
    assert!(is_valid_password("pw123"));
    assert!(is_valid_password("1a!@#"));
    assert!(!is_valid_password("abcdef"));
    assert!(!is_valid_password("123456"));
}

#[test]
fn passwords_need_five_characters() {
    assert!(!is_valid_password("a1b2"));
    assert!(is_valid_password("a1b2c"));
}

#[test]
fn passwords_are_single_line() {
    assert!(!is_valid_password("abc12\nxyz"));
}

// ── Contact details ──────────────────────────────────────────────

#[test]
fn emails() {
    for ok in ["a@b.c", "first.last+tag@mail-host.com.au", "x_y@z"] {
        assert!(is_valid_email(ok), "{ok}");
    }
    for bad in ["", "plain", "@host", "user@", "a b@c.d", "a@b@c"] {
        assert!(!is_valid_email(bad), "{bad:?}");
    }
}

#[test]
fn mobiles() {
    assert!(is_valid_mobile("0412345678"));
    assert!(is_valid_mobile("0398765432"));
    assert!(!is_valid_mobile("0512345678"));
    assert!(!is_valid_mobile("041234567"));
    assert!(!is_valid_mobile("04123456789"));
    assert!(!is_valid_mobile("04-1234567"));
}
