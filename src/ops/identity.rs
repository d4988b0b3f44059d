use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid"));

/// Error type for sign-in
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("please enter a valid email")]
    InvalidEmail,
}

/// Check that an identity string looks like an email address.
/// Only the shape is checked; nothing is verified remotely.
pub fn validate_email(input: &str) -> Result<&str, IdentityError> {
    if EMAIL_RE.is_match(input) {
        Ok(input)
    } else {
        Err(IdentityError::InvalidEmail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert_eq!(validate_email("user@yopmail.com"), Ok("user@yopmail.com"));
        assert!(validate_email("a.b+c@mail.example.org").is_ok());
    }

    #[test]
    fn rejects_malformed() {
        for bad in [
            "",
            "user",
            "user@",
            "user@host",
            "@host.com",
            "us er@host.com",
            "user@@host.com",
            " user@host.com",
        ] {
            assert_eq!(validate_email(bad), Err(IdentityError::InvalidEmail), "{bad:?}");
        }
    }
}
