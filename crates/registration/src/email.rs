//! Email address value object.

use serde::Serialize;

use campuspass_core::{DomainError, DomainResult, ValueObject};

/// An email address of the conventional `local@domain.tld` shape.
///
/// Accepted shape:
/// - local part: one or more ASCII letters/digits or `._%+-`
/// - domain: one or more ASCII letters/digits or `.-`
/// - suffix: a final dot followed by 2 to 6 ASCII letters
///
/// The original string is stored exactly as supplied; validation never
/// normalizes or trims it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parse a raw email address, rejecting anything outside the shape above.
    pub fn parse(email: String) -> DomainResult<Self> {
        if email.trim().is_empty() || !matches_email_shape(&email) {
            return Err(DomainError::invalid_input("email address is invalid"));
        }
        Ok(Self(email))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for EmailAddress {}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Process-wide, stateless shape check for `local@domain.tld`.
///
/// The suffix split happens at the **last** dot. Splitting anywhere earlier
/// could never match anyway, since everything after the chosen dot must be
/// letters and a later dot is not a letter.
fn matches_email_shape(s: &str) -> bool {
    let Some((local, rest)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || !local.bytes().all(is_local_part_byte) {
        return false;
    }
    let Some((domain, suffix)) = rest.rsplit_once('.') else {
        return false;
    };
    if domain.is_empty() || !domain.bytes().all(is_domain_byte) {
        return false;
    }
    (2..=6).contains(&suffix.len()) && suffix.bytes().all(|b| b.is_ascii_alphabetic())
}

fn is_local_part_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'%' | b'+' | b'-')
}

fn is_domain_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'.' | b'-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_plain_address() {
        let email = EmailAddress::parse("john@gmail.com".to_string()).unwrap();
        assert_eq!(email.as_str(), "john@gmail.com");
    }

    #[test]
    fn parse_accepts_full_local_part_character_set() {
        for raw in [
            "first.last+tag@example.com",
            "user_name%x@host.org",
            "a-b@c-d.net",
            "a@b.cd",
        ] {
            assert!(
                EmailAddress::parse(raw.to_string()).is_ok(),
                "expected valid: {raw}"
            );
        }
    }

    #[test]
    fn parse_accepts_dotted_domain_and_long_suffix() {
        assert!(EmailAddress::parse("who@mail.sub.example.museum".to_string()).is_ok());
    }

    #[test]
    fn parse_rejects_missing_at_sign() {
        let err = EmailAddress::parse("not-an-email".to_string()).unwrap_err();
        assert_eq!(err.reason(), "email address is invalid");
    }

    #[test]
    fn parse_rejects_missing_suffix() {
        assert!(EmailAddress::parse("john@gmail".to_string()).is_err());
    }

    #[test]
    fn parse_rejects_suffix_outside_length_bounds() {
        // 1 letter is too short, 7 letters too long.
        assert!(EmailAddress::parse("john@gmail.c".to_string()).is_err());
        assert!(EmailAddress::parse("john@gmail.abcdefg".to_string()).is_err());
    }

    #[test]
    fn parse_rejects_non_letter_suffix() {
        assert!(EmailAddress::parse("john@gmail.c0m".to_string()).is_err());
    }

    #[test]
    fn parse_rejects_empty_local_part_or_domain() {
        assert!(EmailAddress::parse("@gmail.com".to_string()).is_err());
        assert!(EmailAddress::parse("john@.com".to_string()).is_err());
    }

    #[test]
    fn parse_rejects_surrounding_whitespace() {
        // The shape check runs on the untrimmed string, so padding fails it.
        assert!(EmailAddress::parse(" john@gmail.com".to_string()).is_err());
        assert!(EmailAddress::parse("john@gmail.com ".to_string()).is_err());
    }

    #[test]
    fn parse_rejects_disallowed_characters() {
        assert!(EmailAddress::parse("john doe@gmail.com".to_string()).is_err());
        assert!(EmailAddress::parse("john@gma il.com".to_string()).is_err());
        assert!(EmailAddress::parse("a@@b.com".to_string()).is_err());
    }

    #[test]
    fn parse_rejects_empty_and_whitespace_only() {
        assert!(EmailAddress::parse(String::new()).is_err());
        assert!(EmailAddress::parse("   ".to_string()).is_err());
    }
}
