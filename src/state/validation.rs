//! Field validation rules
//!
//! Pure functions from a raw field value to a validation outcome. Nothing in
//! here touches rendering, so the rules can be tested without a terminal.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Minimum name length in characters
pub const NAME_MIN_LEN: usize = 2;
/// Maximum name length in characters
pub const NAME_MAX_LEN: usize = 50;
/// Maximum email length in characters
pub const EMAIL_MAX_LEN: usize = 100;
/// Minimum message length in characters
pub const MESSAGE_MIN_LEN: usize = 10;
/// Maximum message length in characters
pub const MESSAGE_MAX_LEN: usize = 1000;

/// Letters (any script, accented included), whitespace, hyphens and apostrophes
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L}\p{M}\s'\-]+$").expect("name pattern is valid"));

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern is valid")
});

/// The three fields of the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Name,
    Email,
    Message,
}

impl FieldKind {
    /// All fields in form order
    pub const ALL: [FieldKind; 3] = [FieldKind::Name, FieldKind::Email, FieldKind::Message];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::Message => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Message)
    }
}

/// Reasons a field value is rejected. The display text is shown inline
/// beneath the offending field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Please enter your name")]
    NameEmpty,
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Name cannot exceed 50 characters")]
    NameTooLong,
    #[error("Name can only contain letters")]
    NameInvalidCharacters,
    #[error("Please enter your email address")]
    EmailEmpty,
    #[error("Please enter a valid email (example@mail.com)")]
    EmailMalformed,
    #[error("Email address is too long")]
    EmailTooLong,
    #[error("Please write your message")]
    MessageEmpty,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
    #[error("Message cannot exceed 1000 characters")]
    MessageTooLong,
}

/// Validate a raw value for the given field. The value is trimmed first.
pub fn validate(kind: FieldKind, raw: &str) -> Result<(), FieldError> {
    match kind {
        FieldKind::Name => validate_name(raw),
        FieldKind::Email => validate_email(raw),
        FieldKind::Message => validate_message(raw),
    }
}

pub fn validate_name(raw: &str) -> Result<(), FieldError> {
    let name = raw.trim();
    let len = name.chars().count();

    if name.is_empty() {
        return Err(FieldError::NameEmpty);
    }
    if len < NAME_MIN_LEN {
        return Err(FieldError::NameTooShort);
    }
    if len > NAME_MAX_LEN {
        return Err(FieldError::NameTooLong);
    }
    if !NAME_PATTERN.is_match(name) {
        return Err(FieldError::NameInvalidCharacters);
    }
    Ok(())
}

pub fn validate_email(raw: &str) -> Result<(), FieldError> {
    let email = raw.trim();

    if email.is_empty() {
        return Err(FieldError::EmailEmpty);
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err(FieldError::EmailMalformed);
    }
    // Checked after the pattern so a malformed address reports the format problem
    if email.chars().count() > EMAIL_MAX_LEN {
        return Err(FieldError::EmailTooLong);
    }
    Ok(())
}

pub fn validate_message(raw: &str) -> Result<(), FieldError> {
    let message = raw.trim();
    let len = message.chars().count();

    if message.is_empty() {
        return Err(FieldError::MessageEmpty);
    }
    if len < MESSAGE_MIN_LEN {
        return Err(FieldError::MessageTooShort);
    }
    if len > MESSAGE_MAX_LEN {
        return Err(FieldError::MessageTooLong);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    mod name {
        use super::*;

        #[test]
        fn test_accepts_plain_and_accented_names() {
            for name in [
                "Jo",
                "Ada Lovelace",
                "José Núñez",
                "Mary-Jane O'Neil",
                "Zoë Brontë",
                "Ñandú Güemes",
            ] {
                assert_eq!(validate_name(name), Ok(()), "rejected {name:?}");
            }
        }

        #[test]
        fn test_accepts_letters_from_any_script() {
            for name in ["王小明", "Дмитрий", "Σωκράτης", "محمد"] {
                assert_eq!(validate_name(name), Ok(()), "rejected {name:?}");
            }
        }

        #[test]
        fn test_accepts_boundary_lengths() {
            assert!(validate_name(&"a".repeat(NAME_MIN_LEN)).is_ok());
            assert!(validate_name(&"a".repeat(NAME_MAX_LEN)).is_ok());
        }

        #[test]
        fn test_rejects_blank() {
            assert_eq!(validate_name(""), Err(FieldError::NameEmpty));
            assert_eq!(validate_name("   \t"), Err(FieldError::NameEmpty));
        }

        #[test]
        fn test_rejects_single_character() {
            assert_eq!(validate_name(" a "), Err(FieldError::NameTooShort));
        }

        #[test]
        fn test_rejects_too_long() {
            assert_eq!(
                validate_name(&"a".repeat(NAME_MAX_LEN + 1)),
                Err(FieldError::NameTooLong)
            );
        }

        #[test]
        fn test_counts_characters_not_bytes() {
            // 50 two-byte characters is still within bounds
            assert!(validate_name(&"é".repeat(NAME_MAX_LEN)).is_ok());
        }

        #[test]
        fn test_rejects_digits_and_symbols() {
            for name in ["R2D2", "Ada!", "john_doe", "a@b", "Bob 3rd", "Ann."] {
                assert_eq!(
                    validate_name(name),
                    Err(FieldError::NameInvalidCharacters),
                    "accepted {name:?}"
                );
            }
        }

        #[test]
        fn test_invalid_characters_message() {
            assert_eq!(
                FieldError::NameInvalidCharacters.to_string(),
                "Name can only contain letters"
            );
        }

        #[test]
        fn test_surrounding_whitespace_is_ignored() {
            assert!(validate_name("   Ada   ").is_ok());
        }
    }

    mod email {
        use super::*;

        #[test]
        fn test_accepts_simple_address() {
            assert_eq!(validate_email("user@example.com"), Ok(()));
            assert_eq!(validate_email("first.last-1@mail.example.co"), Ok(()));
        }

        #[test]
        fn test_rejects_blank() {
            assert_eq!(validate_email("  "), Err(FieldError::EmailEmpty));
        }

        #[test]
        fn test_rejects_missing_domain() {
            assert_eq!(validate_email("user@"), Err(FieldError::EmailMalformed));
        }

        #[test]
        fn test_rejects_missing_at_sign() {
            assert_eq!(
                validate_email("user.example.com"),
                Err(FieldError::EmailMalformed)
            );
        }

        #[test]
        fn test_rejects_short_tld() {
            assert_eq!(
                validate_email("user@example.c"),
                Err(FieldError::EmailMalformed)
            );
        }

        #[test]
        fn test_rejects_overlong_local_part() {
            let email = format!("{}@example.com", "a".repeat(101));
            assert_eq!(validate_email(&email), Err(FieldError::EmailTooLong));
        }

        #[test]
        fn test_accepts_exactly_max_length() {
            let domain = "@example.com";
            let local = "a".repeat(EMAIL_MAX_LEN - domain.len());
            let email = format!("{local}{domain}");
            assert_eq!(email.len(), EMAIL_MAX_LEN);
            assert!(validate_email(&email).is_ok());
        }
    }

    mod message {
        use super::*;

        #[test]
        fn test_rejects_nine_characters() {
            assert_eq!(
                validate_message("123456789"),
                Err(FieldError::MessageTooShort)
            );
        }

        #[test]
        fn test_accepts_ten_characters() {
            assert_eq!(validate_message("1234567890"), Ok(()));
        }

        #[test]
        fn test_accepts_max_length() {
            assert!(validate_message(&"x".repeat(MESSAGE_MAX_LEN)).is_ok());
        }

        #[test]
        fn test_rejects_over_max_length() {
            assert_eq!(
                validate_message(&"x".repeat(MESSAGE_MAX_LEN + 1)),
                Err(FieldError::MessageTooLong)
            );
        }

        #[test]
        fn test_rejects_blank() {
            assert_eq!(validate_message("\n\n  "), Err(FieldError::MessageEmpty));
        }

        #[test]
        fn test_length_is_measured_after_trim() {
            assert_eq!(
                validate_message("    short    "),
                Err(FieldError::MessageTooShort)
            );
        }
    }

    mod field_kind {
        use super::*;

        #[test]
        fn test_index_round_trips() {
            for kind in FieldKind::ALL {
                assert_eq!(FieldKind::from_index(kind.index()), Some(kind));
            }
            assert_eq!(FieldKind::from_index(3), None);
        }

        #[test]
        fn test_only_message_is_multiline() {
            assert!(!FieldKind::Name.is_multiline());
            assert!(!FieldKind::Email.is_multiline());
            assert!(FieldKind::Message.is_multiline());
        }

        #[test]
        fn test_validate_dispatches_by_kind() {
            assert_eq!(validate(FieldKind::Name, ""), Err(FieldError::NameEmpty));
            assert_eq!(validate(FieldKind::Email, ""), Err(FieldError::EmailEmpty));
            assert_eq!(
                validate(FieldKind::Message, ""),
                Err(FieldError::MessageEmpty)
            );
        }
    }
}
