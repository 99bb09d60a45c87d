use std::sync::LazyLock;

use regex::Regex;

use super::field::{Field, FieldKind};
use super::messages::Messages;
use super::result::FieldStatus;

/// Shortest accepted password, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email pattern")
});

/// Loose shape check: something@something.something, no whitespace.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// Apply the rules in order; the first failure wins.
pub(crate) fn check(field: &Field, messages: &Messages) -> FieldStatus {
    let value = field.value.trim();

    if value.is_empty() {
        return if field.required {
            FieldStatus::Invalid {
                message: messages.required.clone(),
            }
        } else {
            FieldStatus::Empty
        };
    }

    match field.kind {
        FieldKind::Email if !is_valid_email(value) => FieldStatus::Invalid {
            message: messages.invalid_email.clone(),
        },
        FieldKind::Password if value.chars().count() < MIN_PASSWORD_LEN => FieldStatus::Invalid {
            message: messages.short_password.clone(),
        },
        _ => FieldStatus::Valid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("ana@clinic.com"));
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(!is_valid_email("ana@clinic"));
        assert!(!is_valid_email("ana clinic@x.com"));
        assert!(!is_valid_email("@clinic.com"));
        assert!(!is_valid_email("ana@@clinic.com"));
    }

    #[test]
    fn test_password_length_counts_chars() {
        let messages = Messages::default();
        let five = Field::new("ééééé", FieldKind::Password, false);
        let six = Field::new("éééééé", FieldKind::Password, false);
        assert!(!check(&five, &messages).is_valid());
        assert_eq!(check(&six, &messages), FieldStatus::Valid);
    }

    #[test]
    fn test_value_is_trimmed() {
        let messages = Messages::default();
        let blank = Field::new("   ", FieldKind::Text, true);
        assert_eq!(check(&blank, &messages).message(), Some("this field is required."));

        let padded = Field::new("  ana@clinic.com ", FieldKind::Email, true);
        assert_eq!(check(&padded, &messages), FieldStatus::Valid);

        let short = Field::new(" 12345     ", FieldKind::Password, true);
        assert!(!check(&short, &messages).is_valid());
    }
}
