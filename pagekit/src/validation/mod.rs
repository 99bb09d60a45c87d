//! Inline form-field validation.
//!
//! Fields are classified from their element (`required`, `type`, value),
//! checked against a short rule list and marked with `is-valid` /
//! `is-invalid`, with a feedback message inserted right after an invalid
//! field.
//!
//! # Example
//!
//! ```
//! use pagekit::validation::{Field, FieldKind, FieldStatus, FieldValidator};
//!
//! let validator = FieldValidator::default();
//! let status = validator.check(&Field::new("ana@", FieldKind::Email, true));
//! assert_eq!(status.message(), Some("please enter a valid email."));
//! ```

mod feedback;
mod field;
mod messages;
mod result;
mod rules;
mod validator;

pub use feedback::{
    FEEDBACK_CLASS, FEEDBACK_FOR_ATTR, INVALID_CLASS, VALID_CLASS, clear, feedback_id, show,
};
pub use field::{Field, FieldKind};
pub use messages::Messages;
pub use result::{FieldError, FieldStatus, ValidationResult};
pub use rules::{MIN_PASSWORD_LEN, is_valid_email};
pub use validator::FieldValidator;
