/// Outcome of validating a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldStatus {
    /// Non-empty and passing every rule.
    Valid,
    /// Empty and optional. Leaves no visible mark.
    Empty,
    /// Failed a rule.
    Invalid { message: String },
}

impl FieldStatus {
    pub fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid { .. })
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Invalid { message } => Some(message),
            _ => None,
        }
    }
}

/// A field that failed on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The field's `name` attribute, or its id when it has none.
    pub field_name: String,
    pub field_id: String,
    pub message: String,
}

/// Outcome of a form submit: `Valid`, or every failing field in document
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValidationResult {
    #[default]
    Valid,
    Invalid(Vec<FieldError>),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    pub fn errors(&self) -> &[FieldError] {
        if let Self::Invalid(errors) = self {
            errors
        } else {
            &[]
        }
    }

    pub fn first_error(&self) -> Option<&FieldError> {
        self.errors().first()
    }

    /// The field to focus after a failed submit.
    pub fn first_invalid_field(&self) -> Option<&str> {
        self.first_error().map(|e| e.field_id.as_str())
    }

    pub fn error_for(&self, field_id: &str) -> Option<&FieldError> {
        self.errors().iter().find(|e| e.field_id == field_id)
    }
}

impl FromIterator<FieldError> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        let errors: Vec<_> = iter.into_iter().collect();
        if errors.is_empty() {
            Self::Valid
        } else {
            Self::Invalid(errors)
        }
    }
}
