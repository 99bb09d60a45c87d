use webdom::Document;

use super::feedback;
use super::field::Field;
use super::messages::Messages;
use super::result::{FieldError, FieldStatus, ValidationResult};
use super::rules;

/// Validates fields and reflects the outcome on the page.
#[derive(Debug, Clone, Default)]
pub struct FieldValidator {
    messages: Messages,
}

impl FieldValidator {
    pub fn new(messages: Messages) -> Self {
        Self { messages }
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Classify a field without touching the page.
    pub fn check(&self, field: &Field) -> FieldStatus {
        rules::check(field, &self.messages)
    }

    /// Validate the element `field_id` and update its marks and feedback.
    /// Returns `None` if the element is gone.
    pub fn validate(&self, document: &mut Document, field_id: &str) -> Option<FieldStatus> {
        let field = Field::from_element(document.get(field_id)?);
        let status = self.check(&field);
        feedback::show(document, field_id, &status);
        Some(status)
    }

    /// Validate every field, in order, without stopping at the first failure.
    pub fn validate_all(&self, document: &mut Document, field_ids: &[String]) -> ValidationResult {
        let result: ValidationResult = field_ids
            .iter()
            .filter_map(|id| {
                let message = self.validate(document, id)?.message()?.to_string();
                let field_name = document
                    .get(id)
                    .and_then(|el| el.get_attr("name"))
                    .unwrap_or(id.as_str())
                    .to_string();
                Some(FieldError {
                    field_name,
                    field_id: id.clone(),
                    message,
                })
            })
            .collect();

        if result.is_invalid() {
            log::debug!("[validation] {} invalid fields", result.errors().len());
        }
        result
    }
}
