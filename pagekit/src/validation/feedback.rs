//! Presentation of a field's validation state.

use webdom::{Document, Element};

use super::result::FieldStatus;

pub const VALID_CLASS: &str = "is-valid";
pub const INVALID_CLASS: &str = "is-invalid";
pub const FEEDBACK_CLASS: &str = "invalid-feedback";

/// Id of the feedback element belonging to `field_id`.
pub fn feedback_id(field_id: &str) -> String {
    format!("{field_id}-feedback")
}

/// Attribute naming the field a feedback element was created for.
pub const FEEDBACK_FOR_ATTR: &str = "data-feedback-for";

/// Remove both marks and the field's feedback message. An element that only
/// shares the feedback id is not ours and stays.
pub fn clear(document: &mut Document, field_id: &str) {
    if let Some(field) = document.get_mut(field_id) {
        field.remove_class(VALID_CLASS);
        field.remove_class(INVALID_CLASS);
    }

    let id = feedback_id(field_id);
    let owned = document.get(&id).is_some_and(|el| {
        el.has_class(FEEDBACK_CLASS) && el.get_attr(FEEDBACK_FOR_ATTR) == Some(field_id)
    });
    if owned {
        document.remove(&id);
    }
}

/// Replace whatever the field showed with `status`.
pub fn show(document: &mut Document, field_id: &str, status: &FieldStatus) {
    clear(document, field_id);

    match status {
        FieldStatus::Empty => {}
        FieldStatus::Valid => {
            document.toggle_class(field_id, VALID_CLASS, true);
        }
        FieldStatus::Invalid { message } => {
            document.toggle_class(field_id, INVALID_CLASS, true);
            let feedback = Element::div()
                .id(feedback_id(field_id))
                .class(FEEDBACK_CLASS)
                .attr(FEEDBACK_FOR_ATTR, field_id)
                .text(message.as_str());
            if let Err(e) = document.insert_after(field_id, feedback) {
                log::debug!("[validation] no place for feedback of {field_id}: {e}");
            }
        }
    }
}
