use webdom::{Event, EventKind, ScrollAlign, ScrollBehavior, SelectorList};

use crate::behavior::{Behavior, PageContext};
use crate::config::{self, ConfigError, ValidationConfig};
use crate::validation::{FieldValidator, INVALID_CLASS, ValidationResult};

/// Inline validation for every form on the page.
///
/// Fields are checked on blur, re-checked while typing once they are marked
/// invalid, and all checked on submit. A failing submit is cancelled and the
/// first bad field is focused and scrolled to the middle of the screen.
#[derive(Debug)]
pub struct FormValidation {
    forms_selector: SelectorList,
    fields_selector: SelectorList,
    validator: FieldValidator,
    /// Form id and its fields, in document order.
    forms: Vec<(String, Vec<String>)>,
    last_result: Option<ValidationResult>,
}

impl FormValidation {
    pub fn new(config: &ValidationConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            forms_selector: config::selector("validation.forms", &config.forms)?,
            fields_selector: config::selector("validation.fields", &config.fields)?,
            validator: FieldValidator::new(config.messages.clone()),
            forms: Vec::new(),
            last_result: None,
        })
    }

    pub fn validator(&self) -> &FieldValidator {
        &self.validator
    }

    /// Outcome of the most recent submit.
    pub fn last_result(&self) -> Option<&ValidationResult> {
        self.last_result.as_ref()
    }

    fn fields_of(&self, form: &str) -> &[String] {
        self.forms
            .iter()
            .find(|(id, _)| id == form)
            .map(|(_, fields)| fields.as_slice())
            .unwrap_or(&[])
    }

    fn on_submit(&mut self, form: &str, cx: &mut PageContext<'_>) {
        let fields = self.fields_of(form).to_vec();
        let result = self.validator.validate_all(cx.document_mut(), &fields);

        if let Some(first) = result.first_invalid_field() {
            cx.prevent_default();
            let document = cx.document_mut();
            document.focus(first);
            document.scroll_into_view(first, ScrollAlign::Center, ScrollBehavior::Smooth);
            log::info!(
                "[form-validation] blocked submit of {form}: {} invalid",
                result.errors().len()
            );
        }
        self.last_result = Some(result);
    }
}

impl Behavior for FormValidation {
    fn name(&self) -> &'static str {
        "form-validation"
    }

    fn attach(&mut self, cx: &mut PageContext<'_>) {
        let forms = cx.document().select_all(&self.forms_selector, None);

        for form in forms {
            let fields = cx.document().select_all(&self.fields_selector, Some(&form));
            for field in &fields {
                cx.listen_element(EventKind::Blur, field.as_str());
                cx.listen_element(EventKind::Input, field.as_str());
            }
            cx.listen_element(EventKind::Submit, form.as_str());
            self.forms.push((form, fields));
        }
    }

    fn handle(&mut self, event: &Event, current_target: Option<&str>, cx: &mut PageContext<'_>) {
        let Some(current) = current_target else {
            return;
        };

        match event {
            Event::Blur { .. } => {
                self.validator.validate(cx.document_mut(), current);
            }
            Event::Input { .. } => {
                if cx.document().has_class(current, INVALID_CLASS) {
                    self.validator.validate(cx.document_mut(), current);
                }
            }
            Event::Submit { .. } => self.on_submit(current, cx),
            _ => {}
        }
    }
}
