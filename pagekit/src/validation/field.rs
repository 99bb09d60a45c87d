use webdom::Element;

/// Declared kind of a field, as far as validation cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Password,
    Other,
}

impl FieldKind {
    /// `select` and `textarea` are `Other`; an `input` without a type is
    /// `Text`.
    pub fn of(element: &Element) -> Self {
        if element.tag != "input" {
            return Self::Other;
        }
        match element.input_type().as_deref() {
            None | Some("text") => Self::Text,
            Some("email") => Self::Email,
            Some("password") => Self::Password,
            Some(_) => Self::Other,
        }
    }
}

/// The inputs to one validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub value: String,
    pub kind: FieldKind,
    pub required: bool,
}

impl Field {
    pub fn new(value: impl Into<String>, kind: FieldKind, required: bool) -> Self {
        Self {
            value: value.into(),
            kind,
            required,
        }
    }

    pub fn from_element(element: &Element) -> Self {
        Self {
            value: element.value.clone(),
            kind: FieldKind::of(element),
            required: element.is_required(),
        }
    }
}
