//! Field validator rules and their presentation on the page.

use pagekit::validation::{
    FEEDBACK_CLASS, Field, FieldKind, FieldStatus, FieldValidator, INVALID_CLASS, Messages,
    VALID_CLASS, ValidationResult, feedback_id,
};
use proptest::prelude::*;
use webdom::{Document, Element};

fn validator() -> FieldValidator {
    FieldValidator::default()
}

fn count_feedback(doc: &Document) -> usize {
    doc.query_selector_all(&format!(".{FEEDBACK_CLASS}"))
        .unwrap()
        .len()
}

fn signup_page() -> Document {
    let form = Element::form()
        .id("signup")
        .child(
            Element::div()
                .class("mb-3")
                .child(Element::input("text").id("name").attr("name", "nome").required())
                .child(Element::input("email").id("email").required()),
        )
        .child(Element::input("password").id("password"))
        .child(Element::textarea().id("notes"))
        .child(Element::button().id("send").attr("type", "submit").text("Send"));
    Document::new(Element::body().child(form))
}

// ============================================================================
// Strategy Generators
// ============================================================================

/// Whitespace-only values, including the empty string.
fn blank_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ \t\n]{0,8}").expect("valid regex")
}

/// Addresses of the shape local@domain.tld
fn email_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9._+-]{1,12}@[a-z0-9-]{1,12}(\\.[a-z]{1,6}){1,2}")
        .expect("valid regex")
}

fn kind_strategy() -> impl Strategy<Value = FieldKind> {
    prop_oneof![
        Just(FieldKind::Text),
        Just(FieldKind::Email),
        Just(FieldKind::Password),
        Just(FieldKind::Other),
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Empty optional fields are valid and leave no message
    #[test]
    fn empty_optional_field_is_valid(value in blank_strategy(), kind in kind_strategy()) {
        let status = validator().check(&Field::new(value, kind, false));
        prop_assert_eq!(status, FieldStatus::Empty);
    }

    /// Empty required fields always fail with the required message
    #[test]
    fn empty_required_field_is_invalid(value in blank_strategy(), kind in kind_strategy()) {
        let status = validator().check(&Field::new(value, kind, true));
        prop_assert_eq!(status.message(), Some("this field is required."));
    }

    /// Anything shaped like an address passes the email rule
    #[test]
    fn well_formed_email_is_valid(email in email_strategy(), required in any::<bool>()) {
        let status = validator().check(&Field::new(email, FieldKind::Email, required));
        prop_assert_eq!(status, FieldStatus::Valid);
    }

    /// A non-empty value without an @ never passes the email rule
    #[test]
    fn email_without_at_is_invalid(value in "[a-zA-Z0-9.]{1,20}") {
        let status = validator().check(&Field::new(value, FieldKind::Email, false));
        prop_assert_eq!(status.message(), Some("please enter a valid email."));
    }

    /// Passwords are valid exactly when they have at least 6 characters
    #[test]
    fn password_length_decides(value in "[a-zA-Z0-9!?]{1,12}") {
        let status = validator().check(&Field::new(value.clone(), FieldKind::Password, false));
        prop_assert_eq!(status.is_valid(), value.chars().count() >= 6);
    }

    /// Text fields accept any non-blank value
    #[test]
    fn text_with_content_is_valid(value in "[a-zA-Z0-9éçã.,!-]{1,30}", required in any::<bool>()) {
        let status = validator().check(&Field::new(value, FieldKind::Text, required));
        prop_assert_eq!(status, FieldStatus::Valid);
    }
}

// ============================================================================
// Rule Order and Boundaries
// ============================================================================

#[test]
fn test_password_boundary() {
    let v = validator();
    let five = v.check(&Field::new("12345", FieldKind::Password, true));
    let six = v.check(&Field::new("123456", FieldKind::Password, true));

    assert_eq!(
        five.message(),
        Some("password must be at least 6 characters.")
    );
    assert_eq!(six, FieldStatus::Valid);
}

#[test]
fn test_required_wins_over_type_rules() {
    let v = validator();
    let status = v.check(&Field::new("", FieldKind::Email, true));
    assert_eq!(status.message(), Some("this field is required."));
}

#[test]
fn test_field_kind_from_element() {
    assert_eq!(FieldKind::of(&Element::input("email")), FieldKind::Email);
    assert_eq!(FieldKind::of(&Element::input("EMAIL")), FieldKind::Email);
    assert_eq!(FieldKind::of(&Element::input("password")), FieldKind::Password);
    assert_eq!(FieldKind::of(&Element::input("tel")), FieldKind::Other);
    assert_eq!(FieldKind::of(&Element::new("input")), FieldKind::Text);
    assert_eq!(FieldKind::of(&Element::textarea()), FieldKind::Other);
    assert_eq!(FieldKind::of(&Element::select()), FieldKind::Other);
}

#[test]
fn test_portuguese_messages() {
    let v = FieldValidator::new(Messages::portuguese());
    let status = v.check(&Field::new("ana@", FieldKind::Email, false));
    assert_eq!(status.message(), Some("Por favor, insira um e-mail válido"));
}

// ============================================================================
// Presentation
// ============================================================================

#[test]
fn test_invalid_field_gets_mark_and_feedback() {
    let mut doc = signup_page();
    let status = validator().validate(&mut doc, "name").unwrap();

    assert!(!status.is_valid());
    assert!(doc.has_class("name", INVALID_CLASS));
    assert!(!doc.has_class("name", VALID_CLASS));

    let feedback = doc.get(&feedback_id("name")).unwrap();
    assert!(feedback.has_class(FEEDBACK_CLASS));
    assert_eq!(feedback.text_content(), "this field is required.");

    // Inserted right after the field, inside the same container
    let parent = doc.parent_of("name").unwrap();
    let ids: Vec<&str> = parent.child_elements().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["name", "name-feedback", "email"]);
}

#[test]
fn test_validating_twice_does_not_duplicate_feedback() {
    let mut doc = signup_page();
    let v = validator();

    let first = v.validate(&mut doc, "email").unwrap();
    let second = v.validate(&mut doc, "email").unwrap();

    assert_eq!(first, second);
    assert_eq!(count_feedback(&doc), 1);
}

#[test]
fn test_fixing_a_field_swaps_marks() {
    let mut doc = signup_page();
    let v = validator();
    v.validate(&mut doc, "email");

    doc.get_mut("email").unwrap().value = "ana@clinic.com".into();
    let status = v.validate(&mut doc, "email").unwrap();

    assert_eq!(status, FieldStatus::Valid);
    assert!(doc.has_class("email", VALID_CLASS));
    assert!(!doc.has_class("email", INVALID_CLASS));
    assert_eq!(count_feedback(&doc), 0);
}

#[test]
fn test_host_element_sharing_the_feedback_id_is_kept() {
    let form = Element::form()
        .id("newsletter")
        .child(Element::input("email").id("email").required())
        .child(Element::div().id("email-feedback").class("hint").text("We never share it."));
    let mut doc = Document::new(Element::body().child(form));
    let v = validator();

    doc.get_mut("email").unwrap().value = "ana@clinic.com".into();
    assert_eq!(v.validate(&mut doc, "email"), Some(FieldStatus::Valid));

    let hint = doc.get("email-feedback").unwrap();
    assert!(hint.has_class("hint"));
    assert_eq!(hint.text_content(), "We never share it.");

    // Our own message comes and goes, the hint stays
    doc.get_mut("email").unwrap().value = "ana@".into();
    v.validate(&mut doc, "email");
    assert_eq!(count_feedback(&doc), 1);

    doc.get_mut("email").unwrap().value = "ana@clinic.com".into();
    v.validate(&mut doc, "email");
    assert_eq!(count_feedback(&doc), 0);
    assert!(doc.get("email-feedback").unwrap().has_class("hint"));
}

#[test]
fn test_empty_optional_field_has_no_marks() {
    let mut doc = signup_page();
    let v = validator();

    doc.get_mut("password").unwrap().value = "123".into();
    v.validate(&mut doc, "password");
    assert!(doc.has_class("password", INVALID_CLASS));

    // Clearing an optional field removes every mark
    doc.get_mut("password").unwrap().value = String::new();
    let status = v.validate(&mut doc, "password").unwrap();
    assert_eq!(status, FieldStatus::Empty);
    assert!(!doc.has_class("password", INVALID_CLASS));
    assert!(!doc.has_class("password", VALID_CLASS));
    assert_eq!(count_feedback(&doc), 0);
}

#[test]
fn test_unknown_field_is_skipped() {
    let mut doc = signup_page();
    assert_eq!(validator().validate(&mut doc, "missing"), None);
}

#[test]
fn test_validate_all_reports_every_failure_in_order() {
    let mut doc = signup_page();
    doc.get_mut("password").unwrap().value = "abc".into();
    let fields: Vec<String> = ["name", "email", "password", "notes"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let result = validator().validate_all(&mut doc, &fields);

    let ids: Vec<&str> = result.errors().iter().map(|e| e.field_id.as_str()).collect();
    assert_eq!(ids, ["name", "email", "password"]);
    assert_eq!(result.first_invalid_field(), Some("name"));
    // `name` attribute wins over the id
    assert_eq!(result.errors()[0].field_name, "nome");
    assert_eq!(result.errors()[1].field_name, "email");
    assert_eq!(
        result.error_for("password").unwrap().message,
        "password must be at least 6 characters."
    );
    assert!(result.error_for("notes").is_none());
    assert_eq!(count_feedback(&doc), 3);
}

#[test]
fn test_validate_all_valid() {
    let mut doc = signup_page();
    doc.get_mut("name").unwrap().value = "Ana".into();
    doc.get_mut("email").unwrap().value = "ana@clinic.com".into();
    let fields = vec!["name".to_string(), "email".to_string()];

    let result = validator().validate_all(&mut doc, &fields);
    assert_eq!(result, ValidationResult::Valid);
    assert!(result.first_error().is_none());
}
