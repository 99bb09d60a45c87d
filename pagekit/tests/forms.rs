//! End-to-end form flows: validation on blur/input/submit and the submit
//! button's loading state.

use std::time::Duration;

use pagekit::prelude::*;
use pagekit::validation::{FEEDBACK_CLASS, INVALID_CLASS, VALID_CLASS};
use webdom::{Content, ScrollBehavior};

fn contact_page() -> Document {
    let form = Element::form()
        .id("contact")
        .child(Element::input("text").id("name").attr("name", "name").required())
        .child(Element::input("email").id("email").attr("name", "email").required())
        .child(Element::textarea().id("message"))
        .child(
            Element::button()
                .id("send")
                .attr("type", "submit")
                .text("Enviar"),
        );

    Document::new(Element::body().child(form).child(Element::div().id("footer")))
        .with_viewport(800, 600)
        .with_rect("contact", Rect::new(0, 1400, 800, 400))
        .with_rect("name", Rect::new(0, 1500, 400, 40))
        .with_rect("email", Rect::new(0, 1560, 400, 40))
        .with_rect("footer", Rect::new(0, 2800, 800, 200))
}

fn page() -> (Page, VirtualClock) {
    let clock = VirtualClock::new();
    let mut page = Page::with_clock(contact_page(), clock.clone());
    page.install_defaults(&PageConfig::default()).unwrap();
    (page, clock)
}

fn feedback_count(page: &Page) -> usize {
    page.document()
        .query_selector_all(&format!(".{FEEDBACK_CLASS}"))
        .unwrap()
        .len()
}

fn fill_valid(page: &mut Page) {
    page.type_into("name", "Ana Souza");
    page.type_into("email", "ana@clinic.com");
}

// ============================================================================
// Submit
// ============================================================================

#[test]
fn test_submit_with_empty_required_field_is_cancelled() {
    let (mut page, _clock) = page();
    page.type_into("email", "ana@clinic.com");

    let outcome = page.submit("contact");

    assert!(outcome.default_prevented);
    assert_eq!(page.document().focused(), Some("name"));
    assert_eq!(feedback_count(&page), 1);
    assert!(page.document().has_class("name", INVALID_CLASS));
    assert!(page.document().has_class("email", VALID_CLASS));

    // Name centered in the 600px viewport: 1520 - 300
    let request = page.document().viewport().last_request().unwrap();
    assert_eq!(request.top, 1220);
    assert_eq!(request.behavior, ScrollBehavior::Smooth);
    assert_eq!(page.document().viewport().scroll_y(), 1220);

    // Cancelled submits leave the button alone
    let send = page.document().get("send").unwrap();
    assert!(!send.has_class("loading"));
    assert!(!send.disabled);
    assert_eq!(page.pending_timers(), 0);
}

#[test]
fn test_submit_validates_every_field() {
    let (mut page, _clock) = page();
    page.type_into("email", "not-an-email");

    page.submit("contact");

    assert_eq!(feedback_count(&page), 2);
    assert_eq!(page.document().focused(), Some("name"));
    assert_eq!(
        page.document().get("email-feedback").unwrap().text_content(),
        "please enter a valid email."
    );
}

#[test]
fn test_valid_submit_puts_button_in_loading_state() {
    let (mut page, _clock) = page();
    fill_valid(&mut page);

    let outcome = page.submit("contact");

    assert!(!outcome.default_prevented);
    let send = page.document().get("send").unwrap();
    assert!(send.has_class("loading"));
    assert!(send.disabled);
    assert_eq!(send.child_elements().len(), 1);
    assert!(send.child_elements()[0].has_class("loading-spinner"));
    assert_eq!(feedback_count(&page), 0);
    assert_eq!(page.pending_timers(), 1);
}

#[test]
fn test_second_submit_while_loading_is_ignored() {
    let (mut page, _clock) = page();
    fill_valid(&mut page);

    page.submit("contact");
    page.submit("contact");

    assert_eq!(page.pending_timers(), 1);
}

#[test]
fn test_disabled_button_is_left_alone() {
    let (mut page, _clock) = page();
    fill_valid(&mut page);
    page.document_mut().get_mut("send").unwrap().disabled = true;

    page.submit("contact");

    assert!(!page.document().has_class("send", "loading"));
    assert_eq!(page.pending_timers(), 0);
}

// ============================================================================
// Loading Fallback
// ============================================================================

#[test]
fn test_fallback_restores_button_after_ten_seconds() {
    let (mut page, clock) = page();
    fill_valid(&mut page);
    page.submit("contact");

    clock.advance(Duration::from_millis(9_999));
    assert_eq!(page.run_due_timers(), 0);
    assert!(page.document().has_class("send", "loading"));

    clock.advance(Duration::from_millis(1));
    assert_eq!(page.run_due_timers(), 1);

    let send = page.document().get("send").unwrap();
    assert!(!send.has_class("loading"));
    assert!(!send.disabled);
    assert_eq!(send.content, Content::Text("Enviar".into()));
    assert_eq!(page.pending_timers(), 0);
}

#[test]
fn test_reset_restores_and_cancels_fallback() {
    let (mut page, clock) = page();
    fill_valid(&mut page);
    page.submit("contact");

    page.reset("contact");

    let send = page.document().get("send").unwrap();
    assert!(!send.has_class("loading"));
    assert_eq!(send.text_content(), "Enviar");
    assert_eq!(page.pending_timers(), 0);

    clock.advance(Duration::from_secs(10));
    assert_eq!(page.run_due_timers(), 0);
}

#[test]
fn test_detach_restores_loading_button() {
    let clock = VirtualClock::new();
    let mut page = Page::with_clock(contact_page(), clock.clone());
    let loading = page.attach(ButtonLoading::new(&Default::default()).unwrap());

    page.submit("contact");
    assert!(page.document().has_class("send", "loading"));

    assert!(page.detach(loading));
    assert!(!page.document().has_class("send", "loading"));
    assert_eq!(page.pending_timers(), 0);
}

#[test]
fn test_custom_fallback_delay() {
    let clock = VirtualClock::new();
    let mut page = Page::with_clock(contact_page(), clock.clone());
    let config = PageConfig::default().loading_fallback(Duration::from_secs(2));
    page.install_defaults(&config).unwrap();
    fill_valid(&mut page);
    page.submit("contact");

    assert_eq!(page.next_timer_deadline(), Some(Duration::from_secs(2)));
    clock.advance(Duration::from_secs(2));
    assert_eq!(page.run_due_timers(), 1);
}

// ============================================================================
// Blur and Input
// ============================================================================

#[test]
fn test_blur_validates() {
    let (mut page, _clock) = page();
    page.focus("email");
    page.type_into("email", "ana");

    // Typing into an unmarked field does not validate
    assert!(!page.document().has_class("email", INVALID_CLASS));

    page.blur("email");
    assert!(page.document().has_class("email", INVALID_CLASS));
    assert_eq!(page.document().focused(), None);
}

#[test]
fn test_input_revalidates_invalid_field() {
    let (mut page, _clock) = page();
    page.blur("email");
    assert!(page.document().has_class("email", INVALID_CLASS));

    page.type_into("email", "ana@");
    assert!(page.document().has_class("email", INVALID_CLASS));
    assert_eq!(
        page.document().get("email-feedback").unwrap().text_content(),
        "please enter a valid email."
    );

    page.type_into("email", "ana@clinic.com");
    assert!(page.document().has_class("email", VALID_CLASS));
    assert_eq!(feedback_count(&page), 0);
}

#[test]
fn test_input_on_valid_field_keeps_marks() {
    let (mut page, _clock) = page();
    page.type_into("name", "Ana");
    page.blur("name");
    assert!(page.document().has_class("name", VALID_CLASS));

    page.type_into("name", "");
    assert!(page.document().has_class("name", VALID_CLASS));
    assert_eq!(page.document().get("name").unwrap().value, "");
}

#[test]
fn test_portuguese_page() {
    let clock = VirtualClock::new();
    let mut page = Page::with_clock(contact_page(), clock);
    page.install_defaults(&PageConfig::for_locale(Locale::Portuguese))
        .unwrap();

    page.submit("contact");

    assert_eq!(
        page.document().get("name-feedback").unwrap().text_content(),
        "Este campo é obrigatório"
    );
}
