use webdom::{Document, Element, SelectorError, SelectorList};

fn page() -> Document {
    let root = Element::body()
        .child(
            Element::new("header")
                .id("header")
                .class("header-container")
                .child(Element::anchor("#services").id("nav-services").text("Services"))
                .child(Element::anchor("/about").id("nav-about").text("About")),
        )
        .child(
            Element::form()
                .id("signup")
                .child(Element::input("text").id("name").required())
                .child(Element::input("email").id("email"))
                .child(Element::textarea().id("notes"))
                .child(Element::button().id("send").attr("type", "submit")),
        )
        .child(
            Element::div()
                .id("mobileMenu")
                .classes("collapse navbar-collapse")
                .child(Element::new("li").id("item-1").class("nav-item"))
                .child(Element::new("li").id("item-2").class("nav-item")),
        );
    Document::new(root)
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_parse_rejects_empty() {
    assert_eq!(SelectorList::parse("").unwrap_err(), SelectorError::Empty);
    assert_eq!(SelectorList::parse("   ").unwrap_err(), SelectorError::Empty);
    assert!(matches!(
        SelectorList::parse("a,"),
        Err(SelectorError::Invalid { .. })
    ));
}

#[test]
fn test_parse_rejects_bare_hash() {
    for input in ["#", "#!"] {
        assert!(matches!(
            SelectorList::parse(input),
            Err(SelectorError::Invalid { .. })
        ));
    }
}

#[test]
fn test_parse_rejects_unterminated_attribute() {
    let err = SelectorList::parse("a[href").unwrap_err();
    assert!(err.to_string().starts_with("invalid selector 'a[href'"));
}

#[test]
fn test_parse_keeps_source_text() {
    let list = SelectorList::parse("form > input").unwrap();
    assert_eq!(list.as_str(), "form > input");
    assert_eq!(list.to_string(), "form > input");
}

// ============================================================================
// Matching
// ============================================================================

#[test]
fn test_query_by_class_and_id() {
    let doc = page();
    assert_eq!(
        doc.query_selector(".header-container").unwrap(),
        Some("header".to_string())
    );
    assert_eq!(
        doc.query_selector("#mobileMenu").unwrap(),
        Some("mobileMenu".to_string())
    );
    assert_eq!(doc.query_selector(".missing").unwrap(), None);
}

#[test]
fn test_query_list_preserves_document_order() {
    let doc = page();
    let fields = doc.query_selector_all("textarea, input, select").unwrap();
    assert_eq!(fields, vec!["name", "email", "notes"]);
}

#[test]
fn test_attribute_prefix() {
    let doc = page();
    let anchors = doc.query_selector_all("a[href^=\"#\"]").unwrap();
    assert_eq!(anchors, vec!["nav-services"]);
}

#[test]
fn test_attribute_equals_with_tag() {
    let doc = page();
    let submit = doc
        .query_selector("button[type=\"submit\"], input[type='submit']")
        .unwrap();
    assert_eq!(submit, Some("send".to_string()));
}

#[test]
fn test_attribute_presence() {
    let doc = page();
    assert_eq!(doc.query_selector_all("[required]").unwrap(), vec!["name"]);
}

#[test]
fn test_descendant_combinator() {
    let doc = page();
    assert_eq!(
        doc.query_selector_all("#mobileMenu .nav-item").unwrap(),
        vec!["item-1", "item-2"]
    );
    assert!(doc.query_selector_all("form .nav-item").unwrap().is_empty());
}

#[test]
fn test_compound_requires_every_class() {
    let doc = page();
    assert_eq!(
        doc.query_selector("div.collapse.navbar-collapse").unwrap(),
        Some("mobileMenu".to_string())
    );
    assert_eq!(doc.query_selector("div.collapse.show").unwrap(), None);
}

#[test]
fn test_scoped_query_excludes_scope() {
    let doc = page();
    assert_eq!(
        doc.query_selector_all_in("signup", "input, textarea").unwrap(),
        vec!["name", "email", "notes"]
    );
    assert!(doc.query_selector_all_in("signup", "form").unwrap().is_empty());
}

#[test]
fn test_child_combinator() {
    let doc = page();
    assert_eq!(
        doc.query_selector_all("#mobileMenu > .nav-item").unwrap(),
        vec!["item-1", "item-2"]
    );
    assert!(doc.query_selector_all("body > .nav-item").unwrap().is_empty());
}

#[test]
fn test_negation() {
    let doc = Document::new(
        Element::body()
            .child(Element::form().id("plain"))
            .child(Element::form().id("skipped").class("no-validate")),
    );
    assert_eq!(
        doc.query_selector_all("form:not(.no-validate)").unwrap(),
        vec!["plain"]
    );
}

#[test]
fn test_case_insensitive_attribute() {
    let doc = Document::new(
        Element::body()
            .child(Element::div().id("shout").attr("data-role", "LEAD"))
            .child(Element::div().id("quiet").attr("data-role", "member")),
    );
    assert_eq!(
        doc.query_selector_all("[data-role=lead i]").unwrap(),
        vec!["shout"]
    );
    assert!(doc.query_selector_all("[data-role=lead]").unwrap().is_empty());
}

#[test]
fn test_escaped_id() {
    let doc = Document::new(Element::body().child(Element::div().id("a.b")));
    assert_eq!(doc.query_selector(r"#a\.b").unwrap(), Some("a.b".to_string()));
}

#[test]
fn test_structural_pseudo_classes() {
    let doc = page();
    assert_eq!(
        doc.query_selector_all(".nav-item:first-child").unwrap(),
        vec!["item-1"]
    );
    assert_eq!(
        doc.query_selector_all("#mobileMenu li + li").unwrap(),
        vec!["item-2"]
    );
    assert!(doc.query_selector_all("a:hover").is_err());
}

#[test]
fn test_disabled_state_is_an_attribute() {
    let doc = Document::new(
        Element::body()
            .child(Element::button().id("on"))
            .child(Element::button().id("off").disabled(true)),
    );
    assert_eq!(doc.query_selector_all("button[disabled]").unwrap(), vec!["off"]);
}
