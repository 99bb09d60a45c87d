use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// Tags that take focus without an explicit tabindex.
const FOCUSABLE_TAGS: &[&str] = &["a", "button", "input", "select", "textarea"];

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: String,

    // Markup
    pub classes: Vec<String>,
    pub attributes: BTreeMap<String, String>,
    /// Inline style declarations (`property -> value`).
    pub style: BTreeMap<String, String>,

    // Content
    pub content: Content,

    // Form state
    /// Current value of an input, select or textarea.
    pub value: String,
    /// Whether this element is disabled. Disabled elements don't take focus.
    pub disabled: bool,

    // Interaction
    pub focusable: bool,
}

impl Element {
    /// Create an element with the given tag name and a generated id.
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into().to_ascii_lowercase();
        Self {
            id: generate_id(&tag),
            focusable: FOCUSABLE_TAGS.contains(&tag.as_str()),
            tag,
            classes: Vec::new(),
            attributes: BTreeMap::new(),
            style: BTreeMap::new(),
            content: Content::None,
            value: String::new(),
            disabled: false,
        }
    }

    pub fn body() -> Self {
        Self::new("body").id("body")
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn span() -> Self {
        Self::new("span")
    }

    pub fn form() -> Self {
        Self::new("form")
    }

    /// Create an `<input>` with the given `type` attribute.
    pub fn input(input_type: impl Into<String>) -> Self {
        Self::new("input").attr("type", input_type)
    }

    pub fn textarea() -> Self {
        Self::new("textarea")
    }

    pub fn select() -> Self {
        Self::new("select")
    }

    pub fn button() -> Self {
        Self::new("button")
    }

    /// Create an `<a>` pointing at `href`.
    pub fn anchor(href: impl Into<String>) -> Self {
        Self::new("a").attr("href", href)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Markup
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(&class.into());
        self
    }

    /// Add every whitespace-separated class in `classes`.
    pub fn classes(mut self, classes: &str) -> Self {
        for class in classes.split_whitespace() {
            self.add_class(class);
        }
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Mark a form field as required.
    pub fn required(self) -> Self {
        self.attr("required", "")
    }

    // Content
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    // State
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn focusable(mut self, focusable: bool) -> Self {
        self.focusable = focusable;
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    // Classes

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class. Returns true if it was not present before.
    pub fn add_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            return false;
        }
        self.classes.push(class.to_string());
        true
    }

    /// Remove a class. Returns true if it was present.
    pub fn remove_class(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != class);
        self.classes.len() != before
    }

    /// Add or remove a class depending on `on`. Returns true if it changed.
    pub fn toggle_class(&mut self, class: &str, on: bool) -> bool {
        if on {
            self.add_class(class)
        } else {
            self.remove_class(class)
        }
    }

    // Attributes

    /// Look up an attribute. `disabled` reflects the element state.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        if name == "disabled" && self.disabled {
            return Some("");
        }
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.get_attr(name).is_some()
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn is_required(&self) -> bool {
        self.has_attr("required")
    }

    /// The `type` attribute, lowercased. `None` when absent.
    pub fn input_type(&self) -> Option<String> {
        self.attributes
            .get("type")
            .map(|t| t.trim().to_ascii_lowercase())
    }

    // Style

    pub fn set_style(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.style.insert(property.into(), value.into());
    }

    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.style.get(property).map(String::as_str)
    }

    /// Concatenated text content of this element and its descendants.
    pub fn text_content(&self) -> String {
        self.content.text()
    }

    /// Direct children, empty for leaf content.
    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }
}
