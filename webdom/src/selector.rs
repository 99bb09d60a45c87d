//! CSS selectors, backed by the `selectors` engine.
//!
//! Parsing accepts the structural part of Selectors Level 3: type, id, class
//! and attribute selectors, every combinator, `:not()` and the tree
//! pseudo-classes:
//!
//! ```text
//! input, select, textarea
//! a[href^="#"]
//! form:not(.no-validate)
//! #mobileMenu > .nav-item
//! ```
//!
//! Matching runs over a borrowed view of the element tree. A headless page
//! has no user-action state, so dynamic pseudo-classes such as `:hover` are
//! rejected when parsing.

use std::fmt;
use std::rc::Rc;

use cssparser::ToCss;
use precomputed_hash::PrecomputedHash;
use selectors::attr::{AttrSelectorOperation, CaseSensitivity, NamespaceConstraint};
use selectors::matching::{self, ElementSelectorFlags, MatchingContext};
use selectors::parser::{self, SelectorParseErrorKind};
use selectors::{NthIndexCache, OpaqueElement};

use crate::element::{self, Element};
use crate::error::SelectorError;

/// A parsed, comma-separated list of selectors.
#[derive(Debug, Clone)]
pub struct SelectorList {
    source: String,
    selectors: parser::SelectorList<Simple>,
}

impl SelectorList {
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        if input.trim().is_empty() {
            return Err(SelectorError::Empty);
        }

        let mut parser_input = cssparser::ParserInput::new(input);
        let mut css = cssparser::Parser::new(&mut parser_input);
        let selectors = parser::SelectorList::parse(&Parser, &mut css, parser::ParseRelative::No)
            .map_err(|e| SelectorError::Invalid {
                selector: input.to_string(),
                column: e.location.column,
                reason: format!("{:?}", e.kind),
            })?;

        Ok(Self {
            source: input.to_string(),
            selectors,
        })
    }

    /// The text this list was parsed from.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Matching elements under `root` in document order. With a scope, only
    /// descendants of the scope element are returned and `:scope` refers to
    /// it.
    pub fn select_all(&self, root: &Element, scope: Option<&str>) -> Vec<String> {
        let mut nth_index_cache = NthIndexCache::default();
        let mut context = MatchingContext::new(
            matching::MatchingMode::Normal,
            None,
            &mut nth_index_cache,
            matching::QuirksMode::NoQuirks,
            matching::NeedsSelectorFlags::No,
            matching::IgnoreNthChildForInvalidation::No,
        );
        if let Some(scope) = scope {
            match element::find_element(root, scope) {
                Some(el) => context.scope_element = Some(OpaqueElement::new(el)),
                None => return Vec::new(),
            }
        }

        let mut found = Vec::new();
        let root = Rc::new(NodeRef {
            element: root,
            parent: None,
            index: 0,
        });
        self.collect(&root, scope.is_none(), scope, &mut context, &mut found);
        found
    }

    fn collect(
        &self,
        node: &Rc<NodeRef<'_>>,
        in_scope: bool,
        scope: Option<&str>,
        context: &mut MatchingContext<'_, Simple>,
        found: &mut Vec<String>,
    ) {
        if in_scope && self.matches_node(node, context) {
            found.push(node.element.id.clone());
        }

        let in_scope = in_scope || scope == Some(node.element.id.as_str());
        for (index, element) in node.element.child_elements().iter().enumerate() {
            let child = Rc::new(NodeRef {
                element,
                parent: Some(Rc::clone(node)),
                index,
            });
            self.collect(&child, in_scope, scope, context, found);
        }
    }

    fn matches_node(&self, node: &NodeRef<'_>, context: &mut MatchingContext<'_, Simple>) -> bool {
        self.selectors
            .0
            .iter()
            .any(|s| matching::matches_selector(s, 0, None, node, context))
    }
}

impl fmt::Display for SelectorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl std::str::FromStr for SelectorList {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// =============================================================================
// Selector implementation
// =============================================================================

struct Parser;

impl<'i> parser::Parser<'i> for Parser {
    type Impl = Simple;
    type Error = SelectorParseErrorKind<'i>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Simple;

impl parser::SelectorImpl for Simple {
    type AttrValue = CssString;
    type Identifier = CssName;
    type LocalName = CssName;
    type NamespacePrefix = CssName;
    type NamespaceUrl = CssName;
    type BorrowedNamespaceUrl = CssName;
    type BorrowedLocalName = CssName;

    type NonTSPseudoClass = NonTSPseudoClass;
    type PseudoElement = PseudoElement;

    type ExtraMatchingData<'a> = ();
}

/// An attribute value as written in a selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssString(String);

impl<'a> From<&'a str> for CssString {
    fn from(value: &'a str) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for CssString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl ToCss for CssString {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        cssparser::serialize_string(&self.0, dest)
    }
}

/// Tag, id, class and attribute names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssName(String);

impl<'a> From<&'a str> for CssName {
    fn from(value: &'a str) -> Self {
        Self(value.to_string())
    }
}

impl ToCss for CssName {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        cssparser::serialize_identifier(&self.0, dest)
    }
}

impl PrecomputedHash for CssName {
    // FNV-1a
    fn precomputed_hash(&self) -> u32 {
        self.0.bytes().fold(0x811c_9dc5, |hash, byte| {
            (hash ^ u32::from(byte)).wrapping_mul(0x0100_0193)
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonTSPseudoClass {}

impl parser::NonTSPseudoClass for NonTSPseudoClass {
    type Impl = Simple;

    fn is_active_or_hover(&self) -> bool {
        false
    }

    fn is_user_action_state(&self) -> bool {
        false
    }
}

impl ToCss for NonTSPseudoClass {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        dest.write_str("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PseudoElement {}

impl parser::PseudoElement for PseudoElement {
    type Impl = Simple;
}

impl ToCss for PseudoElement {
    fn to_css<W>(&self, dest: &mut W) -> fmt::Result
    where
        W: fmt::Write,
    {
        dest.write_str("")
    }
}

// =============================================================================
// Tree view
// =============================================================================

/// An element plus the chain of parents that leads to it.
#[derive(Clone)]
struct NodeRef<'a> {
    element: &'a Element,
    parent: Option<Rc<NodeRef<'a>>>,
    /// Position among the parent's children.
    index: usize,
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeRef").field(&self.element.id).finish()
    }
}

impl NodeRef<'_> {
    fn sibling(&self, index: usize) -> Option<Self> {
        let parent = self.parent.as_ref()?;
        let element = parent.element.child_elements().get(index)?;
        Some(Self {
            element,
            parent: Some(Rc::clone(parent)),
            index,
        })
    }
}

impl selectors::Element for NodeRef<'_> {
    type Impl = Simple;

    fn opaque(&self) -> OpaqueElement {
        OpaqueElement::new(self.element)
    }

    fn parent_element(&self) -> Option<Self> {
        self.parent.as_deref().cloned()
    }

    fn parent_node_is_shadow_root(&self) -> bool {
        false
    }

    fn containing_shadow_host(&self) -> Option<Self> {
        None
    }

    fn is_pseudo_element(&self) -> bool {
        false
    }

    fn prev_sibling_element(&self) -> Option<Self> {
        self.sibling(self.index.checked_sub(1)?)
    }

    fn next_sibling_element(&self) -> Option<Self> {
        self.sibling(self.index + 1)
    }

    fn first_element_child(&self) -> Option<Self> {
        let element = self.element.child_elements().first()?;
        Some(Self {
            element,
            parent: Some(Rc::new(self.clone())),
            index: 0,
        })
    }

    fn is_html_element_in_html_document(&self) -> bool {
        true
    }

    fn has_local_name(&self, name: &CssName) -> bool {
        self.element.tag == name.0
    }

    fn has_namespace(&self, ns: &CssName) -> bool {
        ns.0.is_empty()
    }

    fn is_same_type(&self, other: &Self) -> bool {
        self.element.tag == other.element.tag
    }

    fn attr_matches(
        &self,
        ns: &NamespaceConstraint<&CssName>,
        local_name: &CssName,
        operation: &AttrSelectorOperation<&CssString>,
    ) -> bool {
        if matches!(ns, NamespaceConstraint::Specific(url) if !url.0.is_empty()) {
            return false;
        }
        self.element
            .get_attr(&local_name.0)
            .is_some_and(|value| operation.eval_str(value))
    }

    fn match_non_ts_pseudo_class(
        &self,
        _pc: &NonTSPseudoClass,
        _context: &mut MatchingContext<'_, Simple>,
    ) -> bool {
        false
    }

    fn match_pseudo_element(
        &self,
        _pe: &PseudoElement,
        _context: &mut MatchingContext<'_, Simple>,
    ) -> bool {
        false
    }

    fn apply_selector_flags(&self, _flags: ElementSelectorFlags) {}

    fn is_link(&self) -> bool {
        self.element.tag == "a" && self.element.has_attr("href")
    }

    fn is_html_slot_element(&self) -> bool {
        false
    }

    fn has_id(&self, id: &CssName, case_sensitivity: CaseSensitivity) -> bool {
        case_sensitivity.eq(self.element.id.as_bytes(), id.0.as_bytes())
    }

    fn has_class(&self, name: &CssName, case_sensitivity: CaseSensitivity) -> bool {
        self.element
            .classes
            .iter()
            .any(|class| case_sensitivity.eq(class.as_bytes(), name.0.as_bytes()))
    }

    fn imported_part(&self, _name: &CssName) -> Option<CssName> {
        None
    }

    fn is_part(&self, _name: &CssName) -> bool {
        false
    }

    fn is_empty(&self) -> bool {
        self.element.child_elements().is_empty() && self.element.text_content().is_empty()
    }

    fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
