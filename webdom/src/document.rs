use crate::element::{self, Element};
use crate::error::{DomError, SelectorError};
use crate::focus::FocusState;
use crate::layout::{LayoutResult, Rect};
use crate::scroll::{ScrollAlign, ScrollBehavior, ScrollRequest, Viewport};
use crate::selector::SelectorList;

/// A page: the element tree under `body`, host-supplied layout, the window
/// viewport and focus.
#[derive(Debug)]
pub struct Document {
    root: Element,
    layout: LayoutResult,
    viewport: Viewport,
    focus: FocusState,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(Element::body())
    }
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self {
            root,
            layout: LayoutResult::new(),
            viewport: Viewport::new(1280, 720),
            focus: FocusState::new(),
        }
    }

    pub fn with_viewport(mut self, width: i32, height: i32) -> Self {
        self.viewport.resize(width, height);
        self
    }

    /// Attach a document-space rectangle to an element.
    pub fn with_rect(mut self, id: impl Into<String>, rect: Rect) -> Self {
        self.layout.insert(id.into(), rect);
        self
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    pub fn body_id(&self) -> &str {
        &self.root.id
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    pub fn get(&self, id: &str) -> Option<&Element> {
        element::find_element(&self.root, id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        element::find_element_mut(&mut self.root, id)
    }

    pub fn parent_of(&self, id: &str) -> Option<&Element> {
        element::find_parent(&self.root, id)
    }

    /// `Node.contains` semantics: true when `id` is `ancestor` itself or one
    /// of its descendants.
    pub fn contains(&self, ancestor: &str, id: &str) -> bool {
        element::contains(&self.root, ancestor, id)
    }

    /// First element matching `selector` in document order.
    pub fn query_selector(&self, selector: &str) -> Result<Option<String>, SelectorError> {
        let list = SelectorList::parse(selector)?;
        Ok(self.select_first(&list, None))
    }

    /// All elements matching `selector` in document order.
    pub fn query_selector_all(&self, selector: &str) -> Result<Vec<String>, SelectorError> {
        let list = SelectorList::parse(selector)?;
        Ok(self.select_all(&list, None))
    }

    /// All matching descendants of `scope` (the scope itself is excluded).
    pub fn query_selector_all_in(
        &self,
        scope: &str,
        selector: &str,
    ) -> Result<Vec<String>, SelectorError> {
        let list = SelectorList::parse(selector)?;
        Ok(self.select_all(&list, Some(scope)))
    }

    /// First matching element, optionally restricted to descendants of `scope`.
    pub fn select_first(&self, list: &SelectorList, scope: Option<&str>) -> Option<String> {
        // Document order means the first hit of a full walk.
        self.select_all(list, scope).into_iter().next()
    }

    /// All matching elements, optionally restricted to descendants of `scope`.
    pub fn select_all(&self, list: &SelectorList, scope: Option<&str>) -> Vec<String> {
        list.select_all(&self.root, scope)
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    pub fn append_child(&mut self, parent: &str, child: Element) -> Result<(), DomError> {
        element::append_child(&mut self.root, parent, child)
    }

    pub fn insert_after(&mut self, sibling: &str, element: Element) -> Result<(), DomError> {
        element::insert_after(&mut self.root, sibling, element)
    }

    /// Remove an element and its subtree. Focus on a removed element is
    /// cleared.
    pub fn remove(&mut self, id: &str) -> Option<Element> {
        let removed = element::remove_element(&mut self.root, id)?;
        let lost_focus = self
            .focus
            .focused()
            .is_some_and(|focused| element::find_element(&removed, focused).is_some());
        if lost_focus {
            self.focus.blur();
        }
        Some(removed)
    }

    /// Add or remove a class on an element. Returns true if it changed;
    /// unknown ids are ignored.
    pub fn toggle_class(&mut self, id: &str, class: &str, on: bool) -> bool {
        self.get_mut(id)
            .map(|el| el.toggle_class(class, on))
            .unwrap_or(false)
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.get(id).is_some_and(|el| el.has_class(class))
    }

    // =========================================================================
    // Layout and scrolling
    // =========================================================================

    pub fn layout(&self) -> &LayoutResult {
        &self.layout
    }

    pub fn set_rect(&mut self, id: impl Into<String>, rect: Rect) {
        self.layout.insert(id.into(), rect);
    }

    pub fn rect(&self, id: &str) -> Option<Rect> {
        self.layout.get(id).copied()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    /// Total scrollable height: the lowest laid-out edge, at least one
    /// viewport tall.
    pub fn scroll_height(&self) -> i32 {
        self.layout
            .values()
            .map(Rect::bottom)
            .max()
            .unwrap_or(0)
            .max(self.viewport.height)
    }

    fn clamp_scroll(&self, top: i32) -> i32 {
        let max = (self.scroll_height() - self.viewport.height).max(0);
        top.clamp(0, max)
    }

    /// `window.scrollTo`: clamp, record the request and move the viewport.
    /// Returns true if the scroll offset changed.
    pub fn scroll_window_to(&mut self, top: i32, behavior: ScrollBehavior) -> bool {
        let top = self.clamp_scroll(top);
        self.viewport.record(ScrollRequest { top, behavior });
        self.scroll_by_user(top)
    }

    /// Move the window as the user would: clamped, nothing recorded.
    /// Returns true if the scroll offset changed.
    pub fn scroll_by_user(&mut self, top: i32) -> bool {
        let top = self.clamp_scroll(top);
        let x = self.viewport.scroll_x();
        self.viewport.set_scroll(x, top)
    }

    /// Scroll the window so that `id` lands at `align`. Returns false when
    /// the element has no layout.
    pub fn scroll_into_view(
        &mut self,
        id: &str,
        align: ScrollAlign,
        behavior: ScrollBehavior,
    ) -> bool {
        let Some(rect) = self.rect(id) else {
            log::debug!("[scroll_into_view] no layout for {id}");
            return false;
        };

        let top = match align {
            ScrollAlign::Start => rect.top(),
            ScrollAlign::Center => rect.center().1 - self.viewport.height / 2,
            ScrollAlign::End => rect.bottom() - self.viewport.height,
        };
        self.scroll_window_to(top, behavior);
        true
    }

    // =========================================================================
    // Focus
    // =========================================================================

    pub fn focused(&self) -> Option<&str> {
        self.focus.focused()
    }

    /// Focus an element. Unknown, non-focusable and disabled elements are
    /// refused.
    pub fn focus(&mut self, id: &str) -> bool {
        let Some(el) = self.get(id) else {
            return false;
        };
        if !el.focusable || el.disabled {
            return false;
        }
        self.focus.focus(id);
        true
    }

    pub fn blur(&mut self) -> bool {
        self.focus.blur().is_some()
    }
}
