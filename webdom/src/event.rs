/// Page events delivered by the host.
///
/// Element events carry the id of the element the event originated on.
/// Window events (`Scroll`, `Resize`) read their state from the document's
/// viewport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The window scroll position changed.
    Scroll,
    /// The viewport was resized.
    Resize { width: i32, height: i32 },
    /// Primary button click on an element.
    Click { target: String },
    /// A field's value changed to `value`.
    Input { target: String, value: String },
    /// Element gained focus
    Focus { target: String },
    /// Element lost focus
    Blur { target: String },
    /// A form is being submitted.
    Submit { target: String },
    /// A form was reset.
    Reset { target: String },
    /// A collapsible finished expanding (`shown.bs.collapse`).
    CollapseShown { target: String },
}

/// Event discriminant used for listener registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Scroll,
    Resize,
    Click,
    Input,
    Focus,
    Blur,
    Submit,
    Reset,
    CollapseShown,
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Scroll => EventKind::Scroll,
            Event::Resize { .. } => EventKind::Resize,
            Event::Click { .. } => EventKind::Click,
            Event::Input { .. } => EventKind::Input,
            Event::Focus { .. } => EventKind::Focus,
            Event::Blur { .. } => EventKind::Blur,
            Event::Submit { .. } => EventKind::Submit,
            Event::Reset { .. } => EventKind::Reset,
            Event::CollapseShown { .. } => EventKind::CollapseShown,
        }
    }

    /// The element the event originated on, `None` for window events.
    pub fn target(&self) -> Option<&str> {
        match self {
            Event::Scroll | Event::Resize { .. } => None,
            Event::Click { target }
            | Event::Input { target, .. }
            | Event::Focus { target }
            | Event::Blur { target }
            | Event::Submit { target }
            | Event::Reset { target }
            | Event::CollapseShown { target } => Some(target),
        }
    }
}

impl EventKind {
    /// Whether the event propagates to ancestors of its target.
    /// Focus and blur don't bubble, matching the DOM.
    pub fn bubbles(self) -> bool {
        !matches!(self, EventKind::Focus | EventKind::Blur)
    }

    pub fn is_window_event(self) -> bool {
        matches!(self, EventKind::Scroll | EventKind::Resize)
    }
}
