/// `document.activeElement`, by id. `None` means the body has focus.
#[derive(Debug, Default)]
pub struct FocusState {
    active: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_focused(&self, id: &str) -> bool {
        self.focused() == Some(id)
    }

    /// Move focus to `id`, returning the element that lost it.
    pub fn focus(&mut self, id: &str) -> Option<String> {
        if self.is_focused(id) {
            return None;
        }
        self.active.replace(id.to_string())
    }

    /// Return focus to the body, returning the element that lost it.
    pub fn blur(&mut self) -> Option<String> {
        self.active.take()
    }
}
