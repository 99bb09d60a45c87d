use webdom::{Element, Event, EventKind, ScrollBehavior};

use crate::behavior::{Behavior, ListenerTarget, PageContext};
use crate::config::ScrollToTopConfig;

/// A floating "back to top" button, shown once the page is scrolled down.
#[derive(Debug)]
pub struct ScrollToTop {
    config: ScrollToTopConfig,
    button: Option<String>,
}

impl ScrollToTop {
    pub fn new(config: &ScrollToTopConfig) -> Self {
        Self {
            config: config.clone(),
            button: None,
        }
    }

    /// Id of the injected button, once attached.
    pub fn button(&self) -> Option<&str> {
        self.button.as_deref()
    }

    fn sync(&self, cx: &mut PageContext<'_>) {
        let Some(button) = &self.button else {
            return;
        };
        let visible = cx.document().viewport().scroll_y() > self.config.threshold;
        cx.document_mut()
            .toggle_class(button, &self.config.visible_class, visible);
    }
}

impl Behavior for ScrollToTop {
    fn name(&self) -> &'static str {
        "scroll-to-top"
    }

    fn attach(&mut self, cx: &mut PageContext<'_>) {
        let button = Element::button()
            .class(self.config.class.as_str())
            .attr("aria-label", self.config.label.as_str())
            .child(Element::new("i").classes(&self.config.icon));
        let id = button.id.clone();

        let body = cx.document().body_id().to_string();
        if let Err(e) = cx.document_mut().append_child(&body, button) {
            log::warn!("[scroll-to-top] could not add button: {e}");
            return;
        }

        cx.listen(EventKind::Scroll, ListenerTarget::Window);
        cx.listen_element(EventKind::Click, id.as_str());
        self.button = Some(id);
        self.sync(cx);
    }

    fn handle(&mut self, event: &Event, _current_target: Option<&str>, cx: &mut PageContext<'_>) {
        match event {
            Event::Scroll => self.sync(cx),
            Event::Click { .. } => {
                cx.document_mut().scroll_window_to(0, ScrollBehavior::Smooth);
            }
            _ => {}
        }
    }

    fn detach(&mut self, cx: &mut PageContext<'_>) {
        if let Some(button) = self.button.take() {
            cx.document_mut().remove(&button);
        }
    }
}
