use webdom::{Event, EventKind, SelectorList};

use crate::behavior::{Behavior, ListenerTarget, PageContext};
use crate::config::{self, ConfigError, HeaderConfig};

/// Marks the header once the page scrolls past a threshold.
#[derive(Debug)]
pub struct HeaderScroll {
    selector: SelectorList,
    threshold: i32,
    class: String,
    header: Option<String>,
}

impl HeaderScroll {
    pub fn new(config: &HeaderConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            selector: config::selector("header.selector", &config.selector)?,
            threshold: config.threshold,
            class: config.class.clone(),
            header: None,
        })
    }

    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    fn sync(&self, cx: &mut PageContext<'_>) {
        let Some(header) = &self.header else {
            return;
        };
        let scrolled = cx.document().viewport().scroll_y() > self.threshold;
        cx.document_mut().toggle_class(header, &self.class, scrolled);
    }
}

impl Behavior for HeaderScroll {
    fn name(&self) -> &'static str {
        "header-scroll"
    }

    fn attach(&mut self, cx: &mut PageContext<'_>) {
        self.header = cx.document().select_first(&self.selector, None);
        if self.header.is_none() {
            log::debug!("[header-scroll] no header on page");
            return;
        }
        cx.listen(EventKind::Scroll, ListenerTarget::Window);
        self.sync(cx);
    }

    fn handle(&mut self, event: &Event, _current_target: Option<&str>, cx: &mut PageContext<'_>) {
        if *event == Event::Scroll {
            self.sync(cx);
        }
    }
}
