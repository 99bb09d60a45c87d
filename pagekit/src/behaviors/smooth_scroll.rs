use webdom::{Event, EventKind, ScrollBehavior, SelectorList};

use crate::behavior::{Behavior, PageContext};
use crate::config::{self, ConfigError, SmoothScrollConfig};

/// In-page anchors scroll smoothly to their target, leaving room for the
/// fixed header.
#[derive(Debug)]
pub struct SmoothScroll {
    anchors: SelectorList,
    header_offset: i32,
}

impl SmoothScroll {
    pub fn new(config: &SmoothScrollConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            anchors: config::selector("smooth_scroll.anchors", &config.anchors)?,
            header_offset: config.header_offset,
        })
    }
}

impl Behavior for SmoothScroll {
    fn name(&self) -> &'static str {
        "smooth-scroll"
    }

    fn attach(&mut self, cx: &mut PageContext<'_>) {
        for anchor in cx.document().select_all(&self.anchors, None) {
            cx.listen_element(EventKind::Click, anchor);
        }
    }

    fn handle(&mut self, event: &Event, current_target: Option<&str>, cx: &mut PageContext<'_>) {
        if !matches!(event, Event::Click { .. }) {
            return;
        }
        let Some(anchor) = current_target else {
            return;
        };
        let Some(href) = cx
            .document()
            .get(anchor)
            .and_then(|a| a.get_attr("href"))
            .map(str::to_string)
        else {
            return;
        };
        if href == "#" || href == "#!" {
            return;
        }

        let target = match cx.document().query_selector(&href) {
            Ok(Some(target)) => target,
            Ok(None) => return,
            Err(e) => {
                log::debug!("[smooth-scroll] skipping {href}: {e}");
                return;
            }
        };
        let Some(rect) = cx.document().rect(&target) else {
            log::debug!("[smooth-scroll] {target} has no layout");
            return;
        };

        cx.prevent_default();
        cx.document_mut()
            .scroll_window_to(rect.top() - self.header_offset, ScrollBehavior::Smooth);
    }
}
