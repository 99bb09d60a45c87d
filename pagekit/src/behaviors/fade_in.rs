use webdom::{Event, EventKind, IntersectionObserver, IntersectionOptions, SelectorList};

use crate::behavior::{Behavior, ListenerId, ListenerTarget, PageContext};
use crate::config::{self, ConfigError, FadeInConfig};

/// Adds a fade-in class to cards the first time they scroll into view.
#[derive(Debug)]
pub struct FadeIn {
    targets: SelectorList,
    class: String,
    observer: IntersectionObserver,
    listeners: Vec<ListenerId>,
}

impl FadeIn {
    pub fn new(config: &FadeInConfig) -> Result<Self, ConfigError> {
        let options = IntersectionOptions {
            threshold: config.threshold,
            root_margin: config.root_margin()?,
        };
        Ok(Self {
            targets: config::selector("fade_in.targets", &config.targets)?,
            class: config.class.clone(),
            observer: IntersectionObserver::new(options),
            listeners: Vec::new(),
        })
    }

    /// Targets that have not faded in yet.
    pub fn remaining(&self) -> &[String] {
        self.observer.observed()
    }

    fn evaluate(&mut self, cx: &mut PageContext<'_>) {
        let entries = self.observer.take_records(cx.document());
        for entry in entries.into_iter().filter(|e| e.is_intersecting) {
            cx.document_mut().toggle_class(&entry.target, &self.class, true);
            self.observer.unobserve(&entry.target);
        }

        if self.observer.is_empty() && !self.listeners.is_empty() {
            for id in self.listeners.drain(..) {
                cx.unlisten(id);
            }
            log::debug!("[fade-in] every target shown");
        }
    }
}

impl Behavior for FadeIn {
    fn name(&self) -> &'static str {
        "fade-in"
    }

    fn attach(&mut self, cx: &mut PageContext<'_>) {
        for target in cx.document().select_all(&self.targets, None) {
            self.observer.observe(target);
        }
        if self.observer.is_empty() {
            return;
        }

        self.listeners = vec![
            cx.listen(EventKind::Scroll, ListenerTarget::Window),
            cx.listen(EventKind::Resize, ListenerTarget::Window),
        ];
        self.evaluate(cx);
    }

    fn handle(&mut self, event: &Event, _current_target: Option<&str>, cx: &mut PageContext<'_>) {
        if matches!(event, Event::Scroll | Event::Resize { .. }) {
            self.evaluate(cx);
        }
    }

    fn detach(&mut self, _cx: &mut PageContext<'_>) {
        self.observer.disconnect();
        self.listeners.clear();
    }
}
