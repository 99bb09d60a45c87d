use std::time::Duration;

use webdom::{Content, Element, Event, EventKind, SelectorList};

use crate::behavior::{Behavior, PageContext};
use crate::config::{self, ButtonLoadingConfig, ConfigError};
use crate::timer::TimerId;

/// A button currently showing the loading state.
#[derive(Debug)]
struct Loading {
    button: String,
    form: String,
    original: Content,
    fallback: TimerId,
}

/// Puts a form's submit button in a loading state while the submission is
/// in flight, with a timed fallback in case the page never navigates away.
#[derive(Debug)]
pub struct ButtonLoading {
    forms: SelectorList,
    submit: SelectorList,
    spinner: SelectorList,
    class: String,
    spinner_class: String,
    fallback: Duration,
    loading: Vec<Loading>,
}

impl ButtonLoading {
    pub fn new(config: &ButtonLoadingConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            forms: config::selector("button_loading.forms", &config.forms)?,
            submit: config::selector("button_loading.submit", &config.submit)?,
            spinner: config::selector(
                "button_loading.spinner_class",
                &format!(".{}", config.spinner_class),
            )?,
            class: config.class.clone(),
            spinner_class: config.spinner_class.clone(),
            fallback: config.fallback(),
            loading: Vec::new(),
        })
    }

    pub fn is_loading(&self, button: &str) -> bool {
        self.loading.iter().any(|l| l.button == button)
    }

    fn start(&mut self, form: &str, cx: &mut PageContext<'_>) {
        let Some(button) = cx.document().select_first(&self.submit, Some(form)) else {
            return;
        };
        if self.is_loading(&button) {
            return;
        }
        let has_spinner = cx
            .document()
            .select_first(&self.spinner, Some(&button))
            .is_some();

        let Some(el) = cx.document_mut().get_mut(&button) else {
            return;
        };
        if el.disabled {
            return;
        }

        let original = el.content.clone();
        el.add_class(&self.class);
        el.disabled = true;
        // An <input> has no content to swap.
        if !has_spinner && el.tag != "input" {
            el.content = Content::Children(vec![Element::span().class(self.spinner_class.as_str())]);
        }

        let fallback = cx.schedule(self.fallback);
        log::debug!("[button-loading] {button} loading until {:?}", cx.now() + self.fallback);
        self.loading.push(Loading {
            button,
            form: form.to_string(),
            original,
            fallback,
        });
    }

    fn restore(&self, loading: Loading, cx: &mut PageContext<'_>) {
        if let Some(el) = cx.document_mut().get_mut(&loading.button) {
            el.remove_class(&self.class);
            el.disabled = false;
            el.content = loading.original;
        }
        log::debug!("[button-loading] restored {}", loading.button);
    }

    fn take_where(&mut self, pred: impl Fn(&Loading) -> bool) -> Vec<Loading> {
        let (taken, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.loading).into_iter().partition(pred);
        self.loading = kept;
        taken
    }
}

impl Behavior for ButtonLoading {
    fn name(&self) -> &'static str {
        "button-loading"
    }

    fn attach(&mut self, cx: &mut PageContext<'_>) {
        for form in cx.document().select_all(&self.forms, None) {
            cx.listen_element(EventKind::Submit, form.as_str());
            cx.listen_element(EventKind::Reset, form.as_str());
        }
    }

    fn handle(&mut self, event: &Event, current_target: Option<&str>, cx: &mut PageContext<'_>) {
        let Some(form) = current_target else {
            return;
        };

        match event {
            Event::Submit { .. } => {
                if cx.default_prevented() {
                    log::debug!("[button-loading] submit of {form} was cancelled");
                    return;
                }
                self.start(form, cx);
            }
            Event::Reset { .. } => {
                for loading in self.take_where(|l| l.form == form) {
                    cx.cancel(loading.fallback);
                    self.restore(loading, cx);
                }
            }
            _ => {}
        }
    }

    fn on_timer(&mut self, timer: TimerId, cx: &mut PageContext<'_>) {
        for loading in self.take_where(|l| l.fallback == timer) {
            self.restore(loading, cx);
        }
    }

    fn detach(&mut self, cx: &mut PageContext<'_>) {
        for loading in std::mem::take(&mut self.loading) {
            cx.cancel(loading.fallback);
            self.restore(loading, cx);
        }
    }
}
