//! The page runtime.
//!
//! `Page` owns the document, the attached behaviors, their listeners and
//! their timers. The host feeds it events and calls `run_due_timers`; there
//! is no event loop of its own.

pub mod dispatch;

use std::time::Duration;

use webdom::{Document, Event};

use crate::behavior::{Behavior, BehaviorId, PageContext};
use crate::behaviors::{
    ButtonLoading, FadeIn, FormValidation, HeaderScroll, MobileMenu, ScrollToTop, SmoothScroll,
};
use crate::clock::{Clock, SystemClock};
use crate::config::{ConfigError, PageConfig};
use crate::timer::Scheduler;
use dispatch::Listeners;

/// Result of dispatching one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchOutcome {
    /// A listener called `prevent_default`.
    pub default_prevented: bool,
    /// Number of listeners that ran.
    pub handled: usize,
}

pub struct Page {
    document: Document,
    clock: Box<dyn Clock>,
    scheduler: Scheduler,
    listeners: Listeners,
    /// Indexed by `BehaviorId`; detached slots are `None`.
    behaviors: Vec<Option<Box<dyn Behavior>>>,
}

impl Page {
    /// Create a page driven by the wall clock.
    pub fn new(document: Document) -> Self {
        Self::with_clock(document, SystemClock::new())
    }

    pub fn with_clock(document: Document, clock: impl Clock + 'static) -> Self {
        Self {
            document,
            clock: Box::new(clock),
            scheduler: Scheduler::new(),
            listeners: Listeners::new(),
            behaviors: Vec::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Attach a behavior and run its setup.
    pub fn attach(&mut self, behavior: impl Behavior + 'static) -> BehaviorId {
        let id = BehaviorId(self.behaviors.len());
        let mut behavior: Box<dyn Behavior> = Box::new(behavior);
        let now = self.clock.now();

        let mut cx = PageContext::new(
            &mut self.document,
            &mut self.scheduler,
            &mut self.listeners,
            id,
            now,
            false,
        );
        behavior.attach(&mut cx);

        log::info!(
            "[page] attached {} with {} listeners",
            behavior.name(),
            self.listeners.count_for(id)
        );
        self.behaviors.push(Some(behavior));
        id
    }

    /// Run a behavior's teardown and drop its listeners and timers.
    /// Returns false if it was not attached.
    pub fn detach(&mut self, id: BehaviorId) -> bool {
        let Some(mut behavior) = self.behaviors.get_mut(id.0).and_then(Option::take) else {
            return false;
        };
        let now = self.clock.now();

        let mut cx = PageContext::new(
            &mut self.document,
            &mut self.scheduler,
            &mut self.listeners,
            id,
            now,
            false,
        );
        behavior.detach(&mut cx);

        let listeners = self.listeners.remove_owner(id);
        let timers = self.scheduler.cancel_owner(id);
        log::info!(
            "[page] detached {} ({listeners} listeners, {timers} timers)",
            behavior.name()
        );
        true
    }

    /// Detach every behavior, most recent first.
    pub fn teardown(&mut self) {
        for index in (0..self.behaviors.len()).rev() {
            self.detach(BehaviorId(index));
        }
    }

    pub fn is_attached(&self, id: BehaviorId) -> bool {
        self.behaviors.get(id.0).is_some_and(Option::is_some)
    }

    /// Attach the full set of site behaviors in their canonical order.
    ///
    /// Every behavior is built before any is attached, so a bad config
    /// leaves the page untouched.
    pub fn install_defaults(&mut self, config: &PageConfig) -> Result<Vec<BehaviorId>, ConfigError> {
        let scroll_to_top = ScrollToTop::new(&config.scroll_to_top);
        let header = HeaderScroll::new(&config.header)?;
        let smooth_scroll = SmoothScroll::new(&config.smooth_scroll)?;
        let validation = FormValidation::new(&config.validation)?;
        let button_loading = ButtonLoading::new(&config.button_loading)?;
        let fade_in = FadeIn::new(&config.fade_in)?;
        let mobile_menu = MobileMenu::new(&config.mobile_menu)?;

        Ok(vec![
            self.attach(scroll_to_top),
            self.attach(header),
            self.attach(smooth_scroll),
            self.attach(validation),
            self.attach(button_loading),
            self.attach(fade_in),
            self.attach(mobile_menu),
        ])
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Apply the event's built-in effect, then run matching listeners.
    ///
    /// If listeners moved the window, one follow-up `Scroll` is dispatched
    /// so scroll-driven behaviors catch up.
    pub fn dispatch(&mut self, event: Event) -> DispatchOutcome {
        self.apply_builtin(&event);

        let scroll_before = self.document.viewport().scroll_y();
        let outcome = self.deliver(&event);

        if event != Event::Scroll && self.document.viewport().scroll_y() != scroll_before {
            self.deliver(&Event::Scroll);
        }
        outcome
    }

    fn apply_builtin(&mut self, event: &Event) {
        match event {
            Event::Input { target, value } => {
                if let Some(el) = self.document.get_mut(target) {
                    el.value.clone_from(value);
                }
            }
            Event::Focus { target } => {
                self.document.focus(target);
            }
            Event::Blur { target } => {
                if self.document.focused() == Some(target.as_str()) {
                    self.document.blur();
                }
            }
            Event::Resize { width, height } => {
                self.document.viewport_mut().resize(*width, *height);
            }
            _ => {}
        }
    }

    fn deliver(&mut self, event: &Event) -> DispatchOutcome {
        let routes = self.listeners.route(event, &self.document);
        let now = self.clock.now();
        let mut outcome = DispatchOutcome::default();

        for route in routes {
            // An earlier listener may have detached this one.
            if !self.listeners.contains(route.listener) {
                continue;
            }
            let Some(behavior) = self.behaviors.get_mut(route.owner.0).and_then(Option::as_mut)
            else {
                continue;
            };

            let mut cx = PageContext::new(
                &mut self.document,
                &mut self.scheduler,
                &mut self.listeners,
                route.owner,
                now,
                outcome.default_prevented,
            );
            behavior.handle(event, route.current_target.as_deref(), &mut cx);
            outcome.default_prevented = cx.default_prevented();
            outcome.handled += 1;
        }

        log::debug!("[page] {event:?} -> {outcome:?}");
        outcome
    }

    // Host helpers

    /// The user scrolled the window to `top`, clamped to the page.
    pub fn scroll_window_to(&mut self, top: i32) -> DispatchOutcome {
        if !self.document.scroll_by_user(top) {
            return DispatchOutcome::default();
        }
        self.dispatch(Event::Scroll)
    }

    pub fn resize(&mut self, width: i32, height: i32) -> DispatchOutcome {
        self.dispatch(Event::Resize { width, height })
    }

    pub fn click(&mut self, target: impl Into<String>) -> DispatchOutcome {
        self.dispatch(Event::Click {
            target: target.into(),
        })
    }

    /// Replace a field's value and fire `input`.
    pub fn type_into(&mut self, target: impl Into<String>, value: impl Into<String>) -> DispatchOutcome {
        self.dispatch(Event::Input {
            target: target.into(),
            value: value.into(),
        })
    }

    pub fn focus(&mut self, target: impl Into<String>) -> DispatchOutcome {
        self.dispatch(Event::Focus {
            target: target.into(),
        })
    }

    pub fn blur(&mut self, target: impl Into<String>) -> DispatchOutcome {
        self.dispatch(Event::Blur {
            target: target.into(),
        })
    }

    /// Submit a form. `default_prevented` means the submission was cancelled.
    pub fn submit(&mut self, form: impl Into<String>) -> DispatchOutcome {
        self.dispatch(Event::Submit {
            target: form.into(),
        })
    }

    pub fn reset(&mut self, form: impl Into<String>) -> DispatchOutcome {
        self.dispatch(Event::Reset {
            target: form.into(),
        })
    }

    // =========================================================================
    // Timers
    // =========================================================================

    /// Deliver every timer that is due now. Timers scheduled while delivering
    /// wait for the next call. Returns how many fired.
    pub fn run_due_timers(&mut self) -> usize {
        let now = self.clock.now();
        let watermark = self.scheduler.watermark();
        let mut fired = 0;

        while let Some(timer) = self.scheduler.pop_due(now, watermark) {
            let Some(behavior) = self.behaviors.get_mut(timer.owner.0).and_then(Option::as_mut)
            else {
                continue;
            };

            let mut cx = PageContext::new(
                &mut self.document,
                &mut self.scheduler,
                &mut self.listeners,
                timer.owner,
                now,
                false,
            );
            behavior.on_timer(timer.id, &mut cx);
            fired += 1;
        }

        if fired > 0 {
            log::debug!("[page] fired {fired} timers at {now:?}");
        }
        fired
    }

    pub fn pending_timers(&self) -> usize {
        self.scheduler.len()
    }

    pub fn next_timer_deadline(&self) -> Option<Duration> {
        self.scheduler.next_deadline()
    }
}
