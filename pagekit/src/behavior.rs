//! The behavior trait and the context handed to it.
//!
//! A behavior is a component instance that owns its state. The page calls
//! `attach` once, where the behavior resolves its elements and subscribes
//! listeners, then `handle` for every matching event, `on_timer` for its
//! timers and finally `detach`. Listeners and timers left behind at detach
//! are removed by the page.

use std::time::Duration;

use webdom::{Document, Event, EventKind};

use crate::runtime::dispatch::Listeners;
use crate::timer::{Scheduler, TimerId};

/// Index of an attached behavior within its page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BehaviorId(pub(crate) usize);

/// Handle to a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(crate) u64);

/// What a listener is registered on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListenerTarget {
    /// Window events (scroll, resize).
    Window,
    /// Every bubbling element event in the document.
    Document,
    /// Events on this element or, for bubbling events, its descendants.
    Element(String),
}

pub trait Behavior {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Resolve targets, create elements and subscribe listeners.
    fn attach(&mut self, cx: &mut PageContext<'_>);

    /// React to an event. `current_target` is the element the listener was
    /// registered on, `None` for window and document listeners.
    fn handle(&mut self, event: &Event, current_target: Option<&str>, cx: &mut PageContext<'_>);

    /// A timer scheduled through `PageContext::schedule` fired.
    fn on_timer(&mut self, _timer: TimerId, _cx: &mut PageContext<'_>) {}

    /// Undo what `attach` did to the document.
    fn detach(&mut self, _cx: &mut PageContext<'_>) {}
}

/// Access to the page for one behavior call.
pub struct PageContext<'a> {
    document: &'a mut Document,
    scheduler: &'a mut Scheduler,
    listeners: &'a mut Listeners,
    owner: BehaviorId,
    now: Duration,
    default_prevented: bool,
}

impl<'a> PageContext<'a> {
    pub(crate) fn new(
        document: &'a mut Document,
        scheduler: &'a mut Scheduler,
        listeners: &'a mut Listeners,
        owner: BehaviorId,
        now: Duration,
        default_prevented: bool,
    ) -> Self {
        Self {
            document,
            scheduler,
            listeners,
            owner,
            now,
            default_prevented,
        }
    }

    pub fn document(&self) -> &Document {
        &*self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut *self.document
    }

    /// Id of the behavior this context was created for.
    pub fn owner(&self) -> BehaviorId {
        self.owner
    }

    /// Current page time.
    pub fn now(&self) -> Duration {
        self.now
    }

    // Listeners

    pub fn listen(&mut self, kind: EventKind, target: ListenerTarget) -> ListenerId {
        self.listeners.add(self.owner, kind, target)
    }

    pub fn listen_element(&mut self, kind: EventKind, id: impl Into<String>) -> ListenerId {
        self.listen(kind, ListenerTarget::Element(id.into()))
    }

    pub fn unlisten(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    // Timers

    /// Schedule a one-shot timer delivered to this behavior's `on_timer`.
    pub fn schedule(&mut self, delay: Duration) -> TimerId {
        self.scheduler.schedule(self.owner, self.now, delay)
    }

    pub fn cancel(&mut self, timer: TimerId) -> bool {
        self.scheduler.cancel(timer)
    }

    // Default action

    /// Cancel the default action of the event being dispatched.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether this or an earlier listener cancelled the default action.
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
