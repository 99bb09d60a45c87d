//! Listener registry and event routing.
//!
//! Routing follows DOM bubbling: listeners on the target element run first,
//! then listeners on each ancestor up to the body, then document listeners.
//! Window events go to window listeners only. Within one node, listeners run
//! in registration order.

use webdom::{Document, Event, EventKind};

use crate::behavior::{BehaviorId, ListenerId, ListenerTarget};

#[derive(Debug, Clone)]
struct Listener {
    id: ListenerId,
    owner: BehaviorId,
    kind: EventKind,
    target: ListenerTarget,
}

/// A listener selected for one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub listener: ListenerId,
    pub owner: BehaviorId,
    /// Element the listener is registered on.
    pub current_target: Option<String>,
}

#[derive(Debug, Default)]
pub struct Listeners {
    next_id: u64,
    entries: Vec<Listener>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, owner: BehaviorId, kind: EventKind, target: ListenerTarget) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Listener {
            id,
            owner,
            kind,
            target,
        });
        id
    }

    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|l| l.id != id);
        self.entries.len() != before
    }

    /// Drop every listener of `owner`. Returns how many were removed.
    pub fn remove_owner(&mut self, owner: BehaviorId) -> usize {
        let before = self.entries.len();
        self.entries.retain(|l| l.owner != owner);
        before - self.entries.len()
    }

    pub fn contains(&self, id: ListenerId) -> bool {
        self.entries.iter().any(|l| l.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count_for(&self, owner: BehaviorId) -> usize {
        self.entries.iter().filter(|l| l.owner == owner).count()
    }

    /// Listeners that should see `event`, in invocation order.
    pub fn route(&self, event: &Event, document: &Document) -> Vec<Route> {
        let kind = event.kind();

        if kind.is_window_event() {
            return self
                .entries
                .iter()
                .filter(|l| l.kind == kind && l.target == ListenerTarget::Window)
                .map(|l| route_to(l, None))
                .collect();
        }

        let Some(target) = event.target() else {
            return Vec::new();
        };
        if document.get(target).is_none() {
            log::debug!("[dispatch] dropping {kind:?} for detached element {target}");
            return Vec::new();
        }

        let path = propagation_path(document, target, kind.bubbles());
        let document_depth = path.len();

        let mut routed: Vec<(usize, Route)> = self
            .entries
            .iter()
            .filter(|l| l.kind == kind)
            .filter_map(|l| match &l.target {
                ListenerTarget::Window => None,
                ListenerTarget::Document if kind.bubbles() => {
                    Some((document_depth, route_to(l, None)))
                }
                ListenerTarget::Document => None,
                ListenerTarget::Element(id) => {
                    let depth = path.iter().position(|p| p == id)?;
                    Some((depth, route_to(l, Some(id.clone()))))
                }
            })
            .collect();

        // Stable: registration order is kept within each depth.
        routed.sort_by_key(|(depth, _)| *depth);
        routed.into_iter().map(|(_, route)| route).collect()
    }
}

fn route_to(listener: &Listener, current_target: Option<String>) -> Route {
    Route {
        listener: listener.id,
        owner: listener.owner,
        current_target,
    }
}

/// The target followed by its ancestors, nearest first. Non-bubbling events
/// stop at the target.
fn propagation_path(document: &Document, target: &str, bubbles: bool) -> Vec<String> {
    let mut path = vec![target.to_string()];
    if !bubbles {
        return path;
    }

    let mut current = target.to_string();
    while let Some(parent) = document.parent_of(&current) {
        path.push(parent.id.clone());
        current = parent.id.clone();
    }
    path
}
