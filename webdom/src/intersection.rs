//! Viewport intersection tracking, in the manner of `IntersectionObserver`.
//!
//! A target is intersecting whenever it overlaps the root at all. The observer
//! keeps each target's last state (intersecting, and which side of the
//! threshold its ratio is on) and reports an entry when either changes. The
//! first evaluation after `observe` always reports.

use std::collections::HashMap;

use crate::document::Document;
use crate::layout::Rect;
use crate::types::Edges;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionOptions {
    /// Visible fraction (0.0 to 1.0) whose crossing produces an entry.
    pub threshold: f64,
    /// Grows (positive) or shrinks (negative) the viewport before testing.
    pub root_margin: Edges,
}

impl Default for IntersectionOptions {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            root_margin: Edges::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry {
    pub target: String,
    pub ratio: f64,
    pub is_intersecting: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Observation {
    is_intersecting: bool,
    past_threshold: bool,
}

#[derive(Debug, Default)]
pub struct IntersectionObserver {
    options: IntersectionOptions,
    targets: Vec<String>,
    /// Last reported state; absent until the first evaluation.
    previous: HashMap<String, Observation>,
}

impl IntersectionObserver {
    pub fn new(options: IntersectionOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    pub fn options(&self) -> IntersectionOptions {
        self.options
    }

    pub fn observe(&mut self, id: impl Into<String>) {
        let id = id.into();
        if !self.targets.contains(&id) {
            self.targets.push(id);
        }
    }

    pub fn unobserve(&mut self, id: &str) {
        self.targets.retain(|t| t != id);
        self.previous.remove(id);
    }

    pub fn disconnect(&mut self) {
        self.targets.clear();
        self.previous.clear();
    }

    pub fn observed(&self) -> &[String] {
        &self.targets
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Evaluate every target against the document's viewport and return the
    /// entries whose state changed. Targets no longer in the tree are
    /// unobserved; targets without layout are skipped.
    pub fn take_records(&mut self, document: &Document) -> Vec<IntersectionEntry> {
        let observed = self.targets.len();
        self.targets.retain(|t| document.get(t).is_some());
        if self.targets.len() != observed {
            let targets = &self.targets;
            self.previous.retain(|t, _| targets.contains(t));
            log::debug!(
                "[intersection] unobserved {} removed targets",
                observed - self.targets.len()
            );
        }

        let root = document
            .viewport()
            .visible_rect()
            .expand(self.options.root_margin);

        let mut entries = Vec::new();
        for target in &self.targets {
            let Some(rect) = document.rect(target) else {
                continue;
            };

            let ratio = intersection_ratio(&root, &rect);
            let is_intersecting = ratio > 0.0;
            let observation = Observation {
                is_intersecting,
                past_threshold: is_intersecting && ratio >= self.options.threshold,
            };

            if self.previous.get(target) != Some(&observation) {
                self.previous.insert(target.clone(), observation);
                entries.push(IntersectionEntry {
                    target: target.clone(),
                    ratio,
                    is_intersecting,
                });
            }
        }

        if !entries.is_empty() {
            log::debug!("[intersection] {} entries", entries.len());
        }
        entries
    }
}

/// Visible fraction of `target` within `root`. Zero-area targets count as
/// fully visible when their origin lies inside the root.
fn intersection_ratio(root: &Rect, target: &Rect) -> f64 {
    if target.is_empty() {
        let (x, y) = (target.x, target.y);
        let inside = x >= root.left() && x <= root.right() && y >= root.top() && y <= root.bottom();
        return if inside && !root.is_empty() { 1.0 } else { 0.0 };
    }

    match root.intersection(target) {
        Some(overlap) => overlap.area() as f64 / target.area() as f64,
        None => 0.0,
    }
}
