//! Reveal-on-scroll tracking.
//!
//! Elements start hidden and are revealed once enough of them has scrolled
//! into the viewport. Reveal is one-way: scrolling back does not hide them.

use std::collections::HashSet;
use std::hash::Hash;

/// Fraction of an element that must be visible before it is revealed
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Vertical extent of an element or the viewport, in client pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Visible fraction of `element` within `viewport`, in `0.0..=1.0`.
pub fn intersection_ratio(element: Bounds, viewport: Bounds) -> f64 {
    if element.height <= 0.0 {
        return 0.0;
    }
    let visible = element.bottom().min(viewport.bottom()) - element.top.max(viewport.top);
    (visible.max(0.0) / element.height).min(1.0)
}

/// Remembers which elements have been revealed.
#[derive(Clone, Debug)]
pub struct RevealTracker<K> {
    revealed: HashSet<K>,
}

impl<K: Eq + Hash> Default for RevealTracker<K> {
    fn default() -> Self {
        Self {
            revealed: HashSet::new(),
        }
    }
}

impl<K: Eq + Hash> RevealTracker<K> {
    /// Would this measurement reveal `key`? Does not record anything.
    pub fn should_reveal(&self, key: &K, element: Bounds, viewport: Bounds) -> bool {
        !self.revealed.contains(key) && intersection_ratio(element, viewport) >= REVEAL_THRESHOLD
    }

    /// Record a fresh measurement. Returns true when `key` is newly revealed.
    pub fn observe(&mut self, key: K, element: Bounds, viewport: Bounds) -> bool {
        if self.should_reveal(&key, element, viewport) {
            self.revealed.insert(key)
        } else {
            false
        }
    }

    pub fn is_revealed(&self, key: &K) -> bool {
        self.revealed.contains(key)
    }
}
