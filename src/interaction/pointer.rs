//! Pointer gesture classification
//!
//! Raw press/move/release samples become clicks, drags and double clicks.
//! A press that travels less than the drag threshold before release is a
//! click. Two clicks on the same target inside the double-click window form a
//! double click; both clicks are still delivered as single clicks first.

use bevy::math::Vec2;

use crate::config::pointer::{CLICK_DRAG_THRESHOLD, DOUBLE_CLICK_WINDOW};

/// Result of releasing the pointer button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// Released close to where it was pressed
    Click,
    /// Released after travelling past the threshold
    DragEnd,
    /// Released without a tracked press (e.g. press happened off-window)
    Untracked,
}

/// Separates clicks from drags for one button
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGate {
    threshold: f32,
    origin: Option<Vec2>,
    dragging: bool,
}

impl Default for DragGate {
    fn default() -> Self {
        Self::new(CLICK_DRAG_THRESHOLD)
    }
}

impl DragGate {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            origin: None,
            dragging: false,
        }
    }

    pub fn press(&mut self, at: Vec2) {
        self.origin = Some(at);
        self.dragging = false;
    }

    /// Feed the current cursor position; returns whether a drag is active
    pub fn track(&mut self, at: Vec2) -> bool {
        if let Some(origin) = self.origin {
            if !self.dragging && origin.distance(at) > self.threshold {
                self.dragging = true;
            }
        }
        self.dragging
    }

    pub fn release(&mut self, at: Vec2) -> Release {
        let outcome = match self.origin {
            None => Release::Untracked,
            Some(_) => {
                if self.track(at) {
                    Release::DragEnd
                } else {
                    Release::Click
                }
            }
        };
        self.origin = None;
        self.dragging = false;
        outcome
    }

    pub fn is_pressed(&self) -> bool {
        self.origin.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
}

/// Pairs consecutive clicks on the same target into double clicks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoubleClickDetector<K> {
    window: f64,
    last: Option<(K, f64)>,
}

impl<K> Default for DoubleClickDetector<K> {
    fn default() -> Self {
        Self::new(DOUBLE_CLICK_WINDOW)
    }
}

impl<K> DoubleClickDetector<K> {
    pub fn new(window: f64) -> Self {
        Self { window, last: None }
    }

    /// Forget the pending click, e.g. after a click on empty space
    pub fn reset(&mut self) {
        self.last = None;
    }
}

impl<K: PartialEq + Copy> DoubleClickDetector<K> {
    /// Record a click at `now` seconds; returns true if it completes a double click
    pub fn register(&mut self, target: K, now: f64) -> bool {
        match self.last {
            Some((prev, at)) if prev == target && now - at <= self.window => {
                self.last = None;
                true
            }
            _ => {
                self.last = Some((target, now));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_travel_is_a_click() {
        let mut gate = DragGate::new(4.0);
        gate.press(Vec2::new(100.0, 100.0));
        assert!(!gate.track(Vec2::new(102.0, 101.0)));
        assert_eq!(gate.release(Vec2::new(103.0, 100.0)), Release::Click);
        assert!(!gate.is_pressed());
    }

    #[test]
    fn long_travel_is_a_drag_even_if_it_returns() {
        let mut gate = DragGate::new(4.0);
        gate.press(Vec2::ZERO);
        assert!(gate.track(Vec2::new(30.0, 0.0)));
        assert!(gate.is_dragging());
        assert_eq!(gate.release(Vec2::ZERO), Release::DragEnd);
        assert!(!gate.is_dragging());
    }

    #[test]
    fn release_without_press_is_untracked() {
        let mut gate = DragGate::default();
        assert_eq!(gate.release(Vec2::ZERO), Release::Untracked);
        assert!(!gate.track(Vec2::new(50.0, 50.0)));
    }

    #[test]
    fn two_quick_clicks_on_same_target_double() {
        let mut detector = DoubleClickDetector::new(0.4);
        assert!(!detector.register('a', 1.0));
        assert!(detector.register('a', 1.3));
        // The third click starts a fresh sequence.
        assert!(!detector.register('a', 1.5));
        assert!(detector.register('a', 1.6));
    }

    #[test]
    fn slow_or_different_target_clicks_do_not_double() {
        let mut detector = DoubleClickDetector::new(0.4);
        assert!(!detector.register('a', 1.0));
        assert!(!detector.register('a', 1.5));
        assert!(!detector.register('b', 1.6));
        assert!(!detector.register('a', 1.7));

        detector.reset();
        assert!(!detector.register('a', 1.8));
    }
}
