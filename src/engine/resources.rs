//! Bevy resource definitions
//!
//! This module contains all global resources used by Bevy systems.
//! Resources are singleton data that can be accessed by any system.

use bevy::prelude::*;

use crate::config::Variant;
use crate::interaction::camera_rig::{OrbitState, Viewport};
use crate::interaction::pointer::{DoubleClickDetector, DragGate, Release};
use crate::interaction::{CameraStore, Scene};

// =============================================================================
// Camera
// =============================================================================

/// Camera store owned by the Bevy world
#[derive(Resource, Default, Deref, DerefMut)]
pub struct CameraStoreRes(pub CameraStore);

/// Orbit coordinates of the scene camera around the store target
#[derive(Resource, Deref, DerefMut)]
pub struct OrbitCameraState(pub OrbitState);

impl Default for OrbitCameraState {
    fn default() -> Self {
        let state = crate::interaction::CameraState::default();
        Self(OrbitState::from_pose(state.position, state.target))
    }
}

/// Current size of the primary window in logical pixels
#[derive(Resource, Debug, Clone, Copy, PartialEq, Deref)]
pub struct ViewportRes(pub Viewport);

// =============================================================================
// Input
// =============================================================================

/// Left-button gesture tracking
#[derive(Resource, Default)]
pub struct PointerState {
    pub gate: DragGate,
    pub double_click: DoubleClickDetector<Entity>,
    /// Cube whose gizmo is being dragged, if the press landed on one
    pub grabbed: Option<Entity>,
}

impl PointerState {
    /// End the press at `at`; returns true when it should resolve as a click.
    ///
    /// A drag in between breaks any pending double-click pair, so
    /// click, orbit, click on the same cube stays two single clicks.
    pub fn release(&mut self, at: Vec2) -> bool {
        self.grabbed = None;
        match self.gate.release(at) {
            Release::Click => true,
            Release::DragEnd => {
                self.double_click.reset();
                false
            }
            Release::Untracked => false,
        }
    }

    /// Drop the gesture in flight, e.g. when the cursor left the window
    pub fn cancel(&mut self) {
        if self.gate.is_pressed() {
            debug!("Pointer gesture cancelled outside the window");
            self.double_click.reset();
        }
        self.gate = DragGate::default();
        self.grabbed = None;
    }
}

// =============================================================================
// Scene
// =============================================================================

/// Resolved scene description, consumed by the startup system
#[derive(Resource, Deref)]
pub struct SceneRes(pub Scene);

/// Click behaviour chosen at startup
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActiveVariant(pub Variant);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_between_clicks_breaks_the_double_click() {
        let cube = World::new().spawn_empty().id();
        let mut pointer = PointerState::default();

        pointer.gate.press(Vec2::new(100.0, 100.0));
        assert!(pointer.release(Vec2::new(101.0, 100.0)));
        assert!(!pointer.double_click.register(cube, 1.0));

        // Orbit drag within the double-click window
        pointer.gate.press(Vec2::new(100.0, 100.0));
        pointer.grabbed = Some(cube);
        pointer.gate.track(Vec2::new(160.0, 100.0));
        assert!(!pointer.release(Vec2::new(160.0, 100.0)));
        assert_eq!(pointer.grabbed, None);

        pointer.gate.press(Vec2::new(100.0, 100.0));
        assert!(pointer.release(Vec2::new(100.0, 100.0)));
        assert!(!pointer.double_click.register(cube, 1.2));
    }

    #[test]
    fn clicks_without_a_drag_still_pair() {
        let cube = World::new().spawn_empty().id();
        let mut pointer = PointerState::default();

        pointer.gate.press(Vec2::ZERO);
        assert!(pointer.release(Vec2::ZERO));
        assert!(!pointer.double_click.register(cube, 1.0));
        pointer.gate.press(Vec2::ZERO);
        assert!(pointer.release(Vec2::ZERO));
        assert!(pointer.double_click.register(cube, 1.2));
    }

    #[test]
    fn cancel_drops_press_grab_and_pending_click() {
        let cube = World::new().spawn_empty().id();
        let mut pointer = PointerState::default();
        assert!(!pointer.double_click.register(cube, 1.0));

        pointer.gate.press(Vec2::ZERO);
        pointer.grabbed = Some(cube);
        pointer.cancel();

        assert!(!pointer.gate.is_pressed());
        assert_eq!(pointer.grabbed, None);
        assert!(!pointer.release(Vec2::ZERO));
        assert!(!pointer.double_click.register(cube, 1.2));
    }
}
