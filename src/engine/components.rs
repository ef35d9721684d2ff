//! Bevy component definitions
//!
//! This module contains the component markers and data carriers used to tag
//! the camera, the ground plane and the clickable cubes in the Bevy ECS.

use bevy::prelude::*;

use crate::interaction::{EditState, GizmoConfig, Viewpoint};

/// Marker component for the scene camera
///
/// Entities with this component follow the camera store and respond to
/// orbit input.
#[derive(Component)]
pub struct CameraController;

/// Marker component for the ground plane
///
/// The plane is pickable geometry without a click handler, so clicks pass
/// through it to any cube behind.
#[derive(Component)]
pub struct GroundPlane;

/// A clickable cube and the viewpoint it re-poses the camera to
#[derive(Component, Debug, Clone)]
pub struct Cube {
    /// Color name, unique per cube
    pub color: String,
    pub viewpoint: Viewpoint,
}

/// Per-cube edit state, reset whenever the cube is respawned
#[derive(Component, Debug, Clone, Copy, Default, Deref, DerefMut)]
pub struct CubeEdit(pub EditState);

/// Configuration of the cube's manipulation gizmo
#[derive(Component, Debug, Clone, Copy, Default, Deref, DerefMut)]
pub struct TransformGizmo(pub GizmoConfig);
