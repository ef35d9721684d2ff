//! Camera control systems
//!
//! The camera follows the camera store: whenever the requested pose or the
//! window size changes, position, aspect ratio and transform are re-applied
//! together. Between store changes the user can orbit around the target:
//! - Left button drag (not on a grabbed gizmo): rotate camera (yaw/pitch)
//! - Scroll wheel: zoom (adjust distance)

use bevy::{
    input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll, MouseScrollUnit},
    math::Vec2,
    prelude::*,
    window::PrimaryWindow,
};

use crate::config::camera::PIXELS_PER_LINE;
use crate::engine::components::CameraController;
use crate::engine::resources::{CameraStoreRes, OrbitCameraState, PointerState, ViewportRes};
use crate::interaction::camera_rig::{look_at_pose, OrbitState, Viewport};

/// Mirror the primary window size into `ViewportRes`
pub fn track_viewport(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut viewport: ResMut<ViewportRes>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    viewport.set_if_neq(ViewportRes(Viewport::new(window.width(), window.height())));
}

/// Update camera transform from orbit drag and scroll input
pub fn orbit_camera(
    pointer: Res<PointerState>,
    motion: Res<AccumulatedMouseMotion>,
    scroll: Res<AccumulatedMouseScroll>,
    mut orbit: ResMut<OrbitCameraState>,
    mut camera_query: Query<&mut Transform, With<CameraController>>,
) {
    let rotating =
        pointer.gate.is_dragging() && pointer.grabbed.is_none() && motion.delta != Vec2::ZERO;
    let scroll_lines = match scroll.unit {
        MouseScrollUnit::Line => scroll.delta.y,
        MouseScrollUnit::Pixel => scroll.delta.y / PIXELS_PER_LINE,
    };
    if !rotating && scroll_lines == 0.0 {
        return;
    }

    if rotating {
        orbit.rotate(motion.delta);
    }
    if scroll_lines != 0.0 {
        orbit.zoom(scroll_lines);
    }

    let pose = orbit.transform();
    for mut transform in camera_query.iter_mut() {
        *transform = pose;
    }
}

/// Re-apply the store pose when it or the viewport changes
///
/// Position, aspect ratio and the transform/projection refresh happen in one
/// step so the renderer never sees a stale projection.
pub fn refresh_camera(
    store: Res<CameraStoreRes>,
    viewport: Res<ViewportRes>,
    mut applied_pose: Local<Option<u64>>,
    mut orbit: ResMut<OrbitCameraState>,
    mut camera_query: Query<
        (&mut Transform, &mut GlobalTransform, &mut Projection),
        With<CameraController>,
    >,
) {
    let pose_changed = *applied_pose != Some(store.pose_revision());
    if !pose_changed && !viewport.is_changed() {
        return;
    }
    *applied_pose = Some(store.pose_revision());

    let state = *store.state();
    for (mut transform, mut global, mut projection) in camera_query.iter_mut() {
        *transform = look_at_pose(state.position, state.target);
        if let (Some(aspect), Projection::Perspective(perspective)) =
            (viewport.aspect_ratio(), &mut *projection)
        {
            perspective.aspect_ratio = aspect;
        }
        *global = GlobalTransform::from(*transform);
    }

    orbit.0 = OrbitState::from_pose(state.position, state.target);
    debug!(
        "Camera refreshed: position {:?}, target {:?}, viewport {}x{}",
        state.position, state.target, viewport.width, viewport.height
    );
}
