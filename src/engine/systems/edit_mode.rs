//! Edit-mode systems
//!
//! Clicks toggle a cube's gizmo, double clicks cycle its manipulation mode,
//! and drags that start on an enabled gizmo move, turn or scale the cube.

use bevy::{input::mouse::AccumulatedMouseMotion, math::Vec2, prelude::*};

use crate::engine::components::{Cube, CubeEdit, TransformGizmo};
use crate::engine::messages::{CubeClicked, CubeDoubleClicked};
use crate::engine::resources::{CameraStoreRes, PointerState};
use crate::interaction::edit_mode::manipulate;

/// Apply click and double-click transitions to the clicked cube only
pub fn apply_edit_clicks(
    mut clicks: MessageReader<CubeClicked>,
    mut double_clicks: MessageReader<CubeDoubleClicked>,
    mut cubes: Query<(&Cube, &mut CubeEdit)>,
    mut store: ResMut<CameraStoreRes>,
) {
    // Single clicks are handled before the double click they form.
    for click in clicks.read() {
        if let Ok((cube, mut edit)) = cubes.get_mut(click.cube) {
            edit.0 = edit.toggled();
            info!("{} cube editable: {}", cube.color, edit.editable);
        }
    }
    for double in double_clicks.read() {
        if let Ok((cube, mut edit)) = cubes.get_mut(double.cube) {
            edit.0 = edit.cycled();
            info!(
                "{} cube mode: {} (click count {})",
                cube.color,
                edit.mode.as_str(),
                edit.click_count
            );
        }
    }

    let any_editable = cubes.iter().any(|(_, edit)| edit.editable);
    if store.state().edit_global != any_editable {
        store.set_edit(any_editable);
    }
}

/// Push each changed edit state into the cube's gizmo
pub fn configure_gizmos(mut cubes: Query<(&CubeEdit, &mut TransformGizmo), Changed<CubeEdit>>) {
    for (edit, mut gizmo) in cubes.iter_mut() {
        gizmo.0 = edit.gizmo_config();
    }
}

/// Apply the current drag to the cube whose gizmo was grabbed
pub fn manipulate_grabbed(
    pointer: Res<PointerState>,
    motion: Res<AccumulatedMouseMotion>,
    mut cubes: Query<(&TransformGizmo, &mut Transform), With<Cube>>,
) {
    let Some(grabbed) = pointer.grabbed else {
        return;
    };
    if !pointer.gate.is_dragging() || motion.delta == Vec2::ZERO {
        return;
    }
    let Ok((gizmo, mut transform)) = cubes.get_mut(grabbed) else {
        return;
    };
    if gizmo.enabled {
        *transform = manipulate(&transform, gizmo, motion.delta);
    }
}
