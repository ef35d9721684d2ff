//! Pointer input system
//!
//! Turns left-button presses into cube clicks, double clicks and drags.
//! Clicks are resolved with a mesh ray cast; the nearest cube along the ray
//! receives the click and nothing behind it does.

use bevy::{math::Vec2, prelude::*, window::PrimaryWindow};

use crate::engine::components::{CameraController, Cube, TransformGizmo};
use crate::engine::messages::{CubeClicked, CubeDoubleClicked};
use crate::engine::resources::PointerState;
use crate::interaction::selection::{first_cube_hit, CubeHit};

/// Classify left-button input and emit cube click messages
pub fn read_pointer(
    buttons: Res<ButtonInput<MouseButton>>,
    time: Res<Time>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<CameraController>>,
    cubes: Query<&TransformGizmo, With<Cube>>,
    mut ray_cast: MeshRayCast,
    mut pointer: ResMut<PointerState>,
    mut clicks: MessageWriter<CubeClicked>,
    mut double_clicks: MessageWriter<CubeDoubleClicked>,
) {
    let cursor = windows.single().ok().and_then(Window::cursor_position);
    let Some(cursor) = cursor else {
        // Cursor left the window mid-gesture: drop it rather than guess.
        if buttons.just_released(MouseButton::Left) {
            pointer.cancel();
        }
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };
    let mut pick = |cursor: Vec2| -> Option<CubeHit<Entity>> {
        let ray = camera.viewport_to_world(camera_transform, cursor).ok()?;
        let settings = MeshRayCastSettings::default().never_early_exit();
        let hits = ray_cast.cast_ray(ray, &settings);
        first_cube_hit(hits.iter().map(|(entity, hit)| (*entity, hit.point)), |entity| {
            cubes.contains(entity)
        })
    };

    if buttons.just_pressed(MouseButton::Left) {
        pointer.gate.press(cursor);
        pointer.grabbed = pick(cursor)
            .map(|hit| hit.cube)
            .filter(|cube| cubes.get(*cube).is_ok_and(|gizmo| gizmo.enabled));
    }

    if buttons.pressed(MouseButton::Left) {
        pointer.gate.track(cursor);
    }

    if buttons.just_released(MouseButton::Left) {
        if !pointer.release(cursor) {
            return;
        }

        match pick(cursor) {
            Some(hit) => {
                clicks.write(CubeClicked {
                    cube: hit.cube,
                    point: hit.point,
                });
                if pointer.double_click.register(hit.cube, time.elapsed_secs_f64()) {
                    double_clicks.write(CubeDoubleClicked { cube: hit.cube });
                }
            }
            None => pointer.double_click.reset(),
        }
    }
}
