//! Click-to-look system

use bevy::prelude::*;

use crate::engine::components::Cube;
use crate::engine::messages::CubeClicked;
use crate::engine::resources::CameraStoreRes;
use crate::interaction::selection::look_at_selection;

/// Re-pose the camera at the clicked cube's viewpoint, aimed at the hit point
pub fn apply_selection(
    mut clicks: MessageReader<CubeClicked>,
    cubes: Query<&Cube>,
    mut store: ResMut<CameraStoreRes>,
) {
    for click in clicks.read() {
        let Ok(cube) = cubes.get(click.cube) else {
            continue;
        };
        info!(
            "Selected {} cube: viewpoint {} {:?}, target {:?}",
            cube.color, cube.viewpoint.name, cube.viewpoint.position, click.point
        );
        look_at_selection(&mut store, &cube.viewpoint, click.point);
    }
}
