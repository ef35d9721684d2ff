//! Cube interaction plugin
//!
//! Registers the click messages, the interaction resources and the per-frame
//! system chain. Each frame runs:
//! pointer → selection / edit → gizmo config → manipulation / orbit →
//! camera refresh → gizmo drawing.

use bevy::prelude::*;

use crate::config::Variant;
use crate::engine::messages::{CubeClicked, CubeDoubleClicked};
use crate::engine::resources::{ActiveVariant, OrbitCameraState, PointerState};
use crate::engine::systems::*;

/// Click-to-look or click-to-edit behaviour for the scene cubes
pub struct CubeInteractionPlugin {
    pub variant: Variant,
}

impl Plugin for CubeInteractionPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<CubeClicked>()
            .add_message::<CubeDoubleClicked>()
            .insert_resource(ActiveVariant(self.variant))
            .init_resource::<PointerState>()
            .init_resource::<OrbitCameraState>()
            .add_systems(
                Update,
                (
                    track_viewport,
                    read_pointer,
                    apply_selection.run_if(resource_equals(ActiveVariant(Variant::LookAt))),
                    apply_edit_clicks.run_if(resource_equals(ActiveVariant(Variant::Edit))),
                    configure_gizmos,
                    manipulate_grabbed,
                    orbit_camera,
                    refresh_camera,
                    draw_gizmos,
                )
                    .chain(),
            );
    }
}
