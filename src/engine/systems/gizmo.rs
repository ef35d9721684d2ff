//! Gizmo drawing
//!
//! Enabled gizmos draw handles for their mode each frame: axis arrows for
//! translate, rings for rotate, axis lines plus a box for scale.

use bevy::{
    color::palettes::css::{BLUE, LIME, RED},
    math::{Isometry3d, Quat, Vec3},
    prelude::*,
};

use crate::config::gizmo::{HANDLE_LENGTH, RING_RADIUS};
use crate::config::scene::CUBE_SIZE;
use crate::engine::components::{Cube, TransformGizmo};
use crate::interaction::{GizmoSpace, ManipulationMode};

pub fn draw_gizmos(
    mut gizmos: Gizmos,
    cubes: Query<(&TransformGizmo, &GlobalTransform), With<Cube>>,
) {
    let axes = [(Vec3::X, RED), (Vec3::Y, LIME), (Vec3::Z, BLUE)];

    for (gizmo, global) in cubes.iter() {
        if !gizmo.enabled {
            continue;
        }
        let (scale, rotation, origin) = global.to_scale_rotation_translation();
        let frame = match gizmo.space {
            GizmoSpace::Local => rotation,
            GizmoSpace::World => Quat::IDENTITY,
        };

        match gizmo.mode {
            ManipulationMode::Translate => {
                for (axis, color) in axes {
                    gizmos.arrow(origin, origin + frame * axis * HANDLE_LENGTH, color);
                }
            }
            ManipulationMode::Rotate => {
                for (axis, color) in axes {
                    // Circles lie in the XY plane; turn each to face its axis.
                    let facing = frame * Quat::from_rotation_arc(Vec3::Z, axis);
                    gizmos.circle(Isometry3d::new(origin, facing), RING_RADIUS, color);
                }
            }
            ManipulationMode::Scale => {
                for (axis, color) in axes {
                    gizmos.line(origin, origin + frame * axis * HANDLE_LENGTH, color);
                }
                let outline = Transform::from_translation(origin)
                    .with_rotation(rotation)
                    .with_scale(scale * CUBE_SIZE * 1.05);
                gizmos.cuboid(outline, Color::WHITE);
            }
        }
    }
}
