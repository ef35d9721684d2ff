//! Scene setup system
//!
//! This module handles the initial setup of the 3D scene including
//! the camera, the ground plane, the cubes and the lights.

use bevy::{
    color::palettes::css,
    math::{primitives::Cuboid, EulerRot, Quat, Vec3},
    pbr::{MeshMaterial3d, StandardMaterial},
    prelude::*,
};

use crate::config::camera::FOV_DEGREES;
use crate::config::scene::*;
use crate::engine::components::{CameraController, Cube, CubeEdit, GroundPlane, TransformGizmo};
use crate::engine::resources::{CameraStoreRes, SceneRes};
use crate::interaction::camera_rig::look_at_pose;

/// Setup the 3D scene with camera, ground plane, cubes and lights
pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    scene: Res<SceneRes>,
    store: Res<CameraStoreRes>,
) {
    info!("Setting up scene with {} cubes", scene.cubes.len());
    for viewpoint in &scene.viewpoints {
        debug!("Viewpoint {} at {:?}", viewpoint.name, viewpoint.position);
    }

    let state = store.state();

    // Camera starts at the store pose; the refresh system keeps it there
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: FOV_DEGREES.to_radians(),
            ..default()
        }),
        look_at_pose(state.position, state.target),
        AmbientLight {
            brightness: AMBIENT_BRIGHTNESS,
            ..default()
        },
        CameraController,
        Name::new("Scene Camera"),
    ));

    // Ground plane (yellow)
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(PLANE_SIZE, PLANE_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: css::YELLOW.into(),
            perceptual_roughness: 0.9,
            ..default()
        })),
        Transform::from_xyz(0.0, PLANE_HEIGHT, 0.0),
        GroundPlane,
        Name::new("Plane"),
    ));

    let cube_mesh = meshes.add(Cuboid::new(CUBE_SIZE, CUBE_SIZE, CUBE_SIZE));
    for cube in &scene.cubes {
        let r = cube.base_rotation;
        commands.spawn((
            Mesh3d(cube_mesh.clone()),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: cube.base_color.into(),
                ..default()
            })),
            Transform::from_translation(cube.base_position)
                .with_rotation(Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z)),
            Cube {
                color: cube.color.clone(),
                viewpoint: cube.viewpoint.clone(),
            },
            CubeEdit::default(),
            TransformGizmo::default(),
            Name::new(format!("{} cube", cube.color)),
        ));
        debug!(
            "Spawned {} cube at {:?} (viewpoint {})",
            cube.color, cube.base_position, cube.viewpoint.name
        );
    }

    // Overhead directional light
    commands.spawn((
        DirectionalLight {
            illuminance: SUN_ILLUMINANCE,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(0.0, SUN_HEIGHT, 0.0).looking_at(Vec3::ZERO, Vec3::Z),
    ));

    info!("Scene setup complete");
}
