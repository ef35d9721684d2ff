//! Bevy application setup and execution
//!
//! This module handles the creation and configuration of the Bevy app,
//! including plugin registration, resources and the camera store.

use bevy::{prelude::*, window::WindowResolution};

use crate::config::{AppConfig, WINDOW_TITLE};
use crate::engine::plugins::CubeInteractionPlugin;
use crate::engine::resources::*;
use crate::engine::systems::setup_scene;
use crate::interaction::camera_rig::Viewport;
use crate::interaction::{CameraState, CameraStore, Scene};

/// Create and configure the Bevy application
pub fn create_app(config: &AppConfig, scene: Scene) -> App {
    let mut app = App::new();

    let mut resolution = WindowResolution::default();
    resolution.set(config.width as f32, config.height as f32);
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: WINDOW_TITLE.into(),
            resolution,
            ..default()
        }),
        ..default()
    }));

    // Add custom plugins
    app.add_plugins(CubeInteractionPlugin {
        variant: config.variant,
    });

    // Register systems
    app.add_systems(Startup, setup_scene);

    // Insert resources
    let mut store = CameraStore::new(CameraState::default());
    store.subscribe(|state, field| {
        debug!(
            "Camera store {:?} set: position {:?}, target {:?}, edit {}",
            field, state.position, state.target, state.edit_global
        );
    });
    app.insert_resource(CameraStoreRes(store));
    app.insert_resource(SceneRes(scene));
    app.insert_resource(ViewportRes(Viewport::new(
        config.width as f32,
        config.height as f32,
    )));

    info!(
        "App configured ({:?} variant, {}x{})",
        config.variant, config.width, config.height
    );
    app
}

/// Run the app on the current thread until the window closes
pub fn start_app(config: &AppConfig, scene: Scene) {
    let mut app = create_app(config, scene);
    info!("Running render loop...");
    app.run();
}
