//! Cube Viewpoints: click a cube to look at it
//!
//! A Bevy scene with three cubes on a ground plane and an orbit camera.
//! Depending on the variant chosen at startup, clicking a cube either moves
//! the camera to that cube's viewpoint and aims it at the clicked point, or
//! toggles a manipulation gizmo on the cube (double click cycles between
//! translate, rotate and scale).
//!
//! # Module Structure
//!
//! - `config`: Configuration constants and runtime settings
//! - `interaction`: Engine-independent state and transitions
//!   - `camera_store`: Observable camera pose and edit flag
//!   - `selection`: Click-to-look resolution
//!   - `edit_mode`: Per-cube edit state and gizmo configuration
//!   - `pointer`: Click, drag and double-click classification
//!   - `camera_rig`: Viewport aspect and orbit math
//!   - `scene_description`: JSON scene loading and validation
//!   - `css_colors`: CSS named-color lookup
//! - `engine`: Bevy integration
//!   - `components`: ECS components
//!   - `resources`: Global resources
//!   - `messages`: Click messages
//!   - `plugins`: Interaction plugin
//!   - `systems`: Scene, pointer, camera and gizmo systems
//!   - `app`: Application setup

pub mod config;
pub mod engine;
pub mod interaction;

use config::AppConfig;
use interaction::SceneError;

/// Load the scene description and run the app until its window closes
pub fn run(config: AppConfig) -> Result<(), SceneError> {
    let scene = interaction::load_scene(config.scene_path.as_deref())?;
    engine::start_app(&config, scene);
    Ok(())
}
