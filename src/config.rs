//! Configuration constants and settings for the cube viewpoint scene
//!
//! This module contains all tunable parameters such as the default window
//! size, camera limits, pointer gesture thresholds and gizmo sizes, plus
//! the runtime `AppConfig` assembled from the command line.

use std::path::PathBuf;

/// Default window width in logical pixels
pub const WINDOW_WIDTH: u32 = 800;

/// Default window height in logical pixels
pub const WINDOW_HEIGHT: u32 = 600;

/// Title of the primary window
pub const WINDOW_TITLE: &str = "Cube Viewpoints";

/// Scene description compiled into the binary
pub const DEFAULT_SCENE_JSON: &str = include_str!("../assets/scene.json");

/// Camera settings
pub mod camera {
    /// Camera position before any cube has been selected
    pub const INITIAL_POSITION: [f32; 3] = [0.0, 35.0, 55.0];

    /// Look-at target before any cube has been selected
    pub const INITIAL_TARGET: [f32; 3] = [0.0, 0.0, 0.0];

    /// Vertical field of view in degrees
    pub const FOV_DEGREES: f32 = 35.0;

    /// Rotation speed multiplier for mouse drag
    pub const ROTATION_SPEED: f32 = 0.005;

    /// Zoom speed multiplier for scroll wheel
    pub const ZOOM_SPEED: f32 = 2.0;

    /// Pixel scroll deltas are divided by this to approximate wheel lines
    pub const PIXELS_PER_LINE: f32 = 20.0;

    /// Minimum camera distance from the orbit target
    pub const MIN_DISTANCE: f32 = 5.0;

    /// Maximum camera distance from the orbit target
    pub const MAX_DISTANCE: f32 = 150.0;

    /// Maximum pitch angle (radians) to prevent camera flipping
    pub const MAX_PITCH: f32 = 1.5;

    /// Minimum pitch angle (radians) to prevent camera flipping
    pub const MIN_PITCH: f32 = -1.5;
}

/// Pointer gesture settings
pub mod pointer {
    /// Cursor travel (logical pixels) after which a press becomes a drag
    pub const CLICK_DRAG_THRESHOLD: f32 = 4.0;

    /// Maximum gap (seconds) between two clicks forming a double click
    pub const DOUBLE_CLICK_WINDOW: f64 = 0.4;
}

/// Manipulation gizmo settings
pub mod gizmo {
    /// Length of the axis handles, in cube-local units
    pub const HANDLE_LENGTH: f32 = 3.0;

    /// Radius of the rotation rings
    pub const RING_RADIUS: f32 = 2.5;

    /// World units moved per pixel of drag in translate mode
    pub const TRANSLATE_SPEED: f32 = 0.05;

    /// Radians turned per pixel of drag in rotate mode
    pub const ROTATE_SPEED: f32 = 0.01;

    /// Relative scale change per pixel of drag in scale mode
    pub const SCALE_SPEED: f32 = 0.01;

    /// Smallest uniform scale a cube can be shrunk to
    pub const MIN_SCALE: f32 = 0.1;
}

/// Scene geometry and lighting settings
pub mod scene {
    /// Edge length of each cube
    pub const CUBE_SIZE: f32 = 3.0;

    /// Side length of the ground plane
    pub const PLANE_SIZE: f32 = 80.0;

    /// Height of the ground plane
    pub const PLANE_HEIGHT: f32 = -3.0;

    /// Ambient light brightness
    pub const AMBIENT_BRIGHTNESS: f32 = 750.0;

    /// Height of the overhead directional light
    pub const SUN_HEIGHT: f32 = 40.0;

    /// Illuminance of the overhead directional light
    pub const SUN_ILLUMINANCE: f32 = 2500.0;
}

/// Which click behaviour the cubes have
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Clicking a cube moves the camera to the cube's viewpoint
    #[default]
    LookAt,
    /// Clicking a cube toggles its manipulation gizmo
    Edit,
}

/// Runtime configuration assembled from the command line
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub variant: Variant,
    pub width: u32,
    pub height: u32,
    /// Scene description file; the embedded default is used when `None`
    pub scene_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            scene_path: None,
        }
    }
}
