//! Interaction core
//!
//! Engine-independent state and transition logic: the camera store, cube
//! selection, per-cube edit state, pointer gestures, camera rig math and the
//! scene description. The `engine` module wires these into Bevy.

pub mod camera_rig;
pub mod camera_store;
pub mod css_colors;
pub mod edit_mode;
pub mod pointer;
pub mod scene_description;
pub mod selection;

// Re-export commonly used types
pub use camera_store::{CameraField, CameraState, CameraStore};
pub use css_colors::css_color;
pub use edit_mode::{EditState, GizmoConfig, GizmoSpace, ManipulationMode};
pub use scene_description::{load_scene, CubeEntity, Scene, SceneError, Viewpoint};
