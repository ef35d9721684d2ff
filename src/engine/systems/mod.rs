//! Bevy systems
//!
//! This module contains all the systems that operate on entities
//! and resources in the Bevy ECS.

pub mod camera;
pub mod edit_mode;
pub mod gizmo;
pub mod pointer;
pub mod scene;
pub mod selection;

pub use camera::{orbit_camera, refresh_camera, track_viewport};
pub use edit_mode::{apply_edit_clicks, configure_gizmos, manipulate_grabbed};
pub use gizmo::draw_gizmos;
pub use pointer::read_pointer;
pub use scene::setup_scene;
pub use selection::apply_selection;
