//! Per-cube edit state and the manipulation gizmo configuration
//!
//! A single click toggles whether the cube is editable. A double click steps
//! through the manipulation modes with a counter that runs one step ahead of
//! the applied mode, and the fourth double click only resets the counter.

use bevy::math::{Quat, Vec2, Vec3};
use bevy::transform::components::Transform;

use crate::config::gizmo::{MIN_SCALE, ROTATE_SPEED, SCALE_SPEED, TRANSLATE_SPEED};

/// Which gizmo handles are active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ManipulationMode {
    #[default]
    Translate,
    Rotate,
    Scale,
}

impl ManipulationMode {
    /// Modes in cycling order
    pub const ALL: [ManipulationMode; 3] = [
        ManipulationMode::Translate,
        ManipulationMode::Rotate,
        ManipulationMode::Scale,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ManipulationMode::Translate => "translate",
            ManipulationMode::Rotate => "rotate",
            ManipulationMode::Scale => "scale",
        }
    }
}

/// Coordinate frame the gizmo manipulates in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GizmoSpace {
    #[default]
    Local,
    World,
}

// =============================================================================
// Edit state machine
// =============================================================================

/// Local interaction state owned by one cube
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EditState {
    pub editable: bool,
    pub mode: ManipulationMode,
    pub click_count: usize,
}

impl EditState {
    /// Single-click transition
    pub fn toggled(self) -> Self {
        Self {
            editable: !self.editable,
            ..self
        }
    }

    /// Double-click transition
    pub fn cycled(self) -> Self {
        if self.click_count == ManipulationMode::ALL.len() {
            return Self {
                click_count: 0,
                ..self
            };
        }
        Self {
            // An index past the table leaves the mode as it was.
            mode: ManipulationMode::from_index(self.click_count).unwrap_or(self.mode),
            click_count: self.click_count + 1,
            ..self
        }
    }

    /// Gizmo configuration matching this state
    pub fn gizmo_config(&self) -> GizmoConfig {
        GizmoConfig {
            enabled: self.editable,
            mode: self.mode,
            space: GizmoSpace::Local,
        }
    }
}

/// Configuration consumed by the manipulation gizmo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GizmoConfig {
    pub enabled: bool,
    pub mode: ManipulationMode,
    pub space: GizmoSpace,
}

// =============================================================================
// Manipulation
// =============================================================================

/// Apply a pointer drag (logical pixels, +y down) to a transform
pub fn manipulate(transform: &Transform, config: &GizmoConfig, drag: Vec2) -> Transform {
    let mut out = *transform;
    let frame = match config.space {
        GizmoSpace::Local => transform.rotation,
        GizmoSpace::World => Quat::IDENTITY,
    };

    match config.mode {
        ManipulationMode::Translate => {
            let offset = Vec3::new(drag.x, 0.0, drag.y) * TRANSLATE_SPEED;
            out.translation += frame * offset;
        }
        ManipulationMode::Rotate => {
            let axis = frame * Vec3::Y;
            out.rotation = Quat::from_axis_angle(axis, drag.x * ROTATE_SPEED) * transform.rotation;
        }
        ManipulationMode::Scale => {
            let factor = (1.0 - drag.y * SCALE_SPEED).max(0.0);
            let uniform = (transform.scale.x * factor).max(MIN_SCALE);
            out.scale = Vec3::splat(uniform);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn starts_idle_in_translate() {
        let state = EditState::default();
        assert!(!state.editable);
        assert_eq!(state.mode, ManipulationMode::Translate);
        assert_eq!(state.click_count, 0);
    }

    #[test]
    fn click_parity_decides_editable() {
        let mut state = EditState::default();
        for clicks in 1..=7 {
            state = state.toggled();
            assert_eq!(state.editable, clicks % 2 == 1, "after {clicks} clicks");
        }
    }

    #[test]
    fn double_clicks_step_modes_with_lagging_counter() {
        let s1 = EditState::default().cycled();
        assert_eq!((s1.mode, s1.click_count), (ManipulationMode::Translate, 1));

        let s2 = s1.cycled();
        assert_eq!((s2.mode, s2.click_count), (ManipulationMode::Rotate, 2));

        let s3 = s2.cycled();
        assert_eq!((s3.mode, s3.click_count), (ManipulationMode::Scale, 3));

        let s4 = s3.cycled();
        assert_eq!(s4.click_count, 0);
        assert_eq!(s4.mode, ManipulationMode::Scale);

        let s5 = s4.cycled();
        assert_eq!((s5.mode, s5.click_count), (ManipulationMode::Translate, 1));
    }

    #[test]
    fn cycling_keeps_editable_flag() {
        let state = EditState::default().toggled().cycled().cycled();
        assert!(state.editable);
    }

    #[test]
    fn out_of_range_counter_keeps_mode() {
        let state = EditState {
            editable: true,
            mode: ManipulationMode::Rotate,
            click_count: 7,
        };
        let next = state.cycled();
        assert_eq!(next.mode, ManipulationMode::Rotate);
        assert_eq!(next.click_count, 8);
    }

    #[test]
    fn gizmo_config_follows_state_in_local_space() {
        let state = EditState::default().toggled().cycled().cycled();
        assert_eq!(
            state.gizmo_config(),
            GizmoConfig {
                enabled: true,
                mode: ManipulationMode::Rotate,
                space: GizmoSpace::Local,
            }
        );
        assert!(!EditState::default().gizmo_config().enabled);
    }

    #[test]
    fn translate_moves_along_local_axes() {
        let transform =
            Transform::from_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2));
        let local = GizmoConfig {
            enabled: true,
            mode: ManipulationMode::Translate,
            space: GizmoSpace::Local,
        };
        let moved = manipulate(&transform, &local, Vec2::new(20.0, 0.0));
        // Local +X points along world -Z after a quarter turn about Y.
        assert!(approx(moved.translation, Vec3::new(0.0, 0.0, -1.0)));

        let world = GizmoConfig {
            space: GizmoSpace::World,
            ..local
        };
        let moved = manipulate(&transform, &world, Vec2::new(20.0, 0.0));
        assert!(approx(moved.translation, Vec3::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn rotate_spins_about_local_up() {
        let config = GizmoConfig {
            enabled: true,
            mode: ManipulationMode::Rotate,
            space: GizmoSpace::Local,
        };
        let turned = manipulate(&Transform::IDENTITY, &config, Vec2::new(100.0, 0.0));
        let expected = Quat::from_rotation_y(1.0);
        assert!(turned.rotation.angle_between(expected) < 1e-4);
        assert_eq!(turned.translation, Vec3::ZERO);
    }

    #[test]
    fn scale_is_uniform_and_clamped() {
        let config = GizmoConfig {
            enabled: true,
            mode: ManipulationMode::Scale,
            space: GizmoSpace::Local,
        };
        let grown = manipulate(&Transform::IDENTITY, &config, Vec2::new(0.0, -50.0));
        assert!(approx(grown.scale, Vec3::splat(1.5)));

        let crushed = manipulate(&Transform::IDENTITY, &config, Vec2::new(0.0, 500.0));
        assert!(approx(crushed.scale, Vec3::splat(MIN_SCALE)));
    }
}
