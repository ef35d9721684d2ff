//! Camera rig math: viewport aspect, look-at pose and orbit coordinates

use bevy::math::{Vec2, Vec3};
use bevy::transform::components::Transform;

use crate::config::camera::*;

/// Size of the render surface in logical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width over height; `None` while the surface has no area (minimized)
    pub fn aspect_ratio(&self) -> Option<f32> {
        (self.width > 0.0 && self.height > 0.0).then(|| self.width / self.height)
    }
}

/// Transform placing the camera at `position` looking at `target`
pub fn look_at_pose(position: Vec3, target: Vec3) -> Transform {
    Transform::from_translation(position).looking_at(target, Vec3::Y)
}

/// Spherical orbit coordinates around a center point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitState {
    /// Horizontal rotation angle (radians)
    pub yaw: f32,
    /// Vertical rotation angle (radians)
    pub pitch: f32,
    /// Distance from the camera to the center point
    pub distance: f32,
    /// The point the camera orbits around
    pub center: Vec3,
}

impl OrbitState {
    /// Derive orbit coordinates from an explicit camera pose
    pub fn from_pose(position: Vec3, center: Vec3) -> Self {
        let offset = position - center;
        let distance = offset.length();
        if distance <= f32::EPSILON {
            return Self {
                yaw: 0.0,
                pitch: 0.0,
                distance: 0.0,
                center,
            };
        }
        Self {
            yaw: offset.x.atan2(offset.z),
            pitch: (offset.y / distance).clamp(-1.0, 1.0).asin(),
            distance,
            center,
        }
    }

    /// Camera position for the current coordinates
    pub fn position(&self) -> Vec3 {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        self.center + Vec3::new(x, y, z)
    }

    /// Rotate by a mouse drag delta (logical pixels)
    pub fn rotate(&mut self, delta: Vec2) {
        self.yaw -= delta.x * ROTATION_SPEED;
        self.pitch -= delta.y * ROTATION_SPEED;

        // Clamp pitch to prevent camera flipping
        self.pitch = self.pitch.clamp(MIN_PITCH, MAX_PITCH);
    }

    /// Move closer for positive scroll, further for negative
    pub fn zoom(&mut self, scroll: f32) {
        self.distance -= scroll * ZOOM_SPEED;
        self.distance = self.distance.clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    pub fn transform(&self) -> Transform {
        look_at_pose(self.position(), self.center)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-3
    }

    #[test]
    fn aspect_is_width_over_height() {
        let aspect = Viewport::new(800.0, 600.0).aspect_ratio().unwrap();
        assert!((aspect - 800.0 / 600.0).abs() < 1e-6);
        assert!(Viewport::new(800.0, 0.0).aspect_ratio().is_none());
    }

    #[test]
    fn look_at_pose_faces_target() {
        let pose = look_at_pose(Vec3::new(0.0, 25.0, 50.0), Vec3::new(1.0, 0.0, 1.5));
        let expected = (Vec3::new(1.0, 0.0, 1.5) - Vec3::new(0.0, 25.0, 50.0)).normalize();
        assert!(approx(*pose.forward(), expected));
        assert_eq!(pose.translation, Vec3::new(0.0, 25.0, 50.0));
    }

    #[test]
    fn orbit_round_trips_a_pose() {
        let position = Vec3::new(-50.0, 25.0, 0.0);
        let center = Vec3::new(-6.0, 0.0, 0.0);
        let orbit = OrbitState::from_pose(position, center);
        assert!(approx(orbit.position(), position));
        assert!((orbit.distance - (position - center).length()).abs() < 1e-4);
    }

    #[test]
    fn degenerate_pose_collapses_to_center() {
        let orbit = OrbitState::from_pose(Vec3::ONE, Vec3::ONE);
        assert_eq!(orbit.distance, 0.0);
        assert!(approx(orbit.position(), Vec3::ONE));
    }

    #[test]
    fn rotate_clamps_pitch_and_zoom_clamps_distance() {
        let mut orbit = OrbitState::from_pose(Vec3::new(0.0, 25.0, 50.0), Vec3::ZERO);
        orbit.rotate(Vec2::new(0.0, -10_000.0));
        assert_eq!(orbit.pitch, MAX_PITCH);

        orbit.zoom(1_000.0);
        assert_eq!(orbit.distance, MIN_DISTANCE);
        orbit.zoom(-1_000.0);
        assert_eq!(orbit.distance, MAX_DISTANCE);
    }
}
