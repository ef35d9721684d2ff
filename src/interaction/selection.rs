//! Click-to-look selection
//!
//! Pick hits arrive sorted nearest first. The first hit that belongs to a cube
//! consumes the click; hits on meshes without a handler (the ground plane) are
//! skipped, and nothing behind the consuming cube is reported.

use bevy::math::Vec3;

use super::camera_store::CameraStore;
use super::scene_description::Viewpoint;

/// A click that landed on a cube
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeHit<K> {
    pub cube: K,
    /// Exact world-space intersection of the pick ray with the mesh
    pub point: Vec3,
}

/// Resolve the cube that consumes a click from nearest-first hits
pub fn first_cube_hit<K, I, F>(hits: I, is_cube: F) -> Option<CubeHit<K>>
where
    K: Copy,
    I: IntoIterator<Item = (K, Vec3)>,
    F: Fn(K) -> bool,
{
    hits.into_iter()
        .find(|(key, _)| is_cube(*key))
        .map(|(cube, point)| CubeHit { cube, point })
}

/// Move the camera to the cube's viewpoint and aim it at the clicked point
pub fn look_at_selection(store: &mut CameraStore, viewpoint: &Viewpoint, point: Vec3) {
    store.set_cam_position(viewpoint.position);
    store.set_target(point);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::camera_store::CameraField;
    use crate::interaction::scene_description::load_scene;
    use std::sync::{Arc, Mutex};

    #[test]
    fn nearest_cube_wins_and_plane_is_skipped() {
        const PLANE: u32 = 0;
        let hits = vec![
            (PLANE, Vec3::new(0.0, -3.0, 2.0)),
            (2, Vec3::new(1.0, 0.0, 1.5)),
            (3, Vec3::new(1.0, 0.0, -1.5)),
        ];
        let hit = first_cube_hit(hits, |k| k != PLANE).unwrap();
        assert_eq!(hit.cube, 2);
        assert_eq!(hit.point, Vec3::new(1.0, 0.0, 1.5));
    }

    #[test]
    fn no_cube_hit_means_no_selection() {
        let hits = vec![(0u32, Vec3::ZERO)];
        assert!(first_cube_hit(hits, |k| k != 0).is_none());
        assert!(first_cube_hit(Vec::<(u32, Vec3)>::new(), |_| true).is_none());
    }

    #[test]
    fn clicking_cubes_retargets_camera() {
        let scene = load_scene(None).unwrap();
        let crimson = &scene.cubes[0];
        let gray = &scene.cubes[1];
        let mut store = CameraStore::default();

        look_at_selection(&mut store, &crimson.viewpoint, Vec3::new(1.0, 0.0, 1.5));
        assert_eq!(store.state().position, Vec3::new(0.0, 25.0, 50.0));
        assert_eq!(store.state().target, Vec3::new(1.0, 0.0, 1.5));

        look_at_selection(&mut store, &gray.viewpoint, Vec3::new(-6.0, 0.0, 0.0));
        assert_eq!(store.state().position, Vec3::new(-50.0, 25.0, 0.0));
        assert_eq!(store.state().target, Vec3::new(-6.0, 0.0, 0.0));
    }

    #[test]
    fn position_is_set_before_target() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let mut store = CameraStore::default();
        let sink = order.clone();
        store.subscribe(move |_, field| sink.lock().unwrap().push(field));

        let viewpoint = Viewpoint {
            name: "right".into(),
            position: Vec3::new(50.0, 25.0, 0.0),
        };
        look_at_selection(&mut store, &viewpoint, Vec3::new(6.0, 1.5, 8.0));

        assert_eq!(
            *order.lock().unwrap(),
            vec![CameraField::Position, CameraField::Target]
        );
    }
}
