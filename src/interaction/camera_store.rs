//! Camera store shared between the selection logic and the camera rig
//!
//! The store is constructed explicitly and handed to whoever needs it; in the
//! running app it lives inside the `CameraStoreRes` Bevy resource. Observers
//! register callbacks that fire after every setter call.

use bevy::math::Vec3;

use crate::config::camera::{INITIAL_POSITION, INITIAL_TARGET};

// =============================================================================
// State
// =============================================================================

/// Camera pose requested by the interaction logic
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// Where the camera should sit
    pub position: Vec3,
    /// Point the camera looks at and orbits around
    pub target: Vec3,
    /// Whether any cube is currently in edit mode
    pub edit_global: bool,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            position: Vec3::from_array(INITIAL_POSITION),
            target: Vec3::from_array(INITIAL_TARGET),
            edit_global: false,
        }
    }
}

/// Which field a setter replaced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraField {
    Position,
    Target,
    Edit,
}

// =============================================================================
// Subscriptions
// =============================================================================

/// Handle returned by [`CameraStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&CameraState, CameraField) + Send + Sync>;

/// Observable camera state with explicit subscriber callbacks
#[derive(Default)]
pub struct CameraStore {
    state: CameraState,
    revision: u64,
    pose_revision: u64,
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Callback)>,
}

impl CameraStore {
    pub fn new(state: CameraState) -> Self {
        Self {
            state,
            ..Default::default()
        }
    }

    pub fn state(&self) -> &CameraState {
        &self.state
    }

    /// Number of setter calls since construction
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Number of position/target setter calls since construction
    pub fn pose_revision(&self) -> u64 {
        self.pose_revision
    }

    /// Replace the camera position
    pub fn set_cam_position(&mut self, position: Vec3) {
        self.state.position = position;
        self.pose_revision += 1;
        self.notify(CameraField::Position);
    }

    /// Replace the look-at target
    pub fn set_target(&mut self, target: Vec3) {
        self.state.target = target;
        self.pose_revision += 1;
        self.notify(CameraField::Target);
    }

    /// Replace the global edit flag
    pub fn set_edit(&mut self, edit: bool) {
        self.state.edit_global = edit;
        self.notify(CameraField::Edit);
    }

    /// Register a callback invoked after every setter call
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&CameraState, CameraField) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback; returns false if the id was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub, _)| *sub != id);
        self.subscribers.len() != before
    }

    fn notify(&mut self, field: CameraField) {
        self.revision += 1;
        let state = self.state;
        for (_, callback) in self.subscribers.iter_mut() {
            callback(&state, field);
        }
    }
}

impl std::fmt::Debug for CameraStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraStore")
            .field("state", &self.state)
            .field("revision", &self.revision)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
