//! Messages emitted by the pointer system and consumed by the controllers

use bevy::prelude::*;

/// A click resolved to the nearest cube under the cursor
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct CubeClicked {
    pub cube: Entity,
    /// World-space point where the pick ray met the cube's surface
    pub point: Vec3,
}

/// Second click on the same cube within the double-click window
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubeDoubleClicked {
    pub cube: Entity,
}
