//! Static scene description: the viewpoint table and the cube list
//!
//! The description is plain JSON so the layout can be changed without a
//! rebuild. It is resolved once at startup into [`Scene`], which carries
//! validated cubes with their viewpoint already looked up.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use bevy::color::Srgba;
use bevy::math::Vec3;
use serde::Deserialize;
use thiserror::Error;

use crate::config::DEFAULT_SCENE_JSON;
use crate::interaction::css_colors::css_color;

/// Errors raised while loading a scene description
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("failed to read scene file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid scene description: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("cube `{cube}` refers to unknown viewpoint `{viewpoint}`")]
    UnknownViewpoint { cube: String, viewpoint: String },
    #[error("unknown cube color `{0}`")]
    UnknownColor(String),
    #[error("cube color `{0}` is used more than once")]
    DuplicateColor(String),
    #[error("scene description contains no cubes")]
    Empty,
}

// =============================================================================
// Wire format
// =============================================================================

/// Scene description as stored on disk
#[derive(Debug, Clone, Deserialize)]
pub struct SceneDescription {
    pub viewpoints: BTreeMap<String, [f32; 3]>,
    pub cubes: Vec<CubeDescription>,
}

/// One cube entry of the scene description
#[derive(Debug, Clone, Deserialize)]
pub struct CubeDescription {
    /// CSS color name, also the cube's identity
    pub color: String,
    pub position: [f32; 3],
    /// Euler angles (XYZ, radians)
    #[serde(default)]
    pub rotation: [f32; 3],
    /// Key into the viewpoint table
    pub viewpoint: String,
}

// =============================================================================
// Resolved scene
// =============================================================================

/// Named camera position associated with a cube
#[derive(Debug, Clone, PartialEq)]
pub struct Viewpoint {
    pub name: String,
    pub position: Vec3,
}

/// A validated cube ready to be spawned
#[derive(Debug, Clone, PartialEq)]
pub struct CubeEntity {
    pub color: String,
    pub base_color: Srgba,
    pub base_position: Vec3,
    pub base_rotation: Vec3,
    pub viewpoint: Viewpoint,
}

/// Validated scene: every cube has a known color and viewpoint
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub viewpoints: Vec<Viewpoint>,
    pub cubes: Vec<CubeEntity>,
}

impl SceneDescription {
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, SceneError> {
        let json = std::fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Validate the description and look up each cube's viewpoint
    pub fn resolve(self) -> Result<Scene, SceneError> {
        if self.cubes.is_empty() {
            return Err(SceneError::Empty);
        }

        let viewpoints: Vec<Viewpoint> = self
            .viewpoints
            .iter()
            .map(|(name, position)| Viewpoint {
                name: name.clone(),
                position: Vec3::from_array(*position),
            })
            .collect();

        let mut cubes: Vec<CubeEntity> = Vec::with_capacity(self.cubes.len());
        for cube in self.cubes {
            if cubes.iter().any(|c| c.color == cube.color) {
                return Err(SceneError::DuplicateColor(cube.color));
            }
            let base_color = css_color(&cube.color)
                .ok_or_else(|| SceneError::UnknownColor(cube.color.clone()))?;
            let viewpoint = viewpoints
                .iter()
                .find(|v| v.name == cube.viewpoint)
                .cloned()
                .ok_or_else(|| SceneError::UnknownViewpoint {
                    cube: cube.color.clone(),
                    viewpoint: cube.viewpoint.clone(),
                })?;

            cubes.push(CubeEntity {
                color: cube.color,
                base_color,
                base_position: Vec3::from_array(cube.position),
                base_rotation: Vec3::from_array(cube.rotation),
                viewpoint,
            });
        }

        Ok(Scene { viewpoints, cubes })
    }
}

/// Load the scene from `path`, or the embedded default when `None`
pub fn load_scene(path: Option<&Path>) -> Result<Scene, SceneError> {
    let description = match path {
        Some(path) => SceneDescription::from_path(path)?,
        None => SceneDescription::from_json(DEFAULT_SCENE_JSON)?,
    };
    description.resolve()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scene_has_three_cubes_with_viewpoints() {
        let scene = load_scene(None).unwrap();
        assert_eq!(scene.cubes.len(), 3);

        let crimson = &scene.cubes[0];
        assert_eq!(crimson.color, "crimson");
        assert_eq!(crimson.viewpoint.name, "front");
        assert_eq!(crimson.viewpoint.position, Vec3::new(0.0, 25.0, 50.0));
        assert_eq!(crimson.base_rotation, Vec3::new(0.0, 1.0, 0.0));

        let gray = &scene.cubes[1];
        assert_eq!(gray.color, "darkslategray");
        assert_eq!(gray.base_position, Vec3::new(-6.0, 0.0, 0.0));
        assert_eq!(gray.viewpoint.position, Vec3::new(-50.0, 25.0, 0.0));

        let blue = &scene.cubes[2];
        assert_eq!(blue.viewpoint.position, Vec3::new(50.0, 25.0, 0.0));
        assert!((blue.base_rotation.y - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn missing_rotation_defaults_to_zero() {
        let json = r#"{
            "viewpoints": { "front": [0, 25, 50] },
            "cubes": [{ "color": "gold", "position": [1, 2, 3], "viewpoint": "front" }]
        }"#;
        let scene = SceneDescription::from_json(json).unwrap().resolve().unwrap();
        assert_eq!(scene.cubes[0].base_rotation, Vec3::ZERO);
    }

    #[test]
    fn any_css_keyword_is_a_valid_cube_color() {
        let json = r#"{
            "viewpoints": { "front": [0, 25, 50] },
            "cubes": [
                { "color": "teal", "position": [0, 0, 0], "viewpoint": "front" },
                { "color": "HotPink", "position": [4, 0, 0], "viewpoint": "front" },
                { "color": "darkorange", "position": [8, 0, 0], "viewpoint": "front" }
            ]
        }"#;
        let scene = SceneDescription::from_json(json).unwrap().resolve().unwrap();
        let colors: Vec<_> = scene.cubes.iter().map(|c| c.base_color).collect();
        assert_eq!(
            colors,
            [
                Srgba::rgb_u8(0, 128, 128),
                Srgba::rgb_u8(255, 105, 180),
                Srgba::rgb_u8(255, 140, 0),
            ]
        );
    }

    #[test]
    fn unknown_viewpoint_is_rejected() {
        let json = r#"{
            "viewpoints": { "front": [0, 25, 50] },
            "cubes": [{ "color": "gold", "position": [0, 0, 0], "viewpoint": "back" }]
        }"#;
        let err = SceneDescription::from_json(json).unwrap().resolve().unwrap_err();
        assert!(matches!(
            err,
            SceneError::UnknownViewpoint { ref viewpoint, .. } if viewpoint == "back"
        ));
    }

    #[test]
    fn unknown_and_duplicate_colors_are_rejected() {
        let unknown = r#"{
            "viewpoints": { "front": [0, 25, 50] },
            "cubes": [{ "color": "chartreuse-ish", "position": [0, 0, 0], "viewpoint": "front" }]
        }"#;
        let err = SceneDescription::from_json(unknown).unwrap().resolve().unwrap_err();
        assert!(matches!(err, SceneError::UnknownColor(_)));

        let duplicate = r#"{
            "viewpoints": { "front": [0, 25, 50] },
            "cubes": [
                { "color": "gold", "position": [0, 0, 0], "viewpoint": "front" },
                { "color": "gold", "position": [1, 0, 0], "viewpoint": "front" }
            ]
        }"#;
        let err = SceneDescription::from_json(duplicate).unwrap().resolve().unwrap_err();
        assert!(matches!(err, SceneError::DuplicateColor(ref c) if c == "gold"));
    }

    #[test]
    fn empty_and_malformed_descriptions_fail() {
        let empty = r#"{ "viewpoints": {}, "cubes": [] }"#;
        let err = SceneDescription::from_json(empty).unwrap().resolve().unwrap_err();
        assert!(matches!(err, SceneError::Empty));

        let err = SceneDescription::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SceneError::Parse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = SceneDescription::from_path(Path::new("/nonexistent/scene.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/scene.json"));
    }
}
