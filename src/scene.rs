//! Input model for the overlay: fixed-position objects with pre-measured
//! labels. Positions, radii and text extents come from collaborators; the
//! layout core only reads them.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("failed to read scene file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse scene: {0}")]
    Parse(#[from] serde_json::Error),
}

/// What an object is on the map. Only the minimum icon radius differs today,
/// but renderers key symbol choice off this as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    /// Jump gate / route endpoint.
    Gate,
    /// Celestial body (planet, station, ...).
    Body,
}

/// A label plus its rendered extents in pixels. Measured externally — see
/// the `font-metrics` feature for a font-backed measurer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelText {
    pub text: String,
    pub width: f32,
    pub height: f32,
}

impl LabelText {
    pub fn new(text: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            text: text.into(),
            width,
            height,
        }
    }
}

/// One fixed map object with a circular footprint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapObject {
    pub id: String,
    pub kind: ObjectKind,
    /// World position.
    pub pos: (f32, f32),
    /// Base footprint radius in world units.
    pub radius: f32,
    pub label: LabelText,
    /// Whether the object is revealed to the viewer. Unknown objects still
    /// count towards the view extent but receive no layout item.
    #[serde(default = "default_known")]
    pub known: bool,
}

fn default_known() -> bool {
    true
}

/// The full object set plus the viewport it is laid out for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub objects: Vec<MapObject>,
    /// Viewport width/height in screen pixels.
    pub viewport: (f32, f32),
}

impl Scene {
    pub fn from_json(input: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, SceneError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Objects currently shown on the overlay.
    pub fn known_objects(&self) -> impl Iterator<Item = &MapObject> {
        self.objects.iter().filter(|o| o.known)
    }
}
