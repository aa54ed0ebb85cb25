//! User-placed overlay markers. Independent of the layout pipeline; markers
//! persist across refreshes until removed.

use serde::Serialize;

/// Marker payload. Point is the only kind today; the enum leaves room for
/// region or route markers later.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MarkerKind {
    Point { x: f32, y: f32 },
}

#[derive(Debug, Clone, Serialize)]
pub struct Marker {
    pub id: u32,
    pub text: Option<String>,
    pub kind: MarkerKind,
}

/// Insertion-ordered marker store. Ids are handed out monotonically starting
/// at 1 and never reused, removals included.
#[derive(Debug, Clone, Default)]
pub struct MarkerRegistry {
    markers: Vec<Marker>,
    last_id: u32,
}

impl MarkerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a point marker at world position `(x, y)` and returns its id.
    pub fn add_point(&mut self, text: Option<&str>, x: f32, y: f32) -> u32 {
        self.last_id += 1;
        self.markers.push(Marker {
            id: self.last_id,
            text: text.map(str::to_owned),
            kind: MarkerKind::Point { x, y },
        });
        self.last_id
    }

    /// Removes the marker with the given id; unknown ids are a no-op.
    pub fn remove(&mut self, id: u32) {
        self.markers.retain(|marker| marker.id != id);
    }

    pub fn clear(&mut self) {
        self.markers.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
