use serde::Serialize;

/// One known object scaled into screen units for the current resolution.
#[derive(Debug, Clone)]
pub(crate) struct ScaledItem {
    /// Footprint center in screen units (viewport-center relative).
    pub center: (f32, f32),
    /// Adjusted footprint radius in screen units.
    pub radius: f32,
    /// Label text extents in pixels, without margin.
    pub label_w: f32,
    pub label_h: f32,
}

impl ScaledItem {
    /// Square bounding the circular footprint.
    pub(crate) fn footprint_rect(&self) -> super::force::Rect {
        (
            self.center.0 - self.radius,
            self.center.1 - self.radius,
            2.0 * self.radius,
            2.0 * self.radius,
        )
    }

    /// Margin-padded label box for a given total label offset.
    pub(crate) fn label_rect(&self, offset: (f32, f32), margin: f32) -> super::force::Rect {
        (
            self.center.0 + offset.0 - margin,
            self.center.1 + offset.1 - margin,
            self.label_w + 2.0 * margin,
            self.label_h + 2.0 * margin,
        )
    }
}

/// Layout result for one known object.
#[derive(Debug, Clone, Serialize)]
pub struct ObjectLayout {
    pub id: String,
    /// World position (copied through for render convenience).
    pub pos: (f32, f32),
    /// Adjusted footprint radius in screen units.
    pub radius: f32,
    /// Label offset from the screen-projected object position, in pixels.
    pub label_offset: (f32, f32),
}

/// A committed layout snapshot. Rebuilt wholesale on every refresh; items
/// appear in scene order, known objects only.
#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    /// World units per screen pixel.
    pub resolution: f32,
    pub items: Vec<ObjectLayout>,
}

impl Layout {
    pub(crate) fn empty(resolution: f32) -> Self {
        Self {
            resolution,
            items: Vec::new(),
        }
    }
}
