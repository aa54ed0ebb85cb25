//! World/screen coordinate mapping for the overlay view.

/// Maps world coordinates to overlay screen coordinates and back. The
/// resolution comes from the latest layout refresh and is always positive.
#[derive(Debug, Clone, Copy)]
pub struct OverlayMapper {
    center: (f32, f32),
    resolution: f32,
}

impl OverlayMapper {
    pub fn new(viewport: (f32, f32), resolution: f32) -> Self {
        Self {
            center: (viewport.0 / 2.0, viewport.1 / 2.0),
            resolution,
        }
    }

    pub fn resolution(&self) -> f32 {
        self.resolution
    }

    pub fn world_to_screen(&self, pos: (f32, f32)) -> (f32, f32) {
        (
            self.center.0 + pos.0 / self.resolution,
            self.center.1 + pos.1 / self.resolution,
        )
    }

    /// Inverse of [`world_to_screen`](Self::world_to_screen), used for
    /// pointer-to-world conversion when click targeting.
    pub fn screen_to_world(&self, pos: (f32, f32)) -> (f32, f32) {
        (
            (pos.0 - self.center.0) * self.resolution,
            (pos.1 - self.center.1) * self.resolution,
        )
    }
}
