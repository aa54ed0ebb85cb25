//! The overlay session: open/close state, the committed layout snapshot,
//! coordinate mapping, markers and fades behind one handle. Single-threaded;
//! refresh is the only mutator of the layout snapshot and runs to completion
//! on the calling thread.

use crate::config::OverlayConfig;
use crate::fade::FadeState;
use crate::layout::{Layout, compute_layout};
use crate::mapper::OverlayMapper;
use crate::markers::{Marker, MarkerRegistry};
use crate::scene::Scene;

/// Per-object render view derived from the latest refresh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectView {
    /// Adjusted footprint radius in screen units.
    pub radius: f32,
    /// Label offset from the object's projected position, in pixels.
    pub label_offset: (f32, f32),
    /// Fade alpha in [0, 1].
    pub alpha: f32,
}

pub struct OverlaySession {
    config: OverlayConfig,
    open: bool,
    mapper: OverlayMapper,
    layout: Layout,
    /// Scene index of each layout item, for alpha lookups.
    item_scene_index: Vec<usize>,
    markers: MarkerRegistry,
    fade: FadeState,
}

impl OverlaySession {
    pub fn new(viewport: (f32, f32), config: OverlayConfig) -> Self {
        let resolution = config.default_resolution;
        Self {
            config,
            open: false,
            mapper: OverlayMapper::new(viewport, resolution),
            layout: Layout::empty(resolution),
            item_scene_index: Vec::new(),
            markers: MarkerRegistry::new(),
            fade: FadeState::new(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Opens the overlay. The closed-to-open transition reseeds all fades
    /// and recomputes the layout; opening twice is a no-op.
    pub fn open(&mut self, scene: &Scene) {
        if self.open {
            return;
        }
        self.open = true;
        self.fade.reset(scene);
        self.refresh(scene);
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Recomputes the full layout snapshot. Call on any topology or
    /// visibility change; does nothing while the overlay is closed.
    pub fn refresh(&mut self, scene: &Scene) {
        if !self.open {
            return;
        }
        self.layout = compute_layout(scene, &self.config);
        self.mapper = OverlayMapper::new(scene.viewport, self.layout.resolution);
        self.item_scene_index = scene
            .objects
            .iter()
            .enumerate()
            .filter(|(_, obj)| obj.known)
            .map(|(index, _)| index)
            .collect();
        self.fade.ensure_len(scene.objects.len());
    }

    /// Advances fade animations by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        if self.open {
            self.fade.advance(dt, self.config.fade_rate);
        }
    }

    /// The latest committed layout snapshot.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn mapper(&self) -> &OverlayMapper {
        &self.mapper
    }

    pub fn world_to_screen(&self, pos: (f32, f32)) -> (f32, f32) {
        self.mapper.world_to_screen(pos)
    }

    pub fn screen_to_world(&self, pos: (f32, f32)) -> (f32, f32) {
        self.mapper.screen_to_world(pos)
    }

    /// View for the `index`-th layout item of the latest snapshot.
    pub fn object_view(&self, index: usize) -> Option<ObjectView> {
        let item = self.layout.items.get(index)?;
        let scene_index = *self.item_scene_index.get(index)?;
        Some(ObjectView {
            radius: item.radius,
            label_offset: item.label_offset,
            alpha: self.fade.alpha(scene_index).unwrap_or(1.0),
        })
    }

    pub fn add_point(&mut self, text: Option<&str>, x: f32, y: f32) -> u32 {
        self.markers.add_point(text, x, y)
    }

    pub fn remove_marker(&mut self, id: u32) {
        self.markers.remove(id);
    }

    pub fn clear_markers(&mut self) {
        self.markers.clear();
    }

    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter()
    }
}
