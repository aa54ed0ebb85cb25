//! Overlay layout pipeline: resolution from the scene extent, footprint
//! radius resolution, initial label placement, then force relaxation. The
//! whole pipeline runs synchronously on the calling thread and rebuilds the
//! snapshot from scratch — call it on topology or visibility changes, not
//! every frame.

pub(crate) mod force;
mod placement;
mod radius;
mod relax;
pub(crate) mod types;

pub use types::{Layout, ObjectLayout};

use crate::config::OverlayConfig;
use crate::scene::{MapObject, ObjectKind, Scene};
use types::ScaledItem;

/// Computes a fresh layout snapshot for the scene's known objects.
pub fn compute_layout(scene: &Scene, config: &OverlayConfig) -> Layout {
    let resolution = resolution_for(scene, config);
    let known: Vec<&MapObject> = scene.known_objects().collect();
    if known.is_empty() {
        return Layout::empty(resolution);
    }

    let mut items: Vec<ScaledItem> = known
        .iter()
        .map(|obj| {
            let min_radius = match obj.kind {
                ObjectKind::Gate => config.gate_radius_min,
                ObjectKind::Body => config.body_radius_min,
            };
            ScaledItem {
                center: (obj.pos.0 / resolution, obj.pos.1 / resolution),
                radius: (config.icon_radius_pad + obj.radius / resolution).max(min_radius),
                label_w: obj.label.width,
                label_h: obj.label.height,
            }
        })
        .collect();

    // Shrink footprints until pairwise separated, then clamp to the floor.
    let centers: Vec<(f32, f32)> = items.iter().map(|item| item.center).collect();
    let mut radii: Vec<f32> = items.iter().map(|item| item.radius).collect();
    radius::solve_radii(&centers, &mut radii, config.radius_floor);
    for (item, radius) in items.iter_mut().zip(&radii) {
        item.radius = *radius;
    }

    let initial = placement::initial_offsets(&items, config.label_margin);
    let relaxed = relax::relax_offsets(&items, &initial, config);

    let layout_items = known
        .iter()
        .zip(&items)
        .zip(initial.iter().zip(&relaxed))
        .map(|((obj, item), (init, rel))| ObjectLayout {
            id: obj.id.clone(),
            pos: obj.pos,
            radius: item.radius,
            label_offset: (init.0 + rel.0, init.1 + rel.1),
        })
        .collect();

    Layout {
        resolution,
        items: layout_items,
    }
}

/// World-units-per-pixel for the current scene. The extent covers every
/// object, known or not, so revealing an object never rescales the view.
pub fn resolution_for(scene: &Scene, config: &OverlayConfig) -> f32 {
    let mut max_x = 0.0f32;
    let mut max_y = 0.0f32;
    for obj in &scene.objects {
        max_x = max_x.max(obj.pos.0.abs());
        max_y = max_y.max(obj.pos.1.abs());
    }
    let (vw, vh) = scene.viewport;
    let resolution = config.resolution_scale * (max_x / vw).max(max_y / vh);
    if resolution.is_finite() && resolution > 0.0 {
        resolution
    } else {
        config.default_resolution
    }
}
