//! Serializable view of a computed layout, for the CLI and for debugging
//! layout regressions without a renderer.

use crate::layout::Layout;
use crate::mapper::OverlayMapper;
use crate::scene::Scene;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub resolution: f32,
    pub viewport: [f32; 2],
    pub items: Vec<ItemDump>,
}

#[derive(Debug, Serialize)]
pub struct ItemDump {
    pub id: String,
    pub kind: String,
    pub world: [f32; 2],
    pub screen: [f32; 2],
    pub radius: f32,
    pub label: String,
    pub label_offset: [f32; 2],
}

impl LayoutDump {
    pub fn from_layout(layout: &Layout, scene: &Scene) -> Self {
        let mapper = OverlayMapper::new(scene.viewport, layout.resolution);
        // Layout items mirror the known objects in scene order.
        let items = layout
            .items
            .iter()
            .zip(scene.known_objects())
            .map(|(item, obj)| {
                let screen = mapper.world_to_screen(item.pos);
                ItemDump {
                    id: item.id.clone(),
                    kind: format!("{:?}", obj.kind),
                    world: [item.pos.0, item.pos.1],
                    screen: [screen.0, screen.1],
                    radius: item.radius,
                    label: obj.label.text.clone(),
                    label_offset: [item.label_offset.0, item.label_offset.1],
                }
            })
            .collect();

        LayoutDump {
            resolution: layout.resolution,
            viewport: [scene.viewport.0, scene.viewport.1],
            items,
        }
    }
}
