use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tuning constants for the overlay layout. The defaults are the shipped
/// values; a config file may override any subset of fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Extra margin around label text, also the contact tolerance for the
    /// push-force primitive. A generous margin lets the relaxation get away
    /// with fewer iterations.
    pub label_margin: f32,
    /// Final lower bound on footprint radii after overlap resolution.
    pub radius_floor: f32,
    /// Additive pad applied when scaling a footprint radius to screen units.
    pub icon_radius_pad: f32,
    /// Minimum scaled icon radius for gates.
    pub gate_radius_min: f32,
    /// Minimum scaled icon radius for bodies.
    pub body_radius_min: f32,
    /// Horizontal relaxation stiffness.
    pub kx: f32,
    /// Vertical relaxation stiffness. Kept above `kx`: moving a label
    /// vertically is more often the right resolution for this layout.
    pub ky: f32,
    /// Maximum relaxation sweeps per refresh.
    pub max_iters: u32,
    /// Sweep-to-sweep offset change below which relaxation stops.
    pub eps_converge: f32,
    /// Multiplier on the extent-derived world-units-per-pixel scale.
    pub resolution_scale: f32,
    /// Resolution used when the object set is empty or has no extent.
    pub default_resolution: f32,
    /// Fade-in rate in alpha units per second.
    pub fade_rate: f32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            label_margin: 5.0,
            radius_floor: 4.0,
            icon_radius_pad: 2.0,
            gate_radius_min: 5.0,
            body_radius_min: 7.5,
            kx: 0.015,
            ky: 0.045,
            max_iters: 15,
            eps_converge: 1.3,
            resolution_scale: 2.4,
            default_resolution: 50.0,
            fade_rate: 1.0 / 3.0,
        }
    }
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<OverlayConfig> {
    let Some(path) = path else {
        return Ok(OverlayConfig::default());
    };
    let contents = std::fs::read_to_string(path)?;
    let config: OverlayConfig = serde_json::from_str(&contents)?;
    Ok(config)
}
