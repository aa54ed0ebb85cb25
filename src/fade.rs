//! Per-object fade-in state. Alphas only ever rise between resets.

use crate::scene::Scene;

#[derive(Debug, Clone, Default)]
pub struct FadeState {
    alphas: Vec<f32>,
    elapsed: f32,
}

impl FadeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-seeds every alpha for an open transition: already-known objects
    /// show at full strength, the rest start invisible and fade in as they
    /// become known.
    pub fn reset(&mut self, scene: &Scene) {
        self.alphas = scene
            .objects
            .iter()
            .map(|obj| if obj.known { 1.0 } else { 0.0 })
            .collect();
        self.elapsed = 0.0;
    }

    /// Grows the alpha list when the scene gained objects mid-session; new
    /// entries fade in from zero. Never shrinks existing state.
    pub fn ensure_len(&mut self, len: usize) {
        if self.alphas.len() < len {
            self.alphas.resize(len, 0.0);
        }
    }

    /// Advances all fades by `dt` seconds at `rate` alpha per second.
    pub fn advance(&mut self, dt: f32, rate: f32) {
        self.elapsed += dt;
        for alpha in &mut self.alphas {
            if *alpha < 1.0 {
                *alpha = (*alpha + rate * dt).min(1.0);
            }
        }
    }

    /// Alpha for the scene object at `index`, in [0, 1].
    pub fn alpha(&self, index: usize) -> Option<f32> {
        self.alphas.get(index).copied()
    }

    /// Seconds since the last reset, for shader-style pulse animations.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}
