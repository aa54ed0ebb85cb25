//! Damped force relaxation of label offsets, run after initial placement.
//!
//! This is a primal Uzawa iteration for a contact problem: minimize the
//! weighted norm of the offsets under non-interpenetration constraints, with
//! the pairwise contact forces as dual variables. The constraints are not
//! guaranteed to be met — crowded scenes keep residual overlap once the
//! iteration budget runs out.

use super::force::accumulate_push;
use super::types::ScaledItem;
use crate::config::OverlayConfig;

/// Contact forces one contributor exerts on one label, split by source so
/// the accumulation stays legible. Carried across sweeps: while contact
/// persists the force keeps growing, which is what eventually moves labels
/// that a single push would barely nudge.
#[derive(Debug, Clone, Copy, Default)]
struct PairForces {
    footprint: (f32, f32),
    label: (f32, f32),
}

/// Computes per-item relaxation offsets. `initial` holds the placement
/// offsets; the returned offsets add on top of them. The final label offset
/// for item `i` is `initial[i] + result[i]`.
pub(crate) fn relax_offsets(
    items: &[ScaledItem],
    initial: &[(f32, f32)],
    config: &OverlayConfig,
) -> Vec<(f32, f32)> {
    let n = items.len();
    let mut committed = vec![(0.0f32, 0.0f32); n];
    if n == 0 {
        return committed;
    }

    let margin = config.label_margin;
    let mut forces = vec![vec![PairForces::default(); n]; n];
    let mut pending = vec![(0.0f32, 0.0f32); n];

    for _ in 0..config.max_iters {
        let mut max_change = 0.0f32;

        // Jacobi sweep: every read goes through `committed`, the state from
        // the previous sweep, so the outcome does not depend on item order.
        for i in 0..n {
            let off_i = (
                initial[i].0 + committed[i].0,
                initial[i].1 + committed[i].1,
            );
            let rect_i = items[i].label_rect(off_i, margin);

            let (mut sum_fx, mut sum_fy) = (0.0f32, 0.0f32);
            for (j, item_j) in items.iter().enumerate() {
                let slot = &mut forces[i][j];
                accumulate_push(&mut slot.footprint, &rect_i, &item_j.footprint_rect(), margin);
                if j != i {
                    let off_j = (
                        initial[j].0 + committed[j].0,
                        initial[j].1 + committed[j].1,
                    );
                    accumulate_push(&mut slot.label, &rect_i, &item_j.label_rect(off_j, margin), margin);
                }
                sum_fx += slot.footprint.0 + slot.label.0;
                sum_fy += slot.footprint.1 + slot.label.1;
            }

            // Diagonal stiffness, vertical preferred.
            let next = (config.kx * sum_fx, config.ky * sum_fy);
            let change = (pending[i].0 - next.0).abs() + (pending[i].1 - next.1).abs();
            max_change = max_change.max(change);
            pending[i] = next;
        }

        // Commit all offsets at once after the sweep.
        committed.copy_from_slice(&pending);

        if max_change <= config.eps_converge {
            break;
        }
    }

    committed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::force::Rect;
    use crate::layout::placement::initial_offsets;

    fn item(center: (f32, f32), radius: f32, label_w: f32) -> ScaledItem {
        ScaledItem {
            center,
            radius,
            label_w,
            label_h: 12.0,
        }
    }

    fn overlap_area(a: &Rect, b: &Rect) -> f32 {
        let w = (a.0 + a.2).min(b.0 + b.2) - a.0.max(b.0);
        let h = (a.1 + a.3).min(b.1 + b.3) - a.1.max(b.1);
        w.max(0.0) * h.max(0.0)
    }

    fn total_label_overlap(items: &[ScaledItem], offsets: &[(f32, f32)], margin: f32) -> f32 {
        let rects: Vec<Rect> = items
            .iter()
            .zip(offsets)
            .map(|(it, off)| it.label_rect(*off, margin))
            .collect();
        let mut total = 0.0;
        for i in 0..rects.len() {
            for j in (i + 1)..rects.len() {
                total += overlap_area(&rects[i], &rects[j]);
            }
        }
        total
    }

    #[test]
    fn empty_input_yields_no_offsets() {
        let config = OverlayConfig::default();
        assert!(relax_offsets(&[], &[], &config).is_empty());
    }

    #[test]
    fn isolated_item_stays_put() {
        let config = OverlayConfig::default();
        let items = vec![item((0.0, 0.0), 6.0, 40.0)];
        let initial = initial_offsets(&items, config.label_margin);
        let relaxed = relax_offsets(&items, &initial, &config);
        assert_eq!(relaxed[0], (0.0, 0.0));
    }

    #[test]
    fn relaxation_is_deterministic() {
        let config = OverlayConfig::default();
        let items: Vec<ScaledItem> = (0..6)
            .map(|i| item((i as f32 * 14.0, (i % 3) as f32 * 9.0), 7.0, 50.0))
            .collect();
        let initial = initial_offsets(&items, config.label_margin);
        let first = relax_offsets(&items, &initial, &config);
        let second = relax_offsets(&items, &initial, &config);
        assert_eq!(first, second);
    }

    #[test]
    fn crowded_labels_drift_apart() {
        let config = OverlayConfig::default();
        // Two items almost on top of each other: both pick the right-side
        // placement and their labels overlap heavily.
        let items = vec![item((0.0, 0.0), 6.0, 60.0), item((0.0, 2.0), 6.0, 60.0)];
        let initial = initial_offsets(&items, config.label_margin);
        let relaxed = relax_offsets(&items, &initial, &config);
        let final_offsets: Vec<(f32, f32)> = initial
            .iter()
            .zip(&relaxed)
            .map(|(a, b)| (a.0 + b.0, a.1 + b.1))
            .collect();
        let before = total_label_overlap(&items, &initial, config.label_margin);
        let after = total_label_overlap(&items, &final_offsets, config.label_margin);
        assert!(
            after < before,
            "relaxation should reduce overlap: {after} !< {before}"
        );
        assert!(relaxed.iter().any(|off| *off != (0.0, 0.0)));
    }

    #[test]
    fn zero_iteration_budget_returns_zero_offsets() {
        let config = OverlayConfig {
            max_iters: 0,
            ..OverlayConfig::default()
        };
        let items = vec![item((0.0, 0.0), 6.0, 60.0), item((4.0, 0.0), 6.0, 60.0)];
        let initial = initial_offsets(&items, config.label_margin);
        let relaxed = relax_offsets(&items, &initial, &config);
        assert!(relaxed.iter().all(|off| *off == (0.0, 0.0)));
    }
}
