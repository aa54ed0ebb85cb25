//! Initial label placement: one of four canonical positions around the
//! footprint, scored against every footprint in the scene so clustered
//! objects tend to alternate sides.

use super::force::push_force;
use super::types::ScaledItem;

/// Picks an initial label offset for every item. Offsets are relative to the
/// item's screen center, addressing the label box's lower-left corner before
/// the margin shift.
pub(crate) fn initial_offsets(items: &[ScaledItem], margin: f32) -> Vec<(f32, f32)> {
    items
        .iter()
        .map(|item| best_candidate(item, items, margin))
        .collect()
}

/// The four candidates in priority order: right of, left of, above, below
/// the footprint, each a hair (0.1px) outside the footprint boundary.
fn candidate_offsets(item: &ScaledItem, margin: f32) -> [(f32, f32); 4] {
    let w = item.label_w + 2.0 * margin;
    let h = item.label_h + 2.0 * margin;
    let r = item.radius;
    [
        (r + margin + 0.1, -item.label_h / 2.0),
        (-r - 0.1 - w, -item.label_h / 2.0),
        (-item.label_w / 2.0, r + margin + 0.1),
        (-item.label_w / 2.0, -r - 0.1 - h),
    ]
}

fn best_candidate(item: &ScaledItem, items: &[ScaledItem], margin: f32) -> (f32, f32) {
    let mut best = (0.0, 0.0);
    let mut best_score = f32::INFINITY;
    for (k, candidate) in candidate_offsets(item, margin).into_iter().enumerate() {
        let rect = item.label_rect(candidate, margin);

        // Score against every footprint, the item's own included: the label
        // must clear its own icon too.
        let mut score = 0.0;
        for other in items {
            let (fx, fy) = push_force(&rect, &other.footprint_rect(), margin);
            score += fx.abs() + fy.abs();
        }

        if k == 0 || score < best_score {
            best = candidate;
            best_score = score;
        }
        // First collision-free candidate wins outright.
        if score == 0.0 {
            break;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(center: (f32, f32), radius: f32) -> ScaledItem {
        ScaledItem {
            center,
            radius,
            label_w: 40.0,
            label_h: 12.0,
        }
    }

    const MARGIN: f32 = 5.0;

    #[test]
    fn isolated_item_goes_right() {
        let items = vec![item((0.0, 0.0), 6.0)];
        let offsets = initial_offsets(&items, MARGIN);
        let expected = candidate_offsets(&items[0], MARGIN)[0];
        assert_eq!(offsets[0], expected);
    }

    #[test]
    fn blocked_right_side_falls_through_to_left() {
        // A big footprint parked where the right-side label would land.
        let items = vec![item((0.0, 0.0), 6.0), item((45.0, 0.0), 25.0)];
        let offsets = initial_offsets(&items, MARGIN);
        let candidates = candidate_offsets(&items[0], MARGIN);
        assert_eq!(
            offsets[0], candidates[1],
            "left side is the first collision-free candidate"
        );
    }

    #[test]
    fn offset_is_always_a_canonical_candidate() {
        let items = vec![
            item((0.0, 0.0), 8.0),
            item((30.0, 0.0), 8.0),
            item((-30.0, 0.0), 8.0),
            item((0.0, 30.0), 8.0),
        ];
        let offsets = initial_offsets(&items, MARGIN);
        for (it, off) in items.iter().zip(&offsets) {
            let candidates = candidate_offsets(it, MARGIN);
            assert!(candidates.contains(off), "offset {off:?} not canonical");
        }
    }
}
