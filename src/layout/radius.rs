//! Footprint radius solver: shrinks radii until no two footprints
//! interpenetrate, then clamps to the floor. The floor clamp is final and
//! never re-checked, so crowded scenes may keep some footprint overlap.

/// Pair whose radii must fit within their center distance.
struct RadiusConstraint {
    i: usize,
    j: usize,
    dist: f32,
}

/// Shrinks conflicting radii in place, then applies the floor.
pub(crate) fn solve_radii(centers: &[(f32, f32)], radii: &mut [f32], floor: f32) {
    debug_assert_eq!(centers.len(), radii.len());
    shrink_overlaps(centers, radii);
    for radius in radii.iter_mut() {
        *radius = radius.max(floor);
    }
}

/// Multiplicative shrink loop. Each round every still-conflicting pair
/// contributes its distance/radius-sum ratio; all flagged radii shrink by the
/// smallest ratio (minus an epsilon), which resolves at least the tightest
/// pair, so the loop terminates.
fn shrink_overlaps(centers: &[(f32, f32)], radii: &mut [f32]) {
    let mut conflicts: Vec<RadiusConstraint> = Vec::new();
    for i in 0..centers.len() {
        for j in (i + 1)..centers.len() {
            let dx = centers[i].0 - centers[j].0;
            let dy = centers[i].1 - centers[j].1;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist < radii[i] + radii[j] {
                conflicts.push(RadiusConstraint { i, j, dist });
            }
        }
    }

    while !conflicts.is_empty() {
        let mut shrink = f32::INFINITY;
        let mut flagged = vec![false; radii.len()];
        conflicts.retain(|c| {
            // Coincident centers can never be separated by shrinking.
            if c.dist <= 0.0 {
                return false;
            }
            let ratio = c.dist / (radii[c.i] + radii[c.j]);
            if ratio >= 1.0 {
                return false;
            }
            shrink = shrink.min(ratio - f32::EPSILON);
            flagged[c.i] = true;
            flagged[c.j] = true;
            true
        });
        if conflicts.is_empty() {
            break;
        }
        for (radius, must_shrink) in radii.iter_mut().zip(&flagged) {
            if *must_shrink {
                *radius *= shrink;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn max_pair_violation(centers: &[(f32, f32)], radii: &[f32]) -> f32 {
        let mut worst = 0.0f32;
        for i in 0..centers.len() {
            for j in (i + 1)..centers.len() {
                let dx = centers[i].0 - centers[j].0;
                let dy = centers[i].1 - centers[j].1;
                let dist = (dx * dx + dy * dy).sqrt();
                worst = worst.max(radii[i] + radii[j] - dist);
            }
        }
        worst
    }

    #[test]
    fn two_equal_items_shrink_by_distance_ratio() {
        let centers = [(0.0, 0.0), (3.0, 0.0)];
        let mut radii = [2.0, 2.0];
        shrink_overlaps(&centers, &mut radii);
        // ratio 3/4, both scale to 2 * (0.75 - eps)
        assert!((radii[0] - 1.5).abs() < 1e-4, "got {}", radii[0]);
        assert!((radii[1] - 1.5).abs() < 1e-4, "got {}", radii[1]);
        assert!(max_pair_violation(&centers, &radii) <= 1e-4);
    }

    #[test]
    fn floor_clamp_runs_after_convergence() {
        let centers = [(0.0, 0.0), (3.0, 0.0)];
        let mut radii = [2.0, 2.0];
        solve_radii(&centers, &mut radii, 4.0);
        // both shrink below the floor, then clamp back up; the resulting
        // overlap is accepted.
        assert_eq!(radii, [4.0, 4.0]);
    }

    #[test]
    fn cluster_ends_pairwise_separated() {
        let centers = [(0.0, 0.0), (10.0, 0.0), (5.0, 6.0), (40.0, 40.0)];
        let mut radii = [8.0, 7.0, 6.0, 3.0];
        shrink_overlaps(&centers, &mut radii);
        assert!(
            max_pair_violation(&centers, &radii) <= 1e-3,
            "violation {}",
            max_pair_violation(&centers, &radii)
        );
        // The isolated item never shrinks.
        assert_eq!(radii[3], 3.0);
    }

    #[test]
    fn single_item_untouched() {
        let centers = [(12.0, -7.0)];
        let mut radii = [9.0];
        solve_radii(&centers, &mut radii, 4.0);
        assert_eq!(radii, [9.0]);
    }

    #[test]
    fn coincident_centers_do_not_hang() {
        let centers = [(1.0, 1.0), (1.0, 1.0)];
        let mut radii = [5.0, 5.0];
        solve_radii(&centers, &mut radii, 4.0);
        assert!(radii.iter().all(|r| *r >= 4.0));
    }
}
