//! Rectangle push-force primitive. All rects are axis-aligned
//! `(x, y, width, height)` in screen units, y up.

/// Axis-aligned rectangle: origin x/y, width, height.
pub(crate) type Rect = (f32, f32, f32, f32);

/// Updates the accumulated force pushing `a` away from `b`.
///
/// Each axis is resolved independently: the component is the translation
/// that would separate the rects along that axis, signed toward the side of
/// `b` that `a`'s center already lies on, and clamped so the accumulator
/// never points back into `b`. When the rects do not touch on the
/// perpendicular axis (beyond `margin` of tolerance) the component resets to
/// zero. Resolving both axes at once can overcorrect diagonally; the
/// relaxation stiffness absorbs that.
pub(crate) fn accumulate_push(acc: &mut (f32, f32), a: &Rect, b: &Rect, margin: f32) {
    let (ax, ay, aw, ah) = *a;
    let (bx, by, bw, bh) = *b;

    // No contact because of the y offset (+tolerance).
    if ay + ah < by + margin || ay + margin > by + bh {
        acc.0 = 0.0;
    } else if ax + 0.5 * aw < bx + 0.5 * bw {
        // a left of b: push further left.
        acc.0 = (acc.0 + bx - (ax + aw)).min(0.0);
    } else {
        acc.0 = (acc.0 + (bx + bw) - ax).max(0.0);
    }

    // No contact because of the x offset (+tolerance).
    if ax + aw < bx + margin || ax + margin > bx + bw {
        acc.1 = 0.0;
    } else if ay + 0.5 * ah < by + 0.5 * bh {
        // a below b: push further down.
        acc.1 = (acc.1 + by - (ay + ah)).min(0.0);
    } else {
        acc.1 = (acc.1 + (by + bh) - ay).max(0.0);
    }
}

/// One-shot push force between two rects (fresh accumulator).
pub(crate) fn push_force(a: &Rect, b: &Rect, margin: f32) -> (f32, f32) {
    let mut force = (0.0, 0.0);
    accumulate_push(&mut force, a, b, margin);
    force
}
