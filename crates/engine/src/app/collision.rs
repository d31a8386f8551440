/// Axis-aligned box in shared pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxPx {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl BoxPx {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Half-open containment on both max edges, matching click hit-testing.
    pub fn contains_point(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

/// Elimination-style overlap test used for culling, lifecycle bounds checks
/// and match-zone scoring. The first box's right edge is compared inclusively
/// (`x + width - 1`) while the other three comparisons are half-open, so the
/// relation is not symmetric in its arguments; the asymmetry is load-bearing
/// and must not be "corrected". Point queries go through
/// [`BoxPx::contains_point`] instead.
pub fn boxes_overlap(a: BoxPx, b: BoxPx) -> bool {
    if a.x + a.width - 1 <= b.x {
        return false;
    }
    if a.x >= b.x + b.width {
        return false;
    }
    if a.y + a.height <= b.y {
        return false;
    }
    if a.y >= b.y + b.height {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_overlaps_itself() {
        let region = BoxPx::new(3, -2, 12, 7);
        assert!(boxes_overlap(region, region));
    }

    #[test]
    fn disjoint_boxes_do_not_overlap() {
        let a = BoxPx::new(0, 0, 10, 10);
        let b = BoxPx::new(50, 50, 10, 10);
        assert!(!boxes_overlap(a, b));
        assert!(!boxes_overlap(b, a));
    }

    #[test]
    fn right_edge_elimination_is_asymmetric() {
        // A's last pixel column is x = 9, which does not pass B's left edge,
        // so A-vs-B is eliminated even though the boxes share that column.
        // B-vs-A survives every elimination check.
        let a = BoxPx::new(0, 0, 10, 10);
        let b = BoxPx::new(9, 0, 10, 10);
        assert!(!boxes_overlap(a, b));
        assert!(boxes_overlap(b, a));
    }

    #[test]
    fn abutting_boxes_do_not_overlap_either_way() {
        let a = BoxPx::new(0, 0, 10, 10);
        let b = BoxPx::new(10, 0, 10, 10);
        assert!(!boxes_overlap(a, b));
        assert!(!boxes_overlap(b, a));
    }

    #[test]
    fn vertical_edges_are_half_open() {
        let a = BoxPx::new(0, 0, 10, 10);
        let below = BoxPx::new(0, 10, 10, 10);
        let above = BoxPx::new(0, -10, 10, 10);
        assert!(!boxes_overlap(a, below));
        assert!(!boxes_overlap(a, above));
    }

    #[test]
    fn clearly_overlapping_and_separated_pairs_stay_symmetric() {
        // Away from the inclusive-right-edge boundary the asymmetry is
        // unobservable.
        let cases = [
            (BoxPx::new(0, 0, 10, 10), BoxPx::new(10, 0, 10, 10)),
            (BoxPx::new(-4, -4, 8, 8), BoxPx::new(0, 0, 8, 8)),
            (BoxPx::new(2, 2, 3, 3), BoxPx::new(0, 0, 20, 20)),
            (BoxPx::new(0, 0, 10, 10), BoxPx::new(50, 50, 10, 10)),
        ];
        for (a, b) in cases {
            assert_eq!(boxes_overlap(a, b), boxes_overlap(b, a), "{a:?} vs {b:?}");
        }
    }

    #[test]
    fn one_pixel_boxes_are_eliminated_at_their_own_left_edge() {
        // A 1x1 box whose column does not pass the other box's left edge
        // never overlaps, its own corner included. Point queries must use
        // contains_point, never a degenerate box.
        let bounds = BoxPx::new(10, 10, 6, 6);
        let corner = BoxPx::new(10, 10, 1, 1);
        assert!(!boxes_overlap(corner, bounds));
        assert!(!boxes_overlap(corner, corner));
        assert!(boxes_overlap(BoxPx::new(14, 14, 1, 1), bounds));
        assert!(bounds.contains_point(10, 10));
    }

    #[test]
    fn contains_point_is_half_open_on_max_edges() {
        let bounds = BoxPx::new(0, 0, 4, 4);
        assert!(bounds.contains_point(0, 0));
        assert!(bounds.contains_point(3, 3));
        assert!(!bounds.contains_point(4, 3));
        assert!(!bounds.contains_point(3, 4));
    }
}
