//! X/Z footprints of greenhouses.
//!
//! A footprint is the set of block columns a greenhouse covers, stored as a
//! union of inclusive axis-aligned rectangles. Two footprints intersect only
//! when they share at least one block cell; rectangles that sit edge to edge
//! without sharing a cell do not intersect.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// BlockRect
// ---------------------------------------------------------------------------

/// An inclusive rectangle of block cells on the X/Z plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockRect {
    pub min_x: i32,
    pub min_z: i32,
    pub max_x: i32,
    pub max_z: i32,
}

impl BlockRect {
    /// Build a rectangle from two opposite corner cells, given in any order.
    pub fn from_corners(a: (i32, i32), b: (i32, i32)) -> Self {
        Self {
            min_x: a.0.min(b.0),
            min_z: a.1.min(b.1),
            max_x: a.0.max(b.0),
            max_z: a.1.max(b.1),
        }
    }

    /// Square of cells centered on `(cx, cz)` reaching `range` cells out in
    /// every direction. Negative ranges are treated as zero; edges clamp to
    /// the `i32` coordinate range.
    pub fn around(cx: i32, cz: i32, range: i32) -> Self {
        let r = range.max(0);
        Self::from_corners(
            (cx.saturating_sub(r), cz.saturating_sub(r)),
            (cx.saturating_add(r), cz.saturating_add(r)),
        )
    }

    pub fn contains(&self, x: i32, z: i32) -> bool {
        x >= self.min_x && x <= self.max_x && z >= self.min_z && z <= self.max_z
    }

    /// True if both rectangles cover at least one common cell.
    pub fn intersects(&self, other: &BlockRect) -> bool {
        self.min_x <= other.max_x
            && other.min_x <= self.max_x
            && self.min_z <= other.max_z
            && other.min_z <= self.max_z
    }

    /// Smallest rectangle covering both.
    pub fn union(&self, other: &BlockRect) -> BlockRect {
        BlockRect {
            min_x: self.min_x.min(other.min_x),
            min_z: self.min_z.min(other.min_z),
            max_x: self.max_x.max(other.max_x),
            max_z: self.max_z.max(other.max_z),
        }
    }

    pub fn width(&self) -> i64 {
        i64::from(self.max_x) - i64::from(self.min_x) + 1
    }

    pub fn depth(&self) -> i64 {
        i64::from(self.max_z) - i64::from(self.min_z) + 1
    }

    /// Number of cells covered. Saturates for rectangles spanning most of the
    /// `i32` plane.
    pub fn area(&self) -> i64 {
        self.width().saturating_mul(self.depth())
    }
}

// ---------------------------------------------------------------------------
// Footprint
// ---------------------------------------------------------------------------

/// The block columns covered by a greenhouse.
///
/// An empty footprint contains no cell and intersects nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footprint {
    rects: Vec<BlockRect>,
}

impl Footprint {
    /// Single-rectangle footprint spanning the two corner cells (any order).
    pub fn rect(x0: i32, z0: i32, x1: i32, z1: i32) -> Self {
        Self {
            rects: vec![BlockRect::from_corners((x0, z0), (x1, z1))],
        }
    }

    pub fn from_rects(rects: impl IntoIterator<Item = BlockRect>) -> Self {
        Self {
            rects: rects.into_iter().collect(),
        }
    }

    /// Builder form of [`Footprint::add_rect`].
    pub fn with_rect(mut self, rect: BlockRect) -> Self {
        self.add_rect(rect);
        self
    }

    pub fn add_rect(&mut self, rect: BlockRect) {
        self.rects.push(rect);
    }

    pub fn rects(&self) -> &[BlockRect] {
        &self.rects
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Bounding rectangle of all parts, or `None` for an empty footprint.
    pub fn bounds(&self) -> Option<BlockRect> {
        let (first, rest) = self.rects.split_first()?;
        Some(rest.iter().fold(*first, |acc, r| acc.union(r)))
    }

    /// Whether block column `(x, z)` is covered.
    pub fn contains(&self, x: i32, z: i32) -> bool {
        self.rects.iter().any(|r| r.contains(x, z))
    }

    /// Whether the two footprints share at least one block column.
    pub fn intersects(&self, other: &Footprint) -> bool {
        let (Some(a), Some(b)) = (self.bounds(), other.bounds()) else {
            return false;
        };
        if !a.intersects(&b) {
            return false;
        }
        self.rects
            .iter()
            .any(|r| other.rects.iter().any(|o| r.intersects(o)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_is_inclusive() {
        let fp = Footprint::rect(0, 0, 9, 9);
        assert!(fp.contains(0, 0));
        assert!(fp.contains(9, 9));
        assert!(fp.contains(5, 3));
        assert!(!fp.contains(10, 5));
        assert!(!fp.contains(5, -1));
    }

    #[test]
    fn test_rect_corners_any_order() {
        assert_eq!(Footprint::rect(9, 9, 0, 0), Footprint::rect(0, 0, 9, 9));
        assert_eq!(Footprint::rect(0, 9, 9, 0), Footprint::rect(9, 0, 0, 9));
    }

    #[test]
    fn test_overlapping_rects_intersect() {
        let a = Footprint::rect(0, 0, 9, 9);
        let b = Footprint::rect(5, 5, 15, 15);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_shared_edge_cell_intersects() {
        // Inclusive bounds: both cover column x = 9.
        let a = Footprint::rect(0, 0, 9, 9);
        let b = Footprint::rect(9, 0, 20, 9);
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_adjacent_rects_do_not_intersect() {
        let a = Footprint::rect(0, 0, 9, 9);
        let b = Footprint::rect(10, 0, 20, 9);
        assert!(!a.intersects(&b));
        let c = Footprint::rect(0, 10, 9, 20);
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_l_shape_bounds_overlap_but_cells_do_not() {
        // An L covering the left column and bottom row of a 10x10 square.
        let l = Footprint::from_rects([
            BlockRect::from_corners((0, 0), (1, 9)),
            BlockRect::from_corners((0, 0), (9, 1)),
        ]);
        // A block sitting in the empty corner of the L.
        let inner = Footprint::rect(4, 4, 8, 8);
        assert_eq!(l.bounds(), Some(BlockRect::from_corners((0, 0), (9, 9))));
        assert!(!l.intersects(&inner));
        assert!(l.contains(0, 8));
        assert!(l.contains(8, 0));
        assert!(!l.contains(5, 5));

        let touching = Footprint::rect(1, 5, 3, 6);
        assert!(l.intersects(&touching));
    }

    #[test]
    fn test_empty_footprint() {
        let empty = Footprint::default();
        assert!(empty.is_empty());
        assert!(empty.bounds().is_none());
        assert!(!empty.contains(0, 0));
        assert!(!empty.intersects(&Footprint::rect(-100, -100, 100, 100)));
        assert!(!Footprint::rect(-100, -100, 100, 100).intersects(&empty));
    }

    #[test]
    fn test_block_rect_around_and_area() {
        let r = BlockRect::around(0, 0, 2);
        assert_eq!(r.width(), 5);
        assert_eq!(r.depth(), 5);
        assert_eq!(r.area(), 25);
        assert_eq!(BlockRect::around(3, 3, -4).area(), 1);
    }

    #[test]
    fn test_around_clamps_at_coordinate_limits() {
        let r = BlockRect::around(1, 0, i32::MAX);
        assert_eq!(r.min_x, i32::MIN + 2);
        assert_eq!(r.max_x, i32::MAX);
        assert_eq!(r.min_z, -i32::MAX);
        assert_eq!(r.max_z, i32::MAX);
        assert!(r.contains(i32::MAX, 0));
        assert!(r.contains(-1_000_000, 1_000_000));

        let edge = BlockRect::around(i32::MIN, i32::MAX, 10);
        assert_eq!(edge.min_x, i32::MIN);
        assert_eq!(edge.max_z, i32::MAX);
        assert!(edge.contains(i32::MIN + 10, i32::MAX - 10));
    }

    #[test]
    fn test_full_span_dimensions() {
        let row = BlockRect::from_corners((i32::MIN, 0), (i32::MAX, 0));
        assert_eq!(row.width(), 1_i64 << 32);
        assert_eq!(row.depth(), 1);
        assert_eq!(row.area(), 1_i64 << 32);

        let plane = BlockRect::from_corners((i32::MIN, i32::MIN), (i32::MAX, i32::MAX));
        assert_eq!(plane.area(), i64::MAX);
    }

    #[test]
    fn test_with_rect_builder() {
        let fp = Footprint::rect(0, 0, 1, 1)
            .with_rect(BlockRect::from_corners((20, 20), (21, 21)));
        assert_eq!(fp.rects().len(), 2);
        assert!(fp.contains(21, 20));
        assert!(!fp.contains(10, 10));
    }
}
