use pathviz_core::{Point, Range};

/// One finalized node of a search's visitation trace: its position and its
/// minimal distance from the start at the moment of finalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisitedNode {
    pub pos: Point,
    pub dist: i32,
}

/// How a search run ended. Callers must match on this explicitly: an
/// unreachable target is a normal outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminal {
    /// The target was finalized; it is the last element of the trace.
    Found(Point),
    /// The target cannot be reached. The trace holds every reachable node.
    Unreachable,
}

impl Terminal {
    /// Whether the target was reached.
    #[inline]
    pub fn is_found(self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Sentinel distance meaning "not reached by the last run".
pub const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// Internal node state
// ---------------------------------------------------------------------------

/// Per-cell search state, lazily reset via the generation counter.
#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) dist: i32,
    /// Back-reference to the predecessor's flat index; `usize::MAX` = none.
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    /// True while the node sits on the frontier; cleared on finalization.
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            dist: UNREACHABLE,
            parent: usize::MAX,
            // Sentinel: run generations count up from 1, so an untouched
            // node never matches the current run.
            generation: u32::MAX,
            open: false,
        }
    }
}

/// Heap entry ordered for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct HeapEntry {
    pub(crate) idx: usize,
    pub(crate) dist: i32,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest distance first.
        // Equal distances fall back to the smallest flat index; indices are
        // row-major, which fixes the tie-break deterministically.
        other
            .dist
            .cmp(&self.dist)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// SearchRange
// ---------------------------------------------------------------------------

/// The arena owning all per-run search state for a grid rectangle.
///
/// A `SearchRange` is reused across runs: each run bumps a generation
/// counter that lazily invalidates every node, so repeated searches incur
/// no allocations after warm-up. The board's wall layout is read-only
/// input; distances, visitation and back-references live here.
pub struct SearchRange {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) visited: Vec<VisitedNode>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl SearchRange {
    /// Create a new `SearchRange` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        Self {
            rng,
            width: rng.width().max(0) as usize,
            nodes: vec![Node::default(); rng.len()],
            generation: 0,
            visited: Vec::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Replace the underlying rectangle, reallocating only when the new
    /// size exceeds the existing capacity. A shrink or equal-size swap
    /// just bumps the generation so stale entries are ignored.
    pub fn set_range(&mut self, rng: Range) {
        let new_len = rng.len();
        let capacity = self.nodes.len();
        self.rng = rng;
        self.width = rng.width().max(0) as usize;
        self.visited.clear();

        if new_len <= capacity {
            self.generation = self.generation.wrapping_add(1);
            return;
        }
        self.nodes.clear();
        self.nodes.resize(new_len, Node::default());
        self.generation = 0;
    }

    /// The grid rectangle being searched.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// The visitation trace of the last run, in finalization order.
    #[inline]
    pub fn visited(&self) -> &[VisitedNode] {
        &self.visited
    }

    /// The finalized distance from the last run's start to `p`.
    ///
    /// Returns [`UNREACHABLE`] if `p` is outside the range or was not
    /// finalized by the last run.
    pub fn dist_at(&self, p: Point) -> i32 {
        match self.idx(p) {
            Some(i) if self.finalized(i) => self.nodes[i].dist,
            _ => UNREACHABLE,
        }
    }

    /// The back-reference recorded for `p` by the last run: the node from
    /// which `p`'s shortest known distance was last improved. `None` for
    /// the start, for untouched nodes and outside the range.
    pub fn previous(&self, p: Point) -> Option<Point> {
        let i = self.idx(p)?;
        let n = &self.nodes[i];
        if n.generation != self.generation || n.parent == usize::MAX {
            return None;
        }
        Some(self.point(n.parent))
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat (row-major) index. `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }

    /// Whether the node at flat index `i` was finalized by the last run.
    #[inline]
    pub(crate) fn finalized(&self, i: usize) -> bool {
        let n = &self.nodes[i];
        n.generation == self.generation && !n.open
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn visited_node_round_trip() {
        let node = VisitedNode {
            pos: Point::new(3, 7),
            dist: 42,
        };
        let json = serde_json::to_string(&node).unwrap();
        let back: VisitedNode = serde_json::from_str(&json).unwrap();
        assert_eq!(node, back);
    }
}
