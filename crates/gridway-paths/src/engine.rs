use gridway_core::{Point, Range};

use crate::frontier::Frontier;

// ---------------------------------------------------------------------------
// Internal per-node search metadata
// ---------------------------------------------------------------------------

/// Per-node search state, stored in a flat arena indexed by cell id.
///
/// `parent` is an arena index; `usize::MAX` means "no predecessor" (the
/// start node). The `generation` tag lazily invalidates stale state so the
/// arena never needs a full reset between searches.
#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) f: i32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            f: 0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

// ---------------------------------------------------------------------------
// AStar
// ---------------------------------------------------------------------------

/// The A* search engine for a grid rectangle.
///
/// `AStar` owns everything mutable about a search: the node arena and the
/// [`Frontier`]. The grid itself stays read-only during a search, so one
/// grid can serve several engines (one per thread) at the same time.
/// Caches are reused across queries; repeated searches on one engine incur
/// no allocations after warm-up.
pub struct AStar {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) frontier: Frontier,
}

impl AStar {
    /// Create a new engine sized for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        Self {
            rng,
            width: rng.width().max(0) as usize,
            nodes: vec![Node::default(); rng.len()],
            generation: 0,
            frontier: Frontier::new(),
        }
    }

    /// Replace the underlying range, reallocating the arena as needed.
    ///
    /// If the new size fits within existing capacity the arena is kept and
    /// only the generation counter is bumped, so stale entries are ignored
    /// without a reallocation.
    pub fn set_range(&mut self, rng: Range) {
        let new_len = rng.len();
        let capacity = self.nodes.len();
        self.rng = rng;
        self.width = rng.width().max(0) as usize;
        self.frontier.clear();

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

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to an arena index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert an arena index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for AStar {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rng.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for AStar {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rng = Range::deserialize(deserializer)?;
        Ok(AStar::new(rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_range_smaller_preserves_capacity() {
        let mut astar = AStar::new(Range::new(0, 0, 20, 20));
        let original_cap = astar.nodes.len(); // 400

        let small = Range::new(0, 0, 5, 5);
        astar.set_range(small);
        assert_eq!(astar.range(), small);
        assert_eq!(astar.nodes.len(), original_cap); // still 400
        assert_eq!(astar.width, 5);
        // Generation bumped so stale entries are ignored.
        assert_eq!(astar.generation, 1);
    }

    #[test]
    fn set_range_larger_reallocates() {
        let mut astar = AStar::new(Range::new(0, 0, 5, 5));
        let old_cap = astar.nodes.len(); // 25

        let big = Range::new(0, 0, 20, 20);
        astar.set_range(big);
        assert_eq!(astar.range(), big);
        assert!(astar.nodes.len() > old_cap);
        assert_eq!(astar.nodes.len(), 400);
    }

    #[test]
    fn idx_point_round_trip() {
        let astar = AStar::new(Range::new(0, 0, 7, 4));
        for p in astar.range().iter() {
            let i = astar.idx(p).unwrap();
            assert_eq!(astar.point(i), p);
        }
        assert_eq!(astar.idx(Point::new(7, 0)), None);
        assert_eq!(astar.idx(Point::new(0, 4)), None);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn point_range_round_trip() {
        let rng = Range::new(1, 2, 10, 20);
        let json = serde_json::to_string(&rng).unwrap();
        let back: Range = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rng);
        assert_eq!(back.min, Point::new(1, 2));
    }

    #[test]
    fn engine_round_trips_as_its_range() {
        let rng = Range::new(0, 0, 10, 20);
        let astar = AStar::new(rng);
        let json = serde_json::to_string(&astar).unwrap();
        let back: AStar = serde_json::from_str(&json).unwrap();
        assert_eq!(back.range(), rng);
        // Caches are freshly initialized, not serialized.
        assert_eq!(back.generation, 0);
        assert_eq!(back.nodes.len(), rng.len());
        assert!(back.frontier.is_empty());
    }
}
