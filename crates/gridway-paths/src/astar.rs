use std::fmt;

use gridway_core::{Grid, Point, Range};

use crate::AStar;
use crate::distance::manhattan;

/// Error returned by [`AStar::find_path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// A start or goal coordinate lies outside the grid.
    OutOfBounds { pos: Point, bounds: Range },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { pos, bounds } => {
                write!(f, "position {pos} outside grid bounds {bounds}")
            }
        }
    }
}

impl std::error::Error for SearchError {}

/// Expansion order: up, down, left, right.
const DIRS: [Point; 4] = [
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(-1, 0),
    Point::new(1, 0),
];

impl AStar {
    /// Compute the shortest path from `from` to `to` over `grid`.
    ///
    /// The result excludes `from` and includes `to`, in walk order. An
    /// empty vector means no path exists (walls seal the goal off, an
    /// endpoint is itself a wall, or `from == to`); that is a valid
    /// outcome, not an error. The only error is an endpoint outside the
    /// grid.
    ///
    /// When a path is returned it has the fewest possible steps: the
    /// Manhattan heuristic never overestimates under 4-directional
    /// unit-cost movement, and improved routes re-enter the frontier while
    /// their stale entries are skipped on extraction.
    ///
    /// If the engine was sized for a different rectangle it adopts the
    /// grid's bounds first.
    pub fn find_path(
        &mut self,
        grid: &Grid,
        from: Point,
        to: Point,
    ) -> Result<Vec<Point>, SearchError> {
        let bounds = grid.bounds();
        if self.rng != bounds {
            self.set_range(bounds);
        }

        let start_idx = self.idx(from).ok_or(SearchError::OutOfBounds { pos: from, bounds })?;
        let goal_idx = self.idx(to).ok_or(SearchError::OutOfBounds { pos: to, bounds })?;

        // Walls are never enqueued, so a wall endpoint can have no path.
        if grid.is_wall(from) || grid.is_wall(to) {
            return Ok(Vec::new());
        }
        // The path excludes its start, so searching for it is pointless.
        if start_idx == goal_idx {
            return Ok(Vec::new());
        }

        // Bump generation to lazily invalidate all nodes.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        // Initialise the start node.
        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.f = manhattan(from, to);
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut frontier = std::mem::take(&mut self.frontier);
        frontier.clear();
        frontier.insert(start_idx, self.nodes[start_idx].f);

        let mut expanded: u32 = 0;

        let found = loop {
            let Some((ci, _)) = frontier.extract_min() else {
                break false;
            };

            // Skip stale entries.
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }

            if ci == goal_idx {
                break true;
            }

            // Finalize: the node joins the closed set.
            self.nodes[ci].open = false;
            expanded += 1;
            let current_g = self.nodes[ci].g;
            let current_point = self.point(ci);

            for d in DIRS {
                let np = current_point + d;
                // Covers both walls and positions outside the grid.
                if grid.is_wall(np) {
                    continue;
                }
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative_g = current_g + 1;

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    // Already discovered; only a strict improvement
                    // relaxes it. Finalized nodes never improve here, so
                    // this test also skips the closed set.
                    if tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                }

                n.g = tentative_g;
                n.f = tentative_g + manhattan(np, to);
                n.parent = ci;
                n.open = true;

                frontier.insert(ni, n.f);
            }
        };

        self.frontier = frontier;

        if !found {
            log::debug!("astar {from} -> {to}: no path ({expanded} nodes expanded)");
            return Ok(Vec::new());
        }

        // Reconstruct: follow parents from the goal back to (but excluding)
        // the start, then reverse into walk order.
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != start_idx {
            path.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();

        log::debug!(
            "astar {from} -> {to}: {} steps ({expanded} nodes expanded)",
            path.len()
        );
        Ok(path)
    }
}
