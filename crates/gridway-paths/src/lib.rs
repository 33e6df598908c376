//! A* shortest-path search over [`gridway_core::Grid`] obstacle grids.
//!
//! Movement is 4-directional with unit edge cost; the heuristic is the
//! Manhattan distance, which is admissible and consistent for that metric,
//! so returned paths always have the fewest possible steps.
//!
//! - [`AStar`]: the search engine. It owns all mutable per-search state
//!   (node arena, frontier), so a shared read-only grid can serve many
//!   engines at once. Internal caches are reused across queries.
//! - [`Frontier`]: the priority structure driving expansion order.
//! - [`manhattan`]: the heuristic.
//!
//! ```
//! use gridway_core::{Grid, Point};
//! use gridway_paths::AStar;
//!
//! let grid = Grid::from_text("...\n.#.\n...").unwrap();
//! let mut astar = AStar::new(grid.bounds());
//! let path = astar.find_path(&grid, Point::new(0, 0), Point::new(2, 2)).unwrap();
//! assert_eq!(path.len(), 4);
//! ```

mod astar;
mod distance;
mod engine;
mod frontier;

pub use astar::SearchError;
pub use distance::manhattan;
pub use engine::AStar;
pub use frontier::Frontier;
