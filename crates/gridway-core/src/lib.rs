//! **gridway-core**: geometry primitives and the obstacle grid.
//!
//! This crate provides the substrate the gridway pathfinding crates build
//! on: integer [`Point`]s, rectangular [`Range`]s, and a read-only-during-
//! search wall map ([`Grid`]).

pub mod geom;
pub mod grid;

pub use geom::{Point, Range};
pub use grid::{Grid, ParseError};
