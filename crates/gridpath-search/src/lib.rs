//! Shortest-path search over gridpath boards.
//!
//! This crate implements the search half of the engine behind a grid
//! pathfinding visualizer:
//!
//! - **Uniform-cost (Dijkstra)** search ([`PathGrid::dijkstra`])
//! - **Heuristic (A\*)** search ([`PathGrid::astar`]), guided by
//!   [`manhattan`] distance
//! - **Path reconstruction** from recorded back-pointers
//!   ([`PathGrid::path_to`])
//!
//! Both searches run over an immutable [`Board`](gridpath_core::Board) and
//! keep all per-run state in a [`PathGrid`], which owns and reuses its
//! internal buffers so that repeated runs over the same board need no
//! rebuilding. Outputs are two ordered sequences: the visitation order (the
//! cells the search finalized, in order) and the reconstructed path. An
//! unreachable finish is a normal outcome, visible in the shape of those
//! sequences, never an error.
//!
//! Runs are deterministic: for a fixed board, repeated runs of either
//! algorithm produce identical visitation orders and paths. Ties in the
//! open set resolve by discovery order, with neighbors discovered in the
//! fixed priority up, down, left, right.
//!
//! Searches are synchronous and run to completion; a `PathGrid` serves one
//! search at a time (`&mut self`), and the board cannot change under a
//! running search (`&Board` for the whole call).

mod astar;
mod dijkstra;
mod heuristic;
mod pathgrid;

pub use heuristic::manhattan;
pub use pathgrid::{PathGrid, UNREACHABLE};
