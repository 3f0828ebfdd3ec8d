//! **gridpath-core** — static grid model for the gridpath engine.
//!
//! This crate provides the types shared between the search engine and any
//! front end: the [`Coord`] cell identifier, the [`Board`] grid (walls plus
//! one start/finish pair), the [`CellKind`] classification, and the
//! [`BoardConfig`] construction parameters.
//!
//! Everything here is *static* state: a board carries no trace of any search
//! that ran over it. Per-run state (distances, back-pointers, visitation
//! flags) lives in `gridpath-search`, so the same board can be searched,
//! edited, and searched again without being rebuilt.

pub mod board;
pub mod config;
pub mod coord;

pub use board::{Board, BoardError, CellKind};
pub use config::BoardConfig;
pub use coord::Coord;
