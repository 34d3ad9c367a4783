//! **pathviz-core** — grid model and geometry for the pathviz engine.
//!
//! This crate provides the foundational types shared across the *pathviz*
//! workspace: integer geometry primitives and the [`Board`] value type
//! holding the wall/endpoint layout a shortest-path search runs over.

pub mod board;
pub mod error;
pub mod geom;

pub use board::Board;
pub use error::BoardError;
pub use geom::{Point, Range};
