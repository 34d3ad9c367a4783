//! Error types for board construction and editing.

use thiserror::Error;

use crate::geom::Point;

/// Errors returned by [`Board`](crate::Board) construction and editing.
///
/// All of these are synchronous, recoverable rejections: the board value
/// the operation was called on is left unchanged when an error is returned.
/// An unreachable target is *not* an error; that outcome is
/// `pathviz_search::Terminal::Unreachable`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("invalid board dimensions {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("endpoint {0} out of bounds or coinciding with the other endpoint")]
    InvalidEndpoint(Point),

    #[error("position {0} out of bounds")]
    OutOfBounds(Point),
}
