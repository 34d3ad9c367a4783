//! The [`Board`] type — the wall and endpoint layout a search runs over.
//!
//! A `Board` is a value: every mutator returns a *new* logical board and
//! leaves the receiver untouched. The wall bitmap lives in a shared `Rc`
//! buffer, so cloning is cheap and a mutation copies the buffer only when
//! it is actually shared (copy-on-write). An in-flight search therefore
//! keeps a stable snapshot no matter what the editor does afterwards.
//!
//! Search state (distances, visitation, back-references) does not live
//! here; it belongs to the engine's arena in `pathviz-search`.

use std::fmt;
use std::rc::Rc;

use crate::error::BoardError;
use crate::geom::{Point, Range};

/// A rectangular grid of open and wall cells with one start and one target.
///
/// Invariants, enforced by the constructor and mutators:
/// - dimensions are positive and fixed for the board's lifetime;
/// - `start` and `target` are in bounds and distinct;
/// - `start` and `target` are never walls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    walls: Rc<Vec<bool>>,
    bounds: Range,
    start: Point,
    target: Point,
}

impl Board {
    /// Create a board of the given dimensions with no walls.
    ///
    /// Fails with [`BoardError::InvalidDimensions`] if either dimension is
    /// not positive, and with [`BoardError::InvalidEndpoint`] if `start` or
    /// `target` lies outside the grid or the two coincide.
    pub fn new(width: i32, height: i32, start: Point, target: Point) -> Result<Self, BoardError> {
        if width <= 0 || height <= 0 {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        let bounds = Range::new(0, 0, width, height);
        if !bounds.contains(start) {
            return Err(BoardError::InvalidEndpoint(start));
        }
        if !bounds.contains(target) || target == start {
            return Err(BoardError::InvalidEndpoint(target));
        }
        Ok(Self {
            walls: Rc::new(vec![false; bounds.len()]),
            bounds,
            start,
            target,
        })
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some((p.y as usize) * (self.bounds.width() as usize) + (p.x as usize))
    }

    /// The bounding range of the board.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Size of the board as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    /// Width (number of columns).
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height (number of rows).
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `p` is inside the board.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// The start cell.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The target cell.
    #[inline]
    pub fn target(&self) -> Point {
        self.target
    }

    /// Whether `p` is a wall. Out-of-bounds positions are not walls.
    #[inline]
    pub fn is_wall(&self, p: Point) -> bool {
        self.index(p).is_some_and(|i| self.walls[i])
    }

    /// Whether `p` is inside the board and not a wall.
    #[inline]
    pub fn passable(&self, p: Point) -> bool {
        self.index(p).is_some_and(|i| !self.walls[i])
    }

    /// Number of wall cells on the board.
    pub fn wall_count(&self) -> usize {
        self.walls.iter().filter(|&&w| w).count()
    }

    /// Return a board identical except the wall bit at `p` is flipped.
    ///
    /// Toggling the start or target cell is a no-op: the returned board
    /// equals the receiver (endpoints are immune to walls). Fails with
    /// [`BoardError::OutOfBounds`] if `p` is outside the grid; the receiver
    /// is unchanged in every case.
    pub fn toggle_wall(&self, p: Point) -> Result<Self, BoardError> {
        let Some(i) = self.index(p) else {
            return Err(BoardError::OutOfBounds(p));
        };
        if p == self.start || p == self.target {
            return Ok(self.clone());
        }
        let mut next = self.clone();
        let walls = Rc::make_mut(&mut next.walls);
        walls[i] = !walls[i];
        Ok(next)
    }

    /// Return a board identical except every wall is removed.
    pub fn clear_walls(&self) -> Self {
        Self {
            walls: Rc::new(vec![false; self.bounds.len()]),
            ..self.clone()
        }
    }
}

impl fmt::Display for Board {
    /// ASCII rendering, one row per line: `#` wall, `.` open, `@` start,
    /// `>` target.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.bounds.height() {
            for x in 0..self.bounds.width() {
                let p = Point::new(x, y);
                let ch = if p == self.start {
                    '@'
                } else if p == self.target {
                    '>'
                } else if self.is_wall(p) {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_5x4() -> Board {
        Board::new(5, 4, Point::new(0, 0), Point::new(4, 3)).unwrap()
    }

    #[test]
    fn new_rejects_bad_dimensions() {
        let err = Board::new(0, 4, Point::ZERO, Point::new(1, 1)).unwrap_err();
        assert_eq!(
            err,
            BoardError::InvalidDimensions {
                width: 0,
                height: 4
            }
        );
        assert!(matches!(
            Board::new(5, -1, Point::ZERO, Point::new(1, 1)),
            Err(BoardError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn new_rejects_bad_endpoints() {
        // Start out of bounds.
        assert_eq!(
            Board::new(5, 4, Point::new(5, 0), Point::new(1, 1)),
            Err(BoardError::InvalidEndpoint(Point::new(5, 0)))
        );
        // Target out of bounds.
        assert_eq!(
            Board::new(5, 4, Point::ZERO, Point::new(0, 4)),
            Err(BoardError::InvalidEndpoint(Point::new(0, 4)))
        );
        // Coinciding endpoints.
        assert_eq!(
            Board::new(5, 4, Point::new(2, 2), Point::new(2, 2)),
            Err(BoardError::InvalidEndpoint(Point::new(2, 2)))
        );
    }

    #[test]
    fn fresh_board_has_no_walls() {
        let b = board_5x4();
        assert_eq!(b.wall_count(), 0);
        for p in b.bounds() {
            assert!(b.passable(p));
        }
    }

    #[test]
    fn toggle_wall_flips_and_preserves_receiver() {
        let b = board_5x4();
        let p = Point::new(2, 1);

        let walled = b.toggle_wall(p).unwrap();
        assert!(walled.is_wall(p));
        assert!(!walled.passable(p));
        assert_eq!(walled.wall_count(), 1);
        // Snapshot semantics: the original is untouched.
        assert!(!b.is_wall(p));
        assert_eq!(b.wall_count(), 0);

        // Flipping again removes the wall.
        let cleared = walled.toggle_wall(p).unwrap();
        assert!(!cleared.is_wall(p));
        assert!(walled.is_wall(p));
    }

    #[test]
    fn toggle_wall_on_endpoints_is_noop() {
        let b = board_5x4();
        let on_start = b.toggle_wall(b.start()).unwrap();
        assert!(!on_start.is_wall(b.start()));
        assert_eq!(on_start, b);
        let on_target = b.toggle_wall(b.target()).unwrap();
        assert!(!on_target.is_wall(b.target()));
        assert_eq!(on_target, b);
    }

    #[test]
    fn toggle_wall_out_of_bounds_fails_cleanly() {
        let b = board_5x4();
        let before = b.wall_count();
        assert_eq!(
            b.toggle_wall(Point::new(-1, 0)),
            Err(BoardError::OutOfBounds(Point::new(-1, 0)))
        );
        assert_eq!(
            b.toggle_wall(Point::new(5, 3)),
            Err(BoardError::OutOfBounds(Point::new(5, 3)))
        );
        assert_eq!(b.wall_count(), before);
    }

    #[test]
    fn clear_walls_resets_layout() {
        let b = board_5x4()
            .toggle_wall(Point::new(1, 1))
            .unwrap()
            .toggle_wall(Point::new(2, 2))
            .unwrap();
        assert_eq!(b.wall_count(), 2);
        let cleared = b.clear_walls();
        assert_eq!(cleared.wall_count(), 0);
        assert_eq!(cleared.start(), b.start());
        assert_eq!(cleared.target(), b.target());
        // The walled board still holds its snapshot.
        assert_eq!(b.wall_count(), 2);
    }

    #[test]
    fn out_of_bounds_queries_are_benign() {
        let b = board_5x4();
        assert!(!b.is_wall(Point::new(-1, -1)));
        assert!(!b.passable(Point::new(9, 9)));
        assert!(!b.contains(Point::new(5, 0)));
    }

    #[test]
    fn display_renders_runes() {
        let b = Board::new(3, 2, Point::new(0, 0), Point::new(2, 1))
            .unwrap()
            .toggle_wall(Point::new(1, 0))
            .unwrap();
        assert_eq!(format!("{}", b), "@#.\n..>\n");
    }
}
