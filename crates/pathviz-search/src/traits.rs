use pathviz_core::{Board, Point};

/// Minimal map interface for the search engine — neighbor enumeration.
///
/// This is a map-representation seam, not an algorithm abstraction: the
/// engine runs a single algorithm over whatever implements it.
pub trait Pather {
    /// Append the traversable neighbors of `p` into `buf`. The caller
    /// clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

impl Pather for Board {
    /// In-bounds, non-wall cardinal neighbors in up/right/down/left order.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_4() {
            if self.passable(n) {
                buf.push(n);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_neighbors_filter_walls_and_bounds() {
        let b = Board::new(3, 3, Point::new(0, 0), Point::new(2, 2))
            .unwrap()
            .toggle_wall(Point::new(1, 0))
            .unwrap();

        let mut buf = Vec::new();
        // Corner cell: up and left are out of bounds, right is a wall.
        b.neighbors(Point::new(0, 0), &mut buf);
        assert_eq!(buf, vec![Point::new(0, 1)]);

        // Center cell: the wall above is skipped, rest kept in
        // right/down/left order.
        buf.clear();
        b.neighbors(Point::new(1, 1), &mut buf);
        assert_eq!(
            buf,
            vec![Point::new(2, 1), Point::new(1, 2), Point::new(0, 1)]
        );
    }
}
