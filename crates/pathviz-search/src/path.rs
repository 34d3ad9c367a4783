use pathviz_core::Point;

use crate::SearchRange;

impl SearchRange {
    /// Reconstruct the shortest path found by the last run, ordered from
    /// the start to `target` (both inclusive).
    ///
    /// Follows back-references from `target` until the node with no
    /// back-reference (the start), collecting in reverse and inverting.
    /// Returns an empty path if `target` was not finalized by the last
    /// run: the normal unreachable outcome, which callers must handle
    /// rather than treat as a success.
    pub fn path_to(&self, target: Point) -> Vec<Point> {
        let Some(ti) = self.idx(target) else {
            return Vec::new();
        };
        if !self.finalized(ti) {
            return Vec::new();
        }

        let mut path = Vec::new();
        let mut ci = ti;
        loop {
            path.push(self.point(ci));
            let parent = self.nodes[ci].parent;
            if parent == usize::MAX {
                break;
            }
            ci = parent;
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use pathviz_core::{Board, Range};

    use super::*;
    use crate::Terminal;

    #[test]
    fn path_runs_start_to_target() {
        let b = Board::new(4, 3, Point::new(0, 0), Point::new(3, 2)).unwrap();
        let mut sr = SearchRange::new(b.bounds());
        let terminal = sr.dijkstra(&b, b.start(), b.target());
        assert_eq!(terminal, Terminal::Found(b.target()));

        let path = sr.path_to(b.target());
        assert_eq!(path.first(), Some(&b.start()));
        assert_eq!(path.last(), Some(&b.target()));
        // Start is the only path node without a back-reference.
        assert_eq!(sr.previous(path[0]), None);
        for pair in path.windows(2) {
            assert_eq!(sr.previous(pair[1]), Some(pair[0]));
        }
    }

    #[test]
    fn unfinalized_target_yields_empty_path() {
        let b = Board::new(4, 3, Point::new(0, 0), Point::new(3, 2)).unwrap();
        let mut sr = SearchRange::new(b.bounds());

        // No run yet.
        assert!(sr.path_to(b.target()).is_empty());

        // Run toward a nearer target: cells beyond it stay unfinalized.
        let near = Point::new(1, 0);
        sr.dijkstra(&b, b.start(), near);
        assert_eq!(sr.path_to(near), vec![b.start(), near]);
        assert!(sr.path_to(Point::new(3, 2)).is_empty());
    }

    #[test]
    fn out_of_range_target_yields_empty_path() {
        let sr = SearchRange::new(Range::new(0, 0, 4, 3));
        assert!(sr.path_to(Point::new(10, 10)).is_empty());
    }
}
