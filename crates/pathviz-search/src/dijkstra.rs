use std::collections::BinaryHeap;

use pathviz_core::Point;

use crate::SearchRange;
use crate::range::{HeapEntry, Terminal, UNREACHABLE, VisitedNode};
use crate::traits::Pather;

impl SearchRange {
    /// Run Dijkstra's algorithm from `start` toward `target`.
    ///
    /// Every cell starts at infinite distance with no back-reference; the
    /// start is seeded at 0. The unvisited cell with the smallest current
    /// distance is finalized next, ties broken by row-major order, and each
    /// of its traversable neighbors is relaxed with uniform edge weight 1.
    /// The run stops as soon as the target is finalized, or when no
    /// reachable cell remains.
    ///
    /// Afterwards [`visited`](Self::visited) holds the exact finalization
    /// order (the target last, if found), and [`path_to`](Self::path_to),
    /// [`dist_at`](Self::dist_at) and [`previous`](Self::previous) answer
    /// queries against the run's state. A start outside the range degrades
    /// to [`Terminal::Unreachable`] with an empty trace.
    pub fn dijkstra<P: Pather>(&mut self, pather: &P, start: Point, target: Point) -> Terminal {
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;
        self.visited.clear();

        let Some(si) = self.idx(start) else {
            log::debug!("dijkstra: start {} outside range {}", start, self.range());
            return Terminal::Unreachable;
        };

        {
            let n = &mut self.nodes[si];
            n.dist = 0;
            n.parent = usize::MAX;
            n.generation = cur_gen;
            n.open = true;
        }

        let mut open: BinaryHeap<HeapEntry> = BinaryHeap::new();
        open.push(HeapEntry { idx: si, dist: 0 });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut found = false;

        while let Some(current) = open.pop() {
            let ci = current.idx;
            let cn = &self.nodes[ci];
            // Skip stale entries (superseded or already finalized).
            if cn.generation != cur_gen || !cn.open {
                continue;
            }
            let current_dist = cn.dist;
            self.nodes[ci].open = false;

            let cp = self.point(ci);
            self.visited.push(VisitedNode {
                pos: cp,
                dist: current_dist,
            });

            if cp == target {
                found = true;
                break;
            }

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let candidate = current_dist + 1;

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    if candidate >= n.dist {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                    n.dist = UNREACHABLE;
                }

                n.dist = candidate;
                n.parent = ci;
                n.open = true;
                open.push(HeapEntry {
                    idx: ni,
                    dist: candidate,
                });
            }
        }

        self.nbuf = nbuf;

        log::debug!(
            "dijkstra: finalized {} node(s), target {} {}",
            self.visited.len(),
            target,
            if found { "found" } else { "unreachable" },
        );

        if found {
            Terminal::Found(target)
        } else {
            Terminal::Unreachable
        }
    }
}
