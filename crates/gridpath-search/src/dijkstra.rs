use std::collections::BinaryHeap;

use gridpath_core::{Board, Coord};

use crate::PathGrid;
use crate::pathgrid::{OpenEntry, UNREACHABLE};

impl PathGrid {
    /// Uniform-cost (Dijkstra) search from the board's start toward its
    /// finish. Every edge costs 1.
    ///
    /// Returns the visitation order: each cell finalized by the search, in
    /// order, ending with the finish cell when a path exists. When the
    /// finish is unreachable the order simply ends elsewhere — that, not an
    /// error, is the "no path" signal. Call [`path_to`](Self::path_to)
    /// afterwards to read the path off the recorded back-pointers.
    ///
    /// Cells are finalized in order of non-decreasing distance; ties are
    /// broken by discovery order, and a cell's undiscovered neighbors are
    /// discovered up, down, left, right. Walls are discarded when they leave
    /// the open set: they are never finalized and never expanded, even a
    /// wall placed on the start or finish cell.
    pub fn dijkstra(&mut self, board: &Board) -> &[Coord] {
        self.begin();
        let generation = self.generation;
        let finish = board.finish();

        let Some(si) = self.idx(board.start()) else {
            return &self.visit_order;
        };
        {
            let node = self.node_mut(si);
            node.dist = 0;
            node.score = 0;
            node.open = true;
        }
        self.seq += 1;
        let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
        open.push(OpenEntry {
            idx: si,
            score: self.nodes[si].score,
            seq: self.seq,
        });

        while let Some(entry) = open.pop() {
            let ci = entry.idx;
            let node = &self.nodes[ci];
            if node.generation != generation || !node.open {
                continue; // superseded entry
            }
            // Only discovered cells are ever enqueued, so a finite distance
            // is guaranteed here; an infinite one would mean the remaining
            // grid is unreachable.
            debug_assert_ne!(node.dist, UNREACHABLE);

            self.nodes[ci].open = false;
            let cc = self.coord(ci);
            if board.is_wall(cc) {
                continue;
            }

            self.nodes[ci].closed = true;
            self.visit_order.push(cc);
            if cc == finish {
                // With unit edge costs the first extraction of the finish is
                // already optimal.
                break;
            }

            let next_dist = self.nodes[ci].dist + 1;
            for nc in board.neighbors(cc) {
                let Some(ni) = self.idx(nc) else { continue };
                let node = self.node_mut(ni);
                if node.closed || next_dist >= node.dist {
                    continue;
                }
                node.dist = next_dist;
                node.score = next_dist;
                node.parent = ci;
                node.open = true;
                self.seq += 1;
                open.push(OpenEntry {
                    idx: ni,
                    score: next_dist,
                    seq: self.seq,
                });
            }
        }

        log::debug!(
            "dijkstra: {} cells visited, finish {} {}",
            self.visit_order.len(),
            finish,
            if self.reached(finish) { "reached" } else { "not reached" }
        );
        &self.visit_order
    }
}
