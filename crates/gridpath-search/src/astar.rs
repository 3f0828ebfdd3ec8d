use std::collections::BinaryHeap;

use gridpath_core::{Board, Coord};

use crate::PathGrid;
use crate::heuristic::manhattan;
use crate::pathgrid::{OpenEntry, UNREACHABLE};

impl PathGrid {
    /// Heuristic (A*) search from the board's start toward its finish,
    /// guided by the Manhattan distance to the finish.
    ///
    /// Same contract and termination rules as [`dijkstra`](Self::dijkstra):
    /// the visitation order is returned, the path is read off afterwards
    /// with [`path_to`](Self::path_to), and an unreachable finish shows up
    /// structurally rather than as an error. The open set is ordered by
    /// `dist + manhattan(cell, finish)`; because the heuristic never
    /// overestimates on a 4-connected unit-cost grid, the first extraction
    /// of the finish is optimal.
    ///
    /// A cell enters the open set when first discovered. When a shorter
    /// route to an already-open cell is found, its distance, back-pointer
    /// and score are updated and the superseded heap entry is skipped when
    /// it eventually surfaces.
    pub fn astar(&mut self, board: &Board) -> &[Coord] {
        self.begin();
        let generation = self.generation;
        let finish = board.finish();

        let Some(si) = self.idx(board.start()) else {
            return &self.visit_order;
        };
        let start_score = manhattan(board.start(), finish);
        {
            let node = self.node_mut(si);
            node.dist = 0;
            node.score = start_score;
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
            debug_assert_ne!(node.dist, UNREACHABLE);

            self.nodes[ci].open = false;
            let cc = self.coord(ci);
            if board.is_wall(cc) {
                continue;
            }

            self.nodes[ci].closed = true;
            self.visit_order.push(cc);
            if cc == finish {
                break;
            }

            let next_dist = self.nodes[ci].dist + 1;
            for nc in board.neighbors(cc) {
                let Some(ni) = self.idx(nc) else { continue };
                let score = next_dist + manhattan(nc, finish);
                let node = self.node_mut(ni);
                if node.closed || next_dist >= node.dist {
                    continue;
                }
                node.dist = next_dist;
                node.score = score;
                node.parent = ci;
                node.open = true;
                self.seq += 1;
                open.push(OpenEntry {
                    idx: ni,
                    score,
                    seq: self.seq,
                });
            }
        }

        log::debug!(
            "astar: {} cells visited, finish {} {}",
            self.visit_order.len(),
            finish,
            if self.reached(finish) { "reached" } else { "not reached" }
        );
        &self.visit_order
    }
}

#[cfg(test)]
mod tests {
    use gridpath_core::{Board, BoardConfig, Coord};

    use crate::PathGrid;

    fn run(board: &Board) -> (Vec<Coord>, Vec<Coord>) {
        let mut pg = PathGrid::new(board.rows(), board.cols());
        let visited = pg.astar(board).to_vec();
        let path = pg.path_to(board.finish());
        (visited, path)
    }

    #[test]
    fn open_grid_walks_the_shortest_path() {
        let board = Board::sized(5, 5);
        let (visited, path) = run(&board);
        assert_eq!(path.len(), 9);
        assert_eq!(path.first(), Some(&board.start()));
        assert_eq!(path.last(), Some(&board.finish()));
        assert!(visited.len() <= 25);
    }

    #[test]
    fn single_row_path_is_exact() {
        let board = Board::sized(1, 5);
        let (visited, path) = run(&board);
        let expected: Vec<Coord> = (0..5).map(|c| Coord::new(0, c)).collect();
        assert_eq!(path, expected);
        assert_eq!(visited, expected);
    }

    #[test]
    fn heuristic_prunes_the_wrong_direction() {
        // Start in the middle, finish to the right: cells left of the start
        // cost the same distance but estimate worse, so the search reaches
        // the finish without ever finalizing the far-left column.
        let board = Board::new(BoardConfig {
            rows: 1,
            cols: 9,
            start: Coord::new(0, 4),
            finish: Coord::new(0, 8),
        });
        let (visited, path) = run(&board);
        assert_eq!(path.len(), 5);
        assert!(!visited.contains(&Coord::new(0, 0)));
        assert!(!visited.contains(&Coord::new(0, 1)));
    }

    #[test]
    fn wall_row_forces_the_gap() {
        let mut board = Board::sized(5, 5);
        for col in 0..5 {
            if col != 2 {
                board.set_wall(Coord::new(2, col), true);
            }
        }
        let (visited, path) = run(&board);
        assert_eq!(path.len(), 9);
        assert!(path.contains(&Coord::new(2, 2)));
        for c in &visited {
            assert!(!board.is_wall(*c));
        }
    }

    #[test]
    fn ties_follow_neighbor_priority() {
        let board = Board::sized(3, 3);
        let (_, path) = run(&board);
        assert_eq!(
            path,
            vec![
                Coord::new(0, 0),
                Coord::new(1, 0),
                Coord::new(2, 0),
                Coord::new(2, 1),
                Coord::new(2, 2),
            ]
        );
    }

    #[test]
    fn enclosed_finish_yields_no_path() {
        let mut board = Board::sized(5, 5);
        board.set_wall(Coord::new(3, 4), true);
        board.set_wall(Coord::new(4, 3), true);
        let mut pg = PathGrid::new(5, 5);
        let visited = pg.astar(&board).to_vec();
        assert_ne!(visited.last(), Some(&board.finish()));
        assert_eq!(pg.path_to(board.finish()), vec![board.finish()]);
    }

    #[test]
    fn coincident_start_and_finish() {
        let board = Board::new(BoardConfig {
            rows: 3,
            cols: 3,
            start: Coord::new(1, 1),
            finish: Coord::new(1, 1),
        });
        let mut pg = PathGrid::new(3, 3);
        let visited = pg.astar(&board).to_vec();
        assert_eq!(visited, vec![Coord::new(1, 1)]);
        assert_eq!(pg.path_to(board.finish()), vec![Coord::new(1, 1)]);
    }

    #[test]
    fn matches_dijkstra_path_length() {
        let board = Board::parse(
            "\
s....
.###.
...#.
.#.#.
.#..f",
        )
        .unwrap();
        let mut pg = PathGrid::new(board.rows(), board.cols());
        pg.dijkstra(&board);
        let dijkstra_path = pg.path_to(board.finish());
        pg.astar(&board);
        let astar_path = pg.path_to(board.finish());
        assert_eq!(astar_path.len(), dijkstra_path.len());
        assert_eq!(astar_path.last(), Some(&board.finish()));
    }

    #[test]
    fn unique_shortest_path_is_identical_across_algorithms() {
        // A corridor maze with exactly one route.
        let board = Board::parse(
            "\
s#...
.#.#.
.#.#.
.#.#.
...#f",
        )
        .unwrap();
        let mut pg = PathGrid::new(board.rows(), board.cols());
        pg.dijkstra(&board);
        let dijkstra_path = pg.path_to(board.finish());
        pg.astar(&board);
        let astar_path = pg.path_to(board.finish());
        assert_eq!(astar_path, dijkstra_path);
    }

    #[test]
    fn reruns_are_deterministic() {
        let mut board = Board::sized(6, 6);
        board.set_wall(Coord::new(2, 2), true);
        board.set_wall(Coord::new(3, 1), true);

        let mut pg = PathGrid::new(6, 6);
        let first_visited = pg.astar(&board).to_vec();
        let first_path = pg.path_to(board.finish());
        for _ in 0..3 {
            assert_eq!(pg.astar(&board), &first_visited[..]);
            assert_eq!(pg.path_to(board.finish()), first_path);
        }
    }
}
