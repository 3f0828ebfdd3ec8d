//! ASCII demo: run both search algorithms over a couple of boards and print
//! what a front end would animate — the visitation order and the final path.

use std::collections::HashSet;

use gridpath_core::{Board, BoardConfig, CellKind, Coord};
use gridpath_search::PathGrid;

const MAZE: &str = "\
s....#........
.###.#.######.
...#.#.#....#.
.#.#.#.#.##.#.
.#.#...#.#..#.
.#.#####.#.##.
.#.......#...f";

fn render(board: &Board, visited: &[Coord], path: &[Coord]) -> String {
    let on_path: HashSet<Coord> = path.iter().copied().collect();
    let seen: HashSet<Coord> = visited.iter().copied().collect();
    let mut out = String::new();
    for (c, kind) in board.iter() {
        let ch = match kind {
            CellKind::Start | CellKind::Finish => kind.rune(),
            CellKind::Wall => '#',
            CellKind::Open if on_path.contains(&c) => '*',
            CellKind::Open if seen.contains(&c) => '+',
            CellKind::Open => '.',
        };
        out.push(ch);
        if c.col + 1 == board.cols() {
            out.push('\n');
        }
    }
    out
}

fn show(title: &str, board: &Board, pg: &mut PathGrid) {
    for name in ["dijkstra", "astar"] {
        let visited = match name {
            "dijkstra" => pg.dijkstra(board).to_vec(),
            _ => pg.astar(board).to_vec(),
        };
        let path = pg.path_to(board.finish());
        let reached = pg.reached(board.finish());
        println!("== {title} / {name} ==");
        println!("{}", render(board, &visited, &path));
        if reached {
            println!(
                "visited {} cells, path {} steps\n",
                visited.len(),
                path.len() - 1
            );
        } else {
            println!("visited {} cells, no path\n", visited.len());
        }
    }
}

fn main() {
    let maze = Board::parse(MAZE).expect("maze template");
    let mut pg = PathGrid::new(maze.rows(), maze.cols());
    show("maze", &maze, &mut pg);

    // The default visualizer grid, with a wall slab between the endpoints
    // the way a user would paint one.
    let mut board = Board::new(BoardConfig::default());
    for row in 4..18 {
        board.set_wall(Coord::new(row, 25), true);
    }
    pg.resize(board.rows(), board.cols());
    show("default grid", &board, &mut pg);
}
