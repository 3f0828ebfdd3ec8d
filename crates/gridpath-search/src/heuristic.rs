use gridpath_core::Coord;

/// Manhattan (L1) distance between two cells.
///
/// On a 4-connected grid with unit edge costs this never overestimates the
/// true remaining distance, which is what makes it a sound A* heuristic.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}
