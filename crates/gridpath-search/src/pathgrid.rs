use gridpath_core::Coord;

/// Sentinel distance for cells the search has not discovered — the "infinite"
/// initial distance of every cell except the start.
pub const UNREACHABLE: i32 = i32::MAX;

/// Null back-pointer: the start cell, and every undiscovered cell.
pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Internal per-cell search state
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    /// Best known path length from the start, in edges.
    pub(crate) dist: i32,
    /// Open-set selection key: `dist` for uniform-cost search,
    /// `dist + heuristic` for heuristic search.
    pub(crate) score: i32,
    /// Back-pointer to the predecessor on the best known path, as a flat
    /// index into the node array.
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    /// Member of the open set (has a live heap entry).
    pub(crate) open: bool,
    /// Finalized: appended to the visitation order, never re-expanded or
    /// re-enqueued.
    pub(crate) closed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            dist: UNREACHABLE,
            score: UNREACHABLE,
            parent: NO_PARENT,
            generation: 0,
            open: false,
            closed: false,
        }
    }
}

/// Heap entry for the open set, ordered so that `BinaryHeap` (a max-heap)
/// pops the smallest score first and, among equal scores, the oldest
/// insertion first.
///
/// The sequence number makes tie-breaking deterministic: cells discovered
/// earlier win ties, and a cell whose score improves re-enters the order with
/// a fresh sequence number. Superseded entries are recognized at pop time by
/// the node's cleared `open` flag.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) struct OpenEntry {
    pub(crate) idx: usize,
    pub(crate) score: i32,
    pub(crate) seq: u64,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed on both keys: smallest score, then oldest seq.
        other
            .score
            .cmp(&self.score)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// PathGrid
// ---------------------------------------------------------------------------

/// Reusable per-run search state for a rows × cols grid.
///
/// A `PathGrid` owns every piece of state a search run needs — distances,
/// back-pointers, visitation flags and the visitation-order buffer — keyed by
/// flat cell index. The board itself stays immutable during a search: the
/// search methods take `&mut self` and `&Board`, so the borrow checker
/// guarantees exclusive access to the run state and rules out board mutation
/// mid-search.
///
/// State is reused across runs without being rebuilt: starting a run bumps a
/// generation counter, which logically resets every cell to the clean
/// `dist = ∞, no parent, unvisited` state in O(1). Stale entries from earlier
/// runs are recognized by their generation and ignored.
pub struct PathGrid {
    pub(crate) rows: i32,
    pub(crate) cols: i32,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    /// Monotonic insertion counter for deterministic open-set tie-breaking.
    pub(crate) seq: u64,
    pub(crate) visit_order: Vec<Coord>,
}

impl PathGrid {
    /// Create search state for a `rows` × `cols` grid. Dimensions are
    /// clamped to be non-negative.
    pub fn new(rows: i32, cols: i32) -> Self {
        let rows = rows.max(0);
        let cols = cols.max(0);
        Self {
            rows,
            cols,
            nodes: vec![Node::default(); (rows * cols) as usize],
            generation: 0,
            seq: 0,
            visit_order: Vec::new(),
        }
    }

    /// Change the grid dimensions, reallocating only when the new size
    /// exceeds the existing capacity.
    ///
    /// Shrinking (or resizing to an equal cell count) keeps the allocation
    /// and merely bumps the generation so stale state is ignored.
    pub fn resize(&mut self, rows: i32, cols: i32) {
        let rows = rows.max(0);
        let cols = cols.max(0);
        let new_len = (rows * cols) as usize;
        self.rows = rows;
        self.cols = cols;
        self.visit_order.clear();

        if new_len <= self.nodes.len() {
            self.generation = self.generation.wrapping_add(1);
            return;
        }

        self.nodes.clear();
        self.nodes.resize(new_len, Node::default());
        self.generation = 0;
    }

    /// Number of rows covered.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns covered.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a coordinate to a flat index. `None` if outside the grid.
    #[inline]
    pub(crate) fn idx(&self, c: Coord) -> Option<usize> {
        if c.row < 0 || c.row >= self.rows || c.col < 0 || c.col >= self.cols {
            return None;
        }
        Some((c.row * self.cols + c.col) as usize)
    }

    /// Convert a flat index back to a coordinate.
    #[inline]
    pub(crate) fn coord(&self, idx: usize) -> Coord {
        Coord::new(idx as i32 / self.cols, idx as i32 % self.cols)
    }

    // -----------------------------------------------------------------------
    // Run state
    // -----------------------------------------------------------------------

    /// Start a new run: logically reset every cell and clear the visitation
    /// buffer. O(1) — cells are invalidated by bumping the generation.
    pub(crate) fn begin(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.visit_order.clear();
    }

    /// Fetch the node at `idx` for the current run, resetting it to the
    /// clean run state if it was last touched by an earlier run.
    pub(crate) fn node_mut(&mut self, idx: usize) -> &mut Node {
        let generation = self.generation;
        let node = &mut self.nodes[idx];
        if node.generation != generation {
            *node = Node {
                generation,
                ..Node::default()
            };
        }
        node
    }

    // -----------------------------------------------------------------------
    // Results of the last run
    // -----------------------------------------------------------------------

    /// The visitation order of the last search: every finalized cell, in the
    /// order the search finalized them. Walls never appear here.
    ///
    /// If the last element is not the finish cell, the finish was
    /// unreachable.
    #[inline]
    pub fn visit_order(&self) -> &[Coord] {
        &self.visit_order
    }

    /// Best known distance from the start recorded for `c` when the last
    /// search ended, in edges. [`UNREACHABLE`] for cells the search never
    /// discovered (or outside the grid).
    ///
    /// For cells that were discovered but not finalized before the search
    /// terminated, this is a tentative value, not necessarily the true
    /// shortest distance.
    pub fn distance_at(&self, c: Coord) -> i32 {
        match self.idx(c) {
            Some(i) if self.nodes[i].generation == self.generation => self.nodes[i].dist,
            _ => UNREACHABLE,
        }
    }

    /// Whether the last search finalized (visited) `c`.
    pub fn reached(&self, c: Coord) -> bool {
        matches!(
            self.idx(c),
            Some(i) if self.nodes[i].generation == self.generation && self.nodes[i].closed
        )
    }

    /// Reconstruct the path recorded by the last search, from the start to
    /// `finish` inclusive.
    ///
    /// Walks the back-pointer chain from `finish` and reverses it. If the
    /// search never assigned `finish` a predecessor — the finish was
    /// unreachable, or no search has run — the result is just `[finish]`,
    /// which callers interpret as "no path". A run whose start and finish
    /// coincide yields `[start]`.
    pub fn path_to(&self, finish: Coord) -> Vec<Coord> {
        let mut path = Vec::new();
        match self.idx(finish) {
            Some(fi) if self.nodes[fi].generation == self.generation => {
                let mut ci = fi;
                while ci != NO_PARENT {
                    path.push(self.coord(ci));
                    ci = self.nodes[ci].parent;
                }
                path.reverse();
            }
            _ => path.push(finish),
        }
        path
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PathGrid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.rows, self.cols).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PathGrid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (rows, cols) = <(i32, i32)>::deserialize(deserializer)?;
        Ok(PathGrid::new(rows, cols))
    }
}
