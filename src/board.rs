//! Board snapshots and group analysis.
//!
//! A [`Board`] is an immutable value: the rules layer produces a new
//! snapshot for every legal move instead of mutating in place, and the
//! caller threads the sequence of snapshots it needs for ko checks.
//! Group and liberty queries are pure functions of (board, coordinate),
//! recomputed on demand by iterative flood fill.

use std::fmt;

/// Stone color. An empty cell is `None` at the board level.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The opposing color.
    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

/// A board coordinate as `(x, y)`, 0-based from the top-left corner.
pub type Point = (usize, usize);

/// A square Go board of tri-state cells.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    pub size: usize,
    cells: Vec<Option<Color>>,
}

/// A maximal 4-connected set of same-colored stones and its liberties.
///
/// Both sets are deduplicated; `liberties.len()` is the group's liberty
/// count. Derived fresh from a snapshot, never cached.
#[derive(Debug, Default)]
pub struct GroupInfo {
    pub stones: Vec<Point>,
    pub liberties: Vec<Point>,
}

impl GroupInfo {
    /// True when the group has no liberties left.
    pub fn is_captured(&self) -> bool {
        self.liberties.is_empty()
    }
}

impl Board {
    /// Create an empty board of the given size.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    /// True if `(x, y)` lies on the board.
    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }

    /// The cell at `(x, y)`, or `None` when empty or out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if !self.in_bounds(x, y) {
            return None;
        }
        self.cells[self.idx(x, y)]
    }

    /// Overwrite a cell. Only the rules layer builds new snapshots; the
    /// board is never poked directly outside a validated move.
    pub(crate) fn put(&mut self, x: usize, y: usize, cell: Option<Color>) {
        let i = self.idx(x, y);
        self.cells[i] = cell;
    }

    /// The in-bounds orthogonal neighbors of `(x, y)`.
    pub fn neighbors(&self, x: usize, y: usize) -> impl Iterator<Item = Point> + '_ {
        let s = self.size;
        let mut v = Vec::with_capacity(4);
        if x > 0 {
            v.push((x - 1, y));
        }
        if x + 1 < s {
            v.push((x + 1, y));
        }
        if y > 0 {
            v.push((x, y - 1));
        }
        if y + 1 < s {
            v.push((x, y + 1));
        }
        v.into_iter()
    }

    /// Iterate over all occupied cells as `(point, color)`.
    pub fn stones(&self) -> impl Iterator<Item = (Point, Color)> + '_ {
        let s = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, c)| c.map(|color| ((i % s, i / s), color)))
    }

    /// Iterate over all empty cells in raster order.
    pub fn empties(&self) -> impl Iterator<Item = Point> + '_ {
        let s = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, c)| c.is_none().then_some((i % s, i / s)))
    }

    /// Number of empty cells.
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// True when no stone has been placed yet.
    pub fn is_empty_board(&self) -> bool {
        self.cells.iter().all(|c| c.is_none())
    }

    /// Compute the group containing `(x, y)` and its liberty set.
    ///
    /// Returns an empty result when the seed cell is empty or out of
    /// bounds. Iterative flood fill over 4-neighbors with a visited set,
    /// O(size^2) per call.
    pub fn group_info(&self, x: usize, y: usize) -> GroupInfo {
        let Some(color) = self.get(x, y) else {
            return GroupInfo::default();
        };

        let mut info = GroupInfo::default();
        let mut visited = vec![false; self.size * self.size];
        let mut liberty_seen = vec![false; self.size * self.size];
        let mut stack = vec![(x, y)];

        while let Some((cx, cy)) = stack.pop() {
            let i = self.idx(cx, cy);
            if visited[i] {
                continue;
            }
            visited[i] = true;
            info.stones.push((cx, cy));

            for (nx, ny) in self.neighbors(cx, cy) {
                let ni = self.idx(nx, ny);
                match self.get(nx, ny) {
                    None => {
                        if !liberty_seen[ni] {
                            liberty_seen[ni] = true;
                            info.liberties.push((nx, ny));
                        }
                    }
                    Some(c) if c == color && !visited[ni] => stack.push((nx, ny)),
                    _ => {}
                }
            }
        }
        info
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size {
            for x in 0..self.size {
                let ch = match self.get(x, y) {
                    Some(Color::Black) => 'X',
                    Some(Color::White) => 'O',
                    None => '.',
                };
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board({}x{})", self.size, self.size)?;
        fmt::Display::fmt(self, f)
    }
}
