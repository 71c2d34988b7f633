//! Line detection - finds S-O-S patterns completed by a placement
//!
//! A line is three adjacent, collinear cells reading `S`, `O`, `S`. Its identity is
//! the canonical key: the three coordinates sorted row-major. Because the middle
//! cell of a sorted collinear triple is always the geometric middle, the first and
//! last entries of the key are the line's endpoints.
//!
//! Detection is local: given the cell that was just written, every 3-cell window
//! containing it is checked. The written cell can sit at any of the three window
//! positions, so each of the 8 directions is probed with 3 offsets.

use std::collections::HashSet;

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::{Cell, Coord, Letter, Player, LINE_LEN, MAX_LINES_PER_MOVE};

/// The 4 axes in both orientations, as (d_row, d_col)
pub const DIRECTIONS: [(isize, isize); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
];

/// The letter each window position must hold
const PATTERN: [Letter; LINE_LEN] = [Letter::S, Letter::O, Letter::S];

/// Canonical identity of a line: its coordinates in row-major order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineKey([Coord; LINE_LEN]);

impl LineKey {
    pub fn new(mut cells: [Coord; LINE_LEN]) -> Self {
        cells.sort_unstable();
        Self(cells)
    }

    pub fn cells(&self) -> &[Coord; LINE_LEN] {
        &self.0
    }

    pub fn start(&self) -> Coord {
        self.0[0]
    }

    pub fn end(&self) -> Coord {
        self.0[LINE_LEN - 1]
    }

    pub fn contains(&self, at: Coord) -> bool {
        self.0.contains(&at)
    }
}

/// A discovered line together with the player credited for it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FoundLine {
    pub key: LineKey,
    pub owner: Player,
}

/// Dedup index of every line found so far in a game.
///
/// Keys are stored in a set for membership; the ordered list keeps discovery
/// order and ownership for observers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveredLines {
    keys: HashSet<LineKey>,
    lines: Vec<FoundLine>,
}

impl DiscoveredLines {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &LineKey) -> bool {
        self.keys.contains(key)
    }

    /// Record a line; returns false (and changes nothing) if it was already known
    pub fn insert(&mut self, key: LineKey, owner: Player) -> bool {
        if !self.keys.insert(key) {
            return false;
        }
        self.lines.push(FoundLine { key, owner });
        true
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines in discovery order
    pub fn iter(&self) -> impl Iterator<Item = &FoundLine> {
        self.lines.iter()
    }

    /// Number of lines credited to `player`
    pub fn count_for(&self, player: Player) -> usize {
        self.lines.iter().filter(|l| l.owner == player).count()
    }
}

/// The window starting at `start` along (dr, dc), if it fits on the board
#[inline]
fn window(board: &Board, start: Coord, dr: isize, dc: isize) -> Option<[Coord; LINE_LEN]> {
    let mut cells = [start; LINE_LEN];
    for (step, slot) in cells.iter_mut().enumerate() {
        let at = start.offset(dr, dc, step as isize)?;
        if !board.in_bounds(at.row, at.col) {
            return None;
        }
        *slot = at;
    }
    Some(cells)
}

#[inline]
fn matches_pattern(board: &Board, cells: &[Coord; LINE_LEN]) -> bool {
    cells
        .iter()
        .zip(PATTERN)
        .all(|(&at, want)| board.cell(at) == Some(Cell::Filled(want)))
}

/// Every line passing through `at`, deduplicated, in probe order.
fn lines_through(board: &Board, at: Coord) -> ArrayVec<LineKey, MAX_LINES_PER_MOVE> {
    let mut found = ArrayVec::new();
    if !matches!(board.cell(at), Some(Cell::Filled(_))) {
        return found;
    }

    for (dr, dc) in DIRECTIONS {
        for role in 0..LINE_LEN as isize {
            let Some(start) = at.offset(dr, dc, -role) else {
                continue;
            };
            let Some(cells) = window(board, start, dr, dc) else {
                continue;
            };
            if !matches_pattern(board, &cells) {
                continue;
            }
            let key = LineKey::new(cells);
            // The same physical line shows up once per orientation.
            if !found.contains(&key) {
                found.push(key);
            }
        }
    }
    found
}

/// Lines completed through `at` that are not yet in `known`.
///
/// Pure: the board is only read. A single placement can complete several lines
/// in different directions; all of them are returned.
pub fn find_new_lines(
    board: &Board,
    at: Coord,
    known: &DiscoveredLines,
) -> ArrayVec<LineKey, MAX_LINES_PER_MOVE> {
    let mut lines = lines_through(board, at);
    lines.retain(|key| !known.contains(key));
    lines
}

/// Number of distinct lines passing through `at`, ignoring discovery history.
///
/// Any line through a freshly written cell is necessarily new, which is what
/// hypothetical probes rely on.
pub fn count_lines_through(board: &Board, at: Coord) -> usize {
    lines_through(board, at).len()
}
