//! Alpha-beta search over letter placements
//!
//! The search never touches the live game: it clones the board once into a
//! scratch copy and makes/unmakes placements on that copy. Each tentative
//! placement is a [`Probe`] that clears its cell when dropped, so the scratch
//! board is restored on every path out of a probe.
//!
//! Candidates are every empty cell with both letters. A leaf is scored with
//! [`evaluate`]; lines completed along the way add `completion_weight` each for
//! the searching side and subtract it for the opponent.

use tracing::debug;

use crate::types::{Coord, Letter, Player};
use sos_core::{count_lines_through, Board, GameState};

const INF: i32 = i32::MAX / 2;

/// Search tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies explored; 1 scores each candidate by its immediate heuristic
    pub max_ply: u8,
    /// Score per line completed by a candidate placement
    pub completion_weight: i32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_ply: 1,
            completion_weight: 10,
        }
    }
}

/// A placement proposed by the search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub letter: Letter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best placement found, `None` on a full board
    pub best: Option<Move>,
    pub score: i32,
    /// Candidate placements evaluated
    pub nodes: u64,
}

/// Tentative placement on a scratch board, undone on drop
struct Probe<'a> {
    board: &'a mut Board,
    at: Coord,
}

impl<'a> Probe<'a> {
    fn place(board: &'a mut Board, at: Coord, letter: Letter) -> Option<Self> {
        board.set(at.row, at.col, letter).ok()?;
        Some(Self { board, at })
    }

    fn board(&mut self) -> &mut Board {
        &mut *self.board
    }

    /// Lines completed by this placement
    fn lines(&self) -> usize {
        count_lines_through(&*self.board, self.at)
    }
}

impl Drop for Probe<'_> {
    fn drop(&mut self) {
        // In bounds by construction.
        let _ = self.board.clear(self.at.row, self.at.col);
    }
}

/// Number of empty cells where placing `letter` would complete at least one line
pub fn potential(board: &mut Board, letter: Letter) -> i32 {
    let empties: Vec<Coord> = board.empty_cells().collect();
    let mut count = 0;
    for at in empties {
        if let Some(probe) = Probe::place(board, at, letter) {
            if probe.lines() > 0 {
                count += 1;
            }
        }
    }
    count
}

/// Opportunities open to `player` minus those open to the opponent
pub fn evaluate(board: &mut Board, player: Player) -> i32 {
    let mine = potential(board, player.default_letter());
    let theirs = potential(board, player.opponent().default_letter());
    mine - theirs
}

struct Searcher {
    side: Player,
    config: SearchConfig,
    nodes: u64,
}

impl Searcher {
    fn candidates(board: &Board) -> Vec<(Coord, Letter)> {
        board
            .empty_cells()
            .flat_map(|at| Letter::ALL.into_iter().map(move |letter| (at, letter)))
            .collect()
    }

    /// Score of the position after a probe, `ply` levels still to explore
    fn score_after(
        &mut self,
        probe: &mut Probe<'_>,
        ply: u8,
        alpha: i32,
        beta: i32,
        maximizing: bool,
    ) -> i32 {
        let gained = probe.lines() as i32 * self.config.completion_weight;
        let gained = if maximizing { gained } else { -gained };
        let board = probe.board();
        let rest = if ply > 1 && !board.is_full() {
            self.minimax(board, ply - 1, alpha, beta, !maximizing)
        } else {
            evaluate(board, self.side)
        };
        gained.saturating_add(rest)
    }

    fn minimax(
        &mut self,
        board: &mut Board,
        ply: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        let mut best = if maximizing { -INF } else { INF };
        for (at, letter) in Self::candidates(board) {
            let Some(mut probe) = Probe::place(board, at, letter) else {
                continue;
            };
            self.nodes += 1;
            let score = self.score_after(&mut probe, ply, alpha, beta, maximizing);
            drop(probe);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if beta <= alpha {
                break;
            }
        }
        best
    }

    fn root(&mut self, board: &mut Board) -> SearchResult {
        let mut alpha = -INF;
        let mut best: Option<(Move, i32)> = None;

        for (at, letter) in Self::candidates(board) {
            let Some(mut probe) = Probe::place(board, at, letter) else {
                continue;
            };
            self.nodes += 1;
            let score = self.score_after(&mut probe, self.config.max_ply, alpha, INF, true);
            drop(probe);

            if best.map_or(true, |(_, s)| score > s) {
                best = Some((
                    Move {
                        row: at.row,
                        col: at.col,
                        letter,
                    },
                    score,
                ));
                alpha = alpha.max(score);
            }
        }

        SearchResult {
            best: best.map(|(m, _)| m),
            score: best.map_or(0, |(_, s)| s),
            nodes: self.nodes,
        }
    }
}

/// Automated player for one side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchPlayer {
    player: Player,
    config: SearchConfig,
}

impl SearchPlayer {
    pub fn new(player: Player, config: SearchConfig) -> Self {
        Self {
            player,
            config: SearchConfig {
                max_ply: config.max_ply.max(1),
                ..config
            },
        }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Run the search on a scratch copy of the board
    pub fn search(&self, state: &GameState) -> SearchResult {
        let mut scratch = state.board().clone();
        let mut searcher = Searcher {
            side: self.player,
            config: self.config,
            nodes: 0,
        };
        let result = searcher.root(&mut scratch);
        debug!(
            player = self.player.as_str(),
            nodes = result.nodes,
            score = result.score,
            best = ?result.best,
            "search finished"
        );
        result
    }

    /// Pick a move for the player to move.
    ///
    /// The coordinate comes from the search; the letter is always the one owed
    /// by the current player, whatever letter the search preferred.
    pub fn choose_move(&self, state: &GameState) -> Option<Move> {
        let best = self.search(state).best?;
        Some(Move {
            letter: state.current_player().default_letter(),
            ..best
        })
    }
}
