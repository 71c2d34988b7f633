//! Mode rules - the per-mode transition table
//!
//! Both modes share one engine; they differ only in how a move's result is
//! resolved:
//!
//! | Rule | Simple | General |
//! |------|--------|---------|
//! | A completed line ends the game | yes | no |
//! | Completed lines add to the mover's score | no | yes |
//! | Completing a line keeps the turn | n/a | yes |
//! | Full board without a decision | draw | higher score wins |

use crate::types::{Mode, Outcome, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeRules {
    pub first_line_wins: bool,
    pub lines_score: bool,
    pub line_grants_extra_turn: bool,
}

pub const SIMPLE_RULES: ModeRules = ModeRules {
    first_line_wins: true,
    lines_score: false,
    line_grants_extra_turn: false,
};

pub const GENERAL_RULES: ModeRules = ModeRules {
    first_line_wins: false,
    lines_score: true,
    line_grants_extra_turn: true,
};

pub fn rules_for(mode: Mode) -> &'static ModeRules {
    match mode {
        Mode::Simple => &SIMPLE_RULES,
        Mode::General => &GENERAL_RULES,
    }
}

/// Effects of one accepted move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub outcome: Outcome,
    /// Points credited to the mover
    pub points: u32,
    /// Whether the turn passes to the opponent
    pub pass_turn: bool,
}

/// Resolve a move that completed `new_lines` lines.
///
/// `scores` are the totals before this move; `board_full` is the board after it.
pub fn resolve(
    rules: &ModeRules,
    mover: Player,
    new_lines: usize,
    board_full: bool,
    scores: [u32; 2],
) -> Transition {
    let completed = new_lines > 0;

    if completed && rules.first_line_wins {
        return Transition {
            outcome: Outcome::Winner(mover),
            points: 0,
            pass_turn: false,
        };
    }

    let points = if rules.lines_score { new_lines as u32 } else { 0 };
    let pass_turn = !(completed && rules.line_grants_extra_turn);

    let outcome = if !board_full {
        Outcome::Continue
    } else if rules.lines_score {
        let mut after = scores;
        after[mover.index()] += points;
        final_standing(after)
    } else {
        Outcome::Draw
    };

    Transition {
        outcome,
        points,
        pass_turn,
    }
}

/// Compare final scores: strictly higher wins, equal draws
pub fn final_standing(scores: [u32; 2]) -> Outcome {
    let blue = scores[Player::Blue.index()];
    let red = scores[Player::Red.index()];
    match blue.cmp(&red) {
        std::cmp::Ordering::Greater => Outcome::Winner(Player::Blue),
        std::cmp::Ordering::Less => Outcome::Winner(Player::Red),
        std::cmp::Ordering::Equal => Outcome::Draw,
    }
}
