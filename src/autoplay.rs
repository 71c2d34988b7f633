//! Computer-vs-computer play.

use crate::ai::SearchPlayer;
use crate::core::MoveError;
use crate::engine::GameEngine;
use crate::types::{Outcome, Player};

/// Let two search players finish the game, feeding their moves through
/// [`GameEngine::apply_move`] like any other caller.
pub fn play_out(
    engine: &mut GameEngine,
    blue: &SearchPlayer,
    red: &SearchPlayer,
) -> Result<Outcome, MoveError> {
    while !engine.is_over() {
        let ai = match engine.current_player() {
            Player::Blue => blue,
            Player::Red => red,
        };
        let Some(m) = ai.choose_move(engine.state()) else {
            break;
        };
        engine.apply_move(m.row, m.col, Some(m.letter))?;
    }
    Ok(engine.outcome())
}
