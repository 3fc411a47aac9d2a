//! Human player taking turns at the console.

use crate::console::{Console, ConsoleError, prompt_non_empty};
use crate::games::tictactoe::{Board, Mark, MatchStatus, Slot};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A named player and the mark they play.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct Player {
    /// Display name.
    name: String,
    /// Mark placed by this player.
    mark: Mark,
}

impl Player {
    /// Asks for a name at the console and creates the player for `mark`.
    #[instrument(skip(console))]
    pub fn prompt<C: Console>(console: &mut C, mark: Mark) -> Result<Self, ConsoleError> {
        let name = prompt_non_empty(console, &format!("Enter player name ({mark}): "))?;
        info!(%name, %mark, "Player joined");
        Ok(Self::new(name, mark))
    }

    /// Plays one turn: asks for slot tokens until one is playable, then
    /// applies it.
    ///
    /// Rejected tokens are reported at the console and do not use up the
    /// turn.
    #[instrument(skip(self, board, console), fields(player = %self.name, mark = %self.mark))]
    pub fn take_turn<C: Console>(
        &self,
        board: &mut Board,
        console: &mut C,
    ) -> Result<MatchStatus, ConsoleError> {
        let prompt = format!("{}'s turn({}): ", self.name, self.mark);
        loop {
            let token = prompt_non_empty(console, &prompt)?;
            match board.resolve_slot(&token) {
                Ok(coords) => {
                    info!(slot = %Slot::from_coordinates(coords), "Move played");
                    return Ok(board.apply_move(coords, self.mark));
                }
                Err(e) => {
                    debug!(%token, error = %e, "Move rejected");
                    console.write_line(&e.to_string())?;
                }
            }
        }
    }
}
