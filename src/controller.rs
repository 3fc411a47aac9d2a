//! Turn controller: runs one match from name entry to the final banner.

use crate::config::MatchConfig;
use crate::console::{Console, ConsoleError};
use crate::games::tictactoe::{Board, Line, Mark, MatchStatus};
use crate::player::Player;
use tracing::{debug, info, instrument};

/// How a finished match ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    /// A player completed a line.
    Won {
        /// The winning player.
        winner: Player,
        /// The line they completed.
        line: Line,
    },
    /// The board filled up with no completed line.
    Draw,
}

/// Drives a single match between two players over a console.
#[derive(Debug)]
pub struct MatchController<C> {
    board: Board,
    player_o: Player,
    player_x: Player,
    to_move: Mark,
    console: C,
}

impl<C: Console> MatchController<C> {
    /// Creates a controller for two known players. `o` moves first.
    pub fn new(console: C, player_o: Player, player_x: Player) -> Self {
        Self {
            board: Board::new(),
            player_o,
            player_x,
            to_move: Mark::O,
            console,
        }
    }

    /// Sets up a match, asking for any player name the config leaves out.
    #[instrument(skip(console, config))]
    pub fn setup(mut console: C, config: &MatchConfig) -> Result<Self, ConsoleError> {
        let player_o = Self::player_for(&mut console, config.player_o(), Mark::O)?;
        let player_x = Self::player_for(&mut console, config.player_x(), Mark::X)?;
        Ok(Self::new(console, player_o, player_x))
    }

    fn player_for(
        console: &mut C,
        preset: &Option<String>,
        mark: Mark,
    ) -> Result<Player, ConsoleError> {
        match preset {
            Some(name) => {
                debug!(%name, %mark, "Using configured player name");
                Ok(Player::new(name.clone(), mark))
            }
            None => Player::prompt(console, mark),
        }
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> &Player {
        self.player(self.to_move)
    }

    fn player(&self, mark: Mark) -> &Player {
        match mark {
            Mark::O => &self.player_o,
            Mark::X => &self.player_x,
        }
    }

    /// Plays turns until the match is won or drawn, then prints the
    /// final board and banner.
    ///
    /// # Errors
    ///
    /// Fails only if the console does: input closed or an I/O error.
    #[instrument(skip(self))]
    pub fn run(mut self) -> Result<MatchOutcome, ConsoleError> {
        info!(
            player_o = %self.player_o.name(),
            player_x = %self.player_x.name(),
            "Match started"
        );

        let finish = loop {
            self.console.write_line(&self.board.to_string())?;

            let player = match self.to_move {
                Mark::O => &self.player_o,
                Mark::X => &self.player_x,
            };
            match player.take_turn(&mut self.board, &mut self.console)? {
                MatchStatus::InProgress => self.to_move = self.to_move.opponent(),
                MatchStatus::Won { mark, line } => break Some((mark, line)),
                MatchStatus::Draw => break None,
            }
        };

        self.console.write_line(&self.board.to_string())?;
        let outcome = match finish {
            Some((mark, line)) => {
                let winner = self.player(mark).clone();
                info!(
                    winner = %winner.name(),
                    %line,
                    cells = ?line.coordinates(),
                    "Match won"
                );
                self.console
                    .write_line(&format!("Game over: {} has won!", winner.name()))?;
                MatchOutcome::Won { winner, line }
            }
            None => {
                info!("Match drawn");
                self.console.write_line("Game Over: It's a Draw!")?;
                MatchOutcome::Draw
            }
        };
        Ok(outcome)
    }
}
