//! The agent's view of one game: root position, engine, and opening picker.

use tracing::{debug, info};

use ninefold_core::{Cell, GameState, Mark, Move};

use crate::error::PlayerError;
use crate::opening::{CellPicker, RandomPicker};
use crate::schedule::depth_for_move_index;
use crate::search::control::SearchControl;
use crate::search::{SearchConfig, SearchEngine};

/// Per-game state, created by [`Player::initiate_game`].
struct Game {
    mark: Mark,
    state: GameState,
    engine: SearchEngine,
    /// Own stones on the board, including any placed for us by the arbiter.
    moves_made: usize,
}

/// Plays one side of a game as moves arrive from the arbiter.
///
/// Every move, ours or the opponent's, is applied to a single root
/// [`GameState`]. The evaluation cache lives inside the engine and is
/// replaced whenever a new game starts.
pub struct Player<P: CellPicker = RandomPicker> {
    config: SearchConfig,
    picker: P,
    game: Option<Game>,
}

impl Player<RandomPicker> {
    /// A player that opens with a uniformly random move.
    pub fn new(config: SearchConfig) -> Self {
        Self::with_picker(config, RandomPicker::new())
    }
}

impl<P: CellPicker> Player<P> {
    /// A player that opens with whatever `picker` chooses.
    pub fn with_picker(config: SearchConfig, picker: P) -> Self {
        Self {
            config,
            picker,
            game: None,
        }
    }

    /// Start a fresh game playing `mark`, discarding any previous game and its cache.
    pub fn initiate_game(&mut self, mark: Mark) -> Result<(), PlayerError> {
        if mark.is_empty() {
            return Err(PlayerError::Core(ninefold_core::CoreError::EmptyMover));
        }
        self.game = Some(Game {
            mark,
            state: GameState::new(),
            engine: SearchEngine::new(mark, self.config),
            moves_made: 0,
        });
        info!(%mark, "game started");
        Ok(())
    }

    /// Drop the current game, if any.
    pub fn end_game(&mut self) {
        if let Some(game) = self.game.take() {
            debug!(
                mark = %game.mark,
                cached = game.engine.cache().len(),
                hits = game.engine.cache().hits(),
                misses = game.engine.cache().misses(),
                "game ended"
            );
        }
    }

    /// Our mark in the current game.
    pub fn mark(&self) -> Option<Mark> {
        self.game.as_ref().map(|g| g.mark)
    }

    /// The root position of the current game.
    pub fn state(&self) -> Option<&GameState> {
        self.game.as_ref().map(|g| &g.state)
    }

    /// Own stones placed so far in the current game.
    pub fn moves_made(&self) -> Option<usize> {
        self.game.as_ref().map(|g| g.moves_made)
    }

    /// The engine of the current game.
    pub fn engine(&self) -> Option<&SearchEngine> {
        self.game.as_ref().map(|g| &g.engine)
    }

    /// Apply an opponent move given with an explicit block.
    pub fn apply_opponent_move(&mut self, mv: Move) -> Result<(), PlayerError> {
        let game = self.game.as_mut().ok_or(PlayerError::NotStarted)?;
        let opponent = game.mark.opponent();
        game.state.apply(opponent, mv)?;
        debug!(mark = %opponent, %mv, "opponent moved");
        Ok(())
    }

    /// Apply an opponent move to `cell` of the currently active block.
    pub fn apply_opponent_reply(&mut self, cell: Cell) -> Result<(), PlayerError> {
        let block = self
            .game
            .as_ref()
            .ok_or(PlayerError::NotStarted)?
            .state
            .active_block()
            .ok_or(PlayerError::NoActiveBlock)?;
        self.apply_opponent_move(Move::new(block, cell))
    }

    /// Replay a move the arbiter made on our behalf.
    pub fn record_own_move(&mut self, mv: Move) -> Result<(), PlayerError> {
        let game = self.game.as_mut().ok_or(PlayerError::NotStarted)?;
        game.state.apply(game.mark, mv)?;
        game.moves_made += 1;
        debug!(mark = %game.mark, %mv, "own move recorded");
        Ok(())
    }

    /// Replay the arbiter's opening move for us, then the opponent's reply in
    /// block `own.cell`.
    ///
    /// Both moves are checked on a copy first; if either is illegal the root
    /// position is left untouched.
    pub fn apply_third_move(&mut self, own: Move, reply: Cell) -> Result<(), PlayerError> {
        let game = self.game.as_mut().ok_or(PlayerError::NotStarted)?;
        let opponent = game.mark.opponent();
        let reply = Move::new(own.cell, reply);
        game.state = game
            .state
            .with_move(game.mark, own)?
            .with_move(opponent, reply)?;
        game.moves_made += 1;
        debug!(mark = %game.mark, %own, %reply, "opening replayed");
        Ok(())
    }

    /// Choose our next move, apply it to the root position, and return it.
    ///
    /// The first move of a game is left to the picker. Later moves are
    /// searched to the depth the schedule gives for the number of moves
    /// already made. `control` can cut the search short; the best move
    /// found so far is still played.
    pub fn decide_next_move(&mut self, control: &SearchControl) -> Result<Move, PlayerError> {
        let game = self.game.as_mut().ok_or(PlayerError::NotStarted)?;

        let mv = match depth_for_move_index(game.moves_made) {
            None => {
                let moves = game.state.legal_moves();
                let mv = self.picker.pick(&moves).ok_or(PlayerError::NoLegalMove)?;
                debug!(%mv, choices = moves.len(), "opening move picked");
                mv
            }
            Some(depth) => {
                let result = game
                    .engine
                    .choose_move(&game.state, depth, control)
                    .ok_or(PlayerError::NoLegalMove)?;
                result.best_move
            }
        };

        game.state.apply(game.mark, mv)?;
        game.moves_made += 1;

        if self.config.trace {
            info!(mark = %game.mark, %mv, move_number = game.moves_made, "playing\n{}", game.state.pretty());
        } else {
            debug!(mark = %game.mark, %mv, move_number = game.moves_made, "playing");
        }
        Ok(mv)
    }
}

impl<P: CellPicker> std::fmt::Debug for Player<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("config", &self.config)
            .field("mark", &self.mark())
            .field("moves_made", &self.moves_made())
            .finish()
    }
}
