use std::collections::VecDeque;

use slidetile_core::{Arrangement, Board, Cell, Direction, MoveOutcome, Position, ValidMoves};
use slidetile_shuffler::{ShuffleSeed, ShuffleStep, ShuffleWalk};
use slidetile_slicer::{SourceImage, TileImage, TileSurface};

use crate::{GameConfig, GameError, GameEvent, GamePhase};

/// A sliding-tile puzzle session.
///
/// `Game` owns the board, the arrangement it has to return to, and the phase
/// that gates user input. It is the only writer of the board: user moves go
/// through [`request_move`](Self::request_move), shuffle steps through
/// [`shuffle_step`](Self::shuffle_step), and both are serialized by `&mut self`.
///
/// While a shuffle runs, the game is busy and every user move is ignored.
/// After each user move the board is compared against the solved arrangement;
/// the first match switches the game to [`GamePhase::Solved`] and queues a
/// single [`GameEvent::Solved`].
///
/// # Examples
///
/// ```
/// use slidetile_core::Position;
/// use slidetile_game::{Game, GameEvent, GamePhase};
///
/// let mut game = Game::new(1..=8_u16, 3).unwrap();
/// assert!(game.is_solved());
///
/// // Slide a tile out and back again.
/// assert!(game.request_move(Position::new(2, 1)).is_moved());
/// assert_eq!(game.phase(), GamePhase::Playing);
/// assert!(game.request_move(Position::new(2, 2)).is_moved());
///
/// assert_eq!(game.phase(), GamePhase::Solved);
/// assert_eq!(game.drain_events().last(), Some(GameEvent::Solved));
/// ```
#[derive(Debug, Clone)]
pub struct Game<T = TileImage> {
    board: Board<T>,
    solved: Arrangement<T>,
    phase: GamePhase,
    walk: Option<ShuffleWalk>,
    events: VecDeque<GameEvent>,
}

impl Game<TileImage> {
    /// Decodes `bytes`, slices the picture with `surface`, and builds a solved game.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the image cannot be
    /// decoded, the surface fails, or the image is too small for the grid.
    pub fn from_image_bytes<S>(
        bytes: &[u8],
        config: &GameConfig,
        surface: &mut S,
    ) -> Result<Self, GameError>
    where
        S: TileSurface + ?Sized,
    {
        config.validate()?;
        let source = SourceImage::decode(bytes)?;
        let grid_size = config.get_grid_size();
        let tiles = slidetile_slicer::slice_with(&source, grid_size, surface)?;
        let game = Self::new(tiles, grid_size)?;
        log::info!(
            "built {grid_size}x{grid_size} puzzle from {}x{} source image {}",
            source.width(),
            source.height(),
            config.get_source().unwrap_or("<unnamed>"),
        );
        Ok(game)
    }
}

impl<T> Game<T>
where
    T: Clone + PartialEq,
{
    /// Creates a solved game from tiles in row-major solved order.
    ///
    /// `tiles` may hold `size² - 1` tiles or a full `size²` set; see
    /// [`Board::new`].
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Board`] if the grid size or tile count is invalid.
    pub fn new<I>(tiles: I, size: u8) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = T>,
    {
        Ok(Self::from_board(Board::new(tiles, size)?))
    }

    /// Creates a game whose solved arrangement is the current state of `board`.
    #[must_use]
    pub fn from_board(board: Board<T>) -> Self {
        let solved = board.snapshot();
        Self {
            board,
            solved,
            phase: GamePhase::Idle,
            walk: None,
            events: VecDeque::new(),
        }
    }

    /// Returns the current board.
    #[must_use]
    pub fn board(&self) -> &Board<T> {
        &self.board
    }

    /// Returns the arrangement the board has to return to.
    #[must_use]
    pub fn solved_arrangement(&self) -> &Arrangement<T> {
        &self.solved
    }

    /// Returns the grid dimension N.
    #[must_use]
    pub fn size(&self) -> u8 {
        self.board.size()
    }

    /// Returns the position of the empty slot.
    #[must_use]
    pub fn empty_slot(&self) -> Position {
        self.board.empty_slot()
    }

    /// Returns the cell at `pos`, or `None` if it lies off the board.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<&Cell<T>> {
        self.board.get(pos)
    }

    /// Returns the positions a tile can currently slide from.
    #[must_use]
    pub fn valid_moves(&self) -> ValidMoves {
        self.board.valid_moves()
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Returns `true` while a shuffle is in progress.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.phase.is_shuffling()
    }

    /// Returns `true` if the board matches the solved arrangement.
    ///
    /// This is a pure check; it does not change the phase or queue events.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.board.is_solved(&self.solved)
    }

    /// Returns the number of tiles away from their solved place.
    #[must_use]
    pub fn misplaced_count(&self) -> usize {
        self.board.misplaced_count(&self.solved)
    }

    /// Handles a user request to slide the tile at `pos` into the empty slot.
    ///
    /// The request is ignored while shuffling, after the puzzle is solved, and
    /// when `pos` is not orthogonally adjacent to the empty slot.
    pub fn request_move(&mut self, pos: Position) -> MoveOutcome {
        match self.phase {
            GamePhase::Shuffling => {
                log::debug!("ignoring move from {pos} while shuffling");
                return MoveOutcome::Ignored;
            }
            GamePhase::Solved => {
                log::debug!("ignoring move from {pos} on a solved puzzle");
                return MoveOutcome::Ignored;
            }
            GamePhase::Idle | GamePhase::Playing => {}
        }

        let outcome = self.board.apply_move(pos);
        if let MoveOutcome::Moved { from, to } = outcome {
            log::debug!("moved tile from {from} to {to}");
            self.events.push_back(GameEvent::Moved { from, to });
            self.phase = GamePhase::Playing;
            self.check_solved();
        }
        outcome
    }

    /// Handles a user request to slide the tile next to the empty slot in `direction`.
    ///
    /// `direction` is the way the tile travels; see [`Board::apply_direction`].
    pub fn request_direction(&mut self, direction: Direction) -> MoveOutcome {
        let empty = self.board.empty_slot();
        match empty.neighbor(direction.opposite(), self.board.size()) {
            Some(from) => self.request_move(from),
            None => MoveOutcome::Ignored,
        }
    }

    /// Starts a shuffle of `steps` random moves driven by `seed`.
    ///
    /// The shuffle starts from the current board. Call
    /// [`shuffle_step`](Self::shuffle_step) to apply each move, typically
    /// paced by a [`ShufflePacer`](crate::ShufflePacer), or
    /// [`finish_shuffle`](Self::finish_shuffle) to apply the rest at once.
    /// A zero-step shuffle finishes immediately.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Busy`] if a shuffle is already running.
    pub fn begin_shuffle(&mut self, steps: usize, seed: ShuffleSeed) -> Result<(), GameError> {
        if self.is_busy() {
            return Err(GameError::Busy);
        }

        log::info!("shuffling {steps} steps with seed {seed}");
        self.events.push_back(GameEvent::ShuffleStarted { steps, seed });
        self.phase = GamePhase::Shuffling;
        let walk = ShuffleWalk::new(steps, seed);
        if walk.is_finished() {
            self.complete_shuffle(&walk);
        } else {
            self.walk = Some(walk);
        }
        Ok(())
    }

    /// Applies the next shuffle move.
    ///
    /// Returns `None` when no shuffle is running. The step that completes the
    /// walk also ends the busy phase.
    pub fn shuffle_step(&mut self) -> Option<ShuffleStep> {
        let walk = self.walk.as_mut()?;
        let step = walk.step(&mut self.board);
        if let Some(step) = step {
            self.events.push_back(GameEvent::ShuffleStepped(step));
        }
        if walk.is_finished()
            && let Some(walk) = self.walk.take()
        {
            self.complete_shuffle(&walk);
        }
        step
    }

    /// Applies every remaining shuffle move and returns how many were applied.
    pub fn finish_shuffle(&mut self) -> usize {
        let mut applied = 0;
        while self.shuffle_step().is_some() {
            applied += 1;
        }
        applied
    }

    /// Abandons the running shuffle.
    ///
    /// Moves already applied stay on the board, which is therefore a valid,
    /// partially shuffled arrangement. Returns `false` if no shuffle was running.
    pub fn cancel_shuffle(&mut self) -> bool {
        let Some(walk) = self.walk.take() else {
            return false;
        };
        log::info!(
            "shuffle cancelled after {} of {} steps",
            walk.taken(),
            walk.steps()
        );
        self.events.push_back(GameEvent::ShuffleCancelled {
            applied: walk.taken(),
            remaining: walk.remaining(),
        });
        self.phase = GamePhase::Playing;
        true
    }

    /// Resets the board to the solved arrangement.
    ///
    /// A running shuffle is cancelled first.
    pub fn restart(&mut self) {
        self.cancel_shuffle();
        self.board = Board::from_arrangement(&self.solved);
        self.phase = GamePhase::Idle;
        self.events.push_back(GameEvent::Restarted);
        log::debug!("puzzle restarted");
    }

    /// Removes and returns every queued event, oldest first.
    pub fn drain_events(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    fn complete_shuffle(&mut self, walk: &ShuffleWalk) {
        log::info!("shuffle finished after {} steps", walk.taken());
        self.events.push_back(GameEvent::ShuffleFinished {
            steps: walk.taken(),
        });
        self.phase = GamePhase::Playing;
    }

    fn check_solved(&mut self) {
        if self.phase.is_solved() || !self.is_solved() {
            return;
        }
        log::info!("puzzle solved");
        self.phase = GamePhase::Solved;
        self.events.push_back(GameEvent::Solved);
    }
}
