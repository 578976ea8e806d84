//! Game state management for a Color Lines session: selection, the move
//! pipeline, the spawn step, scoring and game over.

use crate::engine::{random_ball_color, Board, Cell, Pos};
use crate::lines::{scan_lines, Line};
use crate::pathfinder::find_path;
use crate::record::Record;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Number of balls added to the board by one spawn step, and the length of
/// the forecast.
pub const SPAWN_COUNT: usize = 3;

/// Points awarded per cleared ball.
pub const POINTS_PER_BALL: u32 = 2;

/// Externally observable phase of the turn state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No ball selected; waiting for a selection.
    Idle,
    /// A ball is selected; waiting for a target cell.
    Selected,
    /// The presentation layer is animating; all input is ignored.
    Animating,
    /// The board filled up with no line to clear; terminal until
    /// [`Game::reset`].
    GameOver,
}

/// Everything that happened as a result of one accepted move.
#[derive(Clone, Debug)]
pub struct MoveOutcome {
    /// Cells traveled, excluding the source, ending at the target.
    pub path: Vec<Pos>,
    /// Qualifying lines found at the target or around spawned balls.
    /// Intersecting lines may repeat shared cells; `cleared` does not.
    pub lines: Vec<Line>,
    /// Distinct cells cleared; `POINTS_PER_BALL * cleared.len()` points
    /// were awarded.
    pub cleared: Vec<Pos>,
    /// Balls placed by the spawn step, in placement order, if one ran.
    pub spawned: Vec<Pos>,
    /// True when the spawn step filled the board without forming a line.
    pub game_over: bool,
}

/// Manages the state and progression of a Color Lines session.
///
/// The `Game` owns the board and is its only mutator; `pathfinder` and
/// `lines` are pure functions of board state. Every pipeline runs to
/// completion synchronously within one call, so a move either applies fully
/// or not at all.
///
/// # Examples
/// ```
/// use color_lines::game::{Game, Phase};
/// use color_lines::record::Record;
///
/// let game = Game::with_seed(Record::in_memory(), 7);
/// assert_eq!(game.phase(), Phase::Idle);
/// assert_eq!(game.score(), 0);
///
/// // Three balls were spawned at game start.
/// assert_eq!(game.board().empty_cells().len(), 78);
///
/// // The forecast shows what the next spawn step will place.
/// assert_eq!(game.forecast().len(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    score: u32,
    record: Record,
    forecast: [Cell; SPAWN_COUNT],
    selected: Option<Pos>,
    blocked: bool,
    over: bool,
    rng: SmallRng,
}

impl Game {
    /// Starts a fresh game: empty board, score 0, a forecast drawn and the
    /// initial three balls spawned. The best score is whatever `record`
    /// already holds.
    pub fn new(record: Record) -> Self {
        Self::from_parts(Board::new_empty(), record, SmallRng::from_entropy(), true)
    }

    /// Like [`Game::new`] but with a deterministic RNG seed, for
    /// reproducible games and tests.
    pub fn with_seed(record: Record, seed: u64) -> Self {
        Self::from_parts(Board::new_empty(), record, SmallRng::seed_from_u64(seed), true)
    }

    /// Starts from a prepared board without the initial spawn.
    ///
    /// This is useful for testing or setting up specific game scenarios.
    /// The RNG is fixed-seeded so that subsequent spawn steps are
    /// deterministic.
    pub fn with_board(board: Board, record: Record) -> Self {
        Self::from_parts(board, record, SmallRng::seed_from_u64(0), false)
    }

    fn from_parts(board: Board, record: Record, mut rng: SmallRng, spawn: bool) -> Self {
        let forecast = draw_forecast(&mut rng);
        let mut game = Game {
            board,
            score: 0,
            record,
            forecast,
            selected: None,
            blocked: false,
            over: false,
            rng,
        };
        if spawn {
            // Three isolated balls cannot form a five-run on an empty
            // board, so no line check is needed here.
            game.spawn_balls();
        }
        game
    }

    /// Returns an immutable reference to the current game board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current score. Monotonic within one round; reset to 0 by
    /// [`Game::reset`].
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Returns the best score seen across sessions.
    pub fn best(&self) -> u32 {
        self.record.best()
    }

    /// The next [`SPAWN_COUNT`] colors the spawn step will place, visible
    /// to the player before they commit a move.
    pub fn forecast(&self) -> [Cell; SPAWN_COUNT] {
        self.forecast
    }

    /// The currently selected ball, if any.
    pub fn selected(&self) -> Option<Pos> {
        self.selected
    }

    /// Current phase of the state machine.
    pub fn phase(&self) -> Phase {
        if self.over {
            Phase::GameOver
        } else if self.blocked {
            Phase::Animating
        } else if self.selected.is_some() {
            Phase::Selected
        } else {
            Phase::Idle
        }
    }

    /// Raised by the presentation layer while an animation plays; select
    /// and move input is ignored until it is lowered again. This flag is
    /// the sole input gate: the engine itself never suspends mid-pipeline.
    pub fn set_blocked(&mut self, blocked: bool) {
        self.blocked = blocked;
    }

    /// Records `pos` as the selected ball.
    ///
    /// Selecting an empty cell is a no-op (not an error), as is any input
    /// while blocked or after game over. Selecting a different ball while
    /// one is already selected replaces the selection.
    pub fn select(&mut self, pos: Pos) {
        if self.blocked || self.over {
            return;
        }
        if self.board.get(pos) != Cell::Empty {
            self.selected = Some(pos);
        }
    }

    /// Attempts to move the selected ball to `target`.
    ///
    /// Returns `None` with the board untouched when the move is not
    /// accepted: nothing selected, input blocked, game over, target equal
    /// to the selection, target occupied, or no unobstructed path. A
    /// rejected move keeps the selection so the player can pick another
    /// target. (A click on an occupied cell is a re-selection; route it to
    /// [`Game::select`] instead.)
    ///
    /// On success the ball is moved atomically and the destination is
    /// evaluated: qualifying lines are cleared and scored, otherwise the
    /// spawn step runs, clearing and scoring any lines the new balls
    /// complete. The spawn step can end the game when the board fills up.
    pub fn attempt_move(&mut self, target: Pos) -> Option<MoveOutcome> {
        if self.blocked || self.over {
            return None;
        }
        let source = self.selected?;
        if target == source || self.board.get(target) != Cell::Empty {
            return None;
        }
        let path = find_path(&self.board, source, target)?;

        // The move itself: clear the source, write the ball to the target.
        let ball = self.board.get(source);
        self.board.set(source, Cell::Empty);
        self.board.set(target, ball);
        self.selected = None;

        let mut outcome = MoveOutcome {
            path,
            lines: Vec::new(),
            cleared: Vec::new(),
            spawned: Vec::new(),
            game_over: false,
        };

        let move_lines = scan_lines(&self.board, target);
        if !move_lines.is_empty() {
            outcome.cleared = self.clear_lines(&move_lines);
            outcome.lines = move_lines;
        } else {
            outcome.spawned = self.spawn_balls();
            let mut spawn_lines = Vec::new();
            for &pos in &outcome.spawned {
                spawn_lines.extend(scan_lines(&self.board, pos));
            }
            if !spawn_lines.is_empty() {
                outcome.cleared = self.clear_lines(&spawn_lines);
                outcome.lines = spawn_lines;
            } else if self.board.is_full() {
                self.over = true;
            }
        }

        outcome.game_over = self.over;
        Some(outcome)
    }

    /// Starts a new round: clears the board, resets the score to 0, draws a
    /// fresh forecast and performs the initial spawn. The best-score record
    /// carries over.
    pub fn reset(&mut self) {
        self.board = Board::new_empty();
        self.score = 0;
        self.selected = None;
        self.blocked = false;
        self.over = false;
        self.forecast = draw_forecast(&mut self.rng);
        self.spawn_balls();
    }

    // Empties every cell belonging to `lines`, counting overlapping cells
    // once, and awards POINTS_PER_BALL per distinct cell. Cells shared by
    // intersecting lines must not be double-scored.
    fn clear_lines(&mut self, lines: &[Line]) -> Vec<Pos> {
        let mut cleared: Vec<Pos> = Vec::new();
        for line in lines {
            for &pos in &line.cells {
                if !cleared.contains(&pos) {
                    cleared.push(pos);
                }
            }
        }
        for &pos in &cleared {
            self.board.set(pos, Cell::Empty);
        }
        self.score += POINTS_PER_BALL * cleared.len() as u32;
        self.record.submit(self.score);
        cleared
    }

    // Places up to SPAWN_COUNT forecast balls into uniformly random empty
    // cells, fewer when the board runs out of space, then draws the next
    // forecast unconditionally.
    fn spawn_balls(&mut self) -> Vec<Pos> {
        let forecast = self.forecast;
        let mut spawned = Vec::new();
        for ball in forecast {
            let empties = self.board.empty_cells();
            if empties.is_empty() {
                break;
            }
            let pos = empties[self.rng.gen_range(0..empties.len())];
            self.board.set(pos, ball);
            spawned.push(pos);
        }
        self.forecast = draw_forecast(&mut self.rng);
        spawned
    }
}

fn draw_forecast(rng: &mut SmallRng) -> [Cell; SPAWN_COUNT] {
    [
        random_ball_color(rng),
        random_ball_color(rng),
        random_ball_color(rng),
    ]
}
