//! Game state management
//!
//! Owns the linear history of board snapshots, the current step pointer,
//! the turn flag and the move-list display order. All mutation goes
//! through three user actions: placing a mark, jumping to a recorded
//! step, and toggling the display order.
//!
//! History is append-only up to the current step. Placing a mark while an
//! earlier step is displayed discards every later snapshot first, so at
//! most one future branch exists at any time.

use std::fmt;

use tracing::debug;

use crate::board::{Board, Mark, Pos};
use crate::rules::{self, WinningLine};

/// One recorded board configuration in game history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    /// Move that produced this snapshot; `None` for the initial snapshot
    pub last_move: Option<Pos>,
}

impl Snapshot {
    fn initial() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }
}

/// Display order of the move list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOrder {
    Ascending,
    Descending,
}

impl Default for MoveOrder {
    fn default() -> Self {
        MoveOrder::Ascending
    }
}

impl MoveOrder {
    /// The other order
    #[inline]
    pub fn flipped(self) -> MoveOrder {
        match self {
            MoveOrder::Ascending => MoveOrder::Descending,
            MoveOrder::Descending => MoveOrder::Ascending,
        }
    }

    /// Label shown next to the order toggle
    pub fn label(self) -> &'static str {
        match self {
            MoveOrder::Ascending => "Ascending",
            MoveOrder::Descending => "Descending",
        }
    }
}

/// Derived status of the displayed snapshot, recomputed each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Won(WinningLine),
    Draw,
    InProgress { next: Mark },
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Won(line) => write!(f, "Winner: {}", line.mark.letter()),
            GameStatus::Draw => write!(f, "Draw"),
            GameStatus::InProgress { next } => write!(f, "Next player: {}", next.letter()),
        }
    }
}

/// Main game state
pub struct GameState {
    /// Snapshot history, starting with one empty snapshot
    pub history: Vec<Snapshot>,
    /// Index of the displayed snapshot
    pub step: usize,
    /// Turn flag; X moves first and on every even step
    pub x_is_next: bool,
    /// Move-list display order
    pub order: MoveOrder,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            history: vec![Snapshot::initial()],
            step: 0,
            x_is_next: true,
            order: MoveOrder::default(),
        }
    }

    /// Snapshot currently displayed
    #[inline]
    pub fn current(&self) -> &Snapshot {
        &self.history[self.step]
    }

    /// Mark that moves next from the current snapshot
    #[inline]
    pub fn next_mark(&self) -> Mark {
        if self.x_is_next {
            Mark::X
        } else {
            Mark::O
        }
    }

    /// Derived status of the current snapshot; never stored
    pub fn status(&self) -> GameStatus {
        let board = &self.current().board;
        if let Some(line) = rules::check_winner(board) {
            GameStatus::Won(line)
        } else if board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress {
                next: self.next_mark(),
            }
        }
    }

    /// Whether further play from the current snapshot is possible
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self.status(), GameStatus::InProgress { .. })
    }

    /// Attempt to place the current player's mark
    ///
    /// Ignored (state untouched, returns false) when the current snapshot
    /// already has a winner or the target cell is occupied. Otherwise any
    /// snapshots beyond the current step are discarded, the move is
    /// appended as a new snapshot and the turn flag flips.
    pub fn apply_move(&mut self, pos: Pos) -> bool {
        let current = self.current();
        if rules::has_winner(&current.board) || !current.board.is_empty(pos) {
            debug!(?pos, "move ignored");
            return false;
        }

        let mark = self.next_mark();
        let mut board = current.board;
        board.place_mark(pos, mark);

        self.history.truncate(self.step + 1);
        self.history.push(Snapshot {
            board,
            last_move: Some(pos),
        });
        self.step = self.history.len() - 1;
        self.x_is_next = !self.x_is_next;

        debug!(?pos, ?mark, step = self.step, "mark placed");
        true
    }

    /// Jump to a recorded step
    ///
    /// The caller guarantees `step` is in range. The turn flag is
    /// recomputed from step parity (X moves on even steps); the
    /// recomputation, not the previously stored flag, is the source of
    /// truth after a jump.
    pub fn jump_to(&mut self, step: usize) {
        debug_assert!(step < self.history.len());
        self.step = step;
        self.x_is_next = step % 2 == 0;
        debug!(step, "jumped");
    }

    /// Flip the move-list display order; history and step are untouched
    pub fn toggle_order(&mut self) {
        self.order = self.order.flipped();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
