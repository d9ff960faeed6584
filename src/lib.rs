//! Tic-tac-toe with a time-traveling move history
//!
//! A single-window tic-tac-toe game built on eframe/egui:
//! - 3x3 grid with click-to-place marks and turn alternation
//! - Win and draw detection over the 8 fixed lines
//! - Linear snapshot history with jump-to-step time travel
//! - Move list rendered in ascending or descending order
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Board representation with per-player bitboards
//! - [`rules`]: Win and draw detection
//! - [`game`]: Snapshot history and the user operations
//! - [`ui`]: Presentation layer built on egui
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{GameState, GameStatus, Mark, Pos};
//!
//! let mut game = GameState::new();
//! game.apply_move(Pos::new(0, 0));
//! game.apply_move(Pos::new(1, 1));
//!
//! assert_eq!(game.history.len(), 3);
//! assert_eq!(game.status(), GameStatus::InProgress { next: Mark::X });
//!
//! // Time travel: jump back one move and branch from there.
//! game.jump_to(1);
//! game.apply_move(Pos::new(2, 2));
//! assert_eq!(game.history.len(), 3);
//! ```

pub mod board;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Mark, Pos, BOARD_SIZE};
pub use game::{GameState, GameStatus, MoveOrder, Snapshot};
pub use rules::{check_winner, WinningLine};
