//! Game logic and session state.
//!
//! This module provides the high-level logic that orchestrates the core
//! data structures into a playable puzzle:
//!
//! - [`GameSession`] - The whole game state: board, piece availability, and
//!   move history
//! - [`Move`] - One recorded placement, with the board as it was before
//! - [`MoveHistory`] - The stack of recorded moves that undo unwinds
//!
//! # Game Flow
//!
//! A session progresses as follows:
//!
//! 1. Build a [`GameSession`] from a [`Fixture`](crate::Fixture)
//! 2. Place available pieces with [`GameSession::place_piece`]; rejected
//!    placements leave the session untouched
//! 3. Take back mistakes with [`GameSession::undo_last_move`]
//! 4. The puzzle is solved once no pieces remain available
//!
//! # Example
//!
//! ```
//! use fitgrid_engine::{GameSession, Offset, PieceId};
//! # use fitgrid_engine::{Board, Piece, PieceCatalog};
//!
//! # let board = Board::empty(2, 1);
//! # let catalog = PieceCatalog::new(vec![Piece::new(
//! #     PieceId::new(1),
//! #     vec![Offset::new(0, 0), Offset::new(1, 0)],
//! # )])?;
//! let mut session = GameSession::new(board, catalog);
//!
//! session.place_piece(PieceId::new(1), Offset::new(0, 0))?;
//! assert!(!session.has_available_pieces());
//!
//! let undone = session.undo_last_move()?;
//! assert_eq!(undone, PieceId::new(1));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{game_session::*, move_history::*};

mod game_session;
mod move_history;
