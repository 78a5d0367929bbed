pub use self::{core::*, engine::*, fixture::*};

pub mod core;
pub mod engine;
pub mod fixture;

/// Rejection reasons for [`GameSession::place_piece`](engine::GameSession::place_piece).
///
/// Every variant is recoverable: a rejected placement leaves the session
/// exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlacementError {
    /// The id is unknown, or the piece has already been placed.
    #[display("piece {id} is not available")]
    UnavailablePiece { id: PieceId },
    /// A block would land outside the board.
    #[display("cell {at} is outside the board")]
    OutOfBounds { at: Offset },
    /// A block would land on a permanently blocked cell.
    #[display("cell {at} is blocked")]
    BlockedCell { at: Offset },
    /// A block would land on a cell an earlier placement already covers.
    #[display("cell {at} is already occupied by piece {by}")]
    OccupiedCell { at: Offset, by: PieceId },
}

/// Returned by [`GameSession::undo_last_move`](engine::GameSession::undo_last_move)
/// when no moves have been recorded. A recoverable no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("no moves to undo")]
pub struct EmptyHistoryError;

/// Failures turning a fixture document into a board and a piece catalog.
///
/// Any of these makes the fixture unusable, so they are fatal for the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum FixtureError {
    /// The `shape` array does not have `height` rows.
    #[display("field shape has {rows} rows, expected {height}")]
    RowCountMismatch { rows: usize, height: usize },
    /// A `shape` row does not have `width` cells.
    #[display("field shape row {row} has {cells} cells, expected {width}")]
    RowWidthMismatch { row: usize, cells: usize, width: usize },
    /// Piece id 0 collides with the empty-cell sentinel.
    #[display("piece id 0 is reserved for empty cells")]
    ReservedPieceId,
    /// Two catalog pieces share an id.
    #[display("duplicate piece id {id}")]
    DuplicatePieceId { id: PieceId },
    /// A piece defines no blocks at all.
    #[display("piece {id} has no blocks")]
    EmptyPiece { id: PieceId },
}
