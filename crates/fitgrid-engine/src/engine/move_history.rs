use crate::core::{Board, Offset, PieceId};

/// One recorded placement.
///
/// Carries the full board as it was before the piece went down, so undoing
/// the move is a plain restore rather than a reverse computation. Snapshots
/// are taken before the board mutates; restoring one erases exactly the
/// move it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    /// The piece that was placed.
    pub piece_id: PieceId,
    /// Where its origin went.
    pub offset: Offset,
    /// The board just before this placement.
    pub board_before: Board,
}

impl Move {
    #[must_use]
    pub fn new(piece_id: PieceId, offset: Offset, board_before: Board) -> Self {
        Self {
            piece_id,
            offset,
            board_before,
        }
    }
}

/// The stack of recorded moves, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    moves: Vec<Move>,
}

impl MoveHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: Move) {
        self.moves.push(entry);
    }

    /// Removes and returns the most recent move.
    pub fn pop(&mut self) -> Option<Move> {
        self.moves.pop()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Moves in the order they were played.
    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }
}
