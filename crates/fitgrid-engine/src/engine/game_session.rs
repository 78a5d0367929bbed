use crate::{
    EmptyHistoryError, FixtureError, PlacementError,
    core::{Board, Offset, Piece, PieceCatalog, PieceId},
    engine::{Move, MoveHistory},
    fixture::Fixture,
};

/// The whole state of one puzzle run.
///
/// Owns the board, the catalog, the available/placed piece pools, and the
/// move history. Placements are atomic: [`Self::place_piece`] validates
/// every block before touching anything, so a rejected move leaves the
/// session exactly as it was. Each accepted move records a pre-move board
/// snapshot, which [`Self::undo_last_move`] restores wholesale.
///
/// # Example
///
/// ```
/// use fitgrid_engine::{Fixture, GameSession, Offset, PieceId};
///
/// let fixture: Fixture = serde_json::from_str(
///     r#"{
///         "field": { "width": 2, "height": 2, "shape": [[0, 0], [0, 0]] },
///         "pieces": [
///             { "id": 1, "blocks": [[0, 0], [1, 0]] },
///             { "id": 2, "blocks": [[0, 0], [1, 0]] }
///         ]
///     }"#,
/// )?;
/// let mut session = GameSession::from_fixture(fixture)?;
///
/// session.place_piece(PieceId::new(1), Offset::new(0, 0))?;
/// session.place_piece(PieceId::new(2), Offset::new(0, 1))?;
/// assert!(!session.has_available_pieces());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    catalog: PieceCatalog,
    available: Vec<PieceId>,
    placed: Vec<PieceId>,
    history: MoveHistory,
}

impl GameSession {
    /// Starts a session with every catalog piece available.
    #[must_use]
    pub fn new(board: Board, catalog: PieceCatalog) -> Self {
        let available = catalog.iter().map(Piece::id).collect();
        Self {
            board,
            catalog,
            available,
            placed: Vec::new(),
            history: MoveHistory::new(),
        }
    }

    /// Validates a fixture document and starts a session from it.
    pub fn from_fixture(fixture: Fixture) -> Result<Self, FixtureError> {
        let (board, catalog) = fixture.into_parts()?;
        Ok(Self::new(board, catalog))
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn catalog(&self) -> &PieceCatalog {
        &self.catalog
    }

    /// Pieces still waiting to be placed, in selection order: catalog order
    /// initially, with undone pieces re-queued at the end.
    pub fn available_pieces(&self) -> impl Iterator<Item = &Piece> {
        self.available.iter().map(move |&id| self.lookup(id))
    }

    /// Pieces currently on the board, in placement order.
    pub fn placed_pieces(&self) -> impl Iterator<Item = &Piece> {
        self.placed.iter().map(move |&id| self.lookup(id))
    }

    #[must_use]
    pub fn is_available(&self, id: PieceId) -> bool {
        self.available.contains(&id)
    }

    /// `false` once every piece has been placed, which is the solved state.
    #[must_use]
    pub fn has_available_pieces(&self) -> bool {
        !self.available.is_empty()
    }

    #[must_use]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Places an available piece with its origin at `offset`.
    ///
    /// All blocks are checked before the board mutates, so an `Err` means
    /// nothing changed: the board, the pools, and the history are exactly
    /// as before the call. On success the pre-move board goes into the
    /// history and the piece moves from the available pool to the placed
    /// pool.
    pub fn place_piece(&mut self, id: PieceId, offset: Offset) -> Result<(), PlacementError> {
        let Some(index) = self.available.iter().position(|&available| available == id) else {
            return Err(PlacementError::UnavailablePiece { id });
        };
        let piece = self
            .catalog
            .get(id)
            .expect("available ids always come from the catalog");
        self.board.check_placement(piece, offset)?;

        let snapshot = self.board.clone();
        self.board.fill_piece(piece, offset);
        self.available.remove(index);
        self.placed.push(id);
        self.history.push(Move::new(id, offset, snapshot));
        Ok(())
    }

    /// Takes back the most recent placement.
    ///
    /// Restores the move's pre-move board snapshot and returns the piece to
    /// the back of the available pool. Returns the undone piece's id.
    pub fn undo_last_move(&mut self) -> Result<PieceId, EmptyHistoryError> {
        let Move {
            piece_id,
            board_before,
            ..
        } = self.history.pop().ok_or(EmptyHistoryError)?;
        self.board = board_before;
        self.placed.retain(|&placed| placed != piece_id);
        self.available.push(piece_id);
        Ok(piece_id)
    }

    fn lookup(&self, id: PieceId) -> &Piece {
        self.catalog
            .get(id)
            .expect("available and placed ids always come from the catalog")
    }
}
