//! Wire types for puzzle fixture documents.
//!
//! A fixture is a JSON document describing the initial field and the piece
//! catalog:
//!
//! ```json
//! {
//!   "field": {
//!     "width": 3,
//!     "height": 2,
//!     "shape": [[0, 0, -1], [0, 0, 0]]
//!   },
//!   "pieces": [
//!     { "id": 1, "blocks": [[0, 0], [1, 0]] }
//!   ]
//! }
//! ```
//!
//! Cell values use the numeric [`Cell`] encoding: `0` empty, `-1` blocked,
//! positive values an already-placed piece id. Deserialization only checks
//! value shapes; [`Fixture::into_parts`] enforces the cross-field
//! invariants (shape dimensions, id uniqueness) and yields the engine
//! types.

use serde::{Deserialize, Serialize};

use crate::{
    FixtureError,
    core::{Board, Cell, Piece, PieceCatalog},
};

/// A parsed fixture document.
///
/// # Example
///
/// ```
/// use fitgrid_engine::Fixture;
///
/// let json = r#"{
///     "field": { "width": 2, "height": 1, "shape": [[0, 0]] },
///     "pieces": [{ "id": 1, "blocks": [[0, 0], [1, 0]] }]
/// }"#;
/// let fixture: Fixture = serde_json::from_str(json)?;
/// let (board, catalog) = fixture.into_parts()?;
/// assert_eq!(board.width(), 2);
/// assert_eq!(catalog.len(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub field: FieldDef,
    pub pieces: Vec<Piece>,
}

/// The `field` section of a fixture: declared dimensions plus the initial
/// cell grid, outer vector rows top to bottom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    pub width: usize,
    pub height: usize,
    pub shape: Vec<Vec<Cell>>,
}

impl Fixture {
    /// Validates the document and splits it into the initial [`Board`] and
    /// the [`PieceCatalog`].
    pub fn into_parts(self) -> Result<(Board, PieceCatalog), FixtureError> {
        let board = Board::from_rows(self.field.width, self.field.height, self.field.shape)?;
        let catalog = PieceCatalog::new(self.pieces)?;
        Ok((board, catalog))
    }
}
