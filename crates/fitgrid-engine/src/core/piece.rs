use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::FixtureError;

/// A signed cell coordinate (column `x`, row `y`).
///
/// The same type serves two roles, exactly as the fixture format does:
///
/// - a piece-local block offset, relative to the piece's implicit origin
/// - the absolute offset a piece's origin is placed at on the board
///
/// Adding the two yields the absolute cell a block lands on.
///
/// # Example
///
/// ```
/// use fitgrid_engine::Offset;
///
/// let block = Offset::new(1, 0);
/// let placement = Offset::new(2, 2);
/// assert_eq!(block + placement, Offset::new(3, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Add, derive_more::Display)]
#[display("({x}, {y})")]
pub struct Offset {
    /// Column index.
    pub x: i32,
    /// Row index.
    pub y: i32,
}

impl Offset {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise addition, `None` when either component overflows.
    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match (self.x.checked_add(other.x), self.y.checked_add(other.y)) {
            (Some(x), Some(y)) => Some(Self { x, y }),
            _ => None,
        }
    }

    /// Component-wise addition, clamped to the `i32` range.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self {
            x: self.x.saturating_add(other.x),
            y: self.y.saturating_add(other.y),
        }
    }
}

impl Serialize for Offset {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Fixture wire form: a two-element `[x, y]` array.
        (self.x, self.y).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Offset {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (x, y) = <(i32, i32)>::deserialize(deserializer)?;
        Ok(Self { x, y })
    }
}

/// Identifier of a piece in the catalog.
///
/// Ids are positive integers taken from the fixture; id 0 is reserved for
/// the empty-cell sentinel and rejected at catalog construction. Occupied
/// board cells carry the same value, so the id doubles as the cell wire
/// encoding for placed pieces.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct PieceId(u32);

impl PieceId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// Bounding box of a piece's blocks: minimum and maximum x and y.
///
/// Rendering uses this to size a piece's display grid; placement validation
/// never consults it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceBounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl PieceBounds {
    /// Number of columns the box spans.
    #[must_use]
    pub fn width(&self) -> usize {
        self.max_x.abs_diff(self.min_x) as usize + 1
    }

    /// Number of rows the box spans.
    #[must_use]
    pub fn height(&self) -> usize {
        self.max_y.abs_diff(self.min_y) as usize + 1
    }
}

/// A placeable piece: an id plus the block offsets forming its shape.
///
/// Blocks are relative to an implicit local origin and are never rewritten
/// after construction; placing the piece pairs it with an absolute
/// [`Offset`] instead. Serializes in the fixture's
/// `{ "id": 1, "blocks": [[0, 0], [1, 0]] }` form.
///
/// # Example
///
/// ```
/// use fitgrid_engine::{Offset, Piece, PieceId};
///
/// let piece = Piece::new(
///     PieceId::new(1),
///     vec![Offset::new(0, 0), Offset::new(1, 0)],
/// );
/// let covered: Vec<_> = piece.cells_at(Offset::new(2, 2)).collect();
/// assert_eq!(covered, [Offset::new(2, 2), Offset::new(3, 2)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    id: PieceId,
    blocks: Vec<Offset>,
}

impl Piece {
    #[must_use]
    pub fn new(id: PieceId, blocks: Vec<Offset>) -> Self {
        Self { id, blocks }
    }

    #[must_use]
    pub fn id(&self) -> PieceId {
        self.id
    }

    /// The block offsets forming the piece's shape, in definition order.
    #[must_use]
    pub fn blocks(&self) -> &[Offset] {
        &self.blocks
    }

    /// Absolute cells the piece would cover when placed at `offset`, in
    /// block definition order.
    pub fn cells_at(&self, offset: Offset) -> impl Iterator<Item = Offset> + '_ {
        self.blocks.iter().map(move |&block| block + offset)
    }

    /// Bounding box across all blocks.
    ///
    /// A piece without blocks reports a zero-sized box at the origin; the
    /// catalog rejects such pieces at construction, so pieces reaching the
    /// rendering layer always have real bounds.
    #[must_use]
    pub fn bounds(&self) -> PieceBounds {
        let Some((first, rest)) = self.blocks.split_first() else {
            return PieceBounds {
                min_x: 0,
                max_x: 0,
                min_y: 0,
                max_y: 0,
            };
        };
        let mut bounds = PieceBounds {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        for block in rest {
            bounds.min_x = bounds.min_x.min(block.x);
            bounds.max_x = bounds.max_x.max(block.x);
            bounds.min_y = bounds.min_y.min(block.y);
            bounds.max_y = bounds.max_y.max(block.y);
        }
        bounds
    }
}

/// The fixture's pieces, in definition order.
///
/// Construction enforces the catalog invariants the engine relies on: every
/// id is unique and non-zero, and every piece has at least one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceCatalog {
    pieces: Vec<Piece>,
}

impl PieceCatalog {
    pub fn new(pieces: Vec<Piece>) -> Result<Self, FixtureError> {
        for (index, piece) in pieces.iter().enumerate() {
            if piece.id().get() == 0 {
                return Err(FixtureError::ReservedPieceId);
            }
            if piece.blocks().is_empty() {
                return Err(FixtureError::EmptyPiece { id: piece.id() });
            }
            if pieces[..index].iter().any(|earlier| earlier.id() == piece.id()) {
                return Err(FixtureError::DuplicatePieceId { id: piece.id() });
            }
        }
        Ok(Self { pieces })
    }

    /// Looks a piece up by id.
    #[must_use]
    pub fn get(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.iter().find(|piece| piece.id() == id)
    }

    /// Pieces in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}
