use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::{FixtureError, PlacementError, core::{Offset, Piece, PieceId}};

/// One board cell.
///
/// Serializes in the fixture's numeric encoding: `0` for empty, `-1` for
/// blocked, and the (positive) piece id for an occupied cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Cell {
    #[default]
    Empty,
    Blocked,
    Piece(PieceId),
}

impl Cell {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Self::Empty
    }
}

impl Serialize for Cell {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let value = match self {
            Self::Empty => 0,
            Self::Blocked => -1,
            Self::Piece(id) => i64::from(id.get()),
        };
        serializer.serialize_i64(value)
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        match value {
            0 => Ok(Self::Empty),
            -1 => Ok(Self::Blocked),
            other => u32::try_from(other)
                .map(|id| Self::Piece(PieceId::new(id)))
                .map_err(|_| {
                    de::Error::custom(format!(
                        "invalid cell value {other}: expected 0, -1, or a positive piece id"
                    ))
                }),
        }
    }
}

/// The play field: a `width` x `height` grid of [`Cell`]s.
///
/// Coordinates are [`Offset`]s with `x` as the column (`0..width`) and `y`
/// as the row (`0..height`). Cells are stored row-major. Dimensions come
/// from the fixture, so they are runtime values rather than type
/// parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// An all-empty board.
    #[must_use]
    pub fn empty(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    /// Builds a board from fixture rows, checking that the shape matches
    /// the declared dimensions: `height` rows of `width` cells each.
    pub fn from_rows(
        width: usize,
        height: usize,
        rows: Vec<Vec<Cell>>,
    ) -> Result<Self, FixtureError> {
        if rows.len() != height {
            return Err(FixtureError::RowCountMismatch {
                rows: rows.len(),
                height,
            });
        }
        let mut cells = Vec::with_capacity(width * height);
        for (row_index, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(FixtureError::RowWidthMismatch {
                    row: row_index,
                    cells: row.len(),
                    width,
                });
            }
            cells.extend(row);
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The cell at `at`, or `None` when `at` lies outside the board.
    ///
    /// Bounds are checked per axis: `x` against the width and `y` against
    /// the height, so non-square boards accept exactly the cells they
    /// should.
    #[must_use]
    pub fn cell(&self, at: Offset) -> Option<Cell> {
        self.cell_index(at).map(|index| self.cells[index])
    }

    fn cell_index(&self, at: Offset) -> Option<usize> {
        let x = usize::try_from(at.x).ok()?;
        let y = usize::try_from(at.y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Rows top to bottom, each a `width`-long slice. A zero-width board
    /// still yields `height` (empty) rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        (0..self.height).map(move |y| &self.cells[y * self.width..][..self.width])
    }

    /// Checks whether `piece` fits at `offset` without mutating anything.
    ///
    /// Every block must land on an empty in-bounds cell. The error reports
    /// the first block that fails, in block definition order. Coordinate
    /// sums that overflow `i32` count as out of bounds.
    pub fn check_placement(&self, piece: &Piece, offset: Offset) -> Result<(), PlacementError> {
        for &block in piece.blocks() {
            let Some(at) = block.checked_add(offset) else {
                return Err(PlacementError::OutOfBounds {
                    at: block.saturating_add(offset),
                });
            };
            match self.cell(at) {
                None => return Err(PlacementError::OutOfBounds { at }),
                Some(Cell::Empty) => {}
                Some(Cell::Blocked) => return Err(PlacementError::BlockedCell { at }),
                Some(Cell::Piece(by)) => {
                    return Err(PlacementError::OccupiedCell { at, by });
                }
            }
        }
        Ok(())
    }

    /// Writes `piece` onto the board at `offset`.
    ///
    /// Callers must run [`Self::check_placement`] first; filling an
    /// unvalidated placement is a bug in the engine.
    pub fn fill_piece(&mut self, piece: &Piece, offset: Offset) {
        for at in piece.cells_at(offset) {
            let index = self
                .cell_index(at)
                .expect("placement must be validated before filling");
            self.cells[index] = Cell::Piece(piece.id());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domino(id: u32) -> Piece {
        Piece::new(
            PieceId::new(id),
            vec![Offset::new(0, 0), Offset::new(1, 0)],
        )
    }

    #[test]
    fn test_empty_board_cells() {
        let board = Board::empty(2, 3);
        assert_eq!(board.width(), 2);
        assert_eq!(board.height(), 3);
        assert!(board.rows().flatten().all(|cell| cell.is_empty()));
    }

    #[test]
    fn test_cell_lookup_in_and_out_of_bounds() {
        let board = Board::empty(3, 2);
        assert_eq!(board.cell(Offset::new(0, 0)), Some(Cell::Empty));
        assert_eq!(board.cell(Offset::new(2, 1)), Some(Cell::Empty));
        assert_eq!(board.cell(Offset::new(3, 0)), None);
        assert_eq!(board.cell(Offset::new(0, 2)), None);
        assert_eq!(board.cell(Offset::new(-1, 0)), None);
        assert_eq!(board.cell(Offset::new(0, -1)), None);
    }

    #[test]
    fn test_bounds_checked_per_axis() {
        // width 3, height 2: x may reach 2 but y may not.
        let board = Board::empty(3, 2);
        assert!(board.cell(Offset::new(2, 1)).is_some());
        assert!(board.cell(Offset::new(1, 2)).is_none());
    }

    #[test]
    fn test_from_rows_rejects_row_count_mismatch() {
        let result = Board::from_rows(2, 2, vec![vec![Cell::Empty; 2]]);
        assert_eq!(
            result.unwrap_err(),
            FixtureError::RowCountMismatch { rows: 1, height: 2 }
        );
    }

    #[test]
    fn test_from_rows_rejects_row_width_mismatch() {
        let rows = vec![vec![Cell::Empty; 2], vec![Cell::Empty; 3]];
        let result = Board::from_rows(2, 2, rows);
        assert_eq!(
            result.unwrap_err(),
            FixtureError::RowWidthMismatch {
                row: 1,
                cells: 3,
                width: 2,
            }
        );
    }

    #[test]
    fn test_from_rows_keeps_cell_contents() {
        let rows = vec![
            vec![Cell::Empty, Cell::Blocked],
            vec![Cell::Piece(PieceId::new(5)), Cell::Empty],
        ];
        let board = Board::from_rows(2, 2, rows).unwrap();
        assert_eq!(board.cell(Offset::new(1, 0)), Some(Cell::Blocked));
        assert_eq!(
            board.cell(Offset::new(0, 1)),
            Some(Cell::Piece(PieceId::new(5)))
        );
    }

    #[test]
    fn test_cell_serde_encoding() {
        assert_eq!(serde_json::to_string(&Cell::Empty).unwrap(), "0");
        assert_eq!(serde_json::to_string(&Cell::Blocked).unwrap(), "-1");
        assert_eq!(
            serde_json::to_string(&Cell::Piece(PieceId::new(7))).unwrap(),
            "7"
        );
        assert_eq!(serde_json::from_str::<Cell>("0").unwrap(), Cell::Empty);
        assert_eq!(serde_json::from_str::<Cell>("-1").unwrap(), Cell::Blocked);
        assert_eq!(
            serde_json::from_str::<Cell>("3").unwrap(),
            Cell::Piece(PieceId::new(3))
        );
        assert!(serde_json::from_str::<Cell>("-2").is_err());
    }

    #[test]
    fn test_check_placement_accepts_fit() {
        let board = Board::empty(3, 3);
        assert_eq!(board.check_placement(&domino(1), Offset::new(1, 2)), Ok(()));
    }

    #[test]
    fn test_check_placement_reports_out_of_bounds() {
        let board = Board::empty(3, 3);
        assert_eq!(
            board.check_placement(&domino(1), Offset::new(2, 0)),
            Err(PlacementError::OutOfBounds { at: Offset::new(3, 0) })
        );
        assert_eq!(
            board.check_placement(&domino(1), Offset::new(-1, 0)),
            Err(PlacementError::OutOfBounds { at: Offset::new(-1, 0) })
        );
    }

    #[test]
    fn test_check_placement_rejects_overflowing_coordinates() {
        // Blocks listed far-first, so the overflowing sum is evaluated
        // before any in-bounds cell.
        let board = Board::empty(3, 3);
        let reversed = Piece::new(
            PieceId::new(1),
            vec![Offset::new(1, 0), Offset::new(0, 0)],
        );
        assert_eq!(
            board.check_placement(&reversed, Offset::new(i32::MAX, 0)),
            Err(PlacementError::OutOfBounds {
                at: Offset::new(i32::MAX, 0),
            })
        );

        let hooked = Piece::new(
            PieceId::new(2),
            vec![Offset::new(0, -1), Offset::new(0, 0)],
        );
        assert_eq!(
            board.check_placement(&hooked, Offset::new(0, i32::MIN)),
            Err(PlacementError::OutOfBounds {
                at: Offset::new(0, i32::MIN),
            })
        );
    }

    #[test]
    fn test_check_placement_reports_blocked_cell() {
        let rows = vec![
            vec![Cell::Empty, Cell::Blocked, Cell::Empty],
            vec![Cell::Empty; 3],
        ];
        let board = Board::from_rows(3, 2, rows).unwrap();
        assert_eq!(
            board.check_placement(&domino(1), Offset::new(0, 0)),
            Err(PlacementError::BlockedCell { at: Offset::new(1, 0) })
        );
    }

    #[test]
    fn test_check_placement_reports_occupied_cell() {
        let mut board = Board::empty(3, 2);
        board.fill_piece(&domino(4), Offset::new(1, 1));
        assert_eq!(
            board.check_placement(&domino(1), Offset::new(0, 1)),
            Err(PlacementError::OccupiedCell {
                at: Offset::new(1, 1),
                by: PieceId::new(4),
            })
        );
    }

    #[test]
    fn test_fill_piece_writes_every_block() {
        let mut board = Board::empty(3, 2);
        board.fill_piece(&domino(2), Offset::new(0, 1));
        assert_eq!(
            board.cell(Offset::new(0, 1)),
            Some(Cell::Piece(PieceId::new(2)))
        );
        assert_eq!(
            board.cell(Offset::new(1, 1)),
            Some(Cell::Piece(PieceId::new(2)))
        );
        assert_eq!(board.cell(Offset::new(2, 1)), Some(Cell::Empty));
    }

    #[test]
    fn test_rows_iterates_top_to_bottom() {
        let rows = vec![
            vec![Cell::Blocked, Cell::Empty],
            vec![Cell::Empty, Cell::Blocked],
        ];
        let board = Board::from_rows(2, 2, rows.clone()).unwrap();
        let seen: Vec<Vec<Cell>> = board.rows().map(<[Cell]>::to_vec).collect();
        assert_eq!(seen, rows);
    }

    #[test]
    fn test_zero_width_board_still_reports_its_rows() {
        let board = Board::from_rows(0, 2, vec![Vec::new(), Vec::new()]).unwrap();
        assert_eq!(board.rows().count(), 2);
        assert!(board.rows().all(<[Cell]>::is_empty));
    }
}
