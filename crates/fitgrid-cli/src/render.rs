//! Text rendering for boards and pieces.

use fitgrid_engine::{Board, Cell, Piece};

/// The board as display lines, one per row, cells joined by single spaces.
///
/// Empty cells render as `0`, blocked cells as `!`, occupied cells as the
/// occupying piece's id.
pub fn board_lines(board: &Board) -> Vec<String> {
    board
        .rows()
        .map(|row| {
            row.iter()
                .map(|&cell| cell_text(cell))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn cell_text(cell: Cell) -> String {
    match cell {
        Cell::Empty => "0".to_owned(),
        Cell::Blocked => "!".to_owned(),
        Cell::Piece(id) => id.to_string(),
    }
}

/// A piece's shape on its bounding box: the id's digits where a block
/// sits, spaces elsewhere, rows joined without separators.
pub fn piece_lines(piece: &Piece) -> Vec<String> {
    let bounds = piece.bounds();
    let id = piece.id().to_string();
    let mut rows = vec![vec![" "; bounds.width()]; bounds.height()];
    for block in piece.blocks() {
        let x = block.x.abs_diff(bounds.min_x) as usize;
        let y = block.y.abs_diff(bounds.min_y) as usize;
        rows[y][x] = id.as_str();
    }
    rows.into_iter().map(|row| row.concat()).collect()
}

#[cfg(test)]
mod tests {
    use fitgrid_engine::{Offset, PieceId};

    use super::*;

    fn piece(id: u32, blocks: &[(i32, i32)]) -> Piece {
        Piece::new(
            PieceId::new(id),
            blocks.iter().map(|&(x, y)| Offset::new(x, y)).collect(),
        )
    }

    #[test]
    fn test_board_lines_show_every_cell_kind() {
        let rows = vec![
            vec![Cell::Empty, Cell::Blocked, Cell::Empty],
            vec![Cell::Piece(PieceId::new(12)), Cell::Empty, Cell::Empty],
        ];
        let board = Board::from_rows(3, 2, rows).unwrap();
        assert_eq!(board_lines(&board), ["0 ! 0", "12 0 0"]);
    }

    #[test]
    fn test_board_lines_keep_one_line_per_row_at_zero_width() {
        let board = Board::from_rows(0, 2, vec![Vec::new(), Vec::new()]).unwrap();
        assert_eq!(board_lines(&board), ["", ""]);
    }

    #[test]
    fn test_piece_lines_draw_the_bounding_box() {
        let corner = piece(3, &[(0, 0), (0, 1), (1, 1)]);
        assert_eq!(piece_lines(&corner), ["3 ", "33"]);
    }

    #[test]
    fn test_piece_lines_handle_negative_block_offsets() {
        let left_hook = piece(7, &[(0, 0), (-1, 0), (-1, 1)]);
        assert_eq!(piece_lines(&left_hook), ["77", "7 "]);
    }

    #[test]
    fn test_piece_lines_repeat_multi_digit_ids() {
        let bar = piece(12, &[(0, 0), (1, 0)]);
        assert_eq!(piece_lines(&bar), ["1212"]);
    }
}
