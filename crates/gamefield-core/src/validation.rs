use crate::board::Board;
use crate::selection::CellRef;

/// Decide whether writing `candidate` at `at` keeps the board invariant:
/// unique in its global row, its global column, and its block. An empty
/// candidate never conflicts, and the target cell itself is excluded from
/// every scan, so erasing and rewriting the current value are always legal.
///
/// The three checks are independent pure reads and short-circuit on the
/// first duplicate.
pub fn check_placement(board: &Board, at: CellRef, candidate: Option<char>) -> bool {
    let Some(value) = candidate else {
        return true;
    };
    is_row_unique(board, at, value)
        && is_col_unique(board, at, value)
        && is_block_unique(board, at, value)
}

/// Scan the global row: block row and cell row fixed, both column indices
/// varying across the whole board.
pub fn is_row_unique(board: &Board, at: CellRef, value: char) -> bool {
    for block_col in 0..board.config().grid_amount {
        let block = board.block(at.block_row, block_col);
        for cell_col in 0..board.config().tile_amount {
            let other = CellRef::new(at.block_row, block_col, at.cell_row, cell_col);
            if other == at {
                continue;
            }
            if block.cell(at.cell_row, cell_col).value() == Some(value) {
                return false;
            }
        }
    }
    true
}

/// Scan the global column: block col and cell col fixed, both row indices
/// varying across the whole board.
pub fn is_col_unique(board: &Board, at: CellRef, value: char) -> bool {
    for block_row in 0..board.config().grid_amount {
        let block = board.block(block_row, at.block_col);
        for cell_row in 0..board.config().tile_amount {
            let other = CellRef::new(block_row, at.block_col, cell_row, at.cell_col);
            if other == at {
                continue;
            }
            if block.cell(cell_row, at.cell_col).value() == Some(value) {
                return false;
            }
        }
    }
    true
}

/// Scan the owning block only.
pub fn is_block_unique(board: &Board, at: CellRef, value: char) -> bool {
    for cell in board.block(at.block_row, at.block_col).cells() {
        if cell.row() == at.cell_row && cell.col() == at.cell_col {
            continue;
        }
        if cell.value() == Some(value) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, BoardConfig};

    fn board_2x2() -> Board {
        Board::build(BoardConfig {
            grid_amount: 2,
            tile_amount: 2,
            canvas_size: 8.0,
        })
        .unwrap()
    }

    #[test]
    fn row_scan_crosses_block_boundaries() {
        let mut board = board_2x2();
        assert!(board.set_value(CellRef::new(0, 0, 1, 0), Some('3')));

        // Same global row, neighboring block.
        let at = CellRef::new(0, 1, 1, 1);
        assert!(!is_row_unique(&board, at, '3'));
        assert!(is_col_unique(&board, at, '3'));
        assert!(is_block_unique(&board, at, '3'));
    }

    #[test]
    fn col_scan_crosses_block_boundaries() {
        let mut board = board_2x2();
        assert!(board.set_value(CellRef::new(0, 0, 0, 1), Some('4')));

        let at = CellRef::new(1, 0, 1, 1);
        assert!(!is_col_unique(&board, at, '4'));
        assert!(is_row_unique(&board, at, '4'));
        assert!(is_block_unique(&board, at, '4'));
    }

    #[test]
    fn block_scan_stays_inside_the_block() {
        let mut board = board_2x2();
        assert!(board.set_value(CellRef::new(1, 1, 0, 0), Some('2')));

        // Same block, different row and column.
        assert!(!is_block_unique(&board, CellRef::new(1, 1, 1, 1), '2'));
        // Another block entirely.
        assert!(is_block_unique(&board, CellRef::new(0, 0, 1, 1), '2'));
    }

    #[test]
    fn target_cell_is_excluded_from_every_scan() {
        let mut board = board_2x2();
        let at = CellRef::new(0, 1, 1, 0);
        assert!(board.set_value(at, Some('7')));

        assert!(is_row_unique(&board, at, '7'));
        assert!(is_col_unique(&board, at, '7'));
        assert!(is_block_unique(&board, at, '7'));
        assert!(check_placement(&board, at, Some('7')));
    }

    #[test]
    fn empty_candidate_never_conflicts() {
        let mut board = board_2x2();
        assert!(board.set_value(CellRef::new(0, 0, 0, 0), Some('1')));
        assert!(check_placement(&board, CellRef::new(0, 0, 0, 1), None));
    }

    #[test]
    fn empty_cells_never_count_as_duplicates() {
        let board = board_2x2();
        let at = CellRef::new(1, 0, 0, 0);
        assert!(check_placement(&board, at, Some('1')));
    }
}
