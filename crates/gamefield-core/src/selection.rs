/// Non-owning reference to a single cell: block coordinates within the board
/// plus cell coordinates within that block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRef {
    pub block_row: usize,
    pub block_col: usize,
    pub cell_row: usize,
    pub cell_col: usize,
}

impl CellRef {
    pub fn new(block_row: usize, block_col: usize, cell_row: usize, cell_col: usize) -> Self {
        Self {
            block_row,
            block_col,
            cell_row,
            cell_col,
        }
    }

    /// Row index spanning the whole board, crossing block boundaries.
    pub fn global_row(&self, tile_amount: usize) -> usize {
        self.block_row * tile_amount + self.cell_row
    }

    /// Column index spanning the whole board, crossing block boundaries.
    pub fn global_col(&self, tile_amount: usize) -> usize {
        self.block_col * tile_amount + self.cell_col
    }

    /// Check if two cells share a global row, a global column, or a block.
    /// A cell does not see itself.
    pub fn sees(&self, other: CellRef) -> bool {
        if *self == other {
            return false;
        }
        let same_block = self.block_row == other.block_row && self.block_col == other.block_col;
        let same_row = self.block_row == other.block_row && self.cell_row == other.cell_row;
        let same_col = self.block_col == other.block_col && self.cell_col == other.cell_col;
        same_block || same_row || same_col
    }
}

/// Tracks the currently selected cell. Either nothing is selected or exactly
/// one cell is; the transition is purely a function of the latest hit-test
/// result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Idle,
    Selected(CellRef),
}

impl Selection {
    /// Replace the selection with the latest hit-test result.
    pub fn update(&mut self, hit: Option<CellRef>) {
        *self = match hit {
            Some(at) => Selection::Selected(at),
            None => Selection::Idle,
        };
    }

    pub fn clear(&mut self) {
        *self = Selection::Idle;
    }

    pub fn cell(&self) -> Option<CellRef> {
        match self {
            Selection::Selected(at) => Some(*at),
            Selection::Idle => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Selection::Idle)
    }
}

/// What happened to a key press routed at the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The candidate passed validation and the cell was written.
    Placed,
    /// The candidate duplicates a value in its row, column, or block; nothing
    /// changed and the selection is retained.
    Rejected,
    /// No cell is selected; the key press is a no-op.
    NoSelection,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_replaces_prior_state() {
        let mut sel = Selection::default();
        assert!(sel.is_idle());

        let a = CellRef::new(0, 0, 1, 2);
        sel.update(Some(a));
        assert_eq!(sel.cell(), Some(a));

        let b = CellRef::new(2, 1, 0, 0);
        sel.update(Some(b));
        assert_eq!(sel.cell(), Some(b));

        sel.update(None);
        assert!(sel.is_idle());
        assert_eq!(sel.cell(), None);
    }

    #[test]
    fn sees_row_col_and_block() {
        let base = CellRef::new(1, 1, 0, 2);

        // Same block.
        assert!(base.sees(CellRef::new(1, 1, 2, 0)));
        // Same global row: block row and cell row match, columns differ.
        assert!(base.sees(CellRef::new(1, 0, 0, 1)));
        // Same global column: block col and cell col match, rows differ.
        assert!(base.sees(CellRef::new(0, 1, 1, 2)));
        // Shares nothing.
        assert!(!base.sees(CellRef::new(0, 0, 1, 1)));
        // Same block row but a different cell row is not the same global row.
        assert!(!base.sees(CellRef::new(1, 0, 1, 1)));
        // Not itself.
        assert!(!base.sees(base));
    }

    #[test]
    fn global_coordinates() {
        let at = CellRef::new(2, 1, 0, 2);
        assert_eq!(at.global_row(3), 6);
        assert_eq!(at.global_col(3), 5);
    }
}
