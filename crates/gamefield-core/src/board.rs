use derive_more::{Display, Error};
use log::debug;
use rand::RngExt;
use rand::rng;
use serde::{Deserialize, Serialize};

use crate::geometry::Bounds;
use crate::selection::{CellRef, KeyOutcome, Selection};
use crate::validation;

/// Build-time configuration for a board.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Blocks per board side.
    pub grid_amount: usize,
    /// Cells per block side.
    pub tile_amount: usize,
    /// Side length of the square drawing area, in surface units.
    pub canvas_size: f64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            grid_amount: 3,
            tile_amount: 3,
            canvas_size: 540.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Display, Error)]
pub enum BoardError {
    #[display(
        "invalid board dimensions: {grid_amount} blocks per side, \
         {tile_amount} cells per block side, canvas size {canvas_size}"
    )]
    InvalidDimension {
        grid_amount: usize,
        tile_amount: usize,
        canvas_size: f64,
    },
}

/// A single value slot with its screen bounds.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    row: usize,
    col: usize,
    bounds: Bounds,
    value: Option<char>,
}

impl Cell {
    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn value(&self) -> Option<char> {
        self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }
}

/// A sub-grid of cells; the block-level uniqueness unit.
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    row: usize,
    col: usize,
    bounds: Bounds,
    cells: Vec<Vec<Cell>>,
}

impl Block {
    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn cell(&self, cell_row: usize, cell_col: usize) -> &Cell {
        &self.cells[cell_row][cell_col]
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten()
    }
}

/// The full puzzle surface: a square arrangement of blocks, each a square
/// arrangement of cells, plus the selection state.
///
/// All value writes go through [`Board::set_value`]; there is no other
/// mutation path, so the row/column/block uniqueness invariant holds after
/// every operation.
#[derive(Clone, Debug)]
pub struct Board {
    config: BoardConfig,
    blocks: Vec<Vec<Block>>,
    selection: Selection,
}

impl Board {
    /// Construct a fresh board. Replaces nothing by itself: on error the
    /// caller keeps whatever board it already had.
    pub fn build(config: BoardConfig) -> Result<Self, BoardError> {
        check_dimensions(&config)?;
        debug!(
            "building board: {}x{} blocks of {}x{} cells, canvas {}",
            config.grid_amount,
            config.grid_amount,
            config.tile_amount,
            config.tile_amount,
            config.canvas_size
        );
        Ok(Self {
            blocks: layout_blocks(&config),
            config,
            selection: Selection::Idle,
        })
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Cells per global row or column.
    pub fn span(&self) -> usize {
        self.config.grid_amount * self.config.tile_amount
    }

    pub fn block(&self, block_row: usize, block_col: usize) -> &Block {
        &self.blocks[block_row][block_col]
    }

    /// Blocks in row-major order.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().flatten()
    }

    pub fn cell(&self, at: CellRef) -> &Cell {
        &self.blocks[at.block_row][at.block_col].cells[at.cell_row][at.cell_col]
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn selected(&self) -> Option<CellRef> {
        self.selection.cell()
    }

    /// Recompute every bounds for a new canvas size, keeping the logical
    /// structure, all values, and the selection. Idempotent for equal input.
    pub fn resize(&mut self, new_canvas_size: f64) -> Result<(), BoardError> {
        let config = BoardConfig {
            canvas_size: new_canvas_size,
            ..self.config
        };
        check_dimensions(&config)?;
        self.config = config;

        let block_size = self.config.canvas_size / self.config.grid_amount as f64;
        let cell_size = block_size / self.config.tile_amount as f64;
        for row in self.blocks.iter_mut() {
            for block in row.iter_mut() {
                let origin_x = block.col as f64 * block_size;
                let origin_y = block.row as f64 * block_size;
                block.bounds = Bounds::new(origin_x, origin_y, block_size);
                for cell in block.cells.iter_mut().flatten() {
                    cell.bounds = Bounds::new(
                        origin_x + cell.col as f64 * cell_size,
                        origin_y + cell.row as f64 * cell_size,
                        cell_size,
                    );
                }
            }
        }
        debug!("board resized to canvas {}", new_canvas_size);
        Ok(())
    }

    /// Find the cell whose bounds contain the point. Cell bounds are disjoint
    /// by construction, so at most one cell matches; points outside every
    /// cell yield `None`.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<CellRef> {
        for block in self.blocks() {
            if !block.bounds.contains(x, y) {
                continue;
            }
            for cell in block.cells() {
                if cell.bounds.contains(x, y) {
                    return Some(CellRef::new(block.row, block.col, cell.row, cell.col));
                }
            }
        }
        None
    }

    /// The single gated write path. Validates the candidate against the row,
    /// column, and block; mutates and returns `true` when legal, leaves every
    /// cell untouched and returns `false` on a duplicate. Erasing (a `None`
    /// candidate) and rewriting a cell's current value always succeed.
    pub fn set_value(&mut self, at: CellRef, candidate: Option<char>) -> bool {
        if !validation::check_placement(self, at, candidate) {
            debug!("placement of {:?} at {:?} rejected", candidate, at);
            return false;
        }
        self.blocks[at.block_row][at.block_col].cells[at.cell_row][at.cell_col].value = candidate;
        true
    }

    /// Pointer input: hit-test the point and fully replace the selection with
    /// the result.
    pub fn on_pointer_down(&mut self, x: f64, y: f64) -> Option<CellRef> {
        let hit = self.hit_test(x, y);
        self.selection.update(hit);
        hit
    }

    /// Key input: attempt the gated write on the selected cell. A rejected
    /// write keeps the selection so the player can try another value.
    pub fn on_key_input(&mut self, candidate: Option<char>) -> KeyOutcome {
        match self.selection.cell() {
            None => KeyOutcome::NoSelection,
            Some(at) => {
                if self.set_value(at, candidate) {
                    KeyOutcome::Placed
                } else {
                    KeyOutcome::Rejected
                }
            }
        }
    }

    pub fn deselect(&mut self) {
        self.selection.clear();
    }

    /// The symbols valid on this board: digits first, then uppercase letters
    /// for spans past nine.
    pub fn alphabet(&self) -> Vec<char> {
        (0..self.span().min(35))
            .map(|i| {
                if i < 9 {
                    char::from(b'1' + i as u8)
                } else {
                    char::from(b'A' + (i - 9) as u8)
                }
            })
            .collect()
    }

    /// Seed starter values: every cell independently has `chance_percent`%
    /// odds of receiving a random symbol, placed through the gated write
    /// path. Draws that would break uniqueness are skipped, not retried, so
    /// this makes no promise of a solvable puzzle. Returns how many values
    /// were placed.
    pub fn scatter_values(&mut self, chance_percent: u8) -> usize {
        let alphabet = self.alphabet();
        let mut rng = rng();
        let mut placed = 0;
        for block_row in 0..self.config.grid_amount {
            for block_col in 0..self.config.grid_amount {
                for cell_row in 0..self.config.tile_amount {
                    for cell_col in 0..self.config.tile_amount {
                        if rng.random_range(0..100u8) >= chance_percent.min(100) {
                            continue;
                        }
                        let symbol = alphabet[rng.random_range(0..alphabet.len())];
                        let at = CellRef::new(block_row, block_col, cell_row, cell_col);
                        if self.set_value(at, Some(symbol)) {
                            placed += 1;
                        }
                    }
                }
            }
        }
        debug!("scattered {} starter values", placed);
        placed
    }
}

fn check_dimensions(config: &BoardConfig) -> Result<(), BoardError> {
    if config.grid_amount == 0 || config.tile_amount == 0 || config.canvas_size <= 0.0 {
        return Err(BoardError::InvalidDimension {
            grid_amount: config.grid_amount,
            tile_amount: config.tile_amount,
            canvas_size: config.canvas_size,
        });
    }
    Ok(())
}

fn layout_blocks(config: &BoardConfig) -> Vec<Vec<Block>> {
    let block_size = config.canvas_size / config.grid_amount as f64;
    let cell_size = block_size / config.tile_amount as f64;

    (0..config.grid_amount)
        .map(|block_row| {
            (0..config.grid_amount)
                .map(|block_col| {
                    let origin_x = block_col as f64 * block_size;
                    let origin_y = block_row as f64 * block_size;
                    let cells = (0..config.tile_amount)
                        .map(|row| {
                            (0..config.tile_amount)
                                .map(|col| Cell {
                                    row,
                                    col,
                                    bounds: Bounds::new(
                                        origin_x + col as f64 * cell_size,
                                        origin_y + row as f64 * cell_size,
                                        cell_size,
                                    ),
                                    value: None,
                                })
                                .collect()
                        })
                        .collect();
                    Block {
                        row: block_row,
                        col: block_col,
                        bounds: Bounds::new(origin_x, origin_y, block_size),
                        cells,
                    }
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic() -> Board {
        Board::build(BoardConfig {
            grid_amount: 3,
            tile_amount: 3,
            canvas_size: 9.0,
        })
        .unwrap()
    }

    #[test]
    fn build_lays_out_disjoint_cells() {
        let board = classic();
        assert_eq!(board.span(), 9);

        let block = board.block(1, 2);
        assert_eq!(block.bounds(), Bounds::new(6.0, 3.0, 3.0));
        assert_eq!(block.cell(0, 1).bounds(), Bounds::new(7.0, 3.0, 1.0));
        assert_eq!(block.cells().count(), 9);
    }

    #[test]
    fn alphabet_grows_past_digits() {
        let board = classic();
        assert_eq!(board.alphabet(), vec!['1', '2', '3', '4', '5', '6', '7', '8', '9']);

        let wide = Board::build(BoardConfig {
            grid_amount: 4,
            tile_amount: 3,
            canvas_size: 120.0,
        })
        .unwrap();
        let alphabet = wide.alphabet();
        assert_eq!(alphabet.len(), 12);
        assert_eq!(alphabet[9..], ['A', 'B', 'C']);
    }

    #[test]
    fn scatter_respects_uniqueness() {
        let mut board = classic();
        let placed = board.scatter_values(100);
        assert!(placed > 0);

        for block in board.blocks() {
            for cell in block.cells() {
                let Some(value) = cell.value() else { continue };
                let at = CellRef::new(block.row(), block.col(), cell.row(), cell.col());
                assert!(
                    crate::validation::check_placement(&board, at, Some(value)),
                    "scatter left a duplicate {} at {:?}",
                    value,
                    at
                );
            }
        }
    }

    #[test]
    fn scatter_zero_chance_places_nothing() {
        let mut board = classic();
        assert_eq!(board.scatter_values(0), 0);
        assert!(board.blocks().all(|b| b.cells().all(Cell::is_empty)));
    }
}
