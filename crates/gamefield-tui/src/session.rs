use gamefield_core::{Board, BoardConfig, BoardError, KeyOutcome, Theme};
use log::{info, warn};
use ratatui::layout::Rect;

use crate::config::Preferences;

/// One running game: the board, where its canvas sits on the terminal, and
/// the status line shown under it.
pub struct Session {
    board: Board,
    prefs: Preferences,
    theme: Theme,
    canvas: Rect,
    status: Option<String>,
}

impl Session {
    pub fn new(prefs: Preferences) -> Result<Self, BoardError> {
        let board = Board::build(BoardConfig {
            grid_amount: prefs.grid_amount,
            tile_amount: prefs.tile_amount,
            // Replaced by the first layout() call.
            canvas_size: 9.0,
        })?;
        Ok(Self {
            board,
            prefs,
            theme: Theme::default(),
            canvas: Rect::default(),
            status: None,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn canvas(&self) -> Rect {
        self.canvas
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Place the square canvas in a terminal of the given size (one row is
    /// reserved for the status line) and rescale the board to it.
    pub fn layout(&mut self, width: u16, height: u16) {
        let avail_rows = height.saturating_sub(1);
        let side = (width / 2).min(avail_rows);
        self.canvas = Rect {
            x: (width - side * 2) / 2,
            y: avail_rows.saturating_sub(side) / 2,
            width: side * 2,
            height: side,
        };
        if side > 0 {
            if let Err(e) = self.board.resize(f64::from(side)) {
                warn!("resize to {} rows failed: {}", side, e);
            }
        }
    }

    /// Rebuild the board from the current preferences and scatter starter
    /// values. A failed rebuild keeps the current board and reports why.
    pub fn new_game(&mut self) {
        let config = BoardConfig {
            grid_amount: self.prefs.grid_amount,
            tile_amount: self.prefs.tile_amount,
            canvas_size: f64::from(self.canvas.height.max(1)),
        };
        match Board::build(config) {
            Ok(mut board) => {
                let placed = board.scatter_values(self.prefs.fill_chance);
                info!(
                    "new game: {}x{} blocks, {} starter values",
                    config.grid_amount, config.grid_amount, placed
                );
                self.board = board;
                self.status = Some(format!("New game, {} starter values", placed));
            }
            Err(e) => {
                self.status = Some(format!("Cannot rebuild board: {}", e));
            }
        }
    }

    /// Pointer down in terminal coordinates. Clicks in gaps or outside the
    /// canvas clear the selection.
    pub fn click(&mut self, column: u16, row: u16) {
        let x = (f64::from(column) - f64::from(self.canvas.x)) / 2.0;
        let y = f64::from(row) - f64::from(self.canvas.y);
        self.board.on_pointer_down(x, y);
        self.status = None;
    }

    pub fn enter(&mut self, ch: char) {
        let symbol = ch.to_ascii_uppercase();
        if !self.board.alphabet().contains(&symbol) {
            self.status = Some(format!("'{}' is not a symbol on this board", ch));
            return;
        }
        match self.board.on_key_input(Some(symbol)) {
            KeyOutcome::Placed => self.status = None,
            KeyOutcome::Rejected => {
                self.status = Some(format!(
                    "{} already sits in that row, column, or block",
                    symbol
                ));
            }
            KeyOutcome::NoSelection => {
                self.status = Some("Click a cell first".to_string());
            }
        }
    }

    pub fn erase(&mut self) {
        if self.board.on_key_input(None) == KeyOutcome::NoSelection {
            self.status = Some("Click a cell first".to_string());
        } else {
            self.status = None;
        }
    }

    pub fn deselect(&mut self) {
        self.board.deselect();
        self.status = None;
    }

    /// Grow or shrink the board by whole blocks, persisting the preference.
    pub fn adjust_grid(&mut self, delta: i64) {
        let grid = (self.prefs.grid_amount as i64 + delta).clamp(1, 6) as usize;
        if grid == self.prefs.grid_amount {
            return;
        }
        self.prefs.grid_amount = grid;
        if let Err(e) = self.prefs.save() {
            warn!("could not save preferences: {}", e);
        }
        self.new_game();
    }
}
