pub mod board;
pub mod geometry;
pub mod render;
pub mod selection;
pub mod validation;

pub use board::{Block, Board, BoardConfig, BoardError, Cell};
pub use geometry::Bounds;
pub use render::{DrawSurface, Rgb, Theme};
pub use selection::{CellRef, KeyOutcome, Selection};
