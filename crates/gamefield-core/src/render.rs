use crate::board::Board;
use crate::geometry::Bounds;
use crate::selection::CellRef;

/// 24-bit color handed to the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// The drawing-surface collaborator. The engine only ever fills rectangles,
/// strokes rectangles, and places text; backends map those onto whatever
/// they actually draw with.
pub trait DrawSurface {
    /// Drawable width in surface units.
    fn width(&self) -> f64;
    /// Drawable height in surface units.
    fn height(&self) -> f64;
    fn fill_rect(&mut self, bounds: Bounds, color: Rgb);
    fn stroke_rect(&mut self, bounds: Bounds, color: Rgb);
    /// `scale` is the nominal glyph height in surface units.
    fn draw_text(&mut self, text: &str, x: f64, y: f64, scale: f64, color: Rgb);
}

/// Board palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub background: Rgb,
    pub cell_fill: Rgb,
    pub cell_outline: Rgb,
    /// Cells sharing the selected cell's row, column, or block.
    pub cross_fill: Rgb,
    pub selected_fill: Rgb,
    pub value_text: Rgb,
    pub value_text_highlight: Rgb,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Rgb(18, 18, 18),
            cell_fill: Rgb(36, 58, 110),
            cell_outline: Rgb(10, 10, 10),
            cross_fill: Rgb(227, 227, 199),
            selected_fill: Rgb(222, 178, 44),
            value_text: Rgb(222, 214, 196),
            value_text_highlight: Rgb(92, 52, 30),
        }
    }
}

/// Redraw the whole board: background, then per cell a fill (cross and
/// selection colors take precedence), an outline, and the value glyph for
/// non-empty cells. No dirty-region tracking; callers re-render on any
/// mutation.
pub fn render(board: &Board, theme: &Theme, surface: &mut dyn DrawSurface) {
    let canvas = board.config().canvas_size;
    surface.fill_rect(Bounds::new(0.0, 0.0, canvas), theme.background);

    let selected = board.selected();
    for block in board.blocks() {
        for cell in block.cells() {
            let at = CellRef::new(block.row(), block.col(), cell.row(), cell.col());
            let (fill, highlighted) = match selected {
                Some(base) if base == at => (theme.selected_fill, true),
                Some(base) if base.sees(at) => (theme.cross_fill, true),
                _ => (theme.cell_fill, false),
            };

            let bounds = cell.bounds();
            surface.fill_rect(bounds, fill);
            surface.stroke_rect(bounds, theme.cell_outline);

            if let Some(value) = cell.value() {
                let color = if highlighted {
                    theme.value_text_highlight
                } else {
                    theme.value_text
                };
                surface.draw_text(
                    &value.to_string(),
                    bounds.x + bounds.size * 0.4,
                    bounds.y + bounds.size * 0.5,
                    bounds.size * 0.6,
                    color,
                );
            }
        }
    }
}
