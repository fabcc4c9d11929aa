use gamefield_core::{Bounds, DrawSurface, Rgb};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};

/// [`DrawSurface`] over a rectangle of the terminal buffer.
///
/// Terminal cells are roughly half as wide as they are tall, so one surface
/// unit maps to one row and two columns; board squares stay square on screen.
pub struct BufferSurface<'a> {
    buf: &'a mut Buffer,
    area: Rect,
}

impl<'a> BufferSurface<'a> {
    pub fn new(buf: &'a mut Buffer, area: Rect) -> Self {
        Self { buf, area }
    }

    fn map_rect(&self, bounds: Bounds) -> (u16, u16, u16, u16) {
        let x0 = (bounds.x * 2.0).round().max(0.0) as u16;
        let y0 = bounds.y.round().max(0.0) as u16;
        let x1 = ((bounds.x + bounds.size) * 2.0).round().max(0.0) as u16;
        let y1 = (bounds.y + bounds.size).round().max(0.0) as u16;
        (
            self.area.x + x0.min(self.area.width),
            self.area.y + y0.min(self.area.height),
            self.area.x + x1.min(self.area.width),
            self.area.y + y1.min(self.area.height),
        )
    }

    fn put_glyph(&mut self, col: u16, row: u16, glyph: &str, fg: Color) {
        if let Some(cell) = self.buf.cell_mut((col, row)) {
            cell.set_symbol(glyph).set_fg(fg);
        }
    }
}

fn to_color(color: Rgb) -> Color {
    Color::Rgb(color.0, color.1, color.2)
}

impl DrawSurface for BufferSurface<'_> {
    fn width(&self) -> f64 {
        f64::from(self.area.width) / 2.0
    }

    fn height(&self) -> f64 {
        f64::from(self.area.height)
    }

    fn fill_rect(&mut self, bounds: Bounds, color: Rgb) {
        let (x0, y0, x1, y1) = self.map_rect(bounds);
        let bg = to_color(color);
        for row in y0..y1 {
            for col in x0..x1 {
                if let Some(cell) = self.buf.cell_mut((col, row)) {
                    cell.set_symbol(" ").set_bg(bg);
                }
            }
        }
    }

    fn stroke_rect(&mut self, bounds: Bounds, color: Rgb) {
        let (x0, y0, x1, y1) = self.map_rect(bounds);
        if x1 <= x0 || y1 <= y0 {
            return;
        }
        let fg = to_color(color);
        let (right, bottom) = (x1 - 1, y1 - 1);
        for col in x0..x1 {
            self.put_glyph(col, y0, "─", fg);
            self.put_glyph(col, bottom, "─", fg);
        }
        for row in y0..y1 {
            self.put_glyph(x0, row, "│", fg);
            self.put_glyph(right, row, "│", fg);
        }
        self.put_glyph(x0, y0, "┌", fg);
        self.put_glyph(right, y0, "┐", fg);
        self.put_glyph(x0, bottom, "└", fg);
        self.put_glyph(right, bottom, "┘", fg);
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, _scale: f64, color: Rgb) {
        let mut col = self.area.x + ((x * 2.0).round().max(0.0) as u16).min(self.area.width);
        let row = self.area.y + (y.round().max(0.0) as u16).min(self.area.height);
        if row >= self.area.bottom() {
            return;
        }
        let style = Style::default()
            .fg(to_color(color))
            .add_modifier(Modifier::BOLD);
        for ch in text.chars() {
            if col >= self.area.right() {
                break;
            }
            if let Some(cell) = self.buf.cell_mut((col, row)) {
                cell.set_char(ch).set_style(style);
            }
            col += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn x_axis_is_doubled() {
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);
        let mut surface = BufferSurface::new(&mut buf, area);

        assert_eq!(surface.width(), 10.0);
        assert_eq!(surface.height(), 10.0);

        surface.fill_rect(Bounds::new(1.0, 0.0, 2.0), Rgb(1, 2, 3));

        // Logical [1, 3) maps to columns [2, 6), rows [0, 2).
        assert_eq!(buf.cell((2, 0)).unwrap().bg, Color::Rgb(1, 2, 3));
        assert_eq!(buf.cell((5, 1)).unwrap().bg, Color::Rgb(1, 2, 3));
        assert_eq!(buf.cell((6, 0)).unwrap().bg, Color::Reset);
        assert_eq!(buf.cell((2, 2)).unwrap().bg, Color::Reset);
    }

    #[test]
    fn drawing_is_clamped_to_the_area() {
        let area = Rect::new(2, 1, 8, 4);
        let mut buf = Buffer::empty(Rect::new(0, 0, 12, 6));
        let mut surface = BufferSurface::new(&mut buf, area);

        surface.fill_rect(Bounds::new(-5.0, -5.0, 100.0), Rgb(9, 9, 9));
        surface.draw_text("12345678901234", 0.0, 2.0, 1.0, Rgb(7, 7, 7));

        // Fill and text cover the area but never spill past it.
        assert_eq!(buf.cell((0, 0)).unwrap().bg, Color::Reset);
        assert_eq!(buf.cell((1, 2)).unwrap().bg, Color::Reset);
        assert_eq!(buf.cell((9, 4)).unwrap().bg, Color::Rgb(9, 9, 9));
        assert_eq!(buf.cell((10, 3)).unwrap().bg, Color::Reset);
        assert_eq!(buf.cell((9, 3)).unwrap().fg, Color::Rgb(7, 7, 7));
        assert_eq!(buf.cell((10, 3)).unwrap().fg, Color::Reset);
    }
}
