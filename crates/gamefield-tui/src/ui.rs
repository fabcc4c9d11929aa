use gamefield_core::render;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::session::Session;
use crate::surface::BufferSurface;

pub fn draw(f: &mut Frame, session: &Session) {
    let area = f.area();
    if area.height == 0 {
        return;
    }

    let canvas = session.canvas().intersection(area);
    if canvas.width >= 2 && canvas.height >= 2 {
        let mut surface = BufferSurface::new(f.buffer_mut(), canvas);
        render::render(session.board(), session.theme(), &mut surface);
    } else {
        let notice = Paragraph::new("Terminal too small").alignment(Alignment::Center);
        f.render_widget(notice, area);
    }

    let status_area = Rect::new(area.x, area.y + area.height - 1, area.width, 1);
    draw_status_line(f, session, status_area);
}

fn draw_status_line(f: &mut Frame, session: &Session, area: Rect) {
    let line = match session.status() {
        Some(status) => Line::from(Span::styled(
            format!(" {}", status),
            Style::default().fg(Color::Yellow),
        )),
        None => Line::from(vec![
            Span::styled(" click", Style::default().fg(Color::Yellow)),
            Span::styled(" select  ", Style::default().fg(Color::Gray)),
            Span::styled("1-9", Style::default().fg(Color::Yellow)),
            Span::styled(" place  ", Style::default().fg(Color::Gray)),
            Span::styled("bksp", Style::default().fg(Color::Yellow)),
            Span::styled(" erase  ", Style::default().fg(Color::Gray)),
            Span::styled("n", Style::default().fg(Color::Yellow)),
            Span::styled(" new  ", Style::default().fg(Color::Gray)),
            Span::styled("+/-", Style::default().fg(Color::Yellow)),
            Span::styled(" blocks  ", Style::default().fg(Color::Gray)),
            Span::styled("q", Style::default().fg(Color::Yellow)),
            Span::styled(" quit", Style::default().fg(Color::Gray)),
        ]),
    };
    f.render_widget(Paragraph::new(line), area);
}
