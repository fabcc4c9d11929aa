use std::io;
use std::time::Duration;

use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyCode, KeyEvent, KeyEventKind,
    MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use futures_util::StreamExt;
use log::info;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::config::Preferences;
use crate::session::Session;
use crate::ui;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async_run())
}

async fn async_run() -> Result<(), Box<dyn std::error::Error>> {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut session = Session::new(Preferences::load())?;
    let size = terminal.size()?;
    session.layout(size.width, size.height);
    session.new_game();
    info!("game starts");

    let result = run_loop(&mut terminal, &mut session).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &mut Session,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut event_stream = EventStream::new();
    let tick_rate = Duration::from_millis(250);

    loop {
        terminal.draw(|f| ui::draw(f, session))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) => {
                        if key.kind != KeyEventKind::Press {
                            continue;
                        }
                        if handle_key(session, key) {
                            return Ok(());
                        }
                    }
                    Some(Ok(Event::Mouse(mouse))) => handle_mouse(session, mouse),
                    Some(Ok(Event::Resize(width, height))) => session.layout(width, height),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => return Ok(()),
                }
            }
            _ = tokio::time::sleep(tick_rate) => {}
        }
    }
}

fn handle_mouse(session: &mut Session, mouse: MouseEvent) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        session.click(mouse.column, mouse.row);
    }
}

fn handle_key(session: &mut Session, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => session.deselect(),
        KeyCode::Backspace | KeyCode::Delete => session.erase(),
        KeyCode::Char(c) => return handle_char(session, c),
        _ => {}
    }
    false
}

fn handle_char(session: &mut Session, c: char) -> bool {
    match c {
        'q' | 'Q' => return true,
        'n' | 'N' => session.new_game(),
        '+' | '=' => session.adjust_grid(1),
        '-' => session.adjust_grid(-1),
        '0' => session.erase(),
        c if c.is_ascii_alphanumeric() => session.enter(c),
        _ => {}
    }
    false
}
