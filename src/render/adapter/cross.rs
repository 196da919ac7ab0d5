// NeonArcade
// copyright agam 2024~2025

//! Crossterm implementation of the render adapter.

use crate::{
    event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind},
    render::{adapter::Adapter, buffer::Buffer, style::Color},
};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{DisableMouseCapture, EnableMouseCapture},
    event::{Event as CEvent, KeyCode as CKeyCode, MouseButton as CMouseButton},
    execute, queue,
    style::{Color as CColor, Print, SetBackgroundColor, SetForegroundColor},
    terminal::{
        self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
        SetTitle,
    },
};
use std::io::{self, Write};
use std::time::Duration;

fn to_error<T>(r: io::Result<T>) -> Result<T, String> {
    r.map_err(|e| e.to_string())
}

pub struct CrosstermAdapter {
    pub writer: Box<dyn Write>,
    pub game_name: String,
    width: u16,
    height: u16,
}

impl CrosstermAdapter {
    pub fn new(gn: &str) -> Self {
        let stdout = io::stdout();
        Self {
            writer: Box::new(stdout),
            game_name: gn.to_string(),
            width: 0,
            height: 0,
        }
    }
}

impl Adapter for CrosstermAdapter {
    fn init(&mut self, w: u16, h: u16, title: String) {
        self.width = w;
        self.height = h;
        // warns and exits if the terminal is smaller than the required size
        let (width, height) = terminal::size().unwrap();
        if w > width || h > height {
            panic!(
                "\n\nTerminal too small!\n\
                Render required size:(width: {}, height: {})\n\
                Terminal size:(width : {}, height: {}).\n\n",
                w, h, width, height
            );
        }
        enable_raw_mode().unwrap();
        let mut stdout = io::stdout();
        execute!(
            stdout,
            EnterAlternateScreen,
            EnableMouseCapture,
            SetTitle(title)
        )
        .unwrap();
    }

    fn reset(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.writer, LeaveAlternateScreen, DisableMouseCapture);
        let _ = self.show_cursor();
    }

    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn poll_event(&mut self, timeout: Duration, es: &mut Vec<Event>) -> bool {
        if crossterm::event::poll(timeout).unwrap() {
            let e = crossterm::event::read().unwrap();
            if let Some(et) = input_events_from_cross(&e) {
                es.push(et);
            }
            if let CEvent::Key(key) = e {
                if let CKeyCode::Char('q') = key.code {
                    return true;
                }
            }
        }
        false
    }

    fn draw_all_to_screen(&mut self, current: &Buffer, previous: &Buffer) -> Result<(), String> {
        let updates = previous.diff(current);

        let mut fg = Color::Reset;
        let mut bg = Color::Reset;
        let mut last_pos: Option<(u16, u16)> = None;
        for (x, y, cell) in updates {
            // Move the cursor if the previous location was not (x - 1, y)
            if !matches!(last_pos, Some(p) if x == p.0 + 1 && y == p.1) {
                to_error(queue!(self.writer, MoveTo(x, y)))?;
            }
            last_pos = Some((x, y));
            if cell.fg != fg {
                let color = CColor::from(cell.fg);
                to_error(queue!(self.writer, SetForegroundColor(color)))?;
                fg = cell.fg;
            }
            if cell.bg != bg {
                let color = CColor::from(cell.bg);
                to_error(queue!(self.writer, SetBackgroundColor(color)))?;
                bg = cell.bg;
            }

            to_error(queue!(self.writer, Print(&cell.symbol)))?;
        }
        to_error(queue!(
            self.writer,
            SetForegroundColor(CColor::Reset),
            SetBackgroundColor(CColor::Reset)
        ))?;
        to_error(self.writer.flush())
    }

    fn hide_cursor(&mut self) -> Result<(), String> {
        to_error(execute!(self.writer, Hide))
    }

    fn show_cursor(&mut self) -> Result<(), String> {
        to_error(execute!(self.writer, Show))
    }
}

/// Convert crossterm I/O events to arcade events, for the sake of unified
/// event processing. Keys outside the arcade set are dropped here.
pub fn input_events_from_cross(e: &CEvent) -> Option<Event> {
    match e {
        CEvent::Key(key) => {
            let kc = match key.code {
                CKeyCode::Char(cc) => KeyCode::Char(cc),
                CKeyCode::Up => KeyCode::Up,
                CKeyCode::Down => KeyCode::Down,
                CKeyCode::Left => KeyCode::Left,
                CKeyCode::Right => KeyCode::Right,
                CKeyCode::Enter => KeyCode::Enter,
                CKeyCode::Tab => KeyCode::Tab,
                CKeyCode::Esc => KeyCode::Esc,
                _ => {
                    return None;
                }
            };
            Some(Event::Key(KeyEvent::new(kc, KeyModifiers::NONE)))
        }
        CEvent::Mouse(mouse) => {
            let mk = match mouse.kind {
                crossterm::event::MouseEventKind::Down(b) => MouseEventKind::Down(button_from(b)),
                crossterm::event::MouseEventKind::Up(b) => MouseEventKind::Up(button_from(b)),
                _ => MouseEventKind::Moved,
            };
            Some(Event::Mouse(MouseEvent {
                kind: mk,
                column: mouse.column,
                row: mouse.row,
            }))
        }
        _ => None,
    }
}

fn button_from(b: CMouseButton) -> MouseButton {
    match b {
        CMouseButton::Left => MouseButton::Left,
        CMouseButton::Right => MouseButton::Right,
        CMouseButton::Middle => MouseButton::Middle,
    }
}
