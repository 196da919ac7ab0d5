// NeonArcade
// copyright agam 2024~2025

//! Render adapter interface. The engine talks to the terminal only
//! through this trait, so the game cores and their tests never touch a
//! real tty.

use crate::event::Event;
use crate::render::buffer::Buffer;
use std::time::Duration;

pub mod cross;

pub trait Adapter {
    /// Takes over the terminal: raw mode, alternate screen, mouse capture.
    fn init(&mut self, w: u16, h: u16, title: String);

    /// Gives the terminal back. Must be callable on every exit path.
    fn reset(&mut self);

    /// Screen size set by init.
    fn size(&self) -> (u16, u16);

    /// Polls input for at most timeout, converting raw events into
    /// unified Events. Returns true when the player asked to quit.
    fn poll_event(&mut self, timeout: Duration, es: &mut Vec<Event>) -> bool;

    /// Flushes the difference between two frames to the screen.
    fn draw_all_to_screen(&mut self, current: &Buffer, previous: &Buffer) -> Result<(), String>;

    fn hide_cursor(&mut self) -> Result<(), String>;
    fn show_cursor(&mut self) -> Result<(), String>;
}
