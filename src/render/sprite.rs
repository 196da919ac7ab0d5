// NeonArcade
// copyright agam 2024~2025

//! A Sprite is a named drawing surface: a buffer with a screen offset.
//! Renders keep one sprite per screen region (board, score line,
//! overlay) and repaint only the ones their events mention.

use crate::render::buffer::Buffer;
use crate::render::style::Color;
use crate::util::Rect;

pub struct Sprite {
    pub content: Buffer,
    pub hidden: bool,
}

impl Sprite {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            content: Buffer::empty(Rect::new(x, y, width, height)),
            hidden: false,
        }
    }

    pub fn set_pos(&mut self, x: u16, y: u16) {
        self.content.area.x = x;
        self.content.area.y = y;
    }

    pub fn set_color_str(&mut self, x: u16, y: u16, string: &str, fg: Color, bg: Color) {
        self.content.set_color_str(x, y, string, fg, bg);
    }

    pub fn set_default_str(&mut self, string: &str) {
        self.content.reset();
        self.content.set_str(0, 0, string);
    }

    pub fn clear(&mut self) {
        self.content.reset();
    }
}
