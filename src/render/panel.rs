// NeonArcade
// copyright agam 2024~2025

//! The Panel owns the screen buffers and the sprites of a render.
//! draw() composites visible sprites in insertion order onto the
//! current buffer, flushes the diff through the adapter and swaps.

use crate::context::Context;
use crate::render::buffer::Buffer;
use crate::render::sprite::Sprite;
use crate::util::Rect;
use std::collections::HashMap;

pub struct Panel {
    pub buffers: [Buffer; 2],
    pub current: usize,
    sprites: Vec<Sprite>,
    tag_index: HashMap<String, usize>,
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel {
    pub fn new() -> Self {
        Self {
            buffers: [Buffer::default(), Buffer::default()],
            current: 0,
            sprites: vec![],
            tag_index: HashMap::new(),
        }
    }

    /// Sizes the screen buffers to the area the adapter was initialized
    /// with. Must run after adapter.init.
    pub fn init(&mut self, ctx: &mut Context) {
        let (width, height) = ctx.adapter.size();
        let area = Rect::new(0, 0, width, height);
        self.buffers = [Buffer::empty(area), Buffer::empty(area)];
        let _ = ctx.adapter.hide_cursor();
    }

    pub fn add_sprite(&mut self, sprite: Sprite, tag: &str) {
        self.tag_index.insert(tag.to_string(), self.sprites.len());
        self.sprites.push(sprite);
    }

    /// Fetch a sprite by tag. Panics on an unknown tag: sprite tags are
    /// compile-time constants in the renders, a typo is a bug.
    pub fn get_sprite(&mut self, tag: &str) -> &mut Sprite {
        let i = *self
            .tag_index
            .get(tag)
            .unwrap_or_else(|| panic!("unknown sprite tag: {}", tag));
        &mut self.sprites[i]
    }

    pub fn draw(&mut self, ctx: &mut Context) -> Result<(), String> {
        let next = 1 - self.current;
        self.buffers[next].reset();
        for sprite in &self.sprites {
            if !sprite.hidden {
                self.buffers[next].merge(&sprite.content);
            }
        }
        ctx.adapter
            .draw_all_to_screen(&self.buffers[next], &self.buffers[self.current])?;
        self.current = next;
        Ok(())
    }

    /// Hands the terminal back. Called once on the way out of run().
    pub fn reset(&mut self, ctx: &mut Context) {
        ctx.adapter.reset();
    }
}
