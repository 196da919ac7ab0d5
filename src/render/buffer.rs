// NeonArcade
// copyright agam 2024~2025

//! A Buffer maps a screen rectangle to a vector of Cells.
//! Frames are flushed by diffing the previous buffer against the
//! current one, so unchanged cells cost nothing.

use crate::render::cell::Cell;
use crate::render::style::Color;
use crate::util::Rect;

#[derive(Debug, Clone, Default)]
pub struct Buffer {
    pub area: Rect,
    pub content: Vec<Cell>,
}

impl Buffer {
    pub fn empty(area: Rect) -> Buffer {
        let cell = Cell::default();
        Buffer::filled(area, &cell)
    }

    pub fn filled(area: Rect, cell: &Cell) -> Buffer {
        let size = area.area() as usize;
        let mut content = Vec::with_capacity(size);
        for _ in 0..size {
            content.push(cell.clone());
        }
        Buffer { area, content }
    }

    pub fn area(&self) -> &Rect {
        &self.area
    }

    /// Index in content of the cell at (x, y), in buffer-local coords.
    pub fn index_of(&self, x: u16, y: u16) -> usize {
        debug_assert!(x < self.area.width && y < self.area.height);
        (y * self.area.width + x) as usize
    }

    pub fn get(&self, x: u16, y: u16) -> &Cell {
        &self.content[self.index_of(x, y)]
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> &mut Cell {
        let i = self.index_of(x, y);
        &mut self.content[i]
    }

    /// Writes a string at (x, y) with the given colors, clipped at the
    /// right edge.
    pub fn set_color_str(&mut self, x: u16, y: u16, string: &str, fg: Color, bg: Color) {
        if y >= self.area.height {
            return;
        }
        let mut cx = x;
        for ch in string.chars() {
            if cx >= self.area.width {
                break;
            }
            let i = self.index_of(cx, y);
            self.content[i].set_char(ch).set_fg(fg).set_bg(bg);
            cx += 1;
        }
    }

    pub fn set_str(&mut self, x: u16, y: u16, string: &str) {
        self.set_color_str(x, y, string, Color::Reset, Color::Reset);
    }

    pub fn reset(&mut self) {
        for cell in &mut self.content {
            cell.reset();
        }
    }

    /// Copies other into self at other's own area offset, clipped to
    /// self's bounds. Used by the panel to composite sprites.
    pub fn merge(&mut self, other: &Buffer) {
        for oy in 0..other.area.height {
            let sy = other.area.y + oy;
            if sy >= self.area.height {
                break;
            }
            for ox in 0..other.area.width {
                let sx = other.area.x + ox;
                if sx >= self.area.width {
                    break;
                }
                let i = self.index_of(sx, sy);
                self.content[i] = other.get(ox, oy).clone();
            }
        }
    }

    /// Cells of next that differ from self, with their screen positions.
    pub fn diff<'a>(&self, next: &'a Buffer) -> Vec<(u16, u16, &'a Cell)> {
        let mut updates = vec![];
        for (i, (prev, cur)) in self.content.iter().zip(next.content.iter()).enumerate() {
            if prev != cur {
                let x = i as u16 % self.area.width;
                let y = i as u16 / self.area.width;
                updates.push((self.area.x + x, self.area.y + y, cur));
            }
        }
        updates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_color_str_clips() {
        let mut b = Buffer::empty(Rect::new(0, 0, 5, 2));
        b.set_color_str(3, 0, "abcdef", Color::Red, Color::Reset);
        assert_eq!(b.get(3, 0).symbol, "a");
        assert_eq!(b.get(4, 0).symbol, "b");
        // nothing wrapped to the next row
        assert_eq!(b.get(0, 1).symbol, " ");
    }

    #[test]
    fn test_diff_reports_changes_only() {
        let prev = Buffer::empty(Rect::new(0, 0, 4, 4));
        let mut cur = Buffer::empty(Rect::new(0, 0, 4, 4));
        cur.set_str(1, 2, "x");
        let updates = prev.diff(&cur);
        assert_eq!(updates.len(), 1);
        let (x, y, cell) = updates[0];
        assert_eq!((x, y), (1, 2));
        assert_eq!(cell.symbol, "x");
    }

    #[test]
    fn test_merge_offsets_and_clips() {
        let mut screen = Buffer::empty(Rect::new(0, 0, 6, 6));
        let mut spr = Buffer::empty(Rect::new(4, 4, 4, 1));
        spr.set_str(0, 0, "abcd");
        screen.merge(&spr);
        assert_eq!(screen.get(4, 4).symbol, "a");
        assert_eq!(screen.get(5, 4).symbol, "b");
    }
}
