use crate::engine::{FlipOutcome, MatchState, MemoryEngine, HIDE_DELAY};
use log::info;
use neon_arcade::event::{
    event_check, event_emit, timer_cancel, timer_fire, timer_register, Event, KeyCode,
    MouseButton, MouseEventKind,
};
use neon_arcade::{context::Context, game::Model};

pub const HIDE_TIMER: &str = "Memory.Hide";
pub const REDRAW_EVENT: &str = "Memory.RedrawCards";

// card table layout shared with the render: 4x3 cards, 5x2 boxes
pub const GRID_COLS: usize = 4;
pub const GRID_ROWS: usize = 3;
pub const TABLE_X: u16 = 1;
pub const TABLE_Y: u16 = 1;
pub const CARD_W: u16 = 5;
pub const CARD_H: u16 = 2;

/// Screen position to card index, None outside the table.
pub fn card_at(column: u16, row: u16) -> Option<usize> {
    if column < TABLE_X || row < TABLE_Y {
        return None;
    }
    let cx = ((column - TABLE_X) / CARD_W) as usize;
    let cy = ((row - TABLE_Y) / CARD_H) as usize;
    if cx < GRID_COLS && cy < GRID_ROWS {
        Some(cy * GRID_COLS + cx)
    } else {
        None
    }
}

pub struct MemoryModel {
    pub engine: MemoryEngine,
    pub cursor: usize,
}

impl Default for MemoryModel {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryModel {
    pub fn new() -> Self {
        Self {
            engine: MemoryEngine::new(),
            cursor: 0,
        }
    }

    fn move_cursor(&mut self, dx: i32, dy: i32) {
        let col = (self.cursor % GRID_COLS) as i32 + dx;
        let row = (self.cursor / GRID_COLS) as i32 + dy;
        if (0..GRID_COLS as i32).contains(&col) && (0..GRID_ROWS as i32).contains(&row) {
            self.cursor = (row * GRID_COLS as i32 + col) as usize;
            event_emit(REDRAW_EVENT);
        }
    }

    fn pick(&mut self, ctx: &mut Context, idx: usize) {
        match self.engine.flip(idx) {
            FlipOutcome::Ignored => return,
            FlipOutcome::Mismatched => {
                timer_fire(HIDE_TIMER, 0u8);
            }
            FlipOutcome::Cleared => {
                info!("board cleared, score {}", self.engine.score());
                ctx.stats.record_win(&ctx.game_name);
            }
            FlipOutcome::Revealed | FlipOutcome::Matched => {}
        }
        event_emit(REDRAW_EVENT);
    }

    fn restart(&mut self, ctx: &mut Context) {
        timer_cancel(HIDE_TIMER, true);
        self.engine.reset(&mut ctx.rand);
        ctx.stats.record_play(&ctx.game_name);
        event_emit(REDRAW_EVENT);
    }
}

impl Model for MemoryModel {
    fn init(&mut self, ctx: &mut Context) {
        timer_register(HIDE_TIMER, HIDE_DELAY, "hide_mismatch");
        ctx.input_events.clear();
        ctx.rand.srand_now();
        self.engine.reset(&mut ctx.rand);
        ctx.stats.record_play(&ctx.game_name);
        ctx.state = self.engine.state() as u8;
        event_emit(REDRAW_EVENT);
    }

    fn handle_input(&mut self, ctx: &mut Context, _dt: f32) {
        let es = ctx.input_events.clone();
        for e in &es {
            match e {
                Event::Key(key) => match key.code {
                    KeyCode::Char('w') | KeyCode::Up => self.move_cursor(0, -1),
                    KeyCode::Char('s') | KeyCode::Down => self.move_cursor(0, 1),
                    KeyCode::Char('a') | KeyCode::Left => self.move_cursor(-1, 0),
                    KeyCode::Char('d') | KeyCode::Right => self.move_cursor(1, 0),
                    KeyCode::Enter | KeyCode::Char(' ') => {
                        if self.engine.state() == MatchState::Cleared {
                            self.restart(ctx);
                        } else {
                            self.pick(ctx, self.cursor);
                        }
                    }
                    KeyCode::Char('r') => self.restart(ctx),
                    _ => {}
                },
                Event::Mouse(mouse) => {
                    if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                        if let Some(idx) = card_at(mouse.column, mouse.row) {
                            self.cursor = idx;
                            self.pick(ctx, idx);
                        }
                    }
                }
            }
        }
        ctx.input_events.clear();
        ctx.state = self.engine.state() as u8;
    }

    fn handle_timer(&mut self, ctx: &mut Context, _dt: f32) {
        if event_check(HIDE_TIMER, "hide_mismatch") {
            self.engine.hide_mismatch();
            ctx.state = self.engine.state() as u8;
            event_emit(REDRAW_EVENT);
        }
    }

    fn handle_event(&mut self, _ctx: &mut Context, _dt: f32) {}
    fn handle_auto(&mut self, _ctx: &mut Context, _dt: f32) {}
}
