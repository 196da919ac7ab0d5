use crate::engine::{Mark, RoundState, TicTacToeEngine, MACHINE_DELAY};
use log::info;
use neon_arcade::event::{
    event_check, event_emit, timer_cancel, timer_fire, timer_register, Event, KeyCode,
    MouseButton, MouseEventKind,
};
use neon_arcade::{context::Context, game::Model};

pub const MACHINE_TIMER: &str = "Ttt.Machine";
pub const REDRAW_EVENT: &str = "Ttt.RedrawBoard";

// board layout shared with the render: 4x2 boxes starting at (1, 1)
pub const BOARD_X: u16 = 1;
pub const BOARD_Y: u16 = 1;
pub const CELL_W: u16 = 4;
pub const CELL_H: u16 = 2;

/// Screen position to board square, None outside the board.
pub fn cell_at(column: u16, row: u16) -> Option<usize> {
    if column < BOARD_X || row < BOARD_Y {
        return None;
    }
    let cx = (column - BOARD_X) / CELL_W;
    let cy = (row - BOARD_Y) / CELL_H;
    if cx < 3 && cy < 3 {
        Some((cy * 3 + cx) as usize)
    } else {
        None
    }
}

pub struct TicTacToeModel {
    pub engine: TicTacToeEngine,
    pub cursor: usize,
    /// the machine answer is pending on the delay timer
    pub machine_pending: bool,
}

impl Default for TicTacToeModel {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeModel {
    pub fn new() -> Self {
        Self {
            engine: TicTacToeEngine::new(),
            cursor: 4,
            machine_pending: false,
        }
    }

    fn move_cursor(&mut self, dx: i32, dy: i32) {
        let col = (self.cursor % 3) as i32 + dx;
        let row = (self.cursor / 3) as i32 + dy;
        if (0..3).contains(&col) && (0..3).contains(&row) {
            self.cursor = (row * 3 + col) as usize;
            event_emit(REDRAW_EVENT);
        }
    }

    fn play_square(&mut self, ctx: &mut Context, idx: usize) {
        if self.machine_pending {
            return;
        }
        if !self.engine.place(idx, Mark::X) {
            return;
        }
        match self.engine.state() {
            RoundState::Playing => {
                self.machine_pending = true;
                timer_fire(MACHINE_TIMER, 0u8);
            }
            RoundState::Won(Mark::X) => {
                info!("round won");
                ctx.stats.record_win(&ctx.game_name);
            }
            _ => {}
        }
        event_emit(REDRAW_EVENT);
    }

    fn restart(&mut self, ctx: &mut Context) {
        // a pending machine answer must not land on the fresh board
        timer_cancel(MACHINE_TIMER, true);
        self.machine_pending = false;
        self.engine.reset();
        ctx.stats.record_play(&ctx.game_name);
        event_emit(REDRAW_EVENT);
    }
}

impl Model for TicTacToeModel {
    fn init(&mut self, ctx: &mut Context) {
        timer_register(MACHINE_TIMER, MACHINE_DELAY, "machine_move");
        ctx.input_events.clear();
        ctx.rand.srand_now();
        ctx.stats.record_play(&ctx.game_name);
        ctx.state = self.engine.state_code();
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
                        if self.engine.state() == RoundState::Playing {
                            self.play_square(ctx, self.cursor);
                        } else {
                            self.restart(ctx);
                        }
                    }
                    KeyCode::Char('r') => self.restart(ctx),
                    _ => {}
                },
                Event::Mouse(mouse) => {
                    if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                        if let Some(idx) = cell_at(mouse.column, mouse.row) {
                            self.cursor = idx;
                            if self.engine.state() == RoundState::Playing {
                                self.play_square(ctx, idx);
                            }
                        }
                    }
                }
            }
        }
        ctx.input_events.clear();
        ctx.state = self.engine.state_code();
    }

    fn handle_timer(&mut self, ctx: &mut Context, _dt: f32) {
        if event_check(MACHINE_TIMER, "machine_move") && self.machine_pending {
            self.machine_pending = false;
            self.engine.machine_move(&mut ctx.rand);
            ctx.state = self.engine.state_code();
            event_emit(REDRAW_EVENT);
        }
    }

    fn handle_event(&mut self, _ctx: &mut Context, _dt: f32) {}
    fn handle_auto(&mut self, _ctx: &mut Context, _dt: f32) {}
}
