use crate::engine::{GameState, SnakeEngine, MOVE_INTERVAL};
use log::info;
use neon_arcade::event::{
    event_check, event_emit, timer_cancel, timer_fire, timer_register, Event, KeyCode,
};
use neon_arcade::{context::Context, game::Model, util::Dir};

pub const MOVE_TIMER: &str = "Snake.Move";
pub const REDRAW_EVENT: &str = "Snake.RedrawGrid";

/// Model glue: feeds input and the move timer into the engine.
/// All rules live in engine.rs.
pub struct SnakeModel {
    pub engine: SnakeEngine,
}

impl Default for SnakeModel {
    fn default() -> Self {
        Self::new()
    }
}

impl SnakeModel {
    pub fn new() -> Self {
        Self {
            engine: SnakeEngine::new(),
        }
    }

    fn start(&mut self, ctx: &mut Context) {
        self.engine.start(&mut ctx.rand);
        ctx.stats.record_play(&ctx.game_name);
        timer_fire(MOVE_TIMER, 0u8);
        info!("snake session started");
        event_emit(REDRAW_EVENT);
    }

    fn step(&mut self, ctx: &mut Context) {
        self.engine.tick(&mut ctx.rand);
        if self.engine.state() == GameState::GameOver {
            // leaving playing always disarms the clock
            timer_cancel(MOVE_TIMER, true);
            ctx.stats.record_score(&ctx.game_name, self.engine.score());
            info!("game over, score {}", self.engine.score());
        } else {
            timer_fire(MOVE_TIMER, 0u8);
        }
        event_emit(REDRAW_EVENT);
    }
}

impl Model for SnakeModel {
    fn init(&mut self, ctx: &mut Context) {
        timer_register(MOVE_TIMER, MOVE_INTERVAL, "snake_step");
        ctx.input_events.clear();
        ctx.state = self.engine.state() as u8;
        ctx.rand.srand_now();
        event_emit(REDRAW_EVENT);
    }

    fn handle_input(&mut self, ctx: &mut Context, _dt: f32) {
        let es = ctx.input_events.clone();
        for e in &es {
            if let Event::Key(key) = e {
                match key.code {
                    KeyCode::Char('w') | KeyCode::Up => self.engine.steer(Dir::Up),
                    KeyCode::Char('s') | KeyCode::Down => self.engine.steer(Dir::Down),
                    KeyCode::Char('a') | KeyCode::Left => self.engine.steer(Dir::Left),
                    KeyCode::Char('d') | KeyCode::Right => self.engine.steer(Dir::Right),
                    KeyCode::Enter | KeyCode::Char(' ') => {
                        if self.engine.state() != GameState::Playing {
                            self.start(ctx);
                        }
                    }
                    _ => {}
                }
            }
        }
        ctx.input_events.clear();
        ctx.state = self.engine.state() as u8;
    }

    fn handle_timer(&mut self, ctx: &mut Context, _dt: f32) {
        if event_check(MOVE_TIMER, "snake_step") && self.engine.state() == GameState::Playing {
            self.step(ctx);
            ctx.state = self.engine.state() as u8;
        }
    }

    fn handle_event(&mut self, _ctx: &mut Context, _dt: f32) {}
    fn handle_auto(&mut self, _ctx: &mut Context, _dt: f32) {}
}
