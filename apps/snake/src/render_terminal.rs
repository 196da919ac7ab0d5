use crate::engine::{GameState, GRID_SIZE};
use crate::model::{SnakeModel, REDRAW_EVENT};
use neon_arcade::{
    context::Context,
    event::{event_check, event_register, timer_fire, timer_register},
    game::Render,
    render::panel::Panel,
    render::sprite::Sprite,
    render::style::Color,
};

const COLORS: [Color; 14] = [
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::Gray,
    Color::DarkGray,
    Color::LightRed,
    Color::LightGreen,
    Color::LightBlue,
    Color::LightYellow,
    Color::LightMagenta,
    Color::LightCyan,
];

const TWINKLE_TIMER: &str = "Snake.Twinkle";

pub struct SnakeRender {
    pub panel: Panel,
}

impl Default for SnakeRender {
    fn default() -> Self {
        Self::new()
    }
}

impl SnakeRender {
    pub fn new() -> Self {
        let mut t = Panel::new();

        let mut border = Sprite::new(0, 0, GRID_SIZE + 2, GRID_SIZE + 2);
        draw_frame(&mut border, GRID_SIZE + 2, GRID_SIZE + 2);
        border.set_color_str(3, 0, " NEON SNAKE ", Color::Indexed(222), Color::Reset);
        t.add_sprite(border, "BORDER");

        t.add_sprite(Sprite::new(1, 1, GRID_SIZE, GRID_SIZE), "GRID");
        t.add_sprite(Sprite::new(0, GRID_SIZE + 2, GRID_SIZE + 2, 1), "MSG");

        event_register(REDRAW_EVENT, "draw_grid");
        timer_register(TWINKLE_TIMER, 0.2, "twinkle");
        timer_fire(TWINKLE_TIMER, 0u8);

        Self { panel: t }
    }

    pub fn draw_grid(&mut self, ctx: &mut Context, d: &mut SnakeModel) {
        let snap = d.engine.snapshot();
        let best = ctx.stats.load(&ctx.game_name).score.max(snap.high_score);

        let l = self.panel.get_sprite("GRID");
        l.clear();
        for (i, cell) in snap.body.iter().enumerate() {
            if i == 0 {
                l.set_color_str(cell.x, cell.y, "▇", Color::LightGreen, Color::Reset);
            } else {
                l.set_color_str(cell.x, cell.y, "▒", Color::Green, Color::Reset);
            }
        }
        let fc = COLORS[(ctx.stage / 5) as usize % COLORS.len()];
        l.set_color_str(snap.food.x, snap.food.y, "∙", fc, Color::Reset);

        let ml = self.panel.get_sprite("MSG");
        ml.clear();
        let text = match snap.state {
            GameState::Idle => format!("enter: play  best {}", best),
            GameState::Playing => format!("score {}  hi {}", snap.score, snap.high_score),
            GameState::GameOver => format!("GAME OVER {}  enter", snap.score),
        };
        ml.set_color_str(0, 0, &text, Color::Indexed(222), Color::Reset);
    }

    /// keeps the food twinkling between moves
    pub fn twinkle(&mut self, ctx: &mut Context, d: &mut SnakeModel) {
        let snap = d.engine.snapshot();
        let fc = COLORS[(ctx.stage / 5) as usize % COLORS.len()];
        let l = self.panel.get_sprite("GRID");
        l.set_color_str(snap.food.x, snap.food.y, "∙", fc, Color::Reset);
    }
}

impl Render for SnakeRender {
    type Model = SnakeModel;

    fn init(&mut self, ctx: &mut Context, data: &mut Self::Model) {
        ctx.adapter
            .init(GRID_SIZE + 2, GRID_SIZE + 3, "snake".to_string());
        self.panel.init(ctx);
        self.draw_grid(ctx, data);
    }

    fn handle_event(&mut self, ctx: &mut Context, data: &mut Self::Model, _dt: f32) {
        if event_check(REDRAW_EVENT, "draw_grid") {
            self.draw_grid(ctx, data);
        }
    }

    fn handle_timer(&mut self, ctx: &mut Context, data: &mut Self::Model, _dt: f32) {
        if event_check(TWINKLE_TIMER, "twinkle") {
            self.twinkle(ctx, data);
            timer_fire(TWINKLE_TIMER, 0u8);
        }
    }

    fn draw(&mut self, ctx: &mut Context, _model: &mut Self::Model, _dt: f32) {
        self.panel.draw(ctx).unwrap();
    }
}

/// single-line box frame around the playfield
fn draw_frame(s: &mut Sprite, w: u16, h: u16) {
    for x in 1..w - 1 {
        s.set_color_str(x, 0, "─", Color::DarkGray, Color::Reset);
        s.set_color_str(x, h - 1, "─", Color::DarkGray, Color::Reset);
    }
    for y in 1..h - 1 {
        s.set_color_str(0, y, "│", Color::DarkGray, Color::Reset);
        s.set_color_str(w - 1, y, "│", Color::DarkGray, Color::Reset);
    }
    s.set_color_str(0, 0, "┌", Color::DarkGray, Color::Reset);
    s.set_color_str(w - 1, 0, "┐", Color::DarkGray, Color::Reset);
    s.set_color_str(0, h - 1, "└", Color::DarkGray, Color::Reset);
    s.set_color_str(w - 1, h - 1, "┘", Color::DarkGray, Color::Reset);
}
