use crate::engine::{MatchState, CLEAR_BONUS, PAIR_COUNT};
use crate::model::{
    MemoryModel, CARD_H, CARD_W, GRID_COLS, GRID_ROWS, REDRAW_EVENT, TABLE_X, TABLE_Y,
};
use neon_arcade::{
    context::Context,
    event::{event_check, event_register},
    game::Render,
    render::panel::Panel,
    render::sprite::Sprite,
    render::style::Color,
};

const TABLE_W: u16 = CARD_W * GRID_COLS as u16;
const TABLE_H: u16 = CARD_H * GRID_ROWS as u16;
const SCREEN_W: u16 = TABLE_W + 8;
const SCREEN_H: u16 = TABLE_H + 3;

// one symbol and color per pair id
const SYMBOLS: [(&str, Color); PAIR_COUNT] = [
    ("♠", Color::LightCyan),
    ("♥", Color::LightRed),
    ("♦", Color::LightMagenta),
    ("♣", Color::LightGreen),
    ("★", Color::LightYellow),
    ("☼", Color::LightBlue),
];

pub struct MemoryRender {
    pub panel: Panel,
}

impl Default for MemoryRender {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryRender {
    pub fn new() -> Self {
        let mut t = Panel::new();
        t.add_sprite(Sprite::new(TABLE_X, TABLE_Y, TABLE_W, TABLE_H), "TABLE");
        t.add_sprite(Sprite::new(0, TABLE_Y + TABLE_H + 1, SCREEN_W, 1), "MSG");
        event_register(REDRAW_EVENT, "draw_cards");
        Self { panel: t }
    }

    pub fn draw_cards(&mut self, ctx: &mut Context, d: &mut MemoryModel) {
        let cleared = ctx.stats.load(&ctx.game_name).score;
        let l = self.panel.get_sprite("TABLE");
        l.clear();
        for idx in 0..GRID_COLS * GRID_ROWS {
            let cx = (idx % GRID_COLS) as u16 * CARD_W;
            let cy = (idx / GRID_COLS) as u16 * CARD_H;
            let selected = idx == d.cursor;
            let bg = if selected { Color::DarkGray } else { Color::Reset };
            if d.engine.is_face_up(idx) || d.engine.is_solved(idx) {
                let (sym, fg) = SYMBOLS[d.engine.card(idx) as usize];
                let frame = if d.engine.is_solved(idx) {
                    Color::Green
                } else {
                    Color::Gray
                };
                l.set_color_str(cx, cy, "[", frame, bg);
                l.set_color_str(cx + 1, cy, sym, fg, bg);
                l.set_color_str(cx + 2, cy, " ", fg, bg);
                l.set_color_str(cx + 3, cy, "]", frame, bg);
            } else {
                l.set_color_str(cx, cy, "[▒▒]", Color::DarkGray, bg);
            }
        }

        let ml = self.panel.get_sprite("MSG");
        ml.clear();
        let text = match d.engine.state() {
            MatchState::Cleared => {
                format!("CLEARED +{}  enter: again", CLEAR_BONUS)
            }
            _ => format!("score {}  wins {}", d.engine.score(), cleared / 100),
        };
        ml.set_color_str(0, 0, &text, Color::Indexed(222), Color::Reset);
    }
}

impl Render for MemoryRender {
    type Model = MemoryModel;

    fn init(&mut self, ctx: &mut Context, data: &mut Self::Model) {
        ctx.adapter.init(SCREEN_W, SCREEN_H, "memory".to_string());
        self.panel.init(ctx);
        self.draw_cards(ctx, data);
    }

    fn handle_event(&mut self, ctx: &mut Context, data: &mut Self::Model, _dt: f32) {
        if event_check(REDRAW_EVENT, "draw_cards") {
            self.draw_cards(ctx, data);
        }
    }

    fn handle_timer(&mut self, _ctx: &mut Context, _model: &mut Self::Model, _dt: f32) {}

    fn draw(&mut self, ctx: &mut Context, _model: &mut Self::Model, _dt: f32) {
        self.panel.draw(ctx).unwrap();
    }
}
