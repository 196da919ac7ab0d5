use crate::engine::{Mark, RoundState};
use crate::model::{TicTacToeModel, BOARD_X, BOARD_Y, CELL_H, CELL_W, REDRAW_EVENT};
use neon_arcade::{
    context::Context,
    event::{event_check, event_register},
    game::Render,
    render::panel::Panel,
    render::sprite::Sprite,
    render::style::Color,
};

const BOARD_W: u16 = CELL_W * 3;
const BOARD_H: u16 = CELL_H * 3;
const SCREEN_W: u16 = BOARD_W + 12;
const SCREEN_H: u16 = BOARD_H + 3;

pub struct TicTacToeRender {
    pub panel: Panel,
}

impl Default for TicTacToeRender {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeRender {
    pub fn new() -> Self {
        let mut t = Panel::new();
        t.add_sprite(Sprite::new(BOARD_X, BOARD_Y, BOARD_W, BOARD_H), "BOARD");
        t.add_sprite(Sprite::new(0, BOARD_Y + BOARD_H + 1, SCREEN_W, 1), "MSG");
        event_register(REDRAW_EVENT, "draw_board");
        Self { panel: t }
    }

    pub fn draw_board(&mut self, ctx: &mut Context, d: &mut TicTacToeModel) {
        let board = *d.engine.board();
        let state = d.engine.state();
        let cursor = d.cursor;
        let wins = ctx.stats.load(&ctx.game_name).score / 100;

        let l = self.panel.get_sprite("BOARD");
        l.clear();
        for idx in 0..board.len() {
            let cx = (idx % 3) as u16 * CELL_W;
            let cy = (idx / 3) as u16 * CELL_H;
            let bg = if idx == cursor && state == RoundState::Playing {
                Color::DarkGray
            } else {
                Color::Reset
            };
            let (sym, fg) = match board[idx] {
                Some(Mark::X) => ("X", Color::LightCyan),
                Some(Mark::O) => ("O", Color::LightMagenta),
                None => ("·", Color::DarkGray),
            };
            for ox in 0..CELL_W - 1 {
                let c = if ox == CELL_W / 2 - 1 { sym } else { " " };
                l.set_color_str(cx + ox, cy, c, fg, bg);
            }
            // box separators
            l.set_color_str(cx + CELL_W - 1, cy, "│", Color::DarkGray, Color::Reset);
            for ox in 0..CELL_W - 1 {
                l.set_color_str(cx + ox, cy + 1, "─", Color::DarkGray, Color::Reset);
            }
            l.set_color_str(cx + CELL_W - 1, cy + 1, "┼", Color::DarkGray, Color::Reset);
        }

        let ml = self.panel.get_sprite("MSG");
        ml.clear();
        let text = match state {
            RoundState::Playing => {
                if d.machine_pending {
                    "o is thinking...".to_string()
                } else {
                    format!("your move  wins {}", wins)
                }
            }
            RoundState::Won(Mark::X) => "YOU WIN  enter: again".to_string(),
            RoundState::Won(Mark::O) => "O WINS  enter: again".to_string(),
            RoundState::Draw => "DRAW  enter: again".to_string(),
        };
        ml.set_color_str(0, 0, &text, Color::Indexed(222), Color::Reset);
    }
}

impl Render for TicTacToeRender {
    type Model = TicTacToeModel;

    fn init(&mut self, ctx: &mut Context, data: &mut Self::Model) {
        ctx.adapter
            .init(SCREEN_W, SCREEN_H, "tictactoe".to_string());
        self.panel.init(ctx);
        self.draw_board(ctx, data);
    }

    fn handle_event(&mut self, ctx: &mut Context, data: &mut Self::Model, _dt: f32) {
        if event_check(REDRAW_EVENT, "draw_board") {
            self.draw_board(ctx, data);
        }
    }

    fn handle_timer(&mut self, _ctx: &mut Context, _model: &mut Self::Model, _dt: f32) {}

    fn draw(&mut self, ctx: &mut Context, _model: &mut Self::Model, _dt: f32) {
        self.panel.draw(ctx).unwrap();
    }
}
