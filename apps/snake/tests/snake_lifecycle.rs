//! Whole-session tests driving the snake model through a Context,
//! frame by frame, without a live terminal.

use neon_arcade::context::Context;
use neon_arcade::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use neon_arcade::game::Model;
use neon_arcade::stats::StatsStore;
use snake::engine::GameState;
use snake::model::SnakeModel;

const DT: f32 = 1.0 / 60.0;
// Snake.Move runs 0.15s at 60 fps
const MOVE_FRAMES: usize = 9;

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn new_session(name: &str) -> (SnakeModel, Context) {
    let mut ctx = Context::new(name, ".");
    let stats_path = std::env::temp_dir()
        .join(format!("snake_it_{}_{}", name, std::process::id()))
        .join("stats.json");
    let _ = std::fs::remove_file(&stats_path);
    ctx.stats = StatsStore::open(stats_path);
    let mut model = SnakeModel::new();
    model.init(&mut ctx);
    (model, ctx)
}

fn frames(model: &mut SnakeModel, ctx: &mut Context, n: usize) {
    for _ in 0..n {
        model.update(ctx, DT);
    }
}

#[test]
fn test_idle_until_started() {
    let (mut model, mut ctx) = new_session("snake_idle");
    assert_eq!(model.engine.state(), GameState::Idle);

    // ticks never run while idle
    frames(&mut model, &mut ctx, MOVE_FRAMES * 4);
    assert_eq!(model.engine.state(), GameState::Idle);
    assert_eq!(model.engine.snapshot().body.len(), 1);
}

#[test]
fn test_start_moves_and_records_play() {
    let (mut model, mut ctx) = new_session("snake_start");
    ctx.input_events.push(key(KeyCode::Enter));
    frames(&mut model, &mut ctx, 1);
    assert_eq!(model.engine.state(), GameState::Playing);
    assert_eq!(ctx.state, GameState::Playing as u8);
    assert_eq!(ctx.stats.load("snake_start").plays, 1);

    let head_before = model.engine.snapshot().body[0];
    frames(&mut model, &mut ctx, MOVE_FRAMES);
    let head_after = model.engine.snapshot().body[0];
    // default heading is right
    assert_eq!(head_after.x, head_before.x + 1);
    assert_eq!(head_after.y, head_before.y);
}

#[test]
fn test_keyboard_steering_applies_next_move() {
    let (mut model, mut ctx) = new_session("snake_steer");
    ctx.input_events.push(key(KeyCode::Enter));
    frames(&mut model, &mut ctx, 1);

    ctx.input_events.push(key(KeyCode::Char('w')));
    let head_before = model.engine.snapshot().body[0];
    frames(&mut model, &mut ctx, MOVE_FRAMES);
    let head_after = model.engine.snapshot().body[0];
    assert_eq!(head_after.y, head_before.y - 1);
}

#[test]
fn test_wall_death_freezes_session_and_records_score() {
    let (mut model, mut ctx) = new_session("snake_death");
    ctx.input_events.push(key(KeyCode::Enter));
    frames(&mut model, &mut ctx, 1);
    ctx.input_events.push(key(KeyCode::Up));

    // heading up from the center, the wall is at most 11 moves away
    frames(&mut model, &mut ctx, MOVE_FRAMES * 20);
    assert_eq!(model.engine.state(), GameState::GameOver);
    assert_eq!(ctx.state, GameState::GameOver as u8);

    // frozen: more frames change nothing
    let body: Vec<_> = model.engine.snapshot().body.to_vec();
    let score = model.engine.score();
    frames(&mut model, &mut ctx, MOVE_FRAMES * 4);
    assert_eq!(model.engine.snapshot().body, &body[..]);
    assert_eq!(model.engine.score(), score);

    // final score reached the store
    assert_eq!(ctx.stats.load("snake_death").score, score);
}

#[test]
fn test_restart_resets_session() {
    let (mut model, mut ctx) = new_session("snake_restart");
    ctx.input_events.push(key(KeyCode::Enter));
    frames(&mut model, &mut ctx, 1);
    ctx.input_events.push(key(KeyCode::Up));
    frames(&mut model, &mut ctx, MOVE_FRAMES * 20);
    assert_eq!(model.engine.state(), GameState::GameOver);

    ctx.input_events.push(key(KeyCode::Enter));
    frames(&mut model, &mut ctx, 1);
    assert_eq!(model.engine.state(), GameState::Playing);
    let snap = model.engine.snapshot();
    assert_eq!(snap.score, 0);
    assert_eq!(snap.body.len(), 1);
    assert_eq!(ctx.stats.load("snake_restart").plays, 2);
}

#[test]
fn test_unmapped_keys_are_ignored() {
    let (mut model, mut ctx) = new_session("snake_keys");
    ctx.input_events.push(key(KeyCode::Char('x')));
    ctx.input_events.push(key(KeyCode::Tab));
    ctx.input_events.push(key(KeyCode::Esc));
    frames(&mut model, &mut ctx, 2);
    assert_eq!(model.engine.state(), GameState::Idle);
}
