//! Session tests driving the memory model frame by frame, including the
//! mismatch hide delay running on the timer center.

use memory::engine::{MatchState, CARD_COUNT, MATCH_SCORE};
use memory::model::{card_at, MemoryModel, CARD_W, TABLE_X, TABLE_Y};
use neon_arcade::context::Context;
use neon_arcade::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use neon_arcade::game::Model;
use neon_arcade::stats::StatsStore;

const DT: f32 = 1.0 / 60.0;
// Memory.Hide runs 0.8s at 60 fps
const HIDE_FRAMES: usize = 48;

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn click_card(idx: usize) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: TABLE_X + (idx % 4) as u16 * CARD_W,
        row: TABLE_Y + (idx / 4) as u16 * 2,
    })
}

fn new_session(name: &str) -> (MemoryModel, Context) {
    let mut ctx = Context::new(name, ".");
    let stats_path = std::env::temp_dir()
        .join(format!("memory_it_{}_{}", name, std::process::id()))
        .join("stats.json");
    let _ = std::fs::remove_file(&stats_path);
    ctx.stats = StatsStore::open(stats_path);
    let mut model = MemoryModel::new();
    model.init(&mut ctx);
    (model, ctx)
}

fn frames(model: &mut MemoryModel, ctx: &mut Context, n: usize) {
    for _ in 0..n {
        model.update(ctx, DT);
    }
}

/// positions of both cards of the given symbol
fn find_pair(model: &MemoryModel, symbol: u8) -> (usize, usize) {
    let mut it = (0..CARD_COUNT).filter(|&i| model.engine.card(i) == symbol);
    (it.next().unwrap(), it.next().unwrap())
}

/// two cards of different symbols
fn find_mismatch(model: &MemoryModel) -> (usize, usize) {
    let a = 0;
    let b = (1..CARD_COUNT)
        .find(|&i| model.engine.card(i) != model.engine.card(a))
        .unwrap();
    (a, b)
}

#[test]
fn test_card_at_maps_table_and_rejects_outside() {
    assert_eq!(card_at(TABLE_X, TABLE_Y), Some(0));
    assert_eq!(card_at(TABLE_X + CARD_W, TABLE_Y), Some(1));
    assert_eq!(card_at(TABLE_X + 3 * CARD_W, TABLE_Y + 5), Some(11));
    assert_eq!(card_at(0, TABLE_Y), None);
    assert_eq!(card_at(TABLE_X + 4 * CARD_W, TABLE_Y), None);
}

#[test]
fn test_clicked_match_solves_pair() {
    let (mut model, mut ctx) = new_session("memory_match");
    let (a, b) = find_pair(&model, model.engine.card(0));
    ctx.input_events.push(click_card(a));
    ctx.input_events.push(click_card(b));
    frames(&mut model, &mut ctx, 1);
    assert!(model.engine.is_solved(a) && model.engine.is_solved(b));
    assert_eq!(model.engine.score(), MATCH_SCORE);
}

#[test]
fn test_mismatch_hides_after_delay() {
    let (mut model, mut ctx) = new_session("memory_hide");
    let (a, b) = find_mismatch(&model);
    ctx.input_events.push(click_card(a));
    ctx.input_events.push(click_card(b));
    frames(&mut model, &mut ctx, 1);
    assert_eq!(model.engine.state(), MatchState::Checking);
    assert!(model.engine.is_face_up(a) && model.engine.is_face_up(b));

    // picks are frozen during the delay
    let other = (0..CARD_COUNT)
        .find(|&i| i != a && i != b && !model.engine.is_face_up(i))
        .unwrap();
    ctx.input_events.push(click_card(other));
    frames(&mut model, &mut ctx, 1);
    assert!(!model.engine.is_face_up(other));

    // one frame before the delay ends the pair is still visible
    frames(&mut model, &mut ctx, HIDE_FRAMES - 3);
    assert!(model.engine.is_face_up(a));

    frames(&mut model, &mut ctx, 3);
    assert_eq!(model.engine.state(), MatchState::Picking);
    assert!(!model.engine.is_face_up(a) && !model.engine.is_face_up(b));
}

#[test]
fn test_keyboard_cursor_pick() {
    let (mut model, mut ctx) = new_session("memory_cursor");
    // cursor starts at 0; move right once and pick card 1
    ctx.input_events.push(key(KeyCode::Right));
    ctx.input_events.push(key(KeyCode::Enter));
    frames(&mut model, &mut ctx, 1);
    assert!(model.engine.is_face_up(1));
}

#[test]
fn test_clearing_records_win_and_restart_reshuffles() {
    let (mut model, mut ctx) = new_session("memory_clear");
    for s in 0..6u8 {
        let (a, b) = find_pair(&model, s);
        ctx.input_events.push(click_card(a));
        ctx.input_events.push(click_card(b));
        frames(&mut model, &mut ctx, 1);
    }
    assert_eq!(model.engine.state(), MatchState::Cleared);
    assert_eq!(model.engine.score(), 6 * MATCH_SCORE + 500);
    assert_eq!(ctx.stats.load("memory_clear").score, 100);

    ctx.input_events.push(key(KeyCode::Enter));
    frames(&mut model, &mut ctx, 1);
    assert_eq!(model.engine.state(), MatchState::Picking);
    assert_eq!(model.engine.score(), 0);
    assert_eq!(ctx.stats.load("memory_clear").plays, 2);
}
