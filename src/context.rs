// NeonArcade
// copyright agam 2024~2025

//! Context encapsulates the variables shared by model and render:
//! stage, state, input events, the session RNG and the stats store.
//! For simplicity, state is a u8; games cast their own state enums
//! into it so renders can stay decoupled from game crates.
//! The render adapter also lives here to keep Game generic over
//! presentation backends.

use crate::{
    event::Event,
    render::adapter::{cross::CrosstermAdapter, Adapter},
    stats::StatsStore,
    util::Rand,
};

pub struct Context {
    pub game_name: String,
    pub project_path: String,
    pub stage: u32,
    pub state: u8,
    pub rand: Rand,
    pub stats: StatsStore,
    pub input_events: Vec<Event>,
    pub adapter: Box<dyn Adapter>,
}

impl Context {
    pub fn new(name: &str, project_path: &str) -> Self {
        Self {
            game_name: name.to_string(),
            project_path: project_path.to_string(),
            stage: 0,
            state: 0,
            rand: Rand::new(),
            stats: StatsStore::open(StatsStore::default_path()),
            input_events: vec![],
            adapter: Box::new(CrosstermAdapter::new(name)),
        }
    }
}
