// NeonArcade
// copyright agam 2024~2025

//! Per-game play counters and best scores, keyed by a game id string.
//!
//! This is a narrow collaborator for the games, not part of any game's
//! own state: `load` returns a snapshot, `record_*` mutate and persist.
//! The store lives in one JSON file under the platform data directory.
//! A missing or corrupt file degrades to empty stats with a warning;
//! persistence failures never reach gameplay.

use log::warn;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

/// Score a win is worth in the lifetime stats.
pub const WIN_SCORE: u32 = 100;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub plays: u32,
    pub score: u32,
    /// seconds since the Unix epoch, 0 = never
    pub last_played: u64,
}

pub struct StatsStore {
    path: PathBuf,
    stats: HashMap<String, GameStats>,
}

impl StatsStore {
    pub fn default_path() -> PathBuf {
        dirs_next::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("neon_arcade")
            .join("stats.json")
    }

    pub fn open(path: PathBuf) -> Self {
        let stats = match fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(m) => m,
                Err(e) => {
                    warn!("stats file {:?} unreadable, starting empty: {}", path, e);
                    HashMap::new()
                }
            },
            // first run
            Err(_) => HashMap::new(),
        };
        Self { path, stats }
    }

    pub fn load(&self, game_id: &str) -> GameStats {
        self.stats.get(game_id).cloned().unwrap_or_default()
    }

    /// Replaces a game's stats wholesale. The record_* helpers cover
    /// the usual cases; this is the raw collaborator surface.
    pub fn save(&mut self, game_id: &str, stats: GameStats) {
        self.stats.insert(game_id.to_string(), stats);
        self.persist();
    }

    /// A game session was started.
    pub fn record_play(&mut self, game_id: &str) {
        let entry = self.stats.entry(game_id.to_string()).or_default();
        entry.plays += 1;
        entry.last_played = now();
        self.persist();
    }

    /// A session ended with a score; the stored score keeps the maximum.
    pub fn record_score(&mut self, game_id: &str, score: u32) {
        let entry = self.stats.entry(game_id.to_string()).or_default();
        if score > entry.score {
            entry.score = score;
        }
        entry.last_played = now();
        self.persist();
    }

    /// A round was won (tic-tac-toe, memory).
    pub fn record_win(&mut self, game_id: &str) {
        let entry = self.stats.entry(game_id.to_string()).or_default();
        entry.score += WIN_SCORE;
        entry.last_played = now();
        self.persist();
    }

    fn persist(&self) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                warn!("cannot create stats dir {:?}: {}", parent, e);
                return;
            }
        }
        match serde_json::to_string_pretty(&self.stats) {
            Ok(json) => {
                if let Err(e) = fs::write(&self.path, json) {
                    warn!("cannot write stats file {:?}: {}", self.path, e);
                }
            }
            Err(e) => warn!("cannot serialize stats: {}", e),
        }
    }
}

fn now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> StatsStore {
        let path = std::env::temp_dir()
            .join(format!("neon_arcade_test_{}_{}", name, std::process::id()))
            .join("stats.json");
        let _ = fs::remove_file(&path);
        StatsStore::open(path)
    }

    #[test]
    fn test_unknown_game_is_default() {
        let store = temp_store("unknown");
        assert_eq!(store.load("snake"), GameStats::default());
    }

    #[test]
    fn test_record_and_reload() {
        let mut store = temp_store("reload");
        store.record_play("snake");
        store.record_score("snake", 120);
        let path = store.path.clone();

        let reloaded = StatsStore::open(path);
        let s = reloaded.load("snake");
        assert_eq!(s.plays, 1);
        assert_eq!(s.score, 120);
        assert!(s.last_played > 0);
    }

    #[test]
    fn test_score_keeps_maximum() {
        let mut store = temp_store("max");
        store.record_score("snake", 120);
        store.record_score("snake", 40);
        assert_eq!(store.load("snake").score, 120);
    }

    #[test]
    fn test_win_accumulates() {
        let mut store = temp_store("win");
        store.record_win("tictactoe");
        store.record_win("tictactoe");
        assert_eq!(store.load("tictactoe").score, 2 * WIN_SCORE);
    }

    #[test]
    fn test_save_replaces_wholesale() {
        let mut store = temp_store("save");
        store.record_play("memory");
        store.save(
            "memory",
            GameStats {
                plays: 7,
                score: 900,
                last_played: 1,
            },
        );
        let s = store.load("memory");
        assert_eq!((s.plays, s.score, s.last_played), (7, 900, 1));
    }

    #[test]
    fn test_corrupt_file_degrades_to_empty() {
        let path = std::env::temp_dir().join(format!(
            "neon_arcade_test_corrupt_{}.json",
            std::process::id()
        ));
        fs::write(&path, "not json at all {{{").unwrap();
        let store = StatsStore::open(path.clone());
        assert_eq!(store.load("snake"), GameStats::default());
        let _ = fs::remove_file(path);
    }
}
