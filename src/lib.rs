// NeonArcade
// copyright agam 2024~2025

//! NeonArcade is a tiny terminal arcade engine driving a set of casual
//! mini-games (snake, tic-tac-toe, memory). It owns the fixed-rate main
//! loop, a cancellable timer center, unified keyboard/mouse input and a
//! diff-based terminal renderer built on crossterm.
//!
//! A game is a Model (state and logic) plus a Render (presentation).
//! Models never draw: they mutate their own state and emit events; renders
//! read snapshots and draw them into sprites composed by a Panel. The
//! engine makes no other assumption about presentation.
//!
//! Ambient services live here as well: per-game play/score statistics
//! (stats), a playlist audio controller (audio) and log4rs setup (log).

/// framerate per second, set to moderate number to save CPUs
pub const GAME_FRAME: u32 = 60;

/// Re-export paste for use in the arcade_game! macro
pub use paste;

/// arcade_game! wires a game crate together: it declares the model and
/// render modules, generates a `{Name}Game` wrapper and the `init_game` /
/// `run` entry points called from main.rs.
///
/// A game crate is expected to provide `{Name}Model` in `model.rs` and
/// `{Name}Render` in `render_terminal.rs`; its pure game core usually
/// lives in an `engine` module declared by the crate itself so tests can
/// reach it.
#[macro_export]
macro_rules! arcade_game {
    ($name:ident) => {
        pub mod model;
        pub mod render_terminal;

        use crate::{model::*, render_terminal::*};
        use $crate::game::Game;
        use $crate::util::get_project_path;

        $crate::paste::paste! {
            pub struct [<$name Game>] {
                g: Game<[<$name Model>], [<$name Render>]>,
            }

            pub fn init_game() -> [<$name Game>] {
                let m = [<$name Model>]::new();
                let r = [<$name Render>]::new();
                let pp = get_project_path();
                let mut g = Game::new(m, r, stringify!([<$name:lower>]), &pp);
                g.init();
                [<$name Game>] { g }
            }

            pub fn run() {
                let mut g = init_game().g;
                g.run().unwrap();
                g.render.panel.reset(&mut g.context);
            }
        }
    };
}

/// processing input events, timer and other custom events
pub mod event;

/// common tools and data structures: directions, points, RNG, paths
pub mod util;

/// playlist audio controller
#[cfg(all(feature = "rodio", not(any(target_os = "android", target_os = "ios"))))]
pub mod audio;

/// public variables shared by model and render: stage, state, RNG, stats
pub mod context;

/// integrates model and render, encapsulates the main loop
pub mod game;

/// log
pub mod log;

/// per-game play counters and best scores
pub mod stats;

/// Render module for the terminal backend.
/// adapter: render adapter interface (crossterm implementation).
/// cell: a base drawing unit i.e. a character.
/// buffer: a vector comprised of cells, managing a screen rectangle.
/// sprite: basic drawing component, a named buffer with an offset.
/// panel: composes sprites and flushes the diff through the adapter.
pub mod render;
