//! Snake game core: grid, movement, collisions, growth and scoring.
//!
//! The engine owns one session's state and is mutated from exactly two
//! places: `steer` (input) and `tick` (the move timer). It touches
//! nothing beyond itself and the RNG handed in, which is what lets the
//! tests below drive it directly.

use neon_arcade::util::{Dir, PointU16, Rand};

pub const GRID_SIZE: u16 = 20;
pub const FOOD_SCORE: u32 = 10;
/// seconds between moves
pub const MOVE_INTERVAL: f32 = 0.15;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// initial, pre-start
    Idle = 0,
    /// move timer armed, ticks mutate the session
    Playing = 1,
    /// terminal until an explicit restart
    GameOver = 2,
}

pub fn in_bounds(x: i16, y: i16) -> bool {
    x >= 0 && y >= 0 && (x as u16) < GRID_SIZE && (y as u16) < GRID_SIZE
}

/// Read-only view handed to the presentation layer after each change.
pub struct SnakeSnapshot<'a> {
    pub body: &'a [PointU16],
    pub food: PointU16,
    pub score: u32,
    pub high_score: u32,
    pub state: GameState,
}

pub struct SnakeEngine {
    /// head first; cells unique; adjacent cells grid-adjacent
    body: Vec<PointU16>,
    food: PointU16,
    /// heading committed at the last tick
    dir: Dir,
    /// latest accepted steer, applied at the next tick (last-write-wins)
    next_dir: Dir,
    score: u32,
    high_score: u32,
    state: GameState,
}

impl Default for SnakeEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SnakeEngine {
    pub fn new() -> Self {
        Self {
            body: vec![PointU16 {
                x: GRID_SIZE / 2,
                y: GRID_SIZE / 2,
            }],
            food: PointU16 {
                x: GRID_SIZE * 3 / 4,
                y: GRID_SIZE / 2,
            },
            dir: Dir::Right,
            next_dir: Dir::Right,
            score: 0,
            high_score: 0,
            state: GameState::Idle,
        }
    }

    /// Starts a new session: single-cell snake at the grid center,
    /// heading right, score zero, fresh food. The high score survives.
    pub fn start(&mut self, rand: &mut Rand) {
        self.body.clear();
        self.body.push(PointU16 {
            x: GRID_SIZE / 2,
            y: GRID_SIZE / 2,
        });
        self.dir = Dir::Right;
        self.next_dir = Dir::Right;
        self.score = 0;
        self.state = GameState::Playing;
        self.spawn_food(rand);
    }

    /// Requests a heading change taking effect at the next tick.
    /// The exact opposite of the committed heading is ignored, which is
    /// what keeps the snake from reversing into its own neck. Later
    /// valid requests overwrite earlier ones; nothing is queued.
    pub fn steer(&mut self, d: Dir) {
        if self.state != GameState::Playing {
            return;
        }
        if d == self.dir.opposite() {
            return;
        }
        self.next_dir = d;
    }

    /// Advances the session by exactly one move.
    pub fn tick(&mut self, rand: &mut Rand) {
        if self.state != GameState::Playing {
            return;
        }
        self.dir = self.next_dir;
        let (dx, dy) = self.dir.delta();
        let head = self.body[0];
        let cx = head.x as i16 + dx;
        let cy = head.y as i16 + dy;
        if !in_bounds(cx, cy) {
            self.game_over();
            return;
        }
        let new_head = PointU16 {
            x: cx as u16,
            y: cy as u16,
        };
        // the tail cell still counts: it only vacates after this check
        if self.body.contains(&new_head) {
            self.game_over();
            return;
        }
        self.body.insert(0, new_head);
        if new_head == self.food {
            self.score += FOOD_SCORE;
            self.spawn_food(rand);
        } else {
            self.body.pop();
        }
    }

    /// Draws random cells until one misses the snake. Never called with
    /// a full grid in practice; a snake covering all GRID_SIZE^2 cells
    /// would spin here forever (see DESIGN.md, accepted edge case).
    fn spawn_food(&mut self, rand: &mut Rand) {
        loop {
            let f = PointU16 {
                x: rand.rand_range(GRID_SIZE as u32) as u16,
                y: rand.rand_range(GRID_SIZE as u32) as u16,
            };
            if !self.body.contains(&f) {
                self.food = f;
                return;
            }
        }
    }

    /// Terminal: the snake is frozen exactly as it was at the moment of
    /// death, only the high score is folded in.
    fn game_over(&mut self) {
        self.high_score = self.high_score.max(self.score);
        self.state = GameState::GameOver;
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn snapshot(&self) -> SnakeSnapshot<'_> {
        SnakeSnapshot {
            body: &self.body,
            food: self.food,
            score: self.score,
            high_score: self.high_score,
            state: self.state,
        }
    }
}
