//! Memory game core: a shuffled deck of symbol pairs, flip rules and
//! match scoring. The mismatch hide delay is the model's business; the
//! engine only freezes picking while a mismatch is on the table.

use neon_arcade::util::Rand;

pub const PAIR_COUNT: usize = 6;
pub const CARD_COUNT: usize = PAIR_COUNT * 2;
pub const MATCH_SCORE: u32 = 200;
pub const CLEAR_BONUS: u32 = 500;
/// seconds a mismatched pair stays visible
pub const HIDE_DELAY: f32 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    /// waiting for picks
    Picking = 0,
    /// a mismatched pair is face up, picks are frozen
    Checking = 1,
    /// all pairs solved, terminal until reset
    Cleared = 2,
}

/// What a flip did, so the model knows whether to arm the hide timer
/// or report a finished board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    /// face-up, solved or third card: nothing happened
    Ignored,
    /// first card of a pair turned over
    Revealed,
    /// second card matched
    Matched,
    /// second card didn't match, both stay up until hide_mismatch
    Mismatched,
    /// the match solved the final pair
    Cleared,
}

pub struct MemoryEngine {
    /// symbol id per card, PAIR_COUNT distinct values twice each
    cards: Vec<u8>,
    face_up: Vec<bool>,
    solved: Vec<bool>,
    first_pick: Option<usize>,
    mismatch: Option<(usize, usize)>,
    score: u32,
    state: MatchState,
}

impl Default for MemoryEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryEngine {
    /// An ordered, face-down deck. reset shuffles it.
    pub fn new() -> Self {
        let cards: Vec<u8> = (0..CARD_COUNT).map(|i| (i / 2) as u8).collect();
        Self {
            cards,
            face_up: vec![false; CARD_COUNT],
            solved: vec![false; CARD_COUNT],
            first_pick: None,
            mismatch: None,
            score: 0,
            state: MatchState::Picking,
        }
    }

    pub fn reset(&mut self, rand: &mut Rand) {
        rand.shuffle(&mut self.cards);
        self.face_up = vec![false; CARD_COUNT];
        self.solved = vec![false; CARD_COUNT];
        self.first_pick = None;
        self.mismatch = None;
        self.score = 0;
        self.state = MatchState::Picking;
    }

    pub fn flip(&mut self, idx: usize) -> FlipOutcome {
        if self.state != MatchState::Picking
            || idx >= CARD_COUNT
            || self.face_up[idx]
            || self.solved[idx]
        {
            return FlipOutcome::Ignored;
        }
        self.face_up[idx] = true;
        match self.first_pick.take() {
            None => {
                self.first_pick = Some(idx);
                FlipOutcome::Revealed
            }
            Some(first) => {
                if self.cards[first] == self.cards[idx] {
                    self.solved[first] = true;
                    self.solved[idx] = true;
                    self.score += MATCH_SCORE;
                    if self.solved.iter().all(|&s| s) {
                        self.score += CLEAR_BONUS;
                        self.state = MatchState::Cleared;
                        FlipOutcome::Cleared
                    } else {
                        FlipOutcome::Matched
                    }
                } else {
                    self.mismatch = Some((first, idx));
                    self.state = MatchState::Checking;
                    FlipOutcome::Mismatched
                }
            }
        }
    }

    /// Turns a mismatched pair back over; runs when the hide delay
    /// expires. A no-op unless a mismatch is actually on the table.
    pub fn hide_mismatch(&mut self) {
        if let Some((a, b)) = self.mismatch.take() {
            self.face_up[a] = false;
            self.face_up[b] = false;
            self.state = MatchState::Picking;
        }
    }

    pub fn card(&self, idx: usize) -> u8 {
        self.cards[idx]
    }

    pub fn is_face_up(&self, idx: usize) -> bool {
        self.face_up[idx]
    }

    pub fn is_solved(&self, idx: usize) -> bool {
        self.solved[idx]
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn state(&self) -> MatchState {
        self.state
    }
}
