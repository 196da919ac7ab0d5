//! Tic-tac-toe core: a 3x3 board, win detection over the eight lines
//! and a machine player answering with a uniformly random empty square.

use neon_arcade::util::Rand;

pub const BOARD_CELLS: usize = 9;
/// seconds the machine pretends to think before answering
pub const MACHINE_DELAY: f32 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    X,
    O,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    Playing,
    Won(Mark),
    Draw,
}

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn winner(board: &[Option<Mark>; BOARD_CELLS]) -> Option<Mark> {
    for [a, b, c] in LINES {
        if board[a].is_some() && board[a] == board[b] && board[a] == board[c] {
            return board[a];
        }
    }
    None
}

pub struct TicTacToeEngine {
    board: [Option<Mark>; BOARD_CELLS],
    state: RoundState,
}

impl Default for TicTacToeEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeEngine {
    pub fn new() -> Self {
        Self {
            board: [None; BOARD_CELLS],
            state: RoundState::Playing,
        }
    }

    /// Restores a position, settling its state.
    pub fn from_board(board: [Option<Mark>; BOARD_CELLS]) -> Self {
        let mut e = Self {
            board,
            state: RoundState::Playing,
        };
        e.settle();
        e
    }

    pub fn reset(&mut self) {
        self.board = [None; BOARD_CELLS];
        self.state = RoundState::Playing;
    }

    /// Places a mark. Occupied squares, out-of-range indices and moves
    /// after the round ended are ignored and return false.
    pub fn place(&mut self, idx: usize, mark: Mark) -> bool {
        if self.state != RoundState::Playing || idx >= BOARD_CELLS || self.board[idx].is_some() {
            return false;
        }
        self.board[idx] = Some(mark);
        self.settle();
        true
    }

    /// The machine answer: a random empty square for O. Returns the
    /// square played, or None when the round is already over.
    pub fn machine_move(&mut self, rand: &mut Rand) -> Option<usize> {
        if self.state != RoundState::Playing {
            return None;
        }
        let empty: Vec<usize> = (0..BOARD_CELLS).filter(|&i| self.board[i].is_none()).collect();
        if empty.is_empty() {
            return None;
        }
        let idx = empty[rand.rand_range(empty.len() as u32) as usize];
        self.board[idx] = Some(Mark::O);
        self.settle();
        Some(idx)
    }

    fn settle(&mut self) {
        if let Some(m) = winner(&self.board) {
            self.state = RoundState::Won(m);
        } else if self.board.iter().all(|c| c.is_some()) {
            self.state = RoundState::Draw;
        }
    }

    pub fn board(&self) -> &[Option<Mark>; BOARD_CELLS] {
        &self.board
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    /// state as a context code for the render: 0 playing, 1 X won,
    /// 2 O won, 3 draw
    pub fn state_code(&self) -> u8 {
        match self.state {
            RoundState::Playing => 0,
            RoundState::Won(Mark::X) => 1,
            RoundState::Won(Mark::O) => 2,
            RoundState::Draw => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rand() -> Rand {
        let mut r = Rand::new();
        r.srand(11);
        r
    }

    #[test]
    fn test_row_column_and_diagonal_wins() {
        let mut e = TicTacToeEngine::new();
        for i in [0, 1, 2] {
            e.board[i] = Some(Mark::X);
        }
        e.settle();
        assert_eq!(e.state(), RoundState::Won(Mark::X));

        let mut e = TicTacToeEngine::new();
        for i in [1, 4, 7] {
            e.board[i] = Some(Mark::O);
        }
        e.settle();
        assert_eq!(e.state(), RoundState::Won(Mark::O));

        let mut e = TicTacToeEngine::new();
        for i in [2, 4, 6] {
            e.board[i] = Some(Mark::X);
        }
        e.settle();
        assert_eq!(e.state(), RoundState::Won(Mark::X));
    }

    #[test]
    fn test_occupied_square_is_ignored() {
        let mut e = TicTacToeEngine::new();
        assert!(e.place(4, Mark::X));
        assert!(!e.place(4, Mark::O));
        assert_eq!(e.board()[4], Some(Mark::X));
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut e = TicTacToeEngine::new();
        assert!(!e.place(9, Mark::X));
    }

    #[test]
    fn test_no_moves_after_win() {
        let mut e = TicTacToeEngine::new();
        e.place(0, Mark::X);
        e.place(3, Mark::O);
        e.place(1, Mark::X);
        e.place(4, Mark::O);
        e.place(2, Mark::X); // top row
        assert_eq!(e.state(), RoundState::Won(Mark::X));
        assert!(!e.place(5, Mark::O));
        assert_eq!(e.machine_move(&mut rand()), None);
    }

    #[test]
    fn test_draw_detection() {
        let mut e = TicTacToeEngine::new();
        // X O X / X O O / O X X : full, no line
        let layout = [
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::X,
            Mark::O,
            Mark::O,
            Mark::O,
            Mark::X,
            Mark::X,
        ];
        for (i, m) in layout.into_iter().enumerate() {
            e.board[i] = Some(m);
        }
        e.settle();
        assert_eq!(e.state(), RoundState::Draw);
    }

    #[test]
    fn test_machine_plays_an_empty_square() {
        let mut r = rand();
        for _ in 0..50 {
            let mut e = TicTacToeEngine::new();
            e.place(4, Mark::X);
            let idx = e.machine_move(&mut r).unwrap();
            assert_ne!(idx, 4);
            assert_eq!(e.board()[idx], Some(Mark::O));
            // exactly one O on the board
            let os = e.board().iter().filter(|c| **c == Some(Mark::O)).count();
            assert_eq!(os, 1);
        }
    }

    #[test]
    fn test_reset_clears_round() {
        let mut e = TicTacToeEngine::new();
        e.place(0, Mark::X);
        e.place(1, Mark::X);
        e.place(2, Mark::X);
        assert_ne!(e.state(), RoundState::Playing);
        e.reset();
        assert_eq!(e.state(), RoundState::Playing);
        assert!(e.board().iter().all(|c| c.is_none()));
    }
}
