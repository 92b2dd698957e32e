use std::collections::VecDeque;

use tracing::{debug, info};

use crate::domain::{Board, BoardError, CellValue, Difficulty, Visibility};

/// Result classification of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    InProgress,
    Lost,
    Won,
}

/// One game: the mine layout, what the player has uncovered so far,
/// and whether the game has ended.
/// Replaced wholesale on restart.
pub struct Session {
    board: Board,
    visibility: Vec<Visibility>,
    difficulty: Difficulty,
    outcome: Outcome,
}

impl Session {
    /// Start a fresh game with a random layout for the given difficulty
    pub fn new(difficulty: Difficulty) -> Result<Self, BoardError> {
        let (rows, cols, mines) = difficulty.params();
        let board = Board::generate(rows, cols, mines, &mut rand::rng())?;
        info!(difficulty = difficulty.name(), rows, cols, mines, "New game");
        Ok(Self::from_board(board, difficulty))
    }

    /// Start a game on a known layout, all cells hidden
    pub fn from_board(board: Board, difficulty: Difficulty) -> Self {
        Self {
            visibility: vec![Visibility::Hidden; board.cell_count()],
            board,
            difficulty,
            outcome: Outcome::InProgress,
        }
    }

    /// A new session at the same difficulty with a freshly generated board
    pub fn restart(&self) -> Result<Self, BoardError> {
        info!(difficulty = self.difficulty.name(), "Restarting");
        Self::new(self.difficulty)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Lost or won; commands are ignored from here on
    pub fn is_over(&self) -> bool {
        self.outcome != Outcome::InProgress
    }

    pub fn visibility(&self, row: usize, col: usize) -> Option<Visibility> {
        self.board.index(row, col).map(|idx| self.visibility[idx])
    }

    pub fn flagged_count(&self) -> usize {
        self.visibility.iter().filter(|v| v.is_flagged()).count()
    }

    pub fn revealed_count(&self) -> usize {
        self.visibility.iter().filter(|v| v.is_revealed()).count()
    }

    /// Mines minus flags placed. Goes negative when the player over-flags.
    pub fn mines_left(&self) -> i64 {
        self.board.mine_count() as i64 - self.flagged_count() as i64
    }

    /// Uncover a hidden cell. Returns how many cells became revealed;
    /// zero means the command was a no-op.
    ///
    /// Hitting a mine uncovers every mine and loses the game. Hitting a zero
    /// spreads breadth-first through connected zeros and their bordering
    /// numbers.
    pub fn reveal(&mut self, row: usize, col: usize) -> usize {
        if self.is_over() {
            return 0;
        }
        let Some(start) = self.board.index(row, col) else {
            return 0;
        };
        if self.visibility[start] != Visibility::Hidden {
            return 0;
        }

        if self.board.is_mine(row, col) {
            let revealed = self.reveal_mines();
            self.outcome = Outcome::Lost;
            info!(row, col, "Stepped on a mine, game lost");
            return revealed;
        }

        let revealed = self.flood_reveal(row, col);
        debug!(row, col, revealed, "Reveal");

        if self.all_safe_revealed() {
            self.outcome = Outcome::Won;
            info!(difficulty = self.difficulty.name(), "All safe cells revealed, game won");
        }
        revealed
    }

    /// Flag or unflag a hidden cell. Returns whether anything changed.
    pub fn toggle_flag(&mut self, row: usize, col: usize) -> bool {
        if self.is_over() {
            return false;
        }
        let Some(idx) = self.board.index(row, col) else {
            return false;
        };
        let current = self.visibility[idx];
        if current.is_revealed() {
            return false;
        }

        self.visibility[idx] = current.toggle_flag();
        debug!(row, col, flagged = self.visibility[idx].is_flagged(), "Toggle flag");
        true
    }

    /// Iterative flood fill. Each cell is marked revealed when queued, so it
    /// is visited at most once.
    fn flood_reveal(&mut self, row: usize, col: usize) -> usize {
        let mut queue = VecDeque::from([(row, col)]);
        let mut revealed = 0;
        if let Some(idx) = self.board.index(row, col) {
            self.visibility[idx] = Visibility::Revealed;
            revealed += 1;
        }

        while let Some((r, c)) = queue.pop_front() {
            if self.board.get(r, c) != Some(CellValue::Clear(0)) {
                continue;
            }
            for (nr, nc) in self.board.neighbors(r, c) {
                let Some(idx) = self.board.index(nr, nc) else {
                    continue;
                };
                if self.visibility[idx] == Visibility::Hidden {
                    self.visibility[idx] = Visibility::Revealed;
                    revealed += 1;
                    queue.push_back((nr, nc));
                }
            }
        }
        revealed
    }

    /// Uncover the whole mine layout. Non-mine cells are left alone.
    fn reveal_mines(&mut self) -> usize {
        let mut revealed = 0;
        for (idx, (_, _, value)) in self.board.iter_cells().enumerate() {
            if value.is_mine() && !self.visibility[idx].is_revealed() {
                self.visibility[idx] = Visibility::Revealed;
                revealed += 1;
            }
        }
        revealed
    }

    fn all_safe_revealed(&self) -> bool {
        self.board
            .iter_cells()
            .zip(&self.visibility)
            .all(|((_, _, value), vis)| value.is_mine() || vis.is_revealed())
    }
}
