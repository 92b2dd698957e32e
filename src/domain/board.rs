use std::collections::HashSet;

use rand::Rng;
use thiserror::Error;

use super::CellValue;

/// Reasons a mine layout cannot be built.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("grid must have at least one row and one column (got {rows}x{cols})")]
    EmptyGrid { rows: usize, cols: usize },
    #[error("mine count {mines} must be at least 1 and below the cell count of {rows}x{cols}")]
    InvalidMineCount { rows: usize, cols: usize, mines: usize },
    #[error("mine at ({row}, {col}) is outside the grid")]
    MineOutOfBounds { row: usize, col: usize },
}

/// Immutable mine layout with precomputed adjacency counts.
/// Stored row-major; (row, col) addressing throughout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    mines: usize,
    cells: Vec<CellValue>,
}

impl Board {
    /// Place `mines` mines uniformly at random without replacement.
    ///
    /// Samples random (row, col) pairs into a set until it holds `mines`
    /// distinct positions. Terminates because `mines < rows * cols` is
    /// checked up front.
    pub fn generate<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        mines: usize,
        rng: &mut R,
    ) -> Result<Self, BoardError> {
        validate(rows, cols, mines)?;

        let mut positions = HashSet::with_capacity(mines);
        while positions.len() < mines {
            positions.insert((rng.random_range(0..rows), rng.random_range(0..cols)));
        }

        let positions: Vec<_> = positions.into_iter().collect();
        Self::from_mines(rows, cols, &positions)
    }

    /// Build a board from an explicit mine layout. Duplicate positions
    /// count once.
    pub fn from_mines(
        rows: usize,
        cols: usize,
        positions: &[(usize, usize)],
    ) -> Result<Self, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::EmptyGrid { rows, cols });
        }
        if let Some(&(row, col)) = positions.iter().find(|&&(r, c)| r >= rows || c >= cols) {
            return Err(BoardError::MineOutOfBounds { row, col });
        }

        let mut is_mine = vec![false; rows * cols];
        positions.iter().for_each(|&(r, c)| is_mine[r * cols + c] = true);
        let mines = is_mine.iter().filter(|&&m| m).count();
        validate(rows, cols, mines)?;

        let cells = (0..rows)
            .flat_map(|r| (0..cols).map(move |c| (r, c)))
            .map(|(r, c)| {
                if is_mine[r * cols + c] {
                    CellValue::Mine
                } else {
                    let count = neighbors(rows, cols, r, c)
                        .filter(|&(nr, nc)| is_mine[nr * cols + nc])
                        .count();
                    CellValue::Clear(count as u8)
                }
            })
            .collect();

        Ok(Self { rows, cols, mines, cells })
    }

    /// (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub const fn mine_count(&self) -> usize {
        self.mines
    }

    pub const fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Row-major index, `None` when out of bounds
    pub const fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<CellValue> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    pub fn is_mine(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(CellValue::is_mine)
    }

    /// Neighbors of (row, col), clipped at the edges, excluding the cell itself
    pub fn neighbors(
        &self,
        row: usize,
        col: usize,
    ) -> impl Iterator<Item = (usize, usize)> + use<> {
        neighbors(self.rows, self.cols, row, col)
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, CellValue)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &value)| (idx / self.cols, idx % self.cols, value))
    }
}

fn validate(rows: usize, cols: usize, mines: usize) -> Result<(), BoardError> {
    if rows == 0 || cols == 0 {
        return Err(BoardError::EmptyGrid { rows, cols });
    }
    if mines == 0 || mines >= rows * cols {
        return Err(BoardError::InvalidMineCount { rows, cols, mines });
    }
    Ok(())
}

fn neighbors(
    rows: usize,
    cols: usize,
    row: usize,
    col: usize,
) -> impl Iterator<Item = (usize, usize)> {
    let (row_start, row_end) = (row.saturating_sub(1), (row + 2).min(rows));
    let (col_start, col_end) = (col.saturating_sub(1), (col + 2).min(cols));

    (row_start..row_end)
        .flat_map(move |r| (col_start..col_end).map(move |c| (r, c)))
        .filter(move |&(r, c)| r != row || c != col)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn brute_force_count(board: &Board, row: usize, col: usize) -> u8 {
        let (rows, cols) = board.dimensions();
        let mut count = 0;
        for dr in -1i64..=1 {
            for dc in -1i64..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let (r, c) = (row as i64 + dr, col as i64 + dc);
                if r >= 0
                    && c >= 0
                    && (r as usize) < rows
                    && (c as usize) < cols
                    && board.is_mine(r as usize, c as usize)
                {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn test_generate_places_exact_mine_count() {
        let mut rng = StdRng::seed_from_u64(7);
        let configs = [(9, 9, 10), (16, 16, 40), (24, 24, 99), (2, 2, 3), (1, 5, 1)];
        for (rows, cols, mines) in configs {
            let board = Board::generate(rows, cols, mines, &mut rng).unwrap();
            let placed = board.iter_cells().filter(|(_, _, v)| v.is_mine()).count();
            assert_eq!(placed, mines);
            assert_eq!(board.mine_count(), mines);
            assert_eq!(board.dimensions(), (rows, cols));
        }
    }

    #[test]
    fn test_generate_counts_match_neighbors() {
        let mut rng = StdRng::seed_from_u64(42);
        let board = Board::generate(16, 16, 40, &mut rng).unwrap();

        for (r, c, value) in board.iter_cells() {
            if let CellValue::Clear(n) = value {
                assert_eq!(n, brute_force_count(&board, r, c), "cell ({r}, {c})");
            }
        }
    }

    #[test]
    fn test_generate_fills_all_but_one() {
        let mut rng = StdRng::seed_from_u64(3);
        let board = Board::generate(3, 3, 8, &mut rng).unwrap();
        let safe: Vec<_> = board.iter_cells().filter(|(_, _, v)| !v.is_mine()).collect();
        assert_eq!(safe.len(), 1);
        let (r, c, value) = safe[0];
        assert_eq!(value, CellValue::Clear(board.neighbors(r, c).count() as u8));
    }

    #[test]
    fn test_generate_rejects_invalid_mine_count() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            Board::generate(3, 3, 9, &mut rng),
            Err(BoardError::InvalidMineCount { rows: 3, cols: 3, mines: 9 })
        );
        assert_eq!(
            Board::generate(3, 3, 0, &mut rng),
            Err(BoardError::InvalidMineCount { rows: 3, cols: 3, mines: 0 })
        );
        assert_eq!(
            Board::generate(0, 3, 1, &mut rng),
            Err(BoardError::EmptyGrid { rows: 0, cols: 3 })
        );
    }

    #[test]
    fn test_from_mines_counts() {
        // M . .
        // . . .
        // . . M
        let board = Board::from_mines(3, 3, &[(0, 0), (2, 2)]).unwrap();
        assert_eq!(board.get(0, 0), Some(CellValue::Mine));
        assert_eq!(board.get(1, 1), Some(CellValue::Clear(2)));
        assert_eq!(board.get(0, 2), Some(CellValue::Clear(0)));
        assert_eq!(board.get(0, 1), Some(CellValue::Clear(1)));
        assert_eq!(board.get(3, 0), None);
    }

    #[test]
    fn test_from_mines_dedups_and_checks_bounds() {
        let board = Board::from_mines(2, 2, &[(0, 0), (0, 0)]).unwrap();
        assert_eq!(board.mine_count(), 1);

        assert_eq!(
            Board::from_mines(2, 2, &[(2, 0)]),
            Err(BoardError::MineOutOfBounds { row: 2, col: 0 })
        );
    }

    #[test]
    fn test_neighbors_clip_at_edges() {
        let board = Board::from_mines(3, 4, &[(1, 1)]).unwrap();
        assert_eq!(board.neighbors(0, 0).count(), 3);
        assert_eq!(board.neighbors(0, 1).count(), 5);
        assert_eq!(board.neighbors(1, 1).count(), 8);
        assert_eq!(board.neighbors(2, 3).count(), 3);
        assert!(!board.neighbors(1, 1).any(|p| p == (1, 1)));
    }
}
