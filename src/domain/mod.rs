mod cell;
mod board;
mod difficulty;

pub use cell::{CellValue, Visibility};
pub use board::{Board, BoardError};
pub use difficulty::Difficulty;
