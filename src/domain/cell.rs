/// Visibility of a single cell from the player's point of view.
/// `Revealed` is terminal: nothing ever turns a revealed cell back.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Revealed,
    Flagged,
}

impl Visibility {
    pub const fn is_revealed(self) -> bool {
        matches!(self, Visibility::Revealed)
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Visibility::Flagged)
    }

    /// Flip between Hidden and Flagged. Revealed cells stay revealed.
    pub const fn toggle_flag(self) -> Self {
        match self {
            Visibility::Hidden => Visibility::Flagged,
            Visibility::Flagged => Visibility::Hidden,
            Visibility::Revealed => Visibility::Revealed,
        }
    }
}

/// What the board holds at a cell: a mine, or the number of mines
/// among its (edge-clipped) 8 neighbors.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CellValue {
    Mine,
    Clear(u8),
}

impl CellValue {
    pub const fn is_mine(self) -> bool {
        matches!(self, CellValue::Mine)
    }

    /// Adjacent mine count, `None` for a mine
    pub const fn count(self) -> Option<u8> {
        match self {
            CellValue::Mine => None,
            CellValue::Clear(n) => Some(n),
        }
    }
}
