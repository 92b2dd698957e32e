//! Difficulty presets offered by the start menu.

/// Fixed board configurations. Every preset satisfies `0 < mines < rows * cols`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All presets in menu order
    pub fn all() -> Vec<Difficulty> {
        vec![Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }

    /// (rows, cols, mines)
    pub const fn params(self) -> (usize, usize, usize) {
        match self {
            Difficulty::Easy => (9, 9, 10),
            Difficulty::Medium => (16, 16, 40),
            Difficulty::Hard => (24, 24, 99),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Menu label, e.g. "Easy (9x9, 10 mines)"
    pub fn label(self) -> String {
        let (rows, cols, mines) = self.params();
        format!("{} ({}x{}, {} mines)", self.name(), rows, cols, mines)
    }
}
