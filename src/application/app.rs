use tracing::info;

use super::Session;
use crate::domain::{BoardError, Difficulty};

/// What the loop is currently showing
pub enum Screen {
    /// Difficulty prompt; no session exists yet
    Menu,
    Playing(Session),
}

/// Session-level and cell-level commands produced from input events
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Quit,
    SelectDifficulty(Difficulty),
    Reveal { row: usize, col: usize },
    ToggleFlag { row: usize, col: usize },
    Restart,
    BackToMenu,
}

/// App owns the single live session and the screen it is shown on.
pub struct App {
    screen: Screen,
    running: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            screen: Screen::Menu,
            running: true,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn session(&self) -> Option<&Session> {
        match &self.screen {
            Screen::Playing(session) => Some(session),
            Screen::Menu => None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Apply one action. Only session construction can fail.
    /// Restart is honoured only once the current game has ended.
    pub fn apply(&mut self, action: Action) -> Result<(), BoardError> {
        match action {
            Action::Quit => {
                info!("Quit requested");
                self.running = false;
            }
            Action::SelectDifficulty(difficulty) => {
                self.screen = Screen::Playing(Session::new(difficulty)?);
            }
            Action::Reveal { row, col } => {
                if let Screen::Playing(session) = &mut self.screen {
                    session.reveal(row, col);
                }
            }
            Action::ToggleFlag { row, col } => {
                if let Screen::Playing(session) = &mut self.screen {
                    session.toggle_flag(row, col);
                }
            }
            Action::Restart => {
                if let Screen::Playing(session) = &self.screen
                    && session.is_over()
                {
                    self.screen = Screen::Playing(session.restart()?);
                }
            }
            Action::BackToMenu => {
                if matches!(self.screen, Screen::Playing(_)) {
                    info!("Back to difficulty menu");
                    self.screen = Screen::Menu;
                }
            }
        }
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
