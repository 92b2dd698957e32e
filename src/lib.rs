// Domain layer - Board generation and cell state
pub mod domain;

// Application layer - Session state machine and screen flow
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Board, BoardError, CellValue, Difficulty, Visibility};
pub use application::{Action, App, FramePacer, Outcome, Screen, Session};
pub use rendering::Renderer;
