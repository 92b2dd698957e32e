mod app;
mod frame_pacer;
mod session;

pub use app::{Action, App, Screen};
pub use frame_pacer::FramePacer;
pub use session::{Outcome, Session};
