mod button;
mod layout;

pub use button::Button;
pub use layout::BoardLayout;

use crate::domain::Difficulty;
use macroquad::prelude::Color;

// Window geometry: a square board area with a status bar underneath
pub const BOARD_PIXELS: f32 = 600.0;
pub const STATUS_HEIGHT: f32 = 50.0;
pub const WINDOW_WIDTH: f32 = BOARD_PIXELS;
pub const WINDOW_HEIGHT: f32 = BOARD_PIXELS + STATUS_HEIGHT;

pub const TICK_RATE: u32 = 30;

pub const FONT_SIZE: f32 = 18.0;
pub const LARGE_FONT_SIZE: f32 = 28.0;
pub const BANNER_FONT_SIZE: f32 = 22.0;

pub const MENU_BUTTON_WIDTH: f32 = 320.0;
pub const MENU_BUTTON_HEIGHT: f32 = 40.0;
const MENU_TOP: f32 = 290.0;
const MENU_SPACING: f32 = 50.0;

/// Text color for an adjacency count
pub fn number_color(count: u8) -> Color {
    match count {
        1 => Color::from_rgba(0, 0, 255, 255),
        2 => Color::from_rgba(0, 200, 0, 255),
        3 => Color::from_rgba(255, 0, 0, 255),
        4 => Color::from_rgba(0, 0, 128, 255),
        5 => Color::from_rgba(128, 0, 0, 255),
        6 => Color::from_rgba(0, 128, 128, 255),
        7 => Color::from_rgba(0, 0, 0, 255),
        _ => Color::from_rgba(128, 128, 128, 255),
    }
}

/// One centered button per difficulty, stacked under the menu title
pub fn menu_buttons() -> Vec<(Difficulty, Button)> {
    let x = (WINDOW_WIDTH - MENU_BUTTON_WIDTH) / 2.0;
    Difficulty::all()
        .into_iter()
        .enumerate()
        .map(|(i, difficulty)| {
            let y = MENU_TOP + i as f32 * MENU_SPACING;
            let label = format!("{}. {}", i + 1, difficulty.label());
            (difficulty, Button::new(x, y, MENU_BUTTON_WIDTH, MENU_BUTTON_HEIGHT, label))
        })
        .collect()
}
