use crate::application::{Outcome, Session};
use crate::domain::{CellValue, Difficulty, Visibility};
use crate::ui::{
    BANNER_FONT_SIZE, BOARD_PIXELS, BoardLayout, Button, FONT_SIZE, LARGE_FONT_SIZE,
    STATUS_HEIGHT, WINDOW_WIDTH, number_color,
};
use macroquad::prelude::*;

const HIDDEN_COLOR: Color = Color::new(50.0 / 255.0, 50.0 / 255.0, 50.0 / 255.0, 1.0);
const REVEALED_COLOR: Color = Color::new(120.0 / 255.0, 120.0 / 255.0, 120.0 / 255.0, 1.0);
const FLAG_COLOR: Color = Color::new(1.0, 0.0, 0.0, 1.0);
const WIN_COLOR: Color = Color::new(0.0, 200.0 / 255.0, 0.0, 1.0);

/// Font settings for one kind of text
#[derive(Clone, Copy, Debug)]
pub struct TextStyle {
    pub size: f32,
    pub color: Color,
}

impl TextStyle {
    pub const fn new(size: f32, color: Color) -> Self {
        Self { size, color }
    }

    pub fn measure(&self, text: &str) -> TextDimensions {
        measure_text(text, None, self.size as u16, 1.0)
    }

    /// Draw with the top-left corner of the text box at (x, y)
    pub fn draw(&self, text: &str, x: f32, y: f32) {
        let dims = self.measure(text);
        draw_text(text, x, y + dims.offset_y, self.size, self.color);
    }

    pub fn draw_centered(&self, text: &str, center_x: f32, center_y: f32) {
        self.draw_centered_with(text, center_x, center_y, self.color);
    }

    pub fn draw_centered_with(&self, text: &str, center_x: f32, center_y: f32, color: Color) {
        let dims = self.measure(text);
        draw_text(
            text,
            center_x - dims.width / 2.0,
            center_y - dims.height / 2.0 + dims.offset_y,
            self.size,
            color,
        );
    }
}

/// Rendering context created once at startup. Owns the text styles
/// every screen draws with.
pub struct Renderer {
    body: TextStyle,
    title: TextStyle,
    banner: TextStyle,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            body: TextStyle::new(FONT_SIZE, BLACK),
            title: TextStyle::new(LARGE_FONT_SIZE, BLACK),
            banner: TextStyle::new(BANNER_FONT_SIZE, RED),
        }
    }

    /// Difficulty prompt shown before a session exists
    pub fn draw_menu(&self, buttons: &[(Difficulty, Button)], mouse_pos: (f32, f32)) {
        clear_background(WHITE);
        self.title.draw_centered(
            "Select Difficulty",
            WINDOW_WIDTH / 2.0,
            BOARD_PIXELS / 2.0 - 50.0,
        );
        buttons
            .iter()
            .for_each(|(_, button)| button.draw(mouse_pos, FONT_SIZE));
        self.body.draw_centered(
            "Press 1, 2 or 3, or click a level",
            WINDOW_WIDTH / 2.0,
            BOARD_PIXELS / 2.0 + 170.0,
        );
    }

    /// Board tiles plus the status bar
    pub fn draw_session(&self, session: &Session) {
        clear_background(WHITE);
        self.draw_board(session);
        self.draw_status(session);
    }

    fn draw_board(&self, session: &Session) {
        let (_, cols) = session.board().dimensions();
        let layout = BoardLayout::new(cols);
        let tile = layout.tile_size;

        for (row, col, value) in session.board().iter_cells() {
            let (x, y) = layout.tile_origin(row, col);
            match session.visibility(row, col).unwrap_or_default() {
                Visibility::Revealed => {
                    draw_rectangle(x, y, tile, tile, REVEALED_COLOR);
                    let (cx, cy) = layout.tile_center(row, col);
                    match value {
                        CellValue::Mine => draw_circle(cx, cy, tile / 3.0, BLACK),
                        CellValue::Clear(0) => {}
                        CellValue::Clear(n) => {
                            self.body.draw_centered_with(&n.to_string(), cx, cy, number_color(n));
                        }
                    }
                }
                Visibility::Flagged => {
                    draw_rectangle(x, y, tile, tile, HIDDEN_COLOR);
                    draw_flag(x, y, tile);
                }
                Visibility::Hidden => {
                    draw_rectangle(x, y, tile, tile, HIDDEN_COLOR);
                }
            }
            draw_rectangle_lines(x, y, tile, tile, 1.0, BLACK);
        }
    }

    fn draw_status(&self, session: &Session) {
        let counter = format!("Mines Left: {}", session.mines_left());
        self.body.draw(&counter, 10.0, BOARD_PIXELS + 16.0);

        let banner = match session.outcome() {
            Outcome::InProgress => return,
            Outcome::Lost => ("Game Over! Press R to Restart", self.banner.color),
            Outcome::Won => ("You Win! Press R to Restart", WIN_COLOR),
        };
        let (center_x, center_y) = banner_center();
        self.banner.draw_centered_with(banner.0, center_x, center_y, banner.1);
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Centre of the status bar, where the win/loss banner goes
pub fn banner_center() -> (f32, f32) {
    (WINDOW_WIDTH / 2.0, BOARD_PIXELS + STATUS_HEIGHT / 2.0)
}

/// Red pennant on a short pole
fn draw_flag(x: f32, y: f32, tile: f32) {
    let pole_x = x + tile / 2.0;
    draw_triangle(
        vec2(x + tile / 4.0, y + tile * 0.75),
        vec2(pole_x, y + tile / 4.0),
        vec2(pole_x, y + tile * 0.75),
        FLAG_COLOR,
    );
    draw_line(pole_x, y + tile / 4.0, pole_x, y + tile * 0.85, 2.0, BLACK);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_centered_in_status_bar() {
        assert_eq!(banner_center(), (300.0, 625.0));
    }
}
