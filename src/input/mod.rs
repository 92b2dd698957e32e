use crate::application::{Action, Screen};
use crate::domain::Difficulty;
use crate::ui::{BoardLayout, Button};
use macroquad::prelude::*;

/// Discrete input events drained once per frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Quit,
    KeyDown(KeyCode),
    PointerDown(MouseButton, f32, f32),
}

/// Collect everything that happened since the last frame.
/// Requires `prevent_quit()` at startup so window close shows up as `Quit`.
pub fn poll_events() -> Vec<InputEvent> {
    let mut events = Vec::new();

    if is_quit_requested() {
        events.push(InputEvent::Quit);
    }

    events.extend(get_keys_pressed().into_iter().map(InputEvent::KeyDown));

    let (x, y) = mouse_position();
    events.extend(
        [MouseButton::Left, MouseButton::Right]
            .into_iter()
            .filter(|&button| is_mouse_button_pressed(button))
            .map(|button| InputEvent::PointerDown(button, x, y)),
    );

    events
}

/// Menu key bindings: 1, 2, 3
pub fn difficulty_for_key(key: KeyCode) -> Option<Difficulty> {
    match key {
        KeyCode::Key1 | KeyCode::Kp1 => Some(Difficulty::Easy),
        KeyCode::Key2 | KeyCode::Kp2 => Some(Difficulty::Medium),
        KeyCode::Key3 | KeyCode::Kp3 => Some(Difficulty::Hard),
        _ => None,
    }
}

/// Translate one event into an action for the current screen
pub fn translate(
    event: InputEvent,
    screen: &Screen,
    menu_buttons: &[(Difficulty, Button)],
) -> Option<Action> {
    if event == InputEvent::Quit {
        return Some(Action::Quit);
    }

    match screen {
        Screen::Menu => match event {
            InputEvent::KeyDown(key) => difficulty_for_key(key).map(Action::SelectDifficulty),
            InputEvent::PointerDown(MouseButton::Left, x, y) => menu_buttons
                .iter()
                .find(|(_, button)| button.contains((x, y)))
                .map(|&(difficulty, _)| Action::SelectDifficulty(difficulty)),
            _ => None,
        },
        Screen::Playing(session) => match event {
            InputEvent::KeyDown(KeyCode::Escape) => Some(Action::BackToMenu),
            InputEvent::KeyDown(KeyCode::R) if session.is_over() => Some(Action::Restart),
            InputEvent::PointerDown(_, _, _) if session.is_over() => None,
            InputEvent::PointerDown(button, x, y) => {
                let (_, cols) = session.board().dimensions();
                let (row, col) = BoardLayout::new(cols).cell_at(x, y)?;
                match button {
                    MouseButton::Left => Some(Action::Reveal { row, col }),
                    MouseButton::Right => Some(Action::ToggleFlag { row, col }),
                    _ => None,
                }
            }
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Session;
    use crate::domain::Board;
    use crate::ui::menu_buttons;

    fn playing(mines: &[(usize, usize)]) -> Screen {
        let board = Board::from_mines(9, 9, mines).unwrap();
        Screen::Playing(Session::from_board(board, Difficulty::Easy))
    }

    #[test]
    fn test_quit_translates_everywhere() {
        let buttons = menu_buttons();
        assert_eq!(translate(InputEvent::Quit, &Screen::Menu, &buttons), Some(Action::Quit));
        let screen = playing(&[(0, 0)]);
        assert_eq!(translate(InputEvent::Quit, &screen, &buttons), Some(Action::Quit));
    }

    #[test]
    fn test_menu_keys_select_presets() {
        let buttons = menu_buttons();
        let select = |key| translate(InputEvent::KeyDown(key), &Screen::Menu, &buttons);
        assert_eq!(select(KeyCode::Key1), Some(Action::SelectDifficulty(Difficulty::Easy)));
        assert_eq!(select(KeyCode::Key2), Some(Action::SelectDifficulty(Difficulty::Medium)));
        assert_eq!(select(KeyCode::Key3), Some(Action::SelectDifficulty(Difficulty::Hard)));
        assert_eq!(select(KeyCode::Key4), None);
    }

    #[test]
    fn test_menu_button_click_selects_preset() {
        let buttons = menu_buttons();
        for (difficulty, button) in &buttons {
            let center = (button.x() + button.width() / 2.0, button.y() + button.height() / 2.0);
            let event = InputEvent::PointerDown(MouseButton::Left, center.0, center.1);
            assert_eq!(
                translate(event, &Screen::Menu, &buttons),
                Some(Action::SelectDifficulty(*difficulty))
            );
        }
        let miss = InputEvent::PointerDown(MouseButton::Left, 5.0, 5.0);
        assert_eq!(translate(miss, &Screen::Menu, &buttons), None);
    }

    #[test]
    fn test_pointer_maps_to_cell_commands() {
        let buttons = menu_buttons();
        let screen = playing(&[(0, 0)]);
        // Easy board tiles are 66 px
        let left = InputEvent::PointerDown(MouseButton::Left, 140.0, 70.0);
        let right = InputEvent::PointerDown(MouseButton::Right, 140.0, 70.0);
        assert_eq!(translate(left, &screen, &buttons), Some(Action::Reveal { row: 1, col: 2 }));
        assert_eq!(
            translate(right, &screen, &buttons),
            Some(Action::ToggleFlag { row: 1, col: 2 })
        );
    }

    #[test]
    fn test_clicks_in_status_bar_ignored() {
        let buttons = menu_buttons();
        let event = InputEvent::PointerDown(MouseButton::Left, 100.0, 620.0);
        assert_eq!(translate(event, &playing(&[(0, 0)]), &buttons), None);
    }

    #[test]
    fn test_restart_only_when_over() {
        let buttons = menu_buttons();
        let restart = InputEvent::KeyDown(KeyCode::R);
        assert_eq!(translate(restart, &playing(&[(0, 0)]), &buttons), None);

        let board = Board::from_mines(9, 9, &[(0, 0)]).unwrap();
        let mut session = Session::from_board(board, Difficulty::Easy);
        session.reveal(0, 0);
        let over = Screen::Playing(session);
        assert_eq!(translate(restart, &over, &buttons), Some(Action::Restart));

        let click = InputEvent::PointerDown(MouseButton::Left, 300.0, 300.0);
        assert_eq!(translate(click, &over, &buttons), None);
    }

    #[test]
    fn test_escape_returns_to_menu() {
        let buttons = menu_buttons();
        let event = InputEvent::KeyDown(KeyCode::Escape);
        let screen = playing(&[(0, 0)]);
        assert_eq!(translate(event, &screen, &buttons), Some(Action::BackToMenu));
        assert_eq!(translate(event, &Screen::Menu, &buttons), None);
    }
}
