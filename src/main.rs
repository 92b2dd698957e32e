use macroquad::prelude::*;
use minesweeper::{
    App, FramePacer, Renderer, Screen,
    input,
    ui::{self, TICK_RATE, WINDOW_HEIGHT, WINDOW_WIDTH},
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn window_conf() -> Conf {
    Conf {
        window_title: "Minesweeper".to_owned(),
        window_width: WINDOW_WIDTH as i32,
        window_height: WINDOW_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[macroquad::main(window_conf)]
async fn main() {
    init_logging();
    info!("Starting Minesweeper");

    // Window close arrives as an input event instead of killing the loop
    prevent_quit();

    let mut app = App::new();
    let renderer = Renderer::new();
    let mut pacer = FramePacer::new(TICK_RATE);
    let menu_buttons = ui::menu_buttons();

    'frame: while app.is_running() {
        for event in input::poll_events() {
            let Some(action) = input::translate(event, app.screen(), &menu_buttons) else {
                continue;
            };
            if let Err(err) = app.apply(action) {
                error!(%err, "Could not start a game");
                break 'frame;
            }
        }

        match app.screen() {
            Screen::Menu => renderer.draw_menu(&menu_buttons, mouse_position()),
            Screen::Playing(session) => renderer.draw_session(session),
        }

        next_frame().await;
        pacer.wait();
    }

    info!("Shutting down");
}
