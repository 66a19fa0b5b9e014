//! Duskfall - Entry Point
//!
//! Initializes the terminal, wires the simulation to the HUD, and runs
//! the main loop.

use std::fs::OpenOptions;
use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use duskfall::config::Config;
use duskfall::game::Game;
use duskfall::ui::App;

/// Target frames per second for the game loop
const TARGET_FPS: u64 = 60;
const FRAME_TIME: Duration = Duration::from_millis(1000 / TARGET_FPS);

fn main() -> Result<()> {
    // Initialize logging to file (to avoid interfering with the TUI)
    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("duskfall.log")
        .unwrap_or_else(|_| OpenOptions::new().write(true).open("/dev/null").unwrap());

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    log::info!("Starting Duskfall v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create the game and UI, and start the night
    let mut app = App::new(&config);
    let mut game = Game::new(&config);
    game.start();

    let result = run_game_loop(&mut terminal, &mut app, &mut game);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Report any errors
    if let Err(ref e) = result {
        log::error!("Game exited with error: {}", e);
        eprintln!("Error: {}", e);
    }

    log::info!("Duskfall shut down cleanly");
    result
}

/// Main game loop
fn run_game_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    game: &mut Game,
) -> Result<()> {
    let mut last_frame = Instant::now();

    loop {
        let frame_start = Instant::now();
        let delta = frame_start.duration_since(last_frame);
        last_frame = frame_start;

        // Handle input
        if event::poll(Duration::from_millis(0))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events, not releases
                if key.kind == KeyEventKind::Press && app.handle_key(key, game) {
                    break;
                }
            }
        }

        // Route queued input events, then advance the simulation
        app.pump_input(game);
        {
            let (display, effects) = app.sinks_mut();
            game.update(delta, display, effects);
        }

        // Render
        terminal.draw(|frame| {
            app.render(frame, game);
        })?;

        // Frame rate limiting
        let frame_time = frame_start.elapsed();
        if frame_time < FRAME_TIME {
            std::thread::sleep(FRAME_TIME - frame_time);
        }
    }

    Ok(())
}
