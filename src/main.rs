use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;

use wrapsnake::config::{self, Board, Theme};
use wrapsnake::error::AppError;
use wrapsnake::game::GameState;
use wrapsnake::input::{self, GameInput};
use wrapsnake::renderer;
use wrapsnake::terminal_runtime::{AppTerminal, TerminalSession};

/// Endless wrap-around snake for the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Color theme (classic, ocean, neon).
    #[arg(long, default_value = "classic")]
    theme: String,

    /// Milliseconds between simulation ticks.
    #[arg(long = "tick-ms", default_value_t = config::DEFAULT_TICK_INTERVAL_MS)]
    tick_ms: u64,

    /// Seed for deterministic food and reset placement.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("wrapsnake: {error}");
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<(), AppError> {
    let cli = Cli::parse();

    let theme = *config::theme_by_name(&cli.theme)
        .ok_or_else(|| AppError::UnknownTheme(cli.theme.clone()))?;
    if cli.tick_ms < config::MIN_TICK_INTERVAL_MS {
        return Err(AppError::TickIntervalTooShort(
            cli.tick_ms,
            config::MIN_TICK_INTERVAL_MS,
        ));
    }

    let board = Board::default();
    let state = match cli.seed {
        Some(seed) => GameState::new_with_seed(board, seed),
        None => GameState::new(board),
    };

    let mut session = TerminalSession::enter()?;
    let result = run(
        session.terminal_mut(),
        state,
        &theme,
        Duration::from_millis(cli.tick_ms),
    );
    drop(session);

    result
}

/// Fixed-rate loop: draw, drain input until the tick deadline, step.
fn run(
    terminal: &mut AppTerminal,
    mut state: GameState,
    theme: &Theme,
    tick_interval: Duration,
) -> Result<(), AppError> {
    let mut next_tick = Instant::now() + tick_interval;

    loop {
        terminal.draw(|frame| renderer::render(frame, &state, theme))?;

        // The poll timeout doubles as the fixed-rate wait between ticks.
        // Events that carry no game meaning burn their share of the wait
        // without ending it, so ticks land on the deadline.
        while let Some(remaining) = next_tick.checked_duration_since(Instant::now()) {
            match input::poll_game_input(remaining)? {
                Some(GameInput::Quit) => return Ok(()),
                Some(input) => state.apply_input(input),
                None => {}
            }
        }

        state.tick();
        next_tick += tick_interval;
    }
}
