use std::io;

use thiserror::Error;

/// Top-level failure taxonomy: startup validation and terminal I/O.
///
/// In-game events (self-collision, food consumption) are state transitions,
/// not errors, and never surface here.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("unknown theme {0:?} (available: classic, ocean, neon)")]
    UnknownTheme(String),

    #[error("tick interval {0} ms is below the minimum of {1} ms")]
    TickIntervalTooShort(u64, u64),

    #[error("terminal I/O failure: {0}")]
    Io(#[from] io::Error),
}
