//! Connect-four engine with a minimax opponent and websocket game rooms.
//!
//! ## Modules
//!
//! - [`board`]: 6×7 grid, gravity placement, run scanning
//! - [`search`]: static heuristic and alpha-beta minimax
//! - [`game`]: per-room turn and outcome state machine
//! - [`gameroom`]: rooms, participants, wire protocol and the lobby registry
//! - [`hosting`]: actix-web server bridging websockets into the lobby
pub mod board;
pub mod game;
pub mod search;

#[cfg(feature = "server")]
pub mod gameroom;
#[cfg(feature = "server")]
pub mod hosting;

// ============================================================================
// BOARD GEOMETRY
// ============================================================================
/// Number of rows on the board.
pub const ROWS: usize = 6;
/// Number of columns on the board.
pub const COLS: usize = 7;
/// Run length that wins the game.
pub const CONNECT: usize = 4;
/// Column index favored by the heuristic.
pub const CENTER: usize = COLS / 2;

// ============================================================================
// HEURISTIC WEIGHTS
// ============================================================================
/// Score per own disc in the center column.
pub const CENTER_WEIGHT: i32 = 3;
/// (run length, weight) pairs tallied for both sides.
pub const RUN_WEIGHTS: [(usize, i32); 3] = [(2, 10), (3, 50), (4, 10000)];

// ============================================================================
// COMPUTER OPPONENT
// ============================================================================
/// Default search depth in plies.
pub const SEARCH_DEPTH: usize = 4;
/// Default pause before the computer replies (milliseconds).
pub const REPLY_DELAY_MS: u64 = 500;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` and writes DEBUG to file, `level` to terminal.
#[cfg(feature = "server")]
pub fn log(level: log::LevelFilter) -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
