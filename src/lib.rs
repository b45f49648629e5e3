//! Adaptive step-size policies for a two-player race along a linear track.
//!
//! Two movers alternate turns on a track of `N` cells, each choosing one of
//! `K` step sizes per turn. Learning agents keep a per-cell, per-step policy
//! that is sampled stochastically and reshaped after every episode according
//! to who reached the goal first.
//!
//! # Module Structure
//!
//! - `track` — Track geometry, seats, and move histories
//! - `policy` — Per-cell descriptors (ordinal dice or Gaussian laws)
//! - `sample` — Stochastic action selection
//! - `episode` — Turn-by-turn race state machine
//! - `credit` — Post-episode reinforcement and weakening
//! - `tally` — Win counts and rolling win rate
//! - `session` — Long-lived learning session tying it all together

mod credit;
mod episode;
mod policy;
mod sample;
mod session;
mod tally;
mod track;

#[cfg(feature = "cli")]
pub mod players;

pub use credit::*;
pub use episode::*;
pub use policy::*;
pub use sample::*;
pub use session::*;
pub use tally::*;
pub use track::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Index of a cell on the track (0 = start, N-1 = goal).
pub type Cell = usize;
/// Index of a step-size slot; slot `a` advances `a + 1` cells.
pub type Slot = usize;
/// Raw sampled values and Gaussian parameters.
pub type Score = f64;
/// Rolling win rates.
pub type Probability = f64;

// ============================================================================
// TRACK GEOMETRY
// ============================================================================
/// Number of cells on the default track, start and goal included.
pub const TRACK_LENGTH: usize = 10;
/// Number of selectable step sizes (steps 1, 2, 3).
pub const SLOT_COUNT: usize = 3;

// ============================================================================
// ORDINAL REPRESENTATION
// Each descriptor is a die; bigger dice roll bigger numbers more often.
// ============================================================================
/// Die sizes in increasing order of preference.
pub const DIE_SIZES: [u32; 7] = [4, 6, 8, 10, 12, 20, 100];
/// Die every enabled descriptor starts with.
pub const DIE_INITIAL: u32 = 6;

// ============================================================================
// PARAMETRIC REPRESENTATION
// Each descriptor is a Gaussian law: reinforcing raises the mean and tightens
// the spread, weakening lowers the mean and widens the spread.
// ============================================================================
/// Mean shift applied by a single bump.
pub const MEAN_INCREMENT: Score = 1.0;
/// Spread multiplier on reinforcement (divisor on weakening).
pub const STDDEV_FACTOR: Score = 0.95;
/// Mean every enabled descriptor starts with.
pub const INITIAL_MEAN: Score = 5.0;
/// Spread every enabled descriptor starts with.
pub const INITIAL_STDDEV: Score = 10.0;
/// Floor below which the mean is never weakened.
pub const MIN_MEAN: Score = 1.0;

// ============================================================================
// REPORTING
// ============================================================================
/// Episodes kept in the rolling win-rate window.
pub const RECENT_CAPACITY: usize = 20;
/// Win rate reported for each seat before any episode has finished.
pub const NO_DATA_RATE: Probability = 0.5;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, `level` to terminal.
#[cfg(feature = "cli")]
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
