//! Wave configuration — every tunable constant in one place.
//!
//! A `WaveConfig` is immutable for the lifetime of a wave. The classic
//! arcade values live in `WaveConfig::classic()`; the difficulty presets
//! only vary the march cadence and the alien fire-rate bound.

use std::error::Error;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Level {
    Easy,
    Medium,
    Hard,
}

// ── Difficulty tables ────────────────────────────────────────────────────────

/// Seconds between formation steps.
fn march_cadence(level: Level) -> f32 {
    match level {
        Level::Easy => 0.9,
        Level::Medium => 0.65,
        Level::Hard => 0.4,
    }
}

/// Upper bound on the number of formation steps between alien shots.
fn fire_rate_bound(level: Level) -> u32 {
    match level {
        Level::Easy => 7,
        Level::Medium => 5,
        Level::Hard => 3,
    }
}

// ── Configuration ────────────────────────────────────────────────────────────

/// All constants a single wave consumes. Distances are screen units with
/// y increasing upward; positions are box centers.
#[derive(Clone, Debug)]
pub struct WaveConfig {
    pub game_width: f32,
    pub game_height: f32,

    pub ship_width: f32,
    pub ship_height: f32,
    /// Fixed y of the ship's center.
    pub ship_bottom: f32,
    /// Horizontal distance the ship covers per update while a key is held.
    pub ship_movement: f32,
    pub ship_lives: u32,

    pub alien_rows: usize,
    pub aliens_in_row: usize,
    pub alien_width: f32,
    pub alien_height: f32,
    /// Horizontal gap between adjacent aliens (and before the first column).
    pub alien_h_sep: f32,
    /// Vertical gap between adjacent rows.
    pub alien_v_sep: f32,
    /// Distance from the top of the screen to the formation.
    pub alien_ceiling: f32,
    /// Horizontal distance of one formation step.
    pub alien_h_walk: f32,
    /// Vertical drop when the formation bounces off a wall.
    pub alien_v_walk: f32,
    /// Seconds between formation steps.
    pub alien_speed: f32,

    pub bolt_width: f32,
    pub bolt_height: f32,
    /// Distance a bolt covers per update.
    pub bolt_speed: f32,
    /// Aliens fire after a random 1..=bolt_rate formation steps.
    pub bolt_rate: u32,

    /// Aliens reaching this y cost the player the wave.
    pub defense_line: f32,
}

impl WaveConfig {
    /// The classic arcade layout (Medium difficulty).
    pub fn classic() -> Self {
        WaveConfig {
            game_width: 800.0,
            game_height: 700.0,
            ship_width: 44.0,
            ship_height: 44.0,
            ship_bottom: 32.0,
            ship_movement: 5.0,
            ship_lives: 3,
            alien_rows: 5,
            aliens_in_row: 12,
            alien_width: 33.0,
            alien_height: 33.0,
            alien_h_sep: 16.0,
            alien_v_sep: 16.0,
            alien_ceiling: 100.0,
            alien_h_walk: 8.0,
            alien_v_walk: 16.0,
            alien_speed: march_cadence(Level::Medium),
            bolt_width: 4.0,
            bolt_height: 16.0,
            bolt_speed: 10.0,
            bolt_rate: fire_rate_bound(Level::Medium),
            defense_line: 100.0,
        }
    }

    pub fn for_level(level: Level) -> Self {
        WaveConfig {
            alien_speed: march_cadence(level),
            bolt_rate: fire_rate_bound(level),
            ..WaveConfig::classic()
        }
    }

    /// Total width of the freshly laid-out formation, including the
    /// leading gap.
    fn formation_width(&self) -> f32 {
        self.alien_h_sep
            + self.aliens_in_row as f32 * self.alien_width
            + (self.aliens_in_row.saturating_sub(1)) as f32 * self.alien_h_sep
    }

    /// y of the bottom row's centers at wave start.
    pub(crate) fn formation_bottom(&self) -> f32 {
        self.game_height
            - (self.alien_ceiling
                + self.alien_rows as f32 * self.alien_height
                + (self.alien_rows.saturating_sub(1)) as f32 * self.alien_v_sep)
    }

    /// Checks that the configuration describes a playable wave. Called at
    /// wave construction; a bad config is a setup mistake, not something a
    /// tick can recover from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.alien_rows == 0 || self.aliens_in_row == 0 {
            return Err(ConfigError::EmptyGrid {
                rows: self.alien_rows,
                cols: self.aliens_in_row,
            });
        }
        for (name, value) in [
            ("game_width", self.game_width),
            ("game_height", self.game_height),
            ("ship_width", self.ship_width),
            ("ship_height", self.ship_height),
            ("alien_width", self.alien_width),
            ("alien_height", self.alien_height),
            ("alien_speed", self.alien_speed),
            ("bolt_width", self.bolt_width),
            ("bolt_height", self.bolt_height),
            ("bolt_speed", self.bolt_speed),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        if self.bolt_rate == 0 {
            return Err(ConfigError::ZeroBoltRate);
        }
        if self.ship_lives == 0 {
            return Err(ConfigError::ZeroLives);
        }
        if self.formation_width() > self.game_width {
            return Err(ConfigError::FormationTooWide {
                formation: self.formation_width(),
                surface: self.game_width,
            });
        }
        if self.formation_bottom() <= self.defense_line {
            return Err(ConfigError::FormationBelowDefenseLine {
                bottom: self.formation_bottom(),
                line: self.defense_line,
            });
        }
        Ok(())
    }
}

impl Default for WaveConfig {
    fn default() -> Self {
        WaveConfig::classic()
    }
}

// ── Errors ───────────────────────────────────────────────────────────────────

/// A configuration that cannot produce a playable wave.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    EmptyGrid { rows: usize, cols: usize },
    NonPositive { name: &'static str, value: f32 },
    ZeroBoltRate,
    ZeroLives,
    FormationTooWide { formation: f32, surface: f32 },
    FormationBelowDefenseLine { bottom: f32, line: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyGrid { rows, cols } => {
                write!(f, "alien grid is empty ({rows} rows x {cols} columns)")
            }
            ConfigError::NonPositive { name, value } => {
                write!(f, "{name} must be positive (got {value})")
            }
            ConfigError::ZeroBoltRate => write!(f, "bolt_rate must be at least 1"),
            ConfigError::ZeroLives => write!(f, "ship_lives must be at least 1"),
            ConfigError::FormationTooWide { formation, surface } => write!(
                f,
                "formation is {formation} units wide but the surface is only {surface}"
            ),
            ConfigError::FormationBelowDefenseLine { bottom, line } => write!(
                f,
                "formation bottom row starts at y={bottom}, at or below the defense line y={line}"
            ),
        }
    }
}

impl Error for ConfigError {}
