//! Top-level application state machine.
//!
//! Six phases drive one wave of play. `NewWave` and `Continue` are real
//! one-tick phases rather than flags, so the transition table below is the
//! whole story and can be tested without a terminal:
//!
//! ```text
//! Inactive --start edge--> NewWave --(1 tick)--> Active
//! Active   --ship down, lives left--> Paused --start edge--> Continue --(1 tick)--> Active
//! Active   --lives gone or wave over--> Complete (terminal)
//! ```

use rand::Rng;

use crate::config::{ConfigError, WaveConfig};
use crate::input::InputFrame;
use crate::wave::Wave;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    /// Splash screen, waiting for the start key.
    Inactive,
    /// One tick: a fresh wave has just been built.
    NewWave,
    /// Normal play; the wave updates every tick.
    Active,
    /// Ship destroyed with lives remaining; waiting for the start key.
    Paused,
    /// One tick: the respawn update runs on the way back to Active.
    Continue,
    /// Won or lost; terminal.
    Complete,
}

pub struct App {
    phase: Phase,
    cfg: WaveConfig,
    wave: Option<Wave>,
    /// Key count seen on the previous step; start registers only on the
    /// frame this leaves zero.
    last_keys: u32,
}

impl App {
    /// The configuration is validated once here; every wave built later
    /// uses the same (now known-good) values.
    pub fn new(cfg: WaveConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        Ok(App {
            phase: Phase::Inactive,
            cfg,
            wave: None,
            last_keys: 0,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// `Some` in every phase except `Inactive`.
    pub fn wave(&self) -> Option<&Wave> {
        self.wave.as_ref()
    }

    pub fn config(&self) -> &WaveConfig {
        &self.cfg
    }

    /// Back to the splash screen, dropping any finished wave.
    pub fn reset(&mut self) {
        self.phase = Phase::Inactive;
        self.wave = None;
        self.last_keys = 0;
    }

    /// The message screens the display shows outside normal play.
    pub fn message(&self) -> Option<&'static str> {
        match self.phase {
            Phase::Inactive => Some("Press S to play\n\nSPACEBAR to fire"),
            Phase::Paused => Some("You lost a life.\n\nPress S to continue."),
            Phase::Complete => {
                if self.wave.as_ref().is_some_and(Wave::won) {
                    Some("Congratulations!\nYou have won!")
                } else {
                    Some("Too bad!\n\nYou have failed to\nstop the invaders!")
                }
            }
            _ => None,
        }
    }

    /// Advance the application one tick.
    pub fn step(&mut self, input: &InputFrame, dt: f32, rng: &mut impl Rng) {
        let start_edge = input.start && self.last_keys == 0;

        match self.phase {
            Phase::Inactive => {
                if start_edge {
                    // Config was validated in new(); this cannot fail.
                    if let Ok(wave) = Wave::new(self.cfg.clone(), rng) {
                        self.wave = Some(wave);
                        self.phase = Phase::NewWave;
                    }
                }
            }
            Phase::NewWave => {
                self.phase = Phase::Active;
            }
            Phase::Active => {
                if let Some(wave) = self.wave.as_mut() {
                    if wave.lives() == 0 || wave.game_over() {
                        self.phase = Phase::Complete;
                    } else if wave.ship().is_some() {
                        wave.update(input, dt, rng);
                    } else {
                        self.phase = Phase::Paused;
                    }
                }
            }
            Phase::Paused => {
                if start_edge {
                    self.phase = Phase::Continue;
                }
            }
            Phase::Continue => {
                self.phase = Phase::Active;
                if let Some(wave) = self.wave.as_mut() {
                    // The ship is down here, so this update takes the
                    // respawn path: fresh ship, bolts cleared.
                    wave.update(input, dt, rng);
                }
            }
            Phase::Complete => {}
        }

        self.last_keys = input.held;
    }
}
