//! The per-wave controller.
//!
//! Owns the formation, the ship, and the bolts; one `update` call per tick
//! drives marching, steering, firing, and collision resolution. The
//! surrounding application decides when ticks happen (and stops sending
//! input while the ship is down); this module decides what they do.

use rand::Rng;

use crate::bolts::BoltManager;
use crate::config::{ConfigError, WaveConfig};
use crate::entities::{Bolt, Ship};
use crate::formation::Formation;
use crate::input::InputFrame;

/// Score awarded per alien destroyed, by sprite tier (bottom rows up).
fn score_for(tier: u8) -> u32 {
    match tier {
        0 => 10,
        1 => 20,
        _ => 30,
    }
}

pub struct Wave {
    cfg: WaveConfig,
    formation: Formation,
    bolts: BoltManager,
    /// `None` only during the one-frame "destroyed, awaiting respawn" gap.
    ship: Option<Ship>,
    lives: u32,
    score: u32,
    /// Key count seen on the previous frame; a shot fires only on the
    /// frame this leaves zero.
    prev_keys: u32,
    game_over: bool,
    won: bool,
}

impl Wave {
    /// Builds a fresh wave, failing fast on an unplayable configuration.
    pub fn new(cfg: WaveConfig, rng: &mut impl Rng) -> Result<Self, ConfigError> {
        cfg.validate()?;
        let formation = Formation::new(&cfg, rng);
        let ship = Some(Ship::new(&cfg));
        let lives = cfg.ship_lives;
        Ok(Wave {
            cfg,
            formation,
            bolts: BoltManager::new(),
            ship,
            lives,
            score: 0,
            prev_keys: 0,
            game_over: false,
            won: false,
        })
    }

    // ── Getters for the application and the display ──────────────────────────

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn ship(&self) -> Option<&Ship> {
        self.ship.as_ref()
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn formation(&self) -> &Formation {
        &self.formation
    }

    pub fn bolts(&self) -> &BoltManager {
        &self.bolts
    }

    pub fn config(&self) -> &WaveConfig {
        &self.cfg
    }

    // ── Per-tick update ──────────────────────────────────────────────────────

    /// Advance the wave one tick. A no-op once the wave has ended.
    pub fn update(&mut self, input: &InputFrame, dt: f32, rng: &mut impl Rng) {
        if self.game_over {
            return;
        }
        // End-of-wave checks come first so an empty grid never reaches the
        // marching queries. Empty beats dipped: a cleared wave is a win.
        if self.formation.is_empty() {
            self.won = true;
            self.game_over = true;
            return;
        }
        if self.formation.has_dipped_below(self.cfg.defense_line) {
            self.game_over = true;
            return;
        }

        if let Some(bolt) = self.formation.march(&self.cfg, dt, rng) {
            self.bolts.push(bolt);
        }

        if let Some(ship) = self.ship.as_mut() {
            let mut dx = 0.0;
            if input.left {
                dx -= self.cfg.ship_movement;
            }
            if input.right {
                dx += self.cfg.ship_movement;
            }
            ship.shift(dx, self.cfg.game_width);

            if input.fire && self.prev_keys == 0 && !self.bolts.has_player_bolt() {
                self.bolts.push(Bolt::player_fired(
                    ship.x(),
                    ship.y() + ship.height() / 2.0,
                    &self.cfg,
                ));
            }
            self.prev_keys = input.held;
        } else {
            // One-frame recovery: fresh ship, clean slate.
            self.ship = Some(Ship::new(&self.cfg));
            self.bolts.clear();
        }

        if !self.bolts.is_empty() {
            self.bolts.advance(self.cfg.game_height);
            self.resolve_collisions();
        }
    }

    /// Test every live bolt, in collection order, against the grid first
    /// and the ship second. A bolt that kills an alien is spent and never
    /// also tested against the ship.
    fn resolve_collisions(&mut self) {
        let mut i = 0;
        while i < self.bolts.len() {
            if let Some(tier) = self.formation.kill_first_hit(self.bolts.get(i)) {
                self.score += score_for(tier);
                self.bolts.remove(i);
                continue;
            }
            let ship_hit = self
                .ship
                .as_ref()
                .is_some_and(|ship| ship.collides(self.bolts.get(i)));
            if ship_hit {
                self.ship = None;
                self.lives = self.lives.saturating_sub(1);
                self.bolts.remove(i);
                continue;
            }
            i += 1;
        }
    }
}
