//! Game entity types: the ship, a single alien, and a laser bolt.
//!
//! These are passive positioned boxes. The wave controller performs all
//! cross-entity work through the query methods here; entities hold no
//! references to each other and no game rules beyond their own geometry.

use crate::config::WaveConfig;

/// True if the point lies inside the axis-aligned box centered at
/// (`cx`, `cy`). Edges count as inside.
fn box_contains(cx: f32, cy: f32, w: f32, h: f32, px: f32, py: f32) -> bool {
    (px - cx).abs() <= w / 2.0 && (py - cy).abs() <= h / 2.0
}

/// True if any of the bolt's four bounding-box corners lies inside the box
/// centered at (`cx`, `cy`).
fn hit_by_corner(cx: f32, cy: f32, w: f32, h: f32, bolt: &Bolt) -> bool {
    let hw = bolt.width / 2.0;
    let hh = bolt.height / 2.0;
    let corners = [
        (bolt.x - hw, bolt.y - hh),
        (bolt.x + hw, bolt.y - hh),
        (bolt.x - hw, bolt.y + hh),
        (bolt.x + hw, bolt.y + hh),
    ];
    corners
        .iter()
        .any(|&(px, py)| box_contains(cx, cy, w, h, px, py))
}

// ── Ship ─────────────────────────────────────────────────────────────────────

/// The player ship. Center x varies; y is pinned to the bottom of the
/// screen for the whole wave.
#[derive(Clone, Debug)]
pub struct Ship {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

impl Ship {
    /// A fresh ship centered on the screen (wave start and respawn).
    pub fn new(cfg: &WaveConfig) -> Self {
        Ship {
            x: cfg.game_width / 2.0,
            y: cfg.ship_bottom,
            width: cfg.ship_width,
            height: cfg.ship_height,
        }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Shift horizontally, clamped so the hull stays on screen.
    pub fn shift(&mut self, dx: f32, game_width: f32) {
        let x = self.x + dx;
        let x = x.max(self.width / 2.0);
        self.x = x.min(game_width - self.width / 2.0);
    }

    /// True if an alien-fired bolt overlaps the hull. Player bolts never
    /// hit the ship that fired them.
    pub fn collides(&self, bolt: &Bolt) -> bool {
        bolt.owner() == BoltOwner::Alien
            && hit_by_corner(self.x, self.y, self.width, self.height, bolt)
    }
}

// ── Alien ────────────────────────────────────────────────────────────────────

/// One alien in the formation. `tier` selects the sprite: three tiers,
/// cycling every two rows from the bottom of the grid.
#[derive(Clone, Debug)]
pub struct Alien {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    tier: u8,
}

impl Alien {
    pub fn new(x: f32, y: f32, tier: u8, cfg: &WaveConfig) -> Self {
        Alien {
            x,
            y,
            width: cfg.alien_width,
            height: cfg.alien_height,
            tier,
        }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn tier(&self) -> u8 {
        self.tier
    }

    pub fn shift_x(&mut self, dx: f32) {
        self.x += dx;
    }

    pub fn shift_y(&mut self, dy: f32) {
        self.y += dy;
    }

    /// True if a player-fired bolt overlaps this alien. Alien bolts pass
    /// straight through other aliens.
    pub fn collides(&self, bolt: &Bolt) -> bool {
        bolt.owner() == BoltOwner::Player
            && hit_by_corner(self.x, self.y, self.width, self.height, bolt)
    }
}

// ── Bolt ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BoltOwner {
    Player,
    Alien,
}

/// A laser bolt in flight. The owner decides which side it can damage;
/// the stored velocity (positive up for the player, negative down for
/// aliens) only drives motion.
#[derive(Clone, Debug)]
pub struct Bolt {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    vy: f32,
    owner: BoltOwner,
}

impl Bolt {
    /// A bolt leaving the ship's nose, travelling up.
    pub fn player_fired(x: f32, y: f32, cfg: &WaveConfig) -> Self {
        Bolt {
            x,
            y,
            width: cfg.bolt_width,
            height: cfg.bolt_height,
            vy: cfg.bolt_speed,
            owner: BoltOwner::Player,
        }
    }

    /// A bolt leaving an alien's underside, travelling down.
    pub fn alien_fired(x: f32, y: f32, cfg: &WaveConfig) -> Self {
        Bolt {
            x,
            y,
            width: cfg.bolt_width,
            height: cfg.bolt_height,
            vy: -cfg.bolt_speed,
            owner: BoltOwner::Alien,
        }
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn velocity(&self) -> f32 {
        self.vy
    }

    pub fn owner(&self) -> BoltOwner {
        self.owner
    }

    /// Move one tick along the velocity.
    pub fn advance(&mut self) {
        self.y += self.vy;
    }
}
