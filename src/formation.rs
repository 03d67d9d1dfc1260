//! The alien formation: a fixed grid of `Option<Alien>` that marches in
//! lockstep, bounces off the walls, and fires on a randomized step count.
//!
//! Killed aliens leave `None` holes; the grid itself never resizes, so
//! row/column addressing (lowest-in-column, extreme-in-direction) keeps
//! working as the wave thins out.

use rand::Rng;

use crate::config::WaveConfig;
use crate::entities::{Alien, Bolt};

#[derive(Clone, Copy, Debug, PartialEq)]
enum Direction {
    Left,
    Right,
}

pub struct Formation {
    /// grid[row][col]; row 0 is the bottom row.
    grid: Vec<Vec<Option<Alien>>>,
    direction: Direction,
    /// Seconds accumulated since the last step.
    time: f32,
    /// Steps taken since the last alien shot.
    steps: u32,
    /// The formation fires once `steps` reaches this; redrawn from
    /// 1..=bolt_rate after every shot.
    steps_until_shot: u32,
}

impl Formation {
    pub fn new(cfg: &WaveConfig, rng: &mut impl Rng) -> Self {
        let mut grid = Vec::with_capacity(cfg.alien_rows);
        let first_x = cfg.alien_h_sep + cfg.alien_width / 2.0;
        let mut y = cfg.formation_bottom();

        for row in 0..cfg.alien_rows {
            // Three sprite tiers, two rows per tier, cycling from the bottom.
            let tier = ((row % 6) / 2) as u8;
            let mut cells = Vec::with_capacity(cfg.aliens_in_row);
            let mut x = first_x;
            for _ in 0..cfg.aliens_in_row {
                cells.push(Some(Alien::new(x, y, tier, cfg)));
                x += cfg.alien_h_sep + cfg.alien_width;
            }
            grid.push(cells);
            y += cfg.alien_v_sep + cfg.alien_height;
        }

        Formation {
            grid,
            direction: Direction::Right,
            time: 0.0,
            steps: 0,
            steps_until_shot: rng.gen_range(1..=cfg.bolt_rate),
        }
    }

    // ── Marching ─────────────────────────────────────────────────────────────

    /// Accumulate `dt`; once it exceeds the march cadence, take exactly one
    /// discrete step (shift, or descend-and-reverse at a wall) and maybe
    /// return an alien bolt. Step cadence is time-based, so frame rate
    /// never changes the gait.
    pub fn march(&mut self, cfg: &WaveConfig, dt: f32, rng: &mut impl Rng) -> Option<Bolt> {
        self.time += dt;
        if self.time <= cfg.alien_speed {
            return None;
        }
        self.time = 0.0;

        match self.direction {
            Direction::Right => self.step_right(cfg),
            Direction::Left => self.step_left(cfg),
        }
        self.steps += 1;

        if self.steps >= self.steps_until_shot {
            let bolt = self.fire(cfg, rng);
            self.steps = 0;
            self.steps_until_shot = rng.gen_range(1..=cfg.bolt_rate);
            return bolt;
        }
        None
    }

    fn step_right(&mut self, cfg: &WaveConfig) {
        let Some(x) = self.rightmost_x() else { return };
        if cfg.game_width - x <= cfg.alien_h_walk + cfg.alien_width / 2.0 {
            self.shift_down(cfg.alien_v_walk);
            self.direction = Direction::Left;
        } else {
            self.shift_sideways(cfg.alien_h_walk);
        }
    }

    fn step_left(&mut self, cfg: &WaveConfig) {
        let Some(x) = self.leftmost_x() else { return };
        if x <= cfg.alien_h_walk + cfg.alien_width / 2.0 {
            self.shift_down(cfg.alien_v_walk);
            self.direction = Direction::Right;
        } else {
            self.shift_sideways(-cfg.alien_h_walk);
        }
    }

    fn shift_sideways(&mut self, dx: f32) {
        for alien in self.grid.iter_mut().flatten().flatten() {
            alien.shift_x(dx);
        }
    }

    fn shift_down(&mut self, dy: f32) {
        for alien in self.grid.iter_mut().flatten().flatten() {
            alien.shift_y(-dy);
        }
    }

    // ── Firing ───────────────────────────────────────────────────────────────

    /// The lowest surviving alien in a uniformly random non-empty column
    /// fires from its underside.
    fn fire(&self, cfg: &WaveConfig, rng: &mut impl Rng) -> Option<Bolt> {
        let col = self.random_occupied_column(rng)?;
        let alien = self.lowest_in_column(col)?;
        Some(Bolt::alien_fired(
            alien.x(),
            alien.y() - cfg.alien_height / 2.0,
            cfg,
        ))
    }

    fn random_occupied_column(&self, rng: &mut impl Rng) -> Option<usize> {
        let cols = self.grid.first().map_or(0, Vec::len);
        let occupied: Vec<usize> = (0..cols)
            .filter(|&col| self.grid.iter().any(|row| row[col].is_some()))
            .collect();
        if occupied.is_empty() {
            return None;
        }
        Some(occupied[rng.gen_range(0..occupied.len())])
    }

    fn lowest_in_column(&self, col: usize) -> Option<&Alien> {
        self.grid
            .iter()
            .filter_map(|row| row[col].as_ref())
            .min_by(|a, b| a.y().total_cmp(&b.y()))
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    fn rightmost_x(&self) -> Option<f32> {
        self.live_aliens()
            .map(Alien::x)
            .max_by(f32::total_cmp)
    }

    fn leftmost_x(&self) -> Option<f32> {
        self.live_aliens()
            .map(Alien::x)
            .min_by(f32::total_cmp)
    }

    pub fn is_empty(&self) -> bool {
        self.live_aliens().next().is_none()
    }

    /// True if any surviving alien has reached the defense line.
    pub fn has_dipped_below(&self, line: f32) -> bool {
        self.live_aliens().any(|a| a.y() <= line)
    }

    pub fn live_aliens(&self) -> impl Iterator<Item = &Alien> {
        self.grid.iter().flatten().flatten()
    }

    pub fn live_count(&self) -> usize {
        self.live_aliens().count()
    }

    pub fn alien_at(&self, row: usize, col: usize) -> Option<&Alien> {
        self.grid.get(row)?.get(col)?.as_ref()
    }

    // ── Damage ───────────────────────────────────────────────────────────────

    /// Null the first live cell (row-major order, so the lower row wins a
    /// geometric tie) the bolt overlaps; returns the killed alien's tier.
    /// Alien-fired bolts never match.
    pub fn kill_first_hit(&mut self, bolt: &Bolt) -> Option<u8> {
        for row in self.grid.iter_mut() {
            for cell in row.iter_mut() {
                if cell.as_ref().is_some_and(|alien| alien.collides(bolt)) {
                    let tier = cell.take().map(|alien| alien.tier());
                    return tier;
                }
            }
        }
        None
    }
}
