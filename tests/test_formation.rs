use alien_invaders::config::WaveConfig;
use alien_invaders::entities::{Bolt, BoltOwner};
use alien_invaders::formation::Formation;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// A 2x3 grid on a 400x400 surface.  Layout:
///   columns at x = 20, 50, 80   (sep 10, width 20)
///   rows at    y = 300 (bottom), 330
/// One march step is 10 sideways or 10 down; cadence 1 second.
fn small_cfg() -> WaveConfig {
    WaveConfig {
        game_width: 400.0,
        game_height: 400.0,
        ship_width: 20.0,
        ship_height: 20.0,
        ship_bottom: 20.0,
        ship_movement: 5.0,
        ship_lives: 3,
        alien_rows: 2,
        aliens_in_row: 3,
        alien_width: 20.0,
        alien_height: 20.0,
        alien_h_sep: 10.0,
        alien_v_sep: 10.0,
        alien_ceiling: 50.0,
        alien_h_walk: 10.0,
        alien_v_walk: 10.0,
        alien_speed: 1.0,
        bolt_width: 4.0,
        bolt_height: 10.0,
        bolt_speed: 10.0,
        bolt_rate: 3,
        defense_line: 100.0,
    }
}

/// One column of two aliens, centered at x = 100.
fn column_cfg() -> WaveConfig {
    WaveConfig {
        aliens_in_row: 1,
        alien_h_sep: 90.0,
        ..small_cfg()
    }
}

fn seeded() -> StdRng {
    StdRng::seed_from_u64(42)
}

// ── Layout ────────────────────────────────────────────────────────────────────

#[test]
fn new_formation_fills_the_grid() {
    let c = small_cfg();
    let f = Formation::new(&c, &mut seeded());
    assert_eq!(f.live_count(), 6);
    assert!(!f.is_empty());
}

#[test]
fn new_formation_positions_follow_separations() {
    let c = small_cfg();
    let f = Formation::new(&c, &mut seeded());
    let a = f.alien_at(0, 0).unwrap();
    assert_eq!(a.x(), 20.0); // h_sep + width/2
    assert_eq!(a.y(), 300.0); // bottom row
    let b = f.alien_at(1, 2).unwrap();
    assert_eq!(b.x(), 80.0);
    assert_eq!(b.y(), 330.0);
}

#[test]
fn sprite_tiers_cycle_every_two_rows() {
    let c = WaveConfig {
        alien_rows: 7,
        ..small_cfg()
    };
    let f = Formation::new(&c, &mut seeded());
    let tiers: Vec<u8> = (0..7).map(|r| f.alien_at(r, 0).unwrap().tier()).collect();
    assert_eq!(tiers, vec![0, 0, 1, 1, 2, 2, 0]);
}

// ── March cadence ─────────────────────────────────────────────────────────────

#[test]
fn march_steps_only_after_cadence_elapses() {
    let c = small_cfg(); // cadence 1.0 s
    let mut rng = seeded();
    let mut f = Formation::new(&c, &mut rng);

    f.march(&c, 0.5, &mut rng);
    assert_eq!(f.alien_at(0, 0).unwrap().x(), 20.0); // 0.5 s: too soon
    f.march(&c, 0.5, &mut rng);
    assert_eq!(f.alien_at(0, 0).unwrap().x(), 20.0); // exactly 1.0 s: still too soon
    f.march(&c, 0.5, &mut rng);
    assert_eq!(f.alien_at(0, 0).unwrap().x(), 30.0); // 1.5 s: one step right
    f.march(&c, 0.5, &mut rng);
    assert_eq!(f.alien_at(0, 0).unwrap().x(), 30.0); // accumulator was reset
}

#[test]
fn march_moves_every_live_alien_together() {
    let c = small_cfg();
    let mut rng = seeded();
    let mut f = Formation::new(&c, &mut rng);
    f.march(&c, 1.5, &mut rng);
    for row in 0..2 {
        for col in 0..3 {
            let a = f.alien_at(row, col).unwrap();
            assert_eq!(a.x(), 30.0 + col as f32 * 30.0);
        }
    }
}

// ── Wall bounces ──────────────────────────────────────────────────────────────

#[test]
fn formation_reverses_at_right_wall() {
    let c = small_cfg();
    let mut rng = seeded();
    let mut f = Formation::new(&c, &mut rng);

    // Rightmost column starts at 80 and advances 10 per step; the wall
    // threshold (walk + half width = 20 units from the edge) lands at 380.
    for _ in 0..30 {
        f.march(&c, 1.5, &mut rng);
    }
    assert_eq!(f.alien_at(0, 2).unwrap().x(), 380.0);
    assert_eq!(f.alien_at(0, 0).unwrap().y(), 300.0); // no drop yet

    // The 31st step descends and reverses instead of moving sideways
    f.march(&c, 1.5, &mut rng);
    assert_eq!(f.alien_at(0, 2).unwrap().x(), 380.0);
    assert_eq!(f.alien_at(0, 0).unwrap().y(), 290.0);

    // Now marching left
    f.march(&c, 1.5, &mut rng);
    assert_eq!(f.alien_at(0, 2).unwrap().x(), 370.0);
    assert_eq!(f.alien_at(0, 0).unwrap().y(), 290.0);
}

#[test]
fn formation_reverses_at_left_wall() {
    let c = small_cfg();
    let mut rng = seeded();
    let mut f = Formation::new(&c, &mut rng);

    // 30 steps right, bounce, 30 steps left: the leftmost column is back
    // at 20, exactly on the left threshold.
    for _ in 0..61 {
        f.march(&c, 1.5, &mut rng);
    }
    assert_eq!(f.alien_at(0, 0).unwrap().x(), 20.0);
    assert_eq!(f.alien_at(0, 0).unwrap().y(), 290.0);

    // Bounce: drop again and head right
    f.march(&c, 1.5, &mut rng);
    assert_eq!(f.alien_at(0, 0).unwrap().x(), 20.0);
    assert_eq!(f.alien_at(0, 0).unwrap().y(), 280.0);
    f.march(&c, 1.5, &mut rng);
    assert_eq!(f.alien_at(0, 0).unwrap().x(), 30.0);
}

// ── Alien fire ────────────────────────────────────────────────────────────────

#[test]
fn bolt_rate_one_fires_on_every_step() {
    let c = WaveConfig {
        bolt_rate: 1,
        ..small_cfg()
    };
    let mut rng = seeded();
    let mut f = Formation::new(&c, &mut rng);

    let bolt = f.march(&c, 1.5, &mut rng).expect("fires every step");
    assert_eq!(bolt.owner(), BoltOwner::Alien);
    assert!(bolt.velocity() < 0.0);
    // Fired after the move, so column centers are 30/60/90 now
    assert!([30.0, 60.0, 90.0].contains(&bolt.x()));
    // From the bottom row's underside: 300 - height/2
    assert_eq!(bolt.y(), 290.0);

    // Threshold redrawn from 1..=1, so the next step fires too
    assert!(f.march(&c, 1.5, &mut rng).is_some());
}

#[test]
fn fire_targets_lowest_survivor_in_column() {
    let c = WaveConfig {
        bolt_rate: 1,
        ..column_cfg()
    };
    let mut rng = seeded();
    let mut f = Formation::new(&c, &mut rng);

    // Shoot out the bottom alien of the single column
    let hit = f.kill_first_hit(&Bolt::player_fired(100.0, 300.0, &c));
    assert_eq!(hit, Some(0));
    assert_eq!(f.live_count(), 1);

    // The next shot must come from the remaining (upper) alien
    let bolt = f.march(&c, 1.5, &mut rng).expect("fires every step");
    assert_eq!(bolt.x(), 110.0); // column shifted right by one walk
    assert_eq!(bolt.y(), 320.0); // 330 - height/2
}

// ── Damage ────────────────────────────────────────────────────────────────────

#[test]
fn kill_first_hit_nulls_one_cell() {
    let c = small_cfg();
    let mut rng = seeded();
    let mut f = Formation::new(&c, &mut rng);

    let hit = f.kill_first_hit(&Bolt::player_fired(50.0, 300.0, &c));
    assert_eq!(hit, Some(0));
    assert!(f.alien_at(0, 1).is_none());
    assert_eq!(f.live_count(), 5);

    // Same spot again: the cell is already empty
    let again = f.kill_first_hit(&Bolt::player_fired(50.0, 300.0, &c));
    assert_eq!(again, None);
    assert_eq!(f.live_count(), 5);
}

#[test]
fn alien_bolts_never_kill_aliens() {
    let c = small_cfg();
    let mut rng = seeded();
    let mut f = Formation::new(&c, &mut rng);
    let hit = f.kill_first_hit(&Bolt::alien_fired(50.0, 300.0, &c));
    assert_eq!(hit, None);
    assert_eq!(f.live_count(), 6);
}

// ── Attrition edge cases ──────────────────────────────────────────────────────

#[test]
fn empty_formation_march_is_a_no_op() {
    let c = WaveConfig {
        alien_rows: 1,
        ..column_cfg()
    };
    let mut rng = seeded();
    let mut f = Formation::new(&c, &mut rng);

    assert_eq!(f.kill_first_hit(&Bolt::player_fired(100.0, 300.0, &c)), Some(0));
    assert!(f.is_empty());

    // No aliens left: no panic, no bolt
    assert!(f.march(&c, 1.5, &mut rng).is_none());
    assert!(!f.has_dipped_below(c.defense_line));
}

#[test]
fn dipped_query_is_inclusive() {
    let c = small_cfg();
    let f = Formation::new(&c, &mut seeded());
    // Bottom row sits at y = 300
    assert!(!f.has_dipped_below(299.0));
    assert!(f.has_dipped_below(300.0));
    assert!(f.has_dipped_below(301.0));
}
