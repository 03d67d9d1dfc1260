//! Rendering layer — all terminal I/O lives here.
//!
//! The game simulates in 800x700 screen units with y pointing up; this
//! module scales positions to terminal cells and flips the y axis. No
//! game logic is performed; state goes in, queued commands come out.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use alien_invaders::app::{App, Phase};
use alien_invaders::config::WaveConfig;
use alien_invaders::entities::{Bolt, BoltOwner, Ship};
use alien_invaders::wave::Wave;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_TITLE: Color = Color::Cyan;
const C_TEXT: Color = Color::White;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LIVES: Color = Color::Red;
const C_SHIP: Color = Color::White;
const C_BOLT_PLAYER: Color = Color::Cyan;
const C_BOLT_ALIEN: Color = Color::Magenta;
const C_DEFENSE_LINE: Color = Color::DarkBlue;
const C_HINT: Color = Color::DarkGrey;

/// One glyph and colour per sprite tier (bottom rows first).
const ALIEN_GLYPHS: [char; 3] = ['▼', '◆', '●'];
const ALIEN_COLORS: [Color; 3] = [Color::Green, Color::Yellow, Color::Magenta];

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, app: &App) -> std::io::Result<()> {
    let (width, height) = terminal::size()?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    match app.wave() {
        None => draw_splash(out, app, width, height)?,
        Some(wave) => {
            draw_scene(out, wave, width, height)?;
            // Paused and Complete keep the battlefield visible under the text.
            if let Some(message) = app.message() {
                draw_centered(out, message, C_TEXT, width, height)?;
            }
        }
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Coordinate mapping ────────────────────────────────────────────────────────

/// Game units → terminal cell. The y axis flips: game y grows upward,
/// terminal rows grow downward.
fn to_cell(cfg: &WaveConfig, x: f32, y: f32, width: u16, height: u16) -> (u16, u16) {
    let col = (x / cfg.game_width * width as f32) as i32;
    let row = ((1.0 - y / cfg.game_height) * height as f32) as i32;
    (
        col.clamp(0, width.saturating_sub(1) as i32) as u16,
        row.clamp(0, height.saturating_sub(1) as i32) as u16,
    )
}

// ── Battlefield ───────────────────────────────────────────────────────────────

fn draw_scene<W: Write>(out: &mut W, wave: &Wave, width: u16, height: u16) -> std::io::Result<()> {
    let cfg = wave.config();

    draw_defense_line(out, cfg, width, height)?;

    for alien in wave.formation().live_aliens() {
        let (col, row) = to_cell(cfg, alien.x(), alien.y(), width, height);
        let tier = alien.tier() as usize % ALIEN_GLYPHS.len();
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(ALIEN_COLORS[tier]))?;
        out.queue(Print(ALIEN_GLYPHS[tier]))?;
    }

    for bolt in wave.bolts().iter() {
        draw_bolt(out, cfg, bolt, width, height)?;
    }

    if let Some(ship) = wave.ship() {
        draw_ship(out, cfg, ship, width, height)?;
    }

    draw_hud(out, wave, width)?;
    draw_controls_hint(out, height)?;
    Ok(())
}

fn draw_defense_line<W: Write>(
    out: &mut W,
    cfg: &WaveConfig,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    let (_, row) = to_cell(cfg, 0.0, cfg.defense_line, width, height);
    out.queue(cursor::MoveTo(0, row))?;
    out.queue(style::SetForegroundColor(C_DEFENSE_LINE))?;
    out.queue(Print("╌".repeat(width as usize)))?;
    Ok(())
}

fn draw_ship<W: Write>(
    out: &mut W,
    cfg: &WaveConfig,
    ship: &Ship,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    // 2-row sprite:
    //   ▲       ← tip
    //  /█\      ← hull + wings
    let (col, row) = to_cell(cfg, ship.x(), ship.y(), width, height);
    out.queue(style::SetForegroundColor(C_SHIP))?;
    out.queue(cursor::MoveTo(col, row.saturating_sub(1)))?;
    out.queue(Print("▲"))?;
    out.queue(cursor::MoveTo(col.saturating_sub(1), row))?;
    out.queue(Print("/█\\"))?;
    Ok(())
}

fn draw_bolt<W: Write>(
    out: &mut W,
    cfg: &WaveConfig,
    bolt: &Bolt,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    let (col, row) = to_cell(cfg, bolt.x(), bolt.y(), width, height);
    out.queue(cursor::MoveTo(col, row))?;
    match bolt.owner() {
        BoltOwner::Player => {
            out.queue(style::SetForegroundColor(C_BOLT_PLAYER))?;
            out.queue(Print("║"))?;
        }
        BoltOwner::Alien => {
            out.queue(style::SetForegroundColor(C_BOLT_ALIEN))?;
            out.queue(Print("↓"))?;
        }
    }
    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, wave: &Wave, width: u16) -> std::io::Result<()> {
    // Score — left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score:{:>6}", wave.score())))?;

    // Lives — right, as hearts
    let hearts: String = "♥".repeat(wave.lives() as usize);
    let lives_str = format!("Lives:{}", hearts);
    let rx = width.saturating_sub(lives_str.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&lives_str))?;
    Ok(())
}

fn draw_controls_hint<W: Write>(out: &mut W, height: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Fire   S : Start   Q : Quit"))?;
    Ok(())
}

// ── Message screens ───────────────────────────────────────────────────────────

fn draw_splash<W: Write>(out: &mut W, app: &App, width: u16, height: u16) -> std::io::Result<()> {
    let cx = width / 2;
    let cy = height / 2;

    let title = "★  ALIEN  INVADERS  ★";
    out.queue(cursor::MoveTo(
        cx.saturating_sub(title.chars().count() as u16 / 2),
        cy.saturating_sub(6),
    ))?;
    out.queue(style::SetForegroundColor(C_TITLE))?;
    out.queue(Print(title))?;

    if let Some(message) = app.message() {
        draw_centered(out, message, C_TEXT, width, height)?;
    }

    if app.phase() == Phase::Inactive {
        out.queue(cursor::MoveTo(cx.saturating_sub(16), cy + 5))?;
        out.queue(style::SetForegroundColor(C_HINT))?;
        out.queue(Print("[1] Easy   [2] Medium   [3] Hard"))?;
    }

    draw_controls_hint(out, height)?;
    Ok(())
}

/// Print a multi-line message centered on the screen, one row per line.
fn draw_centered<W: Write>(
    out: &mut W,
    message: &str,
    color: Color,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    let lines: Vec<&str> = message.lines().collect();
    let cx = width / 2;
    let start_row = (height / 2).saturating_sub(lines.len() as u16 / 2);

    out.queue(style::SetForegroundColor(color))?;
    for (i, line) in lines.iter().enumerate() {
        let col = cx.saturating_sub(line.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, start_row + i as u16))?;
        out.queue(Print(*line))?;
    }
    Ok(())
}
