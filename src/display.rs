/// Rendering layer — all terminal I/O lives here.
///
/// The simulation runs on a virtual 800×600 playfield; this module scales
/// positions into terminal cells and translates state into crossterm
/// commands.  No game logic happens here.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use invaders::alien::AlienKind;
use invaders::config::{DANGER_LINE_Y, PLAY_HEIGHT, PLAY_WIDTH};
use invaders::game::Game;
use invaders::geometry::Point;
use invaders::score::{HighScoreTable, NAME_LENGTH};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LIVES: Color = Color::Red;
const C_PLAYER: Color = Color::White;
const C_ALIEN_TOXIC: Color = Color::Green;
const C_ALIEN_RAGE: Color = Color::Red;
const C_ALIEN_SPOOKY: Color = Color::Magenta;
const C_UFO: Color = Color::Cyan;
const C_BULLET_PLAYER: Color = Color::Cyan;
const C_BULLET_ALIEN: Color = Color::Magenta;
const C_EXPLOSION: Color = Color::Yellow;
const C_DANGER: Color = Color::DarkRed;
const C_HINT: Color = Color::DarkGrey;

const EXPLOSION_GLYPHS: [&str; 6] = ["·", "✦", "✸", "✹", "✺", "○"];

/// Scales virtual playfield coordinates into terminal cells, keeping one
/// row of HUD at the top and one of hints at the bottom.
#[derive(Clone, Copy)]
pub struct Viewport {
    width: u16,
    height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Viewport { width, height }
    }

    fn cell(&self, pos: Point) -> (u16, u16) {
        // The terminal can report any size mid-resize, including 0×0;
        // keep both clamp ranges non-empty.
        let max_x = i32::from(self.width).saturating_sub(1).max(0);
        let max_y = i32::from(self.height).saturating_sub(2).max(1);
        let rows = (i32::from(self.height) - 3).max(1) as f32;

        let x = (pos.x / PLAY_WIDTH * self.width as f32) as i32;
        let y = 1 + (pos.y / PLAY_HEIGHT * rows) as i32;
        (x.clamp(0, max_x) as u16, y.clamp(1, max_y) as u16)
    }
}

// ── Playing scene ─────────────────────────────────────────────────────────────

/// Render one complete frame of play.
pub fn render<W: Write>(
    out: &mut W,
    game: &Game,
    stage: usize,
    view: Viewport,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_hud(out, game, stage, view)?;
    draw_danger_line(out, view)?;

    for alien in game.formation.aliens.iter().filter(|a| a.alive) {
        draw_alien(out, view, alien.pos, alien.kind, alien.animator.frame())?;
    }

    if game.ufo.active {
        let (x, y) = view.cell(game.ufo.pos);
        out.queue(cursor::MoveTo(x, y))?;
        out.queue(style::SetForegroundColor(C_UFO))?;
        out.queue(Print(if game.ufo.animator.frame() % 2 == 0 {
            "<===>"
        } else {
            "<-=->"
        }))?;
    }

    for bullet in game.player.bullets.iter_active() {
        let (x, y) = view.cell(bullet.pos);
        out.queue(cursor::MoveTo(x, y))?;
        out.queue(style::SetForegroundColor(C_BULLET_PLAYER))?;
        out.queue(Print("║"))?;
    }

    for bullet in game.formation.bullets.iter_active() {
        let (x, y) = view.cell(bullet.pos);
        out.queue(cursor::MoveTo(x, y))?;
        out.queue(style::SetForegroundColor(C_BULLET_ALIEN))?;
        out.queue(Print("↓"))?;
    }

    for explosion in game.explosions.iter_active() {
        let (x, y) = view.cell(explosion.pos);
        out.queue(cursor::MoveTo(x, y))?;
        out.queue(style::SetForegroundColor(C_EXPLOSION))?;
        out.queue(Print(
            EXPLOSION_GLYPHS[explosion.animator.frame().min(EXPLOSION_GLYPHS.len() - 1)],
        ))?;
    }

    draw_player(out, game, view)?;
    draw_controls_hint(out, view)?;

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

fn draw_hud<W: Write>(
    out: &mut W,
    game: &Game,
    stage: usize,
    view: Viewport,
) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score:{:>7}", game.player.score)))?;

    let stage_str = format!("[ STAGE {} ]", stage + 1);
    let sx = (view.width / 2).saturating_sub(stage_str.len() as u16 / 2);
    out.queue(cursor::MoveTo(sx, 0))?;
    out.queue(style::SetForegroundColor(C_BORDER))?;
    out.queue(Print(&stage_str))?;

    let hearts: String = "♥".repeat(game.player.lives as usize);
    let lives_str = format!("Lives:{}", hearts);
    let rx = view
        .width
        .saturating_sub(lives_str.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&lives_str))?;

    Ok(())
}

fn draw_danger_line<W: Write>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    let (_, y) = view.cell(Point::new(0.0, DANGER_LINE_Y));
    out.queue(cursor::MoveTo(0, y))?;
    out.queue(style::SetForegroundColor(C_DANGER))?;
    out.queue(Print("·".repeat(view.width as usize)))?;
    Ok(())
}

fn draw_alien<W: Write>(
    out: &mut W,
    view: Viewport,
    pos: Point,
    kind: AlienKind,
    frame: usize,
) -> std::io::Result<()> {
    let (glyphs, color) = match kind {
        AlienKind::Toxic => (["/Ω\\", "\\Ω/"], C_ALIEN_TOXIC),
        AlienKind::Rage => (["{◣}", "{◢}"], C_ALIEN_RAGE),
        AlienKind::Spooky => (["(ツ)", ")ツ("], C_ALIEN_SPOOKY),
    };

    let (x, y) = view.cell(pos);
    out.queue(cursor::MoveTo(x, y))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(glyphs[frame % glyphs.len()]))?;
    Ok(())
}

fn draw_player<W: Write>(out: &mut W, game: &Game, view: Viewport) -> std::io::Result<()> {
    if !game.player.alive {
        return Ok(());
    }

    let (x, y) = view.cell(Point::new(
        game.player.pos.x + game.player.width / 2.0,
        game.player.pos.y,
    ));
    out.queue(style::SetForegroundColor(C_PLAYER))?;
    out.queue(cursor::MoveTo(x, y))?;
    out.queue(Print("▲"))?;

    if y + 1 < view.height.saturating_sub(1) {
        out.queue(cursor::MoveTo(x.saturating_sub(1), y + 1))?;
        out.queue(Print("/█\\"))?;
    }

    Ok(())
}

fn draw_controls_hint<W: Write>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → : Move   SPACE : Shoot   ESC : Menu"))?;
    Ok(())
}

// ── Full-screen scenes ────────────────────────────────────────────────────────

fn centered_line<W: Write>(
    out: &mut W,
    view: Viewport,
    row: u16,
    color: Color,
    text: &str,
) -> std::io::Result<()> {
    let x = (view.width / 2).saturating_sub(text.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(x, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}

fn draw_score_table_lines<W: Write>(
    out: &mut W,
    view: Viewport,
    table: &HighScoreTable,
    mut row: u16,
) -> std::io::Result<u16> {
    for (i, entry) in table.entries().iter().enumerate() {
        let color = match i {
            0 => Color::Magenta,
            1 | 2 => Color::Red,
            _ => Color::Green,
        };
        centered_line(
            out,
            view,
            row,
            color,
            &format!("{} {:07}", entry.name, entry.score),
        )?;
        row += 1;
    }

    Ok(row)
}

pub fn draw_menu<W: Write>(
    out: &mut W,
    view: Viewport,
    table: &HighScoreTable,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let cy = view.height / 2;
    centered_line(out, view, cy.saturating_sub(6), Color::Cyan, "★  INVADERS  ★")?;

    if table.highest() > 0 {
        centered_line(
            out,
            view,
            cy.saturating_sub(4),
            Color::Yellow,
            &format!("Best Score: {}", table.highest()),
        )?;
    }

    centered_line(out, view, cy, Color::White, "[ENTER] Start")?;
    centered_line(out, view, cy + 1, Color::White, "[H]     High scores")?;
    centered_line(out, view, cy + 2, Color::White, "[Q]     Quit")?;
    centered_line(out, view, cy + 5, C_HINT, "← → : Move   SPACE : Shoot")?;

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

pub fn draw_game_over<W: Write>(
    out: &mut W,
    view: Viewport,
    win: bool,
    score: u32,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let cy = view.height / 2;
    centered_line(
        out,
        view,
        cy.saturating_sub(4),
        if win { Color::Green } else { Color::Red },
        "GAME OVER",
    )?;
    centered_line(
        out,
        view,
        cy.saturating_sub(2),
        Color::White,
        if win {
            "The alien invasion has been stopped. Good work!"
        } else {
            "Earth is now under the control of the aliens"
        },
    )?;
    centered_line(out, view, cy, Color::Yellow, &format!("Score: {}", score))?;
    centered_line(
        out,
        view,
        cy + 2,
        Color::White,
        if win {
            "Press Enter for the next stage"
        } else {
            "Press Enter to play again"
        },
    )?;
    centered_line(out, view, cy + 3, Color::White, "Press Esc to return to menu")?;

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

pub fn draw_save_score<W: Write>(
    out: &mut W,
    view: Viewport,
    table: &HighScoreTable,
    name: &str,
    score: u32,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut row = view.height / 4;
    centered_line(out, view, row, Color::Cyan, "Save your score")?;
    row += 2;
    centered_line(out, view, row, Color::White, "Enter three letters:")?;
    row += 2;

    row = draw_score_table_lines(out, view, table, row)?;
    row += 1;

    // Unfilled letters show as dashes.
    let mut padded: String = name.to_string();
    while padded.chars().count() < NAME_LENGTH {
        padded.push('-');
    }
    centered_line(
        out,
        view,
        row,
        Color::Yellow,
        &format!("{} : {:07}", padded, score),
    )?;

    if name.chars().count() == NAME_LENGTH {
        centered_line(out, view, row + 2, C_HINT, "-> Enter to continue")?;
    }

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

pub fn draw_score_rank<W: Write>(
    out: &mut W,
    view: Viewport,
    table: &HighScoreTable,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut row = view.height / 4;
    centered_line(out, view, row, Color::Cyan, "HIGH SCORES")?;
    row += 2;

    if table.is_empty() {
        centered_line(out, view, row, C_HINT, "No scores recorded yet")?;
    } else {
        row = draw_score_table_lines(out, view, table, row)?;
    }

    centered_line(out, view, row + 2, C_HINT, "Press any key to return")?;

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiny_terminal_still_maps_cells() {
        let view = Viewport::new(10, 2);
        let (x, y) = view.cell(Point::new(400.0, 300.0));
        assert!(x < 10);
        assert_eq!(y, 1);
    }

    #[test]
    fn zero_sized_terminal_maps_to_the_origin_row() {
        let view = Viewport::new(0, 0);
        assert_eq!(view.cell(Point::new(400.0, 300.0)), (0, 1));
        assert_eq!(view.cell(Point::new(0.0, 0.0)), (0, 1));
        assert_eq!(view.cell(Point::new(PLAY_WIDTH, PLAY_HEIGHT)), (0, 1));
    }

    #[test]
    fn corners_stay_inside_a_normal_terminal() {
        let view = Viewport::new(80, 24);
        assert_eq!(view.cell(Point::new(0.0, 0.0)), (0, 1));

        let (x, y) = view.cell(Point::new(PLAY_WIDTH, PLAY_HEIGHT));
        assert_eq!((x, y), (79, 22));
    }
}
