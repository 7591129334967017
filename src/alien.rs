/// Aliens and the formation manager.
///
/// The formation owns the whole alien grid and moves it as one rigid body:
/// a single shared direction, one move decision per sweep, one shared
/// bullet pool for alien fire.  Dead aliens stay in the array with
/// `alive == false` and are skipped everywhere.

use rand::Rng;

use crate::animator::Animator;
use crate::bullet::{BulletConfig, BulletPool};
use crate::config::PLAY_WIDTH;
use crate::events::{EventQueue, SoundKind};
use crate::geometry::{MoveDirection, Point, Rect};

pub const ALIEN_ANIMATION_FRAMES: usize = 2;

/// Every archetype shares the step so the formation stays rigid.
const ALIEN_STEP: f32 = 10.0;
const ALIEN_DESCENT_STEP: f32 = 20.0;

const FORMATION_ORIGIN_X: f32 = 60.0;
const FORMATION_ORIGIN_Y: f32 = 80.0;
const FORMATION_H_GAP: f32 = 20.0;
const FORMATION_V_GAP: f32 = 16.0;

const ALIEN_MAX_BULLETS: usize = 8;

const ALIEN_BULLET_CONFIG: BulletConfig = BulletConfig {
    width: 8.0,
    height: 19.0,
    speed: 7.0,
    direction: MoveDirection::Down,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlienKind {
    Toxic,
    Rage,
    Spooky,
}

#[derive(Clone, Copy, Debug)]
pub struct AlienConfig {
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub descent_step: f32,
    pub points: u32,
}

pub fn alien_config(kind: AlienKind) -> AlienConfig {
    let points = match kind {
        AlienKind::Toxic => 40,
        AlienKind::Rage => 20,
        AlienKind::Spooky => 10,
    };

    AlienConfig {
        width: 40.0,
        height: 40.0,
        speed: ALIEN_STEP,
        descent_step: ALIEN_DESCENT_STEP,
        points,
    }
}

pub struct Alien {
    pub pos: Point,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub alive: bool,
    pub descent_step: f32,
    pub id: usize,
    pub points: u32,
    pub kind: AlienKind,
    pub animator: Animator,
}

impl Alien {
    fn new(kind: AlienKind, id: usize, pos: Point, animation_interval: f64) -> Self {
        let cfg = alien_config(kind);

        Alien {
            pos,
            width: cfg.width,
            height: cfg.height,
            speed: cfg.speed,
            alive: true,
            descent_step: cfg.descent_step,
            id,
            points: cfg.points,
            kind,
            animator: Animator::new(ALIEN_ANIMATION_FRAMES, animation_interval, true),
        }
    }

    pub fn collider(&self) -> Rect {
        Rect::new(self.pos, self.width, self.height)
    }

    fn step_horizontal(&mut self, direction: MoveDirection) {
        self.pos.x += if direction == MoveDirection::Right {
            self.speed
        } else {
            -self.speed
        };
    }

    fn descend(&mut self) {
        self.pos.y += self.descent_step;
    }
}

/// Per-stage layout: archetype row counts in table order plus a shared
/// column count.
pub type AlienDistribution = [(AlienKind, usize); 3];

pub struct AlienFormation {
    pub aliens: Vec<Alien>,
    pub bullets: BulletPool,
    pub rows: usize,
    pub columns: usize,
    pub direction: MoveDirection,
    pub alives: usize,
    pub move_interval: f64,
    pub last_move_time: f64,
    pub fire_interval: f64,
    pub last_fire_time: f64,
    pub group_width: f32,
}

impl AlienFormation {
    /// Builds the grid row-by-row, archetype-by-archetype, in table order.
    pub fn new(
        distribution: &AlienDistribution,
        columns: usize,
        move_interval: f64,
        fire_interval: f64,
        now: f64,
    ) -> Self {
        let rows: usize = distribution.iter().map(|&(_, r)| r).sum();
        let mut aliens = Vec::with_capacity(rows * columns);
        let mut row = 0;

        for &(kind, kind_rows) in distribution {
            for _ in 0..kind_rows {
                for col in 0..columns {
                    let cfg = alien_config(kind);
                    let pos = Point::new(
                        FORMATION_ORIGIN_X + col as f32 * (cfg.width + FORMATION_H_GAP),
                        FORMATION_ORIGIN_Y + row as f32 * (cfg.height + FORMATION_V_GAP),
                    );
                    aliens.push(Alien::new(kind, aliens.len(), pos, move_interval));
                }
                row += 1;
            }
        }

        let mut formation = AlienFormation {
            aliens,
            bullets: BulletPool::new(ALIEN_MAX_BULLETS, ALIEN_BULLET_CONFIG),
            rows,
            columns,
            direction: MoveDirection::Right,
            alives: rows * columns,
            move_interval,
            last_move_time: now,
            fire_interval,
            last_fire_time: now,
            group_width: 0.0,
        };
        formation.update_group_width();

        formation
    }

    /// Horizontal extent of the live formation: (left edge, right edge).
    pub fn live_bounds(&self) -> Option<(f32, f32)> {
        let mut bounds: Option<(f32, f32)> = None;

        for alien in self.aliens.iter().filter(|a| a.alive) {
            let (min, max) = bounds.unwrap_or((f32::MAX, f32::MIN));
            bounds = Some((min.min(alien.pos.x), max.max(alien.pos.x + alien.width)));
        }

        bounds
    }

    fn update_group_width(&mut self) {
        self.group_width = self
            .live_bounds()
            .map(|(min, max)| max - min)
            .unwrap_or(0.0);
    }

    fn step(&self) -> f32 {
        self.aliens
            .iter()
            .find(|a| a.alive)
            .map(|a| a.speed)
            .unwrap_or(0.0)
    }

    /// Whether the next horizontal step would push the leading live edge
    /// off the playfield.
    fn wall_contact(&self) -> bool {
        let Some((min_x, max_x)) = self.live_bounds() else {
            return false;
        };

        match self.direction {
            MoveDirection::Right => max_x + self.step() > PLAY_WIDTH,
            MoveDirection::Left => min_x - self.step() < 0.0,
            _ => false,
        }
    }

    fn sweep(&mut self) {
        let direction = self.direction;

        for alien in self.aliens.iter_mut().filter(|a| a.alive) {
            alien.step_horizontal(direction);
        }
    }

    fn descend_and_flip(&mut self) {
        for alien in self.aliens.iter_mut().filter(|a| a.alive) {
            alien.descend();
        }

        self.direction = if self.direction == MoveDirection::Right {
            MoveDirection::Left
        } else {
            MoveDirection::Right
        };
    }

    /// One movement decision per elapsed interval: either every live alien
    /// steps once in the shared direction, or the whole formation descends
    /// and the direction flips — never a mix.
    fn handle_movement(&mut self, now: f64) {
        if now - self.last_move_time < self.move_interval {
            return;
        }

        if self.wall_contact() {
            self.descend_and_flip();
        } else {
            self.sweep();
        }

        self.last_move_time = now;
        self.update_group_width();
    }

    /// A uniformly-chosen live alien fires from the shared pool.
    fn handle_fire(&mut self, now: f64, rng: &mut impl Rng) {
        if now - self.last_fire_time < self.fire_interval {
            return;
        }

        if self.alives > 0 {
            let nth = rng.gen_range(0..self.alives);
            if let Some(shooter) = self.aliens.iter().filter(|a| a.alive).nth(nth) {
                let spawner = shooter.collider();
                self.bullets.fire(&spawner);
            }
        }

        self.last_fire_time = now;
    }

    pub fn update(&mut self, now: f64, rng: &mut impl Rng, _events: &mut EventQueue) {
        self.handle_movement(now);
        self.handle_fire(now, rng);
        self.bullets.update();

        for alien in self.aliens.iter_mut().filter(|a| a.alive) {
            alien.animator.update(now);
        }
    }

    /// Logical death only — the slot stays allocated and is skipped by
    /// every other iteration.  A dead slot is a no-op.
    pub fn kill_by_id(&mut self, id: usize, events: &mut EventQueue) {
        if !self.aliens[id].alive {
            return;
        }

        self.aliens[id].alive = false;
        self.alives -= 1;
        self.update_group_width();
        events.play_sound(SoundKind::AlienDie);
    }

    pub fn all_dead(&self) -> bool {
        self.alives == 0
    }

    /// Has any live alien's bottom edge reached the danger line?
    pub fn crossed_threshold(&self, danger_line_y: f32) -> bool {
        self.aliens
            .iter()
            .filter(|a| a.alive)
            .any(|a| a.pos.y + a.height >= danger_line_y)
    }
}
