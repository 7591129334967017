/// Pooled, timed visual explosions.  Same slot-pool lifecycle as the
/// bullet pool: fixed capacity, active flags, silent drop when full.

use crate::animator::Animator;
use crate::geometry::{Point, Rect};

pub const EXPLOSION_WIDTH: f32 = 40.0;
pub const EXPLOSION_HEIGHT: f32 = 40.0;
pub const EXPLOSION_FRAMES: usize = 6;
pub const EXPLOSION_FRAME_DURATION: f64 = 1.0 / 18.0;

pub struct Explosion {
    pub pos: Point,
    pub started_at: f64,
    pub duration: f64,
    pub active: bool,
    pub animator: Animator,
}

impl Explosion {
    fn new() -> Self {
        Explosion {
            pos: Point::new(-EXPLOSION_WIDTH, -EXPLOSION_HEIGHT),
            started_at: 0.0,
            duration: EXPLOSION_FRAME_DURATION * EXPLOSION_FRAMES as f64,
            active: false,
            animator: Animator::new(EXPLOSION_FRAMES, EXPLOSION_FRAME_DURATION, false),
        }
    }
}

pub struct ExplosionManager {
    explosions: Vec<Explosion>,
    count: usize,
}

impl ExplosionManager {
    pub fn new(max: usize) -> Self {
        ExplosionManager {
            explosions: (0..max).map(|_| Explosion::new()).collect(),
            count: 0,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn iter_active(&self) -> impl Iterator<Item = &Explosion> {
        self.explosions.iter().filter(|e| e.active)
    }

    /// Starts an explosion centered inside the victim's collider.
    /// Silently dropped when the pool is full.
    pub fn trigger(&mut self, collider: &Rect, now: f64) {
        if self.count >= self.explosions.len() {
            return;
        }

        if let Some(explosion) = self.explosions.iter_mut().find(|e| !e.active) {
            explosion.pos = collider.centered_inside(EXPLOSION_WIDTH, EXPLOSION_HEIGHT);
            explosion.active = true;
            explosion.started_at = now;
            self.count += 1;
        }
    }

    pub fn update(&mut self, now: f64) {
        for explosion in self.explosions.iter_mut() {
            if !explosion.active {
                continue;
            }

            if now - explosion.started_at >= explosion.duration {
                explosion.animator.reset();
                explosion.active = false;
                self.count -= 1;
                continue;
            }

            explosion.animator.update(now);
        }
    }
}
