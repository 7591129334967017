/// Projectile slot pool shared by the player and the alien formation.
///
/// Every bullet is pre-built at pool creation and reused through its
/// `active` flag — nothing is allocated per shot.  A slot's `id` equals its
/// index in the pool and doubles as the O(1) deactivation key.

use crate::config::PLAY_HEIGHT;
use crate::geometry::{MoveDirection, Point, Rect};

/// Where inactive bullets park, outside the playfield.
const OFFSCREEN: Point = Point::new(-10.0, -10.0);

#[derive(Clone, Copy, Debug)]
pub struct BulletConfig {
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub direction: MoveDirection,
}

#[derive(Clone, Copy, Debug)]
pub struct Bullet {
    pub pos: Point,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub direction: MoveDirection,
    pub active: bool,
    pub id: usize,
}

impl Bullet {
    fn new(id: usize, cfg: BulletConfig) -> Self {
        Bullet {
            pos: OFFSCREEN,
            width: cfg.width,
            height: cfg.height,
            speed: cfg.speed,
            direction: cfg.direction,
            active: false,
            id,
        }
    }

    pub fn collider(&self) -> Rect {
        Rect::new(self.pos, self.width, self.height)
    }

    fn advance(&mut self) {
        self.pos.y += if self.direction == MoveDirection::Down {
            self.speed
        } else {
            -self.speed
        };
    }

    fn off_screen(&self) -> bool {
        self.pos.y + self.height < 0.0 || self.pos.y > PLAY_HEIGHT
    }
}

pub struct BulletPool {
    bullets: Vec<Bullet>,
    quantity: usize,
}

impl BulletPool {
    pub fn new(capacity: usize, cfg: BulletConfig) -> Self {
        BulletPool {
            bullets: (0..capacity).map(|id| Bullet::new(id, cfg)).collect(),
            quantity: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.bullets.len()
    }

    /// Count of currently-active bullets.  Always equals the number of
    /// slots whose `active` flag is set.
    pub fn quantity(&self) -> usize {
        self.quantity
    }

    pub fn is_full(&self) -> bool {
        self.quantity == self.bullets.len()
    }

    pub fn slots(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn iter_active(&self) -> impl Iterator<Item = &Bullet> {
        self.bullets.iter().filter(|b| b.active)
    }

    /// Activates the lowest-index inactive slot, centered on `spawner`.
    /// Silently drops the shot when every slot is live.
    pub fn fire(&mut self, spawner: &Rect) -> bool {
        if self.is_full() {
            return false;
        }

        if let Some(bullet) = self.bullets.iter_mut().find(|b| !b.active) {
            bullet.pos = spawner.centered_inside(bullet.width, bullet.height);
            bullet.active = true;
            self.quantity += 1;
            return true;
        }

        false
    }

    /// Advances every active bullet and retires those leaving the
    /// vertical screen bounds.
    pub fn update(&mut self) {
        for i in 0..self.bullets.len() {
            if !self.bullets[i].active {
                continue;
            }

            self.bullets[i].advance();

            if self.bullets[i].off_screen() {
                self.deactivate(i);
            }
        }
    }

    /// O(1) retirement by slot index.  The slot must be active — callers
    /// check the flag first, a double deactivation would corrupt the
    /// counter.
    pub fn deactivate(&mut self, id: usize) {
        debug_assert!(self.bullets[id].active, "deactivating an inactive slot");
        self.bullets[id].active = false;
        self.quantity -= 1;
    }
}
