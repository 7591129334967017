/// The player ship: analog-feel horizontal movement, a private bullet
/// pool, lives and score.

use crate::animator::Animator;
use crate::bullet::{BulletConfig, BulletPool};
use crate::config::{BOTTOM_MARGIN, PLAY_HEIGHT, PLAY_WIDTH};
use crate::events::{EventQueue, SoundKind};
use crate::geometry::{clamp, MoveDirection, Point, Rect};

pub const PLAYER_WIDTH: f32 = 50.0;
pub const PLAYER_HEIGHT: f32 = 50.0;
pub const PLAYER_SPEED: f32 = 9.0;
pub const PLAYER_ACC_STEP: f32 = 0.1;
pub const PLAYER_DEC_STEP: f32 = 0.05;
pub const PLAYER_MAX_ACC: f32 = 1.0;
pub const PLAYER_MAX_BULLETS: usize = 1;
pub const PLAYER_LIVES: u32 = 3;
pub const PLAYER_FIRE_INTERVAL: f64 = 0.0;
pub const MAX_SCORE: u32 = 9_999_999;

const PLAYER_ANIMATION_FRAMES: usize = 2;
const PLAYER_FRAME_DURATION: f64 = 1.0 / 7.0;

pub const PLAYER_BULLET_CONFIG: BulletConfig = BulletConfig {
    width: 8.0,
    height: 19.0,
    speed: 12.0,
    direction: MoveDirection::Up,
};

/// Press/release transitions fed in by the input layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerInput {
    MoveLeft,
    StopMoveLeft,
    MoveRight,
    StopMoveRight,
    Shoot,
    StopShoot,
    None,
}

pub struct Player {
    pub pos: Point,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub acc: f32,
    pub acc_step: f32,
    pub dec_step: f32,
    pub max_acc: f32,
    pub vx: f32,
    pub move_left: bool,
    pub move_right: bool,
    pub shooting: bool,
    pub bullets: BulletPool,
    pub lives: u32,
    pub max_lives: u32,
    pub score: u32,
    pub alive: bool,
    pub fire_interval: f64,
    pub last_fire_time: f64,
    pub animator: Animator,
}

impl Player {
    pub fn new(now: f64) -> Self {
        Player {
            pos: Point::new(
                PLAY_WIDTH / 2.0 - PLAYER_WIDTH / 2.0,
                PLAY_HEIGHT - PLAYER_HEIGHT - BOTTOM_MARGIN,
            ),
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            speed: PLAYER_SPEED,
            acc: 0.0,
            acc_step: PLAYER_ACC_STEP,
            dec_step: PLAYER_DEC_STEP,
            max_acc: PLAYER_MAX_ACC,
            vx: 0.0,
            move_left: false,
            move_right: false,
            shooting: false,
            bullets: BulletPool::new(PLAYER_MAX_BULLETS, PLAYER_BULLET_CONFIG),
            lives: PLAYER_LIVES,
            max_lives: PLAYER_LIVES,
            score: 0,
            alive: true,
            fire_interval: PLAYER_FIRE_INTERVAL,
            last_fire_time: now,
            animator: Animator::new(PLAYER_ANIMATION_FRAMES, PLAYER_FRAME_DURATION, true),
        }
    }

    pub fn handle_input(&mut self, input: PlayerInput) {
        match input {
            PlayerInput::MoveLeft => self.move_left = true,
            PlayerInput::StopMoveLeft => self.move_left = false,
            PlayerInput::MoveRight => self.move_right = true,
            PlayerInput::StopMoveRight => self.move_right = false,
            PlayerInput::Shoot => self.shooting = true,
            PlayerInput::StopShoot => self.shooting = false,
            PlayerInput::None => {}
        }
    }

    /// Both directions held cancel out, same as neither.
    pub fn direction(&self) -> MoveDirection {
        if self.move_left && !self.move_right {
            return MoveDirection::Left;
        }
        if self.move_right && !self.move_left {
            return MoveDirection::Right;
        }
        MoveDirection::None
    }

    fn speed_modifier(&self) -> f32 {
        match self.direction() {
            MoveDirection::Right => 1.0,
            MoveDirection::Left => -1.0,
            _ => 0.0,
        }
    }

    /// Ramps acceleration while a direction is held, decays it otherwise.
    fn update_acceleration(&mut self) {
        if self.direction() != MoveDirection::None {
            self.acc += self.acc_step;
        } else {
            self.acc -= self.dec_step;
        }

        self.acc = clamp(self.acc, 0.0, self.max_acc);
    }

    fn stop(&mut self) {
        self.vx = 0.0;
        self.acc = 0.0;
    }

    /// Clamps into the playfield.  Returns whether the position was
    /// corrected.
    fn set_pos(&mut self, new_pos: Point) -> bool {
        let corrected = Point::new(clamp(new_pos.x, 0.0, PLAY_WIDTH - self.width), new_pos.y);
        self.pos = corrected;
        corrected != new_pos
    }

    fn handle_movement(&mut self) {
        self.update_acceleration();
        self.vx = self.speed * self.acc * self.speed_modifier();

        let mut reached_boundary = false;

        if self.vx != 0.0 {
            reached_boundary = self.set_pos(Point::new(self.pos.x + self.vx, self.pos.y));
        }

        // A held key at the wall must not leave residual momentum.
        if (self.move_left || self.move_right) && reached_boundary {
            self.stop();
        }
    }

    fn can_fire(&self, now: f64) -> bool {
        !self.bullets.is_full() && self.shooting && now - self.last_fire_time >= self.fire_interval
    }

    fn handle_fire(&mut self, now: f64, events: &mut EventQueue) {
        if self.can_fire(now) {
            events.play_sound(SoundKind::PlayerShoot);
            self.bullets.fire(&self.collider());
            self.last_fire_time = now;
        }
    }

    pub fn update(&mut self, now: f64, events: &mut EventQueue) {
        self.handle_movement();
        self.handle_fire(now, events);
        self.bullets.update();
        self.animator.update(now);
    }

    pub fn collider(&self) -> Rect {
        Rect::new(self.pos, self.width, self.height)
    }

    pub fn add_score(&mut self, points: u32) {
        self.score = (self.score + points).min(MAX_SCORE);
    }

    pub fn take_hit(&mut self, events: &mut EventQueue) {
        if self.lives > 0 {
            self.lives -= 1;
            events.play_sound(SoundKind::PlayerHit);
        }

        if self.lives == 0 {
            self.alive = false;
        }
    }
}
