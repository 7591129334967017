/// The bonus UFO: spawns from a random side on a shrinking per-stage
/// interval, accelerates over its active lifetime, and carries a
/// randomized point value.

use rand::Rng;

use crate::animator::Animator;
use crate::config::PLAY_WIDTH;
use crate::events::{EventQueue, SoundKind};
use crate::geometry::{MoveDirection, Point, Rect};

pub const UFO_WIDTH: f32 = 60.0;
pub const UFO_HEIGHT: f32 = 40.0;
pub const UFO_SPEED: f32 = 2.0;
pub const UFO_MAX_SPEED: f32 = 5.0;
pub const UFO_Y_SPAWN: f32 = 45.0;
pub const UFO_SPAWN_PROBABILITY: f32 = 0.05;
pub const UFO_SPAWN_INTERVAL: f64 = 20.0;
pub const UFO_SPAWN_INTERVAL_MULTIPLIER: f64 = 0.8;
pub const UFO_BASE_POINTS: u32 = 50;

const UFO_ACCELERATION_RATE: f64 = 0.008;
const UFO_ANIMATION_FRAMES: usize = 7;

pub struct Ufo {
    pub pos: Point,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub direction: MoveDirection,
    pub active: bool,
    pub points: u32,
    pub spawn_probability: f32,
    pub spawn_interval: f64,
    pub last_spawn: f64,
    pub animator: Animator,
}

impl Ufo {
    pub fn new(now: f64, stage: usize) -> Self {
        Ufo {
            pos: Point::new(-UFO_WIDTH, UFO_Y_SPAWN),
            width: UFO_WIDTH,
            height: UFO_HEIGHT,
            speed: UFO_SPEED,
            direction: MoveDirection::Right,
            active: false,
            points: 0,
            spawn_probability: UFO_SPAWN_PROBABILITY,
            spawn_interval: UFO_SPAWN_INTERVAL
                * UFO_SPAWN_INTERVAL_MULTIPLIER.powi(stage as i32),
            last_spawn: now,
            animator: Animator::new(
                UFO_ANIMATION_FRAMES,
                1.0 / UFO_ANIMATION_FRAMES as f64,
                true,
            ),
        }
    }

    pub fn collider(&self) -> Rect {
        Rect::new(self.pos, self.width, self.height)
    }

    fn off_screen(&self) -> bool {
        if self.direction == MoveDirection::Right {
            self.pos.x > PLAY_WIDTH
        } else {
            self.pos.x + self.width < 0.0
        }
    }

    /// Picks a side and parks the ship just outside it.
    fn place(&mut self, rng: &mut impl Rng) {
        self.direction = if rng.gen_range(0..=1) == 0 {
            MoveDirection::Right
        } else {
            MoveDirection::Left
        };

        self.pos = Point::new(
            if self.direction == MoveDirection::Right {
                -self.width
            } else {
                PLAY_WIDTH
            },
            UFO_Y_SPAWN,
        );
    }

    pub fn activate(&mut self, now: f64, rng: &mut impl Rng, events: &mut EventQueue) {
        self.active = true;
        self.speed = UFO_SPEED;
        self.last_spawn = now;
        self.place(rng);
        self.points = rng.gen_range(2..=10) * UFO_BASE_POINTS;
        events.play_sound(SoundKind::UfoSpawn);
    }

    pub fn kill(&mut self, now: f64, events: &mut EventQueue) {
        events.play_sound(SoundKind::UfoHit);
        self.deactivate(now);
    }

    pub fn deactivate(&mut self, now: f64) {
        self.active = false;
        self.last_spawn = now;
    }

    fn handle_movement(&mut self, now: f64) {
        let vx = if self.direction == MoveDirection::Right {
            self.speed
        } else {
            -self.speed
        };
        self.pos.x += vx;

        if self.off_screen() {
            self.deactivate(now);
        }
    }

    pub fn update(&mut self, now: f64, rng: &mut impl Rng, events: &mut EventQueue) {
        let delta = now - self.last_spawn;

        if self.active {
            if self.speed < UFO_MAX_SPEED {
                self.speed += (delta * UFO_ACCELERATION_RATE) as f32;
            }

            self.handle_movement(now);
            self.animator.update(now);
            return;
        }

        if rng.gen::<f32>() <= self.spawn_probability && delta > self.spawn_interval {
            self.activate(now, rng, events);
        }
    }
}
