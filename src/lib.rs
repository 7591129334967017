pub mod alien;
pub mod animator;
pub mod bullet;
pub mod collision;
pub mod config;
pub mod events;
pub mod explosion;
pub mod game;
pub mod geometry;
pub mod player;
pub mod score;
pub mod stage;
pub mod ufo;
