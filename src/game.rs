/// One round of play: the player, the current formation, the UFO and the
/// explosion pool, advanced by a single `update` per tick.
///
/// Tick order: danger-line check → stage-clear check → player → formation
/// → UFO → collisions → explosions.  The clear check runs before entity
/// updates, so the last alien's death is visible for one frame before the
/// round ends.

use rand::Rng;

use crate::alien::AlienFormation;
use crate::collision::handle_collisions;
use crate::config::DANGER_LINE_Y;
use crate::events::EventQueue;
use crate::explosion::ExplosionManager;
use crate::player::{Player, PlayerInput};
use crate::stage::StageManager;
use crate::ufo::Ufo;

const MAX_EXPLOSIONS: usize = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Running,
    StageCleared,
    Defeat,
}

pub struct Game {
    pub player: Player,
    pub formation: AlienFormation,
    pub ufo: Ufo,
    pub explosions: ExplosionManager,
}

impl Game {
    /// Starts the stage the manager currently points at, carrying over
    /// `score` from previous stages of the same run.
    pub fn new(stage_manager: &mut StageManager, score: u32, now: f64) -> Self {
        let formation = stage_manager.start_stage(now);
        let mut player = Player::new(now);
        player.score = score;

        Game {
            player,
            formation,
            ufo: Ufo::new(now, stage_manager.current_stage),
            explosions: ExplosionManager::new(MAX_EXPLOSIONS),
        }
    }

    pub fn handle_input(&mut self, input: PlayerInput) {
        self.player.handle_input(input);
    }

    pub fn update(
        &mut self,
        stage_manager: &mut StageManager,
        rng: &mut impl Rng,
        events: &mut EventQueue,
        now: f64,
    ) -> GameOutcome {
        let invasion_succeeded = self.formation.crossed_threshold(DANGER_LINE_Y);

        if invasion_succeeded || !self.player.alive {
            if invasion_succeeded {
                self.player.alive = false;
            }
            return GameOutcome::Defeat;
        }

        if stage_manager.check_progress(&self.formation) {
            return GameOutcome::StageCleared;
        }

        self.player.update(now, events);
        self.formation.update(now, rng, events);
        self.ufo.update(now, rng, events);
        handle_collisions(
            &mut self.player,
            &mut self.formation,
            &mut self.ufo,
            &mut self.explosions,
            events,
            now,
        );
        self.explosions.update(now);

        GameOutcome::Running
    }
}
