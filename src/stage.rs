/// Stage table and difficulty progression.
///
/// Each stage entry fixes the alien row distribution by archetype plus a
/// shared column count.  Move and fire intervals shrink exponentially with
/// the stage number, so every stage is strictly faster than the last.

use crate::alien::{AlienDistribution, AlienFormation, AlienKind};

pub const MAX_STAGE: usize = 8;

pub const BASE_MOVE_INTERVAL: f64 = 0.63;
pub const BASE_FIRE_INTERVAL: f64 = 1.2;
pub const MOVE_INTERVAL_MULTIPLIER: f64 = 0.85;
pub const FIRE_RATE_MULTIPLIER: f64 = 0.8;

#[derive(Clone, Copy, Debug)]
pub struct StageConfig {
    pub distribution: AlienDistribution,
    pub columns: usize,
}

pub const STAGES: [StageConfig; 10] = [
    StageConfig {
        distribution: [
            (AlienKind::Toxic, 1),
            (AlienKind::Rage, 1),
            (AlienKind::Spooky, 1),
        ],
        columns: 5,
    },
    StageConfig {
        distribution: [
            (AlienKind::Toxic, 1),
            (AlienKind::Rage, 1),
            (AlienKind::Spooky, 1),
        ],
        columns: 6,
    },
    StageConfig {
        distribution: [
            (AlienKind::Toxic, 1),
            (AlienKind::Rage, 1),
            (AlienKind::Spooky, 1),
        ],
        columns: 8,
    },
    StageConfig {
        distribution: [
            (AlienKind::Toxic, 1),
            (AlienKind::Rage, 1),
            (AlienKind::Spooky, 2),
        ],
        columns: 8,
    },
    StageConfig {
        distribution: [
            (AlienKind::Toxic, 1),
            (AlienKind::Rage, 2),
            (AlienKind::Spooky, 1),
        ],
        columns: 10,
    },
    StageConfig {
        distribution: [
            (AlienKind::Toxic, 1),
            (AlienKind::Rage, 3),
            (AlienKind::Spooky, 0),
        ],
        columns: 12,
    },
    StageConfig {
        distribution: [
            (AlienKind::Toxic, 2),
            (AlienKind::Rage, 2),
            (AlienKind::Spooky, 0),
        ],
        columns: 12,
    },
    StageConfig {
        distribution: [
            (AlienKind::Toxic, 3),
            (AlienKind::Rage, 1),
            (AlienKind::Spooky, 0),
        ],
        columns: 12,
    },
    StageConfig {
        distribution: [
            (AlienKind::Toxic, 4),
            (AlienKind::Rage, 0),
            (AlienKind::Spooky, 0),
        ],
        columns: 12,
    },
    StageConfig {
        distribution: [
            (AlienKind::Toxic, 1),
            (AlienKind::Rage, 2),
            (AlienKind::Spooky, 1),
        ],
        columns: 12,
    },
];

pub struct StageManager {
    pub current_stage: usize,
    pub move_interval_multiplier: f64,
    pub fire_rate_multiplier: f64,
    pub stage_cleared: bool,
}

impl Default for StageManager {
    fn default() -> Self {
        Self::new()
    }
}

impl StageManager {
    pub fn new() -> Self {
        StageManager {
            current_stage: 0,
            move_interval_multiplier: MOVE_INTERVAL_MULTIPLIER,
            fire_rate_multiplier: FIRE_RATE_MULTIPLIER,
            stage_cleared: false,
        }
    }

    pub fn stage_config(&self) -> &StageConfig {
        &STAGES[self.current_stage]
    }

    pub fn move_interval(&self) -> f64 {
        BASE_MOVE_INTERVAL * self.move_interval_multiplier.powi(self.current_stage as i32)
    }

    pub fn fire_interval(&self) -> f64 {
        BASE_FIRE_INTERVAL * self.fire_rate_multiplier.powi(self.current_stage as i32)
    }

    /// Builds a fresh formation from the current stage's table entry.
    pub fn start_stage(&mut self, now: f64) -> AlienFormation {
        let config = self.stage_config();
        let formation = AlienFormation::new(
            &config.distribution,
            config.columns,
            self.move_interval(),
            self.fire_interval(),
            now,
        );

        self.stage_cleared = false;
        formation
    }

    /// Latches once the formation reports all dead and keeps returning
    /// true until the next `start_stage`.
    pub fn check_progress(&mut self, formation: &AlienFormation) -> bool {
        if formation.all_dead() {
            self.stage_cleared = true;
        }

        self.stage_cleared
    }

    pub fn is_cleared(&self) -> bool {
        self.stage_cleared
    }

    /// Advancing past MAX_STAGE is a no-op, not an error.
    pub fn next_stage(&mut self) {
        if self.current_stage < MAX_STAGE {
            self.current_stage += 1;
        }
    }

    pub fn reset(&mut self) {
        self.current_stage = 0;
        self.stage_cleared = false;
    }
}
