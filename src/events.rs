/// Fire-and-forget notifications from the simulation to the presentation
/// layer.  The core pushes sound cues during a tick; the main loop drains
/// them after rendering and never waits on playback.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundKind {
    PlayerShoot,
    PlayerHit,
    AlienDie,
    UfoSpawn,
    UfoHit,
    GameWin,
    GameOver,
}

#[derive(Default)]
pub struct EventQueue {
    sounds: Vec<SoundKind>,
}

impl EventQueue {
    pub fn new() -> Self {
        EventQueue { sounds: Vec::new() }
    }

    pub fn play_sound(&mut self, kind: SoundKind) {
        self.sounds.push(kind);
    }

    /// Hands the queued cues to the caller and clears the queue.
    pub fn drain_sounds(&mut self) -> Vec<SoundKind> {
        std::mem::take(&mut self.sounds)
    }

    pub fn sounds(&self) -> &[SoundKind] {
        &self.sounds
    }
}
