/// Frame-timer state machine driving sprite playback.
///
/// Timers are wall-clock-delta comparisons evaluated once per tick, so
/// frame granularity is bounded by the tick rate.

#[derive(Clone, Debug)]
pub struct Animator {
    current_frame: usize,
    frame_count: usize,
    frame_duration: f64,
    last_update: f64,
    looping: bool,
}

impl Animator {
    pub fn new(frame_count: usize, frame_duration: f64, looping: bool) -> Self {
        Animator {
            current_frame: 0,
            frame_count,
            frame_duration,
            last_update: 0.0,
            looping,
        }
    }

    /// Advances to the next frame once `frame_duration` has elapsed.
    /// Non-looping animators hold their last frame.
    pub fn update(&mut self, now: f64) {
        if now - self.last_update >= self.frame_duration {
            self.current_frame += 1;

            if self.current_frame == self.frame_count {
                self.current_frame = if self.looping {
                    0
                } else {
                    self.current_frame - 1
                };
            }

            self.last_update = now;
        }
    }

    pub fn frame(&self) -> usize {
        self.current_frame
    }

    pub fn reset(&mut self) {
        self.current_frame = 0;
    }
}
