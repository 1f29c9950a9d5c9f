use std::sync::Arc;

use crate::animation::clip::AnimationClip;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopMode {
    Once,
    Loop,
    PingPong,
}

/// Playback state of one clip: running flag plus elapsed-time accumulator.
#[derive(Debug, Clone)]
pub struct AnimationAction {
    clip: Arc<AnimationClip>,

    pub time: f32,
    pub time_scale: f32,
    pub loop_mode: LoopMode,
    pub paused: bool,
    pub enabled: bool,

    running: bool,
}

impl AnimationAction {
    /// Creates a stopped action looping over `clip`.
    #[must_use]
    pub fn new(clip: Arc<AnimationClip>) -> Self {
        Self {
            clip,
            time: 0.0,
            time_scale: 1.0,
            loop_mode: LoopMode::Loop,
            paused: false,
            enabled: true,
            running: false,
        }
    }

    #[must_use]
    pub fn clip(&self) -> &Arc<AnimationClip> {
        &self.clip
    }

    /// Starts playback from the current time.
    pub fn play(&mut self) {
        self.running = true;
        self.paused = false;
        self.enabled = true;
    }

    /// Stops playback and rewinds to the start.
    pub fn stop(&mut self) {
        self.running = false;
        self.time = 0.0;
    }

    /// True while the action is started, enabled and not paused.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running && self.enabled && !self.paused
    }

    /// Core logic: advance time.
    pub fn update(&mut self, dt: f32) {
        if !self.is_running() {
            return;
        }

        let duration = self.clip.duration;
        if duration <= 0.0 {
            return;
        }

        // 1. Accumulate time
        self.time += dt * self.time_scale;

        // 2. Handle loop mode
        match self.loop_mode {
            LoopMode::Once => {
                if self.time >= duration {
                    self.time = duration;
                    self.paused = true;
                } else if self.time < 0.0 {
                    self.time = 0.0;
                    self.paused = true;
                }
            }
            LoopMode::Loop => {
                // Reverse playback wraps to the end
                self.time = self.time.rem_euclid(duration);
            }
            LoopMode::PingPong => {
                let double_duration = duration * 2.0;
                let mut t = self.time.rem_euclid(double_duration);
                // Second half of the cycle plays backwards
                if t > duration {
                    t = double_duration - t;
                }
                self.time = t;
            }
        }
    }
}
