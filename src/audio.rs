//! Positional audio sinks
//!
//! Each page owns one emitter attached to its anchor. The emitter is created
//! once at registration and only ever started or stopped afterwards.

use serde::{Deserialize, Serialize};
use slotmap::{SlotMap, new_key_type};

use crate::assets::audio::AudioBuffer;
use crate::scene::NodeHandle;

new_key_type! {
    pub struct EmitterHandle;
}

/// Playback parameters of a page's narration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Distance below which no attenuation is applied. Large enough that
    /// narration volume does not depend on how far the book is held.
    pub ref_distance: f32,
    pub looping: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            ref_distance: 10_000.0,
            looping: true,
        }
    }
}

/// Audio backend consumed by the page registry.
pub trait AudioOutput {
    /// Creates a positional emitter for `buffer` that follows `anchor`.
    fn create_emitter(
        &mut self,
        buffer: &AudioBuffer,
        anchor: NodeHandle,
        settings: AudioSettings,
    ) -> EmitterHandle;

    fn play(&mut self, emitter: EmitterHandle);

    fn stop(&mut self, emitter: EmitterHandle);
}

#[derive(Debug, Clone)]
pub struct SilentEmitter {
    pub source: String,
    pub anchor: NodeHandle,
    pub settings: AudioSettings,
    pub playing: bool,
    /// Number of times playback was (re)started
    pub play_count: u32,
}

/// Backend that records playback state without producing sound.
///
/// Used for headless runs and for inspecting what a session would play.
#[derive(Debug, Default)]
pub struct SilentAudioOutput {
    emitters: SlotMap<EmitterHandle, SilentEmitter>,
}

impl SilentAudioOutput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn emitter(&self, handle: EmitterHandle) -> Option<&SilentEmitter> {
        self.emitters.get(handle)
    }

    #[must_use]
    pub fn is_playing(&self, handle: EmitterHandle) -> bool {
        self.emitters.get(handle).is_some_and(|e| e.playing)
    }

    /// Sources of all emitters currently playing.
    pub fn playing_sources(&self) -> impl Iterator<Item = &str> {
        self.emitters
            .values()
            .filter(|e| e.playing)
            .map(|e| e.source.as_str())
    }
}

impl AudioOutput for SilentAudioOutput {
    fn create_emitter(
        &mut self,
        buffer: &AudioBuffer,
        anchor: NodeHandle,
        settings: AudioSettings,
    ) -> EmitterHandle {
        self.emitters.insert(SilentEmitter {
            source: buffer.source.clone(),
            anchor,
            settings,
            playing: false,
            play_count: 0,
        })
    }

    fn play(&mut self, emitter: EmitterHandle) {
        if let Some(e) = self.emitters.get_mut(emitter) {
            log::trace!("play '{}'", e.source);
            e.playing = true;
            e.play_count += 1;
        }
    }

    fn stop(&mut self, emitter: EmitterHandle) {
        if let Some(e) = self.emitters.get_mut(emitter) {
            log::trace!("stop '{}'", e.source);
            e.playing = false;
        }
    }
}
