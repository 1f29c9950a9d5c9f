//! # arbook
//!
//! Augmented-reality talking books: printed pages are recognised by an
//! image-tracking engine, and each page gets its own animated 3D model and
//! looping narration on top of the camera feed.
//!
//! The crate owns the bindings between tracked pages and their assets, the
//! found/lost lifecycle, the startup sequence, and the desktop mouse
//! controls. Tracking, rendering and audio playback are reached through
//! traits ([`TrackingBackend`], [`FrameRenderer`], [`AudioOutput`]) so any
//! engine can be plugged in.

pub mod animation;
pub mod assets;
pub mod audio;
pub mod book;
pub mod config;
pub mod errors;
pub mod interaction;
pub mod registry;
pub mod render;
pub mod scene;
pub mod tracking;
pub mod utils;

pub use animation::{AnimationAction, AnimationClip, AnimationMixer, LoopMode};
pub use assets::{AssetLoader, AudioBuffer, GltfAssetLoader, Prefab};
pub use audio::{AudioOutput, AudioSettings, SilentAudioOutput};
pub use book::Book;
pub use config::{BookConfig, PageConfig};
pub use errors::{BookError, Result};
pub use interaction::{InteractionLayer, InteractionSettings, PointerEvent};
pub use registry::{ActivePage, PageBinding, PageRegistry};
pub use render::{FrameRenderer, HeadlessRenderer};
pub use scene::{Camera, Node, NodeHandle, Scene};
pub use tracking::{AnchorEvent, ManualTracker, TrackingBackend, TrackingSession};
