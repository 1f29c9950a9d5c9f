//! Animation state
//!
//! Keyframe sampling happens in the renderer; this module only tracks which
//! clips are playing and how far along they are.

pub mod action;
pub mod clip;
pub mod mixer;

pub use action::{AnimationAction, LoopMode};
pub use clip::AnimationClip;
pub use mixer::AnimationMixer;
