//! Utility Module
//!
//! - [`clock`]: frame clock feeding the render loop

pub mod clock;

pub use clock::FrameClock;
