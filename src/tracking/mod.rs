//! Image-target tracking seam
//!
//! Pose estimation is done by an external tracking engine. This module only
//! defines what the book consumes from it: a session with one anchor per
//! registered target index, started once, reporting found/lost transitions.
//!
//! Events are values rather than callbacks: the host drains them from the
//! session (see [`Book::pump_tracking`](crate::book::Book::pump_tracking)) and
//! they are applied one at a time in arrival order.

pub mod manual;

pub use manual::{ManualSession, ManualTracker};

use std::future::Future;

use crate::errors::Result;

/// Parameters handed to the tracking engine when the session is created.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    /// Compiled image-target set (one entry per printed page)
    pub image_target_src: String,
    /// Number of targets the engine may track simultaneously
    pub max_track: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnchorEventKind {
    Found,
    Lost,
}

/// A found/lost transition of one anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnchorEvent {
    pub target_index: u32,
    pub kind: AnchorEventKind,
}

impl AnchorEvent {
    #[must_use]
    pub fn found(target_index: u32) -> Self {
        Self {
            target_index,
            kind: AnchorEventKind::Found,
        }
    }

    #[must_use]
    pub fn lost(target_index: u32) -> Self {
        Self {
            target_index,
            kind: AnchorEventKind::Lost,
        }
    }
}

/// Factory for tracking sessions.
pub trait TrackingBackend {
    type Session: TrackingSession;

    fn create_session(&self, config: &TrackerConfig) -> Result<Self::Session>;
}

/// A running (or about to run) tracking session.
pub trait TrackingSession {
    /// Declares interest in `target_index`. Must happen before [`start`](Self::start)
    /// for the target to ever be reported.
    fn add_anchor(&mut self, target_index: u32) -> Result<()>;

    /// Opens the camera and starts tracking.
    fn start(&mut self) -> impl Future<Output = Result<()>>;

    /// Drains the events that arrived since the last call, oldest first.
    fn poll_events(&mut self) -> Vec<AnchorEvent>;
}
