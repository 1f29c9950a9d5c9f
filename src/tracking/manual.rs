use std::sync::Arc;

use parking_lot::Mutex;
use rustc_hash::FxHashSet;

use crate::errors::{BookError, Result};
use crate::tracking::{AnchorEvent, TrackerConfig, TrackingBackend, TrackingSession};

type Subscribers = Arc<Mutex<Vec<flume::Sender<AnchorEvent>>>>;

/// Tracking backend driven by hand.
///
/// Found/lost transitions are injected by the host (keyboard shortcuts on a
/// desktop build, scripted sequences in tests). Each event is copied to every
/// session of this tracker that has started and is still alive. Events sent
/// while no session has started are dropped.
///
/// A started session queues events until it is polled; the queue is unbounded.
#[derive(Clone, Default)]
pub struct ManualTracker {
    subscribers: Subscribers,
}

impl ManualTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports that the page with `target_index` came into view.
    pub fn found(&self, target_index: u32) {
        self.send(AnchorEvent::found(target_index));
    }

    /// Reports that the page with `target_index` left the view.
    pub fn lost(&self, target_index: u32) {
        self.send(AnchorEvent::lost(target_index));
    }

    /// Delivers `event` to every started session. Returns how many received it.
    pub fn send(&self, event: AnchorEvent) -> usize {
        let mut subscribers = self.subscribers.lock();
        // Dropped sessions disconnect their channel
        subscribers.retain(|tx| tx.send(event).is_ok());
        if subscribers.is_empty() {
            log::trace!("No started session, dropping {event:?}");
        }
        subscribers.len()
    }

    /// Number of started sessions still alive.
    #[must_use]
    pub fn session_count(&self) -> usize {
        let mut subscribers = self.subscribers.lock();
        subscribers.retain(|tx| !tx.is_disconnected());
        subscribers.len()
    }
}

impl TrackingBackend for ManualTracker {
    type Session = ManualSession;

    fn create_session(&self, config: &TrackerConfig) -> Result<ManualSession> {
        if config.max_track == 0 {
            return Err(BookError::TrackingSession(
                "max_track must be at least 1".into(),
            ));
        }
        log::debug!("Manual tracking session for '{}'", config.image_target_src);
        Ok(ManualSession {
            subscribers: Arc::clone(&self.subscribers),
            rx: None,
            anchors: FxHashSet::default(),
        })
    }
}

/// Session created by [`ManualTracker`].
///
/// Its channel is opened by [`start`](TrackingSession::start); nothing sent
/// before that is ever seen by this session.
pub struct ManualSession {
    subscribers: Subscribers,
    rx: Option<flume::Receiver<AnchorEvent>>,
    anchors: FxHashSet<u32>,
}

impl ManualSession {
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.rx.is_some()
    }

    #[must_use]
    pub fn has_anchor(&self, target_index: u32) -> bool {
        self.anchors.contains(&target_index)
    }
}

impl TrackingSession for ManualSession {
    fn add_anchor(&mut self, target_index: u32) -> Result<()> {
        if self.is_started() {
            return Err(BookError::TrackingSession(format!(
                "cannot add anchor {target_index} after the session started"
            )));
        }
        self.anchors.insert(target_index);
        Ok(())
    }

    async fn start(&mut self) -> Result<()> {
        if self.is_started() {
            return Err(BookError::TrackingSession("session already started".into()));
        }
        let (tx, rx) = flume::unbounded();
        self.subscribers.lock().push(tx);
        self.rx = Some(rx);
        Ok(())
    }

    fn poll_events(&mut self) -> Vec<AnchorEvent> {
        let Some(rx) = &self.rx else {
            return Vec::new();
        };
        let anchors = &self.anchors;
        rx.try_iter()
            .filter(|e| anchors.contains(&e.target_index))
            .collect()
    }
}
