//! Startup & Frame Loop Tests
//!
//! Tests for:
//! - Startup order: session, light, sequential page loads, session start
//! - Fatal failures aborting the sequence
//! - Tracking events pumped from the session
//! - Per-frame animation advance and rendering

mod common;

use std::cell::Cell;

use arbook::audio::SilentAudioOutput;
use arbook::config::BookConfig;
use arbook::errors::{BookError, Result};
use arbook::interaction::PointerEvent;
use arbook::render::{FrameRenderer, HeadlessRenderer};
use arbook::scene::Scene;
use arbook::tracking::{
    AnchorEvent, ManualSession, ManualTracker, TrackerConfig, TrackingBackend, TrackingSession,
};
use arbook::utils::FrameClock;
use arbook::Book;

use common::{FakeLoader, page};

const EPSILON: f32 = 1e-5;

fn config(pages: &[u32]) -> BookConfig {
    BookConfig {
        pages: pages.iter().map(|&i| page(i, 0.2)).collect(),
        ..BookConfig::default()
    }
}

fn loader_for(config: &BookConfig) -> FakeLoader {
    config
        .pages
        .iter()
        .fold(FakeLoader::new(), |loader, p| loader.with_page(p))
}

fn start(
    config: &BookConfig,
    tracker: &ManualTracker,
    loader: &FakeLoader,
) -> Result<Book<ManualSession, SilentAudioOutput>> {
    pollster::block_on(Book::start(config, tracker, loader, SilentAudioOutput::new()))
}

// ============================================================================
// Startup sequence
// ============================================================================

#[test]
fn start_registers_pages_in_order_and_starts_session() {
    let config = config(&[0, 1, 2]);
    let loader = loader_for(&config);
    let tracker = ManualTracker::new();

    let book = start(&config, &tracker, &loader).unwrap();

    assert_eq!(book.registry.len(), 3);
    assert!(book.session().is_started());
    assert_eq!(book.scene.lights.len(), 1);
    assert_eq!(book.mixers().len(), 3);
    assert_eq!(
        loader.requests(),
        vec![
            "models/page0.glb",
            "sounds/page0.mp3",
            "models/page1.glb",
            "sounds/page1.mp3",
            "models/page2.glb",
            "sounds/page2.mp3",
        ]
    );
}

#[test]
fn asset_failure_aborts_remaining_pages() {
    let config = config(&[0, 1, 2]);
    // Page 1 has no model
    let loader = FakeLoader::new()
        .with_page(&config.pages[0])
        .with_page(&config.pages[2]);
    let tracker = ManualTracker::new();

    let err = start(&config, &tracker, &loader).err().unwrap();

    assert!(matches!(err, BookError::AssetLoad { ref path, .. } if path == "models/page1.glb"));
    assert!(!loader.requests().iter().any(|r| r.contains("page2")));
}

#[test]
fn duplicate_pages_fail_before_any_load() {
    let mut config = config(&[0, 1]);
    config.pages.push(page(0, 0.3));
    let loader = loader_for(&config);

    let err = start(&config, &ManualTracker::new(), &loader).err().unwrap();

    assert!(matches!(err, BookError::DuplicateTarget(0)));
    assert!(loader.requests().is_empty());
}

struct DeniedCamera;

struct DeniedSession;

impl TrackingSession for DeniedSession {
    fn add_anchor(&mut self, _target_index: u32) -> Result<()> {
        Ok(())
    }

    async fn start(&mut self) -> Result<()> {
        Err(BookError::TrackingSession("camera permission denied".into()))
    }

    fn poll_events(&mut self) -> Vec<AnchorEvent> {
        Vec::new()
    }
}

impl TrackingBackend for DeniedCamera {
    type Session = DeniedSession;

    fn create_session(&self, _config: &TrackerConfig) -> Result<DeniedSession> {
        Ok(DeniedSession)
    }
}

#[test]
fn session_start_failure_is_fatal_after_pages_load() {
    let config = config(&[0]);
    let loader = loader_for(&config);

    let result = pollster::block_on(Book::start(
        &config,
        &DeniedCamera,
        &loader,
        SilentAudioOutput::new(),
    ));

    assert!(matches!(result, Err(BookError::TrackingSession(_))));
    // Pages were loaded before the session was started
    assert_eq!(loader.requests().len(), 2);
}

#[test]
fn invalid_tracker_config_fails_before_loading() {
    let mut config = config(&[0]);
    config.max_track = 0;
    let loader = loader_for(&config);

    let err = start(&config, &ManualTracker::new(), &loader).err().unwrap();

    assert!(matches!(err, BookError::TrackingSession(_)));
    assert!(loader.requests().is_empty());
}

// ============================================================================
// Running book
// ============================================================================

#[test]
fn pump_applies_events_in_arrival_order() {
    let config = config(&[0, 1]);
    let loader = loader_for(&config);
    let tracker = ManualTracker::new();
    let mut book = start(&config, &tracker, &loader).unwrap();

    tracker.found(0);
    tracker.found(1);
    tracker.lost(1);
    assert_eq!(book.pump_tracking(), 3);

    assert!(book.registry.binding(0).unwrap().is_active());
    assert!(!book.registry.binding(1).unwrap().is_active());
    // Page 1 was selected last and then lost
    assert!(book.registry.active_page().is_none());
    assert_eq!(book.audio.playing_sources().collect::<Vec<_>>(), vec!["sounds/page0.mp3"]);
}

#[test]
fn events_for_unknown_targets_are_dropped() {
    let config = config(&[0]);
    let loader = loader_for(&config);
    let tracker = ManualTracker::new();
    let mut book = start(&config, &tracker, &loader).unwrap();

    tracker.found(5);
    assert_eq!(book.pump_tracking(), 0);
    assert!(book.registry.active_page().is_none());
}

#[test]
fn frames_advance_every_mixer_regardless_of_tracking() {
    let config = config(&[0, 1]);
    let loader = loader_for(&config);
    let tracker = ManualTracker::new();
    let mut book = start(&config, &tracker, &loader).unwrap();
    let mut renderer = HeadlessRenderer::new();

    tracker.found(1);
    book.pump_tracking();
    book.advance(0.25, &mut renderer);
    book.advance(0.5, &mut renderer);

    for mixer in book.mixers() {
        assert!((mixer.actions()[0].time - 0.75).abs() < EPSILON);
    }
    assert_eq!(renderer.frame_count(), 2);
    assert_eq!(book.frame_count(), 2);
}

#[test]
fn only_tracked_pages_are_drawn() {
    let config = config(&[0, 1]);
    let loader = loader_for(&config);
    let tracker = ManualTracker::new();
    let mut book = start(&config, &tracker, &loader).unwrap();
    let mut renderer = HeadlessRenderer::new();

    book.advance(0.0, &mut renderer);
    let hidden = renderer.last_visible_nodes();

    tracker.found(0);
    book.pump_tracking();
    book.advance(0.0, &mut renderer);

    // anchor + page root + model body
    assert_eq!(renderer.last_visible_nodes(), hidden + 3);
}

struct CountingRenderer {
    frames: Cell<u32>,
}

impl FrameRenderer for CountingRenderer {
    fn render(&mut self, _scene: &Scene) {
        self.frames.set(self.frames.get() + 1);
    }
}

#[test]
fn frame_uses_wall_clock_and_renders() {
    let config = config(&[0]);
    let loader = loader_for(&config);
    let mut book = start(&config, &ManualTracker::new(), &loader).unwrap();
    let mut renderer = CountingRenderer { frames: Cell::new(0) };

    book.frame(&mut renderer);
    book.frame(&mut renderer);

    assert_eq!(renderer.frames.get(), 2);
    assert!(book.mixers()[0].actions()[0].time >= 0.0);
}

#[test]
fn frame_clock_measures_since_previous_call() {
    let mut clock = FrameClock::new();
    std::thread::sleep(std::time::Duration::from_millis(20));

    let first = clock.delta();
    let second = clock.delta();

    assert!(first >= 0.02, "first {first}");
    assert!(second >= 0.0);
}

#[test]
fn pointer_drag_rotates_selected_page() {
    let config = config(&[0]);
    let loader = loader_for(&config);
    let tracker = ManualTracker::new();
    let mut book = start(&config, &tracker, &loader).unwrap();
    let root = book.registry.binding(0).unwrap().model_root();

    book.handle_pointer(PointerEvent::Down { x: 0.0, y: 0.0 });
    book.handle_pointer(PointerEvent::Move { x: 10.0, y: 0.0 });
    assert!(book.scene.get_node(root).unwrap().transform.rotation.y.abs() < EPSILON);

    tracker.found(0);
    book.pump_tracking();
    book.handle_pointer(PointerEvent::Move { x: 20.0, y: 0.0 });

    // Delta measured from the press, the only recorded position
    let yaw = book.scene.get_node(root).unwrap().transform.rotation.y;
    assert!((yaw - 20.0 * 0.005).abs() < EPSILON, "yaw {yaw}");
}
