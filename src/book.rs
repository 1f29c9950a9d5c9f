//! Book session
//!
//! [`Book`] owns everything a running talking book needs and is driven by
//! the host:
//!
//! 1. [`Book::start`] runs the startup sequence once.
//! 2. [`Book::pump_tracking`] applies tracking events as they arrive.
//! 3. [`Book::handle_pointer`] applies mouse input.
//! 4. [`Book::frame`] is called once per display frame.
//!
//! # Example
//!
//! ```rust,ignore
//! let tracker = ManualTracker::new();
//! let loader = GltfAssetLoader::from_dir("web");
//! let mut book = Book::start(&BookConfig::reference(), &tracker, &loader, SilentAudioOutput::new()).await?;
//!
//! loop {
//!     book.pump_tracking();
//!     book.frame(&mut renderer);
//! }
//! ```

use crate::animation::mixer::AnimationMixer;
use crate::assets::AssetLoader;
use crate::audio::AudioOutput;
use crate::config::BookConfig;
use crate::errors::Result;
use crate::interaction::{InteractionLayer, PointerEvent};
use crate::registry::{PageContext, PageRegistry};
use crate::render::FrameRenderer;
use crate::scene::Scene;
use crate::tracking::{TrackingBackend, TrackingSession};
use crate::utils::clock::FrameClock;

/// A started talking-book session.
pub struct Book<S: TrackingSession, A: AudioOutput> {
    pub scene: Scene,
    pub registry: PageRegistry,
    pub interaction: InteractionLayer,
    pub audio: A,

    session: S,
    mixers: Vec<AnimationMixer>,
    clock: FrameClock,
    frame_count: u64,
}

impl<S: TrackingSession, A: AudioOutput> Book<S, A> {
    /// Runs the startup sequence, in order:
    ///
    /// 1. create the tracking session
    /// 2. add the hemisphere light
    /// 3. register every page, one after the other
    /// 4. start the tracking session
    ///
    /// The first failure aborts the sequence and is returned as is.
    pub async fn start<B, L>(
        config: &BookConfig,
        backend: &B,
        loader: &L,
        mut audio: A,
    ) -> Result<Self>
    where
        B: TrackingBackend<Session = S>,
        L: AssetLoader,
    {
        config.validate()?;

        let mut session = backend.create_session(&config.tracker_config())?;
        log::info!("Tracking session created for '{}'", config.image_target_src);

        let mut scene = Scene::new();
        scene.add_light(config.lighting.to_light());

        let mut registry = PageRegistry::new(config.page_offset(), config.audio);
        let mut mixers = Vec::with_capacity(config.pages.len());
        for page in &config.pages {
            let ctx = PageContext {
                scene: &mut scene,
                session: &mut session,
                loader,
                audio: &mut audio,
            };
            mixers.push(registry.register_page(ctx, page).await?);
        }

        session.start().await?;
        log::info!("Book started with {} pages", registry.len());

        Ok(Self {
            scene,
            registry,
            interaction: InteractionLayer::new(config.interaction),
            audio,
            session,
            mixers,
            clock: FrameClock::new(),
            frame_count: 0,
        })
    }

    /// Applies all pending tracking events in arrival order.
    /// Returns how many were processed.
    pub fn pump_tracking(&mut self) -> usize {
        let events = self.session.poll_events();
        for &event in &events {
            self.registry
                .handle_event(event, &mut self.scene, &mut self.audio);
        }
        events.len()
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) {
        let active = self.registry.active_page().copied();
        self.interaction
            .handle(event, active.as_ref(), &mut self.scene);
    }

    /// Render-loop body: advances animations by the wall-clock delta and renders.
    pub fn frame<R: FrameRenderer>(&mut self, renderer: &mut R) {
        let dt = self.clock.delta();
        self.advance(dt, renderer);
    }

    /// Same as [`frame`](Self::frame) with an explicit delta in seconds.
    pub fn advance<R: FrameRenderer>(&mut self, dt: f32, renderer: &mut R) {
        // Every page animates, tracked or not
        for mixer in &mut self.mixers {
            mixer.update(dt);
        }
        renderer.render(&self.scene);
        self.frame_count += 1;
    }

    /// Mixers in page registration order.
    #[must_use]
    pub fn mixers(&self) -> &[AnimationMixer] {
        &self.mixers
    }

    #[must_use]
    pub fn session(&self) -> &S {
        &self.session
    }

    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
