//! Page registry
//!
//! Binds every tracked image target to its model, narration and transform,
//! and applies the found/lost lifecycle of the tracking engine to them.
//!
//! # Lifecycle
//!
//! - A binding is created once per configured page by [`PageRegistry::register_page`]
//!   and lives for the whole session.
//! - **Found**: the anchor becomes visible, the narration starts looping and
//!   the page becomes the [`ActivePage`] for interaction.
//! - **Lost**: the anchor is hidden, the narration stops and the selection is
//!   cleared if it still points at this page.
//!
//! Only one page is selected at a time. When several targets are visible the
//! most recently found one wins; the others keep playing their narration.

use glam::Vec3;
use rustc_hash::FxHashMap;

use crate::animation::mixer::AnimationMixer;
use crate::assets::AssetLoader;
use crate::audio::{AudioOutput, AudioSettings, EmitterHandle};
use crate::config::PageConfig;
use crate::errors::{BookError, Result};
use crate::scene::{Node, NodeHandle, Scene};
use crate::tracking::{AnchorEvent, AnchorEventKind, TrackingSession};

/// Association of one tracked target with its model, audio and transform.
#[derive(Debug, Clone)]
pub struct PageBinding {
    target_index: u32,
    anchor: NodeHandle,
    model_root: NodeHandle,
    emitter: EmitterHandle,
    scale: Vec3,
    offset: Vec3,
    found: bool,
    audio_playing: bool,
}

impl PageBinding {
    #[must_use]
    pub fn target_index(&self) -> u32 {
        self.target_index
    }

    /// Anchor node the tracking engine moves onto the printed page.
    #[must_use]
    pub fn anchor(&self) -> NodeHandle {
        self.anchor
    }

    /// Root node of the page model. This is what interaction rotates.
    #[must_use]
    pub fn model_root(&self) -> NodeHandle {
        self.model_root
    }

    #[must_use]
    pub fn emitter(&self) -> EmitterHandle {
        self.emitter
    }

    #[must_use]
    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    #[must_use]
    pub fn offset(&self) -> Vec3 {
        self.offset
    }

    /// True between the latest found event and the next lost event.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.found
    }

    #[must_use]
    pub fn is_audio_playing(&self) -> bool {
        self.audio_playing
    }
}

/// The page currently receiving interaction edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePage {
    pub target_index: u32,
    pub node: NodeHandle,
}

/// Collaborators a page registration goes through.
pub struct PageContext<'a, S, L, A> {
    pub scene: &'a mut Scene,
    pub session: &'a mut S,
    pub loader: &'a L,
    pub audio: &'a mut A,
}

/// Ordered set of page bindings plus the active-page selection.
#[derive(Debug, Default)]
pub struct PageRegistry {
    bindings: Vec<PageBinding>,
    by_target: FxHashMap<u32, usize>,
    active: Option<ActivePage>,
    offset: Vec3,
    audio_settings: AudioSettings,
}

impl PageRegistry {
    /// `offset` is applied to every page model; `audio_settings` to every narration.
    #[must_use]
    pub fn new(offset: Vec3, audio_settings: AudioSettings) -> Self {
        Self {
            bindings: Vec::new(),
            by_target: FxHashMap::default(),
            active: None,
            offset,
            audio_settings,
        }
    }

    /// Loads a page's model and narration, anchors them to its target and
    /// starts the model's first clip.
    ///
    /// On error the scene, the session and the registry are left unchanged.
    ///
    /// Returns the page's animation mixer; the caller advances it every frame.
    /// The clip plays regardless of whether the page is being tracked.
    pub async fn register_page<S, L, A>(
        &mut self,
        ctx: PageContext<'_, S, L, A>,
        page: &PageConfig,
    ) -> Result<AnimationMixer>
    where
        S: TrackingSession,
        L: AssetLoader,
        A: AudioOutput,
    {
        let target_index = page.target_index;
        if self.by_target.contains_key(&target_index) {
            return Err(BookError::DuplicateTarget(target_index));
        }

        // Nothing is mutated until both assets are loaded
        let prefab = ctx.loader.load_model(&page.model).await?;
        let buffer = ctx.loader.load_audio(&page.sound).await?;

        ctx.session.add_anchor(target_index)?;

        let model_root = ctx.scene.instantiate(&prefab, &format!("page{target_index}"));
        let scale = page.scale();
        if let Some(root) = ctx.scene.get_node_mut(model_root) {
            root.transform.position = self.offset;
            root.transform.scale = scale;
        }

        let mut anchor_node = Node::with_name(format!("anchor{target_index}"));
        // Hidden until the tracking engine finds the page
        anchor_node.visible = false;
        let anchor = ctx.scene.add_node(anchor_node);
        ctx.scene.attach(model_root, anchor);

        let emitter = ctx.audio.create_emitter(&buffer, anchor, self.audio_settings);

        let mut mixer = AnimationMixer::new(model_root);
        match prefab.first_animation() {
            Some(clip) => {
                mixer.clip_action(clip).play();
                log::debug!("Page {target_index}: playing clip '{}'", clip.name);
            }
            None => log::debug!("Page {target_index}: model has no animation clips"),
        }

        self.by_target.insert(target_index, self.bindings.len());
        self.bindings.push(PageBinding {
            target_index,
            anchor,
            model_root,
            emitter,
            scale,
            offset: self.offset,
            found: false,
            audio_playing: false,
        });

        log::info!("Registered page {target_index} ('{}')", page.model);
        Ok(mixer)
    }

    /// Applies one tracking event. Events for unregistered targets are ignored.
    pub fn handle_event<A: AudioOutput>(
        &mut self,
        event: AnchorEvent,
        scene: &mut Scene,
        audio: &mut A,
    ) {
        let Some(&slot) = self.by_target.get(&event.target_index) else {
            log::warn!(
                "Ignoring {:?} for unregistered target {}",
                event.kind,
                event.target_index
            );
            return;
        };
        let binding = &mut self.bindings[slot];

        match event.kind {
            AnchorEventKind::Found => {
                log::debug!("Target {} found", binding.target_index);
                binding.found = true;
                scene.set_visible(binding.anchor, true);
                if binding.audio_playing {
                    log::warn!("Narration of page {} is already playing", binding.target_index);
                } else {
                    audio.play(binding.emitter);
                    binding.audio_playing = true;
                }
                self.active = Some(ActivePage {
                    target_index: binding.target_index,
                    node: binding.model_root,
                });
            }
            AnchorEventKind::Lost => {
                log::debug!("Target {} lost", binding.target_index);
                binding.found = false;
                scene.set_visible(binding.anchor, false);
                if binding.audio_playing {
                    audio.stop(binding.emitter);
                    binding.audio_playing = false;
                }
                if self
                    .active
                    .is_some_and(|a| a.target_index == binding.target_index)
                {
                    self.active = None;
                }
            }
        }
    }

    #[must_use]
    pub fn active_page(&self) -> Option<&ActivePage> {
        self.active.as_ref()
    }

    #[must_use]
    pub fn binding(&self, target_index: u32) -> Option<&PageBinding> {
        self.by_target
            .get(&target_index)
            .map(|&slot| &self.bindings[slot])
    }

    /// Bindings in registration order.
    #[must_use]
    pub fn bindings(&self) -> &[PageBinding] {
        &self.bindings
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
