//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use arbook::assets::{AssetLoader, AudioBuffer, AudioFormat, Prefab, PrefabNode};
use arbook::errors::{BookError, Result};
use arbook::{AnimationClip, PageConfig};

/// In-memory loader recording the order in which assets are requested.
#[derive(Default)]
pub struct FakeLoader {
    models: HashMap<String, Prefab>,
    sounds: HashSet<String>,
    pub requests: RefCell<Vec<String>>,
}

impl FakeLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(mut self, path: &str, prefab: Prefab) -> Self {
        self.models.insert(path.to_string(), prefab);
        self
    }

    pub fn with_sound(mut self, path: &str) -> Self {
        self.sounds.insert(path.to_string());
        self
    }

    /// Registers an animated model and a sound for `page`.
    pub fn with_page(self, page: &PageConfig) -> Self {
        self.with_model(&page.model, animated_prefab(2.0))
            .with_sound(&page.sound)
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl AssetLoader for FakeLoader {
    async fn load_model(&self, path: &str) -> Result<Prefab> {
        self.requests.borrow_mut().push(path.to_string());
        self.models
            .get(path)
            .cloned()
            .ok_or_else(|| BookError::asset_load(path, "not found"))
    }

    async fn load_audio(&self, path: &str) -> Result<AudioBuffer> {
        self.requests.borrow_mut().push(path.to_string());
        if !self.sounds.contains(path) {
            return Err(BookError::asset_load(path, "not found"));
        }
        Ok(AudioBuffer {
            source: path.to_string(),
            format: AudioFormat::Mp3,
            bytes: Arc::from(&b"ID3\x04"[..]),
        })
    }
}

/// One-node model with a single clip of `duration` seconds.
pub fn animated_prefab(duration: f32) -> Prefab {
    let mut prefab = Prefab::new();
    prefab.nodes.push(PrefabNode::named("Body"));
    prefab.root_indices.push(0);
    prefab
        .animations
        .push(Arc::new(AnimationClip::new("Idle", duration)));
    prefab
}

/// One-node model without animation.
pub fn static_prefab() -> Prefab {
    let mut prefab = Prefab::new();
    prefab.nodes.push(PrefabNode::named("Statue"));
    prefab.root_indices.push(0);
    prefab
}

pub fn page(index: u32, scale: f32) -> PageConfig {
    PageConfig::new(
        index,
        format!("models/page{index}.glb"),
        format!("sounds/page{index}.mp3"),
    )
    .with_uniform_scale(scale)
}
