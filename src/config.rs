//! Book configuration
//!
//! Which model and narration belong to which printed page, plus the ambient
//! parameters of the session. Loaded once at startup, usually from JSON:
//!
//! ```json
//! {
//!   "image_target_src": "assets/targets/mapping/mapping.mind",
//!   "pages": [
//!     { "target_index": 0, "model": "models/page1.glb", "sound": "sounds/place1.mp3", "scale": [0.2, 0.2, 0.2] }
//!   ]
//! }
//! ```

use std::path::Path;

use glam::Vec3;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::audio::AudioSettings;
use crate::errors::{BookError, Result};
use crate::interaction::InteractionSettings;
use crate::scene::light::HemisphereLight;
use crate::tracking::TrackerConfig;

/// Uniform scale used for pages that do not specify one.
pub const DEFAULT_PAGE_SCALE: f32 = 0.01;

/// Offset lowering every model slightly below the center of its page.
pub const DEFAULT_PAGE_OFFSET: [f32; 3] = [0.0, -0.4, 0.0];

/// One printed page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Index of the page in the compiled image-target set
    pub target_index: u32,
    pub model: String,
    pub sound: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<[f32; 3]>,
}

impl PageConfig {
    #[must_use]
    pub fn new(target_index: u32, model: impl Into<String>, sound: impl Into<String>) -> Self {
        Self {
            target_index,
            model: model.into(),
            sound: sound.into(),
            scale: None,
        }
    }

    #[must_use]
    pub fn with_uniform_scale(mut self, scale: f32) -> Self {
        self.scale = Some([scale; 3]);
        self
    }

    /// Scale of the page model, falling back to [`DEFAULT_PAGE_SCALE`].
    #[must_use]
    pub fn scale(&self) -> Vec3 {
        self.scale
            .map_or(Vec3::splat(DEFAULT_PAGE_SCALE), Vec3::from_array)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    /// `0xRRGGBB`
    pub sky_color: u32,
    /// `0xRRGGBB`
    pub ground_color: u32,
    pub intensity: f32,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            sky_color: 0xff_ff_ff,
            ground_color: 0xbb_bb_ff,
            intensity: 1.0,
        }
    }
}

impl LightingConfig {
    #[must_use]
    pub fn to_light(&self) -> HemisphereLight {
        HemisphereLight::from_hex(self.sky_color, self.ground_color, self.intensity)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookConfig {
    pub image_target_src: String,
    pub max_track: usize,
    pub page_offset: [f32; 3],
    pub pages: Vec<PageConfig>,
    pub interaction: InteractionSettings,
    pub audio: AudioSettings,
    pub lighting: LightingConfig,
}

impl Default for BookConfig {
    fn default() -> Self {
        Self {
            image_target_src: "assets/targets/mapping/mapping.mind".to_string(),
            max_track: 1,
            page_offset: DEFAULT_PAGE_OFFSET,
            pages: Vec::new(),
            interaction: InteractionSettings::default(),
            audio: AudioSettings::default(),
            lighting: LightingConfig::default(),
        }
    }
}

impl BookConfig {
    /// The nine-page mapping book.
    #[must_use]
    pub fn reference() -> Self {
        const PAGES: [(&str, &str, f32); 9] = [
            ("page1.glb", "place1bj.mp3", 0.2),
            ("page2.glb", "place2bj.mp3", 0.3),
            ("page3.glb", "place3bj.mp3", 0.3),
            ("page4.glb", "place4bj.mp3", 0.5),
            ("page5.glb", "place5bj.mp3", 0.5),
            ("page6.glb", "place6bj.mp3", 0.5),
            ("page7.glb", "place7bj.mp3", 0.1),
            ("page9.glb", "place8bj.mp3", 0.2),
            ("page11.glb", "place9bj.mp3", 0.2),
        ];

        let pages = PAGES
            .iter()
            .zip(0u32..)
            .map(|(&(model, sound, scale), index)| {
                PageConfig::new(
                    index,
                    format!("assets/models/g7/{model}"),
                    format!("assets/sounds/BJmap/{sound}"),
                )
                .with_uniform_scale(scale)
            })
            .collect();

        Self {
            pages,
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[must_use]
    pub fn page_offset(&self) -> Vec3 {
        Vec3::from_array(self.page_offset)
    }

    #[must_use]
    pub fn tracker_config(&self) -> TrackerConfig {
        TrackerConfig {
            image_target_src: self.image_target_src.clone(),
            max_track: self.max_track,
        }
    }

    /// Checks the page table before anything gets loaded.
    pub fn validate(&self) -> Result<()> {
        if self.pages.is_empty() {
            return Err(BookError::Config("no pages configured".into()));
        }

        let mut seen = FxHashSet::default();
        for page in &self.pages {
            if !seen.insert(page.target_index) {
                return Err(BookError::DuplicateTarget(page.target_index));
            }
            if page.model.is_empty() || page.sound.is_empty() {
                return Err(BookError::Config(format!(
                    "page {} needs both a model and a sound",
                    page.target_index
                )));
            }
            let scale = page.scale();
            if !(scale.cmpgt(Vec3::ZERO).all() && scale.is_finite()) {
                return Err(BookError::Config(format!(
                    "page {} has a non-positive scale {scale}",
                    page.target_index
                )));
            }
        }
        Ok(())
    }
}
