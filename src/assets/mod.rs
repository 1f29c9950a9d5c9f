//! Asset loading
//!
//! Resolves the model and narration paths of each page:
//! - [`AssetLoader`]: the seam the page registry loads through
//! - [`GltfAssetLoader`]: glTF/GLB models and raw audio containers read via an [`AssetReader`]
//! - [`Prefab`]: loaded node hierarchy plus animation clips, ready for [`Scene::instantiate`](crate::scene::Scene::instantiate)
//! - [`AudioBuffer`]: undecoded narration bytes with their sniffed container format

pub mod audio;
pub mod gltf_loader;
pub mod io;
pub mod prefab;

pub use audio::{AudioBuffer, AudioFormat};
pub use gltf_loader::GltfAssetLoader;
pub use io::{AssetReader, FileAssetReader, MemoryAssetReader};
pub use prefab::{Prefab, PrefabNode};

use std::future::Future;

use crate::errors::Result;

/// Resolves model and audio paths into loaded assets.
///
/// Failures are reported as [`BookError::AssetLoad`](crate::errors::BookError::AssetLoad)
/// and are never retried.
pub trait AssetLoader {
    /// Loads a 3D model: its node hierarchy and zero or more animation clips.
    fn load_model(&self, path: &str) -> impl Future<Output = Result<Prefab>>;

    /// Loads a narration sound.
    fn load_audio(&self, path: &str) -> impl Future<Output = Result<AudioBuffer>>;
}
