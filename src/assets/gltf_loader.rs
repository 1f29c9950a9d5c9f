use std::path::Path;
use std::sync::Arc;

use base64::Engine as _;
use glam::{Quat, Vec3};

use crate::animation::clip::AnimationClip;
use crate::assets::AssetLoader;
use crate::assets::audio::{AudioBuffer, AudioFormat};
use crate::assets::io::{AssetReader, FileAssetReader, resolve_relative};
use crate::assets::prefab::{Prefab, PrefabNode};
use crate::errors::{BookError, Result};
use crate::scene::transform::Transform;

/// Loads glTF 2.0 models (`.gltf` or `.glb`) and narration sounds through an
/// [`AssetReader`].
///
/// Only the node hierarchy and the animation clip metadata are extracted;
/// meshes and materials stay in the file for the renderer to consume.
pub struct GltfAssetLoader<R: AssetReader> {
    reader: R,
}

impl GltfAssetLoader<FileAssetReader> {
    /// Loader reading files relative to `root`.
    #[must_use]
    pub fn from_dir(root: impl AsRef<Path>) -> Self {
        Self::new(FileAssetReader::new(root))
    }
}

impl<R: AssetReader> GltfAssetLoader<R> {
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    #[must_use]
    pub fn reader(&self) -> &R {
        &self.reader
    }

    async fn load_buffers(&self, gltf: &::gltf::Gltf, path: &str) -> Result<Vec<Vec<u8>>> {
        let mut buffer_data = Vec::new();
        for buffer in gltf.buffers() {
            let data = match buffer.source() {
                ::gltf::buffer::Source::Bin => gltf
                    .blob
                    .as_deref()
                    .map(<[u8]>::to_vec)
                    .ok_or_else(|| BookError::asset_load(path, "missing GLB binary chunk"))?,
                ::gltf::buffer::Source::Uri(uri) => {
                    if let Some(data_uri) = uri.strip_prefix("data:") {
                        decode_data_uri(data_uri).map_err(|e| BookError::asset_load(path, e))?
                    } else {
                        self.reader.read_bytes(&resolve_relative(path, uri)).await?
                    }
                }
            };
            buffer_data.push(data);
        }
        Ok(buffer_data)
    }
}

impl<R: AssetReader> AssetLoader for GltfAssetLoader<R> {
    async fn load_model(&self, path: &str) -> Result<Prefab> {
        let bytes = self.reader.read_bytes(path).await?;
        let gltf = ::gltf::Gltf::from_slice(&bytes).map_err(|e| BookError::asset_load(path, e))?;
        let buffers = self.load_buffers(&gltf, path).await?;

        let prefab = build_prefab(&gltf, &buffers);
        log::debug!(
            "Loaded model '{path}': {} nodes, {} clips",
            prefab.nodes.len(),
            prefab.animations.len()
        );
        Ok(prefab)
    }

    async fn load_audio(&self, path: &str) -> Result<AudioBuffer> {
        let bytes = self.reader.read_bytes(path).await?;
        if bytes.is_empty() {
            return Err(BookError::asset_load(path, "empty audio file"));
        }
        let format = AudioFormat::sniff(&bytes)
            .ok_or_else(|| BookError::asset_load(path, "unrecognized audio container"))?;

        log::debug!("Loaded audio '{path}' ({format:?}, {} bytes)", bytes.len());
        Ok(AudioBuffer {
            source: path.to_string(),
            format,
            bytes: bytes.into(),
        })
    }
}

/// Decodes the part of a `data:` URI after the scheme.
fn decode_data_uri(data_uri: &str) -> std::result::Result<Vec<u8>, String> {
    let (_, payload) = data_uri
        .split_once(";base64,")
        .ok_or_else(|| "only base64 data URIs are supported".to_string())?;
    base64::engine::general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| e.to_string())
}

fn build_prefab(gltf: &::gltf::Gltf, buffers: &[Vec<u8>]) -> Prefab {
    let mut prefab = Prefab::new();

    for node in gltf.nodes() {
        let (t, r, s) = node.transform().decomposed();
        prefab.nodes.push(PrefabNode {
            name: node.name().map(str::to_string),
            transform: Transform::from_trs(
                Vec3::from_array(t),
                Quat::from_array(r),
                Vec3::from_array(s),
            ),
            children_indices: node.children().map(|c| c.index()).collect(),
        });
    }

    let scene = gltf.default_scene().or_else(|| gltf.scenes().next());
    prefab.root_indices = match scene {
        Some(scene) => scene.nodes().map(|n| n.index()).collect(),
        None => {
            // No scene: every node that is nobody's child is a root
            let mut is_child = vec![false; prefab.nodes.len()];
            for node in &prefab.nodes {
                for &child in &node.children_indices {
                    if let Some(flag) = is_child.get_mut(child) {
                        *flag = true;
                    }
                }
            }
            (0..prefab.nodes.len()).filter(|&i| !is_child[i]).collect()
        }
    };

    for anim in gltf.animations() {
        let end_times = anim.channels().filter_map(|channel| {
            let reader = channel.reader(|buffer| buffers.get(buffer.index()).map(Vec::as_slice));
            reader
                .read_inputs()
                .map(|inputs| inputs.fold(0.0_f32, f32::max))
        });
        let name = anim
            .name()
            .map_or_else(|| format!("animation_{}", anim.index()), str::to_string);
        prefab
            .animations
            .push(Arc::new(AnimationClip::from_keyframe_times(name, end_times)));
    }

    prefab
}
