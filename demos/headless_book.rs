//! Runs a three-page book without camera, GPU or speakers.
//!
//! Assets are generated in memory; page appearances are scripted through the
//! manual tracker. Run with `RUST_LOG=debug` to follow the session.

use arbook::assets::MemoryAssetReader;
use arbook::interaction::PointerEvent;
use arbook::{Book, BookConfig, GltfAssetLoader, HeadlessRenderer, ManualTracker, PageConfig};

fn page_model(name: &str) -> String {
    format!(
        r#"{{
  "asset": {{ "version": "2.0" }},
  "scene": 0,
  "scenes": [ {{ "nodes": [0] }} ],
  "nodes": [ {{ "name": "{name}" }} ],
  "buffers": [ {{ "byteLength": 32, "uri": "data:application/octet-stream;base64,AAAAAAAAIEAAAAAAAAAAAAAAAAAAAIA/AAAAQAAAQEA=" }} ],
  "bufferViews": [
    {{ "buffer": 0, "byteOffset": 0, "byteLength": 8 }},
    {{ "buffer": 0, "byteOffset": 8, "byteLength": 24 }}
  ],
  "accessors": [
    {{ "bufferView": 0, "componentType": 5126, "count": 2, "type": "SCALAR", "min": [0.0], "max": [2.5] }},
    {{ "bufferView": 1, "componentType": 5126, "count": 2, "type": "VEC3" }}
  ],
  "animations": [ {{
    "name": "Idle",
    "channels": [ {{ "sampler": 0, "target": {{ "node": 0, "path": "translation" }} }} ],
    "samplers": [ {{ "input": 0, "output": 1 }} ]
  }} ]
}}"#
    )
}

fn silent_wav() -> Vec<u8> {
    let mut bytes = b"RIFF\x24\x00\x00\x00WAVEfmt ".to_vec();
    bytes.extend_from_slice(&[0u8; 24]);
    bytes
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut reader = MemoryAssetReader::new();
    let mut config = BookConfig::default();
    for (index, scale) in [(0u32, 0.2f32), (1, 0.3), (2, 0.5)] {
        let model = format!("models/page{index}.gltf");
        let sound = format!("sounds/page{index}.wav");
        reader.insert(model.clone(), page_model(&format!("Page{index}")).into_bytes());
        reader.insert(sound.clone(), silent_wav());
        config
            .pages
            .push(PageConfig::new(index, model, sound).with_uniform_scale(scale));
    }

    let tracker = ManualTracker::new();
    let loader = GltfAssetLoader::new(reader);
    let mut book = pollster::block_on(Book::start(
        &config,
        &tracker,
        &loader,
        arbook::SilentAudioOutput::new(),
    ))?;
    let mut renderer = HeadlessRenderer::new();

    let dt = 1.0 / 60.0;
    for frame in 0..240u32 {
        match frame {
            30 => tracker.found(0),
            60 => tracker.found(1),
            90 => tracker.lost(0),
            180 => tracker.lost(1),
            _ => {}
        }
        if frame == 100 {
            book.handle_pointer(PointerEvent::Down { x: 0.0, y: 0.0 });
        }
        if (101..120).contains(&frame) {
            book.handle_pointer(PointerEvent::Move {
                x: (frame - 100) as f32 * 4.0,
                y: 0.0,
            });
        }
        if frame == 120 {
            book.handle_pointer(PointerEvent::Up);
            book.handle_pointer(PointerEvent::Wheel { delta_y: -1.0 });
        }

        book.pump_tracking();
        book.advance(dt, &mut renderer);
    }

    println!("frames rendered: {}", renderer.frame_count());
    for binding in book.registry.bindings() {
        let rotation = book
            .scene
            .get_node(binding.model_root())
            .map(|n| n.transform.rotation)
            .unwrap_or_default();
        println!(
            "page {}: active={} narrating={} rotation={rotation}",
            binding.target_index(),
            binding.is_active(),
            binding.is_audio_playing(),
        );
    }
    println!("camera z: {}", book.scene.camera.position.z);

    Ok(())
}
