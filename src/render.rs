//! Frame rendering seam
//!
//! Drawing the camera feed and the page models is the job of an external
//! renderer; the book only hands it the scene once per frame.

use crate::scene::Scene;

pub trait FrameRenderer {
    /// Draws the current state of `scene` as seen from `scene.camera`.
    fn render(&mut self, scene: &Scene);
}

/// Renderer that draws nothing and counts frames.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    frames: u64,
    last_visible_nodes: usize,
}

impl HeadlessRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Number of nodes that were visible in the last rendered frame.
    #[must_use]
    pub fn last_visible_nodes(&self) -> usize {
        self.last_visible_nodes
    }
}

impl FrameRenderer for HeadlessRenderer {
    fn render(&mut self, scene: &Scene) {
        self.frames += 1;
        self.last_visible_nodes = scene
            .nodes
            .keys()
            .filter(|&h| scene.is_visible_in_hierarchy(h))
            .count();
        log::trace!(
            "frame {}: {} visible nodes, camera z = {}",
            self.frames,
            self.last_visible_nodes,
            scene.camera.position.z
        );
    }
}
