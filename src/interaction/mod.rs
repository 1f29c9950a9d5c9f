//! Desktop interaction
//!
//! Mouse drag rotates the model of the active page, the wheel moves the
//! camera along its forward axis. Neither is clamped: rotation angles keep
//! growing and the camera can be pushed through the content.
//!
//! Pointer input is platform-agnostic ([`PointerEvent`]); adapters translate
//! windowing events into it (see `winit_adapter` behind the `winit` feature).

#[cfg(feature = "winit")]
pub mod winit_adapter;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::registry::ActivePage;
use crate::scene::Scene;

/// Pointer input understood by the interaction layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Any button pressed at `(x, y)` (client coordinates, pixels)
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    /// Any button released
    Up,
    /// Wheel scrolled; negative values scroll up (toward the user)
    Wheel { delta_y: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionSettings {
    /// Radians of rotation per pixel of drag
    pub rotation_speed: f32,
    /// Camera displacement per wheel event
    pub zoom_step: f32,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            rotation_speed: 0.005,
            zoom_step: 1.0,
        }
    }
}

/// Drag state carried between pointer events.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InteractionState {
    pub dragging: bool,
    pub last_pointer: Vec2,
}

/// Applies pointer input to the active page and to the camera.
#[derive(Debug, Clone, Default)]
pub struct InteractionLayer {
    pub settings: InteractionSettings,
    state: InteractionState,
}

impl InteractionLayer {
    #[must_use]
    pub fn new(settings: InteractionSettings) -> Self {
        Self {
            settings,
            state: InteractionState::default(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Handles one pointer event. `active` is the page currently selected for
    /// interaction, if any.
    pub fn handle(&mut self, event: PointerEvent, active: Option<&ActivePage>, scene: &mut Scene) {
        match event {
            PointerEvent::Down { x, y } => {
                self.state.dragging = true;
                self.state.last_pointer = Vec2::new(x, y);
            }
            PointerEvent::Move { x, y } => {
                if !self.state.dragging {
                    return;
                }
                let Some(node) = active.and_then(|page| scene.get_node_mut(page.node)) else {
                    return;
                };
                let position = Vec2::new(x, y);
                let delta = position - self.state.last_pointer;
                // Horizontal drag spins around Y, vertical drag tilts around X
                node.transform.rotation.y += delta.x * self.settings.rotation_speed;
                node.transform.rotation.x += delta.y * self.settings.rotation_speed;
                self.state.last_pointer = position;
            }
            PointerEvent::Up => {
                self.state.dragging = false;
            }
            PointerEvent::Wheel { delta_y } => {
                if delta_y < 0.0 {
                    scene.camera.position.z -= self.settings.zoom_step;
                } else {
                    scene.camera.position.z += self.settings.zoom_step;
                }
            }
        }
    }
}
