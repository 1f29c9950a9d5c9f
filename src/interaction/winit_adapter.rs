//! Winit input adapter
//!
//! Translates winit window events into [`PointerEvent`]s.

use glam::Vec2;
use winit::event::{ElementState, MouseScrollDelta, WindowEvent};

use crate::interaction::PointerEvent;

/// Winit reports button presses without a position, so the adapter keeps the
/// last cursor position around.
#[derive(Debug, Clone, Copy, Default)]
pub struct WinitPointerAdapter {
    cursor: Vec2,
}

impl WinitPointerAdapter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn translate(&mut self, event: &WindowEvent) -> Option<PointerEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::new(position.x as f32, position.y as f32);
                Some(PointerEvent::Move {
                    x: self.cursor.x,
                    y: self.cursor.y,
                })
            }
            WindowEvent::MouseInput { state, .. } => match state {
                ElementState::Pressed => Some(PointerEvent::Down {
                    x: self.cursor.x,
                    y: self.cursor.y,
                }),
                ElementState::Released => Some(PointerEvent::Up),
            },
            WindowEvent::MouseWheel { delta, .. } => {
                // Winit: positive y scrolls up. Pointer events: negative is up.
                let dy = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32,
                };
                Some(PointerEvent::Wheel { delta_y: -dy })
            }
            _ => None,
        }
    }
}
