//! Scene graph
//!
//! Holds the page models, their tracking anchors, the camera and the lights:
//! - [`Node`]: scene node (parent/child hierarchy plus a transform)
//! - [`Transform`]: position, Euler rotation and scale
//! - [`Scene`]: node container owning the camera and lights
//! - [`Camera`]: the viewer, moved along its forward axis by the wheel
//! - [`HemisphereLight`]: sky/ground ambient light of the AR overlay

pub mod camera;
pub mod light;
pub mod node;
pub mod scene;
pub mod transform;

pub use camera::Camera;
pub use light::HemisphereLight;
pub use node::Node;
pub use scene::Scene;
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    pub struct NodeHandle;
}
