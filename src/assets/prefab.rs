use std::sync::Arc;

use crate::animation::clip::AnimationClip;
use crate::scene::transform::Transform;

/// Prefab node: data only, children referenced by index.
#[derive(Debug, Clone, Default)]
pub struct PrefabNode {
    pub name: Option<String>,
    pub transform: Transform,
    /// Indices of the children in `Prefab::nodes`
    pub children_indices: Vec<usize>,
}

impl PrefabNode {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// Prefab: intermediate structure parsed from a model file.
///
/// Holds no scene handles; [`Scene::instantiate`](crate::scene::Scene::instantiate)
/// turns it into scene nodes.
#[derive(Debug, Clone, Default)]
pub struct Prefab {
    /// All nodes, flattened
    pub nodes: Vec<PrefabNode>,
    /// Indices of the top-level nodes in `nodes`
    pub root_indices: Vec<usize>,
    /// Animation clips, in file order
    pub animations: Vec<Arc<AnimationClip>>,
}

impl Prefab {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// First clip of the model, the one a page plays on registration.
    #[must_use]
    pub fn first_animation(&self) -> Option<&Arc<AnimationClip>> {
        self.animations.first()
    }
}
