use glam::Affine3A;
use slotmap::SlotMap;

use crate::assets::prefab::Prefab;
use crate::scene::NodeHandle;
use crate::scene::camera::Camera;
use crate::scene::light::HemisphereLight;
use crate::scene::node::Node;

/// Scene graph container.
///
/// Pure data: stores the node hierarchy, the camera and the lights. Drawing
/// is left to whatever [`FrameRenderer`](crate::render::FrameRenderer) the
/// host plugs in.
pub struct Scene {
    pub nodes: SlotMap<NodeHandle, Node>,
    pub root_nodes: Vec<NodeHandle>,

    pub camera: Camera,
    pub lights: Vec<HemisphereLight>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root_nodes: Vec::new(),
            camera: Camera::default(),
            lights: Vec::new(),
        }
    }

    /// Adds a node at the root of the scene.
    pub fn add_node(&mut self, node: Node) -> NodeHandle {
        let handle = self.nodes.insert(node);
        self.root_nodes.push(handle);
        handle
    }

    /// Creates a named root node.
    pub fn create_node_with_name(&mut self, name: &str) -> NodeHandle {
        self.add_node(Node::with_name(name))
    }

    /// Adds a node as child of `parent`.
    pub fn add_to_parent(&mut self, child: Node, parent: NodeHandle) -> NodeHandle {
        let handle = self.nodes.insert(child);
        self.link(handle, parent);
        handle
    }

    /// Moves `child` under `parent`, detaching it from its previous parent or
    /// from the root list.
    pub fn attach(&mut self, child: NodeHandle, parent: NodeHandle) {
        if child == parent || !self.nodes.contains_key(parent) {
            log::warn!("Ignoring invalid attach request");
            return;
        }
        let Some(node) = self.nodes.get(child) else {
            return;
        };

        match node.parent {
            Some(old_parent) => {
                if let Some(p) = self.nodes.get_mut(old_parent) {
                    p.children.retain(|&c| c != child);
                }
            }
            None => self.root_nodes.retain(|&r| r != child),
        }

        self.link(child, parent);
    }

    fn link(&mut self, child: NodeHandle, parent: NodeHandle) {
        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(child);
        }
        if let Some(c) = self.nodes.get_mut(child) {
            c.parent = Some(parent);
        }
    }

    #[must_use]
    pub fn get_node(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle)
    }

    pub fn get_node_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.nodes.get_mut(handle)
    }

    #[must_use]
    pub fn get_name(&self, handle: NodeHandle) -> Option<&str> {
        self.nodes.get(handle).and_then(|n| n.name.as_deref())
    }

    /// Finds the first node with the given name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<NodeHandle> {
        self.nodes
            .iter()
            .find(|(_, node)| node.name.as_deref() == Some(name))
            .map(|(handle, _)| handle)
    }

    pub fn set_visible(&mut self, handle: NodeHandle, visible: bool) {
        if let Some(node) = self.nodes.get_mut(handle) {
            node.visible = visible;
        }
    }

    /// A node is drawn only if it and all of its ancestors are visible.
    #[must_use]
    pub fn is_visible_in_hierarchy(&self, handle: NodeHandle) -> bool {
        let mut current = Some(handle);
        while let Some(h) = current {
            match self.nodes.get(h) {
                Some(node) if node.visible => current = node.parent,
                _ => return false,
            }
        }
        true
    }

    /// World matrix obtained by walking up the parent chain.
    #[must_use]
    pub fn world_matrix(&self, handle: NodeHandle) -> Affine3A {
        let mut matrix = Affine3A::IDENTITY;
        let mut current = Some(handle);
        while let Some(h) = current {
            let Some(node) = self.nodes.get(h) else {
                break;
            };
            matrix = node.transform.local_matrix() * matrix;
            current = node.parent;
        }
        matrix
    }

    pub fn add_light(&mut self, light: HemisphereLight) {
        self.lights.push(light);
    }

    /// Instantiates a prefab below a new root node named `name`.
    ///
    /// The prefab's own root nodes become children of the returned node, so
    /// the returned handle can be positioned and scaled as a whole.
    pub fn instantiate(&mut self, prefab: &Prefab, name: &str) -> NodeHandle {
        let root = self.create_node_with_name(name);

        let handles: Vec<NodeHandle> = prefab
            .nodes
            .iter()
            .map(|p| {
                let mut node = Node::new();
                node.name.clone_from(&p.name);
                node.transform = p.transform.clone();
                self.nodes.insert(node)
            })
            .collect();

        for (index, prefab_node) in prefab.nodes.iter().enumerate() {
            for &child_index in &prefab_node.children_indices {
                if let Some(&child) = handles.get(child_index) {
                    self.link(child, handles[index]);
                }
            }
        }

        for &root_index in &prefab.root_indices {
            if let Some(&handle) = handles.get(root_index) {
                self.link(handle, root);
            }
        }

        root
    }
}
