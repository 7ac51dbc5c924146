//! Scene arena, hierarchy and enter/exit notification

use slotmap::SlotMap;

use crate::core::LightingConfig;
use crate::foundation::math::{utils, Mat4, Vec3};
use crate::lights::{rotation_from_direction, Light, Light3D};
use super::{Node, NodeId, NodeKind, SceneError};

/// A scene: a rooted tree of nodes plus the list of lights currently in it.
///
/// Nodes live in an arena and refer to each other by [`NodeId`]. A node is
/// *running* while it is attached (directly or through ancestors) under the
/// root. Attaching a subtree under a running node enters it; detaching
/// exits it. Light nodes add themselves to [`Scene::lights`] on enter and
/// remove themselves on exit.
#[derive(Debug)]
pub struct Scene {
    pub(super) config: LightingConfig,
    pub(super) nodes: SlotMap<NodeId, Node>,
    root: NodeId,
    pub(super) lights: Vec<NodeId>,
}

impl Scene {
    /// Create a scene with default lighting limits
    pub fn new() -> Self {
        Self::with_config(LightingConfig::default())
    }

    /// Create a scene with custom lighting limits
    pub fn with_config(config: LightingConfig) -> Self {
        let mut nodes = SlotMap::with_key();
        let mut root_node = Node::new("root");
        root_node.running = true;
        let root = nodes.insert(root_node);

        Self {
            config,
            nodes,
            root,
            lights: Vec::new(),
        }
    }

    /// Lighting limits this scene was created with
    pub fn config(&self) -> &LightingConfig {
        &self.config
    }

    /// Root node; always running
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of nodes including the root
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Insert a detached node
    pub fn insert_node(&mut self, mut node: Node) -> NodeId {
        node.parent = None;
        node.children.clear();
        node.running = false;
        self.nodes.insert(node)
    }

    /// Insert a detached empty node
    pub fn create_node(&mut self, name: impl Into<String>) -> NodeId {
        self.insert_node(Node::new(name))
    }

    /// Look up a node
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Look up a node mutably
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    fn get(&self, id: NodeId) -> Result<&Node, SceneError> {
        self.nodes.get(id).ok_or(SceneError::NodeNotFound(id))
    }

    fn get_mut(&mut self, id: NodeId) -> Result<&mut Node, SceneError> {
        self.nodes.get_mut(id).ok_or(SceneError::NodeNotFound(id))
    }

    /// Light payload of a light node
    pub fn light(&self, id: NodeId) -> Option<&Light> {
        self.nodes.get(id).and_then(Node::light)
    }

    /// Mutable light payload of a light node
    pub fn light_mut(&mut self, id: NodeId) -> Option<&mut Light> {
        self.nodes.get_mut(id).and_then(Node::light_mut)
    }

    /// Payload of a legacy light node
    pub fn legacy_light(&self, id: NodeId) -> Option<&Light3D> {
        self.nodes.get(id).and_then(Node::legacy_light)
    }

    /// Mutable payload of a legacy light node
    pub fn legacy_light_mut(&mut self, id: NodeId) -> Option<&mut Light3D> {
        self.nodes.get_mut(id).and_then(Node::legacy_light_mut)
    }

    /// Attach `child` as the last child of `parent`.
    ///
    /// If `parent` is running the child's subtree enters the scene.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), SceneError> {
        self.get(parent)?;
        if child == self.root {
            return Err(SceneError::RootNode);
        }
        if let Some(existing) = self.get(child)?.parent {
            return Err(SceneError::AlreadyHasParent { child, parent: existing });
        }
        if self.is_ancestor_or_self(child, parent) {
            return Err(SceneError::WouldCreateCycle { parent, child });
        }

        self.get_mut(child)?.parent = Some(parent);
        let parent_node = self.get_mut(parent)?;
        parent_node.children.push(child);
        let parent_running = parent_node.running;

        log::trace!("Attached node {:?} under {:?}", child, parent);
        if parent_running {
            self.on_enter(child)?;
        }
        Ok(())
    }

    /// Detach `child` from its parent, exiting it first if running.
    ///
    /// Detached nodes stay in the arena and can be attached again. Detaching
    /// a node without a parent is a no-op.
    pub fn remove_from_parent(&mut self, child: NodeId) -> Result<(), SceneError> {
        if child == self.root {
            return Err(SceneError::RootNode);
        }
        let Some(parent) = self.get(child)?.parent else {
            return Ok(());
        };

        if self.get(child)?.running {
            self.on_exit(child)?;
        }
        self.get_mut(parent)?.children.retain(|&id| id != child);
        self.get_mut(child)?.parent = None;
        log::trace!("Detached node {:?} from {:?}", child, parent);
        Ok(())
    }

    /// Detach and drop a node together with its whole subtree.
    ///
    /// Returns the number of nodes removed.
    pub fn destroy_node(&mut self, id: NodeId) -> Result<usize, SceneError> {
        self.remove_from_parent(id)?;

        let mut stack = vec![id];
        let mut removed = 0;
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.remove(current) {
                self.unregister_light(current);
                stack.extend(node.children);
                removed += 1;
            }
        }
        Ok(removed)
    }

    /// Enter notification for `id` and its subtree, parents before children.
    ///
    /// Marks the nodes running and registers light nodes in the light list.
    /// Registration is idempotent: entering twice never duplicates an entry.
    /// Nodes that are not attached under the root are left alone.
    pub(crate) fn on_enter(&mut self, id: NodeId) -> Result<(), SceneError> {
        self.get(id)?;
        if !self.is_ancestor_or_self(self.root, id) {
            log::trace!("Node {:?} is not under the root, not entering", id);
            return Ok(());
        }

        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let node = self.get_mut(current)?;
            node.running = true;
            let is_light = matches!(node.kind(), NodeKind::Light(_));
            stack.extend(node.children.iter().rev().copied());

            if is_light {
                self.register_light(current);
            }
        }
        Ok(())
    }

    /// Exit notification for `id` and its subtree, parents before children.
    ///
    /// Marks the nodes stopped and unregisters light nodes from the light list.
    pub(crate) fn on_exit(&mut self, id: NodeId) -> Result<(), SceneError> {
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let node = self.get_mut(current)?;
            node.running = false;
            let is_light = matches!(node.kind(), NodeKind::Light(_));
            stack.extend(node.children.iter().rev().copied());

            if is_light {
                self.unregister_light(current);
            }
        }
        Ok(())
    }

    fn register_light(&mut self, id: NodeId) {
        if self.lights.contains(&id) {
            log::trace!("Light {:?} already registered", id);
        } else {
            self.lights.push(id);
            log::debug!("Registered light {:?} ({} lights in scene)", id, self.lights.len());
        }
    }

    fn unregister_light(&mut self, id: NodeId) {
        if let Some(index) = self.lights.iter().position(|&light| light == id) {
            self.lights.remove(index);
            log::debug!("Unregistered light {:?} ({} lights in scene)", id, self.lights.len());
        }
    }

    fn is_ancestor_or_self(&self, ancestor: NodeId, mut node: NodeId) -> bool {
        loop {
            if node == ancestor {
                return true;
            }
            match self.nodes.get(node).and_then(|n| n.parent) {
                Some(parent) => node = parent,
                None => return false,
            }
        }
    }

    /// Matrix mapping `id`'s space into its parent's
    pub fn node_to_parent_transform(&self, id: NodeId) -> Result<Mat4, SceneError> {
        Ok(self.get(id)?.node_to_parent_transform())
    }

    /// Matrix mapping `id`'s space into world space
    pub fn node_to_world_transform(&self, id: NodeId) -> Result<Mat4, SceneError> {
        let mut node = self.get(id)?;
        let mut matrix = node.node_to_parent_transform();
        while let Some(parent) = node.parent {
            node = self.get(parent)?;
            matrix = node.node_to_parent_transform() * matrix;
        }
        Ok(matrix)
    }

    /// Rotate a light node so its forward axis points along `direction`.
    ///
    /// The rotation is yaw then pitch with no roll; any previous rotation is
    /// replaced.
    pub fn set_rotation_from_direction(
        &mut self,
        id: NodeId,
        direction: Vec3,
    ) -> Result<(), SceneError> {
        let node = self.light_node_mut(id)?;
        node.set_rotation3d(rotation_from_direction(direction));
        Ok(())
    }

    /// Light direction in the parent's space
    pub fn direction(&self, id: NodeId) -> Result<Vec3, SceneError> {
        let node = self.light_node(id)?;
        Ok(utils::forward_from_matrix(&node.node_to_parent_transform()))
    }

    /// Light direction in world space
    pub fn direction_in_world(&self, id: NodeId) -> Result<Vec3, SceneError> {
        self.light_node(id)?;
        Ok(utils::forward_from_matrix(&self.node_to_world_transform(id)?))
    }

    fn light_node(&self, id: NodeId) -> Result<&Node, SceneError> {
        let node = self.get(id)?;
        if node.is_light() {
            Ok(node)
        } else {
            Err(SceneError::NotALight(id))
        }
    }

    fn light_node_mut(&mut self, id: NodeId) -> Result<&mut Node, SceneError> {
        let node = self.get_mut(id)?;
        if node.is_light() {
            Ok(node)
        } else {
            Err(SceneError::NotALight(id))
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::lights::{Color3B, DirectionLight3D, PointLight3D};

    #[test]
    fn test_new_scene_has_running_root() {
        let scene = Scene::new();
        assert_eq!(scene.node_count(), 1);
        assert!(scene.node(scene.root()).unwrap().is_running());
        assert!(scene.lights().is_empty());
    }

    #[test]
    fn test_attach_enters_subtree() {
        let mut scene = Scene::new();
        let group = scene.create_node("group");
        let child = scene.create_node("child");
        scene.add_child(group, child).unwrap();
        assert!(!scene.node(child).unwrap().is_running());

        let root = scene.root();
        scene.add_child(root, group).unwrap();
        assert!(scene.node(group).unwrap().is_running());
        assert!(scene.node(child).unwrap().is_running());
        assert_eq!(scene.node(root).unwrap().children(), &[group]);
    }

    #[test]
    fn test_cycles_and_reparenting_rejected() {
        let mut scene = Scene::new();
        let a = scene.create_node("a");
        let b = scene.create_node("b");
        scene.add_child(a, b).unwrap();

        let cycle = |parent, child| -> Result<(), SceneError> {
            Err(SceneError::WouldCreateCycle { parent, child })
        };
        assert_eq!(scene.add_child(b, a), cycle(b, a));
        assert_eq!(scene.add_child(a, a), cycle(a, a));
        assert_eq!(scene.add_child(b, scene.root()), Err(SceneError::RootNode));

        let c = scene.create_node("c");
        assert_eq!(
            scene.add_child(c, b),
            Err(SceneError::AlreadyHasParent { child: b, parent: a })
        );
    }

    #[test]
    fn test_light_in_subtree_registers_on_attach() {
        let mut scene = Scene::new();
        let group = scene.create_node("group");
        let light = PointLight3D::create(&mut scene, Vec3::zeros(), Color3B::WHITE, 5.0);
        scene.add_child(group, light).unwrap();
        assert!(scene.lights().is_empty());

        let root = scene.root();
        scene.add_child(root, group).unwrap();
        assert_eq!(scene.lights(), &[light]);

        scene.remove_from_parent(group).unwrap();
        assert!(scene.lights().is_empty());
        assert!(!scene.node(light).unwrap().is_running());
    }

    #[test]
    fn test_destroy_removes_subtree_and_light_entry() {
        let mut scene = Scene::new();
        let root = scene.root();
        let group = scene.create_node("group");
        let light = DirectionLight3D::create(&mut scene, Vec3::new(0.0, -1.0, 0.0), Color3B::WHITE);
        scene.add_child(group, light).unwrap();
        scene.add_child(root, group).unwrap();

        assert_eq!(scene.destroy_node(group).unwrap(), 2);
        assert!(scene.node(light).is_none());
        assert!(scene.lights().is_empty());
        assert!(scene.node(root).unwrap().children().is_empty());
    }

    #[test]
    fn test_world_transform_composes_parents() {
        let mut scene = Scene::new();
        let root = scene.root();
        let parent = scene.create_node("parent");
        scene.node_mut(parent).unwrap().set_position(Vec3::new(1.0, 0.0, 0.0));
        scene.node_mut(parent).unwrap().set_rotation3d(Vec3::new(0.0, 90.0, 0.0));
        let light = PointLight3D::create(&mut scene, Vec3::new(0.0, 0.0, 1.0), Color3B::WHITE, 1.0);
        scene.add_child(parent, light).unwrap();
        scene.add_child(root, parent).unwrap();

        let world = scene.node_to_world_transform(light).unwrap();
        // (0,0,1) yawed 90 degrees lands on +X, then offset by the parent
        assert_relative_eq!(world[(0, 3)], 2.0, epsilon = 1e-6);
        assert_relative_eq!(world[(1, 3)], 0.0, epsilon = 1e-6);
        assert_relative_eq!(world[(2, 3)], 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_direction_requires_light_node() {
        let mut scene = Scene::new();
        let plain = scene.create_node("plain");
        assert_eq!(scene.direction(plain), Err(SceneError::NotALight(plain)));
        assert_eq!(
            scene.set_rotation_from_direction(plain, Vec3::x()),
            Err(SceneError::NotALight(plain))
        );
    }

    #[test]
    fn test_enter_on_detached_node_is_ignored() {
        let mut scene = Scene::new();
        let group = scene.create_node("group");
        let light = PointLight3D::create(&mut scene, Vec3::zeros(), Color3B::WHITE, 2.0);
        scene.add_child(group, light).unwrap();

        scene.on_enter(light).unwrap();
        scene.on_enter(group).unwrap();
        assert!(scene.lights().is_empty());
        assert!(!scene.node(light).unwrap().is_running());
        assert!(!scene.node(group).unwrap().is_running());
    }

    #[test]
    fn test_entering_twice_registers_once() {
        let mut scene = Scene::new();
        let root = scene.root();
        let light = PointLight3D::create(&mut scene, Vec3::new(0.0, 2.0, 0.0), Color3B::WHITE, 5.0);

        scene.add_child(root, light).unwrap();
        scene.on_enter(light).unwrap();
        assert_eq!(scene.lights(), &[light]);

        scene.on_exit(light).unwrap();
        assert!(scene.lights().is_empty());

        // Exiting again is a no-op
        scene.on_exit(light).unwrap();
        assert!(scene.lights().is_empty());
    }

    #[test]
    fn test_stale_id_reports_not_found() {
        let mut scene = Scene::new();
        let node = scene.create_node("gone");
        scene.destroy_node(node).unwrap();
        assert_eq!(scene.node_to_parent_transform(node), Err(SceneError::NodeNotFound(node)));
    }
}
