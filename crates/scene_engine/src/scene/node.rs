//! Scene node: local transform, hierarchy links and payload

use crate::foundation::math::{Mat4, Transform, Vec3};
use crate::lights::{Light, Light3D};
use super::NodeId;

/// What a node carries besides its transform
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Plain grouping node
    Empty,
    /// Light registered in the scene's light list while running
    Light(Light),
    /// Legacy unified light, never registered
    LegacyLight(Light3D),
}

/// A node in the scene arena
///
/// Hierarchy links and the running flag are owned by the [`Scene`](super::Scene);
/// only the transform and payload are editable through `&mut Node`.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    name: String,
    transform: Transform,
    pub(super) parent: Option<NodeId>,
    pub(super) children: Vec<NodeId>,
    pub(super) running: bool,
    kind: NodeKind,
}

impl Node {
    /// Create an empty node
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_kind(name, NodeKind::Empty)
    }

    /// Create a node carrying `kind`
    pub fn with_kind(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            transform: Transform::identity(),
            parent: None,
            children: Vec::new(),
            running: false,
            kind,
        }
    }

    /// Node name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set position relative to the parent
    pub fn set_position(&mut self, position: Vec3) {
        self.transform.position = position;
    }

    /// Position relative to the parent
    pub fn position(&self) -> Vec3 {
        self.transform.position
    }

    /// Set Euler rotation in degrees
    pub fn set_rotation3d(&mut self, degrees: Vec3) {
        self.transform.rotation_degrees = degrees;
    }

    /// Euler rotation in degrees
    pub fn rotation3d(&self) -> Vec3 {
        self.transform.rotation_degrees
    }

    /// Set per-axis scale
    pub fn set_scale(&mut self, scale: Vec3) {
        self.transform.scale = scale;
    }

    /// Per-axis scale
    pub fn scale(&self) -> Vec3 {
        self.transform.scale
    }

    /// Local transform
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Matrix mapping this node's space into its parent's
    pub fn node_to_parent_transform(&self) -> Mat4 {
        self.transform.to_matrix()
    }

    /// Parent node, if attached
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in insertion order
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Whether the node is part of the running scene
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Payload
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Mutable payload
    pub fn kind_mut(&mut self) -> &mut NodeKind {
        &mut self.kind
    }

    /// Light payload, if this is a light node
    pub fn light(&self) -> Option<&Light> {
        match &self.kind {
            NodeKind::Light(light) => Some(light),
            _ => None,
        }
    }

    /// Mutable light payload
    pub fn light_mut(&mut self) -> Option<&mut Light> {
        match &mut self.kind {
            NodeKind::Light(light) => Some(light),
            _ => None,
        }
    }

    /// Legacy light payload
    pub fn legacy_light(&self) -> Option<&Light3D> {
        match &self.kind {
            NodeKind::LegacyLight(light) => Some(light),
            _ => None,
        }
    }

    /// Mutable legacy light payload
    pub fn legacy_light_mut(&mut self) -> Option<&mut Light3D> {
        match &mut self.kind {
            NodeKind::LegacyLight(light) => Some(light),
            _ => None,
        }
    }

    /// Whether the node carries either light payload
    pub fn is_light(&self) -> bool {
        matches!(self.kind, NodeKind::Light(_) | NodeKind::LegacyLight(_))
    }
}
