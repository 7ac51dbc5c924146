//! Scene graph
//!
//! A minimal node hierarchy that light nodes live in. The scene owns every
//! node in an arena; nodes refer to parents and children by [`NodeId`].
//!
//! ```text
//! Scene
//!  ├── root (always running)
//!  │    ├── group ── PointLight3D      ─┐
//!  │    └── DirectionLight3D            ├─ registered in Scene::lights()
//!  └── detached nodes (not running)     ─┘  only while running
//! ```

mod graph;
mod light_registry;
mod node;

pub use graph::Scene;
pub use node::{Node, NodeKind};

slotmap::new_key_type! {
    /// Handle to a node in a [`Scene`]
    pub struct NodeId;
}

/// Scene errors
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// The id does not name a live node
    #[error("Node {0:?} not found")]
    NodeNotFound(NodeId),

    /// The root cannot be attached, detached or destroyed
    #[error("Operation not allowed on the root node")]
    RootNode,

    /// The child is already attached elsewhere
    #[error("Node {child:?} already has parent {parent:?}")]
    AlreadyHasParent {
        /// Node being attached
        child: NodeId,
        /// Its current parent
        parent: NodeId,
    },

    /// The child is the parent or one of its ancestors
    #[error("Attaching {child:?} under {parent:?} would create a cycle")]
    WouldCreateCycle {
        /// Requested parent
        parent: NodeId,
        /// Requested child
        child: NodeId,
    },

    /// The operation needs a light node
    #[error("Node {0:?} is not a light")]
    NotALight(NodeId),
}
