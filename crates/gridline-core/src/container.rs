//! Container abstraction over the host scene graph.
//!
//! The grid builder never talks to the host directly. It needs three
//! capabilities from the node that owns the lines: list its children, spawn a
//! line primitive as a child, and destroy a child. Whether destruction happens
//! right away or at the end of the frame depends on the host's mode and is
//! decided by an injected [`DestroyPolicy`].

use glam::Vec3;

use crate::grid::LineSegment;
use crate::params::MaterialRef;

/// Opaque handle to a child node of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

/// Appearance applied to every spawned line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    /// Material of the line, if any.
    pub material: Option<MaterialRef>,
    /// Width at both ends of the line.
    pub width: f32,
}

/// When a destroyed child actually disappears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DestroyTiming {
    /// Removed before `destroy_child` returns.
    #[default]
    Immediate,
    /// Removed at the end of the current frame.
    Deferred,
}

/// What the host is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HostMode {
    /// Scene is being edited; nothing is ticking.
    #[default]
    Authoring,
    /// Scene is running its update loop.
    Playing,
}

/// Decides how children are destroyed in a given host mode.
pub trait DestroyPolicy: Send + Sync {
    /// Returns the destruction timing for `mode`.
    fn timing(&self, mode: HostMode) -> DestroyTiming;
}

/// Deferred while playing, immediate while authoring.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostModePolicy;

impl DestroyPolicy for HostModePolicy {
    fn timing(&self, mode: HostMode) -> DestroyTiming {
        match mode {
            HostMode::Authoring => DestroyTiming::Immediate,
            HostMode::Playing => DestroyTiming::Deferred,
        }
    }
}

/// Always destroys immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediatePolicy;

impl DestroyPolicy for ImmediatePolicy {
    fn timing(&self, _mode: HostMode) -> DestroyTiming {
        DestroyTiming::Immediate
    }
}

/// Always defers destruction to the end of the frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeferredPolicy;

impl DestroyPolicy for DeferredPolicy {
    fn timing(&self, _mode: HostMode) -> DestroyTiming {
        DestroyTiming::Deferred
    }
}

/// A host node that owns the grid's line primitives.
pub trait GridContainer {
    /// Returns the live children, in creation order.
    ///
    /// Children already scheduled for deferred destruction are not included.
    fn child_ids(&self) -> Vec<NodeId>;

    /// Creates a line primitive parented to this container.
    ///
    /// The line is positioned in the container's local space and styled with
    /// `style`.
    fn spawn_line(&mut self, segment: &LineSegment, style: &LineStyle) -> NodeId;

    /// Destroys a child with the given timing.
    fn destroy_child(&mut self, node: NodeId, timing: DestroyTiming);
}

/// A line primitive held by a [`LineContainer`].
#[derive(Debug, Clone, PartialEq)]
pub struct LineNode {
    pub id: NodeId,
    pub name: String,
    pub start: Vec3,
    pub end: Vec3,
    pub style: LineStyle,
    /// Grid lines are always positioned in local space.
    pub use_world_space: bool,
    /// Generated lines are not user-editable.
    pub editable: bool,
}

/// In-memory container used headless and in tests.
#[derive(Debug, Default)]
pub struct LineContainer {
    next_id: u64,
    nodes: Vec<LineNode>,
    pending_destroy: Vec<NodeId>,
}

impl LineContainer {
    /// Creates an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every node still present, including ones pending destruction.
    pub fn lines(&self) -> &[LineNode] {
        &self.nodes
    }

    /// Returns the nodes that are not scheduled for destruction.
    pub fn live_lines(&self) -> impl Iterator<Item = &LineNode> {
        self.nodes
            .iter()
            .filter(|n| !self.pending_destroy.contains(&n.id))
    }

    /// Returns the number of nodes still present.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the container holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Finds a live node by name.
    pub fn find(&self, name: &str) -> Option<&LineNode> {
        self.live_lines().find(|n| n.name == name)
    }

    /// Returns the number of nodes waiting for the end of the frame.
    pub fn pending_destroy_count(&self) -> usize {
        self.pending_destroy.len()
    }

    /// Ends the frame, removing every node scheduled for deferred destruction.
    pub fn end_frame(&mut self) {
        if self.pending_destroy.is_empty() {
            return;
        }
        let pending = std::mem::take(&mut self.pending_destroy);
        self.nodes.retain(|n| !pending.contains(&n.id));
        log::trace!("end of frame: destroyed {} deferred line(s)", pending.len());
    }
}

impl GridContainer for LineContainer {
    fn child_ids(&self) -> Vec<NodeId> {
        self.live_lines().map(|n| n.id).collect()
    }

    fn spawn_line(&mut self, segment: &LineSegment, style: &LineStyle) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.push(LineNode {
            id,
            name: segment.name.clone(),
            start: segment.start,
            end: segment.end,
            style: style.clone(),
            use_world_space: false,
            editable: false,
        });
        id
    }

    fn destroy_child(&mut self, node: NodeId, timing: DestroyTiming) {
        match timing {
            DestroyTiming::Immediate => {
                self.nodes.retain(|n| n.id != node);
                self.pending_destroy.retain(|id| *id != node);
            }
            DestroyTiming::Deferred => {
                if !self.pending_destroy.contains(&node) && self.nodes.iter().any(|n| n.id == node)
                {
                    self.pending_destroy.push(node);
                }
            }
        }
    }
}
