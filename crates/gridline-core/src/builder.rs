//! Grid builder: replaces a container's children with freshly generated lines.

use std::fmt;

use crate::container::{DestroyPolicy, GridContainer, HostMode, HostModePolicy, LineStyle};
use crate::error::Result;
use crate::grid::{family_lines, LineFamily};
use crate::params::GridParameters;

/// Builds grid lines into a [`GridContainer`].
///
/// Every rebuild destroys all children of the container and recreates them;
/// there is no incremental diffing. Validation happens before anything is
/// touched, so a failed rebuild leaves the previous lines in place.
pub struct GridBuilder {
    mode: HostMode,
    policy: Box<dyn DestroyPolicy>,
}

impl fmt::Debug for GridBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridBuilder")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl Default for GridBuilder {
    fn default() -> Self {
        Self::new(HostMode::default())
    }
}

impl GridBuilder {
    /// Creates a builder using [`HostModePolicy`].
    pub fn new(mode: HostMode) -> Self {
        Self::with_policy(mode, HostModePolicy)
    }

    /// Creates a builder with a custom destruction policy.
    pub fn with_policy(mode: HostMode, policy: impl DestroyPolicy + 'static) -> Self {
        Self {
            mode,
            policy: Box::new(policy),
        }
    }

    /// Returns the host mode used for destruction.
    pub fn mode(&self) -> HostMode {
        self.mode
    }

    /// Sets the host mode, e.g. when the host enters or leaves play.
    pub fn set_mode(&mut self, mode: HostMode) {
        self.mode = mode;
    }

    /// Destroys every child of `container`.
    pub fn destroy_all(&self, container: &mut dyn GridContainer) {
        let timing = self.policy.timing(self.mode);
        for node in container.child_ids() {
            container.destroy_child(node, timing);
        }
    }

    /// Rebuilds the grid described by `params` into `container`.
    ///
    /// Returns the number of lines created.
    pub fn rebuild(&self, params: &GridParameters, container: &mut dyn GridContainer) -> Result<usize> {
        if let Err(err) = params.validate() {
            log::warn!("grid rebuild skipped: {err}");
            return Err(err);
        }

        let corner = params.corner();
        self.destroy_all(container);

        let style = LineStyle {
            material: params.line_material.clone(),
            width: params.line_width,
        };
        let mut count = 0;
        for family in LineFamily::ALL {
            if params.is_family_disabled(family) {
                continue;
            }
            for segment in family_lines(family, corner, params.size, params.spacing) {
                container.spawn_line(&segment, &style);
                count += 1;
            }
        }

        log::debug!(
            "rebuilt grid {} with {count} lines (corner {corner}, {:?})",
            params.size,
            self.mode
        );
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::{DeferredPolicy, DestroyTiming, LineContainer, NodeId};
    use crate::error::GridError;
    use crate::grid::{generate_lines, LineSegment};
    use crate::params::MaterialRef;
    use glam::{IVec3, Vec3};

    fn names(container: &LineContainer) -> Vec<String> {
        container.live_lines().map(|n| n.name.clone()).collect()
    }

    #[test]
    fn test_rebuild_creates_all_lines() {
        let params = GridParameters::new(IVec3::new(2, 1, 0), Vec3::ONE).with_pivot(Vec3::ZERO);
        let mut container = LineContainer::new();
        let count = GridBuilder::default().rebuild(&params, &mut container).unwrap();
        assert_eq!(count, 11);
        assert_eq!(container.len(), 11);

        let expected: Vec<String> = generate_lines(&params)
            .unwrap()
            .into_iter()
            .map(|l| l.name)
            .collect();
        assert_eq!(names(&container), expected);
    }

    #[test]
    fn test_rebuild_applies_style() {
        let material = MaterialRef::new("grid");
        let params = GridParameters::new(IVec3::ONE, Vec3::ONE)
            .with_material(Some(material.clone()))
            .with_line_width(0.1);
        let mut container = LineContainer::new();
        GridBuilder::default().rebuild(&params, &mut container).unwrap();
        for node in container.lines() {
            assert_eq!(node.style.material.as_ref(), Some(&material));
            assert_eq!(node.style.width, 0.1);
            assert!(!node.use_world_space);
        }
    }

    #[test]
    fn test_rebuild_replaces_previous_lines() {
        let builder = GridBuilder::default();
        let mut container = LineContainer::new();
        builder
            .rebuild(&GridParameters::new(IVec3::new(3, 3, 3), Vec3::ONE), &mut container)
            .unwrap();
        assert_eq!(container.len(), 48);

        builder
            .rebuild(&GridParameters::new(IVec3::ONE, Vec3::ONE), &mut container)
            .unwrap();
        assert_eq!(container.len(), 12);
    }

    #[test]
    fn test_invalid_rebuild_leaves_previous_grid() {
        let builder = GridBuilder::default();
        let mut container = LineContainer::new();
        builder
            .rebuild(&GridParameters::new(IVec3::ONE, Vec3::ONE), &mut container)
            .unwrap();
        let before = container.lines().to_vec();

        let bad_size = GridParameters::new(IVec3::new(-1, 0, 0), Vec3::ONE);
        assert!(matches!(
            builder.rebuild(&bad_size, &mut container),
            Err(GridError::InvalidSize { .. })
        ));
        let bad_width = GridParameters::new(IVec3::ONE, Vec3::ONE).with_line_width(0.0);
        assert!(matches!(
            builder.rebuild(&bad_width, &mut container),
            Err(GridError::InvalidLineWidth(_))
        ));

        assert_eq!(container.lines(), before.as_slice());
    }

    #[test]
    fn test_playing_mode_defers_destruction() {
        let builder = GridBuilder::new(HostMode::Playing);
        let mut container = LineContainer::new();
        let params = GridParameters::new(IVec3::ONE, Vec3::ONE);
        builder.rebuild(&params, &mut container).unwrap();
        builder.rebuild(&params, &mut container).unwrap();

        assert_eq!(container.len(), 24);
        assert_eq!(container.pending_destroy_count(), 12);
        assert_eq!(container.child_ids().len(), 12);

        container.end_frame();
        assert_eq!(container.len(), 12);
    }

    #[test]
    fn test_custom_policy_and_mode_switch() {
        let mut builder = GridBuilder::with_policy(HostMode::Authoring, DeferredPolicy);
        let mut container = LineContainer::new();
        let params = GridParameters::new(IVec3::ZERO, Vec3::ONE);
        builder.rebuild(&params, &mut container).unwrap();
        builder.destroy_all(&mut container);
        assert_eq!(container.pending_destroy_count(), 3);

        builder = GridBuilder::new(HostMode::Playing);
        builder.set_mode(HostMode::Authoring);
        assert_eq!(builder.mode(), HostMode::Authoring);
        builder.rebuild(&params, &mut container).unwrap();
        assert_eq!(container.pending_destroy_count(), 3);
        container.end_frame();
        assert_eq!(container.len(), 3);
    }

    /// Records the calls the builder makes, in order.
    #[derive(Default)]
    struct RecordingContainer {
        children: Vec<NodeId>,
        calls: Vec<String>,
    }

    impl GridContainer for RecordingContainer {
        fn child_ids(&self) -> Vec<NodeId> {
            self.children.clone()
        }

        fn spawn_line(&mut self, segment: &LineSegment, _style: &LineStyle) -> NodeId {
            let id = NodeId(self.calls.len() as u64 + 100);
            self.calls.push(format!("spawn {}", segment.name));
            self.children.push(id);
            id
        }

        fn destroy_child(&mut self, node: NodeId, timing: DestroyTiming) {
            self.calls.push(format!("destroy {} {timing:?}", node.0));
            self.children.retain(|id| *id != node);
        }
    }

    #[test]
    fn test_destroys_before_spawning() {
        let mut container = RecordingContainer {
            children: vec![NodeId(1), NodeId(2)],
            calls: Vec::new(),
        };
        let params = GridParameters::new(IVec3::ZERO, Vec3::ONE)
            .with_family_disabled(LineFamily::YParallel, true);
        GridBuilder::default().rebuild(&params, &mut container).unwrap();
        assert_eq!(
            container.calls,
            vec![
                "destroy 1 Immediate",
                "destroy 2 Immediate",
                "spawn Line_y0_z0",
                "spawn Line_x0_y0",
            ]
        );
    }
}
