//! Phase scheduling by dependency depth.
//!
//! Every node gets a *layer*: 0 when it has no dependencies, otherwise one
//! more than the deepest of its dependencies. Layers are clamped onto the
//! configured phases (`phase = min(layer, phase_count - 1)`), so
//!
//! - every node lands in exactly one phase, injected nodes included, and
//! - no node is scheduled in an earlier phase than any of its dependencies.

use std::collections::HashMap;

use log::debug;

use crate::{
    error::{Result, SynthesisError},
    models::{Node, Phase},
};

/// Default phase names, in delivery order.
pub const DEFAULT_PHASE_NAMES: [&str; 3] = ["Foundation", "Core Development", "Testing & Deployment"];

#[derive(Clone, Copy, PartialEq, Eq)]
enum Visit {
    InProgress,
    Done(usize),
}

/// Assigns nodes to an ordered, fixed set of phases.
#[derive(Debug, Clone)]
pub struct PhaseScheduler {
    phase_names: Vec<String>,
}

impl PhaseScheduler {
    /// Creates a scheduler with one phase per name.
    ///
    /// # Errors
    ///
    /// Returns `SynthesisError::InvalidInput` if `phase_names` is empty.
    pub fn new(phase_names: Vec<String>) -> Result<Self> {
        if phase_names.is_empty() {
            return Err(SynthesisError::invalid_input("phase_names")
                .with_reason("at least one phase is required"));
        }
        Ok(Self { phase_names })
    }

    pub fn phase_count(&self) -> usize {
        self.phase_names.len()
    }

    /// Partition `nodes` into phases. Nodes keep their relative order inside
    /// each phase, and phases with no nodes are still emitted.
    ///
    /// # Errors
    ///
    /// Returns `SynthesisError::Integrity` if a dependency id does not resolve
    /// or the dependency graph contains a cycle.
    pub fn schedule(&self, nodes: &[Node]) -> Result<Vec<Phase>> {
        let layers = compute_layers(nodes)?;
        let last = self.phase_count() - 1;

        let mut phases: Vec<Phase> = self
            .phase_names
            .iter()
            .enumerate()
            .map(|(index, name)| Phase::new(index, name.as_str()))
            .collect();

        for (node, layer) in nodes.iter().zip(layers) {
            let index = layer.min(last);
            debug!("node '{}' layer {} -> phase {}", node.id, layer, index);
            phases[index].nodes.push(node.clone());
        }

        Ok(phases)
    }
}

impl Default for PhaseScheduler {
    fn default() -> Self {
        Self {
            phase_names: DEFAULT_PHASE_NAMES.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

/// Dependency depth of every node, aligned with `nodes`.
///
/// # Errors
///
/// Returns `SynthesisError::Integrity` if a dependency id does not resolve
/// or the dependency graph contains a cycle.
pub fn compute_layers(nodes: &[Node]) -> Result<Vec<usize>> {
    let positions: HashMap<&str, usize> = nodes
        .iter()
        .enumerate()
        .map(|(position, node)| (node.id.as_str(), position))
        .collect();

    let mut visits: Vec<Option<Visit>> = vec![None; nodes.len()];
    (0..nodes.len())
        .map(|position| layer_of(position, nodes, &positions, &mut visits))
        .collect()
}

fn layer_of(
    position: usize,
    nodes: &[Node],
    positions: &HashMap<&str, usize>,
    visits: &mut [Option<Visit>],
) -> Result<usize> {
    match visits[position] {
        Some(Visit::Done(layer)) => return Ok(layer),
        Some(Visit::InProgress) => {
            let id = &nodes[position].id;
            return Err(SynthesisError::integrity(id, id).with_reason("dependency cycle detected"));
        }
        None => {}
    }

    visits[position] = Some(Visit::InProgress);

    let node = &nodes[position];
    let mut layer = 0;
    for dep in &node.dependencies {
        let Some(&dep_position) = positions.get(dep.as_str()) else {
            return Err(SynthesisError::integrity(&node.id, dep)
                .with_reason("dependency does not resolve within the generated node set"));
        };
        layer = layer.max(layer_of(dep_position, nodes, positions, visits)? + 1);
    }

    visits[position] = Some(Visit::Done(layer));
    Ok(layer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        catalog::{self, ids},
        models::{FeatureTag, FeatureTags},
    };

    fn node(id: &str, deps: &[&str]) -> Node {
        let mut node = catalog::baseline_nodes().remove(0);
        node.id = id.to_string();
        node.dependencies = deps.iter().map(|d| (*d).to_string()).collect();
        node
    }

    fn phase_ids(phase: &Phase) -> Vec<&str> {
        phase.node_ids().collect()
    }

    #[test]
    fn test_baseline_layers() {
        let nodes = catalog::baseline_nodes();
        let layers = compute_layers(&nodes).unwrap();
        assert_eq!(layers, vec![0, 1, 1, 2, 2, 3, 3, 4, 5]);
    }

    #[test]
    fn test_baseline_schedule() {
        let phases = PhaseScheduler::default()
            .schedule(&catalog::baseline_nodes())
            .unwrap();

        assert_eq!(phases.len(), 3);
        assert_eq!(phases[0].name, "Foundation");
        assert_eq!(phase_ids(&phases[0]), vec![ids::SYSTEM_ARCHITECTURE]);
        assert_eq!(
            phase_ids(&phases[1]),
            vec![ids::DATABASE_SCHEMA, ids::UI_DESIGN]
        );
        assert_eq!(phases[2].nodes.len(), 6);
    }

    #[test]
    fn test_injected_nodes_are_scheduled() {
        let tags = FeatureTags::default()
            .with(FeatureTag::Ai)
            .with(FeatureTag::Mobile);
        let nodes = catalog::build_nodes(&tags).unwrap();
        let phases = PhaseScheduler::default().schedule(&nodes).unwrap();

        let total: usize = phases.iter().map(|p| p.nodes.len()).sum();
        assert_eq!(total, 11);
        assert!(phases[2].contains(ids::AI_INTEGRATION));
        assert!(phases[2].contains(ids::MOBILE_DEVELOPMENT));
    }

    #[test]
    fn test_more_phases_than_layers_leaves_empty_phases() {
        let names = (1..=8).map(|i| format!("Phase {i}")).collect();
        let scheduler = PhaseScheduler::new(names).unwrap();
        let phases = scheduler.schedule(&catalog::baseline_nodes()).unwrap();

        assert_eq!(phases.len(), 8);
        assert_eq!(phase_ids(&phases[5]), vec![ids::DEPLOYMENT_PIPELINE]);
        assert!(phases[6].nodes.is_empty());
        assert!(phases[7].nodes.is_empty());
    }

    #[test]
    fn test_single_phase_holds_everything() {
        let scheduler = PhaseScheduler::new(vec!["All".to_string()]).unwrap();
        let phases = scheduler.schedule(&catalog::baseline_nodes()).unwrap();
        assert_eq!(phases.len(), 1);
        assert_eq!(phases[0].nodes.len(), 9);
    }

    #[test]
    fn test_empty_phase_names_rejected() {
        let err = PhaseScheduler::new(Vec::new()).unwrap_err();
        assert!(err.is_user_error());
    }

    #[test]
    fn test_depth_uses_deepest_dependency() {
        let nodes = vec![
            node("a", &[]),
            node("b", &["a"]),
            node("c", &["b"]),
            node("d", &["a", "c"]),
        ];
        assert_eq!(compute_layers(&nodes).unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_dependency_declared_after_dependent() {
        let nodes = vec![node("late", &["early"]), node("early", &[])];
        assert_eq!(compute_layers(&nodes).unwrap(), vec![1, 0]);
    }

    #[test]
    fn test_unresolved_dependency_is_integrity_error() {
        let nodes = vec![node("a", &[]), node("b", &["ghost"])];
        let err = PhaseScheduler::default().schedule(&nodes).unwrap_err();
        match err {
            SynthesisError::Integrity {
                node, dependency, ..
            } => {
                assert_eq!(node, "b");
                assert_eq!(dependency, "ghost");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_cycle_is_integrity_error() {
        let nodes = vec![node("a", &["b"]), node("b", &["a"])];
        let err = compute_layers(&nodes).unwrap_err();
        assert!(err.to_string().contains("cycle"));
    }
}
