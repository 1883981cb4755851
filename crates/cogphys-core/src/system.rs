use rand::Rng;

use crate::causality::CausalityEngine;
use crate::emergence::EmergenceDetector;
use crate::memory::MemoryModule;
use crate::network::CognitiveNetwork;

/// All four components of a cognitive system, owned together.
#[derive(Clone, Debug)]
pub struct CognitiveSystem {
    pub network: CognitiveNetwork,
    pub memory: MemoryModule,
    pub causality: CausalityEngine,
    pub detector: EmergenceDetector,
}

/// Build a random network of `num_nodes` proto-agents plus fresh memory,
/// causality and detection components.
///
/// Nodes are named `node_{i}` with activation uniform in [-0.1, 0.1). Every
/// ordered pair of distinct nodes is connected with probability
/// `connectivity`, with weight and causal strength uniform in [0.3, 0.7).
pub fn create_minimal_cognitive_system(
    num_nodes: usize,
    connectivity: f64,
    memory_persistence: f64,
    rng: &mut impl Rng,
) -> CognitiveSystem {
    let mut network = CognitiveNetwork::new();

    let ids: Vec<String> = (0..num_nodes).map(|i| format!("node_{i}")).collect();
    for id in &ids {
        network.add_node(id.as_str(), rng.random_range(-0.1..0.1));
    }

    for src in &ids {
        for dst in &ids {
            if src != dst && rng.random::<f64>() < connectivity {
                let weight = rng.random_range(0.3..0.7);
                let causal_strength = rng.random_range(0.3..0.7);
                network.add_edge(src.as_str(), dst.as_str(), weight, causal_strength);
            }
        }
    }

    tracing::debug!(
        nodes = network.node_count(),
        edges = network.edge_count(),
        "created minimal cognitive system"
    );

    CognitiveSystem {
        network,
        memory: MemoryModule::new(memory_persistence),
        causality: CausalityEngine::new(),
        detector: EmergenceDetector::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_CONNECTIVITY, DEFAULT_NUM_NODES, DEFAULT_PERSISTENCE};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(42)
    }

    #[test]
    fn test_node_count_and_persistence() {
        let sys = create_minimal_cognitive_system(
            DEFAULT_NUM_NODES,
            DEFAULT_CONNECTIVITY,
            DEFAULT_PERSISTENCE,
            &mut rng(),
        );
        assert_eq!(sys.network.node_count(), 20);
        assert_eq!(sys.memory.persistence(), 0.05);
        assert!(sys.memory.is_empty());
        assert!(sys.causality.is_empty());
        assert!(sys.detector.history().is_empty());
    }

    #[test]
    fn test_activation_and_weight_ranges() {
        let sys = create_minimal_cognitive_system(30, 0.5, 0.05, &mut rng());
        for (_, node) in sys.network.nodes() {
            assert!((-0.1..0.1).contains(&node.activation));
        }
        assert!(sys.network.edge_count() > 0);
        for (src, dst, edge) in sys.network.edges() {
            assert_ne!(src, dst, "no self-loops");
            assert!((0.3..0.7).contains(&edge.weight));
            assert!((0.3..0.7).contains(&edge.causal_strength));
        }
    }

    #[test]
    fn test_connectivity_extremes() {
        let empty = create_minimal_cognitive_system(10, 0.0, 0.05, &mut rng());
        assert_eq!(empty.network.edge_count(), 0);

        let full = create_minimal_cognitive_system(10, 1.0, 0.05, &mut rng());
        assert_eq!(full.network.edge_count(), 90);
    }

    #[test]
    fn test_seeded_construction_is_reproducible() {
        let a = create_minimal_cognitive_system(15, 0.2, 0.05, &mut rng());
        let b = create_minimal_cognitive_system(15, 0.2, 0.05, &mut rng());
        assert_eq!(a.network.edge_count(), b.network.edge_count());
        let edges_a: Vec<_> = a.network.edges().map(|(s, d, e)| (s, d, e.weight)).collect();
        let edges_b: Vec<_> = b.network.edges().map(|(s, d, e)| (s, d, e.weight)).collect();
        assert_eq!(edges_a, edges_b);
    }
}
