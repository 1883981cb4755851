use std::collections::BTreeMap;

use crate::constants::{
    ACTIVATION_INPUT_GAIN, ACTIVATION_RETENTION, DEFAULT_CAUSAL_STRENGTH, DEFAULT_EDGE_WEIGHT,
    HUB_FRACTION,
};

/// A proto-agent in the network.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Node {
    pub activation: f64,
}

/// A directed, weighted connection between two node ids.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub weight: f64,
    pub causal_strength: f64,
}

impl Default for Edge {
    fn default() -> Self {
        Self {
            weight: DEFAULT_EDGE_WEIGHT,
            causal_strength: DEFAULT_CAUSAL_STRENGTH,
        }
    }
}

/// Graph of proto-agents with weighted directed edges.
///
/// Edges are keyed by `(src, dst)` and may reference ids that were never
/// added as nodes; such edges are ignored by propagation and degree counting.
/// Both maps are ordered so iteration (and therefore seeded construction)
/// is deterministic.
#[derive(Clone, Debug, Default)]
pub struct CognitiveNetwork {
    nodes: BTreeMap<String, Node>,
    edges: BTreeMap<(String, String), Edge>,
}

impl CognitiveNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, overwriting (and resetting) any existing one.
    pub fn add_node(&mut self, id: impl Into<String>, activation: f64) {
        self.nodes.insert(id.into(), Node { activation });
    }

    /// Insert or overwrite the directed edge `src -> dst`. Endpoints are not validated.
    pub fn add_edge(
        &mut self,
        src: impl Into<String>,
        dst: impl Into<String>,
        weight: f64,
        causal_strength: f64,
    ) {
        self.edges.insert(
            (src.into(), dst.into()),
            Edge {
                weight,
                causal_strength,
            },
        );
    }

    /// Add `src -> dst` with the default weight and causal strength (0.5 / 0.5).
    pub fn connect(&mut self, src: impl Into<String>, dst: impl Into<String>) {
        self.edges.insert((src.into(), dst.into()), Edge::default());
    }

    /// Run `steps` rounds of activation propagation.
    ///
    /// Each node moves to `0.9 * current + 0.1 * tanh(incoming)` where
    /// `incoming` sums `source_activation * weight` over edges into the node
    /// whose source exists. All nodes update from the same pre-step snapshot.
    pub fn propagate(&mut self, steps: usize) {
        for _ in 0..steps {
            let next: Vec<f64> = self
                .nodes
                .iter()
                .map(|(id, node)| {
                    let incoming = self.incoming_signal(id);
                    ACTIVATION_RETENTION * node.activation
                        + ACTIVATION_INPUT_GAIN * incoming.tanh()
                })
                .collect();

            for (node, activation) in self.nodes.values_mut().zip(next) {
                node.activation = activation;
            }
        }
    }

    fn incoming_signal(&self, id: &str) -> f64 {
        self.edges
            .iter()
            .filter(|((_, dst), _)| dst == id)
            .filter_map(|((src, _), edge)| {
                self.nodes
                    .get(src)
                    .map(|source| source.activation * edge.weight)
            })
            .sum()
    }

    /// Incident-edge counts for every node that has at least one edge.
    ///
    /// An edge counts once per matching endpoint, so a self-loop adds two.
    /// Nodes without edges are omitted rather than reported as zero.
    pub fn get_degree_distribution(&self) -> Vec<usize> {
        self.nodes
            .keys()
            .filter_map(|id| {
                let degree: usize = self
                    .edges
                    .keys()
                    .map(|(src, dst)| usize::from(src == id) + usize::from(dst == id))
                    .sum();
                (degree > 0).then_some(degree)
            })
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Current activation of a node, if it exists.
    pub fn activation(&self, id: &str) -> Option<f64> {
        self.nodes.get(id).map(|n| n.activation)
    }

    pub fn edge(&self, src: &str, dst: &str) -> Option<&Edge> {
        self.edges.get(&(src.to_string(), dst.to_string()))
    }

    /// Nodes in id order.
    pub fn nodes(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.nodes.iter().map(|(id, node)| (id.as_str(), node))
    }

    /// Edges in `(src, dst)` order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, &Edge)> {
        self.edges
            .iter()
            .map(|((src, dst), edge)| (src.as_str(), dst.as_str(), edge))
    }
}

/// Structural differentiation S of a network, in [0, 1].
///
/// Averages the coefficient of variation of the (non-zero) degree
/// distribution with a hub score `max_degree / (0.3 * scored_nodes)`,
/// both capped at 1. Networks without edges score 0.
pub fn compute_structural_differentiation(network: &CognitiveNetwork) -> f64 {
    let degrees = network.get_degree_distribution();
    if degrees.is_empty() {
        return 0.0;
    }

    let count = degrees.len() as f64;
    let avg = degrees.iter().sum::<usize>() as f64 / count;
    if avg == 0.0 {
        return 0.0;
    }

    let variance = degrees
        .iter()
        .map(|&d| (d as f64 - avg).powi(2))
        .sum::<f64>()
        / count;
    let cv = variance.sqrt() / avg;

    let max_degree = degrees.iter().copied().max().unwrap_or(0) as f64;
    let hub_score = (max_degree / (count * HUB_FRACTION)).min(1.0);

    (cv * 0.5 + hub_score * 0.5).min(1.0)
}
