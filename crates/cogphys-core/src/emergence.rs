//! Rule-based detection of emergent phenomena over network, memory and causality.
//!
//! Four independent checks run on every call, in a fixed order:
//! structural hubs, causal coherence, memory persistence and proto-language.
//! Each check that fires contributes one [`Emergence`] with a strength score.

use serde::{Deserialize, Serialize};

use crate::causality::CausalityEngine;
use crate::constants::{
    COHERENCE_DENSITY, HUB_DEGREE_RATIO, MEMORY_STRENGTH_SCALE, PERSISTENT_TRACE_COUNT,
    PROTO_LANGUAGE_STRENGTH_SCALE,
};
use crate::memory::MemoryModule;
use crate::network::CognitiveNetwork;

/// Kind of emergent phenomenon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmergenceKind {
    StructuralHub,
    CausalCoherence,
    MemoryPersistence,
    ProtoLanguage,
}

impl EmergenceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StructuralHub => "structural_hub",
            Self::CausalCoherence => "causal_coherence",
            Self::MemoryPersistence => "memory_persistence",
            Self::ProtoLanguage => "proto_language",
        }
    }
}

/// One detected phenomenon.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Emergence {
    #[serde(rename = "type")]
    pub kind: EmergenceKind,
    pub strength: f64,
}

/// Outcome of a single `detect` call, kept in the detector's history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectionRecord {
    pub emergences: Vec<Emergence>,
    pub count: usize,
}

/// Stateless rule checks plus an append-only detection history.
#[derive(Clone, Debug, Default)]
pub struct EmergenceDetector {
    history: Vec<DetectionRecord>,
}

impl EmergenceDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run all checks and record the result, even when nothing fired.
    pub fn detect(
        &mut self,
        network: &CognitiveNetwork,
        memory: &MemoryModule,
        causality: &CausalityEngine,
    ) -> Vec<Emergence> {
        let mut emergences = Vec::new();

        // Structural: one node far above the mean degree
        let degrees = network.get_degree_distribution();
        if let Some(&max_degree) = degrees.iter().max() {
            let max_degree = max_degree as f64;
            let scored = degrees.len() as f64;
            let avg_degree = degrees.iter().sum::<usize>() as f64 / scored;
            if max_degree > avg_degree * HUB_DEGREE_RATIO {
                emergences.push(Emergence {
                    kind: EmergenceKind::StructuralHub,
                    strength: max_degree / scored,
                });
            }
        }

        let density = causality.current_density();
        if density > COHERENCE_DENSITY {
            emergences.push(Emergence {
                kind: EmergenceKind::CausalCoherence,
                strength: density,
            });
        }

        if memory.len() > PERSISTENT_TRACE_COUNT {
            emergences.push(Emergence {
                kind: EmergenceKind::MemoryPersistence,
                strength: memory.len() as f64 / MEMORY_STRENGTH_SCALE,
            });
        }

        let symbols = memory.proto_language().len();
        if symbols > 0 {
            emergences.push(Emergence {
                kind: EmergenceKind::ProtoLanguage,
                strength: symbols as f64 / PROTO_LANGUAGE_STRENGTH_SCALE,
            });
        }

        tracing::debug!(
            count = emergences.len(),
            density,
            traces = memory.len(),
            "emergence detection"
        );

        self.history.push(DetectionRecord {
            emergences: emergences.clone(),
            count: emergences.len(),
        });

        emergences
    }

    pub fn history(&self) -> &[DetectionRecord] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn kinds(emergences: &[Emergence]) -> Vec<EmergenceKind> {
        emergences.iter().map(|e| e.kind).collect()
    }

    fn star(n: usize) -> CognitiveNetwork {
        let mut net = CognitiveNetwork::new();
        for i in 0..n {
            net.add_node(format!("node_{i}"), 0.0);
        }
        for i in 1..n {
            net.connect("node_0", format!("node_{i}"));
        }
        net
    }

    #[test]
    fn test_nothing_detected_still_recorded() {
        let mut detector = EmergenceDetector::new();
        let found = detector.detect(
            &CognitiveNetwork::new(),
            &MemoryModule::new(0.05),
            &CausalityEngine::new(),
        );
        assert!(found.is_empty());
        assert_eq!(detector.history().len(), 1);
        assert_eq!(detector.history()[0].count, 0);
    }

    #[test]
    fn test_structural_hub() {
        let mut detector = EmergenceDetector::new();
        // degrees [4, 1, 1, 1, 1]: avg 1.6, max 4 > 3.2
        let found = detector.detect(&star(5), &MemoryModule::new(0.05), &CausalityEngine::new());
        assert_eq!(kinds(&found), vec![EmergenceKind::StructuralHub]);
        assert_abs_diff_eq!(found[0].strength, 4.0 / 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_no_hub_in_pair() {
        let mut net = CognitiveNetwork::new();
        net.add_node("a", 0.0);
        net.add_node("b", 0.0);
        net.connect("a", "b");
        let mut detector = EmergenceDetector::new();
        let found = detector.detect(&net, &MemoryModule::new(0.05), &CausalityEngine::new());
        assert!(found.is_empty());
    }

    #[test]
    fn test_causal_coherence_threshold_is_strict() {
        let mut detector = EmergenceDetector::new();
        let mut causality = CausalityEngine::new();
        causality.register_event("a", "b", 0.2);
        let net = CognitiveNetwork::new();
        let mem = MemoryModule::new(0.05);
        assert!(detector.detect(&net, &mem, &causality).is_empty());

        causality.register_event("a", "b", 0.6);
        let found = detector.detect(&net, &mem, &causality);
        assert_eq!(kinds(&found), vec![EmergenceKind::CausalCoherence]);
        assert_abs_diff_eq!(found[0].strength, 0.4, epsilon = 1e-12);
    }

    #[test]
    fn test_memory_persistence_needs_more_than_five() {
        let mut mem = MemoryModule::new(0.05);
        for i in 0..5 {
            mem.store(format!("k{i}"), 1.0);
        }
        let mut detector = EmergenceDetector::new();
        let net = CognitiveNetwork::new();
        let causality = CausalityEngine::new();
        assert!(detector.detect(&net, &mem, &causality).is_empty());

        mem.store("k5", 1.0);
        let found = detector.detect(&net, &mem, &causality);
        assert_eq!(kinds(&found), vec![EmergenceKind::MemoryPersistence]);
        assert_abs_diff_eq!(found[0].strength, 0.6, epsilon = 1e-12);
    }

    #[test]
    fn test_all_checks_in_order() {
        let mut mem = MemoryModule::new(0.05);
        for i in 0..6 {
            mem.store(format!("k{i}"), 1.0);
        }
        mem.form_proto_language("ba");
        mem.form_proto_language("ka");
        let mut causality = CausalityEngine::new();
        causality.register_event("node_0", "node_1", 0.9);

        let mut detector = EmergenceDetector::new();
        let found = detector.detect(&star(6), &mem, &causality);
        assert_eq!(
            kinds(&found),
            vec![
                EmergenceKind::StructuralHub,
                EmergenceKind::CausalCoherence,
                EmergenceKind::MemoryPersistence,
                EmergenceKind::ProtoLanguage,
            ]
        );
        assert_abs_diff_eq!(found[3].strength, 0.4, epsilon = 1e-12);
        assert_eq!(detector.history()[0].count, 4);
    }

    #[test]
    fn test_emergence_serializes_type_field() {
        let e = Emergence {
            kind: EmergenceKind::ProtoLanguage,
            strength: 0.2,
        };
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["type"], "proto_language");
        assert_eq!(EmergenceKind::ProtoLanguage.as_str(), "proto_language");
    }
}
