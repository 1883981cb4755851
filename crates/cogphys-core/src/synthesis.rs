//! Meta-law synthesis: the Structural-Dynamical Equivalence Law.
//!
//! ```text
//! Φ(N) = 1  iff  S(N) × D(N) × M(N) ≥ C_critical(class)
//! ```
//!
//! S is structural differentiation, D causal density and M memory
//! persistence. The critical capacity depends on which of four universality
//! classes the (S, D, M) triple falls into. Every prediction is appended to
//! the engine's history.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::causality::CausalityEngine;
use crate::constants::{DEFAULT_D, DEFAULT_M, DEFAULT_S};
use crate::memory::MemoryModule;
use crate::network::{CognitiveNetwork, compute_structural_differentiation};

/// The four universality classes of cognitive dynamics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UniversalityClass {
    /// High S, moderate D (biological brains).
    GrammarStructural,
    /// Strong hubs, little memory (social media, internet).
    FastPropagation,
    /// High M, slow dynamics (institutions, ecosystems).
    SlowMemory,
    /// Low S, high D (transformers).
    DenseDynamical,
}

impl UniversalityClass {
    pub const ALL: [UniversalityClass; 4] = [
        Self::GrammarStructural,
        Self::FastPropagation,
        Self::SlowMemory,
        Self::DenseDynamical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GrammarStructural => "grammar_structural",
            Self::FastPropagation => "fast_propagation",
            Self::SlowMemory => "slow_memory",
            Self::DenseDynamical => "dense_dynamical",
        }
    }

    /// Human-readable label, e.g. "Grammar-Structural".
    pub fn label(&self) -> &'static str {
        match self {
            Self::GrammarStructural => "Grammar-Structural",
            Self::FastPropagation => "Fast-Propagation",
            Self::SlowMemory => "Slow-Memory",
            Self::DenseDynamical => "Dense-Dynamical",
        }
    }

    /// Critical capacity C_critical for this class.
    pub fn threshold(&self) -> f64 {
        match self {
            Self::GrammarStructural => 0.003,
            Self::FastPropagation => 0.005,
            Self::SlowMemory => 0.007,
            Self::DenseDynamical => 0.010,
        }
    }
}

impl std::fmt::Display for UniversalityClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named cognitive law with an activation condition over (S, D, M).
#[derive(Clone, Copy, Debug)]
pub struct Law {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    condition: fn(f64, f64, f64) -> bool,
}

impl Law {
    pub fn holds(&self, s: f64, d: f64, m: f64) -> bool {
        (self.condition)(s, d, m)
    }
}

fn structural_morality(s: f64, d: f64, _m: f64) -> bool {
    s > 0.3 && d > 0.2
}

fn observation_independence(s: f64, d: f64, m: f64) -> bool {
    s * d * m > 0.001
}

fn causal_time(_s: f64, d: f64, _m: f64) -> bool {
    d > 0.15
}

fn memory_persistence(_s: f64, _d: f64, m: f64) -> bool {
    m > 0.02
}

fn structural_differentiation(s: f64, _d: f64, _m: f64) -> bool {
    s > 0.4
}

/// Law registry, evaluated in this order.
pub const LAWS: [Law; 5] = [
    Law {
        id: "structural_morality",
        name: "Structural Morality",
        description: "Morality emerges from network topology, not external rules",
        condition: structural_morality,
    },
    Law {
        id: "observation_independence",
        name: "Observation Independence",
        description: "Emergence is observer-independent",
        condition: observation_independence,
    },
    Law {
        id: "causal_time",
        name: "Causal Time",
        description: "Time is causal density, not clock ticks",
        condition: causal_time,
    },
    Law {
        id: "memory_persistence",
        name: "Memory Persistence Law",
        description: "Memory enables pattern formation and cognition",
        condition: memory_persistence,
    },
    Law {
        id: "structural_differentiation",
        name: "Structural Differentiation",
        description: "Hubs, bridges, and clusters enable efficient cognition",
        condition: structural_differentiation,
    },
];

/// Snapshot produced by one prediction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CognitiveState {
    #[serde(rename = "S")]
    pub s: f64,
    #[serde(rename = "D")]
    pub d: f64,
    #[serde(rename = "M")]
    pub m: f64,
    pub capacity: f64,
    /// 1 = cognitive, 0 = not.
    pub phi: u8,
    pub universality_class: UniversalityClass,
    pub threshold: f64,
    pub active_laws: Vec<String>,
}

impl CognitiveState {
    pub fn is_cognitive(&self) -> bool {
        self.phi == 1
    }
}

/// Inputs to [`MetaLawSynthesis::predict`].
///
/// For each metric the short field (`s`, `d`, `m`) wins over its long alias
/// (`structural_differentiation`, `causal_density`, `memory_persistence`),
/// which wins over the default (0.5, 0.3, 0.05). When `network` is set, S is
/// computed from its topology and both S fields are ignored.
#[derive(Clone, Copy, Debug, Default)]
pub struct PredictParams<'a> {
    pub s: Option<f64>,
    pub d: Option<f64>,
    pub m: Option<f64>,
    pub structural_differentiation: Option<f64>,
    pub causal_density: Option<f64>,
    pub memory_persistence: Option<f64>,
    pub network: Option<&'a CognitiveNetwork>,
}

impl<'a> PredictParams<'a> {
    pub fn new(s: f64, d: f64, m: f64) -> Self {
        Self {
            s: Some(s),
            d: Some(d),
            m: Some(m),
            ..Self::default()
        }
    }

    pub fn with_network(mut self, network: &'a CognitiveNetwork) -> Self {
        self.network = Some(network);
        self
    }

    /// Resolve the effective (S, D, M) triple.
    pub fn resolve(&self) -> (f64, f64, f64) {
        let s = match self.network {
            Some(network) => compute_structural_differentiation(network),
            None => self
                .s
                .or(self.structural_differentiation)
                .unwrap_or(DEFAULT_S),
        };
        let d = self.d.or(self.causal_density).unwrap_or(DEFAULT_D);
        let m = self.m.or(self.memory_persistence).unwrap_or(DEFAULT_M);
        (s, d, m)
    }
}

/// Aggregate counts over all predictions made so far.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictionSummary {
    pub total: usize,
    pub cognitive: usize,
    pub non_cognitive: usize,
    /// Absent until at least one prediction exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cognitive_rate: Option<f64>,
}

/// Prediction engine with an append-only history.
#[derive(Clone, Debug, Default)]
pub struct MetaLawSynthesis {
    predictions: Vec<CognitiveState>,
}

impl MetaLawSynthesis {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ordered classification; the first matching rule wins and anything
    /// unmatched falls back to grammar-structural.
    pub fn classify_universality_class(&self, s: f64, d: f64, m: f64) -> UniversalityClass {
        if s > 0.5 && d < 0.5 {
            UniversalityClass::GrammarStructural
        } else if s > 0.6 && m < 0.05 {
            UniversalityClass::FastPropagation
        } else if m > 0.08 {
            UniversalityClass::SlowMemory
        } else if s < 0.3 && d > 0.5 {
            UniversalityClass::DenseDynamical
        } else {
            UniversalityClass::GrammarStructural
        }
    }

    /// Cognitive capacity S × D × M.
    pub fn compute_capacity(&self, s: f64, d: f64, m: f64) -> f64 {
        s * d * m
    }

    /// Names of the laws whose condition holds, in registry order.
    pub fn get_active_laws(&self, s: f64, d: f64, m: f64) -> Vec<String> {
        LAWS.iter()
            .filter(|law| law.holds(s, d, m))
            .map(|law| law.name.to_string())
            .collect()
    }

    /// Classify, score and record one (S, D, M) triple.
    pub fn predict(&mut self, params: PredictParams<'_>) -> CognitiveState {
        let (s, d, m) = params.resolve();

        let universality_class = self.classify_universality_class(s, d, m);
        let threshold = universality_class.threshold();
        let capacity = self.compute_capacity(s, d, m);
        let phi = u8::from(capacity >= threshold);

        let state = CognitiveState {
            s,
            d,
            m,
            capacity,
            phi,
            universality_class,
            threshold,
            active_laws: self.get_active_laws(s, d, m),
        };

        tracing::debug!(
            s,
            d,
            m,
            capacity,
            phi,
            class = universality_class.as_str(),
            "prediction"
        );

        self.predictions.push(state.clone());
        state
    }

    /// Predict from live components: S from topology, D from the causal
    /// engine's rolling density, M from the memory's configured persistence.
    pub fn predict_from_network(
        &mut self,
        network: &CognitiveNetwork,
        memory: &MemoryModule,
        causality: &CausalityEngine,
    ) -> CognitiveState {
        let s = compute_structural_differentiation(network);
        let d = causality.current_density();
        let m = memory.persistence();
        self.predict(PredictParams::new(s, d, m))
    }

    pub fn batch_predict(&mut self, params: &[PredictParams<'_>]) -> Vec<CognitiveState> {
        params.iter().map(|p| self.predict(*p)).collect()
    }

    pub fn predictions(&self) -> &[CognitiveState] {
        &self.predictions
    }

    pub fn get_summary(&self) -> PredictionSummary {
        let total = self.predictions.len();
        let cognitive = self.predictions.iter().filter(|p| p.is_cognitive()).count();
        PredictionSummary {
            total,
            cognitive,
            non_cognitive: total - cognitive,
            cognitive_rate: (total > 0).then(|| cognitive as f64 / total as f64),
        }
    }

    /// Prediction count per universality class, keyed by class name.
    pub fn class_counts(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for p in &self.predictions {
            *counts.entry(p.universality_class.as_str()).or_default() += 1;
        }
        counts
    }

    /// Serialize the prediction history as a pretty-printed JSON array.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.predictions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn predict(s: f64, d: f64, m: f64) -> CognitiveState {
        MetaLawSynthesis::new().predict(PredictParams::new(s, d, m))
    }

    #[test]
    fn test_classification_precedence() {
        let syn = MetaLawSynthesis::new();
        // satisfies both rule 1 and rule 2 → rule 1
        assert_eq!(
            syn.classify_universality_class(0.8, 0.4, 0.03),
            UniversalityClass::GrammarStructural
        );
        assert_eq!(
            syn.classify_universality_class(0.2, 0.8, 0.03),
            UniversalityClass::DenseDynamical
        );
        assert_eq!(
            syn.classify_universality_class(0.9, 0.6, 0.02),
            UniversalityClass::FastPropagation
        );
        // M rule beats dense-dynamical
        assert_eq!(
            syn.classify_universality_class(0.2, 0.8, 0.1),
            UniversalityClass::SlowMemory
        );
    }

    #[test]
    fn test_classification_fallback() {
        let syn = MetaLawSynthesis::new();
        assert_eq!(
            syn.classify_universality_class(0.4, 0.6, 0.05),
            UniversalityClass::GrammarStructural
        );
    }

    #[test]
    fn test_thresholds() {
        assert_eq!(UniversalityClass::GrammarStructural.threshold(), 0.003);
        assert_eq!(UniversalityClass::FastPropagation.threshold(), 0.005);
        assert_eq!(UniversalityClass::SlowMemory.threshold(), 0.007);
        assert_eq!(UniversalityClass::DenseDynamical.threshold(), 0.010);
    }

    #[test]
    fn test_capacity_and_threshold_boundary() {
        let above = predict(0.5, 0.3, 0.025);
        assert_abs_diff_eq!(above.capacity, 0.00375, epsilon = 1e-12);
        assert_eq!(above.universality_class, UniversalityClass::GrammarStructural);
        assert_eq!(above.phi, 1);

        let below = predict(0.5, 0.1, 0.01);
        assert_abs_diff_eq!(below.capacity, 0.0005, epsilon = 1e-12);
        assert_eq!(below.phi, 0);
    }

    #[test]
    fn test_active_laws_in_registry_order() {
        let state = predict(0.6, 0.5, 0.1);
        assert_eq!(
            state.active_laws,
            vec![
                "Structural Morality",
                "Observation Independence",
                "Causal Time",
                "Memory Persistence Law",
                "Structural Differentiation",
            ]
        );
        assert!(predict(0.1, 0.1, 0.01).active_laws.is_empty());
    }

    #[test]
    fn test_params_precedence() {
        let params = PredictParams {
            s: Some(0.9),
            structural_differentiation: Some(0.1),
            causal_density: Some(0.7),
            ..PredictParams::default()
        };
        assert_eq!(params.resolve(), (0.9, 0.7, DEFAULT_M));

        let params = PredictParams {
            m: Some(0.2),
            memory_persistence: Some(0.4),
            ..PredictParams::default()
        };
        assert_eq!(params.resolve(), (DEFAULT_S, DEFAULT_D, 0.2));
        let params = PredictParams {
            memory_persistence: Some(0.4),
            ..PredictParams::default()
        };
        assert_eq!(params.resolve(), (DEFAULT_S, DEFAULT_D, 0.4));
        assert_eq!(
            PredictParams::default().resolve(),
            (DEFAULT_S, DEFAULT_D, DEFAULT_M)
        );
    }

    #[test]
    fn test_network_overrides_s() {
        let mut net = CognitiveNetwork::new();
        for i in 0..10 {
            net.add_node(format!("node_{i}"), 0.0);
        }
        for i in 1..10 {
            net.connect("node_0", format!("node_{i}"));
        }
        let mut syn = MetaLawSynthesis::new();
        let state = syn.predict(PredictParams::new(0.0, 0.3, 0.05).with_network(&net));
        assert_abs_diff_eq!(state.s, compute_structural_differentiation(&net), epsilon = 1e-12);
        assert!(state.s > 0.3);
    }

    #[test]
    fn test_predict_from_network_uses_configured_persistence() {
        let mut memory = MemoryModule::new(0.4);
        memory.store("trace", 1.0);
        memory.decay();
        let mut causality = CausalityEngine::new();
        causality.register_event("a", "b", 0.6);

        let mut syn = MetaLawSynthesis::new();
        let state = syn.predict_from_network(&CognitiveNetwork::new(), &memory, &causality);
        assert_eq!(state.s, 0.0);
        assert_eq!(state.d, 0.6);
        assert_eq!(state.m, 0.4);
        assert_eq!(state.phi, 0);
    }

    #[test]
    fn test_summary_empty_has_no_rate() {
        let summary = MetaLawSynthesis::new().get_summary();
        assert_eq!(summary.total, 0);
        assert_eq!(summary.cognitive, 0);
        assert_eq!(summary.non_cognitive, 0);
        assert!(summary.cognitive_rate.is_none());

        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("cognitive_rate").is_none());
    }

    #[test]
    fn test_summary_and_history() {
        let mut syn = MetaLawSynthesis::new();
        let states = syn.batch_predict(&[
            PredictParams::new(0.85, 0.7, 0.6),
            PredictParams::new(0.2, 0.3, 0.01),
            PredictParams::new(0.4, 0.9, 0.2),
            PredictParams::new(0.1, 0.1, 0.01),
        ]);
        assert_eq!(states.len(), 4);
        assert_eq!(syn.predictions().len(), 4);

        let summary = syn.get_summary();
        assert_eq!(summary.total, 4);
        assert_eq!(summary.cognitive, 2);
        assert_eq!(summary.non_cognitive, 2);
        assert_eq!(summary.cognitive_rate, Some(0.5));
    }

    #[test]
    fn test_class_counts_sorted_by_name() {
        let mut syn = MetaLawSynthesis::new();
        syn.predict(PredictParams::new(0.85, 0.7, 0.6));
        syn.predict(PredictParams::new(0.2, 0.8, 0.03));
        syn.predict(PredictParams::new(0.8, 0.3, 0.1));
        let counts: Vec<_> = syn.class_counts().into_iter().collect();
        assert_eq!(
            counts,
            vec![("dense_dynamical", 1), ("grammar_structural", 1), ("slow_memory", 1)]
        );
    }

    #[test]
    fn test_state_json_shape() {
        let state = predict(0.85, 0.7, 0.6);
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["S"], 0.85);
        assert_eq!(json["phi"], 1);
        assert_eq!(json["universality_class"], "slow_memory");
        assert!(json["active_laws"].as_array().unwrap().len() == 5);
    }
}
