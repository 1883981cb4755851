//! Cognitive physics engine.
//!
//! Scores networks with three heuristics, structural differentiation (S),
//! causal density (D) and memory persistence (M), and predicts cognitive
//! emergence with the Structural-Dynamical Equivalence Law:
//! `Φ = 1 iff S × D × M ≥ C_critical(class)`.
//!
//! Zero I/O: pure computation with no opinions about presentation or storage.

pub mod catalog;
pub mod causality;
pub mod constants;
pub mod emergence;
pub mod memory;
pub mod network;
pub mod synthesis;
pub mod system;

pub use catalog::{Catalog, Category, ExampleNetwork};
pub use causality::{CausalEvent, CausalityEngine};
pub use constants::{DEFAULT_CHAIN_DEPTH, DENSITY_WINDOW, MEMORY_FLOOR};
pub use emergence::{DetectionRecord, Emergence, EmergenceDetector, EmergenceKind};
pub use memory::MemoryModule;
pub use network::{CognitiveNetwork, Edge, Node, compute_structural_differentiation};
pub use synthesis::{
    CognitiveState, LAWS, Law, MetaLawSynthesis, PredictParams, PredictionSummary,
    UniversalityClass,
};
pub use system::{CognitiveSystem, create_minimal_cognitive_system};
