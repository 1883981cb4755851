//! End-to-end run of a minimal cognitive system.
//!
//! Each step propagates activation once, registers a causal event for every
//! edge leaving a positively activated node, refreshes memory traces for
//! active nodes and then decays memory. After the last step the longest
//! causal chain becomes a proto-language symbol, emergence is detected and
//! a prediction is made from the live components.

use anyhow::{Context, Result};
use clap::Args;
use cogphys_core::constants::{
    DEFAULT_CHAIN_DEPTH, DEFAULT_CONNECTIVITY, DEFAULT_NUM_NODES, DEFAULT_PERSISTENCE,
};
use cogphys_core::{
    CognitiveState, CognitiveSystem, Emergence, MetaLawSynthesis, create_minimal_cognitive_system,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::Serialize;

use crate::report;

#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Number of nodes
    #[arg(long, default_value_t = DEFAULT_NUM_NODES)]
    pub nodes: usize,

    /// Probability of an edge between any ordered pair of nodes
    #[arg(long, default_value_t = DEFAULT_CONNECTIVITY)]
    pub connectivity: f64,

    /// Memory persistence (0-1)
    #[arg(long, default_value_t = DEFAULT_PERSISTENCE)]
    pub persistence: f64,

    /// Propagation steps
    #[arg(long, default_value_t = 10)]
    pub steps: usize,

    /// RNG seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the run as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct SimulationReport {
    nodes: usize,
    edges: usize,
    events: usize,
    memory_traces: usize,
    proto_language: Vec<String>,
    emergences: Vec<Emergence>,
    prediction: CognitiveState,
}

pub fn run(args: &SimulateArgs) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let mut system =
        create_minimal_cognitive_system(args.nodes, args.connectivity, args.persistence, &mut rng);
    tracing::info!(
        "simulating {} nodes, {} edges for {} steps",
        system.network.node_count(),
        system.network.edge_count(),
        args.steps
    );

    for _ in 0..args.steps {
        step(&mut system);
    }

    if let Some(chain) = longest_chain(&system) {
        system.memory.form_proto_language(chain.join("->"));
    }

    let emergences = system
        .detector
        .detect(&system.network, &system.memory, &system.causality);

    let mut synthesis = MetaLawSynthesis::new();
    let prediction =
        synthesis.predict_from_network(&system.network, &system.memory, &system.causality);

    let outcome = SimulationReport {
        nodes: system.network.node_count(),
        edges: system.network.edge_count(),
        events: system.causality.len(),
        memory_traces: system.memory.len(),
        proto_language: system.memory.proto_language().to_vec(),
        emergences,
        prediction,
    };

    if args.json {
        let out =
            serde_json::to_string_pretty(&outcome).context("failed to serialize simulation")?;
        println!("{out}");
    } else {
        print_report(&outcome, system.causality.current_density());
    }
    Ok(())
}

fn step(system: &mut CognitiveSystem) {
    system.network.propagate(1);

    let fired: Vec<(String, String, f64)> = system
        .network
        .edges()
        .filter(|(src, _, _)| system.network.activation(src).is_some_and(|a| a > 0.0))
        .map(|(src, dst, edge)| (src.to_string(), dst.to_string(), edge.causal_strength))
        .collect();
    for (src, dst, strength) in fired {
        system.causality.register_event(src, dst, strength);
    }

    for (id, node) in system.network.nodes() {
        if node.activation > 0.0 {
            system.memory.store(id, 1.0);
        }
    }
    system.memory.decay();
}

/// Longest causal chain over all start nodes; ties keep the first in id order.
fn longest_chain(system: &CognitiveSystem) -> Option<Vec<String>> {
    system
        .network
        .nodes()
        .map(|(id, _)| system.causality.get_causal_chain(id, DEFAULT_CHAIN_DEPTH))
        .filter(|chain| chain.len() > 1)
        .fold(None, |best: Option<Vec<String>>, chain| match best {
            Some(b) if b.len() >= chain.len() => Some(b),
            _ => Some(chain),
        })
}

fn print_report(outcome: &SimulationReport, density: f64) {
    println!("nodes:          {}", outcome.nodes);
    println!("edges:          {}", outcome.edges);
    println!("events:         {}", outcome.events);
    println!("density:        {density:.4}");
    println!("memory traces:  {}", outcome.memory_traces);
    for symbol in &outcome.proto_language {
        println!("proto-language: {symbol}");
    }

    if outcome.emergences.is_empty() {
        println!("emergence:      (none)");
    }
    for e in &outcome.emergences {
        println!("emergence:      {} ({:.3})", e.kind.as_str(), e.strength);
    }

    println!("{}", report::prediction(&outcome.prediction));
}
