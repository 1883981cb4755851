use serde::{Deserialize, Serialize};

use crate::constants::DENSITY_WINDOW;

/// A single registered cause → effect interaction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CausalEvent {
    pub src: String,
    pub dst: String,
    pub strength: f64,
}

/// Append-only causal event log with a rolling density measure.
///
/// `current_density` is derived: it is recomputed on every registration
/// from the trailing window of at most 100 events and is never set directly.
#[derive(Clone, Debug, Default)]
pub struct CausalityEngine {
    events: Vec<CausalEvent>,
    current_density: f64,
}

impl CausalityEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event and refresh the rolling density.
    pub fn register_event(&mut self, src: impl Into<String>, dst: impl Into<String>, strength: f64) {
        self.events.push(CausalEvent {
            src: src.into(),
            dst: dst.into(),
            strength,
        });
        self.update_density();
    }

    fn update_density(&mut self) {
        if self.events.is_empty() {
            self.current_density = 0.0;
            return;
        }

        let start = self.events.len().saturating_sub(DENSITY_WINDOW);
        let recent = &self.events[start..];
        let total: f64 = recent.iter().map(|e| e.strength).sum();
        self.current_density = (total / recent.len() as f64).min(1.0);
    }

    /// Mean strength over the most recent window, capped at 1.
    pub fn current_density(&self) -> f64 {
        self.current_density
    }

    /// Greedy walk from `start` following the most recently registered
    /// outgoing event of each visited node, for at most `max_depth` hops.
    ///
    /// Cycles are not prevented. A node without outgoing events ends the walk,
    /// so an unknown `start` yields `[start]`.
    pub fn get_causal_chain(&self, start: &str, max_depth: usize) -> Vec<String> {
        let mut chain = vec![start.to_string()];
        let mut current = start.to_string();

        for _ in 0..max_depth {
            let Some(next) = self
                .events
                .iter()
                .rev()
                .find(|e| e.src == current)
                .map(|e| e.dst.clone())
            else {
                break;
            };
            chain.push(next.clone());
            current = next;
        }

        chain
    }

    pub fn events(&self) -> &[CausalEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
