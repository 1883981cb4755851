use std::collections::HashMap;

use crate::constants::{DECAY_SCALE, MEMORY_FLOOR};

/// Memory traces with configurable persistence and explicit decay.
///
/// `persistence` (0-1) is fixed at construction. Each `decay()` scales every
/// trace by `1 - (1 - persistence) * 0.1` and forgets traces that fall below
/// 0.01. Repeated patterns can be promoted into an ordered proto-language.
#[derive(Clone, Debug)]
pub struct MemoryModule {
    persistence: f64,
    memories: HashMap<String, f64>,
    proto_language: Vec<String>,
}

impl MemoryModule {
    pub fn new(persistence: f64) -> Self {
        Self {
            persistence,
            memories: HashMap::new(),
            proto_language: Vec::new(),
        }
    }

    pub fn persistence(&self) -> f64 {
        self.persistence
    }

    /// Store a trace, replacing any previous strength for the key.
    pub fn store(&mut self, key: impl Into<String>, strength: f64) {
        self.memories.insert(key.into(), strength);
    }

    /// Strength of a trace, 0.0 when absent.
    pub fn recall(&self, key: &str) -> f64 {
        self.memories.get(key).copied().unwrap_or(0.0)
    }

    /// Apply one round of decay and purge traces below the floor.
    pub fn decay(&mut self) {
        let factor = 1.0 - (1.0 - self.persistence) * DECAY_SCALE;
        let before = self.memories.len();

        self.memories.retain(|_, strength| {
            *strength *= factor;
            *strength >= MEMORY_FLOOR
        });

        let purged = before - self.memories.len();
        if purged > 0 {
            tracing::trace!("decay purged {purged} memory traces");
        }
    }

    /// Record a proto-language symbol. Duplicates are ignored; order is kept.
    pub fn form_proto_language(&mut self, pattern: impl Into<String>) {
        let pattern = pattern.into();
        if !self.proto_language.contains(&pattern) {
            self.proto_language.push(pattern);
        }
    }

    pub fn proto_language(&self) -> &[String] {
        &self.proto_language
    }

    /// Number of stored traces.
    pub fn len(&self) -> usize {
        self.memories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memories.is_empty()
    }
}

impl Default for MemoryModule {
    fn default() -> Self {
        Self::new(crate::constants::DEFAULT_PERSISTENCE)
    }
}
