/// Fraction of a node's activation retained per propagation step.
pub const ACTIVATION_RETENTION: f64 = 0.9;

/// Weight of the squashed incoming signal per propagation step.
pub const ACTIVATION_INPUT_GAIN: f64 = 0.1;

/// Default edge weight and causal strength.
pub const DEFAULT_EDGE_WEIGHT: f64 = 0.5;
pub const DEFAULT_CAUSAL_STRENGTH: f64 = 0.5;

/// Per-decay multiplier is `1 - (1 - persistence) * DECAY_SCALE`.
pub const DECAY_SCALE: f64 = 0.1;

/// Memory traces weaker than this are purged on decay.
pub const MEMORY_FLOOR: f64 = 0.01;

/// Number of most recent causal events that contribute to density.
pub const DENSITY_WINDOW: usize = 100;

/// Default hop limit for causal chain tracing.
pub const DEFAULT_CHAIN_DEPTH: usize = 5;

/// Hub score denominator: fraction of scored nodes a hub must touch to saturate.
pub const HUB_FRACTION: f64 = 0.3;

// Emergence cut-offs

/// A node is a structural hub when its degree exceeds this multiple of the mean.
pub const HUB_DEGREE_RATIO: f64 = 2.0;

/// Causal density above which causal coherence is reported.
pub const COHERENCE_DENSITY: f64 = 0.2;

/// Memory persistence is reported once more than this many traces are held.
pub const PERSISTENT_TRACE_COUNT: usize = 5;

/// Normalizers for memory and proto-language emergence strengths.
pub const MEMORY_STRENGTH_SCALE: f64 = 10.0;
pub const PROTO_LANGUAGE_STRENGTH_SCALE: f64 = 5.0;

// Prediction defaults when a metric is not supplied

pub const DEFAULT_S: f64 = 0.5;
pub const DEFAULT_D: f64 = 0.3;
pub const DEFAULT_M: f64 = 0.05;

// Minimal system factory defaults

pub const DEFAULT_NUM_NODES: usize = 20;
pub const DEFAULT_CONNECTIVITY: f64 = 0.1;
pub const DEFAULT_PERSISTENCE: f64 = 0.05;
