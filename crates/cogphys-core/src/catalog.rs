//! Example networks with estimated (S, D, M) values.
//!
//! The built-in catalog covers biological, artificial, social,
//! infrastructure and ecosystem networks, each tagged with whether it is
//! expected to be cognitive. A replacement catalog can be parsed from TOML:
//!
//! ```toml
//! [[network]]
//! name = "Human Brain"
//! description = "Human cerebral cortex"
//! category = "biological"
//! S = 0.85
//! D = 0.70
//! M = 0.60
//! nodes = 86000000000
//! expected_cognitive = true
//! ```

use serde::{Deserialize, Serialize};

use crate::synthesis::PredictParams;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Biological,
    Artificial,
    Social,
    Infrastructure,
    Ecosystem,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Self::Biological,
        Self::Artificial,
        Self::Social,
        Self::Infrastructure,
        Self::Ecosystem,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Biological => "biological",
            Self::Artificial => "artificial",
            Self::Social => "social",
            Self::Infrastructure => "infrastructure",
            Self::Ecosystem => "ecosystem",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

/// A real-world network with estimated metrics and an expected verdict.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExampleNetwork {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    #[serde(rename = "S")]
    pub s: f64,
    #[serde(rename = "D")]
    pub d: f64,
    #[serde(rename = "M")]
    pub m: f64,
    #[serde(default)]
    pub nodes: u64,
    pub expected_cognitive: bool,
    #[serde(default)]
    pub notes: String,
}

impl ExampleNetwork {
    pub fn capacity(&self) -> f64 {
        self.s * self.d * self.m
    }

    pub fn params(&self) -> PredictParams<'static> {
        PredictParams::new(self.s, self.d, self.m)
    }
}

/// An ordered collection of example networks.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(rename = "network", default)]
    pub networks: Vec<ExampleNetwork>,
}

impl Catalog {
    /// The 19 built-in example networks.
    pub fn builtin() -> Self {
        Self {
            networks: builtin_networks(),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn all(&self) -> &[ExampleNetwork] {
        &self.networks
    }

    pub fn by_category(&self, category: Category) -> Vec<&ExampleNetwork> {
        self.networks
            .iter()
            .filter(|n| n.category == category)
            .collect()
    }

    pub fn find(&self, name: &str) -> Option<&ExampleNetwork> {
        self.networks
            .iter()
            .find(|n| n.name.eq_ignore_ascii_case(name))
    }

    pub fn cognitive(&self) -> Vec<&ExampleNetwork> {
        self.networks.iter().filter(|n| n.expected_cognitive).collect()
    }

    pub fn non_cognitive(&self) -> Vec<&ExampleNetwork> {
        self.networks
            .iter()
            .filter(|n| !n.expected_cognitive)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }
}

#[allow(clippy::too_many_arguments)]
fn entry(
    name: &str,
    description: &str,
    category: Category,
    s: f64,
    d: f64,
    m: f64,
    nodes: u64,
    expected_cognitive: bool,
    notes: &str,
) -> ExampleNetwork {
    ExampleNetwork {
        name: name.to_string(),
        description: description.to_string(),
        category,
        s,
        d,
        m,
        nodes,
        expected_cognitive,
        notes: notes.to_string(),
    }
}

fn builtin_networks() -> Vec<ExampleNetwork> {
    use Category::*;

    vec![
        // Biological
        entry(
            "C. elegans Connectome",
            "Complete neural wiring of the nematode C. elegans",
            Biological,
            0.70,
            0.40,
            0.30,
            302,
            true,
            "First complete connectome mapped. Shows clear hub-and-spoke topology.",
        ),
        entry(
            "Drosophila Brain",
            "Fruit fly brain connectome",
            Biological,
            0.75,
            0.50,
            0.40,
            100_000,
            true,
            "Complex sensory processing and learning capabilities.",
        ),
        entry(
            "Mouse Brain",
            "Mammalian brain with cortical organization",
            Biological,
            0.80,
            0.60,
            0.50,
            70_000_000,
            true,
            "Clear hierarchical structure with specialized regions.",
        ),
        entry(
            "Human Brain",
            "Human cerebral cortex",
            Biological,
            0.85,
            0.70,
            0.60,
            86_000_000_000,
            true,
            "Most complex known cognitive system. Grammar-structural class.",
        ),
        // Artificial
        entry(
            "BERT-base",
            "Bidirectional transformer (110M parameters)",
            Artificial,
            0.30,
            0.80,
            0.10,
            110_000_000,
            true,
            "Dense-dynamical class. Compensates low S with high D.",
        ),
        entry(
            "GPT-2",
            "Autoregressive transformer (1.5B parameters)",
            Artificial,
            0.35,
            0.85,
            0.15,
            1_500_000_000,
            true,
            "Larger context enables more memory-like behavior.",
        ),
        entry(
            "GPT-3",
            "Large language model (175B parameters)",
            Artificial,
            0.40,
            0.90,
            0.20,
            175_000_000_000,
            true,
            "Dense-dynamical class. Emergent capabilities at scale.",
        ),
        entry(
            "GPT-4 (estimated)",
            "Multimodal large language model",
            Artificial,
            0.45,
            0.92,
            0.25,
            1_000_000_000_000,
            true,
            "Estimated values. Shows increasing S with scale.",
        ),
        entry(
            "Simple MLP",
            "3-layer multilayer perceptron",
            Artificial,
            0.20,
            0.30,
            0.01,
            1_000,
            false,
            "Too simple for cognitive emergence.",
        ),
        // Social
        entry(
            "Twitter/X Network",
            "Social media follower graph",
            Social,
            0.90,
            0.20,
            0.05,
            300_000_000,
            true,
            "Fast-propagation class. Viral dynamics, low memory.",
        ),
        entry(
            "Facebook Network",
            "Social connections graph",
            Social,
            0.85,
            0.25,
            0.08,
            3_000_000_000,
            true,
            "More persistent connections than Twitter.",
        ),
        entry(
            "Corporate Organization",
            "Fortune 500 company structure",
            Social,
            0.80,
            0.30,
            0.15,
            10_000,
            true,
            "Slow-memory class. Institutional knowledge persists.",
        ),
        entry(
            "Small Team",
            "10-person startup team",
            Social,
            0.50,
            0.60,
            0.40,
            10,
            true,
            "High density compensates for small size.",
        ),
        entry(
            "Government Bureaucracy",
            "Large government organization",
            Social,
            0.75,
            0.25,
            0.20,
            100_000,
            true,
            "Slow-memory class. Very persistent institutional memory.",
        ),
        // Infrastructure
        entry(
            "Internet AS Topology",
            "Autonomous systems routing graph",
            Infrastructure,
            0.90,
            0.30,
            0.02,
            70_000,
            true,
            "Fast-propagation class. Highly resilient.",
        ),
        entry(
            "US Power Grid",
            "Electrical transmission network",
            Infrastructure,
            0.60,
            0.20,
            0.01,
            5_000,
            false,
            "Below threshold. No cognitive properties expected.",
        ),
        entry(
            "Global Supply Chain",
            "International trade network",
            Infrastructure,
            0.80,
            0.15,
            0.03,
            50_000,
            true,
            "Borderline. Emergent coordination behaviors.",
        ),
        // Ecosystem
        entry(
            "Rainforest Ecosystem",
            "Species interaction network",
            Ecosystem,
            0.85,
            0.30,
            0.40,
            10_000_000,
            true,
            "Slow-memory class. Collective intelligence of ecosystem.",
        ),
        entry(
            "Coral Reef Ecosystem",
            "Marine ecosystem network",
            Ecosystem,
            0.80,
            0.35,
            0.35,
            1_000_000,
            true,
            "Complex symbiotic relationships.",
        ),
    ]
}
