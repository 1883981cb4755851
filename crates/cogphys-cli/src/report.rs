use std::collections::BTreeMap;

use cogphys_core::{CognitiveState, ExampleNetwork, PredictionSummary, UniversalityClass};

const WIDE: usize = 70;
const NARROW: usize = 50;

pub fn rule(ch: char, width: usize) -> String {
    std::iter::repeat_n(ch, width).collect()
}

pub fn verdict(state: &CognitiveState) -> &'static str {
    if state.is_cognitive() {
        "COGNITIVE"
    } else {
        "NON-COGNITIVE"
    }
}

/// Full multi-line report for one prediction.
pub fn prediction(state: &CognitiveState) -> String {
    let mut out = String::new();
    let bar = rule('=', NARROW);
    out.push_str(&format!("{bar}\n  {}\n{bar}\n", verdict(state)));
    out.push_str("  Parameters:\n");
    out.push_str(&format!("    S (Structure):  {:.4}\n", state.s));
    out.push_str(&format!("    D (Density):    {:.4}\n", state.d));
    out.push_str(&format!("    M (Memory):     {:.4}\n", state.m));
    out.push('\n');
    out.push_str(&format!("  Capacity (SxDxM): {:.6}\n", state.capacity));
    out.push_str(&format!("  Threshold:        {:.6}\n", state.threshold));
    out.push_str(&format!("  Class:            {}\n", state.universality_class));
    out.push('\n');
    out.push_str("  Active Laws:\n");
    if state.active_laws.is_empty() {
        out.push_str("    (no laws active)\n");
    }
    for law in &state.active_laws {
        out.push_str(&format!("    + {law}\n"));
    }
    out.push_str(&bar);
    out
}

/// One compact line: verdict, name, metrics, capacity and agreement mark.
pub fn network_line(network: &ExampleNetwork, state: &CognitiveState) -> String {
    let agrees = state.is_cognitive() == network.expected_cognitive;
    format!(
        "  {} {:<30} S={:.2} D={:.2} M={:.2} C={:.4} [{}]",
        if state.is_cognitive() { "+" } else { "-" },
        network.name,
        network.s,
        network.d,
        network.m,
        state.capacity,
        if agrees { "ok" } else { "MISS" }
    )
}

pub fn section(title: &str) -> String {
    let bar = rule('-', WIDE);
    format!("{bar}\n  {}\n{bar}", title.to_uppercase())
}

pub fn accuracy(correct: usize, total: usize) -> String {
    if total == 0 {
        return "  Accuracy: n/a (no networks)".to_string();
    }
    format!(
        "  Accuracy: {correct}/{total} ({:.0}%)",
        correct as f64 / total as f64 * 100.0
    )
}

pub fn summary(summary: &PredictionSummary, correct: usize, total: usize) -> String {
    let bar = rule('=', WIDE);
    let mut out = format!("{bar}\n  SUMMARY\n{bar}\n");
    out.push_str(&format!("  Total Networks Tested:   {}\n", summary.total));
    out.push_str(&format!("  Predicted Cognitive:     {}\n", summary.cognitive));
    out.push_str(&format!("  Predicted Non-Cognitive: {}\n", summary.non_cognitive));
    if total > 0 {
        out.push_str(&format!(
            "  Overall Accuracy:        {correct}/{total} ({:.0}%)",
            correct as f64 / total as f64 * 100.0
        ));
    }
    out
}

pub fn class_counts(counts: &BTreeMap<&'static str, usize>) -> String {
    let mut out = section("Universality Classes");
    for (class, count) in counts {
        out.push_str(&format!("\n  {class:<25} {count} networks"));
    }
    out
}

pub fn core_equation() -> String {
    let bar = rule('=', WIDE);
    let mut out = format!("{bar}\n  THE CORE EQUATION\n{bar}\n\n");
    out.push_str("  Phi(N) = 1  iff  S(N) x D(N) x M(N) >= C_critical(class)\n\n");
    out.push_str("  Where:\n");
    out.push_str("    S = Structural Differentiation (topology heterogeneity)\n");
    out.push_str("    D = Causal Density (interaction intensity)\n");
    out.push_str("    M = Memory Persistence (pattern retention)\n\n");
    out.push_str("  Class Thresholds:\n");
    for class in UniversalityClass::ALL {
        out.push_str(&format!(
            "    {:<20} C = {:.3}\n",
            format!("{}:", class.label()),
            class.threshold()
        ));
    }
    out.push_str(&bar);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cogphys_core::{MetaLawSynthesis, PredictParams};

    #[test]
    fn test_prediction_report_lists_laws() {
        let state = MetaLawSynthesis::new().predict(PredictParams::new(0.85, 0.7, 0.6));
        let text = prediction(&state);
        assert!(text.contains("COGNITIVE"));
        assert!(text.contains("slow_memory"));
        assert!(text.contains("+ Causal Time"));
    }

    #[test]
    fn test_prediction_report_without_laws() {
        let state = MetaLawSynthesis::new().predict(PredictParams::new(0.1, 0.1, 0.01));
        let text = prediction(&state);
        assert!(text.contains("NON-COGNITIVE"));
        assert!(text.contains("(no laws active)"));
    }

    #[test]
    fn test_accuracy_handles_empty() {
        assert_eq!(accuracy(0, 0), "  Accuracy: n/a (no networks)");
        assert_eq!(accuracy(3, 4), "  Accuracy: 3/4 (75%)");
    }

    #[test]
    fn test_core_equation_has_all_thresholds() {
        let text = core_equation();
        assert!(text.contains("Grammar-Structural:  C = 0.003"));
        assert!(text.contains("Dense-Dynamical:     C = 0.010"));
    }
}
