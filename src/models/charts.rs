//! Hardcoded analytics datasets
//!
//! The numbers below are pitch-deck figures, not measurements. They feed the
//! canvas charts in the analytics section and the stat rows underneath.

use serde::Serialize;

use super::colors::Tone;

/// One slice of the accuracy comparison donut
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSlice {
    pub label: &'static str,
    pub value: f64,
    pub tone: Tone,
}

/// One bar of the time savings chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarEntry {
    pub label: &'static str,
    pub hours: f64,
}

/// Requirement accuracy comparison across approaches
pub fn accuracy_slices() -> Vec<ChartSlice> {
    vec![
        ChartSlice {
            label: "Traditional",
            value: 62.0,
            tone: Tone::Danger,
        },
        ChartSlice {
            label: "LLM-Based",
            value: 78.0,
            tone: Tone::Info,
        },
        ChartSlice {
            label: "CRF (Ours)",
            value: 95.0,
            tone: Tone::Success,
        },
    ]
}

/// Hours saved per project phase
pub fn time_savings() -> Vec<BarEntry> {
    vec![
        BarEntry {
            label: "Collection",
            hours: 12.0,
        },
        BarEntry {
            label: "Refinement",
            hours: 18.0,
        },
        BarEntry {
            label: "Validation",
            hours: 8.0,
        },
        BarEntry {
            label: "Documentation",
            hours: 10.0,
        },
    ]
}

/// Total hours saved per project, summed over all phases
pub fn total_hours_saved() -> f64 {
    time_savings().iter().map(|entry| entry.hours).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy_has_three_series() {
        let slices = accuracy_slices();
        assert_eq!(slices.len(), 3);
        let values: Vec<f64> = slices.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![62.0, 78.0, 95.0]);
    }

    #[test]
    fn test_crf_leads_accuracy() {
        let slices = accuracy_slices();
        let max = slices.iter().map(|s| s.value).fold(0.0_f64, f64::max);
        let crf = slices.iter().find(|s| s.label == "CRF (Ours)");
        assert_eq!(crf.map(|s| s.value), Some(max));
    }

    #[test]
    fn test_time_savings_has_four_phases() {
        assert_eq!(time_savings().len(), 4);
    }

    #[test]
    fn test_total_hours_saved_is_48() {
        let total = total_hours_saved();
        assert!((total - 48.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_all_values_positive() {
        assert!(accuracy_slices().iter().all(|s| s.value > 0.0));
        assert!(time_savings().iter().all(|b| b.hours > 0.0));
    }
}
