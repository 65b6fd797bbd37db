use crate::core::input::NormalizedInput;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum RiskTier {
    Low,
    Medium,
    High,
    NotApplicable,
}

impl RiskTier {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low risk",
            Self::Medium => "Medium",
            Self::High => "High risk",
            Self::NotApplicable => "Not calculated",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Overall,
    Voluntary,
    Involuntary,
}

impl MetricKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Overall => "Overall turnover rate",
            Self::Voluntary => "Voluntary turnover",
            Self::Involuntary => "Involuntary turnover",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Overall => {
                "Formula: (total leavers / average headcount) x 100. \
                 Shows overall workforce turnover."
            }
            Self::Voluntary => {
                "Counts only voluntary exits (resignations and similar). \
                 A signal for satisfaction and motivation."
            }
            Self::Involuntary => {
                "Covers terminations, performance-related exits and other \
                 employer-initiated departures."
            }
        }
    }

    fn leavers(self, input: &NormalizedInput) -> f64 {
        match self {
            Self::Overall => input.total_leavers,
            Self::Voluntary => input.voluntary_leavers,
            Self::Involuntary => input.involuntary_leavers,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnoverMetric {
    pub kind: MetricKind,
    pub rate: Option<f64>,
    pub tier: RiskTier,
}

/// Percentage of leavers against average headcount. Undefined when the
/// headcount is not positive, and also when the division itself has no
/// value (both operands infinite), so a NaN never reaches the classifier.
pub fn turnover_rate(avg_headcount: f64, leavers: f64) -> Option<f64> {
    if avg_headcount > 0.0 {
        let rate = leavers / avg_headcount * 100.0;
        if rate.is_nan() { None } else { Some(rate) }
    } else {
        None
    }
}

/// Fixed thresholds, half-open on the lower bound: exactly 10.0 is Medium
/// and exactly 20.0 is High.
pub fn classify(rate: Option<f64>) -> RiskTier {
    match rate {
        None => RiskTier::NotApplicable,
        Some(rate) if rate < 10.0 => RiskTier::Low,
        Some(rate) if rate < 20.0 => RiskTier::Medium,
        Some(_) => RiskTier::High,
    }
}

/// Builds the three metrics in display order against the same headcount.
pub fn assemble(input: &NormalizedInput) -> [TurnoverMetric; 3] {
    [MetricKind::Overall, MetricKind::Voluntary, MetricKind::Involuntary].map(|kind| {
        let rate = turnover_rate(input.avg_headcount, kind.leavers(input));
        TurnoverMetric {
            kind,
            rate,
            tier: classify(rate),
        }
    })
}
