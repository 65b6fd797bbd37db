use crate::config::DisplayConfig;
use crate::core::input::Period;
use crate::core::metrics::{RiskTier, TurnoverMetric};
use colored::Colorize;
use serde::Serialize;

/// One full evaluation: the selected period plus the three metrics in
/// display order.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub period: Period,
    pub metrics: [TurnoverMetric; 3],
}

impl Evaluation {
    pub fn not_computable(&self) -> bool {
        self.metrics.iter().all(|metric| metric.rate.is_none())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonMetric {
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    pub tier: RiskTier,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    pub period: Period,
    pub period_label: &'static str,
    pub metrics: Vec<JsonMetric>,
}

impl From<&Evaluation> for JsonReport {
    fn from(eval: &Evaluation) -> Self {
        Self {
            period: eval.period,
            period_label: eval.period.label(),
            metrics: eval
                .metrics
                .iter()
                .map(|metric| JsonMetric {
                    label: metric.kind.label(),
                    rate: metric.rate,
                    tier: metric.tier,
                    description: metric.kind.description(),
                })
                .collect(),
        }
    }
}

/// One decimal place for a computed rate; a computed 0 renders as "0.0%".
/// The placeholder is reserved for the undefined (zero headcount) case.
pub fn format_rate(rate: Option<f64>, placeholder: &str) -> String {
    match rate {
        Some(rate) => format!("{rate:.1}%"),
        None => placeholder.to_string(),
    }
}

fn tier_badge(tier: RiskTier) -> String {
    match tier {
        RiskTier::Low => tier.as_str().green().bold().to_string(),
        RiskTier::Medium => tier.as_str().yellow().bold().to_string(),
        RiskTier::High => tier.as_str().red().bold().to_string(),
        RiskTier::NotApplicable => tier.as_str().dimmed().to_string(),
    }
}

pub fn print_human(eval: &Evaluation, display: &DisplayConfig) {
    println!("{} turnover calculation", eval.period.label());

    for metric in &eval.metrics {
        println!();
        println!("{} [{}]", metric.kind.label(), tier_badge(metric.tier));
        println!("  {}", format_rate(metric.rate, &display.placeholder));
        println!("  {}", metric.kind.description());
    }

    if eval.not_computable() {
        println!();
        println!("note: metrics cannot be calculated while average headcount is 0");
    }

    if display.reference_bands {
        println!();
        println!("Reference bands (internal HR guidance)");
        println!("  0-10%  low turnover - usually considered a healthy level");
        println!("  10-20% medium turnover - monitor by department");
        println!("  >20%   high risk - may call for root-cause analysis and action");
    }
}
