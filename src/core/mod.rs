pub mod input;
pub mod metrics;
pub mod report;
pub mod session;

use crate::core::input::{NormalizedInput, RawInput};
use crate::core::report::Evaluation;

/// The single evaluation pipeline both the one-shot command and the
/// interactive session share: normalize, compute, classify.
pub fn evaluate(raw: &RawInput) -> Evaluation {
    let normalized = NormalizedInput::from_raw(raw);
    Evaluation {
        period: raw.period,
        metrics: metrics::assemble(&normalized),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::Period;
    use crate::core::metrics::RiskTier;

    fn raw(avg: &str, total: &str, voluntary: &str, involuntary: &str) -> RawInput {
        RawInput {
            period: Period::Month,
            avg_headcount: avg.to_string(),
            total_leavers: total.to_string(),
            voluntary_leavers: voluntary.to_string(),
            involuntary_leavers: involuntary.to_string(),
        }
    }

    #[test]
    fn typical_month_scenario() {
        let eval = evaluate(&raw("40", "4", "3", "1"));

        assert_eq!(eval.metrics[0].rate, Some(10.0));
        assert_eq!(eval.metrics[0].tier, RiskTier::Medium);
        assert_eq!(eval.metrics[1].rate, Some(7.5));
        assert_eq!(eval.metrics[1].tier, RiskTier::Low);
        assert_eq!(eval.metrics[2].rate, Some(2.5));
        assert_eq!(eval.metrics[2].tier, RiskTier::Low);
    }

    #[test]
    fn zero_headcount_dominates_every_metric() {
        let eval = evaluate(&raw("0", "5", "", ""));

        for metric in &eval.metrics {
            assert_eq!(metric.rate, None);
            assert_eq!(metric.tier, RiskTier::NotApplicable);
        }
        assert!(eval.not_computable());
    }

    #[test]
    fn high_turnover_scenario() {
        let eval = evaluate(&raw("50", "15", "", ""));

        assert_eq!(eval.metrics[0].rate, Some(30.0));
        assert_eq!(eval.metrics[0].tier, RiskTier::High);
        // empty leaver fields normalize to 0, a genuine 0% rate
        assert_eq!(eval.metrics[1].rate, Some(0.0));
        assert_eq!(eval.metrics[1].tier, RiskTier::Low);
    }

    #[test]
    fn evaluation_is_idempotent() {
        let input = raw("37,5", "6", "4", "2");
        assert_eq!(evaluate(&input), evaluate(&input));
    }

    #[test]
    fn infinite_headcount_and_leavers_stay_not_applicable() {
        let eval = evaluate(&raw("inf", "inf", "", ""));

        assert_eq!(eval.metrics[0].rate, None);
        assert_eq!(eval.metrics[0].tier, RiskTier::NotApplicable);
        assert_eq!(
            crate::core::report::format_rate(eval.metrics[0].rate, "—"),
            "—"
        );
        // finite leavers against an infinite headcount are a genuine 0%
        assert_eq!(eval.metrics[1].rate, Some(0.0));
        assert_eq!(eval.metrics[1].tier, RiskTier::Low);
    }

    #[test]
    fn leavers_above_headcount_are_not_capped() {
        let eval = evaluate(&raw("10", "25", "", ""));
        assert_eq!(eval.metrics[0].rate, Some(250.0));
        assert_eq!(eval.metrics[0].tier, RiskTier::High);
    }
}
