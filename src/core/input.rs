use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reporting period the metrics are calculated over. Purely a display
/// concern: the formulas are identical for every period.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ValueEnum, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[default]
    Month,
    Quarter,
    Year,
    Other,
}

impl Period {
    pub fn label(self) -> &'static str {
        match self {
            Self::Month => "Monthly",
            Self::Quarter => "Quarterly",
            Self::Year => "Yearly",
            Self::Other => "Selected period",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Month => write!(f, "month"),
            Self::Quarter => write!(f, "quarter"),
            Self::Year => write!(f, "year"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Inputs exactly as the user typed them. The numeric fields stay as free
/// text until evaluation so "4,5" and "  7 " are accepted everywhere.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawInput {
    pub period: Period,
    pub avg_headcount: String,
    pub total_leavers: String,
    pub voluntary_leavers: String,
    pub involuntary_leavers: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedInput {
    pub avg_headcount: f64,
    pub total_leavers: f64,
    pub voluntary_leavers: f64,
    pub involuntary_leavers: f64,
}

impl NormalizedInput {
    pub fn from_raw(raw: &RawInput) -> Self {
        Self {
            avg_headcount: normalize_number(&raw.avg_headcount),
            total_leavers: normalize_number(&raw.total_leavers),
            voluntary_leavers: normalize_number(&raw.voluntary_leavers),
            involuntary_leavers: normalize_number(&raw.involuntary_leavers),
        }
    }
}

/// Total function from any raw string to a non-negative number. Accepts a
/// comma as the decimal separator; empty, unparseable, and negative input
/// all coerce to 0 instead of surfacing an error.
pub fn normalize_number(raw: &str) -> f64 {
    let cleaned = raw.replace(',', ".");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return 0.0;
    }

    match cleaned.parse::<f64>() {
        // NaN fails the >= comparison, so it falls through to 0 as well.
        Ok(value) if value >= 0.0 => value,
        _ => 0.0,
    }
}
