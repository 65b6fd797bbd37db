use crate::config::Config;
use crate::core::input::{Period, RawInput};
use crate::core::report::{self, Evaluation};
use anyhow::{Context, Result};
use clap::ValueEnum;
use std::io::{self, BufRead};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    AvgHeadcount,
    TotalLeavers,
    VoluntaryLeavers,
    InvoluntaryLeavers,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Set(Field, String),
    SetPeriod(Period),
    Show,
    Reset,
    Help,
    Quit,
}

/// Interactive state: the raw inputs plus the period `reset` restores.
/// Every edit replaces one field and the caller re-evaluates from scratch.
#[derive(Debug, Clone)]
pub struct Session {
    raw: RawInput,
    default_period: Period,
}

impl Session {
    pub fn new(default_period: Period) -> Self {
        Self {
            raw: RawInput {
                period: default_period,
                ..RawInput::default()
            },
            default_period,
        }
    }

    pub fn evaluate(&self) -> Evaluation {
        crate::core::evaluate(&self.raw)
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::AvgHeadcount => self.raw.avg_headcount = value,
            Field::TotalLeavers => self.raw.total_leavers = value,
            Field::VoluntaryLeavers => self.raw.voluntary_leavers = value,
            Field::InvoluntaryLeavers => self.raw.involuntary_leavers = value,
        }
    }

    pub fn set_period(&mut self, period: Period) {
        self.raw.period = period;
    }

    /// Restores every field and the period in one step. Cannot partially
    /// fail: the whole input record is replaced.
    pub fn reset(&mut self) {
        self.raw = RawInput {
            period: self.default_period,
            ..RawInput::default()
        };
    }
}

/// Parses one line of session input. `Ok(None)` means a blank line;
/// `Err` carries a hint for the user, never an abort.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "avg" => Command::Set(Field::AvgHeadcount, rest.to_string()),
        "total" => Command::Set(Field::TotalLeavers, rest.to_string()),
        "voluntary" => Command::Set(Field::VoluntaryLeavers, rest.to_string()),
        "involuntary" => Command::Set(Field::InvoluntaryLeavers, rest.to_string()),
        "period" => match Period::from_str(rest, true) {
            Ok(period) => Command::SetPeriod(period),
            Err(_) => {
                return Err(format!(
                    "unknown period {rest:?}; expected month, quarter, year or other"
                ));
            }
        },
        "show" => Command::Show,
        "reset" => Command::Reset,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => {
            return Err(format!("unknown command {other:?}; type `help` for commands"));
        }
    };

    Ok(Some(command))
}

fn print_help() {
    println!("commands:");
    println!("  avg <n>          set average headcount");
    println!("  total <n>        set total leavers");
    println!("  voluntary <n>    set voluntary leavers");
    println!("  involuntary <n>  set involuntary leavers");
    println!("  period <p>       set period (month, quarter, year, other)");
    println!("  show             reprint the current metrics");
    println!("  reset            clear all fields");
    println!("  quit             leave the session");
}

pub fn run(config: &Config) -> Result<()> {
    let mut session = Session::new(config.general.default_period);

    println!("turnover interactive session");
    print_help();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("failed reading from stdin")?;

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(hint) => {
                println!("{hint}");
                continue;
            }
        };

        match command {
            Command::Set(field, value) => {
                session.set(field, value);
                report::print_human(&session.evaluate(), &config.display);
            }
            Command::SetPeriod(period) => {
                session.set_period(period);
                report::print_human(&session.evaluate(), &config.display);
            }
            Command::Show => {
                report::print_human(&session.evaluate(), &config.display);
            }
            Command::Reset => {
                session.reset();
                report::print_human(&session.evaluate(), &config.display);
            }
            Command::Help => print_help(),
            Command::Quit => break,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::metrics::RiskTier;

    #[test]
    fn edits_recompute_metrics() {
        let mut session = Session::new(Period::Month);
        assert!(session.evaluate().not_computable());

        session.set(Field::AvgHeadcount, "40");
        session.set(Field::TotalLeavers, "4");
        session.set(Field::VoluntaryLeavers, "3");
        session.set(Field::InvoluntaryLeavers, "1");

        let eval = session.evaluate();
        assert_eq!(eval.metrics[0].rate, Some(10.0));
        assert_eq!(eval.metrics[0].tier, RiskTier::Medium);
        assert_eq!(eval.metrics[1].rate, Some(7.5));
        assert_eq!(eval.metrics[2].rate, Some(2.5));
    }

    #[test]
    fn reset_restores_defaults_and_clears_metrics() {
        let mut session = Session::new(Period::Month);
        session.set_period(Period::Year);
        session.set(Field::AvgHeadcount, "50");
        session.set(Field::TotalLeavers, "15");

        session.reset();

        assert_eq!(session.raw, RawInput::default());
        let eval = session.evaluate();
        assert_eq!(eval.period, Period::Month);
        assert!(
            eval.metrics
                .iter()
                .all(|metric| metric.tier == RiskTier::NotApplicable)
        );
    }

    #[test]
    fn reset_keeps_configured_default_period() {
        let mut session = Session::new(Period::Quarter);
        session.set_period(Period::Other);
        session.reset();
        assert_eq!(session.raw.period, Period::Quarter);
    }

    #[test]
    fn parses_field_commands() {
        assert_eq!(
            parse_command("avg 40"),
            Ok(Some(Command::Set(Field::AvgHeadcount, "40".to_string())))
        );
        assert_eq!(
            parse_command("  voluntary 4,5  "),
            Ok(Some(Command::Set(
                Field::VoluntaryLeavers,
                "4,5".to_string()
            )))
        );
        assert_eq!(
            parse_command("period quarter"),
            Ok(Some(Command::SetPeriod(Period::Quarter)))
        );
        assert_eq!(parse_command("RESET"), Ok(Some(Command::Reset)));
        assert_eq!(parse_command("exit"), Ok(Some(Command::Quit)));
    }

    #[test]
    fn blank_lines_are_ignored_and_junk_gets_a_hint() {
        assert_eq!(parse_command("   "), Ok(None));
        assert!(parse_command("frobnicate 3").is_err());
        assert!(parse_command("period decade").is_err());
    }

    #[test]
    fn setting_a_field_to_junk_still_evaluates() {
        let mut session = Session::new(Period::Month);
        session.set(Field::AvgHeadcount, "forty");
        session.set(Field::TotalLeavers, "4");
        assert!(session.evaluate().not_computable());
    }
}
