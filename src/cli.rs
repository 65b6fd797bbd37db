use crate::core::input::Period;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "turnover",
    version,
    about = "HR turnover-rate calculator with risk classification"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// One-shot calculation from flags.
    Calc(CalcArgs),
    /// Interactive session: edit fields one at a time, metrics reprint
    /// after every change.
    Session(SessionArgs),
    /// Write a default ./turnover.toml.
    Init(InitArgs),
}

#[derive(Debug, Args, Clone)]
pub struct CalcArgs {
    /// Average headcount over the period: (start + end) / 2.
    #[arg(long, default_value = "")]
    pub avg: String,
    /// Total leavers (voluntary + involuntary).
    #[arg(long, default_value = "")]
    pub total: String,
    #[arg(long, default_value = "")]
    pub voluntary: String,
    #[arg(long, default_value = "")]
    pub involuntary: String,
    #[arg(long, value_enum)]
    pub period: Option<Period>,
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args, Clone)]
pub struct SessionArgs {
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct InitArgs {
    #[arg(long)]
    pub config: Option<PathBuf>,
}
