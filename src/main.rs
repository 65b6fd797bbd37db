mod cli;
mod config;
mod core;

use anyhow::Result;
use clap::Parser;
use cli::{CalcArgs, Cli, Commands};
use core::input::RawInput;
use std::path::Path;

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            2
        }
    };

    std::process::exit(exit_code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Calc(args) => run_calc(args),
        Commands::Session(args) => {
            let loaded = load(args.config.as_deref())?;
            core::session::run(&loaded.config)?;
            Ok(0)
        }
        Commands::Init(args) => {
            if args.config.is_some() {
                eprintln!(
                    "warning: --config is ignored by `turnover init`; writing ./turnover.toml"
                );
            }

            let path = std::env::current_dir()?.join("turnover.toml");
            config::write_default_config(&path)?;
            println!("created {}", path.display());
            Ok(0)
        }
    }
}

fn run_calc(args: CalcArgs) -> Result<i32> {
    let loaded = load(args.config.as_deref())?;

    let raw = RawInput {
        period: args.period.unwrap_or(loaded.config.general.default_period),
        avg_headcount: args.avg,
        total_leavers: args.total,
        voluntary_leavers: args.voluntary,
        involuntary_leavers: args.involuntary,
    };
    let eval = core::evaluate(&raw);

    let output_json = args.json || loaded.config.general.json;
    if output_json {
        let json_report = core::report::JsonReport::from(&eval);
        println!("{}", serde_json::to_string_pretty(&json_report)?);
    } else {
        core::report::print_human(&eval, &loaded.config.display);
    }

    Ok(0)
}

fn load(cli_config_path: Option<&Path>) -> Result<config::LoadedConfig> {
    let cwd = std::env::current_dir()?;
    config::load_config(cli_config_path, &cwd)
}
