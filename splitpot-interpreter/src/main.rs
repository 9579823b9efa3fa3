#![warn(clippy::uninlined_format_args)]

use std::{borrow::Cow, env, fs, process};

use splitpot_application::{Command, Script, ScriptProcessor, ScriptStatement};
use splitpot_infrastructure::{LargestFirstPlanner, SplitpotScriptParser};
use splitpot_presentation::SettlementPresenter;

type CliResult<T> = Result<T, Cow<'static, str>>;

struct AppConfig {
    script_path: String,
}

impl AppConfig {
    fn from_args() -> CliResult<Self> {
        let Some(script_path) = env::args().nth(1) else {
            return Err("Usage: splitpot-interpreter <file.splitpot>".into());
        };
        Ok(Self { script_path })
    }
}

fn init_logging() {
    tracing_subscriber::fmt::init();
}

fn main() {
    init_logging();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let config = AppConfig::from_args()?;

    let source = fs::read_to_string(&config.script_path)
        .map_err(|err| format!("Failed to read '{}': {err}", config.script_path))?;
    tracing::debug!(path = %config.script_path, bytes = source.len(), "script loaded");

    let parser = SplitpotScriptParser;
    let planner = LargestFirstPlanner;
    let processor = ScriptProcessor::new(&parser, &planner);

    let script = processor
        .parse_script(&source)
        .map_err(|err| err.to_string())?;

    print_script_output(&processor, &script)
}

/// Runs each command against the statements above it; a script with no
/// command at all prints the full settlement view.
fn print_script_output(processor: &ScriptProcessor<'_>, script: &Script<'_>) -> CliResult<()> {
    for (index, stmt) in script.statements().iter().enumerate() {
        let ScriptStatement::Command(command) = &stmt.statement else {
            continue;
        };

        let result = processor
            .settlement_for_prefix(script, index)
            .map_err(|err| err.to_string())?;

        match command {
            Command::Total => {
                println!("{}", SettlementPresenter::build_totals_line(&result));
            }
            Command::Balances => {
                for line in SettlementPresenter::build_standing_lines(&result) {
                    println!("{line}");
                }
            }
            Command::Settle => {
                for line in SettlementPresenter::build_transfer_lines(&result) {
                    println!("{line}");
                }
            }
        }
    }

    if !script.has_commands() {
        let result = processor
            .settlement_for(script)
            .map_err(|err| err.to_string())?;
        for line in SettlementPresenter::render(&result).lines() {
            println!("{line}");
        }
    }

    Ok(())
}
