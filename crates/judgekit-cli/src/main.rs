//! judgekit - checker and validator runner for contest judges
//!
//! ```text
//! judgekit [<checker-id>] <input> <output> <answer> [<report> [<adapter-args>...]]
//! judgekit --validate [<validator-id>] [<input>]
//! ```
//!
//! The verdict is reported through the result adapter selected by
//! `JUDGEKIT_CHECKER_TYPE` (default `ifmo`) and the process exits with the
//! code that adapter assigns to it.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use tracing::Level;

use judgekit_core::{
    AdapterRegistry, CheckerFramework, CheckerRegistry, JudgeError, Manifest, Mode, RunConfig,
    ValidatorRegistry, CHECKER_TYPE_ENV, INTERNAL_EXIT_CODE, USAGE_EXIT_CODE,
};

#[derive(Parser, Debug)]
#[command(name = "judgekit")]
#[command(author = "Stevedores Org")]
#[command(version = judgekit_core::VERSION)]
#[command(about = "Run a contest checker or validator and report its verdict", long_about = None)]
struct Cli {
    /// Run a validator instead of a checker
    #[arg(long, visible_alias = "validator")]
    validate: bool,

    /// Result adapter (ifmo, kitten, ejudge)
    #[arg(long, env = CHECKER_TYPE_ENV)]
    checker_type: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long)]
    json: bool,

    /// Component id followed by its files and adapter arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

impl Cli {
    fn mode(&self) -> Mode {
        if self.validate {
            Mode::Validator
        } else {
            Mode::Checker
        }
    }
}

fn build_framework(cli: &Cli, mut config: RunConfig) -> CheckerFramework {
    if let Some(id) = &cli.checker_type {
        config = config.with_adapter(id);
    }
    CheckerFramework::new(
        CheckerRegistry::builtin(),
        AdapterRegistry::builtin(),
        config,
    )
    .with_validators(ValidatorRegistry::builtin())
    .with_manifest(Manifest::embedded())
}

fn run(cli: &Cli, config: RunConfig) -> Result<i32> {
    let framework = build_framework(cli, config);
    let mode = cli.mode();
    let code = framework
        .execute(mode, &cli.args)
        .with_context(|| format!("{} run failed", mode))?;
    Ok(code)
}

/// Print `err` to stderr and pick the exit code for it.
fn report_error(err: &anyhow::Error, mode: Mode) -> i32 {
    eprintln!("judgekit: {:#}", err);
    match err.downcast_ref::<JudgeError>() {
        Some(judge_err) => {
            if judge_err.is_usage() {
                eprintln!("{}", mode.usage());
            }
            judge_err.exit_code()
        }
        None => INTERNAL_EXIT_CODE,
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => USAGE_EXIT_CODE,
            };
            // Help and version go to stdout, parse errors to stderr.
            let _ = err.print();
            std::process::exit(code);
        }
    };

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    judgekit_core::init_tracing(cli.json, level);

    let code = match RunConfig::from_env()
        .context("failed to read configuration")
        .and_then(|config| run(&cli, config))
    {
        Ok(code) => code,
        Err(err) => report_error(&err, cli.mode()),
    };
    std::process::exit(code);
}
