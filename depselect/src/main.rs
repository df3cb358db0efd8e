//! Interactively choose which dependencies to add to BUILD rules.
//!
//! Reads the resolver's missing-dependency file, prompts on stdin/stdout and
//! emits the chosen labels per rule as JSON.

use std::ffi::OsStr;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;

use depselect::error::SelectError;
use depselect::exit_codes;
use depselect::io::config::{CONFIG_FILE_NAME, DepselectConfig, load_config, write_config};
use depselect::io::missing_store::{load_missing_deps, render_deps_to_add, write_deps_to_add};
use depselect::io::prompt::Prompter;
use depselect::io::style::EmphasisStyle;
use depselect::logging;
use depselect::select::{chosen_count, rules_with_additions, select_deps_to_add};

#[derive(Parser)]
#[command(
    name = "depselect",
    version,
    about = "Interactively choose dependencies to add to BUILD rules"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Prompt for a dependency per missing class and emit the choices as JSON.
    Select {
        /// Resolver output: rule -> class -> ranked candidate labels.
        missing: PathBuf,
        /// Write the result here instead of printing it to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Config file (defaults to `.depselect.toml` if present).
        #[arg(long)]
        config: Option<PathBuf>,
        /// Disable bold emphasis in prompts.
        #[arg(long)]
        plain: bool,
    },
    /// Check a resolver output file against the schema and invariants.
    Validate {
        missing: PathBuf,
    },
    /// Write a default `.depselect.toml`.
    InitConfig {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
        /// Path to write instead of `.depselect.toml`.
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_code_for(&err));
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Select {
            missing,
            output,
            config,
            plain,
        } => cmd_select(&missing, output.as_deref(), config.as_deref(), plain),
        Command::Validate { missing } => cmd_validate(&missing),
        Command::InitConfig { force, config } => cmd_init_config(config.as_deref(), force),
    }
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    let exhausted = err.chain().any(|cause| {
        matches!(
            cause.downcast_ref::<SelectError>(),
            Some(SelectError::InputExhausted)
        )
    });
    if exhausted {
        exit_codes::INPUT_EXHAUSTED
    } else {
        exit_codes::INVALID
    }
}

fn cmd_select(
    missing_path: &Path,
    output: Option<&Path>,
    config_path: Option<&Path>,
    plain: bool,
) -> Result<()> {
    let cfg = load_config(config_path.unwrap_or(Path::new(CONFIG_FILE_NAME)))?;
    let missing = load_missing_deps(missing_path)?;

    let no_color = std::env::var_os("NO_COLOR");
    let emphasis = resolve_emphasis(plain, no_color.as_deref(), cfg.emphasis).emphasis();

    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout().lock())
        .with_scan_failure_policy(cfg.on_scan_failure);
    let deps = select_deps_to_add(&missing, &mut prompter, emphasis.as_ref())
        .context("select dependencies")?;
    let (_, mut stdout) = prompter.into_parts();
    info!(
        rules = deps.len(),
        labels = chosen_count(&deps),
        "selection complete"
    );

    writeln!(stdout)?;
    match output {
        Some(path) => {
            write_deps_to_add(path, &deps)?;
            for (rule, labels) in rules_with_additions(&deps) {
                let labels: Vec<String> = labels.iter().map(ToString::to_string).collect();
                writeln!(stdout, "{}: {}", rule, labels.join(", "))?;
            }
        }
        None => stdout.write_all(render_deps_to_add(&deps)?.as_bytes())?,
    }
    stdout.flush()?;
    Ok(())
}

/// `--plain` or a non-empty `NO_COLOR` override the configured style.
fn resolve_emphasis(
    plain: bool,
    no_color: Option<&OsStr>,
    configured: EmphasisStyle,
) -> EmphasisStyle {
    if plain || no_color.is_some_and(|value| !value.is_empty()) {
        EmphasisStyle::Plain
    } else {
        configured
    }
}

fn cmd_validate(missing_path: &Path) -> Result<()> {
    let missing = load_missing_deps(missing_path)?;
    let classes: usize = missing.values().map(|classes| classes.len()).sum();
    println!("ok: rules={} classes={}", missing.len(), classes);
    Ok(())
}

fn cmd_init_config(config_path: Option<&Path>, force: bool) -> Result<()> {
    let path = config_path.unwrap_or(Path::new(CONFIG_FILE_NAME));
    if !force && path.exists() {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    write_config(path, &DepselectConfig::default())
}
