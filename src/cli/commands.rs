//! Command dispatch
//!
//! Every command returns the process exit code; errors bubble up as [`CliError`].

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::render_structure;
use crate::application::services::ExposureReport;
use crate::cli::args::{BatchArgs, Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, local_config_path, Settings};
use crate::domain::sample;
use crate::exitcode;
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

pub fn execute_command(cli: &Cli) -> CliResult<i32> {
    let Some(command) = &cli.command else {
        return Err(CliError::Usage(
            "no command given, see `rslimit --help`".to_string(),
        ));
    };

    if let Commands::Completion { shell } = command {
        print_completions(*shell);
        return Ok(exitcode::OK);
    }

    let project_dir = resolve_project_dir(cli.project_dir.as_deref())?;
    let settings = Settings::load(Some(project_dir.as_path()))?;
    output::configure(settings.color);
    let container = ServiceContainer::new(settings);

    match command {
        Commands::Structure => structure(&container),
        Commands::Validate { batch } => validate(&container, batch),
        Commands::Report { batch } => report(&container, batch),
        Commands::Config { command } => match command {
            ConfigCommands::Show => config_show(&container),
            ConfigCommands::Path => config_path(&project_dir),
        },
        Commands::Completion { .. } => Ok(exitcode::OK),
    }
}

fn resolve_project_dir(dir: Option<&Path>) -> CliResult<PathBuf> {
    match dir {
        Some(dir) if dir.is_dir() => Ok(dir.to_path_buf()),
        Some(dir) => Err(CliError::InvalidArgs(format!(
            "project directory does not exist: {}",
            dir.display()
        ))),
        None => std::env::current_dir()
            .map_err(|e| CliError::Infra(InfraError::io("current directory", e))),
    }
}

fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}

#[instrument(skip(container))]
fn structure(container: &ServiceContainer) -> CliResult<i32> {
    let arena = container.exposure.hierarchy(&sample::sample_hierarchy())?;
    output::header("Financial Product Structure:");
    output::info(&render_structure(&arena));
    Ok(exitcode::OK)
}

#[instrument(skip(container))]
fn validate(container: &ServiceContainer, batch: &BatchArgs) -> CliResult<i32> {
    let report = run_checks(container, batch)?;
    print_results(&report);
    Ok(exit_code_for(&container.settings, &report))
}

#[instrument(skip(container))]
fn report(container: &ServiceContainer, batch: &BatchArgs) -> CliResult<i32> {
    let report = run_checks(container, batch)?;
    if container.settings.show_structure {
        output::header("Financial Product Structure:");
        output::info(&render_structure(&report.arena));
    }
    print_results(&report);
    Ok(exit_code_for(&container.settings, &report))
}

fn run_checks(container: &ServiceContainer, batch: &BatchArgs) -> CliResult<ExposureReport> {
    if let Some(path) = &batch.transactions {
        if !container.fs.is_file(path) {
            return Err(CliError::Infra(InfraError::BatchNotFound {
                path: path.clone(),
            }));
        }
    }

    let mut transactions = container.transactions(batch.transactions.as_deref())?;
    if batch.oversized {
        transactions.push(sample::oversized_transaction());
    }
    debug!("checking {} transaction(s)", transactions.len());

    Ok(container
        .exposure
        .run(&sample::sample_hierarchy(), transactions)?)
}

fn print_results(report: &ExposureReport) {
    for txn in &report.unresolved {
        output::warning(&format!(
            "Transaction path not found: {}",
            txn.path_display()
        ));
    }

    output::header("Validation Results:");
    if report.is_compliant() {
        output::success("No breaches found.");
    } else {
        for breach in &report.breaches {
            output::failure(breach);
        }
    }
}

/// Breaches and unresolved paths are data; they only fail the run when asked to.
pub fn exit_code_for(settings: &Settings, report: &ExposureReport) -> i32 {
    if settings.fail_on_breach && !report.is_compliant() {
        return exitcode::DATAERR;
    }
    if settings.strict_paths && !report.unresolved.is_empty() {
        return exitcode::DATAERR;
    }
    exitcode::OK
}

fn config_show(container: &ServiceContainer) -> CliResult<i32> {
    output::info(&container.settings.to_toml()?);
    Ok(exitcode::OK)
}

fn config_path(project_dir: &Path) -> CliResult<i32> {
    match global_config_path() {
        Some(path) => output::info(&format!("global: {}", path.display())),
        None => output::info("global: (no config directory)"),
    }
    output::info(&format!("local:  {}", local_config_path(project_dir).display()));
    Ok(exitcode::OK)
}
