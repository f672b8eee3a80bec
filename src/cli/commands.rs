//! Command dispatch

use std::io;
use std::path::Path;
use std::sync::Arc;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, info, instrument};

use crate::application::services::QuizService;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::domain::TreeRender;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    if let Some(Commands::Completion { shell }) = &cli.command {
        return cmd_completion(*shell);
    }

    let settings = Arc::new(Settings::load(cli.config.as_deref())?);
    debug!("settings loaded, rule: {}", settings.rule);

    match &cli.command {
        None | Some(Commands::Run) => cmd_run(settings),
        Some(Commands::Check { answers, file }) => cmd_check(settings, answers, file.as_deref()),
        Some(Commands::Show { infix }) => cmd_show(&settings, *infix),
        Some(Commands::Config { command }) => cmd_config(&settings, cli, command),
        Some(Commands::Completion { .. }) => Ok(()),
    }
}

#[instrument(skip_all)]
fn cmd_run(settings: Arc<Settings>) -> CliResult<()> {
    let service = QuizService::new(settings);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let summary = service.run(stdin.lock(), &mut stdout)?;
    info!(
        answered = summary.answered,
        correct = summary.correct,
        "session finished"
    );
    Ok(())
}

#[instrument(skip(settings))]
fn cmd_check(settings: Arc<Settings>, answers: &[String], file: Option<&Path>) -> CliResult<()> {
    let mut all = answers.to_vec();
    if let Some(path) = file {
        all.extend(QuizService::load_answers(path)?);
    }
    if all.is_empty() {
        return Err(CliError::InvalidArgs(
            "no answers given: pass ANSWER arguments or --file".into(),
        ));
    }

    let service = QuizService::new(settings);
    let verdicts = service.check_all(&all);
    for verdict in &verdicts {
        if verdict.matched {
            output::success(&verdict.answer);
        } else {
            output::failure(&verdict.answer);
        }
    }

    let wrong = verdicts.iter().filter(|v| !v.matched).count();
    if wrong > 0 {
        return Err(CliError::Mismatch {
            wrong,
            total: verdicts.len(),
        });
    }
    Ok(())
}

fn cmd_show(settings: &Settings, infix: bool) -> CliResult<()> {
    output::header(&settings.question);
    if infix {
        output::info(&settings.rule);
    } else {
        output::info(&settings.rule.to_tree_string());
    }
    Ok(())
}

fn cmd_config(settings: &Settings, cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&settings.to_toml()?),
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => {
                    let state = if path.exists() { "" } else { " (not found)" };
                    output::info(&format!("global: {}{}", path.display(), state));
                }
                None => output::info("global: unavailable"),
            }
            match &cli.config {
                Some(path) => output::info(&format!("explicit: {}", path.display())),
                None => output::info("explicit: none"),
            }
        }
        ConfigCommands::Template => output::info(&Settings::template()),
    }
    Ok(())
}

fn cmd_completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    eprintln!("Generating completion file for {shell:?}...");
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
