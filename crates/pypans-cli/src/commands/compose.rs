//! Implementation of `pypans --new`.
//!
//! Responsibility: gather the project name, owner identity and yes/no
//! decisions, run the three build phases in the current directory, then the
//! opted-in post-build commands. No generation logic lives here.

use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info, instrument};

use pypans_adapters::{LocalFilesystem, TemplateRootSources, resolve_python_version};
use pypans_core::application::{Phase, PhaseReport, Project, WorkspaceLayout};
use pypans_core::domain::{Ambient, Identity, ProjectDescriptor};

use crate::{
    cli::ComposeArgs,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
    post_build::PostBuildStep,
    prompt::Prompter,
};

/// Everything asked of the operator, collected before anything is written.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Answers {
    name: String,
    username: String,
    email: String,
    git_init: bool,
    install_dependencies: bool,
}

/// Machine-readable result of a composition.
#[derive(Debug, Serialize)]
struct Summary<'a> {
    project: &'a str,
    root: &'a Path,
    templates: &'a Path,
    date: NaiveDate,
    runtime_version: &'a str,
    phases: &'a [PhaseReport],
    post_build: &'a [PostBuildStep],
}

/// Execute `pypans --new`.
///
/// Sequence:
/// 1. Resolve the template root (fails before any prompt)
/// 2. Ask for name, username, email and the two yes/no decisions
/// 3. Build package, tests and meta phases, stopping at the first error
/// 4. Run the opted-in post-build commands
/// 5. Report the result
#[instrument(skip_all)]
pub fn execute(args: ComposeArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    // 1. Templates
    let configured = config.template_root().map(Path::to_path_buf);
    let template_root = TemplateRootSources::from_env(args.templates.clone(), configured).discover()?;
    let workspace = std::env::current_dir()
        .with_cli_context(|| "Failed to resolve the current directory")?;

    debug!(
        templates = %template_root.display(),
        workspace = %workspace.display(),
        "composition started"
    );

    // 2. Questions
    let answers = gather_answers(&args, &config, &Prompter::detect())?;
    let owner = Identity::new(&answers.username, &answers.email)?;
    let descriptor = ProjectDescriptor::new(&answers.name, owner)?;

    let runtime_version = resolve_python_version(config.runtime.python_version.as_deref());
    let ambient = Ambient::capture(&runtime_version);
    let date = ambient.date();

    // 3. Phases
    let project = Project::new(
        descriptor,
        WorkspaceLayout::new(&workspace, &template_root),
        ambient,
        Arc::new(LocalFilesystem::new()),
    );

    let name = project.descriptor().name();

    output.header(&format!("Composing '{name}'..."))?;
    let reports = run_phases(&project, &output)?;
    for report in &reports {
        output.phase(report)?;
    }

    // 4. Post-build
    let steps = PostBuildStep::selected(answers.git_init, answers.install_dependencies);
    for step in &steps {
        output.info(&format!("Running {step}"))?;
        step.run(&workspace)?;
    }

    info!(
        project = name,
        phases = reports.len(),
        steps = steps.len(),
        "composition completed"
    );

    // 5. Result
    output.json(&Summary {
        project: name,
        root: &workspace,
        templates: &template_root,
        date,
        runtime_version: &runtime_version,
        phases: &reports,
        post_build: &steps,
    })?;

    output.success(&format!("Project '{name}' composed!"))?;
    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  python -m {name}"))?;
    output.print("  ./analyse-source-code.sh")?;

    Ok(())
}

fn run_phases(project: &Project, output: &OutputManager) -> CliResult<Vec<PhaseReport>> {
    let progress = output.progress(Phase::ALL.len() as u64);
    let mut reports = Vec::with_capacity(Phase::ALL.len());

    for phase in Phase::ALL {
        progress.set_message(phase.as_str());
        match project.build(phase) {
            Ok(report) => {
                progress.inc(1);
                reports.push(report);
            }
            Err(e) => {
                progress.finish_and_clear();
                return Err(e.into());
            }
        }
    }

    progress.finish_and_clear();
    Ok(reports)
}

// ── Questions ─────────────────────────────────────────────────────────────────

fn gather_answers(
    args: &ComposeArgs,
    config: &AppConfig,
    prompter: &Prompter,
) -> CliResult<Answers> {
    let name = match &args.name {
        Some(name) => name.clone(),
        None => prompter.text("Project name", None)?,
    };
    let name = name.trim().to_lowercase();
    if name.is_empty() {
        return Err(CliError::InvalidInput {
            message: "project name cannot be empty".into(),
        });
    }

    let username = identity_value(
        args.username.as_deref(),
        config.defaults.username.as_deref(),
        args.yes,
        "Username",
        prompter,
    )?;
    let email = identity_value(
        args.email.as_deref(),
        config.defaults.email.as_deref(),
        args.yes,
        "Email",
        prompter,
    )?;

    let (git_init, install_dependencies) = if args.yes {
        (
            config.post_build.git_init,
            config.post_build.install_dependencies,
        )
    } else {
        (
            prompter.confirm("Initialise a git repository?", config.post_build.git_init)?,
            prompter.confirm(
                "Install development dependencies?",
                config.post_build.install_dependencies,
            )?,
        )
    };

    Ok(Answers {
        name,
        username,
        email,
        git_init,
        install_dependencies,
    })
}

/// Flag value, else the configured default under `--yes`, else a prompt.
fn identity_value(
    flag: Option<&str>,
    configured: Option<&str>,
    unattended: bool,
    prompt: &str,
    prompter: &Prompter,
) -> CliResult<String> {
    if let Some(value) = flag {
        return Ok(value.to_string());
    }
    match configured {
        Some(value) if unattended => Ok(value.to_string()),
        _ => prompter.text(prompt, configured),
    }
}
