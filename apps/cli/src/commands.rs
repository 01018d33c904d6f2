//! Subcommand implementations

use anyhow::Context;
use clap::Args;
use modset::{
    ConsoleEventReporter, IntoEventCallback, ResultSet, Session, SessionConfig,
    SessionConfigBuilder, SetOperation,
};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Operation to run: union, intersection or difference
    pub operation: SetOperation,

    /// Preset files exported from the launcher
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Zero-based indices of the presets to combine, in order (A,B for difference)
    #[arg(short, long, value_delimiter = ',')]
    pub select: Vec<usize>,

    /// Name of the resulting preset
    #[arg(short, long)]
    pub name: Option<String>,

    /// Where to write the exported preset (default: <output dir>/<name>.html)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Do not write the exported preset
    #[arg(long)]
    pub dry_run: bool,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// What a `run` invocation produced
#[derive(Debug)]
pub struct RunOutcome {
    pub selection: Vec<usize>,
    pub result: ResultSet,
    pub written_to: Option<PathBuf>,
}

async fn load_session(
    config: SessionConfig,
    files: &[PathBuf],
    verbose: bool,
) -> anyhow::Result<Session> {
    let mut session =
        Session::new(config).with_callback(ConsoleEventReporter::new(verbose).into_callback());
    session
        .load_paths(files)
        .await
        .context("Failed to load presets")?;
    Ok(session)
}

/// Load presets for listing
pub async fn inspect(files: &[PathBuf]) -> anyhow::Result<Session> {
    let config = SessionConfig::from_env().context("Failed to read configuration")?;
    load_session(config, files, false).await
}

/// Load presets, run the operation and export the result
pub async fn run(args: &RunArgs, verbose: bool) -> anyhow::Result<RunOutcome> {
    let config = SessionConfig::from_env().context("Failed to read configuration")?;
    run_with_config(args, config, verbose).await
}

pub async fn run_with_config(
    args: &RunArgs,
    config: SessionConfig,
    verbose: bool,
) -> anyhow::Result<RunOutcome> {
    let mut builder = SessionConfigBuilder::from(config);
    if let Some(name) = &args.name {
        builder = builder.result_name(name.clone());
    }
    let config = builder.build()?;
    let output_dir = config.output_dir.clone();

    let mut session = load_session(config, &args.files, verbose && !args.json).await?;

    let selection = if args.select.is_empty() {
        session.default_selection()
    } else {
        args.select.clone()
    };
    debug!("Running {} over presets {:?}", args.operation, selection);

    let result = session.run(args.operation, &selection)?.clone();

    let written_to = if args.dry_run {
        None
    } else {
        let exported = session.export()?;
        let path = match &args.output {
            Some(path) => {
                exported.write_to(path).await?;
                path.clone()
            }
            None => exported.write_to_dir(&output_dir).await?,
        };
        Some(path)
    };

    Ok(RunOutcome {
        selection,
        result,
        written_to,
    })
}

/// Path relative to the current directory when possible, for display
pub fn display_path(path: &Path) -> String {
    std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf))
        .unwrap_or_else(|| path.to_path_buf())
        .display()
        .to_string()
}
