//! Command line front end for combining Arma 3 launcher presets

mod commands;
mod output;

use clap::{ArgAction, Parser, Subcommand};
use modset::PresetError;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

#[derive(Debug, Parser)]
#[command(
    name = "modset",
    version,
    about = "Combine Arma 3 launcher presets with union, intersection and difference"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the presets in the given files
    Inspect {
        /// Preset files exported from the launcher
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Also list every mod of every preset
        #[arg(long)]
        mods: bool,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Run a set operation and export the result as a preset
    Run(commands::RunArgs),
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

async fn execute(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Inspect { files, mods, json } => {
            let session = commands::inspect(&files).await?;
            if json {
                println!("{}", output::inspect_json(&session)?);
            } else {
                print!("{}", output::format_presets(session.presets(), mods));
            }
        }
        Command::Run(args) => {
            let outcome = commands::run(&args, cli.verbose > 0).await?;
            if args.json {
                println!("{}", output::run_json(&outcome)?);
            } else {
                print!("{}", output::format_run(&outcome));
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(error) = execute(cli).await {
        eprintln!("❌ {:#}", error);
        if let Some(suggestion) = error.downcast_ref::<PresetError>().and_then(|e| e.suggestion()) {
            eprintln!("💡 {}", suggestion);
        }
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modset::SetOperation;

    #[test]
    fn test_parse_run_command() {
        let cli = Cli::try_parse_from([
            "modset", "-vv", "run", "difference", "a.html", "b.html", "c.html", "--select", "2,0",
            "--name", "Leftovers", "--dry-run",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Run(args) => {
                assert_eq!(args.operation, SetOperation::Difference);
                assert_eq!(args.files.len(), 3);
                assert_eq!(args.select, vec![2, 0]);
                assert_eq!(args.name.as_deref(), Some("Leftovers"));
                assert!(args.dry_run);
                assert!(!args.json);
            }
            other => panic!("Expected run command, got: {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_operation() {
        let result = Cli::try_parse_from(["modset", "run", "xor", "a.html"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_inspect_requires_files() {
        assert!(Cli::try_parse_from(["modset", "inspect"]).is_err());

        let cli = Cli::try_parse_from(["modset", "inspect", "a.html", "--mods"]).unwrap();
        assert!(matches!(cli.command, Command::Inspect { mods: true, json: false, .. }));
    }
}
