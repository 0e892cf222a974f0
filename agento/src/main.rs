use std::path::PathBuf;

use agento::config::AgentoConfig;
use agento::core::ModuleId;
use agento::dashboard::Dashboard;
use agento::events::LoggingEventSink;
use agento::files::{create_file_name, format_json_for_display};
use agento::observability::{init_logging, LogFormat};
use agento::session::Session;
use agento::stages::{CriteriaStage, StageInput, StageRunner};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Parser)]
#[command(name = "agento", version, about = "Agento multi-agent planning pipeline")]
struct Cli {
    /// Log line format on stderr: compact or json.
    #[arg(long, global = true, default_value = "compact")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the status dashboard of a fresh session.
    Dashboard,
    /// Run the placeholder criteria generator and write its output file.
    Criteria {
        /// The goal to generate success criteria for.
        #[arg(long)]
        goal: String,
        /// Output file; defaults to a timestamped name in AGENTO_OUTPUT_DIR.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Run module 1 in a session and show what module 2 would receive.
    Run {
        /// The goal to plan for.
        #[arg(long)]
        goal: String,
    },
}

fn default_output_path(config: &AgentoConfig) -> PathBuf {
    config
        .output_dir
        .join(create_file_name("module1_output", "json"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_format)?;

    let config = AgentoConfig::from_env().context("load configuration")?;
    debug!(?config, "configuration loaded");

    match cli.command {
        Command::Dashboard => {
            let session = Session::new(&config);
            print!("{}", Dashboard::from_session(&session));
        }
        Command::Criteria { goal, output } => {
            let path = output.unwrap_or_else(|| default_output_path(&config));
            let record = CriteriaStage::new()
                .with_delay(config.stage_delay)
                .with_output_path(&path)
                .generate(&goal)
                .await
                .with_context(|| format!("generate criteria into {}", path.display()))?;
            println!("{}", format_json_for_display(&record)?);
            eprintln!("written to {}", path.display());
        }
        Command::Run { goal } => {
            let mut session =
                Session::new(&config).with_event_sink(Arc::new(LoggingEventSink::debug()));
            let stage = CriteriaStage::new()
                .with_delay(config.stage_delay)
                .with_output_path(default_output_path(&config));

            let result = StageRunner::run(&mut session, &stage, Some(StageInput::goal(goal))).await;

            print!("{}", Dashboard::from_session(&session));
            println!();
            println!("{}", session.get_logs(ModuleId::Module1).standard);
            result.context("module 1 failed")?;

            if let Some(input) = session.previous_output(ModuleId::Module2) {
                println!("Input for {}:", ModuleId::Module2.title());
                println!("{}", format_json_for_display(input)?);
            }
        }
    }

    Ok(())
}
