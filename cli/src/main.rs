mod render;
mod repl;

use anyhow::{bail, Result};
use checker::config::CheckerConfig;
use checker::persist::{save_legend, save_table, LegendFile};
use checker::{CheckerError, ReportStatus, SymptomChecker, SymptomOrder};
use clap::{Parser, Subcommand};
use repl::Repl;
use std::io::{stdin, stdout, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "symptom-checker")]
#[command(about = "Prime-encoded symptom checker (demonstration only, not medical advice)", long_about = None)]
struct Cli {
    /// JSON symptom table; the built-in demonstration table is used when omitted
    #[arg(long, global = true)]
    table: Option<PathBuf>,
    /// JSON action plans (must contain "Default")
    #[arg(long, global = true)]
    plans: Option<PathBuf>,
    /// Order in which symptoms receive primes: "name" or "case-insensitive"
    #[arg(long, default_value = "name", global = true)]
    order: SymptomOrder,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive prompt (default)
    Repl {
        /// Write a connections graph (SVG) per query into this directory
        #[arg(long)]
        graph_dir: Option<PathBuf>,
    },
    /// Check one comma-separated list of symptom primes
    Check {
        #[arg(long)]
        symptoms: String,
        /// Print the report as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print symptom primes and disease SQFs
    Legend,
    /// Render the connections graph for a query as SVG
    Graph {
        #[arg(long)]
        symptoms: String,
        #[arg(long)]
        output: PathBuf,
    },
    /// Write the legend as JSON
    ExportLegend {
        #[arg(long)]
        output: PathBuf,
    },
    /// Write the active symptom table as JSON
    ExportTable {
        #[arg(long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(std::io::stderr).init();
    let cli = Cli::parse();

    let config = CheckerConfig::new(cli.table, cli.plans).with_order(cli.order);
    let checker = SymptomChecker::from_config(&config)?;

    match cli.command.unwrap_or(Commands::Repl { graph_dir: None }) {
        Commands::Repl { graph_dir } => {
            Repl::new(&checker, stdin().lock(), stdout().lock()).with_graph_dir(graph_dir).run()
        }
        Commands::Check { symptoms, json } => check(&checker, &symptoms, json),
        Commands::Legend => Ok(render::legend(&mut stdout().lock(), checker.encoding())?),
        Commands::Graph { symptoms, output } => graph(&checker, &symptoms, &output),
        Commands::ExportLegend { output } => {
            let created_at = time::OffsetDateTime::now_utc()
                .format(&time::format_description::well_known::Rfc3339)
                .unwrap_or_else(|_| "".into());
            save_legend(&output, &LegendFile::new(checker.encoding(), created_at))?;
            tracing::info!(output = %output.display(), "legend written");
            Ok(())
        }
        Commands::ExportTable { output } => {
            save_table(&output, checker.table())?;
            tracing::info!(output = %output.display(), "table written");
            Ok(())
        }
    }
}

fn check(checker: &SymptomChecker, symptoms: &str, json: bool) -> Result<()> {
    let report = checker.check_str(symptoms);
    let mut out = stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
        return Ok(());
    }
    render::warnings(&mut out, &report.warnings)?;
    render::report(&mut out, &report)?;
    Ok(())
}

fn graph(checker: &SymptomChecker, symptoms: &str, output: &Path) -> Result<()> {
    let report = checker.check_str(symptoms);
    for warning in &report.warnings {
        tracing::warn!(error = %warning.as_error(), "ignored input");
    }
    if report.status == ReportStatus::EmptyQuery {
        return Err(CheckerError::EmptyQuery.into());
    }
    let Some(layout) = checker.graph(&report) else {
        bail!("cannot visualize graph: no matching conditions found");
    };
    std::fs::write(output, layout.to_svg())?;
    tracing::info!(output = %output.display(), nodes = layout.symptoms.len() + layout.diseases.len(), "graph written");
    Ok(())
}
