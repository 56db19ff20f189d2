use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use budget_ledger::cli::{
    handle_demo_command, handle_report_command, handle_transactions_command, LedgerArgs,
    ListFormat, ReportFormat,
};
use budget_ledger::config::Settings;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Single-category budget ledger with overrun detection",
    long_about = "Tracks one budget category's allocation, income and expenses, \
                  reports the running balance and flags when expenses exceed \
                  the original allocation."
)]
struct Cli {
    /// Path to a JSON settings file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the sample Marketing ledger and print its report and history
    Demo,

    /// Print the status report for a ledger
    Report {
        #[command(flatten)]
        ledger: LedgerArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ReportFormat,
    },

    /// List a ledger's transactions
    #[command(alias = "txn")]
    Transactions {
        #[command(flatten)]
        ledger: LedgerArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ListFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Some(Commands::Demo) => handle_demo_command(&settings, &mut out)?,
        Some(Commands::Report { ledger, format }) => {
            handle_report_command(&settings, &ledger, format, &mut out)?
        }
        Some(Commands::Transactions {
            ledger,
            format,
            pretty,
        }) => handle_transactions_command(&settings, &ledger, format, pretty, &mut out)?,
        None => {
            writeln!(out, "budget - single-category budget ledger")?;
            writeln!(out)?;
            writeln!(out, "Run 'budget --help' for usage information.")?;
            writeln!(out, "Run 'budget demo' to see a sample report.")?;
        }
    }

    Ok(())
}
