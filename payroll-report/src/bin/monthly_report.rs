use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use payroll_core::{PayFrequency, SalaryRepository};
use payroll_crypto::FieldCipher;
use payroll_db_sqlite::SqliteSalaryRepository;
use payroll_report::write_monthly_report;

/// Export one month of stored payroll runs as a CSV report.
#[derive(Parser, Debug)]
#[command(name = "payroll-monthly-report")]
#[command(version, about, long_about = None)]
struct Args {
    /// SQLite database URL (e.g. sqlite:salaries.db)
    #[arg(short, long)]
    database: String,

    /// Report year
    #[arg(short, long)]
    year: i32,

    /// Report month (1-12)
    #[arg(short, long)]
    month: u32,

    /// Restrict to one pay frequency (monthly, weekly, daily)
    #[arg(short, long)]
    frequency: Option<String>,

    /// Output CSV path; stdout when omitted
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Master key for field encryption; falls back to $PAYROLL_MASTER_KEY.
    /// The report reads only plaintext columns, so any key will do here.
    #[arg(long)]
    master_key: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    if !(1..=12).contains(&args.month) {
        bail!("month must be between 1 and 12, got {}", args.month);
    }

    let frequency = match args.frequency.as_deref() {
        Some(raw) => match PayFrequency::parse(raw) {
            Some(frequency) => Some(frequency),
            None => bail!("unknown frequency '{raw}' (expected monthly, weekly, or daily)"),
        },
        None => None,
    };

    let master_key = args
        .master_key
        .clone()
        .or_else(|| std::env::var("PAYROLL_MASTER_KEY").ok())
        .unwrap_or_default();

    let repo = SqliteSalaryRepository::new(&args.database, FieldCipher::new(&master_key))
        .await
        .with_context(|| format!("Failed to connect to database: {}", args.database))?;

    let rows = repo
        .monthly_report(args.year, args.month, frequency)
        .await
        .context("Failed to build monthly report")?;
    tracing::info!(
        year = args.year,
        month = args.month,
        rows = rows.len(),
        "built monthly report"
    );

    match &args.out {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create: {}", path.display()))?;
            write_monthly_report(file, &rows)
                .with_context(|| format!("Failed to write report: {}", path.display()))?;
            println!("Report written to {} ({} rows)", path.display(), rows.len());
        }
        None => {
            write_monthly_report(io::stdout().lock(), &rows)
                .context("Failed to write report to stdout")?;
        }
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
