use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use payroll_core::{NewSalaryRecord, PayrollCalculator, PayrollInput, SalaryRepository};
use payroll_crypto::FieldCipher;
use payroll_db_sqlite::SqliteSalaryRepository;
use payroll_report::Payslip;

/// Compute a payroll breakdown and render the payslip.
///
/// Reads a JSON calculation request (`basicSalary`, `transportAllowance`,
/// `includeMedical`, ...), prints the payslip, and optionally stores the run
/// in a SQLite database so the payslip can be regenerated later without
/// recomputation.
#[derive(Parser, Debug)]
#[command(name = "payroll-payslip")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the JSON file with the calculation input
    #[arg(short, long)]
    input: PathBuf,

    /// Employee identifier
    #[arg(long)]
    employee_id: String,

    /// Employee display name for the payslip header
    #[arg(long, default_value = "Employee")]
    employee_name: String,

    /// Designation shown on the payslip
    #[arg(long)]
    designation: Option<String>,

    /// Department shown on the payslip
    #[arg(long)]
    department: Option<String>,

    /// Pay period, as the last day of the period (YYYY-MM-DD)
    #[arg(long)]
    pay_period: NaiveDate,

    /// Write the payslip here instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// SQLite database URL to store the run (e.g. sqlite:salaries.db?mode=rwc)
    #[arg(short, long)]
    database: Option<String>,

    /// Run database migrations before storing
    #[arg(short, long, default_value_t = false)]
    migrate: bool,

    /// Master key for field encryption; falls back to $PAYROLL_MASTER_KEY
    #[arg(long)]
    master_key: Option<String>,

    /// Recorded as the creator of the stored run
    #[arg(long, default_value = "payroll-cli")]
    created_by: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let raw = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read: {}", args.input.display()))?;
    let input: PayrollInput = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse input JSON: {}", args.input.display()))?;

    let breakdown = PayrollCalculator::default().calculate(&input);
    tracing::info!(
        employee = %args.employee_id,
        gross = %breakdown.gross_salary,
        net = %breakdown.net_salary,
        "computed payroll breakdown"
    );

    let payslip = Payslip {
        employee_name: args.employee_name.clone(),
        employee_id: args.employee_id.clone(),
        designation: args.designation.clone(),
        department: args.department.clone(),
        pay_period: args.pay_period,
        breakdown: breakdown.clone(),
    };
    let rendered = payslip.render();

    match &args.out {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("Failed to write payslip: {}", path.display()))?;
            println!("Payslip written to {}", path.display());
        }
        None => print!("{rendered}"),
    }

    if let Some(database) = &args.database {
        let master_key = args
            .master_key
            .clone()
            .or_else(|| std::env::var("PAYROLL_MASTER_KEY").ok())
            .context("storing salaries needs --master-key or PAYROLL_MASTER_KEY")?;

        let repo = SqliteSalaryRepository::new(database, FieldCipher::new(&master_key))
            .await
            .with_context(|| format!("Failed to connect to database: {database}"))?;

        if args.migrate {
            repo.run_migrations()
                .await
                .context("Failed to run migrations")?;
        }

        let stored = repo
            .create_salary(NewSalaryRecord {
                employee_id: args.employee_id.clone(),
                pay_period: args.pay_period,
                breakdown,
                created_by: args.created_by.clone(),
            })
            .await
            .context("Failed to store salary")?;

        println!(
            "Stored salary {} for {} ({})",
            stored.id, stored.employee_id, stored.pay_period
        );
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
