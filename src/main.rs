use std::path::PathBuf;
use std::time::Duration;

use chrono::Datelike;
use clap::{error::ErrorKind, CommandFactory, Parser};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use btw_report::{
    aggregate, default_output_path, load_settings, quarter_range, render_table, write_report,
    ApiClient, ApiConfig, Result,
};

#[derive(Parser)]
#[command(name = "btw-report")]
#[command(
    version,
    about = "Quarterly BTW report from invoices and expenses",
    long_about = None,
    arg_required_else_help = true
)]
struct Cli {
    /// Year for the report
    #[arg(short, long, default_value_t = current_year())]
    year: i32,

    /// Quarter for the report (1-4)
    #[arg(short, long)]
    quarter: u32,

    /// Records requested per API call (default: per_page from settings, 100)
    #[arg(short, long)]
    limit: Option<u32>,

    /// Output file (default: reports/report-{year}-Q{quarter}.md)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Settings file (default: config.toml in the user config directory)
    #[arg(short = 'C', long, env = "BTW_REPORT_CONFIG")]
    config: Option<PathBuf>,

    /// Also print the table to stdout
    #[arg(long)]
    print: bool,
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}

fn main() {
    // Real environment variables take precedence over .env
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "btw_report=info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = load_settings(cli.config.as_deref())?;
    let api_config = ApiConfig::from_env(Duration::from_secs(settings.api.timeout_secs))?;

    if !(1..=4).contains(&cli.quarter) {
        Cli::command()
            .error(
                ErrorKind::ValueValidation,
                format!(
                    "invalid value '{}' for '--quarter <QUARTER>': must be between 1 and 4",
                    cli.quarter
                ),
            )
            .exit();
    }

    let range = quarter_range(cli.year, cli.quarter)?;
    let per_page = cli.limit.unwrap_or(settings.api.per_page);
    let output = cli.output.unwrap_or_else(|| {
        default_output_path(&settings.report.output_dir, cli.year, cli.quarter)
    });

    info!(
        quarter = %range.label(),
        start = %range.start,
        end = %range.end,
        per_page,
        "building report"
    );

    let client = ApiClient::new(api_config);
    let invoices = client.fetch_invoices(per_page)?;
    let expenses = client.fetch_expenses(per_page)?;

    let report = aggregate(&range, &invoices, &expenses)?;
    let table = render_table(&report, &settings.report.currency_symbol);
    write_report(&output, &table)?;

    if cli.print {
        println!("{table}");
        println!();
    }
    println!("Report has been written to {}", output.display());

    Ok(())
}
