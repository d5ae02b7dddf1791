use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Validate invoice inputs and print a one-line VAT summary.
#[derive(Parser, Debug)]
#[command(name = "factura", version, about)]
struct Cli {
    /// Invoice date (YYYY-MM-DD).
    #[arg(long, default_value = "2026-01-05")]
    date: String,

    /// Unit price; `,` or `.` as decimal separator.
    #[arg(long, default_value = "  19.99 ")]
    price: String,

    /// Number of units invoiced.
    #[arg(long, default_value_t = 3, allow_hyphen_values = true)]
    units: i32,

    /// VAT percentage, with or without a trailing `%`.
    #[arg(long, default_value = "21")]
    vat: String,

    /// Print the summary as JSON instead of the text line.
    #[arg(long)]
    json: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let summary = match factura::summarize_invoice(&cli.date, &cli.price, cli.units, &cli.vat) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize invoice summary");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("Utilidades de Calidad del Software - Practica 4");
        println!("Ejemplo: {summary}");
    }
    ExitCode::SUCCESS
}
