use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::Context;
use br_down_payment::{
    CurrencyFormat, RawSimulationInput, SimulationError, prepare_input, render_report, simulate,
};
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Real estate down-payment savings simulator.
///
/// Values use Brazilian notation: `.` groups thousands and `,` separates decimals.
/// Any value not given as a flag is asked for interactively.
#[derive(Debug, Parser)]
#[command(name = "br-entrada", version, about)]
struct Cli {
    /// Property value, e.g. 350.000,00
    #[arg(short = 'p', long)]
    property_value: Option<String>,

    /// Down-payment percentage, e.g. 20
    #[arg(short = 'd', long)]
    down_payment: Option<String>,

    /// Contract duration in years
    #[arg(short = 'y', long)]
    years: Option<String>,

    /// Annual interest rate percentage, between 5 and 12, e.g. 8,5
    #[arg(short = 'r', long)]
    rate: Option<String>,

    /// Print the result as JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let default_filter = if verbose {
        "br_down_payment=debug,br_entrada=debug,info"
    } else {
        "br_down_payment=info,br_entrada=info,warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn prompt(label: &str, given: Option<String>, lines: &mut impl BufRead) -> anyhow::Result<String> {
    if let Some(value) = given {
        return Ok(value);
    }

    let mut stdout = io::stdout();
    write!(stdout, "  → {label}: ")?;
    stdout.flush()?;

    let mut line = String::new();
    let read = lines
        .read_line(&mut line)
        .with_context(|| format!("failed to read {label}"))?;
    if read == 0 {
        anyhow::bail!("input closed before {label} was entered");
    }
    Ok(line.trim().to_string())
}

fn collect_input(cli: &Cli) -> anyhow::Result<RawSimulationInput> {
    let interactive = cli.property_value.is_none()
        || cli.down_payment.is_none()
        || cli.years.is_none()
        || cli.rate.is_none();
    if interactive {
        println!("\nPlease enter:");
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock();

    Ok(RawSimulationInput {
        property_value: prompt("Property value (R$)", cli.property_value.clone(), &mut lines)?,
        down_payment_percent: prompt("Down payment (%)", cli.down_payment.clone(), &mut lines)?,
        contract_years: prompt("Contract duration (years)", cli.years.clone(), &mut lines)?,
        annual_interest_rate: prompt("Annual interest rate (%)", cli.rate.clone(), &mut lines)?,
    })
}

/// Exit code and the single user-facing block describing why input was refused.
fn rejection(err: &SimulationError) -> (u8, String) {
    match err {
        SimulationError::Validation(violations) => {
            let mut message = String::from("\nVALIDATION ERROR:\n");
            for violation in violations {
                message.push_str(&format!("  - {violation}\n"));
            }
            (1, message)
        }
        SimulationError::Format(err) => (2, format!("\nFORMAT ERROR:\n  {err}\n")),
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let raw = collect_input(&cli)?;
    tracing::debug!(?raw, "collected input");

    let input = match prepare_input(&raw) {
        Ok(input) => input,
        Err(err) => {
            tracing::debug!(%err, "input rejected");
            let (code, message) = rejection(&err);
            eprint!("{message}");
            return Ok(ExitCode::from(code));
        }
    };

    let result = simulate(&input);
    tracing::info!(
        contract_years = input.contract_years,
        base_installment = %result.base_monthly_installment.round_dp(2),
        "simulation complete"
    );

    if cli.json {
        let json = serde_json::to_string_pretty(&result).context("failed to serialize result")?;
        println!("{json}");
    } else {
        print!("\n{}", render_report(&input, &result, &CurrencyFormat::brazilian()));
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            tracing::error!("{err:#}");
            eprintln!("\nUNEXPECTED ERROR:\n{err:#}");
            ExitCode::FAILURE
        }
    }
}
