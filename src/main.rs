use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use mmc::input::load_scenarios;
use mmc::queueing::{evaluate, min_servers, Traffic};
use mmc::report::{evaluate_scenarios, render_evaluation, render_reports, OutputFormat};
use mmc::shell::Session;
use mmc::utils::errors::QueueingError;

/// M/M/c queue calculator.  Without arguments, starts an interactive
/// session.
#[derive(Debug, Parser)]
#[command(name = "mmc", version, about)]
struct Cli {
    /// Offered load a = λ/μ, in Erlangs.
    #[arg(
        short = 'a',
        long,
        value_name = "ERLANGS",
        allow_negative_numbers = true,
        conflicts_with_all = ["arrival_rate", "service_rate"]
    )]
    traffic: Option<f64>,

    /// Arrival rate λ, in arrivals per unit of time.
    #[arg(long, value_name = "RATE", allow_negative_numbers = true, requires = "service_rate")]
    arrival_rate: Option<f64>,

    /// Service rate μ of each server, in completions per unit of time.
    #[arg(long, value_name = "RATE", allow_negative_numbers = true, requires = "arrival_rate")]
    service_rate: Option<f64>,

    /// Number of identical servers c.
    #[arg(short = 'c', long, value_name = "N")]
    servers: Option<usize>,

    /// Find the fewest servers keeping P(wait) at or below this value.
    #[arg(long, value_name = "PROBABILITY", requires = "traffic", conflicts_with = "servers")]
    target_wait: Option<f64>,

    /// Evaluate every scenario in a YAML or JSON file.
    #[arg(
        long,
        value_name = "FILE",
        conflicts_with_all = ["traffic", "arrival_rate", "service_rate", "servers", "target_wait"]
    )]
    scenarios: Option<PathBuf>,

    /// Output format for non-interactive use.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Staffing {
    offered_load: f64,
    target_wait_probability: f64,
    servers: usize,
}

/// What one invocation asks for, once the flag combination is checked.
#[derive(Debug, PartialEq)]
enum Request {
    Interactive,
    Evaluate(Traffic),
    Staff { offered_load: f64, target: f64 },
    Batch(PathBuf),
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_env("MMC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let request = match request(&cli) {
        Ok(request) => request,
        Err(err) => err.exit(),
    };
    let stdout = io::stdout();
    match execute(request, cli.format, &mut stdout.lock()) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn request(cli: &Cli) -> Result<Request, clap::Error> {
    if let Some(path) = &cli.scenarios {
        return Ok(Request::Batch(path.clone()));
    }
    if let (Some(offered_load), Some(target)) = (cli.traffic, cli.target_wait) {
        return Ok(Request::Staff {
            offered_load,
            target,
        });
    }
    match (cli.traffic, cli.arrival_rate, cli.service_rate, cli.servers) {
        (None, None, None, None) => Ok(Request::Interactive),
        (Some(offered_load), None, None, Some(servers)) => {
            Ok(Request::Evaluate(Traffic::RatioOnly {
                offered_load,
                servers,
            }))
        }
        (None, Some(arrival_rate), Some(service_rate), Some(servers)) => {
            Ok(Request::Evaluate(Traffic::RatesAndCount {
                arrival_rate,
                service_rate,
                servers,
            }))
        }
        _ => Err(Cli::command().error(
            ErrorKind::MissingRequiredArgument,
            "give --servers together with --traffic, or with --arrival-rate and --service-rate",
        )),
    }
}

/// Carry out a request, writing reports to `out`.  Returns the exit code:
/// 1 when any scenario in a batch was rejected, 0 otherwise.
fn execute(
    request: Request,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<u8, QueueingError> {
    match request {
        Request::Interactive => {
            let stdin = io::stdin();
            Session::new(stdin.lock(), out).run()?;
        }
        Request::Evaluate(traffic) => {
            let evaluation = evaluate(&traffic)?;
            let rendered = render_evaluation(&evaluation, traffic.has_rates(), format)?;
            writeln!(out, "{}", rendered)?;
        }
        Request::Staff {
            offered_load,
            target,
        } => {
            let staffing = Staffing {
                offered_load,
                target_wait_probability: target,
                servers: min_servers(offered_load, target)?,
            };
            let rendered = match format {
                OutputFormat::Text => format!("c = {}", staffing.servers),
                OutputFormat::Json => serde_json::to_string_pretty(&staffing)?,
                OutputFormat::Yaml => serde_yaml::to_string(&staffing)?,
            };
            writeln!(out, "{}", rendered)?;
        }
        Request::Batch(path) => {
            let reports = evaluate_scenarios(&load_scenarios(&path)?);
            writeln!(out, "{}", render_reports(&reports, format)?)?;
            if reports.iter().any(|report| report.is_rejected()) {
                return Ok(1);
            }
        }
    }
    Ok(0)
}
