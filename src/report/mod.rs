//! The report module renders evaluations for people and for programs.  Text
//! output follows the calculator's conventions: the wait probability to six
//! decimals with a percentage, and the time-based measures to four
//! decimals.  JSON and YAML output serialize the evaluation structures
//! directly.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::input::Scenario;
use crate::queueing::{evaluate, Derived, Evaluation};
use crate::utils::errors::QueueingError;

/// Output encodings for non-interactive use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

/// The result of evaluating a single scenario.  Invalid parameters reject
/// the scenario without affecting the rest of a batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Outcome {
    Evaluated(Evaluation),
    Rejected { reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioReport {
    id: String,
    /// Whether the scenario supplied rates, rather than just a ratio
    from_rates: bool,
    outcome: Outcome,
}

impl ScenarioReport {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self.outcome, Outcome::Rejected { .. })
    }
}

/// Evaluate every scenario, in order.
pub fn evaluate_scenarios(scenarios: &[Scenario]) -> Vec<ScenarioReport> {
    scenarios
        .iter()
        .map(|scenario| {
            let outcome = match evaluate(scenario.traffic()) {
                Ok(evaluation) => Outcome::Evaluated(evaluation),
                Err(err) => {
                    warn!(id = scenario.id(), %err, "scenario rejected");
                    Outcome::Rejected {
                        reason: err.to_string(),
                    }
                }
            };
            ScenarioReport {
                id: scenario.id().to_string(),
                from_rates: scenario.traffic().has_rates(),
                outcome,
            }
        })
        .collect()
}

/// The calculator's text report, one line per entry.  With `from_rates`,
/// the derived offered load is echoed first.
pub fn text_lines(evaluation: &Evaluation, from_rates: bool) -> Vec<String> {
    let mut lines = Vec::new();
    if from_rates {
        lines.push(format!(
            "a = λ/μ = {:.6} Erlangs",
            evaluation.offered_load()
        ));
    }
    let p_wait = evaluation.wait_probability();
    lines.push(format!("P(wait) = {:.6}  ({:.2}%)", p_wait, p_wait * 100.0));
    match evaluation.derived() {
        Derived::Available(metrics) => {
            lines.push(format!("ρ  = {:.4}", metrics.utilization()));
            lines.push(format!("Wq = {:.4} time units", metrics.mean_queue_time()));
            lines.push(format!("Lq = {:.4} customers", metrics.mean_queue_length()));
            lines.push(format!("W  = {:.4} time units", metrics.mean_system_time()));
            lines.push(format!("L  = {:.4} customers", metrics.mean_system_length()));
        }
        Derived::RatesUnknown => {
            lines.push(String::from(
                "Note: computing Wq, Lq, W and L requires both λ and μ.",
            ));
        }
        Derived::Saturated => {
            lines.push(String::from(
                "Warning: a ≥ c, the system is unstable and the queue grows without bound.",
            ));
        }
    }
    lines
}

/// Render a single evaluation.
pub fn render_evaluation(
    evaluation: &Evaluation,
    from_rates: bool,
    format: OutputFormat,
) -> Result<String, QueueingError> {
    Ok(match format {
        OutputFormat::Text => text_lines(evaluation, from_rates).join("\n"),
        OutputFormat::Json => serde_json::to_string_pretty(evaluation)?,
        OutputFormat::Yaml => serde_yaml::to_string(evaluation)?,
    })
}

/// Render a batch of scenario reports.
pub fn render_reports(
    reports: &[ScenarioReport],
    format: OutputFormat,
) -> Result<String, QueueingError> {
    Ok(match format {
        OutputFormat::Text => reports
            .iter()
            .map(|report| match &report.outcome {
                Outcome::Evaluated(evaluation) => {
                    let mut lines = vec![format!("[{}]", report.id)];
                    lines.extend(text_lines(evaluation, report.from_rates));
                    lines.join("\n")
                }
                Outcome::Rejected { reason } => format!("[{}] rejected: {}", report.id, reason),
            })
            .collect::<Vec<_>>()
            .join("\n\n"),
        OutputFormat::Json => serde_json::to_string_pretty(reports)?,
        OutputFormat::Yaml => serde_yaml::to_string(reports)?,
    })
}
