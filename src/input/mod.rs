//! The input module turns user-supplied text into validated queueing
//! parameters.  Interactive entry accepts either a comma or a period as the
//! decimal separator.  Batch entry reads named scenarios from YAML or JSON
//! files.  Parsing failures are reported as `QueueingError::ParseError`,
//! which callers may recover from by asking again; range checks on the
//! parsed values belong to the queueing module.

pub mod scenario;

pub use scenario::{load_scenarios, parse_scenarios, Scenario, ScenarioFormat};

use crate::utils::errors::QueueingError;

/// The two ways of describing a system interactively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Enter the offered load `a` and the server count `c`
    Ratio,
    /// Enter the arrival rate, the per-server service rate, and `c`
    Rates,
}

impl Mode {
    /// Interpret a menu selection, `1` or `2`
    pub fn from_selection(text: &str) -> Option<Mode> {
        match text.trim() {
            "1" => Some(Mode::Ratio),
            "2" => Some(Mode::Rates),
            _ => None,
        }
    }
}

/// Parse a real number, accepting `,` as well as `.` as the decimal
/// separator.  Non-finite values (`inf`, `NaN`) are rejected.
pub fn parse_decimal(text: &str) -> Result<f64, QueueingError> {
    let trimmed = text.trim();
    let value: f64 = trimmed
        .replace(',', ".")
        .parse()
        .map_err(|_| QueueingError::parse(trimmed, "a decimal number"))?;
    if !value.is_finite() {
        return Err(QueueingError::parse(trimmed, "a finite decimal number"));
    }
    Ok(value)
}

/// Parse a server count, which must be a positive integer.
pub fn parse_server_count(text: &str) -> Result<usize, QueueingError> {
    let trimmed = text.trim();
    match trimmed.parse::<usize>() {
        Ok(0) | Err(_) => Err(QueueingError::parse(trimmed, "an integer > 0")),
        Ok(servers) => Ok(servers),
    }
}

/// Whether an answer to a yes/no question is affirmative.  Accepts `s` and
/// `sim` alongside `y` and `yes`, in any case.
pub fn is_affirmative(text: &str) -> bool {
    matches!(
        text.trim().to_lowercase().as_str(),
        "s" | "sim" | "y" | "yes"
    )
}
