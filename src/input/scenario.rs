use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::queueing::Traffic;
use crate::utils::errors::QueueingError;

/// A named system description, as read from a scenario file.
///
/// In YAML:
///
/// ```yaml
/// - id: front-desk
///   traffic:
///     ratioOnly:
///       offeredLoad: 2.0
///       servers: 3
/// - id: kitchen
///   traffic:
///     ratesAndCount:
///       arrivalRate: 4.0
///       serviceRate: 2.0
///       servers: 3
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    id: String,
    traffic: Traffic,
}

impl Scenario {
    pub fn new(id: String, traffic: Traffic) -> Self {
        Self { id, traffic }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn traffic(&self) -> &Traffic {
        &self.traffic
    }
}

/// The serialization formats accepted for scenario files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioFormat {
    Json,
    Yaml,
}

impl ScenarioFormat {
    /// JSON for a `.json` extension, YAML for anything else
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ScenarioFormat::Json,
            _ => ScenarioFormat::Yaml,
        }
    }
}

/// Parse a list of scenarios from text in the given format.
pub fn parse_scenarios(text: &str, format: ScenarioFormat) -> Result<Vec<Scenario>, QueueingError> {
    Ok(match format {
        ScenarioFormat::Json => serde_json::from_str(text)?,
        ScenarioFormat::Yaml => serde_yaml::from_str(text)?,
    })
}

/// Read a list of scenarios from a file, choosing the format by extension.
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>, QueueingError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let scenarios = parse_scenarios(&text, ScenarioFormat::from_path(path))?;
    info!(
        path = %path.display(),
        count = scenarios.len(),
        "loaded scenarios"
    );
    Ok(scenarios)
}
