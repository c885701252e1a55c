//! JS/WASM-compatible interfaces to the calculator.  Scenarios go in and
//! reports come out as JSON or YAML strings; errors surface as JavaScript
//! exceptions carrying the error message.

use js_sys::Array;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::input::{parse_scenarios, Scenario, ScenarioFormat};
use crate::queueing::erlang_c;
use crate::report::{evaluate_scenarios, render_reports, OutputFormat};
use crate::utils::errors::QueueingError;
use crate::utils::set_panic_hook;

fn to_js(err: QueueingError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// The web `Calculator` holds a list of scenarios and evaluates them on
/// request.  For additional insight on these methods, refer to the
/// associated functions of the `input` and `report` modules.
#[wasm_bindgen]
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Calculator {
    scenarios: Vec<Scenario>,
}

#[wasm_bindgen]
impl Calculator {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        set_panic_hook();
        Self::default()
    }

    /// Replace the scenarios with a JSON list of scenarios.
    pub fn put_json(&mut self, scenarios: &str) -> Result<(), JsValue> {
        self.scenarios = parse_scenarios(scenarios, ScenarioFormat::Json).map_err(to_js)?;
        Ok(())
    }

    /// Replace the scenarios with a YAML list of scenarios.
    pub fn put_yaml(&mut self, scenarios: &str) -> Result<(), JsValue> {
        self.scenarios = parse_scenarios(scenarios, ScenarioFormat::Yaml).map_err(to_js)?;
        Ok(())
    }

    /// Get a JSON representation of the current scenarios.
    pub fn get_json(&self) -> Result<String, JsValue> {
        serde_json::to_string_pretty(&self.scenarios).map_err(|err| to_js(err.into()))
    }

    /// Get a YAML representation of the current scenarios.
    pub fn get_yaml(&self) -> Result<String, JsValue> {
        serde_yaml::to_string(&self.scenarios).map_err(|err| to_js(err.into()))
    }

    /// The number of scenarios held.
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Evaluate every scenario, returning the reports as a JSON string.
    pub fn evaluate_json(&self) -> Result<String, JsValue> {
        render_reports(&evaluate_scenarios(&self.scenarios), OutputFormat::Json).map_err(to_js)
    }

    /// Evaluate every scenario, returning the reports as a YAML string.
    pub fn evaluate_yaml(&self) -> Result<String, JsValue> {
        render_reports(&evaluate_scenarios(&self.scenarios), OutputFormat::Yaml).map_err(to_js)
    }

    /// Evaluate every scenario, returning a JavaScript Array with one JSON
    /// string per report.
    pub fn evaluate_js(&self) -> Result<Array, JsValue> {
        evaluate_scenarios(&self.scenarios)
            .iter()
            .map(|report| {
                serde_json::to_string(report)
                    .map(JsValue::from)
                    .map_err(|err| to_js(err.into()))
            })
            .collect()
    }
}

/// A JS/WASM interface for `erlang_c`.
#[wasm_bindgen]
pub fn wait_probability(offered_load: f64, servers: usize) -> Result<f64, JsValue> {
    erlang_c(offered_load, servers).map_err(to_js)
}
