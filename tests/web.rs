use mmc::web::{wait_probability, Calculator};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

wasm_bindgen_test_configure!(run_in_browser);

#[test]
#[wasm_bindgen_test]
fn calculator_evaluates_json_scenarios() {
    let scenarios = r#"
[
    {
        "id": "front-desk",
        "traffic": {
            "ratesAndCount": {
                "arrivalRate": 4.0,
                "serviceRate": 2.0,
                "servers": 3
            }
        }
    },
    {
        "id": "help-line",
        "traffic": {
            "ratioOnly": {
                "offeredLoad": 12.0,
                "servers": 10
            }
        }
    }
]"#;
    let mut calculator = Calculator::new();
    assert!(calculator.is_empty());
    calculator.put_json(scenarios).unwrap();
    assert_eq![calculator.len(), 2];

    let reports: serde_json::Value =
        serde_json::from_str(&calculator.evaluate_json().unwrap()).unwrap();
    let first = &reports[0]["outcome"]["evaluated"];
    let p_wait = first["waitProbability"].as_f64().unwrap();
    assert!((p_wait - 4.0 / 9.0).abs() < 1e-9);
    let mean_queue_time = first["derived"]["available"]["meanQueueTime"]
        .as_f64()
        .unwrap();
    assert!((mean_queue_time - 2.0 / 9.0).abs() < 1e-9);
    assert_eq![reports[1]["outcome"]["evaluated"]["derived"], "saturated"];
}

#[test]
#[wasm_bindgen_test]
fn calculator_round_trips_yaml() {
    let mut calculator = Calculator::new();
    calculator
        .put_yaml(
            r#"
- id: kitchen
  traffic:
    ratioOnly:
      offeredLoad: 1.5
      servers: 2
"#,
        )
        .unwrap();
    let yaml = calculator.get_yaml().unwrap();
    assert!(yaml.contains("id: kitchen"));

    let mut copy = Calculator::new();
    copy.put_json(&calculator.get_json().unwrap()).unwrap();
    assert_eq![copy.len(), 1];

    let reports = copy.evaluate_yaml().unwrap();
    assert!(reports.contains("waitProbability"));
    assert!(reports.contains("ratesUnknown"));
}

#[test]
#[wasm_bindgen_test]
fn direct_wait_probability() {
    let p_wait = wait_probability(2.0, 3).unwrap();
    assert!((p_wait - 0.4444).abs() < 1e-4);
    assert_eq![wait_probability(3.0, 3).unwrap(), 1.0];
}

// JsValue strings only exist on a wasm32 host
#[wasm_bindgen_test]
fn calculator_evaluates_to_js_array() {
    let mut calculator = Calculator::new();
    calculator
        .put_json(
            r#"[
    {"id": "ok", "traffic": {"ratioOnly": {"offeredLoad": 2.0, "servers": 3}}},
    {"id": "empty", "traffic": {"ratioOnly": {"offeredLoad": 1.0, "servers": 0}}}
]"#,
        )
        .unwrap();
    let reports = calculator.evaluate_js().unwrap();
    assert_eq![reports.length(), 2];

    let first: serde_json::Value =
        serde_json::from_str(&reports.get(0).as_string().unwrap()).unwrap();
    assert_eq![first["id"], "ok"];
    let p_wait = first["outcome"]["evaluated"]["waitProbability"]
        .as_f64()
        .unwrap();
    assert!((p_wait - 4.0 / 9.0).abs() < 1e-9);

    let second: serde_json::Value =
        serde_json::from_str(&reports.get(1).as_string().unwrap()).unwrap();
    assert!(second["outcome"]["rejected"]["reason"].is_string());
}
