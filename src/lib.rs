//! # Overview
//! "mmc" evaluates M/M/c queues: Poisson arrivals, exponential service
//! times, and `c` identical servers sharing one queue.
//!
//! This repository contains:
//!
//! * Queueing formulas - Erlang-B, Erlang-C, the derived steady-state
//! measures (utilization, Wq, Lq, W, L), service levels, and a staffing
//! search for the fewest servers meeting a wait-probability target.
//! * Input handling, for parsing interactive answers and loading named
//! scenarios from YAML or JSON files.
//! * Reporting, for rendering evaluations as text, JSON, or YAML.
//! * An interactive shell, driving prompt-based calculations over any
//! reader and writer.
//! * WASM bindings, for browser-based use of the calculator.
//!
//! A saturated system (offered load at or above the server count) is a
//! valid result rather than an error: the wait probability is exactly 1
//! and no steady-state measures are produced.
pub mod input;
pub mod queueing;
pub mod report;
pub mod shell;
pub mod utils;
pub mod web;
