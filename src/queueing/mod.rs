//! The queueing module evaluates M/M/c systems: Poisson arrivals,
//! exponential service times, and `c` identical servers sharing one FIFO
//! queue.  The Erlang-C probability of waiting is always available; the
//! time-based measures (Wq, Lq, W, L) additionally require the arrival and
//! service rates individually, which is captured by the `Traffic` variant
//! supplied to `evaluate`.

pub mod erlang;
pub mod metrics;
pub mod staffing;

pub use self::erlang::{erlang_b, erlang_c};
pub use self::metrics::Metrics;
pub use self::staffing::min_servers;

use serde::{Deserialize, Serialize};

use crate::utils::errors::QueueingError;
use metrics::validate_rates;

/// The inputs to an M/M/c evaluation.  Either the offered load is known
/// only as a ratio, or the arrival and service rates are known separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Traffic {
    /// Offered load `a = lambda / mu` in Erlangs, and the server count
    #[serde(rename_all = "camelCase")]
    RatioOnly { offered_load: f64, servers: usize },
    /// Arrival rate `lambda`, per-server service rate `mu`, and the server
    /// count
    #[serde(rename_all = "camelCase")]
    RatesAndCount {
        arrival_rate: f64,
        service_rate: f64,
        servers: usize,
    },
}

impl Traffic {
    pub fn servers(&self) -> usize {
        match self {
            Traffic::RatioOnly { servers, .. } | Traffic::RatesAndCount { servers, .. } => *servers,
        }
    }

    /// Whether the arrival and service rates were supplied individually
    pub fn has_rates(&self) -> bool {
        matches!(self, Traffic::RatesAndCount { .. })
    }

    /// Saturation is decided on the rates themselves when they are known,
    /// since `lambda / mu` can round to just below `c` while `c * mu <=
    /// lambda`.
    fn is_saturated(&self, offered_load: f64) -> bool {
        let servers = self.servers() as f64;
        match self {
            Traffic::RatioOnly { .. } => offered_load >= servers,
            Traffic::RatesAndCount {
                arrival_rate,
                service_rate,
                ..
            } => offered_load >= servers || servers * service_rate <= *arrival_rate,
        }
    }

    /// The offered load in Erlangs.  For `RatesAndCount` this fails when the
    /// service rate is not positive, before any division happens.
    pub fn offered_load(&self) -> Result<f64, QueueingError> {
        match self {
            Traffic::RatioOnly { offered_load, .. } => Ok(*offered_load),
            Traffic::RatesAndCount {
                arrival_rate,
                service_rate,
                ..
            } => {
                validate_rates(*arrival_rate, *service_rate)?;
                Ok(arrival_rate / service_rate)
            }
        }
    }
}

/// What is known beyond the probability of waiting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Derived {
    /// The system is stable and both rates were supplied
    Available(Metrics),
    /// Only the offered load was supplied, so no time scale is known
    RatesUnknown,
    /// The offered load meets or exceeds the server count; the queue grows
    /// without bound and no steady-state measures exist
    Saturated,
}

/// The result of evaluating one M/M/c system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    offered_load: f64,
    servers: usize,
    wait_probability: f64,
    derived: Derived,
}

impl Evaluation {
    pub fn offered_load(&self) -> f64 {
        self.offered_load
    }

    pub fn servers(&self) -> usize {
        self.servers
    }

    /// The Erlang-C probability that an arrival must wait
    pub fn wait_probability(&self) -> f64 {
        self.wait_probability
    }

    /// Utilization per server, `a / c`.  Values at or above 1 indicate
    /// saturation.
    pub fn utilization(&self) -> f64 {
        self.offered_load / self.servers as f64
    }

    pub fn derived(&self) -> &Derived {
        &self.derived
    }

    pub fn metrics(&self) -> Option<&Metrics> {
        match &self.derived {
            Derived::Available(metrics) => Some(metrics),
            _ => None,
        }
    }

    pub fn is_saturated(&self) -> bool {
        self.derived == Derived::Saturated
    }
}

/// Evaluate an M/M/c system.  Saturation (`a >= c`) is a valid result,
/// reported through `Derived::Saturated` with a wait probability of 1.
///
/// # Errors
///
/// `InvalidArgument` for a negative offered load or arrival rate, a
/// non-positive service rate, or zero servers.
///
/// # Example
///
/// ```
/// use mmc::queueing::{evaluate, Traffic};
///
/// let evaluation = evaluate(&Traffic::RatesAndCount {
///     arrival_rate: 4.0,
///     service_rate: 2.0,
///     servers: 3,
/// })
/// .unwrap();
/// let metrics = evaluation.metrics().unwrap();
/// assert!((metrics.mean_queue_time() - 2.0 / 9.0).abs() < 1e-9);
/// ```
pub fn evaluate(traffic: &Traffic) -> Result<Evaluation, QueueingError> {
    let servers = traffic.servers();
    let offered_load = traffic.offered_load()?;
    let wait_probability = erlang_c(offered_load, servers)?;
    if traffic.is_saturated(offered_load) {
        return Ok(Evaluation {
            offered_load,
            servers,
            wait_probability: 1.0,
            derived: Derived::Saturated,
        });
    }
    let derived = match traffic {
        Traffic::RatioOnly { .. } => Derived::RatesUnknown,
        Traffic::RatesAndCount {
            arrival_rate,
            service_rate,
            servers,
        } => Derived::Available(Metrics::compute(
            wait_probability,
            *arrival_rate,
            *service_rate,
            *servers,
        )?),
    };
    Ok(Evaluation {
        offered_load,
        servers,
        wait_probability,
        derived,
    })
}
