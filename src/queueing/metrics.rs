use serde::{Deserialize, Serialize};

use crate::utils::errors::QueueingError;

/// Steady-state performance measures of a stable M/M/c queue.  These are
/// only available when the arrival rate and per-server service rate are
/// known individually - the offered load alone does not fix a time scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    /// Fraction of each server's capacity in use, rho = a / c
    utilization: f64,
    /// Mean time spent waiting in the queue, Wq
    mean_queue_time: f64,
    /// Mean number waiting in the queue, Lq
    mean_queue_length: f64,
    /// Mean time spent in the system, W
    mean_system_time: f64,
    /// Mean number in the system, L
    mean_system_length: f64,
    wait_probability: f64,
    /// Spare capacity, c * mu - lambda
    drain_rate: f64,
}

pub(crate) fn validate_rates(arrival_rate: f64, service_rate: f64) -> Result<(), QueueingError> {
    if !service_rate.is_finite() || service_rate <= 0.0 {
        return Err(QueueingError::invalid(format!(
            "service rate must be finite and > 0, got {}",
            service_rate
        )));
    }
    if !arrival_rate.is_finite() || arrival_rate < 0.0 {
        return Err(QueueingError::invalid(format!(
            "arrival rate must be finite and >= 0, got {}",
            arrival_rate
        )));
    }
    Ok(())
}

impl Metrics {
    /// Derive the queue measures from the probability of waiting, as
    /// produced by `erlang_c`.
    ///
    /// ```text
    /// Wq = P(wait) / (c * mu - lambda)
    /// Lq = lambda * Wq
    /// W  = Wq + 1 / mu
    /// L  = lambda * W
    /// ```
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for a non-positive service rate, a negative
    /// arrival rate, zero servers, or a probability outside [0, 1].
    /// `Unstable` when `c * mu <= lambda`, where the queue has no steady
    /// state.
    pub fn compute(
        wait_probability: f64,
        arrival_rate: f64,
        service_rate: f64,
        servers: usize,
    ) -> Result<Self, QueueingError> {
        validate_rates(arrival_rate, service_rate)?;
        if servers == 0 {
            return Err(QueueingError::invalid("server count must be >= 1"));
        }
        if !(0.0..=1.0).contains(&wait_probability) {
            return Err(QueueingError::invalid(format!(
                "wait probability must lie in [0, 1], got {}",
                wait_probability
            )));
        }
        let capacity = servers as f64 * service_rate;
        if capacity <= arrival_rate {
            return Err(QueueingError::Unstable {
                capacity,
                arrival_rate,
            });
        }
        let drain_rate = capacity - arrival_rate;
        let mean_queue_time = wait_probability / drain_rate;
        let mean_system_time = mean_queue_time + 1.0 / service_rate;
        Ok(Self {
            utilization: arrival_rate / capacity,
            mean_queue_time,
            mean_queue_length: arrival_rate * mean_queue_time,
            mean_system_time,
            mean_system_length: arrival_rate * mean_system_time,
            wait_probability,
            drain_rate,
        })
    }

    pub fn utilization(&self) -> f64 {
        self.utilization
    }

    pub fn mean_queue_time(&self) -> f64 {
        self.mean_queue_time
    }

    pub fn mean_queue_length(&self) -> f64 {
        self.mean_queue_length
    }

    pub fn mean_system_time(&self) -> f64 {
        self.mean_system_time
    }

    pub fn mean_system_length(&self) -> f64 {
        self.mean_system_length
    }

    /// The probability that an arrival waits no longer than `threshold`
    /// before service begins: `1 - P(wait) * exp(-(c * mu - lambda) * t)`.
    pub fn service_level(&self, threshold: f64) -> Result<f64, QueueingError> {
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(QueueingError::invalid(format!(
                "waiting time threshold must be finite and >= 0, got {}",
                threshold
            )));
        }
        Ok(1.0 - self.wait_probability * (-self.drain_rate * threshold).exp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn epsilon() -> f64 {
        1e-9
    }

    #[test]
    fn three_server_reference_case() {
        let metrics = Metrics::compute(4.0 / 9.0, 4.0, 2.0, 3).unwrap();
        assert!((metrics.utilization() - 2.0 / 3.0).abs() < epsilon());
        assert!((metrics.mean_queue_time() - 2.0 / 9.0).abs() < epsilon());
        assert!((metrics.mean_queue_length() - 8.0 / 9.0).abs() < epsilon());
        assert!((metrics.mean_system_time() - 13.0 / 18.0).abs() < epsilon());
        assert!((metrics.mean_system_length() - 26.0 / 9.0).abs() < epsilon());
    }

    #[test]
    fn littles_law_holds() {
        let metrics = Metrics::compute(0.3, 7.0, 1.5, 6).unwrap();
        assert!((metrics.mean_queue_length() - 7.0 * metrics.mean_queue_time()).abs() < epsilon());
        assert!(
            (metrics.mean_system_length() - 7.0 * metrics.mean_system_time()).abs() < epsilon()
        );
    }

    #[test]
    fn unstable_capacity_is_rejected() {
        assert!(matches!(
            Metrics::compute(1.0, 6.0, 2.0, 3),
            Err(QueueingError::Unstable { .. })
        ));
        assert!(matches!(
            Metrics::compute(1.0, 7.0, 2.0, 3),
            Err(QueueingError::Unstable { .. })
        ));
    }

    #[test]
    fn non_positive_service_rate_is_rejected() {
        assert!(matches!(
            Metrics::compute(0.5, 1.0, 0.0, 3),
            Err(QueueingError::InvalidArgument(_))
        ));
        assert!(matches!(
            Metrics::compute(0.5, 1.0, -2.0, 3),
            Err(QueueingError::InvalidArgument(_))
        ));
        assert!(matches!(
            Metrics::compute(0.5, -1.0, 2.0, 3),
            Err(QueueingError::InvalidArgument(_))
        ));
        assert!(matches!(
            Metrics::compute(1.5, 1.0, 2.0, 3),
            Err(QueueingError::InvalidArgument(_))
        ));
    }

    #[test]
    fn service_level_bounds() {
        let metrics = Metrics::compute(4.0 / 9.0, 4.0, 2.0, 3).unwrap();
        // At t = 0 only the arrivals that never wait are served in time
        assert!((metrics.service_level(0.0).unwrap() - 5.0 / 9.0).abs() < epsilon());
        let later = metrics.service_level(10.0).unwrap();
        assert!(later > 0.999 && later <= 1.0);
        assert!(metrics.service_level(-1.0).is_err());
    }
}
