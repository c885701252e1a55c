use tracing::debug;

use super::erlang::erlang_b;
use crate::utils::errors::QueueingError;

/// Find the smallest number of servers that keeps the probability of
/// waiting at or below `target_wait_probability` for the given offered
/// load.  Only stable configurations (more servers than Erlangs of load)
/// are considered, so the answer always exceeds the offered load.
///
/// The search walks the Erlang-B recurrence upward one server at a time,
/// so each candidate costs a constant amount of work.
pub fn min_servers(offered_load: f64, target_wait_probability: f64) -> Result<usize, QueueingError> {
    if !(target_wait_probability > 0.0 && target_wait_probability <= 1.0) {
        return Err(QueueingError::invalid(format!(
            "target wait probability must lie in (0, 1], got {}",
            target_wait_probability
        )));
    }
    if !offered_load.is_finite() || offered_load < 0.0 {
        return Err(QueueingError::invalid(format!(
            "offered load must be finite and >= 0, got {}",
            offered_load
        )));
    }
    let too_large = || QueueingError::invalid("offered load exceeds the representable server count");

    let mut servers = (offered_load.floor() as usize)
        .checked_add(1)
        .ok_or_else(too_large)?;
    let mut b = erlang_b(offered_load, servers)?;
    loop {
        let c = servers as f64;
        let p_wait = c * b / (c - offered_load * (1.0 - b));
        if p_wait <= target_wait_probability {
            debug!(offered_load, servers, p_wait, "staffing target met");
            return Ok(servers);
        }
        servers = servers.checked_add(1).ok_or_else(too_large)?;
        let carried = offered_load * b;
        b = carried / (servers as f64 + carried);
    }
}
