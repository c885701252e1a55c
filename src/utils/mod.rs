//! The utilities module provides general capabilities that span the
//! queueing, input, report, and web modules.  The utilities are centered
//! around error reporting and numeric conversion.

pub mod errors;

use num_traits::Float;

use errors::QueueingError;

/// This function converts a usize to a Float, with an associated
/// `QueueingError` returned for failed conversions
pub fn usize_to_float<T: Float>(unconv: usize) -> Result<T, QueueingError> {
    T::from(unconv).ok_or(QueueingError::FloatConvError)
}

/// This function converts a Float to an f64, for error reporting and
/// serialization of generic results
pub fn float_to_f64<T: Float>(unconv: T) -> Result<f64, QueueingError> {
    unconv.to_f64().ok_or(QueueingError::FloatConvError)
}

/// When the `console_error_panic_hook` feature is enabled, we can call the
/// `set_panic_hook` function at least once during initialization, and then
/// we will get better error messages if our code ever panics.
///
/// For more details see
/// <https://github.com/rustwasm/console_error_panic_hook#readme>
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
