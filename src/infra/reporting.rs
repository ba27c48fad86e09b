//! Error-tracking sink for server-side failures.

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Receives every failure that ends in a 5xx response.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ErrorReporter: Send + Sync {
    /// `context` names the request (`METHOD /path`), `detail` the failure
    fn capture(&self, context: &str, detail: &str);
}

/// Default reporter: one structured event per failure under the
/// `error_report` target, ready for a log shipper to pick up.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn capture(&self, context: &str, detail: &str) {
        tracing::error!(target: "error_report", context, detail, "Server failure captured");
    }
}
