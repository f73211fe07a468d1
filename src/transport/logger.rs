//! Debug hook for failed responses.

/// Receives a dump of every non-200 response when installed on a client.
///
/// The dump holds the status line, all headers and the raw body, which makes
/// it unsuitable for production logs that may capture tokens echoed back by
/// proxies. Install one only while debugging.
pub trait ResponseLogger: Send + Sync {
    /// Records one response dump.
    fn log_response(&self, dump: &str);
}

/// Forwards response dumps to `tracing` at debug level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl ResponseLogger for TracingLogger {
    fn log_response(&self, dump: &str) {
        tracing::debug!(target: "slack_chat::transport", "Failed response:\n{dump}");
    }
}
