// Alert collaborator port
// Transient user-facing error messages, keyed by translation ids

/// Presentation options for an alert message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertOptions {
    /// CSS selector of the element the alert is rendered into.
    pub container: &'static str,
    /// Seconds the alert stays visible.
    pub duration_secs: u32,
}

/// Collaborator that surfaces transient error messages to the user.
///
/// `message_key` is a translation identifier resolved by the hosting
/// page, not display text.
pub trait Alerter: Send + Sync {
    fn error(&self, title: &str, message_key: &str, options: &AlertOptions);
}

/// Alerter that forwards messages to the tracing subscriber.
///
/// Useful as a stand-in when the crate is embedded without a real
/// notification surface.
#[derive(Debug, Default)]
pub struct TracingAlerter;

impl Alerter for TracingAlerter {
    fn error(&self, title: &str, message_key: &str, options: &AlertOptions) {
        tracing::warn!(
            title,
            message_key,
            container = options.container,
            "alert raised"
        );
    }
}
