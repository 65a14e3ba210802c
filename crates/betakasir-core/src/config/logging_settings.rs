use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingSettings {
    /// `EnvFilter` directive. Default: "warn".
    pub level: Option<String>,
}

impl LoggingSettings {
    pub fn effective_level(&self) -> &str {
        self.level.as_deref().unwrap_or("warn")
    }
}

/// Check that `directive` is a non-blank `EnvFilter` directive.
pub fn check_directive(directive: &str) -> Result<(), String> {
    if directive.trim().is_empty() {
        return Err("empty directive".to_string());
    }
    EnvFilter::try_new(directive)
        .map(|_| ())
        .map_err(|e| e.to_string())
}
