//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the site.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::routing::{MatchStrategy, RouteName};

/// Root configuration for the portfolio site.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SiteConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Route matching and navigation settings.
    pub routing: RoutingConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl SiteConfig {
    /// Sections that differ from `next` but are only read at startup.
    ///
    /// Hot reload applies `routing` alone. The listener, the timeout layer,
    /// the log filter and the metrics exporter keep their startup values.
    pub fn restart_required(&self, next: &SiteConfig) -> Vec<&'static str> {
        let mut changed = Vec::new();
        if self.listener != next.listener {
            changed.push("listener");
        }
        if self.timeouts != next.timeouts {
            changed.push("timeouts");
        }
        if self.observability != next.observability {
            changed.push("observability");
        }
        changed
    }
}

/// Listener configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Route matching configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Tie-break between exact and prefix matches.
    pub strategy: MatchStrategy,

    /// Registered routes left out of the top navigation.
    pub hidden_nav: Vec<RouteName>,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            strategy: MatchStrategy::ExactFirst,
            hidden_nav: vec![RouteName::Communities],
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
