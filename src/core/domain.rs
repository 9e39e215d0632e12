use serde::{Deserialize, Serialize};
use crate::gateway::GatewayPublisherVia;

// Identifiable defines common traits that can be shared by catalog records
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
    fn version(&self) -> i64;
}

pub const DEFAULT_BRANCH: &str = "main";
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// Configuration abstracts config options for the console catalog
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    // None keeps re-prompting until the input is valid
    pub max_input_attempts: Option<usize>,
    pub log_level: String,
    pub json_logs: bool,
    pub audit_events: bool,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            max_input_attempts: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            json_logs: false,
            audit_events: true,
        }
    }

    pub fn gateway_publisher(&self) -> GatewayPublisherVia {
        if self.audit_events {
            GatewayPublisherVia::Logs
        } else {
            GatewayPublisherVia::Discard
        }
    }

    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    pub fn from_vars<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let branch = lookup("LMS_BRANCH")
            .filter(|b| !b.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BRANCH.to_string());
        let mut config = Configuration::new(branch.trim());
        config.max_input_attempts = lookup("LMS_MAX_INPUT_ATTEMPTS")
            .and_then(|n| n.trim().parse::<usize>().ok())
            .filter(|n| *n > 0);
        if let Some(level) = lookup("LMS_LOG_LEVEL") {
            if level.trim().parse::<tracing::Level>().is_ok() {
                config.log_level = level.trim().to_lowercase();
            }
        }
        config.json_logs = lookup("LMS_LOG_JSON")
            .map(|v| is_truthy(v.as_str()))
            .unwrap_or(false);
        config.audit_events = lookup("LMS_AUDIT_EVENTS")
            .map(|v| is_truthy(v.as_str()))
            .unwrap_or(true);
        config
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::domain::Configuration;
    use crate::gateway::GatewayPublisherVia;

    #[test]
    fn test_should_build_config() {
        let config = Configuration::new("test");
        assert_eq!("test", config.branch_id.as_str());
        assert_eq!(None, config.max_input_attempts);
        assert_eq!("warn", config.log_level.as_str());
        assert!(!config.json_logs);
        assert_eq!(GatewayPublisherVia::Logs, config.gateway_publisher());
    }

    #[test]
    fn test_should_build_config_from_vars() {
        let vars = HashMap::from([
            ("LMS_BRANCH", "downtown"),
            ("LMS_MAX_INPUT_ATTEMPTS", "3"),
            ("LMS_LOG_LEVEL", "DEBUG"),
            ("LMS_LOG_JSON", "true"),
            ("LMS_AUDIT_EVENTS", "off"),
        ]);
        let config = Configuration::from_vars(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!("downtown", config.branch_id.as_str());
        assert_eq!(Some(3), config.max_input_attempts);
        assert_eq!("debug", config.log_level.as_str());
        assert!(config.json_logs);
        assert!(!config.audit_events);
        assert_eq!(GatewayPublisherVia::Discard, config.gateway_publisher());
    }

    #[test]
    fn test_should_fallback_on_bad_vars() {
        let vars = HashMap::from([
            ("LMS_BRANCH", "  "),
            ("LMS_MAX_INPUT_ATTEMPTS", "0"),
            ("LMS_LOG_LEVEL", "loud"),
            ("LMS_LOG_JSON", "nope"),
        ]);
        let config = Configuration::from_vars(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(Configuration::new("main"), config);
    }
}
