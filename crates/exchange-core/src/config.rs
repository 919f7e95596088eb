use crate::error::{ExchangeError, ExchangeResult};
use crate::routing::RoutingKey;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExchangeConfig {
    pub consumers: Vec<ConsumerBinding>,
    pub logging: LoggingConfig,
}

/// How a named consumer is wired into the consumer container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConsumerBinding {
    pub name: String,
    /// Only messages with this key are delivered; `None` receives everything.
    #[serde(default)]
    pub routing_key: Option<RoutingKey>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub filter: Option<String>,
}

fn default_enabled() -> bool {
    true
}

impl ExchangeConfig {
    /// Reads configuration from a JSON file. A missing file yields the defaults.
    pub fn load(path: &Path) -> ExchangeResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "exchange config not found, using defaults");
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    pub fn from_json_str(data: &str) -> ExchangeResult<Self> {
        let cfg: Self = serde_json::from_str(data)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Binding names must be unique, otherwise `binding` would silently
    /// pick the first one.
    pub fn validate(&self) -> ExchangeResult<()> {
        let mut names = HashSet::new();
        for binding in &self.consumers {
            if !names.insert(binding.name.as_str()) {
                return Err(ExchangeError::Config(format!(
                    "duplicate consumer binding {:?}",
                    binding.name
                )));
            }
        }
        Ok(())
    }

    pub fn binding(&self, name: &str) -> Option<&ConsumerBinding> {
        self.consumers.iter().find(|binding| binding.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bindings_default_to_enabled_and_unfiltered() -> anyhow::Result<()> {
        let cfg = ExchangeConfig::from_json_str(
            r#"{
                "consumers": [
                    { "name": "states", "routing_key": "fb.bus.data.channel.property" },
                    { "name": "audit", "enabled": false }
                ],
                "logging": { "filter": "debug" }
            }"#,
        )?;

        let states = cfg.binding("states").expect("states binding");
        assert_eq!(states.routing_key, Some(RoutingKey::ChannelPropertyData));
        assert!(states.enabled);

        let audit = cfg.binding("audit").expect("audit binding");
        assert_eq!(audit.routing_key, None);
        assert!(!audit.enabled);

        assert!(cfg.binding("missing").is_none());
        assert_eq!(cfg.logging.filter.as_deref(), Some("debug"));
        Ok(())
    }

    #[test]
    fn unknown_routing_key_fails_to_load() {
        let err = ExchangeConfig::from_json_str(
            r#"{ "consumers": [ { "name": "x", "routing_key": "fb.bus.bogus" } ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ExchangeError::Serde(_)));
    }

    #[test]
    fn duplicate_binding_names_are_rejected() {
        let err = ExchangeConfig::from_json_str(
            r#"{ "consumers": [ { "name": "ws" }, { "name": "ws", "enabled": false } ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ExchangeError::Config(ref msg) if msg.contains("\"ws\"")));
    }

    #[test]
    fn missing_file_yields_defaults() -> anyhow::Result<()> {
        let path = std::env::temp_dir().join("exchange-config-that-does-not-exist.json");
        let cfg = ExchangeConfig::load(&path)?;
        assert!(cfg.consumers.is_empty());
        assert!(cfg.logging.filter.is_none());
        Ok(())
    }

    #[test]
    fn loads_from_file() -> anyhow::Result<()> {
        let path = std::env::temp_dir()
            .join(format!("exchange-config-{}.json", std::process::id()));
        fs::write(&path, r#"{ "consumers": [ { "name": "ws" } ] }"#)?;
        let cfg = ExchangeConfig::load(&path);
        fs::remove_file(&path)?;
        assert_eq!(cfg?.consumers.len(), 1);
        Ok(())
    }
}
