//! Machine configuration.

use serde::{Deserialize, Serialize};

use vendmatic_core::{DomainError, DomainResult};
use vendmatic_inventory::validate_threshold;

pub const DEFAULT_MACHINE_NAME: &str = "vending-machine";
pub const DEFAULT_RESTOCK_THRESHOLD: f64 = 0.25;

pub const ENV_MACHINE_NAME: &str = "VENDMATIC_MACHINE_NAME";
pub const ENV_RESTOCK_THRESHOLD: &str = "VENDMATIC_RESTOCK_THRESHOLD";

/// Settings for one [`VendingMachine`](crate::VendingMachine).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Name used in log output.
    pub name: String,
    /// Fill ratio below which `restock_if_low` reorders an item.
    pub restock_threshold: f64,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_MACHINE_NAME.to_string(),
            restock_threshold: DEFAULT_RESTOCK_THRESHOLD,
        }
    }
}

impl MachineConfig {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_restock_threshold(mut self, threshold: f64) -> Self {
        self.restock_threshold = threshold;
        self
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::invalid_argument("machine name cannot be empty"));
        }
        validate_threshold(self.restock_threshold)?;
        Ok(())
    }

    /// Read overrides from `VENDMATIC_MACHINE_NAME` and
    /// `VENDMATIC_RESTOCK_THRESHOLD`; unset variables keep their defaults.
    pub fn from_env() -> DomainResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env), reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DomainResult<Self> {
        let mut config = Self::default();
        if let Some(name) = lookup(ENV_MACHINE_NAME) {
            config.name = name;
        }
        if let Some(raw) = lookup(ENV_RESTOCK_THRESHOLD) {
            config.restock_threshold = raw.trim().parse().map_err(|e| {
                DomainError::invalid_argument(format!("{ENV_RESTOCK_THRESHOLD}={raw:?}: {e}"))
            })?;
        }
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| DomainError::invalid_argument(format!("machine config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}
