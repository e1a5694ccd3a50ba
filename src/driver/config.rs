//! Run-loop configuration.

use serde::{Deserialize, Serialize};

/// Limits and bookkeeping options for a [`Machine`](super::Machine).
///
/// Deserializable so embedders can keep it in their own config files.
/// Missing fields take their defaults.
///
/// ```rust
/// use hsm::driver::MachineConfig;
///
/// let config: MachineConfig = serde_json::from_str(r#"{ "max_ticks": 50 }"#).unwrap();
/// assert_eq!(config.max_ticks, Some(50));
/// assert!(config.record_history);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Maximum number of ticks a machine may run; `None` means unbounded.
    pub max_ticks: Option<usize>,

    /// Record every transition into the machine's history.
    pub record_history: bool,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            max_ticks: None,
            record_history: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unbounded_with_history() {
        let config = MachineConfig::default();
        assert_eq!(config.max_ticks, None);
        assert!(config.record_history);
    }

    #[test]
    fn empty_json_uses_defaults() {
        let config: MachineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, MachineConfig::default());
    }

    #[test]
    fn json_overrides_fields() {
        let config: MachineConfig =
            serde_json::from_str(r#"{ "max_ticks": 10, "record_history": false }"#).unwrap();
        assert_eq!(config.max_ticks, Some(10));
        assert!(!config.record_history);
    }
}
