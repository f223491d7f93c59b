//! Numbering configuration loaded from the environment.
//!
//! | Variable                         | Default | Meaning                              |
//! |----------------------------------|---------|--------------------------------------|
//! | `PARABELLUM_ISSUE_MAX_ATTEMPTS`  | `8`     | insert attempts before giving up     |
//! | `PARABELLUM_PREFIX_<KIND>`       | built-in| prefix override, e.g. `..._INVOICE`  |

use std::collections::HashMap;

use thiserror::Error;

use parabellum_numbering::{EntityKind, NumberingScheme};

pub const MAX_ATTEMPTS_VAR: &str = "PARABELLUM_ISSUE_MAX_ATTEMPTS";
pub const PREFIX_VAR_PREFIX: &str = "PARABELLUM_PREFIX_";
pub const DEFAULT_MAX_ATTEMPTS: u32 = 8;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: String, reason: String },
}

#[derive(Debug, Clone)]
pub struct NumberingConfig {
    schemes: HashMap<EntityKind, NumberingScheme>,
    max_attempts: u32,
}

impl Default for NumberingConfig {
    fn default() -> Self {
        Self {
            schemes: EntityKind::ALL
                .into_iter()
                .map(|kind| (kind, kind.default_scheme()))
                .collect(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl NumberingConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    ///
    /// An unusable retry bound falls back to the default with a warning; a bad
    /// prefix is an error, since issuing under the wrong prefix cannot be undone.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(MAX_ATTEMPTS_VAR) {
            match raw.trim().parse::<u32>() {
                Ok(n) if n > 0 => config.max_attempts = n,
                _ => tracing::warn!(
                    value = %raw,
                    default = DEFAULT_MAX_ATTEMPTS,
                    "{MAX_ATTEMPTS_VAR} is not a positive integer; using default"
                ),
            }
        }

        for kind in EntityKind::ALL {
            let key = format!("{PREFIX_VAR_PREFIX}{}", kind.as_upper());
            let Some(raw) = lookup(&key) else { continue };
            let scheme = kind
                .default_scheme()
                .with_prefix(raw.trim())
                .map_err(|e| ConfigError::Invalid {
                    key: key.clone(),
                    reason: e.to_string(),
                })?;
            config.schemes.insert(kind, scheme);
        }

        config.ensure_distinct_prefixes()?;
        Ok(config)
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn scheme(&self, kind: EntityKind) -> NumberingScheme {
        self.schemes
            .get(&kind)
            .cloned()
            .unwrap_or_else(|| kind.default_scheme())
    }

    /// Two kinds sharing a prefix would share (and corrupt) one sequence.
    fn ensure_distinct_prefixes(&self) -> Result<(), ConfigError> {
        let mut seen: HashMap<&str, EntityKind> = HashMap::new();
        for kind in EntityKind::ALL {
            let Some(scheme) = self.schemes.get(&kind) else { continue };
            if let Some(other) = seen.insert(scheme.prefix(), kind) {
                return Err(ConfigError::Invalid {
                    key: format!("{PREFIX_VAR_PREFIX}{}", kind.as_upper()),
                    reason: format!(
                        "prefix '{}' is already used by {}",
                        scheme.prefix(),
                        other.as_upper()
                    ),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_without_variables() {
        let config = NumberingConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.max_attempts(), DEFAULT_MAX_ATTEMPTS);
        assert_eq!(config.scheme(EntityKind::Invoice).prefix(), "INV");
        assert_eq!(config.scheme(EntityKind::Mission).prefix(), "MIS");
    }

    #[test]
    fn prefix_override_keeps_layout() {
        let config = NumberingConfig::from_lookup(lookup_from(&[
            ("PARABELLUM_PREFIX_INVOICE", "FAC"),
            ("PARABELLUM_ISSUE_MAX_ATTEMPTS", "3"),
        ]))
        .unwrap();
        let scheme = config.scheme(EntityKind::Invoice);
        assert_eq!(scheme.prefix(), "FAC");
        assert_eq!(scheme.width(), 3);
        assert!(scheme.scope_by_year());
        assert_eq!(config.max_attempts(), 3);
    }

    #[test]
    fn bad_retry_bound_falls_back_to_default() {
        for raw in ["zero", "0", "-2"] {
            let config =
                NumberingConfig::from_lookup(lookup_from(&[("PARABELLUM_ISSUE_MAX_ATTEMPTS", raw)]))
                    .unwrap();
            assert_eq!(config.max_attempts(), DEFAULT_MAX_ATTEMPTS);
        }
    }

    #[test]
    fn invalid_prefix_is_an_error() {
        let err = NumberingConfig::from_lookup(lookup_from(&[("PARABELLUM_PREFIX_QUOTE", "DE-V")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key, .. } if key == "PARABELLUM_PREFIX_QUOTE"));
    }

    #[test]
    fn shared_prefix_is_an_error() {
        let err = NumberingConfig::from_lookup(lookup_from(&[("PARABELLUM_PREFIX_PAYMENT", "INV")]))
            .unwrap_err();
        let ConfigError::Invalid { reason, .. } = err;
        assert!(reason.contains("INV"));
    }
}
