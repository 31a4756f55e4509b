//! Rule document decoding
//!
//! ```json
//! {"statistics_config": {"statistics": ["mmr_ryu"], "selected_stat_key": "stat",
//!   "enriched_key": "mmr", "default_value": 1000, "use_default_value": true}}
//! ```

use serde::{Deserialize, Deserializer, Serialize};

use super::constants::{DEFAULT_ENRICHED_KEY, DEFAULT_SELECTED_STAT_KEY, UNSET_DEFAULT_VALUE};

/// Statistic gating and enrichment settings
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatisticsConfig {
    /// Allowed stat codes; empty turns gating and enrichment off.
    #[serde(deserialize_with = "null_as_default")]
    pub statistics: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub selected_stat_key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub enriched_key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub default_value: f64,
    /// Explicit switch for default substitution. `None` keeps the legacy
    /// reading where a zero `default_value` means "no default".
    pub use_default_value: Option<bool>,
}

impl StatisticsConfig {
    pub fn selected_stat_key(&self) -> &str {
        if self.selected_stat_key.is_empty() {
            DEFAULT_SELECTED_STAT_KEY
        } else {
            &self.selected_stat_key
        }
    }

    pub fn enriched_key(&self) -> &str {
        if self.enriched_key.is_empty() {
            DEFAULT_ENRICHED_KEY
        } else {
            &self.enriched_key
        }
    }

    /// Whether a missing stat value may be replaced by `default_value`.
    pub fn has_default(&self) -> bool {
        self.use_default_value
            .unwrap_or(self.default_value != UNSET_DEFAULT_VALUE)
    }

    /// Empty `statistics` disables validation and enrichment.
    pub fn is_enabled(&self) -> bool {
        !self.statistics.is_empty()
    }
}

/// Decoded matchmaking rule set
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GameRules {
    #[serde(rename = "statistics_config", default, deserialize_with = "null_as_default")]
    pub statistics: StatisticsConfig,
}

/// A JSON `null` reads the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl GameRules {
    /// Decodes a rule document; unknown fields are ignored.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
