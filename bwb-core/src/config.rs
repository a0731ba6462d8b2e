//! Configuration for the BWB bonding system.
//!
//! Maps directly to `bwb.toml`. Every field has a serde default, so a partial
//! file (or an empty one) yields the stock tuning.

use serde::{Deserialize, Serialize};

use crate::error::{BwbError, Result};

/// Top-level BWB configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BondConfig {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Bond-level milestones and gate thresholds.
    #[serde(default)]
    pub levels: LevelThresholds,
    /// Stat growth per level.
    #[serde(default)]
    pub growth: GrowthConfig,
    /// Renaming rules.
    #[serde(default)]
    pub naming: NamingConfig,
}

impl BondConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `BwbError::Config` if the TOML is invalid or fails validation.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str).map_err(|e| BwbError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Check cross-field constraints that serde cannot express.
    ///
    /// # Errors
    /// Returns `BwbError::Config` describing the first violated constraint.
    pub fn validate(&self) -> Result<()> {
        let g = &self.growth;
        for (name, rate) in [("base_rate", g.base_rate), ("lock_rate", g.lock_rate)] {
            if !rate.is_finite() || rate <= 0.0 {
                return Err(BwbError::Config(format!(
                    "growth.{name} must be a positive number, got {rate}"
                )));
            }
        }

        let l = &self.levels;
        if l.base_level == 0 {
            return Err(BwbError::Config("levels.base_level must be at least 1".into()));
        }
        if l.too_high_period == 0 {
            return Err(BwbError::Config("levels.too_high_period must be at least 1".into()));
        }
        let tiers = [l.first, l.low, l.medium, l.high, l.extra_high];
        if tiers.windows(2).any(|w| w[0] >= w[1]) {
            return Err(BwbError::Config(format!(
                "levels first < low < medium < high < extra_high must ascend, got {tiers:?}"
            )));
        }

        if self.naming.max_length == 0 {
            return Err(BwbError::Config("naming.max_length must be at least 1".into()));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// General system settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Whether bonding runs at all.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_level: "info".to_string(),
        }
    }
}

/// Bond-level milestones.
///
/// `first`..`extra_high` pick the flavor message on the exact level they name.
/// The `stop_*` values are gate thresholds: an action is refused once the
/// level strictly exceeds them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelThresholds {
    /// Level assigned the first time an item bonds.
    #[serde(default = "default_1")]
    pub base_level: u32,
    /// First-bond milestone.
    #[serde(default = "default_1")]
    pub first: u32,
    /// Low milestone.
    #[serde(default = "default_2")]
    pub low: u32,
    /// Medium milestone.
    #[serde(default = "default_3")]
    pub medium: u32,
    /// High milestone.
    #[serde(default = "default_4")]
    pub high: u32,
    /// Extra-high milestone.
    #[serde(default = "default_6")]
    pub extra_high: u32,
    /// Cutting is refused above this level.
    #[serde(default = "default_5")]
    pub stop_cut: u32,
    /// Struggling is refused above this level.
    #[serde(default = "default_6")]
    pub stop_struggle: u32,
    /// Removing and unlocking are refused above this level.
    #[serde(default = "default_7")]
    pub stop_remove: u32,
    /// From this level on, an unlocked lockable item nags to be locked.
    #[serde(default = "default_5")]
    pub lock_urge: u32,
    /// "Still growing" messages start this many levels past `extra_high`.
    #[serde(default = "default_2")]
    pub too_high_offset: u32,
    /// ... and repeat on every multiple of this period.
    #[serde(default = "default_3")]
    pub too_high_period: u32,
}

impl Default for LevelThresholds {
    fn default() -> Self {
        Self {
            base_level: 1,
            first: 1,
            low: 2,
            medium: 3,
            high: 4,
            extra_high: 6,
            stop_cut: 5,
            stop_struggle: 6,
            stop_remove: 7,
            lock_urge: 5,
            too_high_offset: 2,
            too_high_period: 3,
        }
    }
}

/// Geometric stat growth: `power = base × base_rate^level × lock_rate^lock_level`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthConfig {
    /// Multiplier per bond level.
    #[serde(default = "default_base_rate")]
    pub base_rate: f64,
    /// Multiplier per locked floor.
    #[serde(default = "default_lock_rate")]
    pub lock_rate: f64,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            base_rate: 1.07,
            lock_rate: 1.01,
        }
    }
}

/// Renaming rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Minimum bond level before an item may be renamed.
    #[serde(default = "default_3")]
    pub min_level: u32,
    /// Allow renaming any variant regardless of bond level.
    #[serde(default)]
    pub always_allow: bool,
    /// Maximum characters accepted by the name field.
    #[serde(default = "default_60")]
    pub max_length: usize,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            min_level: 3,
            always_allow: false,
            max_length: 60,
        }
    }
}

// ---------------------------------------------------------------------------
// Serde default helpers
// ---------------------------------------------------------------------------

fn default_true() -> bool { true }
fn default_log_level() -> String { "info".to_string() }
fn default_base_rate() -> f64 { 1.07 }
fn default_lock_rate() -> f64 { 1.01 }
fn default_1() -> u32 { 1 }
fn default_2() -> u32 { 2 }
fn default_3() -> u32 { 3 }
fn default_4() -> u32 { 4 }
fn default_5() -> u32 { 5 }
fn default_6() -> u32 { 6 }
fn default_7() -> u32 { 7 }
fn default_60() -> usize { 60 }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config = BondConfig::from_toml("").expect("parse");
        assert!(config.general.enabled);
        assert_eq!(config.levels.stop_remove, 7);
        assert_eq!(config.naming.min_level, 3);
        assert!((config.growth.base_rate - 1.07).abs() < f64::EPSILON);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config = BondConfig::from_toml(
            r#"
            [levels]
            stop_cut = 9

            [naming]
            always_allow = true
            "#,
        )
        .expect("parse");
        assert_eq!(config.levels.stop_cut, 9);
        assert_eq!(config.levels.stop_struggle, 6);
        assert!(config.naming.always_allow);
        assert_eq!(config.naming.max_length, 60);
    }

    #[test]
    fn rejects_non_positive_growth() {
        let err = BondConfig::from_toml("[growth]\nbase_rate = 0.0").unwrap_err();
        assert!(matches!(err, BwbError::Config(_)));
    }

    #[test]
    fn rejects_unordered_tiers() {
        let err = BondConfig::from_toml("[levels]\nhigh = 2").unwrap_err();
        assert!(err.to_string().contains("ascend"));
    }

    #[test]
    fn rejects_zero_period() {
        assert!(BondConfig::from_toml("[levels]\ntoo_high_period = 0").is_err());
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(matches!(
            BondConfig::from_toml("[levels"),
            Err(BwbError::Config(_))
        ));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("bwb.toml");
        std::fs::write(&path, "[growth]\nlock_rate = 1.05\n").expect("write");

        let config = BondConfig::from_file(&path).expect("load");
        assert!((config.growth.lock_rate - 1.05).abs() < f64::EPSILON);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = BondConfig::from_file(std::path::Path::new("/nonexistent/bwb.toml")).unwrap_err();
        assert!(matches!(err, BwbError::Io(_)));
    }
}
