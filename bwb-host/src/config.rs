//! Host-side settings on top of the core `BondConfig`.
//!
//! The host exposes a per-mod settings page; BWB registers one toggle there.
//! Its value is read live and combined with the file-based naming config.

use bwb_core::config::{BondConfig, NamingConfig};
use serde::{Deserialize, Serialize};

use crate::text::TextKey;

/// Kind of a mod-settings entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingKind {
    /// A checkbox.
    Boolean,
}

/// One entry on the host's mod-settings page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModConfigEntry {
    /// Setting name, also its text key suffix.
    pub name: &'static str,
    /// Widget kind.
    #[serde(rename = "type")]
    pub kind: SettingKind,
    /// Default value.
    pub default: bool,
    /// Field the host stores the value under.
    pub refvar: &'static str,
    /// Label shown next to the widget.
    #[serde(skip)]
    pub label: TextKey,
}

/// Settings-page key BWB registers under.
pub const MOD_KEY: &str = "BWB";

/// The entries BWB registers on the settings page.
pub const MOD_CONFIG_ENTRIES: [ModConfigEntry; 1] = [ModConfigEntry {
    name: "BWB_AlwaysAllowRenaming",
    kind: SettingKind::Boolean,
    default: false,
    refvar: "BWB_AlwaysAllowRenaming",
    label: TextKey::ModButtonAlwaysAllowRenaming,
}];

/// Everything the host needs to build BWB's settings page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModConfigRegistration {
    /// Key the page is registered under.
    pub key: &'static str,
    /// Label of the button opening the page.
    pub button: TextKey,
    /// Widgets on the page, in display order.
    pub entries: &'static [ModConfigEntry],
}

/// BWB's settings-page registration.
pub const MOD_CONFIG: ModConfigRegistration = ModConfigRegistration {
    key: MOD_KEY,
    button: TextKey::ModButton,
    entries: &MOD_CONFIG_ENTRIES,
};

/// Live values of the settings page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModSettings {
    /// Allow renaming any variant regardless of bond level.
    #[serde(rename = "BWB_AlwaysAllowRenaming", default)]
    pub always_allow_renaming: bool,
}

/// Everything the integration layer is configured with.
#[derive(Debug, Clone, Default)]
pub struct HostConfig {
    /// Core tuning (usually from `bwb.toml`).
    pub bond: BondConfig,
    /// Settings-page values.
    pub settings: ModSettings,
}

impl HostConfig {
    /// Create a config from core tuning with default settings.
    #[must_use]
    pub fn new(bond: BondConfig) -> Self {
        Self {
            bond,
            settings: ModSettings::default(),
        }
    }

    /// Naming rules with the settings-page override folded in.
    #[must_use]
    pub fn naming(&self) -> NamingConfig {
        NamingConfig {
            always_allow: self.bond.naming.always_allow || self.settings.always_allow_renaming,
            ..self.bond.naming.clone()
        }
    }
}
