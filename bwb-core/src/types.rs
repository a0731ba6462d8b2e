//! Core type definitions for the BWB bonding system.
//!
//! Everything here mirrors a slice of the host's item model: only the fields
//! the bonding logic reads or writes are modelled. All mod-owned data is
//! optional/defaulted so that items coming from an unmodded save deserialize
//! cleanly.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// Stable key naming one enchanted item variant.
///
/// Shared by every live instance of the same variant. Plain and unique items
/// have no variant and are outside the bonding system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantId(pub String);

impl VariantId {
    /// Create a variant identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for VariantId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for VariantId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

// ---------------------------------------------------------------------------
// Effects
// ---------------------------------------------------------------------------

/// When an effect applies. Decides which power policy the bonding engine uses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Trigger {
    /// Applied every turn.
    Tick,
    /// Display-only icon; its power must never be touched.
    Icon,
    /// Mana-pool calculation; power is stored as `1 + bonus`.
    AfterCalcManaPool,
    /// Tooltip shown in the inventory.
    InventoryTooltip,
    /// Any other host trigger, kept verbatim.
    Other(String),
}

impl Trigger {
    /// The host's string name for this trigger.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Tick => "tick",
            Self::Icon => "icon",
            Self::AfterCalcManaPool => "afterCalcManaPool",
            Self::InventoryTooltip => "inventoryTooltip",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for Trigger {
    fn from(name: &str) -> Self {
        match name {
            "tick" => Self::Tick,
            "icon" => Self::Icon,
            "afterCalcManaPool" => Self::AfterCalcManaPool,
            "inventoryTooltip" => Self::InventoryTooltip,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for Trigger {
    fn from(name: String) -> Self {
        Self::from(name.as_str())
    }
}

impl From<Trigger> for String {
    fn from(trigger: Trigger) -> Self {
        trigger.as_str().to_string()
    }
}

/// One numeric modifier entry on an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    /// Effect kind, e.g. `"Accuracy"`. Only enchantment kinds are bonded.
    pub kind: String,
    /// When the effect applies.
    pub trigger: Trigger,
    /// Current power.
    pub power: f64,
    /// Power captured the first time bonding touched this effect.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_power: Option<f64>,
}

impl Effect {
    /// Create an effect that bonding has not touched yet.
    #[must_use]
    pub fn new(kind: impl Into<String>, trigger: impl Into<Trigger>, power: f64) -> Self {
        Self {
            kind: kind.into(),
            trigger: trigger.into(),
            power,
            base_power: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Mod-owned fields
// ---------------------------------------------------------------------------

/// The mod-owned ("custom") fields carried by both instances and templates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BondData {
    /// The item was equipped during the floor still in progress.
    pub is_new_restraint: bool,
    /// Floors survived while continuously worn. `None` means never bonded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u32>,
    /// Floors survived while continuously locked.
    pub lock_level: u32,
    /// A lock was applied to a previously unlocked item this floor.
    pub has_new_lock: bool,
    /// Player-assigned display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub true_name: Option<String>,
}

impl BondData {
    /// Bond level, treating a stored zero as "never bonded".
    #[must_use]
    pub fn bond_level(&self) -> Option<u32> {
        self.level.filter(|&level| level > 0)
    }
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

/// A live, possibly transient item instance handed to the mod by the host.
///
/// The host may discard and recreate this object at any time; nothing may
/// rely on its identity, only on [`WearableInstance::variant`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WearableInstance {
    /// Host item name (the base restraint).
    pub name: String,
    /// Variant key; `None` for plain or unique items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<VariantId>,
    /// Current lock kind; `None` when unlocked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lock: Option<String>,
    /// Numeric modifiers.
    #[serde(default)]
    pub events: Vec<Effect>,
    /// Mod-owned fields.
    #[serde(flatten)]
    pub bond: BondData,
}

impl WearableInstance {
    /// A plain (non-variant) item.
    #[must_use]
    pub fn plain(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variant: None,
            lock: None,
            events: Vec::new(),
            bond: BondData::default(),
        }
    }

    /// An enchanted variant instance with no mod data yet.
    #[must_use]
    pub fn enchanted(name: impl Into<String>, variant: impl Into<VariantId>, events: Vec<Effect>) -> Self {
        Self {
            name: name.into(),
            variant: Some(variant.into()),
            lock: None,
            events,
            bond: BondData::default(),
        }
    }

    /// Whether the item currently carries a lock.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.lock.as_deref().is_some_and(|lock| !lock.is_empty())
    }

    /// Bond level, if bonded.
    #[must_use]
    pub fn bond_level(&self) -> Option<u32> {
        self.bond.bond_level()
    }

    /// Variant key as a display string, `<none>` for plain items.
    #[must_use]
    pub fn variant_label(&self) -> String {
        self.variant
            .as_ref()
            .map_or_else(|| "<none>".to_string(), ToString::to_string)
    }
}

/// The host's durable per-variant definition, used as the persistence anchor
/// for mod-owned fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantTemplate {
    /// Base restraint the variant is built on.
    pub template: String,
    /// Canonical effect list of the variant.
    #[serde(default)]
    pub events: Vec<Effect>,
    /// Mod-owned fields (absent in templates saved without the mod).
    #[serde(flatten)]
    pub bond: BondData,
}

impl VariantTemplate {
    /// Create a template with no mod data.
    #[must_use]
    pub fn new(template: impl Into<String>, events: Vec<Effect>) -> Self {
        Self {
            template: template.into(),
            events,
            bond: BondData::default(),
        }
    }

    /// Build a fresh instance the way the host does when it recreates an
    /// item: effects come from the definition and mod-owned fields are blank.
    #[must_use]
    pub fn fresh_instance(&self, variant: &VariantId) -> WearableInstance {
        let events = self
            .events
            .iter()
            .map(|e| Effect {
                base_power: None,
                ..e.clone()
            })
            .collect();
        WearableInstance {
            name: self.template.clone(),
            variant: Some(variant.clone()),
            lock: None,
            events,
            bond: BondData::default(),
        }
    }
}
