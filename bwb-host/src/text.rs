//! Text keys registered with the host's localization table.

use bwb_core::flavor::{FlavorTier, SelfLockTier};
use bwb_core::gate::Refusal;

/// Every text key BWB looks up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    /// Bond-up at a level without its own message.
    PowerupGeneric,
    /// First bond-up of an item.
    Powerup1st,
    /// Bond-up reaching the low milestone.
    PowerupLow,
    /// Bond-up reaching the medium milestone.
    PowerupMedium,
    /// Bond-up reaching the high milestone.
    PowerupHigh,
    /// Bond-up reaching the extra-high milestone.
    PowerupXHigh,
    /// Periodic bond-up well past the top milestone.
    PowerupTooHigh,
    /// Nudge to lock a strongly bonded, unlocked item.
    LockUrge,
    /// Player locked an item bonded to the medium milestone.
    SelfLockMedium,
    /// Player locked an item bonded to the high milestone.
    SelfLockHigh,
    /// Player locked an item bonded to the extra-high milestone.
    SelfLockXHigh,
    /// Cutting refused.
    NoCut,
    /// Struggling refused.
    NoStruggle,
    /// Magic-lock removal refused.
    NoUnlock,
    /// Removal or key unlock refused.
    NoRemove,
    /// Label of the rename inventory action.
    InventoryActionRename,
    /// Button opening BWB's settings page.
    ModButton,
    /// Label of the "always allow renaming" toggle.
    ModButtonAlwaysAllowRenaming,
}

impl TextKey {
    /// Key as registered with the host.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PowerupGeneric => "BWB_Powerup_Generic",
            Self::Powerup1st => "BWB_Powerup_1st",
            Self::PowerupLow => "BWB_Powerup_Low",
            Self::PowerupMedium => "BWB_Powerup_Medium",
            Self::PowerupHigh => "BWB_Powerup_High",
            Self::PowerupXHigh => "BWB_Powerup_XHigh",
            Self::PowerupTooHigh => "BWB_Powerup_TooHigh",
            Self::LockUrge => "BWB_LockUrge",
            Self::SelfLockMedium => "BWB_SelfLock_Medium",
            Self::SelfLockHigh => "BWB_SelfLock_High",
            Self::SelfLockXHigh => "BWB_SelfLock_XHigh",
            Self::NoCut => "BWB_NoCut",
            Self::NoStruggle => "BWB_NoStruggle",
            Self::NoUnlock => "BWB_NoUnlock",
            Self::NoRemove => "BWB_NoRemove",
            Self::InventoryActionRename => "BWB_InventoryAction_Rename",
            Self::ModButton => "KDModButtonBWB",
            Self::ModButtonAlwaysAllowRenaming => "KDModButtonBWB_AlwaysAllowRenaming",
        }
    }
}

impl From<FlavorTier> for TextKey {
    fn from(tier: FlavorTier) -> Self {
        match tier {
            FlavorTier::First => Self::Powerup1st,
            FlavorTier::Low => Self::PowerupLow,
            FlavorTier::Medium => Self::PowerupMedium,
            FlavorTier::High => Self::PowerupHigh,
            FlavorTier::ExtraHigh => Self::PowerupXHigh,
            FlavorTier::TooHigh => Self::PowerupTooHigh,
            FlavorTier::Generic => Self::PowerupGeneric,
        }
    }
}

impl From<SelfLockTier> for TextKey {
    fn from(tier: SelfLockTier) -> Self {
        match tier {
            SelfLockTier::Medium => Self::SelfLockMedium,
            SelfLockTier::High => Self::SelfLockHigh,
            SelfLockTier::ExtraHigh => Self::SelfLockXHigh,
        }
    }
}

impl From<Refusal> for TextKey {
    fn from(refusal: Refusal) -> Self {
        match refusal {
            Refusal::NoRemove => Self::NoRemove,
            Refusal::NoUnlock => Self::NoUnlock,
            Refusal::NoCut => Self::NoCut,
            Refusal::NoStruggle => Self::NoStruggle,
        }
    }
}

/// Languages BWB ships localized images for.
pub const SUPPORTED_LANGUAGES: [&str; 2] = ["EN", "JP"];

/// The UI language if BWB has assets for it, English otherwise.
#[must_use]
pub fn supported_language_code(language: &str) -> &'static str {
    SUPPORTED_LANGUAGES
        .iter()
        .copied()
        .find(|code| *code == language)
        .unwrap_or("EN")
}
