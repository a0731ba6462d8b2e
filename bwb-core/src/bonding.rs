//! Bonding engine: the per-floor level-up pass.
//!
//! Runs once per gained floor over every worn item. Per item, the first
//! matching rule wins:
//!
//! 1. no variant → untracked, skip;
//! 2. freshly equipped this floor → clear the mark, skip (bonds next floor);
//! 3. armor → never bonds;
//! 4. otherwise level up and rescale enchantment powers.
//!
//! Powers are always recomputed from the captured base power:
//!
//! ```text
//! power = base × base_rate^level × lock_rate^lock_level
//! power = 1 + (base − 1) × base_rate^level × lock_rate^lock_level   (mana pool)
//! ```
//!
//! so repeated recomputation at the same levels never drifts.

use tracing::{debug, info};

use crate::config::{BondConfig, GrowthConfig, LevelThresholds};
use crate::error::{BwbError, Result};
use crate::flavor::{self, FlavorTier};
use crate::shadow::{self, TemplateStore};
use crate::types::{Effect, Trigger, VariantId, WearableInstance};

/// Host knowledge about items that the engine needs but does not own.
pub trait ItemRules {
    /// Whether the item's base kind is armor.
    fn is_armor(&self, item: &WearableInstance) -> bool;
    /// Whether a lock can be put on the item.
    fn is_lockable(&self, item: &WearableInstance) -> bool;
    /// Whether an effect kind is an enchantment (as opposed to curses etc.).
    fn is_enchantment(&self, kind: &str) -> bool;
}

/// Why an item did not bond this floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Plain or unique item.
    Untracked,
    /// Equipped during the floor just finished.
    NewRestraint,
    /// Armor never bonds.
    Armor,
}

/// One item that bonded this floor.
#[derive(Debug, Clone, PartialEq)]
pub struct BondReport {
    /// Position in the worn list handed to [`run_pass`].
    pub index: usize,
    /// The item's variant.
    pub variant: VariantId,
    /// Bond level after the level-up.
    pub level: u32,
    /// Lock level after the level-up.
    pub lock_level: u32,
    /// Flavor tier to announce.
    pub tier: FlavorTier,
    /// Whether to also nag the player to lock the item.
    pub urge_lock: bool,
}

/// Result of one bonding pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PassSummary {
    /// Items that levelled up, in worn order.
    pub bonded: Vec<BondReport>,
    /// Items passed over, with the reason.
    pub skipped: Vec<(usize, SkipReason)>,
}

// ---------------------------------------------------------------------------
// Stat math
// ---------------------------------------------------------------------------

/// Geometric growth factor `rate^level`.
#[must_use]
pub fn growth_factor(rate: f64, level: u32) -> f64 {
    rate.powf(f64::from(level))
}

/// Power for an effect with the given trigger and base power, or `None` if
/// the trigger must not be rescaled.
#[must_use]
pub fn scaled_power(
    trigger: &Trigger,
    base_power: f64,
    level: u32,
    lock_level: u32,
    growth: &GrowthConfig,
) -> Option<f64> {
    let factor = growth_factor(growth.base_rate, level) * growth_factor(growth.lock_rate, lock_level);
    match trigger {
        Trigger::Icon => None,
        // Stored as 1 + bonus.
        Trigger::AfterCalcManaPool => Some(1.0 + (base_power - 1.0) * factor),
        _ => Some(base_power * factor),
    }
}

/// Capture the base power if needed and recompute `power` from it.
pub fn rescale_effect(effect: &mut Effect, level: u32, lock_level: u32, growth: &GrowthConfig) {
    let base = *effect.base_power.get_or_insert(effect.power);
    if let Some(power) = scaled_power(&effect.trigger, base, level, lock_level, growth) {
        effect.power = power;
    }
}

// ---------------------------------------------------------------------------
// Level-up
// ---------------------------------------------------------------------------

fn apply_level_up<R>(item: &mut WearableInstance, rules: &R, levels: &LevelThresholds, growth: &GrowthConfig)
where
    R: ItemRules + ?Sized,
{
    let bond = &mut item.bond;
    match bond.bond_level() {
        None => {
            bond.level = Some(levels.base_level);
            bond.lock_level = 0;
        }
        Some(level) => bond.level = Some(level.saturating_add(1)),
    }

    if bond.has_new_lock {
        bond.has_new_lock = false;
    } else if item.lock.as_deref().is_some_and(|lock| !lock.is_empty()) {
        bond.lock_level = bond.lock_level.saturating_add(1);
    }

    let Some(level) = bond.level else {
        return;
    };
    let lock_level = bond.lock_level;
    for effect in &mut item.events {
        if !rules.is_enchantment(&effect.kind) || effect.power == 0.0 {
            continue;
        }
        rescale_effect(effect, level, lock_level, growth);
    }
}

/// Level up one eligible item through the shadow store.
///
/// # Errors
/// Returns `BwbError::LevelUnset` if the level-up left no bond level behind.
pub fn level_up<S, R>(store: &mut S, item: &mut WearableInstance, rules: &R, config: &BondConfig) -> Result<u32>
where
    S: TemplateStore + ?Sized,
    R: ItemRules + ?Sized,
{
    shadow::commit(store, item, |item| {
        apply_level_up(item, rules, &config.levels, &config.growth);
    });
    item.bond.bond_level().ok_or_else(|| BwbError::LevelUnset {
        variant: item.variant.clone().unwrap_or_else(|| VariantId::from(item.name.as_str())),
    })
}

/// A bonding pass that stopped at a consistency fault.
///
/// Items before the faulting one are already committed; `summary` reports
/// them so they can still be announced.
#[derive(Debug, thiserror::Error)]
#[error("Bonding pass aborted after {} level-up(s): {error}", .summary.bonded.len())]
pub struct PassFault {
    /// What the pass did before the fault.
    pub summary: PassSummary,
    /// The fault itself.
    #[source]
    pub error: BwbError,
}

/// Run the bonding pass over every worn item.
///
/// # Errors
/// Stops at the first consistency fault and returns it with the partial
/// summary; items before it keep their update.
pub fn run_pass<S, R>(
    items: &mut [WearableInstance],
    store: &mut S,
    rules: &R,
    config: &BondConfig,
) -> std::result::Result<PassSummary, PassFault>
where
    S: TemplateStore + ?Sized,
    R: ItemRules + ?Sized,
{
    let mut summary = PassSummary::default();

    for (index, item) in items.iter_mut().enumerate() {
        let Some(variant) = item.variant.clone() else {
            summary.skipped.push((index, SkipReason::Untracked));
            continue;
        };

        if item.bond.is_new_restraint {
            shadow::commit(store, item, |item| {
                item.bond.is_new_restraint = false;
                item.bond.has_new_lock = false;
            });
            debug!(variant = %variant, "New this floor, bonds from next floor");
            summary.skipped.push((index, SkipReason::NewRestraint));
            continue;
        }

        if rules.is_armor(item) {
            summary.skipped.push((index, SkipReason::Armor));
            continue;
        }

        let level = match level_up(store, item, rules, config) {
            Ok(level) => level,
            Err(error) => return Err(PassFault { summary, error }),
        };
        let lock_level = item.bond.lock_level;
        let tier = flavor::select_tier(level, &config.levels);
        let urge_lock = flavor::wants_lock_urge(level, item.is_locked(), rules.is_lockable(item), &config.levels);
        info!(variant = %variant, level, lock_level, ?tier, "Bond level increased");

        summary.bonded.push(BondReport {
            index,
            variant,
            level,
            lock_level,
            tier,
            urge_lock,
        });
    }

    Ok(summary)
}
