//! Flavor-message tier selection.
//!
//! Milestones match on the exact level they name. Past the top milestone the
//! "still growing" tier recurs periodically; everything else is generic.

use crate::config::LevelThresholds;

/// Which bond-up message to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlavorTier {
    /// The very first bond.
    First,
    /// Low milestone.
    Low,
    /// Medium milestone.
    Medium,
    /// High milestone.
    High,
    /// Extra-high milestone.
    ExtraHigh,
    /// Periodic message well past the top milestone.
    TooHigh,
    /// Any other level.
    Generic,
}

impl FlavorTier {
    /// Milestone tiers are highlighted; the generic tier is not.
    #[must_use]
    pub fn is_milestone(self) -> bool {
        !matches!(self, Self::Generic)
    }
}

/// Pick the bond-up tier for a freshly reached level.
#[must_use]
pub fn select_tier(level: u32, levels: &LevelThresholds) -> FlavorTier {
    let milestones = [
        (levels.first, FlavorTier::First),
        (levels.low, FlavorTier::Low),
        (levels.medium, FlavorTier::Medium),
        (levels.high, FlavorTier::High),
        (levels.extra_high, FlavorTier::ExtraHigh),
    ];
    if let Some(&(_, tier)) = milestones.iter().find(|(at, _)| *at == level) {
        return tier;
    }

    let still_growing_from = levels.extra_high.saturating_add(levels.too_high_offset);
    if level >= still_growing_from && level % levels.too_high_period.max(1) == 0 {
        FlavorTier::TooHigh
    } else {
        FlavorTier::Generic
    }
}

/// Message shown after the player locks a bonded item themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelfLockTier {
    /// At or above the medium milestone.
    Medium,
    /// At or above the high milestone.
    High,
    /// At or above the extra-high milestone.
    ExtraHigh,
}

/// Pick the self-lock message, highest matching tier first.
#[must_use]
pub fn self_lock_tier(level: u32, levels: &LevelThresholds) -> Option<SelfLockTier> {
    if level >= levels.extra_high {
        Some(SelfLockTier::ExtraHigh)
    } else if level >= levels.high {
        Some(SelfLockTier::High)
    } else if level >= levels.medium {
        Some(SelfLockTier::Medium)
    } else {
        None
    }
}

/// Whether a bonded item should nag the player to lock it.
#[must_use]
pub fn wants_lock_urge(level: u32, locked: bool, lockable: bool, levels: &LevelThresholds) -> bool {
    level >= levels.lock_urge && !locked && lockable
}

#[cfg(test)]
mod tests {
    use super::*;

    fn levels() -> LevelThresholds {
        LevelThresholds::default()
    }

    #[test]
    fn milestones_match_exactly() {
        let l = levels();
        assert_eq!(select_tier(1, &l), FlavorTier::First);
        assert_eq!(select_tier(2, &l), FlavorTier::Low);
        assert_eq!(select_tier(3, &l), FlavorTier::Medium);
        assert_eq!(select_tier(4, &l), FlavorTier::High);
        assert_eq!(select_tier(6, &l), FlavorTier::ExtraHigh);
    }

    #[test]
    fn gaps_between_milestones_are_generic() {
        assert_eq!(select_tier(5, &levels()), FlavorTier::Generic);
        assert_eq!(select_tier(7, &levels()), FlavorTier::Generic);
    }

    #[test]
    fn still_growing_recurs_past_the_top() {
        let l = levels();
        // Starts at extra_high + 2 = 8, on multiples of 3.
        assert_eq!(select_tier(8, &l), FlavorTier::Generic);
        assert_eq!(select_tier(9, &l), FlavorTier::TooHigh);
        assert_eq!(select_tier(10, &l), FlavorTier::Generic);
        assert_eq!(select_tier(12, &l), FlavorTier::TooHigh);
    }

    #[test]
    fn generic_is_not_a_milestone() {
        assert!(!FlavorTier::Generic.is_milestone());
        assert!(FlavorTier::TooHigh.is_milestone());
    }

    #[test]
    fn self_lock_picks_highest_tier() {
        let l = levels();
        assert_eq!(self_lock_tier(2, &l), None);
        assert_eq!(self_lock_tier(3, &l), Some(SelfLockTier::Medium));
        assert_eq!(self_lock_tier(5, &l), Some(SelfLockTier::High));
        assert_eq!(self_lock_tier(11, &l), Some(SelfLockTier::ExtraHigh));
    }

    #[test]
    fn lock_urge_needs_unlocked_lockable_item() {
        let l = levels();
        assert!(wants_lock_urge(5, false, true, &l));
        assert!(!wants_lock_urge(4, false, true, &l));
        assert!(!wants_lock_urge(5, true, true, &l));
        assert!(!wants_lock_urge(5, false, false, &l));
    }
}
