//! Removal-resistance gate.
//!
//! Pure decision function evaluated before the host's struggle, removal and
//! unlock operations. Thresholds are "exceeds": an action is refused once the
//! bond level is strictly greater than its threshold. Query-mode calls (the
//! host asking whether an action would be possible) are never refused.

use crate::config::LevelThresholds;

/// An escape attempt on a worn item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemovalAction {
    /// Struggling out.
    Struggle,
    /// Taking the item off.
    Remove,
    /// Cutting the item.
    Cut,
    /// Unlocking with a key.
    Unlock,
    /// Picking the lock.
    Pick,
    /// Dispelling a magic lock from the inventory.
    RemoveMagicLock,
}

impl RemovalAction {
    /// Parse the host's struggle-type string.
    #[must_use]
    pub fn from_struggle_type(kind: &str) -> Option<Self> {
        match kind {
            "Struggle" => Some(Self::Struggle),
            "Remove" => Some(Self::Remove),
            "Cut" => Some(Self::Cut),
            "Unlock" => Some(Self::Unlock),
            "Pick" => Some(Self::Pick),
            _ => None,
        }
    }
}

/// Why an action was refused. Each maps to its own refusal message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Refusal {
    /// Removal or key unlock.
    NoRemove,
    /// Magic-lock removal.
    NoUnlock,
    /// Cutting.
    NoCut,
    /// Struggling.
    NoStruggle,
}

/// Gate outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateVerdict {
    /// Delegate to the host unchanged.
    Allow,
    /// Refuse without delegating.
    Refuse(Refusal),
}

impl GateVerdict {
    /// Whether the host operation should run.
    #[must_use]
    pub fn allows(self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Decide whether `action` may proceed on an item with `level`.
#[must_use]
pub fn evaluate(level: Option<u32>, action: RemovalAction, query: bool, levels: &LevelThresholds) -> GateVerdict {
    let Some(level) = level.filter(|_| !query) else {
        return GateVerdict::Allow;
    };
    let refusal = match action {
        RemovalAction::Remove | RemovalAction::Unlock if level > levels.stop_remove => Some(Refusal::NoRemove),
        RemovalAction::RemoveMagicLock if level > levels.stop_remove => Some(Refusal::NoUnlock),
        RemovalAction::Cut if level > levels.stop_cut => Some(Refusal::NoCut),
        RemovalAction::Struggle if level > levels.stop_struggle => Some(Refusal::NoStruggle),
        _ => None,
    };
    refusal.map_or(GateVerdict::Allow, GateVerdict::Refuse)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn levels() -> LevelThresholds {
        LevelThresholds {
            stop_cut: 5,
            stop_struggle: 6,
            stop_remove: 7,
            ..LevelThresholds::default()
        }
    }

    #[test]
    fn high_bond_refuses_everything_but_picking() {
        let l = levels();
        assert_eq!(evaluate(Some(8), RemovalAction::Remove, false, &l), GateVerdict::Refuse(Refusal::NoRemove));
        assert_eq!(evaluate(Some(8), RemovalAction::Unlock, false, &l), GateVerdict::Refuse(Refusal::NoRemove));
        assert_eq!(
            evaluate(Some(8), RemovalAction::RemoveMagicLock, false, &l),
            GateVerdict::Refuse(Refusal::NoUnlock)
        );
        assert_eq!(evaluate(Some(8), RemovalAction::Cut, false, &l), GateVerdict::Refuse(Refusal::NoCut));
        assert_eq!(evaluate(Some(8), RemovalAction::Struggle, false, &l), GateVerdict::Refuse(Refusal::NoStruggle));
        assert!(evaluate(Some(8), RemovalAction::Pick, false, &l).allows());
    }

    #[test]
    fn thresholds_are_strict() {
        let l = levels();
        assert!(evaluate(Some(5), RemovalAction::Cut, false, &l).allows());
        assert!(!evaluate(Some(6), RemovalAction::Cut, false, &l).allows());
        assert!(evaluate(Some(7), RemovalAction::Remove, false, &l).allows());
    }

    #[test]
    fn query_mode_never_refuses() {
        assert!(evaluate(Some(100), RemovalAction::Remove, true, &levels()).allows());
    }

    #[test]
    fn unbonded_items_pass() {
        assert!(evaluate(None, RemovalAction::Cut, false, &levels()).allows());
    }

    #[test]
    fn parses_host_struggle_types() {
        assert_eq!(RemovalAction::from_struggle_type("Cut"), Some(RemovalAction::Cut));
        assert_eq!(RemovalAction::from_struggle_type("Wiggle"), None);
    }
}
