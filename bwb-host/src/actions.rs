//! The "rename" inventory action.
//!
//! The host builds per-item action lists (one function for worn restraints,
//! one for loose ones) and looks actions up by id for their text, icon and
//! click behaviour. The click itself lives on [`crate::hooks::BondMod`],
//! which owns the rename editor.

use bwb_core::config::NamingConfig;
use bwb_core::naming;
use bwb_core::shadow::TemplateStore;
use bwb_core::types::WearableInstance;

use crate::text::supported_language_code;

/// Id the rename action is registered under.
pub const RENAME_ACTION: &str = "BWBRename";

/// Icon shown while a rename is in progress (the host's checkmark).
pub const CONFIRM_ICON: &str = "InventoryAction/Use";

/// Icon path for the rename action.
#[must_use]
pub fn rename_icon(editing: bool, language: &str) -> String {
    if editing {
        CONFIRM_ICON.to_string()
    } else {
        format!("Data/BWB_Rename{}", supported_language_code(language))
    }
}

/// Extend the action list of a worn restraint.
pub fn extend_worn_actions(item: &WearableInstance, naming: &NamingConfig, actions: &mut Vec<String>) {
    if naming::can_rename(item, naming) {
        actions.push(RENAME_ACTION.to_string());
    }
}

/// Extend the action list of a loose (carried) restraint.
///
/// Loose items only count if their variant is still known to the host.
pub fn extend_loose_actions<S>(store: &S, item: &WearableInstance, naming: &NamingConfig, actions: &mut Vec<String>)
where
    S: TemplateStore + ?Sized,
{
    let known = item.variant.as_ref().is_some_and(|id| store.template(id).is_some());
    if known && naming::can_rename(item, naming) {
        actions.push(RENAME_ACTION.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bwb_core::shadow::TemplateRegistry;
    use bwb_core::types::VariantTemplate;

    fn bonded(level: u32) -> WearableInstance {
        let mut item = WearableInstance::enchanted("Collar", "Collar#1", vec![]);
        item.bond.level = Some(level);
        item
    }

    #[test]
    fn icon_switches_while_editing() {
        assert_eq!(rename_icon(true, "EN"), CONFIRM_ICON);
        assert_eq!(rename_icon(false, "JP"), "Data/BWB_RenameJP");
        assert_eq!(rename_icon(false, "DE"), "Data/BWB_RenameEN");
    }

    #[test]
    fn worn_action_needs_level() {
        let naming = NamingConfig::default();
        let mut actions = vec!["Remove".to_string()];
        extend_worn_actions(&bonded(2), &naming, &mut actions);
        assert_eq!(actions.len(), 1);
        extend_worn_actions(&bonded(3), &naming, &mut actions);
        assert_eq!(actions.last().map(String::as_str), Some(RENAME_ACTION));
    }

    #[test]
    fn loose_action_needs_known_variant() {
        let naming = NamingConfig::default();
        let mut registry = TemplateRegistry::new();
        let mut actions = Vec::new();

        extend_loose_actions(&registry, &bonded(5), &naming, &mut actions);
        assert!(actions.is_empty());

        registry.insert("Collar#1", VariantTemplate::new("Collar", vec![]));
        extend_loose_actions(&registry, &bonded(5), &naming, &mut actions);
        assert_eq!(actions, vec![RENAME_ACTION.to_string()]);
    }
}
