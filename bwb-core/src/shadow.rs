//! Shadow store: keeps mod-owned fields alive across host object churn.
//!
//! The host recreates item instances whenever they move between inventory
//! and equipped state, dropping any fields it does not know about. The
//! per-variant template survives, so it is the durable anchor:
//!
//! - [`repair`] copies the template's mod-owned fields onto a possibly fresh
//!   instance. Run it before reading mod data off anything the host handed us.
//! - [`commit`] applies a mutation to an instance and mirrors the result onto
//!   the template before returning. It is the only sanctioned way to change
//!   mod-owned fields.
//!
//! A template lookup miss is not an error: it means the item is untracked.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{BwbError, Result};
use crate::types::{BondData, Effect, VariantId, VariantTemplate, WearableInstance};

// ---------------------------------------------------------------------------
// Storage seam
// ---------------------------------------------------------------------------

/// Durable per-variant template lookup provided by the host.
pub trait TemplateStore {
    /// Template for `id`, if the host knows the variant.
    fn template(&self, id: &VariantId) -> Option<&VariantTemplate>;

    /// Mutable template for `id`.
    fn template_mut(&mut self, id: &VariantId) -> Option<&mut VariantTemplate>;
}

/// Anything carrying mod-owned fields: instances and templates alike.
pub trait CustomData {
    /// Mod-owned scalar fields.
    fn bond(&self) -> &BondData;
    /// Mutable mod-owned scalar fields.
    fn bond_mut(&mut self) -> &mut BondData;
    /// Effect list.
    fn effects(&self) -> &[Effect];
    /// Mutable effect list.
    fn effects_mut(&mut self) -> &mut [Effect];
}

impl CustomData for WearableInstance {
    fn bond(&self) -> &BondData {
        &self.bond
    }
    fn bond_mut(&mut self) -> &mut BondData {
        &mut self.bond
    }
    fn effects(&self) -> &[Effect] {
        &self.events
    }
    fn effects_mut(&mut self) -> &mut [Effect] {
        &mut self.events
    }
}

impl CustomData for VariantTemplate {
    fn bond(&self) -> &BondData {
        &self.bond
    }
    fn bond_mut(&mut self) -> &mut BondData {
        &mut self.bond
    }
    fn effects(&self) -> &[Effect] {
        &self.events
    }
    fn effects_mut(&mut self) -> &mut [Effect] {
        &mut self.events
    }
}

// ---------------------------------------------------------------------------
// Copy / repair / commit
// ---------------------------------------------------------------------------

/// Copy the mod-owned fields of `src` onto `dest`.
///
/// Scalar fields are copied wholesale. Effects are copied by position, and
/// only where `src` carries a `base_power`: that marker means bonding has
/// rewritten the effect's `power`.
pub fn copy_custom_data<S, D>(src: &S, dest: &mut D)
where
    S: CustomData + ?Sized,
    D: CustomData + ?Sized,
{
    dest.bond_mut().clone_from(src.bond());

    let dest_effects = dest.effects_mut();
    for (i, effect) in src.effects().iter().enumerate() {
        let Some(base_power) = effect.base_power else {
            continue;
        };
        match dest_effects.get_mut(i) {
            Some(target) => {
                target.base_power = Some(base_power);
                target.power = effect.power;
            }
            None => debug!(index = i, "Effect missing on copy target, skipped"),
        }
    }
}

/// Restore an instance's mod-owned fields from its variant template.
///
/// Returns `true` if a template was found and copied from.
pub fn repair<S>(store: &S, item: &mut WearableInstance) -> bool
where
    S: TemplateStore + ?Sized,
{
    let Some(id) = item.variant.as_ref() else {
        return false;
    };
    let Some(template) = store.template(id) else {
        return false;
    };
    debug!(variant = %id, level = ?template.bond.level, "Repairing instance from template");
    copy_custom_data(template, item);
    true
}

/// Mutate an instance's mod-owned fields and mirror them onto its template.
///
/// Returns `true` if the change reached a template. Without one the change
/// only lives on the instance and will be lost on the next host recreation.
pub fn commit<S, F>(store: &mut S, item: &mut WearableInstance, mutate: F) -> bool
where
    S: TemplateStore + ?Sized,
    F: FnOnce(&mut WearableInstance),
{
    mutate(item);

    let Some(id) = item.variant.clone() else {
        warn!(item = %item.name, "Commit on an item without a variant; change is not durable");
        return false;
    };
    match store.template_mut(&id) {
        Some(template) => {
            debug!(variant = %id, level = ?item.bond.level, "Committing mod data to template");
            copy_custom_data(item, template);
            true
        }
        None => {
            warn!(variant = %id, "No template for variant; change is not durable");
            false
        }
    }
}

// ---------------------------------------------------------------------------
// In-memory registry
// ---------------------------------------------------------------------------

/// A plain map of variant templates.
///
/// Hosts that keep their variant table in memory can use this directly; it
/// serializes as part of whatever save the host already writes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateRegistry {
    templates: BTreeMap<VariantId, VariantTemplate>,
}

impl TemplateRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a variant template.
    pub fn insert(&mut self, id: impl Into<VariantId>, template: VariantTemplate) {
        self.templates.insert(id.into(), template);
    }

    /// Number of registered variants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Iterate over all variants.
    pub fn iter(&self) -> impl Iterator<Item = (&VariantId, &VariantTemplate)> {
        self.templates.iter()
    }

    /// Serialize the registry to JSON.
    ///
    /// # Errors
    /// Returns `BwbError::Serialization` if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| BwbError::Serialization(e.to_string()))
    }

    /// Deserialize a registry from JSON.
    ///
    /// # Errors
    /// Returns `BwbError::Serialization` if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| BwbError::Serialization(e.to_string()))
    }
}

impl TemplateStore for TemplateRegistry {
    fn template(&self, id: &VariantId) -> Option<&VariantTemplate> {
        self.templates.get(id)
    }

    fn template_mut(&mut self, id: &VariantId) -> Option<&mut VariantTemplate> {
        self.templates.get_mut(id)
    }
}
