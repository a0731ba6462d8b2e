//! Naming: player-assigned display names for bonded items.
//!
//! The editor is a two-state machine, `Idle` and `Editing(target, draft)`.
//! Editing is cancelled by navigation (another screen, another item) and only
//! ever committed against the item that started it.

use tracing::{debug, info};

use crate::config::NamingConfig;
use crate::error::{BwbError, Result};
use crate::shadow::{self, TemplateStore};
use crate::types::{VariantId, VariantTemplate, WearableInstance};

/// Whether an item may be renamed right now.
///
/// Either the global override is on (and the item is a variant at all), or
/// its bond level has reached the configured minimum.
#[must_use]
pub fn can_rename(item: &WearableInstance, config: &NamingConfig) -> bool {
    (item.variant.is_some() && config.always_allow)
        || item.bond_level().is_some_and(|level| level >= config.min_level)
}

/// Resolve the display name: instance name, then template name, then the
/// host default.
pub fn resolve_name<F>(item: &WearableInstance, template: Option<&VariantTemplate>, host_default: F) -> String
where
    F: FnOnce() -> String,
{
    let non_empty = |name: &Option<String>| name.as_ref().filter(|n| !n.is_empty()).cloned();
    non_empty(&item.bond.true_name)
        .or_else(|| template.and_then(|t| non_empty(&t.bond.true_name)))
        .unwrap_or_else(host_default)
}

/// Editor state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RenameState {
    /// Not editing.
    #[default]
    Idle,
    /// Editing the name of `target`.
    Editing {
        /// Variant the edit was started on.
        target: VariantId,
        /// Text typed so far.
        draft: String,
    },
}

/// The rename editor.
#[derive(Debug, Clone, Default)]
pub struct Renamer {
    state: RenameState,
}

impl Renamer {
    /// Create an idle editor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &RenameState {
        &self.state
    }

    /// Whether an edit is in progress.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        matches!(self.state, RenameState::Editing { .. })
    }

    /// Variant being renamed, if any.
    #[must_use]
    pub fn target(&self) -> Option<&VariantId> {
        match &self.state {
            RenameState::Editing { target, .. } => Some(target),
            RenameState::Idle => None,
        }
    }

    /// Text typed so far, if editing.
    #[must_use]
    pub fn draft(&self) -> Option<&str> {
        match &self.state {
            RenameState::Editing { draft, .. } => Some(draft),
            RenameState::Idle => None,
        }
    }

    /// Start editing `item`. Returns `false` if the item is not eligible.
    pub fn begin(&mut self, item: &WearableInstance, config: &NamingConfig) -> bool {
        let Some(target) = item.variant.clone().filter(|_| can_rename(item, config)) else {
            debug!(item = %item.name, "Item not eligible for renaming");
            return false;
        };
        debug!(variant = %target, "Rename started");
        self.state = RenameState::Editing {
            target,
            draft: String::new(),
        };
        true
    }

    /// Replace the draft with the field's current content, truncated to
    /// `max_length` characters. Ignored while idle.
    pub fn set_draft(&mut self, text: &str, max_length: usize) {
        if let RenameState::Editing { draft, .. } = &mut self.state {
            *draft = text.chars().take(max_length).collect();
        }
    }

    /// Drop any edit in progress.
    pub fn cancel(&mut self) {
        if let RenameState::Editing { target, .. } = &self.state {
            debug!(variant = %target, "Rename cancelled");
        }
        self.state = RenameState::Idle;
    }

    /// Cancel if the selected item is not the one being renamed.
    /// Returns `true` if the edit survived.
    pub fn on_selection(&mut self, selected: Option<&VariantId>) -> bool {
        let Some(target) = self.target() else {
            return false;
        };
        if Some(target) == selected {
            return true;
        }
        self.cancel();
        false
    }

    /// Commit the draft as `item`'s true name through the shadow store.
    ///
    /// The trimmed draft becomes the name; an empty draft clears it. Returns
    /// the stored name (`None` when cleared) and goes back to `Idle`.
    ///
    /// # Errors
    /// Returns `BwbError::RenameTargetMismatch` if `item` is not the item the
    /// edit was started on. The editor is reset either way.
    pub fn commit<S>(&mut self, store: &mut S, item: &mut WearableInstance) -> Result<Option<String>>
    where
        S: TemplateStore + ?Sized,
    {
        let RenameState::Editing { target, draft } = std::mem::take(&mut self.state) else {
            return Ok(item.bond.true_name.clone());
        };
        if item.variant.as_ref() != Some(&target) {
            return Err(BwbError::RenameTargetMismatch {
                expected: target,
                actual: item.variant_label(),
            });
        }

        let trimmed = draft.trim();
        let name = (!trimmed.is_empty()).then(|| trimmed.to_string());
        shadow::commit(store, item, |item| item.bond.true_name.clone_from(&name));
        info!(variant = %target, name = ?name, "Item renamed");
        Ok(name)
    }
}
