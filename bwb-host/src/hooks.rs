//! Hook implementations wired to the host's extension points.
//!
//! Every method here corresponds to one host callback. Where the host
//! operation is wrapped, it is passed in as a closure and always called
//! through; BWB only adds behaviour before or after it, or (for refused
//! escape attempts) short-circuits it.
//!
//! | Host extension point            | Method                                   |
//! |---------------------------------|------------------------------------------|
//! | item applied                    | [`BondMod::on_post_apply`]               |
//! | item added to inventory         | [`BondMod::on_inventory_add`]            |
//! | lock applied                    | [`BondMod::on_lock`]                     |
//! | floor advanced                  | [`BondMod::after_advance_level`]         |
//! | struggle / remove / cut / unlock| [`BondMod::around_struggle`]             |
//! | "remove magic lock" action      | [`BondMod::on_remove_magic_lock`]        |
//! | "lock" action                   | [`BondMod::after_lock_click`]            |
//! | item display name               | [`BondMod::item_name`]                   |
//! | name-string display name        | [`BondMod::item_name_for`]               |
//! | main loop tick                  | [`BondMod::after_run`]                   |
//! | selected-item panel drawn       | [`BondMod::after_draw_selected`]         |
//! | worn / loose action lists       | [`BondMod::worn_restraint_actions`], [`BondMod::loose_restraint_actions`] |
//! | "rename" action callbacks       | `BondMod::rename_*`                      |
//! | mod settings page               | [`BondMod::mod_config`], [`BondMod::settings_mut`] |
//!
//! Consistency faults are contained here: logged, the rename editor reset,
//! and the host's own result returned untouched.

use bwb_core::bonding::{self, PassFault, PassSummary};
use bwb_core::error::{BwbError, Result};
use bwb_core::flavor;
use bwb_core::floor;
use bwb_core::gate::{self, GateVerdict, RemovalAction};
use bwb_core::naming::{self, Renamer};
use bwb_core::shadow::{self, TemplateStore};
use bwb_core::types::{VariantId, WearableInstance};
use tracing::{debug, error, info, warn};

use crate::actions;
use crate::config::{HostConfig, MOD_CONFIG, ModConfigRegistration, ModSettings};
use crate::events::{FieldKey, LockRequest, PostApply, StruggleRequest, StruggleResult, TextFieldRequest};
use crate::host::{Host, MessageColor, Notification};
use crate::text::TextKey;

/// Draw state of the inventory screen.
pub const INVENTORY_SCREEN: &str = "Inventory";

/// Element id of the rename text field.
pub const RENAME_FIELD_ID: &str = "BWB_RenameTextField";

/// Turns a bond-up message stays on screen.
const BOND_MESSAGE_DURATION: u32 = 5;
/// Turns a refusal or self-lock message stays on screen.
const SHORT_MESSAGE_DURATION: u32 = 2;

/// The mod's runtime state and hook implementations.
#[derive(Debug, Default)]
pub struct BondMod {
    config: HostConfig,
    renamer: Renamer,
}

impl BondMod {
    /// Create the mod with the given configuration.
    #[must_use]
    pub fn new(config: HostConfig) -> Self {
        Self {
            config,
            renamer: Renamer::new(),
        }
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    /// Settings-page registration, handed to the host once at load.
    #[must_use]
    pub fn mod_config(&self) -> ModConfigRegistration {
        MOD_CONFIG
    }

    /// Settings-page values, updated when the player changes them.
    pub fn settings_mut(&mut self) -> &mut ModSettings {
        &mut self.config.settings
    }

    /// The rename editor.
    #[must_use]
    pub fn renamer(&self) -> &Renamer {
        &self.renamer
    }

    // ------------------------------------------------------------------
    // Event capture and shadow store
    // ------------------------------------------------------------------

    /// Item applied: repair the instance, then mark a freshly equipped
    /// variant as new for the current floor.
    pub fn on_post_apply(&self, templates: &mut dyn TemplateStore, event: PostApply<'_>) {
        shadow::repair(&*templates, event.item);

        if event.unlink || event.item.variant.is_none() {
            return;
        }
        shadow::commit(templates, event.item, |item| item.bond.is_new_restraint = true);
        debug!(variant = %event.item.variant_label(), "Marked as new restraint");
    }

    /// Item added to the inventory: the host builds a new object there, so
    /// repair it once the host is done.
    pub fn on_inventory_add<R>(
        &self,
        templates: &mut dyn TemplateStore,
        item: &mut WearableInstance,
        add: impl FnOnce(&mut WearableInstance) -> R,
    ) -> R {
        let result = add(item);
        shadow::repair(&*templates, item);
        result
    }

    /// Lock applied: remember a fresh lock so it does not count towards the
    /// lock streak on the floor it was applied.
    pub fn on_lock<R>(
        &self,
        templates: &mut dyn TemplateStore,
        request: LockRequest<'_>,
        lock: impl FnOnce(&mut WearableInstance, Option<&str>) -> R,
    ) -> R {
        if request.is_fresh_lock() {
            shadow::commit(templates, request.item, |item| item.bond.has_new_lock = true);
            debug!(variant = %request.item.variant_label(), "Fresh lock recorded");
        }
        lock(request.item, request.new_lock)
    }

    // ------------------------------------------------------------------
    // Floor advance and bonding
    // ------------------------------------------------------------------

    /// Floor advance: after the host advanced, run the bonding pass if a
    /// floor was actually gained, then announce the results. A pass cut short
    /// by a fault still announces the items it bonded.
    pub fn after_advance_level<H, R>(&mut self, host: &mut H, advance: impl FnOnce(&mut H) -> R) -> R
    where
        H: Host + ?Sized,
    {
        let result = advance(host);

        if !self.config.bond.general.enabled || !floor::floor_gained(host.floors()) {
            return result;
        }

        let outcome = {
            let view = host.bonding_view();
            bonding::run_pass(view.worn, view.templates, view.rules, &self.config.bond)
        };
        let summary = match outcome {
            Ok(summary) => summary,
            Err(PassFault { summary, error }) => {
                self.report_fault(&error);
                summary
            }
        };
        self.announce(host, &summary);
        result
    }

    fn announce<H>(&self, host: &mut H, summary: &PassSummary)
    where
        H: Host + ?Sized,
    {
        let messages: Vec<Notification> = {
            let host: &H = host;
            summary
                .bonded
                .iter()
                .flat_map(|report| {
                    let name = host
                        .worn_items()
                        .get(report.index)
                        .map_or_else(|| report.variant.to_string(), |item| self.item_name(host, item));
                    let color = if report.tier.is_milestone() {
                        MessageColor::BasePink
                    } else {
                        MessageColor::BaseWhite
                    };
                    let mut out = vec![Notification::new(
                        host.text_get(report.tier.into(), Some(&name)),
                        color,
                        BOND_MESSAGE_DURATION,
                    )];
                    if report.urge_lock {
                        out.push(Notification::new(
                            host.text_get(TextKey::LockUrge, None),
                            MessageColor::BasePink,
                            BOND_MESSAGE_DURATION,
                        ));
                    }
                    out
                })
                .collect()
        };
        for message in messages {
            host.send_text_message(message);
        }
    }

    // ------------------------------------------------------------------
    // Removal resistance
    // ------------------------------------------------------------------

    /// Struggle, removal, cutting or unlocking: refuse at high bond levels,
    /// otherwise delegate unchanged.
    pub fn around_struggle<H>(
        &self,
        host: &mut H,
        request: &StruggleRequest,
        struggle: impl FnOnce(&mut H, &StruggleRequest) -> StruggleResult,
    ) -> StruggleResult
    where
        H: Host + ?Sized,
    {
        if self.refuse(host, &request.group, request.action, request.query) {
            return StruggleResult::Fail;
        }
        struggle(host, request)
    }

    /// "Remove magic lock" action: refused at high bond levels. Returns
    /// `None` if the host action was not run.
    pub fn on_remove_magic_lock<H, R>(&self, host: &mut H, group: &str, remove: impl FnOnce(&mut H) -> R) -> Option<R>
    where
        H: Host + ?Sized,
    {
        if self.refuse(host, group, RemovalAction::RemoveMagicLock, false) {
            return None;
        }
        Some(remove(host))
    }

    fn refuse<H>(&self, host: &mut H, group: &str, action: RemovalAction, query: bool) -> bool
    where
        H: Host + ?Sized,
    {
        let level = host.restraint_in_group(group).and_then(WearableInstance::bond_level);
        let GateVerdict::Refuse(refusal) = gate::evaluate(level, action, query, &self.config.bond.levels) else {
            return false;
        };

        let text = {
            let host: &H = host;
            let name = host
                .restraint_in_group(group)
                .map(|item| self.item_name(host, item))
                .unwrap_or_default();
            host.text_get(refusal.into(), Some(&name))
        };
        info!(group, ?action, ?refusal, "Escape attempt refused");
        host.send_text_message(Notification::new(text, MessageColor::BasePink, SHORT_MESSAGE_DURATION));
        true
    }

    /// "Lock" action: after the host locked the item, comment on it if the
    /// item is bonded enough.
    pub fn after_lock_click<H, R>(&self, host: &mut H, group: &str, lock_click: impl FnOnce(&mut H) -> R) -> R
    where
        H: Host + ?Sized,
    {
        let result = lock_click(host);

        let text = {
            let host: &H = host;
            host.restraint_in_group(group).and_then(|item| {
                let tier = flavor::self_lock_tier(item.bond_level()?, &self.config.bond.levels)?;
                Some(host.text_get(tier.into(), Some(&self.item_name(host, item))))
            })
        };
        if let Some(text) = text {
            host.send_text_message(Notification::new(text, MessageColor::BasePink, SHORT_MESSAGE_DURATION));
        }
        result
    }

    // ------------------------------------------------------------------
    // Names
    // ------------------------------------------------------------------

    /// Display name of an item, honouring player-assigned names.
    pub fn item_name<H>(&self, host: &H, item: &WearableInstance) -> String
    where
        H: Host + ?Sized,
    {
        let template = item.variant.as_ref().and_then(|id| host.templates().template(id));
        naming::resolve_name(item, template, || host.default_item_name(item))
    }

    /// Display name for a bare item name (used where the host has no
    /// instance at hand). The name doubles as the template key.
    pub fn item_name_for<H>(&self, host: &H, name: &str) -> String
    where
        H: Host + ?Sized,
    {
        host.templates()
            .template(&VariantId::from(name))
            .and_then(|template| template.bond.true_name.clone())
            .filter(|true_name| !true_name.is_empty())
            .unwrap_or_else(|| host.default_name_string(name))
    }

    // ------------------------------------------------------------------
    // Renaming
    // ------------------------------------------------------------------

    /// Extend a worn restraint's action list.
    pub fn worn_restraint_actions(&self, item: &WearableInstance, actions: &mut Vec<String>) {
        actions::extend_worn_actions(item, &self.config.naming(), actions);
    }

    /// Extend a loose restraint's action list.
    pub fn loose_restraint_actions(&self, templates: &dyn TemplateStore, item: &WearableInstance, actions: &mut Vec<String>) {
        actions::extend_loose_actions(templates, item, &self.config.naming(), actions);
    }

    /// Rename action label.
    pub fn rename_text<H>(&self, host: &H) -> String
    where
        H: Host + ?Sized,
    {
        host.text_get(TextKey::InventoryActionRename, None)
    }

    /// Rename action icon: a checkmark while editing.
    pub fn rename_icon<H>(&self, host: &H) -> String
    where
        H: Host + ?Sized,
    {
        actions::rename_icon(self.renamer.is_editing(), host.language())
    }

    /// The rename action is always usable once listed.
    #[must_use]
    pub fn rename_valid(&self, _item: &WearableInstance) -> bool {
        true
    }

    /// The rename action is always visible once listed.
    #[must_use]
    pub fn rename_show(&self, _item: &WearableInstance) -> bool {
        true
    }

    /// Rename action click: start editing, or commit the edit in progress.
    pub fn rename_click(&mut self, templates: &mut dyn TemplateStore, item: &mut WearableInstance) {
        if self.renamer.is_editing() {
            self.commit_rename(templates, item);
        } else {
            self.renamer.begin(item, &self.config.naming());
        }
    }

    /// Default actions have nothing to cancel.
    #[must_use]
    pub fn rename_cancel(&self) -> bool {
        false
    }

    /// Main loop tick: leaving the inventory screen abandons the edit.
    pub fn after_run(&mut self, draw_state: &str) {
        if draw_state != INVENTORY_SCREEN && self.renamer.is_editing() {
            self.renamer.cancel();
        }
    }

    /// Selected-item panel drawn: returns the text field to overlay while
    /// editing, cancelling if another item got selected.
    pub fn after_draw_selected<H>(&mut self, host: &H, selected: &WearableInstance, drawn: bool) -> Option<TextFieldRequest>
    where
        H: Host + ?Sized,
    {
        if !drawn || !self.renamer.is_editing() {
            return None;
        }
        if !self.renamer.on_selection(selected.variant.as_ref()) {
            return None;
        }
        Some(TextFieldRequest {
            id: RENAME_FIELD_ID,
            max_length: self.config.bond.naming.max_length,
            initial_value: self.item_name(host, selected),
        })
    }

    /// The host created the text field with its initial content.
    pub fn on_field_created(&mut self, initial_value: &str) {
        self.renamer.set_draft(initial_value, self.config.bond.naming.max_length);
    }

    /// The text field content changed.
    pub fn on_field_input(&mut self, value: &str) {
        self.renamer.set_draft(value, self.config.bond.naming.max_length);
    }

    /// A key was pressed in the text field. Enter commits.
    pub fn on_field_key(&mut self, templates: &mut dyn TemplateStore, selected: &mut WearableInstance, key: FieldKey) {
        if key == FieldKey::Enter {
            self.commit_rename(templates, selected);
        }
    }

    fn commit_rename(&mut self, templates: &mut dyn TemplateStore, item: &mut WearableInstance) {
        let result = self.renamer.commit(templates, item);
        self.contain(result);
    }

    // ------------------------------------------------------------------
    // Fault containment
    // ------------------------------------------------------------------

    fn contain<T>(&mut self, result: Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.report_fault(&err);
                None
            }
        }
    }

    fn report_fault(&mut self, err: &BwbError) {
        if err.is_consistency_fault() {
            error!(%err, "BWB consistency fault; operation aborted");
        } else {
            warn!(%err, "BWB operation failed");
        }
        self.renamer.cancel();
    }
}
