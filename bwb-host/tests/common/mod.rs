//! A scripted in-memory host for integration tests.

#![allow(dead_code)]

use bwb_core::bonding::ItemRules;
use bwb_core::floor::FloorCounters;
use bwb_core::shadow::{TemplateRegistry, TemplateStore};
use bwb_core::types::{Effect, VariantId, VariantTemplate, WearableInstance};
use bwb_host::events::PostApply;
use bwb_host::host::{BondingView, Host, Notification};
use bwb_host::text::TextKey;
use bwb_host::BondMod;

/// Item classification by naming convention.
pub struct SimRules;

impl ItemRules for SimRules {
    fn is_armor(&self, item: &WearableInstance) -> bool {
        item.name.ends_with("Armor")
    }

    fn is_lockable(&self, item: &WearableInstance) -> bool {
        !item.name.starts_with("Soft")
    }

    fn is_enchantment(&self, kind: &str) -> bool {
        kind != "Curse"
    }
}

pub struct SimHost {
    pub worn: Vec<WearableInstance>,
    pub groups: Vec<String>,
    pub templates: TemplateRegistry,
    pub rules: SimRules,
    pub floors: FloorCounters,
    pub messages: Vec<Notification>,
    pub language: String,
}

impl SimHost {
    pub fn new() -> Self {
        Self {
            worn: Vec::new(),
            groups: Vec::new(),
            templates: TemplateRegistry::new(),
            rules: SimRules,
            floors: FloorCounters {
                current: 1,
                highest_reached: 1,
            },
            messages: Vec::new(),
            language: "EN".to_string(),
        }
    }

    /// Register a variant template.
    pub fn define(&mut self, id: &str, base: &str, events: Vec<Effect>) {
        self.templates.insert(id, VariantTemplate::new(base, events));
    }

    /// Put on a fresh instance of a defined variant, the way the host does.
    pub fn equip(&mut self, bwb: &BondMod, group: &str, id: &str) -> usize {
        let id = VariantId::from(id);
        let item = self
            .templates
            .template(&id)
            .map(|template| template.fresh_instance(&id))
            .expect("variant defined");
        self.worn.push(item);
        self.groups.push(group.to_string());

        let index = self.worn.len() - 1;
        bwb.on_post_apply(
            &mut self.templates,
            PostApply {
                item: &mut self.worn[index],
                unlink: false,
            },
        );
        index
    }

    /// Put on a plain (non-variant) item.
    pub fn equip_plain(&mut self, group: &str, name: &str) -> usize {
        self.worn.push(WearableInstance::plain(name));
        self.groups.push(group.to_string());
        self.worn.len() - 1
    }

    /// Go down one floor through the hook, then update the highest-floor
    /// counter the way the host's own bookkeeping does afterwards.
    pub fn advance_floor(&mut self, bwb: &mut BondMod) {
        bwb.after_advance_level(self, |host| host.floors.current += 1);
        self.floors.highest_reached = self.floors.highest_reached.max(self.floors.current);
    }

    /// Advance without gaining a floor (e.g. revisiting one).
    pub fn advance_same_floor(&mut self, bwb: &mut BondMod) {
        bwb.after_advance_level(self, |_| ());
    }

    /// Replace every worn instance by a freshly built one, as the host does
    /// on save/load, and run them back through item-applied.
    pub fn recreate_worn(&mut self, bwb: &BondMod) {
        for item in &mut self.worn {
            let Some(id) = item.variant.clone() else {
                continue;
            };
            let lock = item.lock.take();
            *item = self.templates.template(&id).expect("variant defined").fresh_instance(&id);
            item.lock = lock;
            bwb.on_post_apply(&mut self.templates, PostApply { item, unlink: true });
        }
    }

    pub fn level_of(&self, index: usize) -> Option<u32> {
        self.worn[index].bond_level()
    }

    pub fn message_keys(&self) -> Vec<String> {
        self.messages
            .iter()
            .map(|m| m.text.split('|').next().unwrap_or_default().to_string())
            .collect()
    }
}

impl Host for SimHost {
    fn floors(&self) -> FloorCounters {
        self.floors
    }

    fn worn_items(&self) -> &[WearableInstance] {
        &self.worn
    }

    fn restraint_in_group(&self, group: &str) -> Option<&WearableInstance> {
        let index = self.groups.iter().rposition(|g| g == group)?;
        self.worn.get(index)
    }

    fn templates(&self) -> &dyn TemplateStore {
        &self.templates
    }

    fn bonding_view(&mut self) -> BondingView<'_> {
        BondingView {
            worn: self.worn.as_mut_slice(),
            templates: &mut self.templates,
            rules: &self.rules,
        }
    }

    fn default_item_name(&self, item: &WearableInstance) -> String {
        format!("Restraint{}", item.name)
    }

    fn default_name_string(&self, name: &str) -> String {
        format!("Restraint{name}")
    }

    fn text_get(&self, key: TextKey, restraint_name: Option<&str>) -> String {
        format!("{}|{}", key.as_str(), restraint_name.unwrap_or_default())
    }

    fn send_text_message(&mut self, message: Notification) {
        self.messages.push(message);
    }

    fn language(&self) -> &str {
        &self.language
    }
}
