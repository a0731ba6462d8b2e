//! The host contract: everything BWB consumes from the game.
//!
//! A composition layer implements [`Host`] over the game's own state and
//! routes the game's extension points to the [`crate::hooks::BondMod`]
//! methods. Nothing in this crate reassigns host functions; the original
//! operation is always handed in as a closure and called through.

use bwb_core::bonding::ItemRules;
use bwb_core::floor::FloorCounters;
use bwb_core::shadow::TemplateStore;
use bwb_core::types::WearableInstance;

use crate::text::TextKey;

/// Message colors used by BWB.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageColor {
    /// Highlight color for bond messages.
    BasePink,
    /// Plain message color.
    BaseWhite,
}

/// A text message for the host's message log.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// Host priority (higher wins when messages compete).
    pub priority: u8,
    /// Localized text.
    pub text: String,
    /// Display color.
    pub color: MessageColor,
    /// Turns the message stays on screen.
    pub duration: u32,
}

impl Notification {
    /// Priority used for every BWB message.
    pub const PRIORITY: u8 = 5;

    /// Build a message at BWB's standard priority.
    #[must_use]
    pub fn new(text: String, color: MessageColor, duration: u32) -> Self {
        Self {
            priority: Self::PRIORITY,
            text,
            color,
            duration,
        }
    }
}

/// Mutable access to the worn items and templates at the same time, plus the
/// item rules the bonding pass needs. Hosts build it by splitting their own
/// fields.
pub struct BondingView<'a> {
    /// Items currently worn by the player.
    pub worn: &'a mut [WearableInstance],
    /// Durable per-variant templates.
    pub templates: &'a mut dyn TemplateStore,
    /// Host item classification.
    pub rules: &'a dyn ItemRules,
}

/// What BWB needs from the host game.
pub trait Host {
    /// Floor counters as they stand now.
    fn floors(&self) -> FloorCounters;

    /// Items currently worn by the player.
    fn worn_items(&self) -> &[WearableInstance];

    /// The outermost restraint worn in `group`, if any.
    fn restraint_in_group(&self, group: &str) -> Option<&WearableInstance>;

    /// Durable per-variant templates.
    fn templates(&self) -> &dyn TemplateStore;

    /// Split borrow used by the bonding pass.
    fn bonding_view(&mut self) -> BondingView<'_>;

    /// The host's own display name for an item.
    fn default_item_name(&self, item: &WearableInstance) -> String;

    /// The host's own display name for a bare item name.
    fn default_name_string(&self, name: &str) -> String;

    /// Localized text for `key`, with `RestraintName` substituted if given.
    fn text_get(&self, key: TextKey, restraint_name: Option<&str>) -> String;

    /// Push a message to the message log.
    fn send_text_message(&mut self, message: Notification);

    /// Current UI language code, e.g. `"EN"`.
    fn language(&self) -> &str;
}
