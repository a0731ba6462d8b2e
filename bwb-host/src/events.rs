//! Typed parameter objects for the host extension points.
//!
//! Each struct names the fields BWB reads out of a host callback, so the
//! positional argument contract of the host becomes an explicit one checked
//! where the composition layer builds these values.

use bwb_core::gate::RemovalAction;
use bwb_core::types::WearableInstance;

/// "Item applied" notification, fired after the host puts an item on.
#[derive(Debug)]
pub struct PostApply<'a> {
    /// The item that ended up on top of its slot.
    pub item: &'a mut WearableInstance,
    /// The item only surfaced because the one linked over it was removed.
    pub unlink: bool,
}

/// Lock operation on an item.
#[derive(Debug)]
pub struct LockRequest<'a> {
    /// Item being (un)locked.
    pub item: &'a mut WearableInstance,
    /// New lock kind; `None` or empty removes the lock.
    pub new_lock: Option<&'a str>,
}

impl LockRequest<'_> {
    /// Whether this locks a previously unlocked variant item.
    #[must_use]
    pub fn is_fresh_lock(&self) -> bool {
        self.item.variant.is_some()
            && !self.item.is_locked()
            && self.new_lock.is_some_and(|lock| !lock.is_empty())
    }
}

/// Struggle/removal attempt on a worn slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StruggleRequest {
    /// Slot group of the targeted item.
    pub group: String,
    /// The attempted action.
    pub action: RemovalAction,
    /// Index of the item within its linked stack. Not consulted by the gate,
    /// which judges the outermost item; handed back to the host unchanged.
    pub index: usize,
    /// Only asking whether the action is possible.
    pub query: bool,
}

/// Host result of a struggle attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StruggleResult {
    /// Attempt succeeded.
    Success,
    /// Attempt failed this turn.
    Fail,
    /// Attempt can never succeed.
    Impossible,
    /// Attempt is not possible right now.
    Strict,
}

/// Keys the rename field reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey {
    /// Confirm the name.
    Enter,
    /// Any other key; swallowed so the game does not treat it as a shortcut.
    Other,
}

/// Text field the host should draw while a rename is in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFieldRequest {
    /// Element id.
    pub id: &'static str,
    /// Maximum accepted characters.
    pub max_length: usize,
    /// Content to show when the field is first created.
    pub initial_value: String,
}
