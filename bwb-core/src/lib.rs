//! # BWB Core Library
//!
//! Host-agnostic bonding logic for worn items. Every enchanted item variant
//! the player keeps on through a whole floor grows a persistent **bond
//! level**, which scales the item's enchantment powers and eventually makes
//! the item resist being taken off.
//!
//! - [`floor`] — detects when a floor was actually gained
//! - [`bonding`] — the per-floor level-up pass and stat math
//! - [`flavor`] — which message tier a level-up announces
//! - [`shadow`] — repair/commit protocol keeping mod data on the durable
//!   per-variant template
//! - [`naming`] — rename editor and display-name resolution
//! - [`gate`] — refuses escape attempts at high bond levels
//!
//! Nothing here talks to the host directly; the integration layer feeds in
//! host state and turns the returned reports into notifications.

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod bonding;
pub mod config;
pub mod error;
pub mod flavor;
pub mod floor;
pub mod gate;
pub mod naming;
pub mod shadow;
pub mod types;

pub use config::BondConfig;
pub use error::BwbError;
pub use shadow::{TemplateRegistry, TemplateStore};
pub use types::*;
