//! # bwb-host — Host Integration for BWB
//!
//! Connects the host-agnostic `bwb-core` logic to the game. The game is
//! reached only through the [`host::Host`] trait; each of its extension
//! points is routed to a method on [`hooks::BondMod`], which is handed the
//! game's original operation and calls through to it.
//!
//! ```text
//! ┌────────────────────────────────────────┐
//! │               Host game                │
//! │   extension points ──► hooks::BondMod  │
//! │                           │            │
//! │        host::Host ◄───────┤            │
//! │                           ▼            │
//! │                       bwb-core         │
//! └────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `hooks` — the hook implementations and rename editor wiring
//! - `host` — the host contract and notification types
//! - `events` — typed parameter objects for host callbacks
//! - `actions` — the "rename" inventory action
//! - `text` — localization keys
//! - `config` — settings-page entries on top of the core config
//! - `logging` — subscriber setup outside the game

#![deny(clippy::unwrap_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod actions;
pub mod config;
pub mod events;
pub mod hooks;
pub mod host;
pub mod logging;
pub mod text;

pub use hooks::BondMod;
pub use host::{BondingView, Host, MessageColor, Notification};
