//! Core types and formulas for the portal.
//!
//! This crate contains domain types shared across all other crates: the
//! `PortalItem` tagged union, vertical/capability declarations, the derived
//! analytics formulas, and the locale-aware parsing helpers the normalizers
//! build on.

mod brl;
mod calc;
mod capability;
mod constants;
mod error;
mod favorites;
mod item;
mod slug;
mod vertical;

pub use brl::*;
pub use calc::*;
pub use capability::*;
pub use constants::*;
pub use error::*;
pub use favorites::*;
pub use item::*;
pub use slug::*;
pub use vertical::*;
