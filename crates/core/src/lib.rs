//! `itemdesk-core` — the item record and its validation rules.
//!
//! This crate is **pure** (no HTTP or runtime concerns).

pub mod error;
pub mod id;
pub mod item;

pub use error::{DomainError, DomainResult};
pub use id::ItemId;
pub use item::Item;
