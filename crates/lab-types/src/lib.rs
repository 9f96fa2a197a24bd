//! Common types for the Pancake Lab order system.
//!
//! This crate defines the core data types shared by every other crate in the
//! workspace. It provides a centralized location for the ingredient catalog
//! contract, the pancake value type, order identifiers and statuses, and the
//! audit event records emitted on lifecycle transitions.

/// Audit event records emitted on successful lifecycle transitions.
pub mod events;
/// Ingredient identifiers and their base/custom classification.
pub mod ingredient;
/// Order identifiers, statuses, and read-only order views.
pub mod order;
/// The pancake value type, its validated builder, and the catalog contract.
pub mod pancake;

// Re-export all types for convenient access
pub use events::*;
pub use ingredient::*;
pub use order::*;
pub use pancake::*;
