//! Catalog domain model for burial spaces and the people who use them.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep one shared envelope for every burial-space variant.
//!
//! # Invariants
//! - Every burial space is identified by a stable `SpaceId`.
//! - Deactivation is a soft-state flag; deletion is hard removal.

pub mod person;
pub mod space;
