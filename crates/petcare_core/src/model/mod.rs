//! Care domain model: schedules, tasks, pets and owners.
//!
//! # Responsibility
//! - Define the owner -> pet -> task -> schedule ownership tree.
//! - Enforce identity and range invariants at construction and insertion.
//!
//! # Invariants
//! - Ownership is strictly tree-shaped; there are no back-references.
//! - Every collection iterates in insertion order.

pub mod owner;
pub mod pet;
pub mod schedule;
pub mod task;
pub mod validation;
pub mod vet;
