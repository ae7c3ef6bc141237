//! Aggregation services over the care model.
//!
//! # Responsibility
//! - Own registered owners and answer due-task queries across them.
//! - Offer a lock-guarded handle for multi-threaded callers.

pub mod shared;
pub mod tracker;
