//! Drag-and-drop engine.
//!
//! # Responsibility
//! - Interpret drag gestures reported by the hosting UI layer.
//! - Decide legal drop targets, ordering, and cross-column moves.
//!
//! # Invariants
//! - At most one drag session is active at a time.
//! - Illegal or no-op moves degrade to an ignored outcome, never a panic.
//! - The only structural side effects go through the `BoardHost` trait.

pub mod controller;
pub mod host;
pub mod payload;
pub mod policy;
pub mod resolver;
pub mod session;
