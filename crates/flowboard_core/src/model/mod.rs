//! Domain model for the board.
//!
//! # Responsibility
//! - Define the canonical column/card structures owned by core.
//! - Enforce creation-time input guards before anything is added.
//!
//! # Invariants
//! - Every entity is identified by a stable UUID assigned at creation.
//! - A card belongs to exactly one column; `Card::column_uuid` always
//!   names the column that currently contains it.

pub mod board;
