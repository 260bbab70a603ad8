//! Drag session state.
//!
//! # Responsibility
//! - Record what kind of entity is currently in flight for the duration
//!   of exactly one gesture.
//!
//! # Invariants
//! - A session is a value scoped to one gesture: created at drag-start,
//!   dropped at drag-end or after drop. Nothing leaks across gestures.
//! - Beginning a new drag replaces any stale session.

use crate::drag::payload::TransferPayload;

/// Structural kind of the entity being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    /// A card inside a column.
    Card,
    /// A whole column.
    Column,
}

impl DragKind {
    /// Stable lowercase name for log records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Column => "column",
        }
    }
}

/// Live state of one drag gesture.
///
/// Owned by the controller rather than held in process-global state, so
/// consumers can only observe a session while its gesture is in
/// progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    payload: TransferPayload,
}

impl DragSession {
    /// Starts a session for the given in-flight entity.
    pub fn begin(payload: TransferPayload) -> Self {
        Self { payload }
    }

    /// Returns the kind of the entity in flight.
    pub fn kind(&self) -> DragKind {
        self.payload.kind()
    }

    /// Returns the identity captured at drag-start.
    pub fn payload(&self) -> &TransferPayload {
        &self.payload
    }
}
