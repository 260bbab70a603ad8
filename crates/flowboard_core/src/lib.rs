//! Core drag-and-drop engine for the Flowboard kanban board.
//! This crate is the single source of truth for placement and
//! reassignment invariants; the hosting UI layer only reports gestures
//! and applies the resulting structure.

pub mod bus;
pub mod drag;
pub mod logging;
pub mod model;

pub use bus::{BoardEvent, EventBus, ListenerId};
pub use drag::controller::{DragDropController, DropOutcome, IgnoreReason, MarkerTarget};
pub use drag::host::{BoardHost, CardSlot, DropAnchor};
pub use drag::payload::{PayloadError, TransferPayload, PAYLOAD_MIME};
pub use drag::policy::CardDropDecision;
pub use drag::resolver::{InsertPosition, PointerProfile};
pub use drag::session::{DragKind, DragSession};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::board::{Board, BoardError, Card, CardId, Column, ColumnId};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
