//! Category reassignment policy for card drops.
//!
//! # Responsibility
//! - Decide, for a card drop, whether the gesture is a same-column
//!   reorder, a cross-column relocation, or a no-op.
//!
//! # Invariants
//! - Same-column placement uses the captured-index rule; cross-column
//!   placement uses pointer geometry.
//! - A drop on a column body relocates only across columns; within the
//!   owning column it stays a no-op, matching the requirement that a
//!   same-column reorder targets a card.
//! - Column drags never consult this policy; category is card-only.

use crate::drag::resolver::{
    position_by_captured_index, position_by_pointer, InsertPosition, PointerProfile,
};
use crate::model::board::ColumnId;

/// Outcome of the card drop policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardDropDecision {
    /// Reorder within the owning column, relative to the target card.
    Reorder(InsertPosition),
    /// Relocate into the target card's column and relabel, relative to
    /// the target card.
    Relocate(InsertPosition),
    /// Relocate to the end of the target column and relabel.
    Append,
    /// Leave the board untouched.
    Ignore,
}

/// Policy for a card dropped onto another card.
///
/// Cross-column drops with no pointer geometry fall on the "after" side,
/// the same side the geometry rule picks at its midpoint boundary.
pub fn decide_card_on_card(
    payload_category: ColumnId,
    picked_index: usize,
    target_category: ColumnId,
    target_index: usize,
    pointer: Option<&PointerProfile>,
) -> CardDropDecision {
    if payload_category == target_category {
        return CardDropDecision::Reorder(position_by_captured_index(picked_index, target_index));
    }
    let position = pointer
        .map(position_by_pointer)
        .unwrap_or(InsertPosition::After);
    CardDropDecision::Relocate(position)
}

/// Policy for a card dropped onto a column body rather than a card.
pub fn decide_card_on_column(
    payload_category: ColumnId,
    target_column: ColumnId,
) -> CardDropDecision {
    if payload_category == target_column {
        return CardDropDecision::Ignore;
    }
    CardDropDecision::Append
}
