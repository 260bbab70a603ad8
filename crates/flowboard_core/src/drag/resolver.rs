//! Placement resolution.
//!
//! # Responsibility
//! - Choose before/after placement relative to a drop target and apply
//!   it through the host relocation primitives.
//!
//! # Invariants
//! - The dragged entity is resolved by stable id at drop time; the only
//!   index read from the payload is the one captured at drag-start, and
//!   it is compared against the target's *current* index. Structure
//!   changes between drag-start and drop therefore cannot redirect the
//!   move to the wrong entity.

use crate::drag::host::BoardHost;
use crate::model::board::{BoardError, CardId, ColumnId};

/// Placement relative to the drop target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    /// Insert immediately before the target.
    Before,
    /// Insert immediately after the target.
    After,
}

/// Pointer geometry within the drop target at drop time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerProfile {
    /// Vertical pointer offset from the target's top edge, in pixels.
    pub offset_y: f64,
    /// Rendered height of the target element, in pixels.
    pub target_height: f64,
}

/// Before/after by index comparison.
///
/// A picked index greater than the target's current index means the
/// entity travels toward the start of the list and lands before the
/// target; anything else lands after it.
pub fn position_by_captured_index(picked_index: usize, target_index: usize) -> InsertPosition {
    if picked_index > target_index {
        InsertPosition::Before
    } else {
        InsertPosition::After
    }
}

/// Before/after by pointer geometry.
///
/// Above the target's vertical midpoint inserts before it; at or below
/// the midpoint inserts after it.
pub fn position_by_pointer(pointer: &PointerProfile) -> InsertPosition {
    if pointer.offset_y < pointer.target_height / 2.0 {
        InsertPosition::Before
    } else {
        InsertPosition::After
    }
}

/// Applies a card placement through the host primitives.
pub fn place_card(
    host: &mut dyn BoardHost,
    card_uuid: CardId,
    target_uuid: CardId,
    position: InsertPosition,
) -> Result<(), BoardError> {
    match position {
        InsertPosition::Before => host.insert_card_before(card_uuid, target_uuid),
        InsertPosition::After => host.insert_card_after(card_uuid, target_uuid),
    }
}

/// Applies a column placement through the host primitives.
pub fn place_column(
    host: &mut dyn BoardHost,
    column_uuid: ColumnId,
    target_uuid: ColumnId,
    position: InsertPosition,
) -> Result<(), BoardError> {
    match position {
        InsertPosition::Before => host.insert_column_before(column_uuid, target_uuid),
        InsertPosition::After => host.insert_column_after(column_uuid, target_uuid),
    }
}

#[cfg(test)]
mod tests {
    use super::{position_by_captured_index, position_by_pointer, InsertPosition, PointerProfile};

    #[test]
    fn captured_index_rule_moves_toward_the_pick_direction() {
        assert_eq!(position_by_captured_index(2, 0), InsertPosition::Before);
        assert_eq!(position_by_captured_index(0, 2), InsertPosition::After);
        // Equal indices fall on the "after" side, which makes a drop on
        // the entity's own slot a structural no-op.
        assert_eq!(position_by_captured_index(1, 1), InsertPosition::After);
    }

    #[test]
    fn pointer_rule_splits_on_midpoint() {
        let above = PointerProfile {
            offset_y: 9.9,
            target_height: 20.0,
        };
        let exactly_mid = PointerProfile {
            offset_y: 10.0,
            target_height: 20.0,
        };
        let below = PointerProfile {
            offset_y: 19.0,
            target_height: 20.0,
        };
        assert_eq!(position_by_pointer(&above), InsertPosition::Before);
        assert_eq!(position_by_pointer(&exactly_mid), InsertPosition::After);
        assert_eq!(position_by_pointer(&below), InsertPosition::After);
    }
}
