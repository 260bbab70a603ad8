//! Structural collaborator contract and the in-memory board binding.
//!
//! # Responsibility
//! - Define the host-layer operations the placement logic relies on:
//!   sibling-index lookup, id-based entity lookup, nearest-column
//!   resolution, and the insert-before/after relocation primitives.
//! - Bind the contract to the in-memory `Board`.
//!
//! # Invariants
//! - Relocation primitives are the only structural side effects of drop
//!   handling.
//! - Inserting a card into a column rewrites the card's `column_uuid` in
//!   the same step, so relabeling can never be skipped.
//! - Inserting an entity relative to itself is a no-op, mirroring how a
//!   DOM element moved next to itself stays put.

use crate::model::board::{Board, BoardError, CardId, ColumnId};

/// Literal drop location reported by the host layer for one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropAnchor {
    /// Pointer is over a card element.
    Card(CardId),
    /// Pointer is over a column container (including its empty list body).
    Column(ColumnId),
}

/// Current location of a card: owning column plus sibling index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSlot {
    pub column_uuid: ColumnId,
    pub sibling_index: usize,
}

/// Host-layer contract consumed by drop handling.
pub trait BoardHost {
    /// Returns the current location of one card.
    fn locate_card(&self, card_uuid: CardId) -> Option<CardSlot>;

    /// Returns the current sibling index of one column.
    fn locate_column(&self, column_uuid: ColumnId) -> Option<usize>;

    /// Walks from a literal drop anchor up to the column containing it.
    ///
    /// Card anchors resolve to their owning column; column anchors
    /// resolve to themselves when they exist.
    fn nearest_column(&self, anchor: DropAnchor) -> Option<ColumnId>;

    /// Moves a card immediately before another card, relabeling it to
    /// the target's column.
    fn insert_card_before(&mut self, card_uuid: CardId, target_uuid: CardId)
        -> Result<(), BoardError>;

    /// Moves a card immediately after another card, relabeling it to
    /// the target's column.
    fn insert_card_after(&mut self, card_uuid: CardId, target_uuid: CardId)
        -> Result<(), BoardError>;

    /// Moves a card to the end of one column, relabeling it.
    fn append_card(&mut self, card_uuid: CardId, column_uuid: ColumnId)
        -> Result<(), BoardError>;

    /// Moves a column immediately before another column.
    fn insert_column_before(
        &mut self,
        column_uuid: ColumnId,
        target_uuid: ColumnId,
    ) -> Result<(), BoardError>;

    /// Moves a column immediately after another column.
    fn insert_column_after(
        &mut self,
        column_uuid: ColumnId,
        target_uuid: ColumnId,
    ) -> Result<(), BoardError>;
}

impl BoardHost for Board {
    fn locate_card(&self, card_uuid: CardId) -> Option<CardSlot> {
        for column in self.columns() {
            if let Some(index) = column.cards.iter().position(|card| card.uuid == card_uuid) {
                return Some(CardSlot {
                    column_uuid: column.uuid,
                    sibling_index: index,
                });
            }
        }
        None
    }

    fn locate_column(&self, column_uuid: ColumnId) -> Option<usize> {
        self.columns()
            .iter()
            .position(|column| column.uuid == column_uuid)
    }

    fn nearest_column(&self, anchor: DropAnchor) -> Option<ColumnId> {
        match anchor {
            DropAnchor::Card(card_uuid) => {
                self.locate_card(card_uuid).map(|slot| slot.column_uuid)
            }
            DropAnchor::Column(column_uuid) => {
                self.column(column_uuid).map(|column| column.uuid)
            }
        }
    }

    fn insert_card_before(
        &mut self,
        card_uuid: CardId,
        target_uuid: CardId,
    ) -> Result<(), BoardError> {
        relocate_card(self, card_uuid, target_uuid, 0)
    }

    fn insert_card_after(
        &mut self,
        card_uuid: CardId,
        target_uuid: CardId,
    ) -> Result<(), BoardError> {
        relocate_card(self, card_uuid, target_uuid, 1)
    }

    fn append_card(&mut self, card_uuid: CardId, column_uuid: ColumnId) -> Result<(), BoardError> {
        if self.column(column_uuid).is_none() {
            return Err(BoardError::ColumnNotFound(column_uuid));
        }
        let mut card = self
            .take_card(card_uuid)
            .ok_or(BoardError::CardNotFound(card_uuid))?;
        card.column_uuid = column_uuid;
        match self.column_mut(column_uuid) {
            Some(column) => {
                column.cards.push(card);
                Ok(())
            }
            // Unreachable after the existence check above; keep the error
            // path so the invariant does not rest on call ordering.
            None => Err(BoardError::ColumnNotFound(column_uuid)),
        }
    }

    fn insert_column_before(
        &mut self,
        column_uuid: ColumnId,
        target_uuid: ColumnId,
    ) -> Result<(), BoardError> {
        relocate_column(self, column_uuid, target_uuid, 0)
    }

    fn insert_column_after(
        &mut self,
        column_uuid: ColumnId,
        target_uuid: ColumnId,
    ) -> Result<(), BoardError> {
        relocate_column(self, column_uuid, target_uuid, 1)
    }
}

/// Detaches the card, then inserts it at the target's post-detach index
/// plus `offset` (0 = before, 1 = after).
fn relocate_card(
    board: &mut Board,
    card_uuid: CardId,
    target_uuid: CardId,
    offset: usize,
) -> Result<(), BoardError> {
    if card_uuid == target_uuid {
        return Ok(());
    }
    if board.locate_card(target_uuid).is_none() {
        return Err(BoardError::CardNotFound(target_uuid));
    }
    let mut card = board
        .take_card(card_uuid)
        .ok_or(BoardError::CardNotFound(card_uuid))?;
    let slot = board
        .locate_card(target_uuid)
        .ok_or(BoardError::CardNotFound(target_uuid))?;
    card.column_uuid = slot.column_uuid;
    let column = board
        .column_mut(slot.column_uuid)
        .ok_or(BoardError::ColumnNotFound(slot.column_uuid))?;
    let index = (slot.sibling_index + offset).min(column.cards.len());
    column.cards.insert(index, card);
    Ok(())
}

fn relocate_column(
    board: &mut Board,
    column_uuid: ColumnId,
    target_uuid: ColumnId,
    offset: usize,
) -> Result<(), BoardError> {
    if column_uuid == target_uuid {
        return Ok(());
    }
    if board.locate_column(target_uuid).is_none() {
        return Err(BoardError::ColumnNotFound(target_uuid));
    }
    let column = board
        .take_column(column_uuid)
        .ok_or(BoardError::ColumnNotFound(column_uuid))?;
    let target_index = board
        .locate_column(target_uuid)
        .ok_or(BoardError::ColumnNotFound(target_uuid))?;
    board.insert_column_at(target_index + offset, column);
    Ok(())
}
