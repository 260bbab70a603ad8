//! Board, column, and card structures.
//!
//! # Responsibility
//! - Hold the ordered column/card state that drag gestures rearrange.
//! - Provide create/remove operations with blank-input guards.
//!
//! # Invariants
//! - Column order and per-column card order are the single source of
//!   truth for sibling indices.
//! - Removal is immediate; there is no confirmation or tombstone state.
//! - Titles and card contents are non-blank after trimming.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable card identifier.
pub type CardId = Uuid;

/// Stable column identifier. Doubles as the card's category id.
pub type ColumnId = Uuid;

/// Errors from board model operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Column title is blank after trim.
    InvalidTitle,
    /// Card content is blank after trim.
    InvalidContent,
    /// Target column does not exist on this board.
    ColumnNotFound(ColumnId),
    /// Target card does not exist on this board.
    CardNotFound(CardId),
}

impl Display for BoardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTitle => write!(f, "column title must not be blank"),
            Self::InvalidContent => write!(f, "card content must not be blank"),
            Self::ColumnNotFound(id) => write!(f, "column not found: {id}"),
            Self::CardNotFound(id) => write!(f, "card not found: {id}"),
        }
    }
}

impl Error for BoardError {}

/// A single draggable item belonging to exactly one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Stable global ID used in transfer payloads and lookups.
    pub uuid: CardId,
    /// Owning column. Rewritten whenever the card changes columns.
    pub column_uuid: ColumnId,
    /// User-entered text, non-blank after trim.
    pub content: String,
}

/// A user-created list container holding an ordered sequence of cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Stable global ID. Cards in this column carry it as their category.
    pub uuid: ColumnId,
    /// User-facing label, non-blank after trim.
    pub title: String,
    /// Cards in display order. Index == sibling index.
    pub cards: Vec<Card>,
}

/// Ordered collection of columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    columns: Vec<Column>,
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new column and returns its id.
    ///
    /// # Errors
    /// - `InvalidTitle` when the title is blank after trim. Callers
    ///   surface this as a blocking notification before anything is
    ///   created.
    pub fn add_column(&mut self, title: impl Into<String>) -> Result<ColumnId, BoardError> {
        let title = normalize_input(title.into(), BoardError::InvalidTitle)?;
        let uuid = Uuid::new_v4();
        self.columns.push(Column {
            uuid,
            title,
            cards: Vec::new(),
        });
        Ok(uuid)
    }

    /// Appends a new card to the end of one column and returns its id.
    ///
    /// # Errors
    /// - `InvalidContent` when the content is blank after trim.
    /// - `ColumnNotFound` when the column does not exist.
    pub fn add_card(
        &mut self,
        column_uuid: ColumnId,
        content: impl Into<String>,
    ) -> Result<CardId, BoardError> {
        let content = normalize_input(content.into(), BoardError::InvalidContent)?;
        let column = self
            .column_mut(column_uuid)
            .ok_or(BoardError::ColumnNotFound(column_uuid))?;
        let uuid = Uuid::new_v4();
        column.cards.push(Card {
            uuid,
            column_uuid,
            content,
        });
        Ok(uuid)
    }

    /// Removes one column and everything in it. Immediate, no confirmation.
    pub fn remove_column(&mut self, column_uuid: ColumnId) -> Result<Column, BoardError> {
        let index = self
            .columns
            .iter()
            .position(|column| column.uuid == column_uuid)
            .ok_or(BoardError::ColumnNotFound(column_uuid))?;
        Ok(self.columns.remove(index))
    }

    /// Removes one card from whichever column contains it.
    pub fn remove_card(&mut self, card_uuid: CardId) -> Result<Card, BoardError> {
        self.take_card(card_uuid)
            .ok_or(BoardError::CardNotFound(card_uuid))
    }

    /// Returns columns in display order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns one column by id.
    pub fn column(&self, column_uuid: ColumnId) -> Option<&Column> {
        self.columns
            .iter()
            .find(|column| column.uuid == column_uuid)
    }

    /// Returns one card by id, searching all columns.
    pub fn card(&self, card_uuid: CardId) -> Option<&Card> {
        self.columns
            .iter()
            .flat_map(|column| column.cards.iter())
            .find(|card| card.uuid == card_uuid)
    }

    /// Returns column ids in display order.
    pub fn column_order(&self) -> Vec<ColumnId> {
        self.columns.iter().map(|column| column.uuid).collect()
    }

    /// Returns card ids of one column in display order.
    pub fn card_order(&self, column_uuid: ColumnId) -> Result<Vec<CardId>, BoardError> {
        let column = self
            .column(column_uuid)
            .ok_or(BoardError::ColumnNotFound(column_uuid))?;
        Ok(column.cards.iter().map(|card| card.uuid).collect())
    }

    pub(crate) fn column_mut(&mut self, column_uuid: ColumnId) -> Option<&mut Column> {
        self.columns
            .iter_mut()
            .find(|column| column.uuid == column_uuid)
    }

    /// Detaches one card from its current column, preserving everything else.
    pub(crate) fn take_card(&mut self, card_uuid: CardId) -> Option<Card> {
        for column in &mut self.columns {
            if let Some(index) = column.cards.iter().position(|card| card.uuid == card_uuid) {
                return Some(column.cards.remove(index));
            }
        }
        None
    }

    /// Detaches one column, preserving its cards.
    pub(crate) fn take_column(&mut self, column_uuid: ColumnId) -> Option<Column> {
        let index = self
            .columns
            .iter()
            .position(|column| column.uuid == column_uuid)?;
        Some(self.columns.remove(index))
    }

    pub(crate) fn insert_column_at(&mut self, index: usize, column: Column) {
        let index = index.min(self.columns.len());
        self.columns.insert(index, column);
    }
}

fn normalize_input(value: String, on_blank: BoardError) -> Result<String, BoardError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(on_blank);
    }
    Ok(trimmed.to_string())
}
