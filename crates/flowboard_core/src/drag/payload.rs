//! Transfer payload codec.
//!
//! # Responsibility
//! - Serialize the identity of a dragged entity into the `text/plain`
//!   drag channel and decode it strictly on the receiving side.
//!
//! # Invariants
//! - The payload is the only trusted carrier of drag identity; the drop
//!   event's target is the drop location, never the dragged entity.
//! - Decoding fails closed: unknown discriminator, wrong arity, or
//!   malformed fields produce an error, which callers map to a no-op.
//! - Field values never contain the delimiter: identifiers are UUIDs and
//!   indices are plain decimal integers.

use crate::drag::session::DragKind;
use crate::model::board::{CardId, ColumnId};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// MIME type of the drag data channel.
pub const PAYLOAD_MIME: &str = "text/plain";

const DELIMITER: char = ',';
const CARD_TAG: &str = "item";
const COLUMN_TAG: &str = "projectList";
const CARD_ARITY: usize = 4;
const COLUMN_ARITY: usize = 3;

/// Errors from strict payload decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    /// Payload text is empty.
    Empty,
    /// First field is not a known entity kind.
    UnknownDiscriminator(String),
    /// Field count does not match the discriminator's schema.
    WrongArity { expected: usize, actual: usize },
    /// Sibling index field is not a non-negative integer.
    InvalidIndex(String),
    /// Identifier field is not a valid UUID.
    InvalidId(String),
}

impl Display for PayloadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "payload is empty"),
            Self::UnknownDiscriminator(tag) => {
                write!(f, "unknown payload discriminator: `{tag}`")
            }
            Self::WrongArity { expected, actual } => {
                write!(f, "payload has {actual} fields, expected {expected}")
            }
            Self::InvalidIndex(value) => write!(f, "invalid sibling index: `{value}`"),
            Self::InvalidId(value) => write!(f, "invalid entity id: `{value}`"),
        }
    }
}

impl Error for PayloadError {}

/// Identity of the entity in flight, captured at drag-start.
///
/// `picked_index` is the entity's sibling index at capture time. It is
/// never re-validated against later structure changes; drop handling
/// resolves the entity by id and only uses the captured index to choose
/// before/after relative to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferPayload {
    /// A dragged card and the column that owned it at drag-start.
    Card {
        category_uuid: ColumnId,
        picked_index: usize,
        card_uuid: CardId,
    },
    /// A dragged column.
    Column {
        picked_index: usize,
        column_uuid: ColumnId,
    },
}

impl TransferPayload {
    /// Returns the structural kind of the payload.
    pub fn kind(&self) -> DragKind {
        match self {
            Self::Card { .. } => DragKind::Card,
            Self::Column { .. } => DragKind::Column,
        }
    }

    /// Serializes the payload for the drag data channel.
    ///
    /// Wire format:
    /// - card:   `item,<categoryId>,<siblingIndex>,<entityId>`
    /// - column: `projectList,<siblingIndex>,<entityId>`
    pub fn encode(&self) -> String {
        match self {
            Self::Card {
                category_uuid,
                picked_index,
                card_uuid,
            } => format!("{CARD_TAG}{DELIMITER}{category_uuid}{DELIMITER}{picked_index}{DELIMITER}{card_uuid}"),
            Self::Column {
                picked_index,
                column_uuid,
            } => format!("{COLUMN_TAG}{DELIMITER}{picked_index}{DELIMITER}{column_uuid}"),
        }
    }

    /// Decodes a payload with strict arity and field validation.
    ///
    /// # Errors
    /// - Any malformed input yields a `PayloadError`; callers must treat
    ///   that as "no move", never as a crash.
    pub fn decode(raw: &str) -> Result<Self, PayloadError> {
        if raw.trim().is_empty() {
            return Err(PayloadError::Empty);
        }
        let fields: Vec<&str> = raw.split(DELIMITER).collect();
        match fields[0] {
            CARD_TAG => {
                ensure_arity(CARD_ARITY, fields.len())?;
                Ok(Self::Card {
                    category_uuid: parse_id(fields[1])?,
                    picked_index: parse_index(fields[2])?,
                    card_uuid: parse_id(fields[3])?,
                })
            }
            COLUMN_TAG => {
                ensure_arity(COLUMN_ARITY, fields.len())?;
                Ok(Self::Column {
                    picked_index: parse_index(fields[1])?,
                    column_uuid: parse_id(fields[2])?,
                })
            }
            other => Err(PayloadError::UnknownDiscriminator(other.to_string())),
        }
    }
}

fn ensure_arity(expected: usize, actual: usize) -> Result<(), PayloadError> {
    if expected != actual {
        return Err(PayloadError::WrongArity { expected, actual });
    }
    Ok(())
}

fn parse_index(value: &str) -> Result<usize, PayloadError> {
    value
        .parse::<usize>()
        .map_err(|_| PayloadError::InvalidIndex(value.to_string()))
}

fn parse_id(value: &str) -> Result<Uuid, PayloadError> {
    Uuid::parse_str(value).map_err(|_| PayloadError::InvalidId(value.to_string()))
}
