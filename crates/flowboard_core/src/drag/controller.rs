//! Drag gesture controller.
//!
//! # Responsibility
//! - Own the session, the transient "droppable" marker, and the event
//!   bus for one board view.
//! - Translate drag-start/over/leave/drop/end reports from the host
//!   layer into payloads, marker changes, and structural moves.
//!
//! # Invariants
//! - The marker never survives a drop, a drag-leave, or a drag-end.
//! - A gesture that starts and never produces a drop leaves no state
//!   behind once drag-end fires.
//! - Malformed payloads and illegal moves degrade to an ignored outcome.

use crate::bus::{BoardEvent, EventBus, ListenerId};
use crate::drag::host::{BoardHost, DropAnchor};
use crate::drag::payload::TransferPayload;
use crate::drag::policy::{decide_card_on_card, decide_card_on_column, CardDropDecision};
use crate::drag::resolver::{
    place_card, place_column, position_by_captured_index, PointerProfile,
};
use crate::drag::session::{DragKind, DragSession};
use crate::model::board::{BoardError, CardId, ColumnId};
use log::{debug, info, warn};

/// Entity currently carrying the "droppable" visual state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerTarget {
    Card(CardId),
    Column(ColumnId),
}

/// Why a drop left the board untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Payload failed strict decoding.
    MalformedPayload,
    /// The dragged entity is no longer on the board.
    UnknownDragSource,
    /// The drop anchor does not resolve to a live entity.
    MissingTarget,
    /// Entity dropped onto itself.
    SelfDrop,
    /// A same-column reorder needs a card as its anchor, not the column
    /// body.
    NeedsCardAnchor,
}

impl IgnoreReason {
    /// Stable name for log records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MalformedPayload => "malformed_payload",
            Self::UnknownDragSource => "unknown_drag_source",
            Self::MissingTarget => "missing_target",
            Self::SelfDrop => "self_drop",
            Self::NeedsCardAnchor => "needs_card_anchor",
        }
    }
}

/// Result of one drop gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Card changed position inside one column.
    CardReordered {
        card_uuid: CardId,
        column_uuid: ColumnId,
    },
    /// Card moved to another column and was relabeled to it.
    CardRelocated {
        card_uuid: CardId,
        from_column: ColumnId,
        to_column: ColumnId,
    },
    /// Column changed position among its siblings.
    ColumnReordered { column_uuid: ColumnId },
    /// Nothing changed.
    Ignored(IgnoreReason),
}

/// Per-view controller for drag-and-drop gestures.
#[derive(Default)]
pub struct DragDropController {
    session: Option<DragSession>,
    marker: Option<MarkerTarget>,
    bus: EventBus,
}

impl DragDropController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a card drag and returns the encoded payload for the drag
    /// data channel.
    ///
    /// # Errors
    /// - `CardNotFound` when the card is not on the board.
    pub fn begin_card_drag(
        &mut self,
        host: &dyn BoardHost,
        card_uuid: CardId,
    ) -> Result<String, BoardError> {
        let slot = host
            .locate_card(card_uuid)
            .ok_or(BoardError::CardNotFound(card_uuid))?;
        let payload = TransferPayload::Card {
            category_uuid: slot.column_uuid,
            picked_index: slot.sibling_index,
            card_uuid,
        };
        self.session = Some(DragSession::begin(payload));
        debug!(
            "event=drag_start module=drag kind=card card={card_uuid} index={}",
            slot.sibling_index
        );
        Ok(payload.encode())
    }

    /// Starts a column drag and returns the encoded payload.
    ///
    /// # Errors
    /// - `ColumnNotFound` when the column is not on the board.
    pub fn begin_column_drag(
        &mut self,
        host: &dyn BoardHost,
        column_uuid: ColumnId,
    ) -> Result<String, BoardError> {
        let picked_index = host
            .locate_column(column_uuid)
            .ok_or(BoardError::ColumnNotFound(column_uuid))?;
        let payload = TransferPayload::Column {
            picked_index,
            column_uuid,
        };
        self.session = Some(DragSession::begin(payload));
        debug!("event=drag_start module=drag kind=column column={column_uuid} index={picked_index}");
        Ok(payload.encode())
    }

    /// Kind of the entity currently in flight, if any.
    pub fn session_kind(&self) -> Option<DragKind> {
        self.session.as_ref().map(DragSession::kind)
    }

    /// Entity currently carrying the "droppable" marker, if any.
    pub fn marker(&self) -> Option<MarkerTarget> {
        self.marker
    }

    /// Handles a drag-over report.
    ///
    /// Returns whether the host must suppress its default reject-drop
    /// behavior so a drop event can fire. Marker placement follows the
    /// session kind: card drags mark the pointed-at card, column drags
    /// mark the nearest column container.
    pub fn drag_over(&mut self, host: &dyn BoardHost, anchor: DropAnchor) -> bool {
        let Some(session) = &self.session else {
            return false;
        };
        match session.kind() {
            DragKind::Card => {
                if let DropAnchor::Card(card_uuid) = anchor {
                    self.marker = Some(MarkerTarget::Card(card_uuid));
                }
            }
            DragKind::Column => {
                if let Some(column_uuid) = host.nearest_column(anchor) {
                    self.marker = Some(MarkerTarget::Column(column_uuid));
                }
            }
        }
        true
    }

    /// Handles a drag-leave report. The marker never persists past it.
    pub fn drag_leave(&mut self) {
        self.marker = None;
    }

    /// Handles a drop.
    ///
    /// The payload text is the trusted identity channel; the anchor only
    /// names the drop location. The marker and session are cleared no
    /// matter what the outcome is.
    pub fn handle_drop(
        &mut self,
        host: &mut dyn BoardHost,
        raw_payload: &str,
        anchor: DropAnchor,
        pointer: Option<PointerProfile>,
    ) -> DropOutcome {
        let outcome = match TransferPayload::decode(raw_payload) {
            Ok(TransferPayload::Card {
                category_uuid,
                picked_index,
                card_uuid,
            }) => drop_card(host, category_uuid, picked_index, card_uuid, anchor, pointer),
            Ok(TransferPayload::Column {
                picked_index,
                column_uuid,
            }) => drop_column(host, picked_index, column_uuid, anchor),
            Err(err) => {
                warn!("event=drop_rejected module=drag reason=malformed_payload detail={err}");
                DropOutcome::Ignored(IgnoreReason::MalformedPayload)
            }
        };
        self.marker = None;
        self.session = None;
        self.announce(&outcome);
        outcome
    }

    /// Handles a drag-end report, including gestures that never dropped.
    pub fn drag_end(&mut self) {
        self.marker = None;
        self.session = None;
    }

    /// Registers a board event listener.
    pub fn subscribe(&mut self, listener: impl Fn(&BoardEvent) + 'static) -> ListenerId {
        self.bus.subscribe(listener)
    }

    /// Deregisters a board event listener.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.bus.unsubscribe(id)
    }

    fn announce(&self, outcome: &DropOutcome) {
        match outcome {
            DropOutcome::CardReordered {
                card_uuid,
                column_uuid,
            } => {
                info!("event=card_moved module=drag card={card_uuid} column={column_uuid}");
                self.bus.publish(&BoardEvent::CardMoved {
                    card_uuid: *card_uuid,
                    from_column: *column_uuid,
                    to_column: *column_uuid,
                });
            }
            DropOutcome::CardRelocated {
                card_uuid,
                from_column,
                to_column,
            } => {
                info!(
                    "event=card_moved module=drag card={card_uuid} from={from_column} to={to_column}"
                );
                self.bus.publish(&BoardEvent::CardMoved {
                    card_uuid: *card_uuid,
                    from_column: *from_column,
                    to_column: *to_column,
                });
            }
            DropOutcome::ColumnReordered { column_uuid } => {
                info!("event=column_moved module=drag column={column_uuid}");
                self.bus.publish(&BoardEvent::ColumnMoved {
                    column_uuid: *column_uuid,
                });
            }
            DropOutcome::Ignored(reason) => {
                debug!("event=drop_ignored module=drag reason={}", reason.as_str());
                self.bus
                    .publish(&BoardEvent::DropIgnored { reason: *reason });
            }
        }
    }
}

fn drop_card(
    host: &mut dyn BoardHost,
    category_uuid: ColumnId,
    picked_index: usize,
    card_uuid: CardId,
    anchor: DropAnchor,
    pointer: Option<PointerProfile>,
) -> DropOutcome {
    let Some(origin) = host.locate_card(card_uuid) else {
        return DropOutcome::Ignored(IgnoreReason::UnknownDragSource);
    };

    match anchor {
        DropAnchor::Card(target_uuid) => {
            if target_uuid == card_uuid {
                return DropOutcome::Ignored(IgnoreReason::SelfDrop);
            }
            let Some(target) = host.locate_card(target_uuid) else {
                return DropOutcome::Ignored(IgnoreReason::MissingTarget);
            };
            let decision = decide_card_on_card(
                category_uuid,
                picked_index,
                target.column_uuid,
                target.sibling_index,
                pointer.as_ref(),
            );
            let applied = match decision {
                CardDropDecision::Reorder(position) | CardDropDecision::Relocate(position) => {
                    place_card(host, card_uuid, target_uuid, position)
                }
                CardDropDecision::Append => host.append_card(card_uuid, target.column_uuid),
                CardDropDecision::Ignore => {
                    return DropOutcome::Ignored(IgnoreReason::NeedsCardAnchor)
                }
            };
            if let Err(err) = applied {
                warn!("event=drop_rejected module=drag reason=placement_failed detail={err}");
                return DropOutcome::Ignored(IgnoreReason::MissingTarget);
            }
            match decision {
                CardDropDecision::Reorder(_) => DropOutcome::CardReordered {
                    card_uuid,
                    column_uuid: target.column_uuid,
                },
                _ => DropOutcome::CardRelocated {
                    card_uuid,
                    from_column: origin.column_uuid,
                    to_column: target.column_uuid,
                },
            }
        }
        DropAnchor::Column(_) => {
            let Some(target_column) = host.nearest_column(anchor) else {
                return DropOutcome::Ignored(IgnoreReason::MissingTarget);
            };
            match decide_card_on_column(category_uuid, target_column) {
                CardDropDecision::Append => match host.append_card(card_uuid, target_column) {
                    Ok(()) => DropOutcome::CardRelocated {
                        card_uuid,
                        from_column: origin.column_uuid,
                        to_column: target_column,
                    },
                    Err(err) => {
                        warn!(
                            "event=drop_rejected module=drag reason=placement_failed detail={err}"
                        );
                        DropOutcome::Ignored(IgnoreReason::MissingTarget)
                    }
                },
                _ => DropOutcome::Ignored(IgnoreReason::NeedsCardAnchor),
            }
        }
    }
}

fn drop_column(
    host: &mut dyn BoardHost,
    picked_index: usize,
    column_uuid: ColumnId,
    anchor: DropAnchor,
) -> DropOutcome {
    if host.locate_column(column_uuid).is_none() {
        return DropOutcome::Ignored(IgnoreReason::UnknownDragSource);
    }
    let Some(target_uuid) = host.nearest_column(anchor) else {
        return DropOutcome::Ignored(IgnoreReason::MissingTarget);
    };
    if target_uuid == column_uuid {
        return DropOutcome::Ignored(IgnoreReason::SelfDrop);
    }
    let Some(target_index) = host.locate_column(target_uuid) else {
        return DropOutcome::Ignored(IgnoreReason::MissingTarget);
    };

    let position = position_by_captured_index(picked_index, target_index);
    match place_column(host, column_uuid, target_uuid, position) {
        Ok(()) => DropOutcome::ColumnReordered { column_uuid },
        Err(err) => {
            warn!("event=drop_rejected module=drag reason=placement_failed detail={err}");
            DropOutcome::Ignored(IgnoreReason::MissingTarget)
        }
    }
}
