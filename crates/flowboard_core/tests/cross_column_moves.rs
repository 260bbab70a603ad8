use flowboard_core::{
    Board, BoardEvent, DragDropController, DropAnchor, DropOutcome, PointerProfile,
};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn dropping_on_an_empty_column_relocates_and_relabels() {
    // C1 holds [a, b, c], C2 is empty. Dragging `a` onto C2's body must
    // leave C1 as [b, c] and C2 as [a], with `a` relabeled to C2.
    let mut board = Board::new();
    let c1 = board.add_column("C1").unwrap();
    let c2 = board.add_column("C2").unwrap();
    let a = board.add_card(c1, "a").unwrap();
    let b = board.add_card(c1, "b").unwrap();
    let c = board.add_card(c1, "c").unwrap();

    let mut controller = DragDropController::new();
    let payload = controller.begin_card_drag(&board, a).unwrap();
    assert_eq!(payload, format!("item,{c1},0,{a}"));

    let outcome = controller.handle_drop(&mut board, &payload, DropAnchor::Column(c2), None);

    assert_eq!(
        outcome,
        DropOutcome::CardRelocated {
            card_uuid: a,
            from_column: c1,
            to_column: c2
        }
    );
    assert_eq!(board.card_order(c1).unwrap(), vec![b, c]);
    assert_eq!(board.card_order(c2).unwrap(), vec![a]);
    assert_eq!(board.card(a).unwrap().column_uuid, c2);
}

#[test]
fn pointer_above_target_midpoint_inserts_before_it() {
    let mut board = Board::new();
    let source = board.add_column("Source").unwrap();
    let target_column = board.add_column("Target").unwrap();
    let moved = board.add_card(source, "moved").unwrap();
    let anchor = board.add_card(target_column, "anchor").unwrap();

    let mut controller = DragDropController::new();
    let payload = controller.begin_card_drag(&board, moved).unwrap();
    let pointer = PointerProfile {
        offset_y: 4.0,
        target_height: 32.0,
    };
    let outcome = controller.handle_drop(
        &mut board,
        &payload,
        DropAnchor::Card(anchor),
        Some(pointer),
    );

    assert!(matches!(outcome, DropOutcome::CardRelocated { .. }));
    assert_eq!(board.card_order(target_column).unwrap(), vec![moved, anchor]);
    assert_eq!(board.card(moved).unwrap().column_uuid, target_column);
}

#[test]
fn pointer_at_or_below_target_midpoint_inserts_after_it() {
    let mut board = Board::new();
    let source = board.add_column("Source").unwrap();
    let target_column = board.add_column("Target").unwrap();
    let moved = board.add_card(source, "moved").unwrap();
    let anchor = board.add_card(target_column, "anchor").unwrap();

    let mut controller = DragDropController::new();
    let payload = controller.begin_card_drag(&board, moved).unwrap();
    let pointer = PointerProfile {
        offset_y: 16.0,
        target_height: 32.0,
    };
    let outcome = controller.handle_drop(
        &mut board,
        &payload,
        DropAnchor::Card(anchor),
        Some(pointer),
    );

    assert!(matches!(outcome, DropOutcome::CardRelocated { .. }));
    assert_eq!(board.card_order(target_column).unwrap(), vec![anchor, moved]);
}

#[test]
fn source_column_keeps_relative_order_of_remaining_cards() {
    let mut board = Board::new();
    let source = board.add_column("Source").unwrap();
    let target_column = board.add_column("Target").unwrap();
    let first = board.add_card(source, "first").unwrap();
    let moved = board.add_card(source, "moved").unwrap();
    let last = board.add_card(source, "last").unwrap();
    board.add_card(target_column, "anchor").unwrap();

    let mut controller = DragDropController::new();
    let payload = controller.begin_card_drag(&board, moved).unwrap();
    controller.handle_drop(&mut board, &payload, DropAnchor::Column(target_column), None);

    assert_eq!(board.card_order(source).unwrap(), vec![first, last]);
}

#[test]
fn relocation_publishes_a_card_moved_event() {
    let mut board = Board::new();
    let c1 = board.add_column("C1").unwrap();
    let c2 = board.add_column("C2").unwrap();
    let card = board.add_card(c1, "card").unwrap();

    let mut controller = DragDropController::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let listener = controller.subscribe(move |event: &BoardEvent| {
        sink.borrow_mut().push(event.clone());
    });

    let payload = controller.begin_card_drag(&board, card).unwrap();
    controller.handle_drop(&mut board, &payload, DropAnchor::Column(c2), None);

    assert_eq!(
        seen.borrow().as_slice(),
        &[BoardEvent::CardMoved {
            card_uuid: card,
            from_column: c1,
            to_column: c2
        }]
    );

    // Deregistered listeners stay silent for later gestures.
    assert!(controller.unsubscribe(listener));
    let payload = controller.begin_card_drag(&board, card).unwrap();
    controller.handle_drop(&mut board, &payload, DropAnchor::Column(c1), None);
    assert_eq!(seen.borrow().len(), 1);
}
