use flowboard_core::{Board, DragDropController, DropAnchor, DropOutcome, IgnoreReason};

#[test]
fn dragging_the_last_column_onto_the_first_inserts_before_it() {
    // Columns [P1, P2, P3]: dragging P3 (captured index 2) onto P1
    // (index 0) must yield [P3, P1, P2].
    let mut board = Board::new();
    let p1 = board.add_column("P1").unwrap();
    let p2 = board.add_column("P2").unwrap();
    let p3 = board.add_column("P3").unwrap();

    let mut controller = DragDropController::new();
    let payload = controller.begin_column_drag(&board, p3).unwrap();
    assert_eq!(payload, format!("projectList,2,{p3}"));

    let outcome = controller.handle_drop(&mut board, &payload, DropAnchor::Column(p1), None);

    assert_eq!(outcome, DropOutcome::ColumnReordered { column_uuid: p3 });
    assert_eq!(board.column_order(), vec![p3, p1, p2]);
}

#[test]
fn dragging_an_earlier_column_onto_a_later_one_inserts_after_it() {
    let mut board = Board::new();
    let p1 = board.add_column("P1").unwrap();
    let p2 = board.add_column("P2").unwrap();
    let p3 = board.add_column("P3").unwrap();

    let mut controller = DragDropController::new();
    let payload = controller.begin_column_drag(&board, p1).unwrap();
    let outcome = controller.handle_drop(&mut board, &payload, DropAnchor::Column(p2), None);

    assert!(matches!(outcome, DropOutcome::ColumnReordered { .. }));
    assert_eq!(board.column_order(), vec![p2, p1, p3]);
}

#[test]
fn a_card_anchor_resolves_to_its_owning_column() {
    // Column bodies contain nested elements that are not drop anchors
    // themselves; a drop reported on a card walks up to its column.
    let mut board = Board::new();
    let p1 = board.add_column("P1").unwrap();
    let p2 = board.add_column("P2").unwrap();
    let card_in_p1 = board.add_card(p1, "task").unwrap();

    let mut controller = DragDropController::new();
    let payload = controller.begin_column_drag(&board, p2).unwrap();
    let outcome =
        controller.handle_drop(&mut board, &payload, DropAnchor::Card(card_in_p1), None);

    assert!(matches!(outcome, DropOutcome::ColumnReordered { .. }));
    assert_eq!(board.column_order(), vec![p2, p1]);
}

#[test]
fn column_drop_never_mutates_any_card_category() {
    let mut board = Board::new();
    let p1 = board.add_column("P1").unwrap();
    let p2 = board.add_column("P2").unwrap();
    let card_a = board.add_card(p1, "a").unwrap();
    let card_b = board.add_card(p2, "b").unwrap();

    let mut controller = DragDropController::new();
    let payload = controller.begin_column_drag(&board, p2).unwrap();
    controller.handle_drop(&mut board, &payload, DropAnchor::Column(p1), None);

    assert_eq!(board.card(card_a).unwrap().column_uuid, p1);
    assert_eq!(board.card(card_b).unwrap().column_uuid, p2);
    assert_eq!(board.card_order(p1).unwrap(), vec![card_a]);
    assert_eq!(board.card_order(p2).unwrap(), vec![card_b]);
}

#[test]
fn dropping_a_column_onto_its_own_card_is_a_self_drop() {
    let mut board = Board::new();
    let p1 = board.add_column("P1").unwrap();
    let p2 = board.add_column("P2").unwrap();
    let own_card = board.add_card(p2, "own").unwrap();

    let mut controller = DragDropController::new();
    let payload = controller.begin_column_drag(&board, p2).unwrap();
    let outcome = controller.handle_drop(&mut board, &payload, DropAnchor::Card(own_card), None);

    assert_eq!(outcome, DropOutcome::Ignored(IgnoreReason::SelfDrop));
    assert_eq!(board.column_order(), vec![p1, p2]);
}

#[test]
fn column_removed_mid_drag_degrades_to_ignored() {
    let mut board = Board::new();
    let p1 = board.add_column("P1").unwrap();
    let p2 = board.add_column("P2").unwrap();

    let mut controller = DragDropController::new();
    let payload = controller.begin_column_drag(&board, p2).unwrap();
    board.remove_column(p2).unwrap();

    let outcome = controller.handle_drop(&mut board, &payload, DropAnchor::Column(p1), None);
    assert_eq!(
        outcome,
        DropOutcome::Ignored(IgnoreReason::UnknownDragSource)
    );
    assert_eq!(board.column_order(), vec![p1]);
}
