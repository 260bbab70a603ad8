//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `flowboard_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use flowboard_core::{Board, DragDropController, DropAnchor};

fn main() {
    // Why: keep a tiny probe that exercises one full drag gesture so core
    // wiring can be sanity-checked without any UI runtime.
    println!("flowboard_core ping={}", flowboard_core::ping());
    println!("flowboard_core version={}", flowboard_core::core_version());

    let mut board = Board::new();
    let mut controller = DragDropController::new();

    let result = (|| -> Result<(), Box<dyn std::error::Error>> {
        let todo = board.add_column("Todo")?;
        let doing = board.add_column("Doing")?;
        let card = board.add_card(todo, "write the smoke probe")?;

        let payload = controller.begin_card_drag(&board, card)?;
        let outcome = controller.handle_drop(&mut board, &payload, DropAnchor::Column(doing), None);
        println!("smoke drop outcome={outcome:?}");
        println!(
            "smoke doing cards={}",
            board.card_order(doing)?.len()
        );
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("smoke probe failed: {err}");
        std::process::exit(1);
    }
}
