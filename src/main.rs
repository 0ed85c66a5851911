use tesseract_chess::{is_checkmate, is_in_check, Board, Color, Coord};

fn main() {
    // Initialize tracing (structured logging).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tesseract_chess=info".into()),
        )
        .init();

    let mut board = Board::starting();
    tracing::info!(
        "tesseract-chess v{}: {} pieces on an {}^4 board",
        env!("CARGO_PKG_VERSION"),
        board.piece_count(),
        board.size()
    );
    println!("{board}");

    // The corner rook sliding onto its own knight: rejected, and the
    // rejection is part of the demo.
    try_move(&mut board, Coord::new(0, 0, 0, 0), Coord::new(1, 0, 0, 0));

    // A knight leaving the home plane, stepping on all four axes at once.
    try_move(&mut board, Coord::new(1, 0, 0, 0), Coord::new(2, 2, 1, 2));

    // A pawn's w diagonal. In the opening layout every quiet pawn
    // advance runs into the neighbouring pawn or off the board, so the
    // diagonal is the only pawn move available.
    try_move(&mut board, Coord::new(2, 1, 0, 0), Coord::new(3, 1, 0, 1));

    println!("home plane (z=0, w=0):");
    println!("{board}");
    println!("knight's plane (z=1, w=2):");
    println!("{}", board.slice_string(1, 2));

    for color in [Color::White, Color::Black] {
        tracing::info!(
            "{color}: in_check={} checkmate={}",
            is_in_check(&board, color),
            is_checkmate(&board, color)
        );
    }
}

fn try_move(board: &mut Board, from: Coord, to: Coord) {
    match board.move_piece(from, to) {
        Ok(Some(captured)) => tracing::info!("{from} -> {to}: captured {captured}"),
        Ok(None) => tracing::info!("{from} -> {to}: ok"),
        Err(err) => tracing::warn!("{from} -> {to}: {err}"),
    }
}
