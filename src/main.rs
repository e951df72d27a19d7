//! shallow_chess interactive binary

use shallow_chess::cli::Cli;
use shallow_chess::core::board::Color;
use shallow_chess::engine::book::OpeningBook;
use shallow_chess::engine::search::Engine;
use std::path::Path;
use tracing::{info, warn};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let engine_color = match std::env::args().nth(1).as_deref() {
        Some("white") | Some("w") => Color::White,
        _ => Color::Black,
    };

    let mut engine = Engine::new(engine_color);
    let book_path = match engine_color {
        Color::White => Path::new("openings/openings_w.json"),
        Color::Black => Path::new("openings/openings_b.json"),
    };
    if book_path.exists() {
        match OpeningBook::load(book_path) {
            Ok(book) => {
                info!(positions = book.len(), "loaded opening book");
                engine.set_book(book);
            }
            Err(err) => warn!(%err, "ignoring opening book"),
        }
    }

    println!("shallow_chess - a two-ply material engine");
    println!(
        "You play {}; the engine plays {}.",
        engine_color.opposite(),
        engine_color
    );

    Cli::new(engine).run();
}
