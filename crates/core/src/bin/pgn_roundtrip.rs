//! Reads a PGN file and prints its canonical re-serialization

use chess_pgn_core::{GameCollection, PgnOptions};
use std::fs;

fn main() {
    tracing_subscriber::fmt::init();

    let mut path = None;
    let mut json = false;
    let mut options = PgnOptions::new();

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "--strict" => options = options.strict_disambiguation(),
            _ => path = Some(arg),
        }
    }

    let path = path.unwrap_or_else(|| {
        eprintln!("Usage: pgn_roundtrip [--json] [--strict] <file.pgn>");
        std::process::exit(1);
    });

    let contents = match fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to read {}: {}", path, e);
            std::process::exit(1);
        }
    };

    let mut games = GameCollection::with_options(options);
    let ok = games.read(contents.lines());

    for (index, game) in games.games().iter().enumerate() {
        for error in game.errors() {
            eprintln!("Game {}: {}", index + 1, error);
        }
    }

    let output = if json {
        games.to_json().map(|text| vec![text])
    } else {
        games.write()
    };

    match output {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
        }
        Err(e) => {
            eprintln!("Failed to write games: {}", e);
            std::process::exit(1);
        }
    }

    if !ok {
        std::process::exit(2);
    }
}
