//! Minimal text driver: builds a blinker and prints ten generations.
//! Demonstration glue only; the library carries the actual semantics.

use sparse_life::{Board, LiveSet};

/// Render the live set's bounding box, one row per line.
fn render(live: &LiveSet) -> String {
    if live.is_empty() {
        return String::from("(empty)");
    }

    let min_x = live.iter().map(|c| c.x()).min().unwrap_or(0);
    let max_x = live.iter().map(|c| c.x()).max().unwrap_or(0);
    let min_y = live.iter().map(|c| c.y()).min().unwrap_or(0);
    let max_y = live.iter().map(|c| c.y()).max().unwrap_or(0);

    let mut out = String::new();
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let alive = live.iter().any(|c| c.x() == x && c.y() == y);
            out.push(if alive { '#' } else { '.' });
        }
        out.push('\n');
    }
    out
}

fn main() {
    let mut board = match Board::new([(0, 0), (0, 1), (0, 2)]) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("bad initial pattern: {err}");
            std::process::exit(1);
        }
    };

    println!("generation 0 ({} cells):", board.population());
    print!("{}", render(board.current()));

    for _ in 0..10 {
        if let Err(err) = board.step() {
            eprintln!("stepping failed: {err}");
            std::process::exit(1);
        }
        println!("generation {} ({} cells):", board.generation(), board.population());
        print!("{}", render(board.current()));
    }
}
