use std::env;
use std::process;

use chess_rules::board::{Board, START_FEN};

fn usage() -> ! {
    eprintln!("usage: position_status [--fen \"<position>\"] <from-to> <from-to> ...");
    eprintln!("  moves are written e2e4 or e2-e4");
    process::exit(2);
}

fn split_move(text: &str) -> Option<(&str, &str)> {
    let text = text.trim();
    if let Some((from, to)) = text.split_once('-') {
        return Some((from, to));
    }
    if text.len() == 4 && text.is_ascii() {
        return Some(text.split_at(2));
    }
    None
}

fn main() {
    let mut args = env::args().skip(1).peekable();
    let mut fen = START_FEN.to_string();
    if args.peek().map(String::as_str) == Some("--fen") {
        args.next();
        fen = args.next().unwrap_or_else(|| usage());
    }

    let mut board = match Board::try_from_fen(&fen) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    };

    let mut finished = false;
    for text in args {
        if finished {
            eprintln!("error: {text}: game is over");
            process::exit(1);
        }
        let Some((from, to)) = split_move(&text) else {
            eprintln!("error: cannot read move '{text}'");
            usage();
        };
        match board.attempt_move_str(from, to) {
            Ok(outcome) => {
                println!("{text}: {outcome}");
                finished = outcome.is_terminal();
            }
            Err(err) => {
                eprintln!("error: {text}: {err}");
                process::exit(1);
            }
        }
    }

    let side = board.side_to_move();
    let legal_moves = board.legal_moves(side);
    println!("{board}");
    println!("fen: {}", board.to_fen());
    println!("history: {}", board.history().join(" "));
    println!("status: {:?}", board.status());
    println!("legal_moves: {}", legal_moves.len());
    for mv in &legal_moves {
        println!("{mv}");
    }
}
