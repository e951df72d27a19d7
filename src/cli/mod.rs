//! Interactive game loop
//!
//! A thin stdin/stdout wrapper over the core operations: prints the board,
//! reads the human's move as a coordinate pair, and lets the engine answer.

use crate::core::board::{Board, Color};
use crate::core::moves::Move;
use crate::engine::search::Engine;
use std::io::{self, BufRead, Write};

pub struct Cli {
    board: Board,
    engine: Engine,
    human: Color,
}

impl Cli {
    pub fn new(engine: Engine) -> Self {
        let human = engine.color().opposite();
        Cli {
            board: Board::startpos(),
            engine,
            human,
        }
    }

    pub fn run(&mut self) {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        self.print_board(&mut stdout);
        writeln!(
            stdout,
            "Enter moves as coordinate pairs (e.g. e2e4); 'd' redraws the board, 'quit' exits."
        )
        .unwrap();

        if self.engine.color() == Color::White && !self.engine_turn(&mut stdout) {
            return;
        }
        stdout.flush().unwrap();

        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(_) => break,
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match line {
                "quit" | "q" => break,
                "d" | "display" => self.print_board(&mut stdout),
                _ => {
                    let Some(mv) = Move::from_coords(line) else {
                        writeln!(stdout, "Could not read '{line}' as a move.").unwrap();
                        continue;
                    };
                    if !self.board.legal_moves(self.human).contains(&mv) {
                        writeln!(stdout, "{mv} is not a legal move.").unwrap();
                        continue;
                    }
                    if let Err(err) = self.board.apply(mv) {
                        writeln!(stdout, "{err}").unwrap();
                        continue;
                    }
                    if !self.engine_turn(&mut stdout) {
                        break;
                    }
                }
            }
            stdout.flush().unwrap();
        }
    }

    /// Let the engine answer. Returns false when the game is over.
    fn engine_turn(&mut self, stdout: &mut io::Stdout) -> bool {
        match self.engine.make_move(&mut self.board) {
            Some(mv) => {
                writeln!(stdout, "Engine plays {mv}.").unwrap();
                self.print_board(stdout);
                if self.board.in_checkmate(self.human) {
                    writeln!(stdout, "Checkmate. {} wins.", self.engine.color()).unwrap();
                    return false;
                }
                if self.board.in_stalemate(self.human) {
                    writeln!(stdout, "Stalemate.").unwrap();
                    return false;
                }
                if self.board.in_check(self.human) {
                    writeln!(stdout, "{} is in check.", self.human).unwrap();
                }
                true
            }
            None => {
                if self.board.in_checkmate(self.engine.color()) {
                    writeln!(stdout, "Checkmate. {} wins.", self.human).unwrap();
                } else {
                    writeln!(stdout, "Stalemate.").unwrap();
                }
                false
            }
        }
    }

    fn print_board(&self, stdout: &mut io::Stdout) {
        write!(stdout, "{}", self.board).unwrap();
    }
}
