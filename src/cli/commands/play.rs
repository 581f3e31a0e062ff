//! play command - a human against the solver on the terminal

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use super::{PlayerArg, parse_cell};
use crate::{
    cli::Settings,
    solver::Solver,
    tictactoe::{Board, Game, GameStatus, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Play against the solver")]
pub struct PlayArgs {
    /// Side played by the human; X always opens
    #[arg(long, value_enum, default_value = "x")]
    pub human: PlayerArg,
}

pub fn execute(args: PlayArgs, settings: &Settings) -> Result<()> {
    let solver = Solver::with_config(settings.search);
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(stdin.lock(), stdout.lock(), args.human.into(), &solver)?;
    Ok(())
}

/// Drive one interactive game.
///
/// Reads one cell index per line from `input`; `q` quits early. Returns the
/// final status, which is `InProgress` if the player quit or input ran out.
pub fn run_session<R: BufRead, W: Write>(
    mut input: R,
    mut out: W,
    human: Player,
    solver: &Solver,
) -> Result<GameStatus> {
    let mut game = Game::new();

    if game.to_move() != human {
        let opening = game.reply(solver)?;
        if let Some(position) = opening {
            writeln!(out, "Computer plays {position}")?;
        }
    }

    let mut line = String::new();
    while !game.is_over() {
        render(&mut out, game.board())?;
        writeln!(out, "{}", game.status().message(human))?;
        write!(out, "> ")?;
        out.flush()?;

        line.clear();
        let read = input.read_line(&mut line).context("failed to read move")?;
        if read == 0 || line.trim().eq_ignore_ascii_case("q") {
            writeln!(out, "Bye.")?;
            return Ok(game.status());
        }

        let position = match parse_cell(&line) {
            Ok(position) => position,
            Err(e) => {
                writeln!(out, "{e}")?;
                continue;
            }
        };

        match game.play_turn(position, solver) {
            Ok(report) => {
                debug!(?report, "turn complete");
                if let Some(reply) = report.reply {
                    writeln!(out, "Computer plays {reply}")?;
                }
            }
            Err(crate::Error::CellOccupied { .. }) => {
                writeln!(out, "Cell already taken")?;
            }
            Err(e) => return Err(e.into()),
        }
    }

    render(&mut out, game.board())?;
    writeln!(out, "{}", game.status().message(human))?;
    Ok(game.status())
}

fn render<W: Write>(out: &mut W, board: &Board) -> io::Result<()> {
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| board.get(row * 3 + col).to_char().to_string())
            .collect();
        writeln!(out, " {}", cells.join(" "))?;
    }
    Ok(())
}
