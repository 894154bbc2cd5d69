//! Line-driven game loop.

use crate::command::{Command, HELP};
use crate::render::{Renderer, describe, outcome_notice};
use crate::session::{ClickResult, Session};
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

/// Reads commands from `input` until `quit` or end of input, writing the
/// transcript to `output`.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    renderer: &Renderer,
    input: R,
    output: &mut W,
) -> io::Result<()> {
    print_board(session, renderer, output)?;
    print_turn(session, output)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let cmd = match Command::parse(&line) {
            Ok(cmd) => cmd,
            Err(e) => {
                debug!(%line, error = %e, "unparsed input");
                writeln!(output, "{e}")?;
                continue;
            }
        };

        match cmd {
            Command::Quit => break,
            Command::Help => writeln!(output, "{HELP}")?,
            Command::Board => print_board(session, renderer, output)?,
            Command::New => {
                session.new_game();
                writeln!(output, "New game")?;
                print_board(session, renderer, output)?;
                print_turn(session, output)?;
            }
            Command::Json => match serde_json::to_string(session.state()) {
                Ok(json) => writeln!(output, "{json}")?,
                Err(e) => {
                    warn!(error = %e, "failed to serialize game state");
                    writeln!(output, "could not serialize the game state")?;
                }
            },
            Command::Legal(from) => {
                let dests = session.legal_destinations(from);
                if dests.is_empty() {
                    writeln!(output, "{from}: no legal moves")?;
                } else {
                    let names: Vec<String> = dests.iter().map(|s| s.to_string()).collect();
                    writeln!(output, "{from}: {}", names.join(" "))?;
                }
            }
            Command::Click(sq) => {
                let result = session.click(sq);
                report(session, renderer, &result, output)?;
            }
            Command::Move(from, to) => {
                let result = session.play(from, to);
                report(session, renderer, &result, output)?;
            }
        }
        output.flush()?;
    }
    Ok(())
}

fn report<W: Write>(
    session: &Session,
    renderer: &Renderer,
    result: &ClickResult,
    output: &mut W,
) -> io::Result<()> {
    writeln!(output, "{}", describe(result))?;
    match result {
        ClickResult::Selected(_) | ClickResult::Reselected(_) => {
            print_board(session, renderer, output)?;
        }
        ClickResult::Moved { outcome, .. } => {
            print_board(session, renderer, output)?;
            if let Some(notice) = outcome_notice(*outcome) {
                writeln!(output, "{notice}")?;
            }
            if !outcome.is_terminal() {
                print_turn(session, output)?;
            }
        }
        _ => {}
    }
    Ok(())
}

fn print_board<W: Write>(session: &Session, renderer: &Renderer, output: &mut W) -> io::Result<()> {
    let text = renderer.board(
        session.state().board(),
        session.selected(),
        &session.highlighted(),
    );
    write!(output, "{text}")
}

fn print_turn<W: Write>(session: &Session, output: &mut W) -> io::Result<()> {
    writeln!(output, "{} to move", session.state().side_to_move())
}

#[cfg(test)]
#[path = "shell_tests.rs"]
mod shell_tests;
