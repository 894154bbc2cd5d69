use chess_rules::{Square, SquareParseError};
use thiserror::Error;

/// One line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Select, deselect or move onto a square.
    Click(Square),
    /// Play a move directly, bypassing the selection.
    Move(Square, Square),
    /// List the destinations of the piece on a square.
    Legal(Square),
    Board,
    Json,
    New,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}' (try 'help')")]
    Unknown(String),
    #[error("'{command}' needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("'{0}' takes fewer arguments")]
    TooManyArguments(&'static str),
    #[error(transparent)]
    Square(#[from] SquareParseError),
}

pub const HELP: &str = "\
Commands:
  <square>            select a piece, or move the selected piece there
  click <square>      same as above
  move <from> <to>    play a move directly
  legal <square>      list where the piece on <square> may go
  board               print the board
  json                print the game state as JSON
  new                 start a new game
  help                show this text
  quit                leave
Squares are written as file and rank (e2) or as row,col (6,4).";

impl Command {
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&head, args)) = parts.split_first() else {
            return Err(CommandError::Empty);
        };

        let cmd = match head.to_ascii_lowercase().as_str() {
            "click" | "select" => Command::Click(one_square("click", args)?),
            "move" | "mv" => {
                let [from, to] = args else {
                    return Err(if args.len() > 2 {
                        CommandError::TooManyArguments("move")
                    } else {
                        CommandError::MissingArgument {
                            command: "move",
                            expected: "two squares",
                        }
                    });
                };
                Command::Move(from.parse()?, to.parse()?)
            }
            "legal" | "moves" => Command::Legal(one_square("legal", args)?),
            "board" | "show" => no_args("board", args, Command::Board)?,
            "json" => no_args("json", args, Command::Json)?,
            "new" | "reset" => no_args("new", args, Command::New)?,
            "help" | "?" => no_args("help", args, Command::Help)?,
            "quit" | "exit" | "q" => no_args("quit", args, Command::Quit)?,
            _ => match head.parse::<Square>() {
                Ok(sq) if args.is_empty() => Command::Click(sq),
                Ok(_) => return Err(CommandError::TooManyArguments("click")),
                Err(SquareParseError::OffBoard(s)) => {
                    return Err(SquareParseError::OffBoard(s).into());
                }
                Err(_) => return Err(CommandError::Unknown(head.to_string())),
            },
        };
        Ok(cmd)
    }
}

fn one_square(command: &'static str, args: &[&str]) -> Result<Square, CommandError> {
    match args {
        [sq] => Ok(sq.parse()?),
        [] => Err(CommandError::MissingArgument {
            command,
            expected: "a square",
        }),
        _ => Err(CommandError::TooManyArguments(command)),
    }
}

fn no_args(command: &'static str, args: &[&str], cmd: Command) -> Result<Command, CommandError> {
    if args.is_empty() {
        Ok(cmd)
    } else {
        Err(CommandError::TooManyArguments(command))
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod command_tests;
