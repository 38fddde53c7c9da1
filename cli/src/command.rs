use std::str::FromStr;
use sapper_core::{Action, Point};
use thiserror::Error;

pub const HELP: &str = "\
commands:
  r X Y | reveal X Y   uncover a cell (starts over once the round has ended)
  f X Y | flag X Y     toggle a flag
  n | new              start a new game
  h | help             show this text
  q | quit             leave";

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Command {
    Act(Action),
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command `{0}`, type `help` for a list")]
    Unknown(String),
    #[error("`{0}` expects two coordinates")]
    MissingCoords(String),
    #[error("Invalid coordinate `{0}`")]
    InvalidCoord(String),
    #[error("Unexpected trailing input `{0}`")]
    Trailing(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(CommandError::Empty)?;

        let command = match name.to_ascii_lowercase().as_str() {
            "r" | "reveal" => Command::Act(Action::Primary(parse_point(name, &mut words)?)),
            "f" | "flag" => Command::Act(Action::Secondary(parse_point(name, &mut words)?)),
            "n" | "new" => Command::Act(Action::Restart),
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            _ => return Err(CommandError::Unknown(name.to_owned())),
        };

        match words.next() {
            Some(extra) => Err(CommandError::Trailing(extra.to_owned())),
            None => Ok(command),
        }
    }
}

fn parse_point<'a>(
    name: &str,
    words: &mut impl Iterator<Item = &'a str>,
) -> Result<Point, CommandError> {
    let mut coord = || -> Result<i32, CommandError> {
        let word = words
            .next()
            .ok_or_else(|| CommandError::MissingCoords(name.to_owned()))?;
        word.parse()
            .map_err(|_| CommandError::InvalidCoord(word.to_owned()))
    };
    let x = coord()?;
    let y = coord()?;
    Ok((x, y))
}
