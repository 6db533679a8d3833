//! Arbiter message parsing.
//!
//! Messages look like `name` or `name(arg,arg,...)`, usually with a
//! trailing full stop: `start(x).`, `second_move(5,3).`, `end.`

use ninefold_core::{Cell, Mark, Move};

use crate::error::ClientError;

/// How a game finished, as announced by the arbiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
    Draw,
}

/// A parsed arbiter message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// `start(m)`: a new game begins and we play mark `m`.
    Start(Mark),
    /// `second_move(b,p)`: the opponent opened at cell `p` of block `b`.
    SecondMove(Move),
    /// `third_move(b,p,q)`: the arbiter opened for us at `(b,p)`; the
    /// opponent replied at cell `q` of block `p`.
    ThirdMove {
        /// The move made on our behalf.
        own: Move,
        /// The opponent's reply, in block `own.cell`.
        reply: Cell,
    },
    /// `next_move(p)`: the opponent played cell `p` of the active block.
    NextMove(Cell),
    /// `win`, `loss` or `draw`, with any arguments.
    Outcome(Outcome),
    /// `end`: the arbiter is done with us.
    End,
    /// Anything else (ignored).
    Unknown(String),
}

/// Parse a single line from the arbiter into a [`Message`].
pub fn parse_message(line: &str) -> Result<Message, ClientError> {
    let trimmed = line.trim();
    let body = trimmed.strip_suffix('.').unwrap_or(trimmed).trim_end();

    let (name, args) = match body.split_once('(') {
        Some((name, rest)) => {
            let inner = rest
                .strip_suffix(')')
                .ok_or_else(|| malformed(line, "unclosed argument list"))?;
            let args: Vec<&str> = inner.split(',').map(str::trim).collect();
            (name.trim(), args)
        }
        None => (body, Vec::new()),
    };

    match name {
        "start" => {
            let [symbol] = arguments::<1>(line, &args)?;
            let mut chars = symbol.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(Message::Start(Mark::from_symbol(c)?)),
                _ => Err(malformed(line, "mark must be a single character")),
            }
        }
        "second_move" => {
            let [b, p] = arguments::<2>(line, &args)?;
            Ok(Message::SecondMove(Move::new(digit(line, b)?, digit(line, p)?)))
        }
        "third_move" => {
            let [b, p, q] = arguments::<3>(line, &args)?;
            Ok(Message::ThirdMove {
                own: Move::new(digit(line, b)?, digit(line, p)?),
                reply: digit(line, q)?,
            })
        }
        "next_move" => {
            let [p] = arguments::<1>(line, &args)?;
            Ok(Message::NextMove(digit(line, p)?))
        }
        "win" => Ok(Message::Outcome(Outcome::Win)),
        "loss" => Ok(Message::Outcome(Outcome::Loss)),
        "draw" => Ok(Message::Outcome(Outcome::Draw)),
        "end" => Ok(Message::End),
        _ => Ok(Message::Unknown(name.to_string())),
    }
}

fn malformed(line: &str, reason: &'static str) -> ClientError {
    ClientError::MalformedMessage {
        line: line.trim().to_string(),
        reason,
    }
}

/// Exactly `N` arguments, or a malformed-message error.
fn arguments<'a, const N: usize>(line: &str, args: &[&'a str]) -> Result<[&'a str; N], ClientError> {
    <[&str; N]>::try_from(args).map_err(|_| {
        malformed(
            line,
            match N {
                1 => "expected 1 argument",
                2 => "expected 2 arguments",
                _ => "expected 3 arguments",
            },
        )
    })
}

/// A single digit 1-9.
fn digit(line: &str, arg: &str) -> Result<Cell, ClientError> {
    let mut chars = arg.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Cell::from_digit(c).ok_or_else(|| malformed(line, "expected a digit 1-9")),
        _ => Err(malformed(line, "expected a digit 1-9")),
    }
}
