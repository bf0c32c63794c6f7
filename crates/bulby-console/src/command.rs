//! Line tokenizing and command parsing
//!
//! [`parse_line`] is a pure function from one terminated input line to either
//! a [`Command`] or a [`ParseError`]; printing is left to the caller.

use core::str::SplitAsciiWhitespace;

/// A command parsed from one console line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `color <r> <g> <b>` - set the color channels.
    Color { r: i32, g: i32, b: i32 },
    /// `tone <freq>` - set the tone frequency in Hz, `0` for silence.
    #[cfg(feature = "tone")]
    Tone { freq: i32 },
    /// `help` - list the available commands.
    Help,
}

/// Why a non-empty line did not parse into a [`Command`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError<'a> {
    /// A known command was given fewer arguments than it requires.
    MissingArguments { command: &'a str },
    /// The command name is not known.
    Unknown { name: &'a str },
}

/// Parse one terminated line.
///
/// Tokens are separated by ASCII whitespace. Returns `None` for a line with
/// no tokens. Extra trailing arguments are silently ignored.
pub fn parse_line(line: &str) -> Option<Result<Command, ParseError<'_>>> {
    let mut tokens = line.split_ascii_whitespace();
    let command = tokens.next()?;

    Some(match command {
        "color" => color_command(command, &mut tokens),
        #[cfg(feature = "tone")]
        "tone" => tone_command(command, &mut tokens),
        "help" => Ok(Command::Help),
        name => Err(ParseError::Unknown { name }),
    })
}

fn color_command<'a>(
    command: &'a str,
    tokens: &mut SplitAsciiWhitespace<'a>,
) -> Result<Command, ParseError<'a>> {
    let r = int_arg(command, tokens)?;
    let g = int_arg(command, tokens)?;
    let b = int_arg(command, tokens)?;
    Ok(Command::Color { r, g, b })
}

#[cfg(feature = "tone")]
fn tone_command<'a>(
    command: &'a str,
    tokens: &mut SplitAsciiWhitespace<'a>,
) -> Result<Command, ParseError<'a>> {
    let freq = int_arg(command, tokens)?;
    Ok(Command::Tone { freq })
}

fn int_arg<'a>(
    command: &'a str,
    tokens: &mut SplitAsciiWhitespace<'a>,
) -> Result<i32, ParseError<'a>> {
    tokens
        .next()
        .map(parse_int)
        .ok_or(ParseError::MissingArguments { command })
}

/// Permissive decimal conversion.
///
/// An optional sign followed by leading digits; conversion stops at the
/// first non-digit, and a token with no leading digits is `0`. Values beyond
/// the `i32` range saturate.
#[allow(clippy::cast_possible_truncation)]
pub fn parse_int(token: &str) -> i32 {
    let bytes = token.as_bytes();
    let (negative, digits) = match bytes.first() {
        Some(b'-') => (true, &bytes[1..]),
        Some(b'+') => (false, &bytes[1..]),
        _ => (false, bytes),
    };

    let mut value: i64 = 0;
    for &byte in digits {
        if !byte.is_ascii_digit() {
            break;
        }
        value = value * 10 + i64::from(byte - b'0');
        if value > i64::from(i32::MAX) {
            break;
        }
    }

    if negative {
        value = -value;
    }
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
