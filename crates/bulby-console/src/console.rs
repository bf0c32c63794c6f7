//! Line console: input buffer, editing, echo, and dispatch
//!
//! One [`Console`] is a serial session. It owns the output writer, the
//! [`Bulb`], and the line buffer, and consumes the input stream one byte at a
//! time; the run loop owns the session, there is no ambient state.

use embedded_io::Write;
use heapless::Vec;

use crate::bulb::{Bulb, BulbDriver};
use crate::command::{Command, ParseError, parse_line};

/// Line buffer capacity in bytes.
///
/// Printable input past this limit is dropped until the line is terminated
/// or cancelled.
pub const LINE_CAPACITY: usize = 128;

/// Prompt emitted after every processed line.
pub const PROMPT: &str = "> ";

const CTRL_C: u8 = 0x03;
const CTRL_D: u8 = 0x04;
const BACKSPACE: u8 = 0x7F;

/// Erases the character left of the cursor on an ANSI terminal.
const ERASE_SEQUENCE: &[u8] = b"\x1b[D \x1b[D";

/// Serial console session.
pub struct Console<W: Write, D: BulbDriver> {
    out: W,
    bulb: Bulb<D>,
    line: Vec<u8, LINE_CAPACITY>,
}

impl<W: Write, D: BulbDriver> Console<W, D> {
    pub fn new(out: W, bulb: Bulb<D>) -> Self {
        Self {
            out,
            bulb,
            line: Vec::new(),
        }
    }

    /// Emit the initial prompt.
    pub fn greet(&mut self) -> Result<(), W::Error> {
        self.out.write_all(PROMPT.as_bytes())
    }

    /// Consume one input byte.
    ///
    /// Echoes, edits the line buffer, and on carriage return parses and
    /// dispatches the buffered line. Errors are the output writer's; the bulb
    /// itself has no failure path.
    pub fn feed(&mut self, byte: u8) -> Result<(), W::Error> {
        match byte {
            b'\r' => {
                self.out.write_all(b"\r\n")?;
                let line = core::str::from_utf8(&self.line).unwrap_or("");
                Self::dispatch(line, &mut self.bulb, &mut self.out)?;
                self.line.clear();
                self.out.write_all(PROMPT.as_bytes())
            }
            CTRL_C | CTRL_D => {
                self.line.clear();
                self.out.write_all(b"\r\n")?;
                self.out.write_all(PROMPT.as_bytes())
            }
            BACKSPACE => {
                if self.line.pop().is_some() {
                    self.out.write_all(ERASE_SEQUENCE)?;
                }
                Ok(())
            }
            0x20..=0x7E => {
                // A full buffer drops the byte, without echo.
                if self.line.push(byte).is_ok() {
                    self.out.write_all(&[byte])?;
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// The bulb session state.
    pub fn bulb(&self) -> &Bulb<D> {
        &self.bulb
    }

    /// Number of buffered bytes on the current line.
    pub fn line_len(&self) -> usize {
        self.line.len()
    }

    fn dispatch(line: &str, bulb: &mut Bulb<D>, out: &mut W) -> Result<(), W::Error> {
        let Some(parsed) = parse_line(line) else {
            // Empty line: no-op, no error.
            return Ok(());
        };

        match parsed {
            Ok(Command::Color { r, g, b }) => {
                bulb.set_color(r, g, b);
                Ok(())
            }
            #[cfg(feature = "tone")]
            Ok(Command::Tone { freq }) => {
                bulb.set_tone(freq);
                Ok(())
            }
            Ok(Command::Help) => print_help(out),
            Err(ParseError::MissingArguments { command }) => {
                out.write_all(command.as_bytes())?;
                out.write_all(b": not enough arguments\r\n")?;
                print_hint(out)
            }
            Err(ParseError::Unknown { name }) => {
                out.write_all(b"Unrecognized command: '")?;
                out.write_all(name.as_bytes())?;
                out.write_all(b"'\r\n")?;
                print_hint(out)
            }
        }
    }
}

fn print_help<W: Write>(out: &mut W) -> Result<(), W::Error> {
    out.write_all(b"Available commands:\r\n")?;
    out.write_all(b"  color <r> <g> <b>\r\n")?;
    #[cfg(feature = "tone")]
    out.write_all(b"  tone <freq>\r\n")?;
    out.write_all(b"  help\r\n")
}

fn print_hint<W: Write>(out: &mut W) -> Result<(), W::Error> {
    out.write_all(b"Try 'help'\r\n")
}
