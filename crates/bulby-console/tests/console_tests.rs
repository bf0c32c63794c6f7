//! Integration tests for the serial line console.

use bulby_console::{Bulb, BulbDriver, Console, LINE_CAPACITY, Rgb};

// -----------------------------------------------------------------------------
// Fixtures: recording driver and byte-sink writer
// -----------------------------------------------------------------------------

#[derive(Default)]
struct RecordingDriver {
    colors: Vec<Rgb>,
    #[cfg(feature = "tone")]
    tones: Vec<u16>,
}

impl BulbDriver for RecordingDriver {
    fn set_rgb(&mut self, color: Rgb) {
        self.colors.push(color);
    }

    #[cfg(feature = "tone")]
    fn set_tone(&mut self, freq_hz: u16) {
        self.tones.push(freq_hz);
    }
}

#[derive(Default)]
struct Sink {
    bytes: Vec<u8>,
}

impl embedded_io::ErrorType for Sink {
    type Error = core::convert::Infallible;
}

impl embedded_io::Write for Sink {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

fn console(sink: &mut Sink) -> Console<&mut Sink, RecordingDriver> {
    Console::new(sink, Bulb::new(RecordingDriver::default()))
}

fn feed_str<W: embedded_io::Write, D: BulbDriver>(console: &mut Console<W, D>, input: &str) {
    for &byte in input.as_bytes() {
        let _ = console.feed(byte);
    }
}

fn output(sink: &Sink) -> &str {
    core::str::from_utf8(&sink.bytes).unwrap()
}

fn rgb(r: u8, g: u8, b: u8) -> Rgb {
    Rgb { r, g, b }
}

// -----------------------------------------------------------------------------
// Dispatch
// -----------------------------------------------------------------------------

#[test]
fn color_command_applies_one_driver_write_and_clears_the_line() {
    let mut sink = Sink::default();
    let mut console = console(&mut sink);

    feed_str(&mut console, "color 10 20 30\r");

    assert_eq!(console.bulb().driver().colors, vec![rgb(10, 20, 30)]);
    assert_eq!(console.bulb().color(), rgb(10, 20, 30));
    assert_eq!(console.line_len(), 0);
}

#[test]
fn out_of_range_channels_are_clamped() {
    let mut sink = Sink::default();
    let mut console = console(&mut sink);

    feed_str(&mut console, "color -10 300 128\r");

    assert_eq!(console.bulb().driver().colors, vec![rgb(0, 255, 128)]);
}

#[test]
fn repeated_color_commands_are_idempotent() {
    let mut sink = Sink::default();
    let mut console = console(&mut sink);

    feed_str(&mut console, "color 5 6 7\r");
    feed_str(&mut console, "color 5 6 7\r");

    assert_eq!(
        console.bulb().driver().colors,
        vec![rgb(5, 6, 7), rgb(5, 6, 7)]
    );
    assert_eq!(console.bulb().color(), rgb(5, 6, 7));
}

#[test]
fn non_numeric_arguments_apply_as_zero() {
    let mut sink = Sink::default();
    let mut console = console(&mut sink);

    feed_str(&mut console, "color xyz 20 30\r");

    assert_eq!(console.bulb().driver().colors, vec![rgb(0, 20, 30)]);
}

#[test]
fn empty_line_is_a_no_op() {
    let mut sink = Sink::default();
    {
        let mut console = console(&mut sink);
        feed_str(&mut console, "\r");
        assert!(console.bulb().driver().colors.is_empty());
    }
    assert_eq!(output(&sink), "\r\n> ");
}

#[test]
fn missing_arguments_report_and_skip_the_driver() {
    let mut sink = Sink::default();
    {
        let mut console = console(&mut sink);
        feed_str(&mut console, "color 10 20\r");
        assert!(console.bulb().driver().colors.is_empty());
    }
    assert!(output(&sink).contains("color: not enough arguments\r\nTry 'help'\r\n"));
    assert!(output(&sink).ends_with("> "));
}

#[test]
fn unknown_commands_report_with_the_hint() {
    let mut sink = Sink::default();
    {
        let mut console = console(&mut sink);
        feed_str(&mut console, "bogus\r");
        assert!(console.bulb().driver().colors.is_empty());
    }
    assert!(output(&sink).contains("Unrecognized command: 'bogus'\r\nTry 'help'\r\n"));
}

#[test]
fn help_lists_the_commands_without_side_effects() {
    let mut sink = Sink::default();
    {
        let mut console = console(&mut sink);
        feed_str(&mut console, "help\r");
        assert!(console.bulb().driver().colors.is_empty());
    }
    let text = output(&sink);
    assert!(text.contains("Available commands:\r\n"));
    assert!(text.contains("  color <r> <g> <b>\r\n"));
    assert!(text.contains("  help\r\n"));
    #[cfg(feature = "tone")]
    assert!(text.contains("  tone <freq>\r\n"));
}

// -----------------------------------------------------------------------------
// Editing and echo
// -----------------------------------------------------------------------------

#[test]
fn typed_characters_are_echoed() {
    let mut sink = Sink::default();
    {
        let mut console = console(&mut sink);
        feed_str(&mut console, "help");
    }
    assert_eq!(output(&sink), "help");
}

#[test]
fn greet_prints_the_prompt() {
    let mut sink = Sink::default();
    {
        let mut console = console(&mut sink);
        console.greet().unwrap();
    }
    assert_eq!(output(&sink), "> ");
}

#[test]
fn backspace_on_an_empty_buffer_is_a_no_op() {
    let mut sink = Sink::default();
    {
        let mut console = console(&mut sink);
        console.feed(0x7F).unwrap();
        assert_eq!(console.line_len(), 0);
    }
    assert!(sink.bytes.is_empty());
}

#[test]
fn backspace_erases_the_last_character() {
    let mut sink = Sink::default();
    {
        let mut console = console(&mut sink);
        feed_str(&mut console, "colr");
        console.feed(0x7F).unwrap();
        feed_str(&mut console, "or 10 0 5\r");
        assert_eq!(console.bulb().driver().colors, vec![rgb(10, 0, 5)]);
    }
    assert!(output(&sink).contains("\x1b[D \x1b[D"));
}

#[test]
fn cancel_discards_the_pending_line() {
    for cancel in [0x03u8, 0x04] {
        let mut sink = Sink::default();
        {
            let mut console = console(&mut sink);
            feed_str(&mut console, "color 9 9 9");
            console.feed(cancel).unwrap();
            assert_eq!(console.line_len(), 0);
            feed_str(&mut console, "help\r");
            assert!(console.bulb().driver().colors.is_empty());
        }
        assert!(output(&sink).contains("\r\n> "));
    }
}

#[test]
fn unprintable_bytes_are_ignored() {
    let mut sink = Sink::default();
    {
        let mut console = console(&mut sink);
        for byte in [0x00, 0x01, b'\n', 0x1B, 0x80, 0xFF] {
            console.feed(byte).unwrap();
        }
        assert_eq!(console.line_len(), 0);
    }
    assert!(sink.bytes.is_empty());
}

#[test]
fn overflowing_line_keeps_first_128_bytes_and_drops_the_rest() {
    let mut sink = Sink::default();
    {
        let mut console = console(&mut sink);
        for _ in 0..200 {
            console.feed(b'a').unwrap();
        }
        assert_eq!(console.line_len(), LINE_CAPACITY);
    }
    // Dropped bytes are not echoed either.
    assert_eq!(sink.bytes.len(), LINE_CAPACITY);
}

// -----------------------------------------------------------------------------
// Tone variant
// -----------------------------------------------------------------------------

#[cfg(feature = "tone")]
mod tone {
    use super::*;

    #[test]
    fn tone_command_applies_the_frequency() {
        let mut sink = Sink::default();
        let mut console = console(&mut sink);

        feed_str(&mut console, "tone 440\r");

        assert_eq!(console.bulb().driver().tones, vec![440]);
        assert_eq!(console.bulb().tone_hz(), 440);
    }

    #[test]
    fn tone_zero_silences() {
        let mut sink = Sink::default();
        let mut console = console(&mut sink);

        feed_str(&mut console, "tone 440\r");
        feed_str(&mut console, "tone 0\r");

        assert_eq!(console.bulb().driver().tones, vec![440, 0]);
        assert_eq!(console.bulb().tone_hz(), 0);
    }

    #[test]
    fn tone_clamps_to_the_u16_range() {
        let mut sink = Sink::default();
        let mut console = console(&mut sink);

        feed_str(&mut console, "tone -5\r");
        feed_str(&mut console, "tone 99999\r");

        assert_eq!(console.bulb().driver().tones, vec![0, 65535]);
    }

    #[test]
    fn tone_missing_argument_reports_and_skips_the_driver() {
        let mut sink = Sink::default();
        {
            let mut console = console(&mut sink);
            feed_str(&mut console, "tone\r");
            assert!(console.bulb().driver().tones.is_empty());
        }
        assert!(output(&sink).contains("tone: not enough arguments\r\nTry 'help'\r\n"));
    }
}

#[cfg(not(feature = "tone"))]
#[test]
fn tone_is_unrecognized_in_the_color_only_build() {
    let mut sink = Sink::default();
    {
        let mut console = console(&mut sink);
        feed_str(&mut console, "tone 440\r");
    }
    assert!(output(&sink).contains("Unrecognized command: 'tone'\r\n"));
}
