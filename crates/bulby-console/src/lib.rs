#![no_std]

//! Bulby console core
//!
//! Architecture layers:
//! - `color` - integer HSV to RGB conversion
//! - `bulb` - hardware abstraction ([`BulbDriver`] trait) plus applied state
//! - `command` - line tokenizer and command parser
//! - `console` - line-editing input buffer and dispatcher
//! - `demo` - blocking decorative effects (fades, hue cycle)
//!
//! The console is generic over [`BulbDriver`] and `embedded_io::Write`,
//! allowing different hardware backends and host-side testing.

pub mod bulb;
pub mod color;
pub mod command;
pub mod console;
pub mod demo;

// Bulb exports
pub use bulb::{Bulb, BulbDriver};

// Color exports
pub use color::{Rgb, hsv_to_rgb};

// Command exports
pub use command::{Command, ParseError, parse_line};

// Console exports
pub use console::{Console, LINE_CAPACITY, PROMPT};
