//! Serial console run loop

use bulby_console::{BulbDriver, Console};
use embedded_io::{Read, Write};
use log::warn;

/// Pump the serial input into the console, one byte at a time.
///
/// Each byte is fully processed (buffered or dispatched) before the next is
/// read; there is no other execution context touching the session. Never
/// returns; serial faults are logged and the loop continues.
pub fn run<R, W, D>(mut rx: R, console: &mut Console<W, D>) -> !
where
    R: Read,
    W: Write,
    D: BulbDriver,
{
    let mut byte = [0u8; 1];
    loop {
        match rx.read(&mut byte) {
            Ok(0) => {}
            Ok(_) => {
                if console.feed(byte[0]).is_err() {
                    warn!("console: serial write failed, output dropped");
                }
            }
            Err(_) => warn!("console: serial read failed"),
        }
    }
}
