//! Infrastructure layer - hardware-facing implementations
//!
//! Concrete implementations of the console's output seams using the ESP32
//! peripherals.

pub mod drivers;
