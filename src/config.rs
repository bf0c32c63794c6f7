pub const BUILD_VERSION: &str = env!("BUILD_VERSION");

pub struct SerialConfig {
    pub baudrate: u32,
}

pub(crate) struct PwmConfig {
    pub frequency_hz: u32,
}

pub const SERIAL: SerialConfig = SerialConfig { baudrate: 57_600 };

pub(crate) const PWM: PwmConfig = PwmConfig { frequency_hz: 1_000 };

#[macro_export]
macro_rules! rgb_gpio {
    ($p:expr) => {
        ($p.GPIO25, $p.GPIO26, $p.GPIO27)
    };
}

#[cfg(feature = "tone")]
#[macro_export]
macro_rules! tone_gpio {
    ($p:expr) => {
        $p.GPIO4
    };
}
