mod rgb_pwm;

#[cfg(feature = "demo")]
mod random;

pub use rgb_pwm::EspBulbDriver;

#[cfg(feature = "demo")]
pub use random::hardware_rand;
