//! LEDC-backed bulb driver
//!
//! Drives the three color channels as independent 8-bit PWM intensity
//! signals on a shared 1 kHz timer. The tone variant adds a fourth channel
//! whose own timer is retuned to the requested frequency at 50% duty.

#[cfg(feature = "tone")]
use esp_hal::gpio::AnyPin;
use esp_hal::gpio::interconnect::PeripheralOutput;
use esp_hal::ledc::channel::{self, ChannelHW, ChannelIFace};
use esp_hal::ledc::timer::{self, TimerIFace};
use esp_hal::ledc::{Ledc, LowSpeed};
use esp_hal::time::Rate;

use bulby_console::{BulbDriver, Rgb};

use crate::config;
use crate::mk_static;

/// ESP-specific bulb driver using the LEDC peripheral.
pub struct EspBulbDriver {
    red: channel::Channel<'static, LowSpeed>,
    green: channel::Channel<'static, LowSpeed>,
    blue: channel::Channel<'static, LowSpeed>,
    #[cfg(feature = "tone")]
    tone: ToneChannel,
}

impl EspBulbDriver {
    /// Configure the PWM channels for the bulb.
    ///
    /// # Arguments
    /// * `ledc` - LEDC peripheral driver
    /// * `red`/`green`/`blue` - GPIO pins wired to the color channels
    /// * `tone_pin` - GPIO pin wired to the buzzer (tone variant)
    pub fn new<R, G, B>(
        ledc: &'static Ledc<'static>,
        red: R,
        green: G,
        blue: B,
        #[cfg(feature = "tone")] tone_pin: AnyPin<'static>,
    ) -> Self
    where
        R: PeripheralOutput<'static>,
        G: PeripheralOutput<'static>,
        B: PeripheralOutput<'static>,
    {
        let pwm_timer = mk_static!(
            timer::Timer<'static, LowSpeed>,
            ledc.timer::<LowSpeed>(timer::Number::Timer0)
        );
        pwm_timer
            .configure(timer::config::Config {
                duty: timer::config::Duty::Duty8Bit,
                clock_source: timer::LSClockSource::APBClk,
                frequency: Rate::from_hz(config::PWM.frequency_hz),
            })
            .unwrap();
        let pwm_timer: &'static timer::Timer<'static, LowSpeed> = pwm_timer;

        Self {
            red: intensity_channel(ledc, channel::Number::Channel0, red, pwm_timer),
            green: intensity_channel(ledc, channel::Number::Channel1, green, pwm_timer),
            blue: intensity_channel(ledc, channel::Number::Channel2, blue, pwm_timer),
            #[cfg(feature = "tone")]
            tone: ToneChannel::new(ledc, tone_pin),
        }
    }
}

impl BulbDriver for EspBulbDriver {
    fn set_rgb(&mut self, color: Rgb) {
        self.red.set_duty_hw(u32::from(color.r));
        self.green.set_duty_hw(u32::from(color.g));
        self.blue.set_duty_hw(u32::from(color.b));
    }

    #[cfg(feature = "tone")]
    fn set_tone(&mut self, freq_hz: u16) {
        self.tone.apply(freq_hz);
    }
}

fn intensity_channel<O: PeripheralOutput<'static>>(
    ledc: &'static Ledc<'static>,
    number: channel::Number,
    pin: O,
    pwm_timer: &'static timer::Timer<'static, LowSpeed>,
) -> channel::Channel<'static, LowSpeed> {
    let mut ch = ledc.channel(number, pin);
    ch.configure(channel::config::Config {
        timer: pwm_timer,
        duty_pct: 0,
        pin_config: channel::config::PinConfig::PushPull,
    })
    .unwrap();
    ch
}

/// Buzzer output on a dedicated LEDC timer.
///
/// The channel binds the pin once at 0% duty. Tones retune the timer in
/// place through a fresh handle and raise the duty to 50%; silence drops the
/// duty back to 0%.
#[cfg(feature = "tone")]
struct ToneChannel {
    ledc: &'static Ledc<'static>,
    channel: channel::Channel<'static, LowSpeed>,
}

/// 50% of the 10-bit duty range.
#[cfg(feature = "tone")]
const TONE_DUTY: u32 = 512;

#[cfg(feature = "tone")]
impl ToneChannel {
    fn new(ledc: &'static Ledc<'static>, pin: AnyPin<'static>) -> Self {
        let tone_timer = mk_static!(
            timer::Timer<'static, LowSpeed>,
            ledc.timer::<LowSpeed>(timer::Number::Timer1)
        );
        // Initial tuning so the silent channel can bind the pin.
        tone_timer
            .configure(timer::config::Config {
                duty: timer::config::Duty::Duty10Bit,
                clock_source: timer::LSClockSource::APBClk,
                frequency: Rate::from_hz(440),
            })
            .unwrap();
        let tone_timer: &'static timer::Timer<'static, LowSpeed> = tone_timer;

        let mut ch = ledc.channel(channel::Number::Channel3, pin);
        ch.configure(channel::config::Config {
            timer: tone_timer,
            duty_pct: 0,
            pin_config: channel::config::PinConfig::PushPull,
        })
        .unwrap();

        Self { ledc, channel: ch }
    }

    fn apply(&mut self, freq_hz: u16) {
        if freq_hz == 0 {
            self.channel.set_duty_hw(0);
            return;
        }

        // A fresh handle to the same hardware timer retunes it in place.
        let mut tone_timer = self.ledc.timer::<LowSpeed>(timer::Number::Timer1);
        let _ = tone_timer.configure(timer::config::Config {
            duty: timer::config::Duty::Duty10Bit,
            clock_source: timer::LSClockSource::APBClk,
            frequency: Rate::from_hz(u32::from(freq_hz)),
        });
        self.channel.set_duty_hw(TONE_DUTY);
    }
}
