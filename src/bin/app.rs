#![no_std]
#![no_main]

use esp_backtrace as _;
use esp_hal::clock::CpuClock;
use esp_hal::ledc::{LSGlobalClkSource, Ledc};
use esp_hal::main;
use esp_hal::uart::{self, Uart};
use log::info;

use bulby::infrastructure::drivers::EspBulbDriver;
use bulby::{app, config, mk_static, rgb_gpio};
use bulby_console::{Bulb, Console};

esp_bootloader_esp_idf::esp_app_desc!();

#[main]
fn main() -> ! {
    esp_println::logger::init_logger_from_env();

    // Initialize hardware
    let hal_config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(hal_config);

    let ledc = mk_static!(Ledc<'static>, Ledc::new(peripherals.LEDC));
    ledc.set_global_slow_clock(LSGlobalClkSource::APBClk);

    let (red, green, blue) = rgb_gpio!(peripherals);
    #[cfg(feature = "tone")]
    let driver = EspBulbDriver::new(
        ledc,
        red,
        green,
        blue,
        bulby::tone_gpio!(peripherals).degrade(),
    );
    #[cfg(not(feature = "tone"))]
    let driver = EspBulbDriver::new(ledc, red, green, blue);

    let mut bulb = Bulb::new(driver);

    #[cfg(feature = "demo")]
    boot_demo(&mut bulb);

    let uart_config = uart::Config::default().with_baudrate(config::SERIAL.baudrate);
    let uart = Uart::new(peripherals.UART0, uart_config)
        .unwrap()
        .with_tx(peripherals.GPIO1)
        .with_rx(peripherals.GPIO3);
    let (rx, tx) = uart.split();

    info!("bulby {} ready", config::BUILD_VERSION);

    let mut console = Console::new(tx, bulb);
    let _ = console.greet();
    app::run(rx, &mut console)
}

/// One-shot boot sequence: fade a random color in and out, then sweep the
/// hue circle once. Blocks until finished; the console starts afterwards.
#[cfg(feature = "demo")]
fn boot_demo<D: bulby_console::BulbDriver>(bulb: &mut bulby_console::Bulb<D>) {
    use bulby::infrastructure::drivers::hardware_rand;
    use bulby_console::demo;
    use esp_hal::delay::Delay;

    let mut delay = Delay::new();
    let mut rand = hardware_rand();

    let color = demo::random_color(&mut rand);
    demo::fade_in(bulb, &mut delay, color);
    demo::fade_out(bulb, &mut delay, color);
    demo::hue_cycle(bulb, &mut delay);
}
