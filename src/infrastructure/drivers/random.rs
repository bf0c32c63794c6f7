use esp_hal::rng::Rng;

/// Random source for the boot demo, backed by the hardware RNG.
pub fn hardware_rand() -> impl FnMut() -> u32 {
    let rng = Rng::new();
    move || rng.random()
}
