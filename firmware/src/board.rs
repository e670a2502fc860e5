//! Weapon board: buttons, indicator LEDs, battery monitor and power relay.
//!
//! # Pins
//!
//! | Function        | GPIO       |
//! |-----------------|------------|
//! | Trigger         | 4          |
//! | Altfire         | 5          |
//! | Power relay     | 6          |
//! | Muzzle R/G/B    | 10, 11, 12 |
//! | Torch R/G/B     | 13, 14, 15 |
//! | Battery monitor | 26 (ADC0)  |

use embassy_rp::adc::{Adc, Blocking, Channel};
use embassy_rp::gpio::{Input, Level, Output};
use embassy_time::{Duration, Instant};
use tagger_core::{Peripherals, Rgb};

/// Time between the shutdown command and the relay dropping.
pub const SHUTDOWN_DELAY: Duration = Duration::from_secs(50);

/// ADC reference voltage.
pub const ADC_REFERENCE_MV: u32 = 3_300;

/// Highest ADC reading (12 bit).
pub const ADC_FULL_SCALE: u32 = 4_095;

/// Ratio of the resistor divider in front of the battery monitor pin.
pub const BATTERY_DIVIDER: u32 = 3;

/// Convert a raw ADC reading of the battery monitor to millivolts.
#[inline]
#[must_use]
pub const fn adc_to_millivolts(raw: u16) -> u32 {
    raw as u32 * ADC_REFERENCE_MV * BATTERY_DIVIDER / ADC_FULL_SCALE
}

/// Three LEDs driven together as one colour.
pub struct RgbLed<'d> {
    red: Output<'d>,
    green: Output<'d>,
    blue: Output<'d>,
}

impl<'d> RgbLed<'d> {
    pub fn new(red: Output<'d>, green: Output<'d>, blue: Output<'d>) -> Self {
        Self { red, green, blue }
    }

    pub fn set(&mut self, colour: Rgb) {
        self.red.set_level(Level::from(colour.red));
        self.green.set_level(Level::from(colour.green));
        self.blue.set_level(Level::from(colour.blue));
    }
}

/// [`Peripherals`] on the RP2040 weapon board.
pub struct Board<'d> {
    trigger: Input<'d>,
    altfire: Input<'d>,
    muzzle: RgbLed<'d>,
    torch: RgbLed<'d>,
    adc: Adc<'d, Blocking>,
    battery: Channel<'d>,
    relay: Output<'d>,
    shutdown_at: Option<Instant>,
}

impl<'d> Board<'d> {
    /// Create the board. The relay is switched on to hold power.
    pub fn new(
        trigger: Input<'d>,
        altfire: Input<'d>,
        muzzle: RgbLed<'d>,
        torch: RgbLed<'d>,
        adc: Adc<'d, Blocking>,
        battery: Channel<'d>,
        mut relay: Output<'d>,
    ) -> Self {
        relay.set_high();
        Self {
            trigger,
            altfire,
            muzzle,
            torch,
            adc,
            battery,
            relay,
            shutdown_at: None,
        }
    }

}

impl Peripherals for Board<'_> {
    fn trigger_pressed(&mut self) -> bool {
        self.trigger.is_high()
    }

    fn altfire_pressed(&mut self) -> bool {
        self.altfire.is_high()
    }

    fn battery_millivolts(&mut self) -> u32 {
        match self.adc.blocking_read(&mut self.battery) {
            Ok(raw) => adc_to_millivolts(raw),
            Err(e) => {
                defmt::warn!("battery read failed: {}", e);
                0
            }
        }
    }

    fn shutdown(&mut self) {
        if self.shutdown_at.is_none() {
            defmt::info!("shutdown in {} s", SHUTDOWN_DELAY.as_secs());
            self.shutdown_at = Some(Instant::now() + SHUTDOWN_DELAY);
        }
    }

    fn muzzle_flash(&mut self, colour: Rgb) {
        self.muzzle.set(colour);
    }

    fn torch(&mut self, colour: Rgb) {
        self.torch.set(colour);
    }

    fn poll(&mut self, now_us: u64) {
        // drop the relay once a requested shutdown is due
        if let Some(at) = self.shutdown_at {
            if Instant::from_micros(now_us) >= at {
                defmt::info!("power relay released");
                self.relay.set_low();
                self.shutdown_at = None;
            }
        }
    }
}
