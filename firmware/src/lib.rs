//! MilesTag laser-tag weapon firmware for RP2040.
//!
//! This crate provides the board-specific implementations of the
//! collaborator traits from [`tagger_core`].
//!
//! # Overview
//!
//! The firmware runs on a Raspberry Pi Pico (RP2040) and:
//! 1. Exchanges text lines with a host device over UART (115200 baud, 8N1)
//! 2. Sends and receives MilesTag protocol-1 words over a 38 kHz infrared link
//! 3. Reads the trigger, altfire and battery, and drives the muzzle and torch LEDs
//!
//! # Hardware Configuration
//!
//! | Function        | GPIO       | Description |
//! |-----------------|------------|-------------|
//! | UART0 TX        | 0          | Host link transmit |
//! | UART0 RX        | 1          | Host link receive |
//! | IR LED          | 2          | PWM slice 1 A, 38 kHz carrier |
//! | IR receiver     | 3          | Demodulated, active low |
//! | Trigger         | 4          | Active high |
//! | Altfire         | 5          | Active high |
//! | Power relay     | 6          | High holds power |
//! | Muzzle R/G/B    | 10, 11, 12 | Shot indicator |
//! | Torch R/G/B     | 13, 14, 15 | Altfire light |
//! | Battery monitor | 26         | ADC0 behind a 1:3 divider |
//!
//! # Architecture
//!
//! A single Embassy task runs [`TaggerBridge::poll_once`](tagger_core::TaggerBridge::poll_once)
//! in a loop, yielding to the executor between iterations. All infrared
//! timing is derived from [`embassy_time::Instant`] at each iteration.
//!
//! # Modules
//!
//! - [`uart_link`]: Buffered UART host link ([`UartHostInput`], [`UartHostOutput`])
//! - [`board`]: Buttons, LEDs, ADC and relay ([`Board`])
//!
//! # Features
//!
//! - **`dev-panic`** (default): Use `panic-probe` for development (prints panic info via RTT)
//! - **`prod-panic`**: Use `panic-reset` for production (silent watchdog reset)
//!
//! # Re-exports
//!
//! This crate re-exports the bridge types from [`tagger_core`] for convenience.

#![no_std]

#[cfg(all(feature = "dev-panic", feature = "prod-panic"))]
compile_error!("Cannot enable both `dev-panic` and `prod-panic` features - they install conflicting panic handlers");

// Re-export core types for convenience
pub use tagger_core::{
    BridgeConfig, BridgeError, IrTransceiver, PulseTransceiver, Rgb, TaggerBridge, DEFAULT_CONFIG,
};

pub mod board;
pub mod uart_link;

pub use board::{Board, RgbLed};
pub use uart_link::{UartHostInput, UartHostOutput};

use milestag_proto::pulse::CARRIER_HZ;

/// System clock the PWM slice runs from.
pub const SYS_CLOCK_HZ: u32 = 125_000_000;

/// PWM wrap value giving the infrared carrier frequency.
pub const CARRIER_TOP: u16 = (SYS_CLOCK_HZ / CARRIER_HZ - 1) as u16;
