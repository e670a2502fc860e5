#![no_std]
#![no_main]

use defmt::{error, info, unwrap};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_futures::yield_now;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::UART0;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_rp::uart::{BufferedInterruptHandler, BufferedUart, Config as UartConfig};
use embassy_time::Instant;
use static_cell::StaticCell;
use tagger_firmware::uart_link::{BAUD_RATE, UART_BUFFER_SIZE};
use tagger_firmware::{
    Board, PulseTransceiver, RgbLed, TaggerBridge, UartHostInput, UartHostOutput, CARRIER_TOP,
};

#[cfg(feature = "dev-panic")]
use panic_probe as _;
#[cfg(feature = "prod-panic")]
use panic_reset as _;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

/// UART ring buffers.
static TX_BUFFER: StaticCell<[u8; UART_BUFFER_SIZE]> = StaticCell::new();
static RX_BUFFER: StaticCell<[u8; UART_BUFFER_SIZE]> = StaticCell::new();

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Tagger starting...");

    let p = embassy_rp::init(embassy_rp::config::Config::default());

    // --- Board Setup ---
    // Relay first, so the weapon keeps power once the switch is released
    let relay = Output::new(p.PIN_6, Level::High);
    let muzzle = RgbLed::new(
        Output::new(p.PIN_10, Level::Low),
        Output::new(p.PIN_11, Level::Low),
        Output::new(p.PIN_12, Level::Low),
    );
    let torch = RgbLed::new(
        Output::new(p.PIN_13, Level::Low),
        Output::new(p.PIN_14, Level::Low),
        Output::new(p.PIN_15, Level::Low),
    );
    let trigger = Input::new(p.PIN_4, Pull::Down);
    let altfire = Input::new(p.PIN_5, Pull::Down);
    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let battery = Channel::new_pin(p.PIN_26, Pull::None);
    let board = Board::new(trigger, altfire, muzzle, torch, adc, battery, relay);

    // --- Infrared Setup ---
    let mut pwm_config = PwmConfig::default();
    pwm_config.top = CARRIER_TOP;
    pwm_config.compare_a = 0;
    let pwm = Pwm::new_output_a(p.PWM_SLICE1, p.PIN_2, pwm_config);
    let (carrier, _) = pwm.split();
    let receiver = Input::new(p.PIN_3, Pull::Up);
    let ir = PulseTransceiver::new(unwrap!(carrier), receiver);

    // --- UART Setup ---
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = BAUD_RATE;

    let uart = BufferedUart::new(
        p.UART0,
        p.PIN_0, // TX
        p.PIN_1, // RX
        Irqs,
        TX_BUFFER.init([0; UART_BUFFER_SIZE]),
        RX_BUFFER.init([0; UART_BUFFER_SIZE]),
        uart_config,
    );
    let (tx, rx) = uart.split();

    let mut bridge = TaggerBridge::new(
        UartHostInput::new(rx),
        UartHostOutput::new(tx),
        ir,
        board,
    );

    info!("Tagger initialized, team {}", bridge.state().team);

    loop {
        if let Err(e) = bridge.poll_once(Instant::now().as_micros()).await {
            error!("Link error: {:?}", e);
        }
        yield_now().await;
    }
}
