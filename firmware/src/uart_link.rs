//! Host link over the buffered UART.
//!
//! The bridge loop reads at most one byte per iteration and must never wait
//! for one, so reads check the receive ring first. The transmit ring cannot
//! report its free space, so writes are paced by a [`TxCredit`] at the line
//! rate and `blocking_write` never finds the ring full.
//!
//! # Pins
//!
//! Uses UART0 at 115200 baud, 8N1:
//! - GPIO 0: TX
//! - GPIO 1: RX

use embassy_rp::uart::{BufferedUartRx, BufferedUartTx, Error as UartError};
use embassy_time::Instant;
use embedded_io::{Read, ReadReady};
use tagger_core::{HostInput, HostOutput, InputError, OutputError, TxCredit};

/// Host link baud rate.
pub const BAUD_RATE: u32 = 115_200;

/// Size of each UART ring buffer.
pub const UART_BUFFER_SIZE: usize = 64;

/// Convert UART errors to [`InputError`].
///
/// This is a helper function instead of a `From` impl to avoid orphan rule issues
/// (both `UartError` and `InputError` are defined in external crates).
#[inline]
fn uart_error_to_input_error(e: UartError) -> InputError {
    match e {
        UartError::Framing => InputError::Framing,
        UartError::Parity => InputError::Parity,
        UartError::Break => InputError::Break,
        UartError::Overrun => InputError::BufferOverflow,
        _ => InputError::Io,
    }
}

/// Receiving half of the host link.
pub struct UartHostInput {
    rx: BufferedUartRx,
}

impl UartHostInput {
    #[must_use]
    pub fn new(rx: BufferedUartRx) -> Self {
        Self { rx }
    }
}

impl HostInput for UartHostInput {
    fn read_byte(&mut self) -> Result<Option<u8>, InputError> {
        if !self.rx.read_ready().map_err(uart_error_to_input_error)? {
            return Ok(None);
        }

        let mut byte = [0u8; 1];
        match self.rx.read(&mut byte).map_err(uart_error_to_input_error)? {
            0 => Ok(None),
            _ => Ok(Some(byte[0])),
        }
    }
}

/// Transmitting half of the host link.
pub struct UartHostOutput {
    tx: BufferedUartTx,
    credit: TxCredit,
}

impl UartHostOutput {
    #[must_use]
    pub fn new(tx: BufferedUartTx) -> Self {
        Self {
            tx,
            credit: TxCredit::for_baud(UART_BUFFER_SIZE, BAUD_RATE),
        }
    }
}

impl HostOutput for UartHostOutput {
    async fn write_byte(&mut self, byte: u8) -> Result<(), OutputError> {
        if !self.credit.consume() {
            return Err(OutputError::Busy);
        }
        match self.tx.blocking_write(&[byte]) {
            Ok(0) => Err(OutputError::Busy),
            Ok(_) => Ok(()),
            Err(_) => Err(OutputError::Io),
        }
    }

    fn is_ready(&mut self) -> bool {
        self.credit.available(Instant::now().as_micros()) > 0
    }
}
