//! Buffered UARTE telemetry output and command input.
//!
//! The buffered UARTE keeps receiving into its ring buffer between reads,
//! so back-to-back command bytes are not lost. It is split: the polling
//! loop owns the TX half and writes one line per cycle, a separate task
//! owns the RX half and turns incoming lines into [`Command`]s for the
//! polling loop.

use defmt::{info, warn};
use embassy_nrf::buffered_uarte::{BufferedUarteRx, BufferedUarteTx};
use embassy_nrf::peripherals::{TIMER0, UARTE0};
use embassy_nrf::uarte::Baudrate;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Sender;
use meteo_station::config::{COMMAND_LINE_CAPACITY, COMMAND_QUEUE_DEPTH};
use meteo_station::error::{Error, Result};
use meteo_station::serial::{Command, LineBuffer};

pub type UartTx = BufferedUarteTx<'static, UARTE0>;
pub type UartRx = BufferedUarteRx<'static, UARTE0, TIMER0>;

/// Map a numeric baud rate to the UARTE register setting.
pub fn baudrate(baud: u32) -> Option<Baudrate> {
    match baud {
        9_600 => Some(Baudrate::BAUD9600),
        19_200 => Some(Baudrate::BAUD19200),
        38_400 => Some(Baudrate::BAUD38400),
        57_600 => Some(Baudrate::BAUD57600),
        115_200 => Some(Baudrate::BAUD115200),
        230_400 => Some(Baudrate::BAUD230400),
        _ => None,
    }
}

pub struct TelemetryWriter {
    tx: UartTx,
}

impl TelemetryWriter {
    pub fn new(tx: UartTx) -> Self {
        Self { tx }
    }

    /// Queue an already terminated line, waiting for ring buffer space.
    pub async fn write_line(&mut self, line: &str) -> Result<()> {
        let mut remaining = line.as_bytes();
        while !remaining.is_empty() {
            let written = self.tx.write(remaining).await.map_err(|_| Error::Uart)?;
            remaining = &remaining[written..];
        }
        Ok(())
    }
}

/// Read command lines forever, forwarding each valid command to `tx`.
pub async fn command_loop(
    mut rx: UartRx,
    tx: Sender<'static, CriticalSectionRawMutex, Command, COMMAND_QUEUE_DEPTH>,
) -> ! {
    let mut lines = LineBuffer::<COMMAND_LINE_CAPACITY>::new();
    let mut chunk = [0u8; 16];

    loop {
        let n = match rx.read(&mut chunk).await {
            Ok(n) => n,
            Err(e) => {
                warn!("UART: read failed: {}", e);
                continue;
            }
        };

        for &byte in &chunk[..n] {
            let Some(line) = lines.push(byte) else {
                continue;
            };

            match line.and_then(|line| Command::parse(&line)) {
                Ok(command) => {
                    info!("UART: command {}", command);
                    tx.send(command).await;
                }
                Err(e) => warn!("UART: rejected line: {}", e),
            }
        }
    }
}
