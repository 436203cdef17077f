//! meteo-station firmware entry point.
//!
//! Polls the mode button and both analog sensors every
//! `POLL_INTERVAL_MS`, drives the red/green unit indicator, and writes one
//! telemetry line per cycle over UART. Unit commands received on the same
//! UART are applied at the start of the next cycle.

#![no_std]
#![no_main]

mod hw;

use defmt::{debug, info, unwrap, warn};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_nrf::buffered_uarte::{self, BufferedUarte};
use embassy_nrf::gpio::{Input, Pin, Pull};
use embassy_nrf::saadc::{self, ChannelConfig, Saadc};
use embassy_nrf::uarte;
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_time::{Duration, Timer};
use meteo_station::config::{
    BUTTON_IDLE_LEVEL, COMMAND_QUEUE_DEPTH, DEFAULT_DISPLAY_MODE, POLL_INTERVAL_MS, READY_BANNER,
    SERIAL_BAUD, TELEMETRY_FORMAT, UART_RX_BUFFER_SIZE, UART_TX_BUFFER_SIZE,
};
use meteo_station::serial::{Command, Telemetry};
use meteo_station::ModeToggleController;
use panic_probe as _;
use static_cell::StaticCell;

use hw::indicator::Indicator;
use hw::sensors::Sensors;
use hw::uart::{TelemetryWriter, UartRx};

bind_interrupts!(struct Irqs {
    SAADC => saadc::InterruptHandler;
    UARTE0_UART0 => buffered_uarte::InterruptHandler<peripherals::UARTE0>;
});

/// Commands parsed by the UART reader, drained by the polling loop.
static COMMANDS: Channel<CriticalSectionRawMutex, Command, COMMAND_QUEUE_DEPTH> = Channel::new();

static UART_RX_BUFFER: StaticCell<[u8; UART_RX_BUFFER_SIZE]> = StaticCell::new();
static UART_TX_BUFFER: StaticCell<[u8; UART_TX_BUFFER_SIZE]> = StaticCell::new();

#[embassy_executor::task]
async fn command_task(rx: UartRx) -> ! {
    hw::uart::command_loop(rx, COMMANDS.sender()).await
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("meteo-station starting");

    // UART
    let mut uart_config = uarte::Config::default();
    uart_config.parity = uarte::Parity::EXCLUDED;
    uart_config.baudrate = unwrap!(hw::uart::baudrate(SERIAL_BAUD));
    let rx_buffer = UART_RX_BUFFER.init([0; UART_RX_BUFFER_SIZE]);
    let tx_buffer = UART_TX_BUFFER.init([0; UART_TX_BUFFER_SIZE]);
    let uart = BufferedUarte::new(
        p.UARTE0,
        p.TIMER0,
        p.PPI_CH0,
        p.PPI_CH1,
        p.PPI_GROUP0,
        Irqs,
        p.P0_08,
        p.P0_06,
        uart_config,
        rx_buffer,
        tx_buffer,
    );
    let (rx, tx) = uart.split();
    let mut writer = TelemetryWriter::new(tx);
    if let Err(e) = writer.write_line(READY_BANNER).await {
        warn!("UART: failed to write banner: {}", e);
    }
    unwrap!(spawner.spawn(command_task(rx)));

    // Sensors (10-bit, same range as the classic analogRead)
    let mut adc_config = saadc::Config::default();
    adc_config.resolution = saadc::Resolution::_10BIT;
    let humidity = ChannelConfig::single_ended(p.P0_03);
    let temperature = ChannelConfig::single_ended(p.P0_04);
    let adc = Saadc::new(p.SAADC, Irqs, adc_config, [humidity, temperature]);
    let mut sensors = Sensors::new(adc).await;

    // Button + indicator
    let button = Input::new(p.P0_11, Pull::Up);
    let mut indicator = Indicator::new(p.P0_13.degrade(), p.P0_14.degrade());

    let mut controller = ModeToggleController::new(DEFAULT_DISPLAY_MODE, BUTTON_IDLE_LEVEL);
    indicator.show(controller.color());
    info!("Ready: unit={}", controller.mode());

    loop {
        while let Ok(Command::SetUnit(mode)) = COMMANDS.try_receive() {
            if controller.select(mode) {
                info!("Mode: unit={} (remote)", mode);
            }
        }

        // Raw line level: low while held, so the unit flips on release.
        let line_high = button.is_high();
        let sample = sensors.read().await;

        let previous = controller.mode();
        let reading = controller.poll(line_high, sample.temperature);
        if controller.mode() != previous {
            info!("Mode: unit={} (button)", controller.mode());
        }
        indicator.show(reading.color);

        let telemetry = Telemetry {
            temperature: reading.temperature,
            humidity: sample.humidity,
            unit: controller.mode(),
        };
        debug!("{}", telemetry);

        match telemetry.render(TELEMETRY_FORMAT) {
            Ok(line) => {
                if let Err(e) = writer.write_line(&line).await {
                    warn!("UART: telemetry write failed: {}", e);
                }
            }
            Err(e) => warn!("Telemetry: {}", e),
        }

        Timer::after(Duration::from_millis(POLL_INTERVAL_MS)).await;
    }
}
