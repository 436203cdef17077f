//! Analog humidity and temperature sensors.
//!
//! Both sensors share the SAADC; each cycle samples the two channels in one
//! conversion. Values are raw ADC counts, neither scaled nor validated.

use defmt::info;
use embassy_nrf::saadc::Saadc;

/// Channel index of the humidity sensor in the SAADC channel array.
pub const HUMIDITY_CHANNEL: usize = 0;
/// Channel index of the temperature sensor in the SAADC channel array.
pub const TEMPERATURE_CHANNEL: usize = 1;

/// Raw readings from one conversion.
#[derive(Clone, Copy, Debug, defmt::Format)]
pub struct SensorSample {
    pub humidity: f32,
    pub temperature: f32,
}

pub struct Sensors {
    adc: Saadc<'static, 2>,
}

impl Sensors {
    /// Calibrate the SAADC once before the first sample.
    pub async fn new(mut adc: Saadc<'static, 2>) -> Self {
        adc.calibrate().await;
        info!("Sensors: SAADC calibrated");
        Self { adc }
    }

    pub async fn read(&mut self) -> SensorSample {
        let mut buf = [0i16; 2];
        self.adc.sample(&mut buf).await;
        SensorSample {
            humidity: f32::from(buf[HUMIDITY_CHANNEL]),
            temperature: f32::from(buf[TEMPERATURE_CHANNEL]),
        }
    }
}
