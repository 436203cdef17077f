//! Integration tests for meteo-station host-testable logic.

use meteo_station::serial::{Command, LineBuffer, Telemetry, TelemetryFormat};
use meteo_station::{DisplayMode, IndicatorColor, ModeToggleController};

/// Run one station cycle the way the firmware loop does: apply pending
/// commands, poll the controller, render the telemetry line.
fn cycle(
    controller: &mut ModeToggleController,
    commands: &[Command],
    line_high: bool,
    raw_temperature: f32,
    humidity: f32,
) -> (IndicatorColor, String) {
    for &Command::SetUnit(mode) in commands {
        controller.select(mode);
    }
    let reading = controller.poll(line_high, raw_temperature);
    let line = Telemetry {
        temperature: reading.temperature,
        humidity,
        unit: controller.mode(),
    }
    .render(TelemetryFormat::Json)
    .expect("telemetry line should fit");
    (reading.color, line.as_str().to_owned())
}

#[test]
fn button_release_switches_telemetry_to_celsius() {
    // Active-low button: idle line is high.
    let mut controller = ModeToggleController::new(DisplayMode::Fahrenheit, true);

    let (color, line) = cycle(&mut controller, &[], true, 212.0, 400.0);
    assert_eq!(color, IndicatorColor::Red);
    assert!(line.contains("\"temperature\":212.0"));
    assert!(line.contains("\"unit\":\"F\""));

    // Held down: still Fahrenheit.
    let (color, line) = cycle(&mut controller, &[], false, 212.0, 400.0);
    assert_eq!(color, IndicatorColor::Red);
    assert!(line.contains("\"unit\":\"F\""));

    // Released: Celsius.
    let (color, line) = cycle(&mut controller, &[], true, 212.0, 400.0);
    assert_eq!(color, IndicatorColor::Green);
    assert!(line.contains("\"temperature\":100.0"));
    assert!(line.contains("\"unit\":\"C\""));
}

#[test]
fn serial_command_selects_unit_between_button_presses() {
    let mut controller = ModeToggleController::new(DisplayMode::Fahrenheit, true);
    let mut lines = LineBuffer::<32>::new();

    let mut received = Vec::new();
    for &byte in b"{\"unit\":\"C\"}\r\n" {
        if let Some(line) = lines.push(byte) {
            received.push(Command::parse(&line.unwrap()).unwrap());
        }
    }
    assert_eq!(received, [Command::SetUnit(DisplayMode::Celsius)]);

    let (color, line) = cycle(&mut controller, &received, true, 32.0, 0.0);
    assert_eq!(color, IndicatorColor::Green);
    assert!(line.contains("\"temperature\":0.0"));

    // The next press-and-release still toggles from the remotely selected unit.
    cycle(&mut controller, &[], false, 32.0, 0.0);
    let (color, _) = cycle(&mut controller, &[], true, 32.0, 0.0);
    assert_eq!(color, IndicatorColor::Red);
    assert_eq!(controller.mode(), DisplayMode::Fahrenheit);
}

#[test]
fn humidity_format_emits_bare_reading() {
    let line = Telemetry {
        temperature: 70.0,
        humidity: 300.0,
        unit: DisplayMode::Fahrenheit,
    }
    .render(TelemetryFormat::Humidity)
    .unwrap();
    assert_eq!(line.as_str(), "300.00\r\n");
}
