// Controller Task - liest JSON von UART0 und steuert die Status-LED
use defmt::{error, info, warn};
use embassy_time::Delay;
use esp_hal::Blocking;
use esp_hal::uart::Uart;

use esp_core::{ControlLoop, CycleReport, IndicatorLed, SerialLink};

use crate::config::*;
use crate::hal::UartLink;

/// Controller Logic - Testbare Schleife ohne konkrete Hardware-Typen
///
/// Dieselbe `esp_core::ControlLoop` wird in `esp-tests` mit Mocks ausgeführt,
/// hier läuft sie mit UART, echter LED und embassy-time Delays.
///
/// # Parameter
/// - `serial`: serielle Verbindung (Kommandos + Diagnose-Zeilen)
/// - `led`: Status-LED (GPIO oder RMT)
pub async fn controller_logic<S: SerialLink, L: IndicatorLed>(serial: S, led: L) {
    let mut control: ControlLoop<S, L, Delay, FRAME_CAPACITY> =
        ControlLoop::new(serial, led, Delay, CONTROLLER_SETTINGS);

    info!("Control: Starting, settings {}", CONTROLLER_SETTINGS);
    log_report(&control.begin());

    // Hauptschleife: endlos, Wartezeiten stecken in run_cycle()
    loop {
        let report = control.run_cycle().await;
        log_report(&report);
    }
}

/// Schreibt das Ergebnis eines Zyklus ins defmt-Log
fn log_report(report: &CycleReport) {
    match report.input {
        Some(Ok(value)) => info!("Serial: Command received, process = {}", value),
        Some(Err(e)) => warn!("Serial: Message rejected: {}", e),
        None => {}
    }

    match report.rendered {
        Some(indication) => info!("LED: {}", indication),
        None => info!("LED: Render skipped after parse failure"),
    }

    if let Some(e) = report.led_fault {
        error!("LED: Failed to drive indicator: {}", e);
    }
    if let Some(e) = report.serial_fault {
        error!("Serial: I/O error: {}", e);
    }
}

/// Controller Task - Embassy Task mit einfacher LED am GPIO-Pin
///
/// # Parameter
/// - `uart`: konfigurierter UART0 (Baudrate, Pins)
/// - `led_pin`: GPIO für die LED (siehe `LED_GPIO_PIN`)
#[cfg(not(feature = "onboard-rgb"))]
#[embassy_executor::task]
pub async fn controller_task(
    uart: Uart<'static, Blocking>,
    led_pin: esp_hal::peripherals::GPIO2<'static>,
) {
    use crate::hal::GpioIndicator;

    info!(
        "Control: LED on GPIO{} (active {})",
        LED_GPIO_PIN,
        if LED_ACTIVE_HIGH { "high" } else { "low" }
    );
    let led = GpioIndicator::new(led_pin, LED_ACTIVE_HIGH);

    controller_logic(UartLink::new(uart), led).await;
}

/// Controller Task - Embassy Task mit Onboard WS2812 über RMT
///
/// # Parameter
/// - `uart`: konfigurierter UART0 (Baudrate, Pins)
/// - `gpio8`: GPIO8 Peripheral für LED-Datenleitung
/// - `rmt_peripheral`: RMT Peripheral für präzises Timing
#[cfg(feature = "onboard-rgb")]
#[embassy_executor::task]
pub async fn controller_task(
    uart: Uart<'static, Blocking>,
    gpio8: esp_hal::peripherals::GPIO8<'static>,
    rmt_peripheral: esp_hal::peripherals::RMT<'static>,
) {
    use crate::hal::RmtIndicator;
    use esp_hal_smartled::smart_led_buffer;

    // Buffer für SmartLED Daten erstellen (1 LED)
    let mut rmt_buffer = smart_led_buffer!(1);

    info!("Control: Onboard RGB LED on GPIO{}", RGB_LED_GPIO_PIN);
    let led = match RmtIndicator::new(
        gpio8,
        rmt_peripheral,
        RMT_CLOCK_MHZ,
        LED_BRIGHTNESS,
        &mut rmt_buffer,
    ) {
        Ok(led) => led,
        Err(e) => {
            error!("LED: RMT initialisation failed: {}", e);
            return;
        }
    };

    controller_logic(UartLink::new(uart), led).await;
}
