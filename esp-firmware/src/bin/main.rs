// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::timer::timg::TimerGroup;
use esp_hal::uart::{Config as UartConfig, Uart};

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use esp_json_led::config::{HEAP_SIZE, SERIAL_BAUDRATE, UART_RX_GPIO_PIN, UART_TX_GPIO_PIN};
use esp_json_led::tasks::controller_task;

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, startet Embassy Runtime und spawnt den Controller-Task.
/// Danach schläft main() - die Arbeit läuft im Task.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Heap Allocator initialisieren (serde_json baut den JSON-Baum auf dem Heap)
    esp_alloc::heap_allocator!(size: HEAP_SIZE);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // UART0 (USB-UART-Bridge) für JSON-Kommandos und Diagnose-Zeilen
    let uart = Uart::new(
        peripherals.UART0,
        UartConfig::default().with_baudrate(SERIAL_BAUDRATE),
    )
    .expect("Failed to configure UART0")
    .with_rx(peripherals.GPIO17)
    .with_tx(peripherals.GPIO16);
    defmt::info!(
        "Serial: UART0 at {} baud (TX GPIO{}, RX GPIO{})",
        SERIAL_BAUDRATE,
        UART_TX_GPIO_PIN,
        UART_RX_GPIO_PIN
    );

    // Spawn Controller Task (einfache LED an GPIO2)
    #[cfg(not(feature = "onboard-rgb"))]
    spawner
        .spawn(controller_task(uart, peripherals.GPIO2))
        .unwrap();

    // Spawn Controller Task (Onboard WS2812 an GPIO8 über RMT)
    #[cfg(feature = "onboard-rgb")]
    spawner
        .spawn(controller_task(uart, peripherals.GPIO8, peripherals.RMT))
        .unwrap();

    // Main-Loop: schläft (alle Arbeit läuft im Task)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
