// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
//
// Alles wird zur Compile-Zeit festgelegt, es gibt keine Laufzeit-Konfiguration.

use esp_core::{ControllerSettings, ParseFailurePolicy};

// ============================================================================
// LED Konfiguration
// ============================================================================

/// GPIO-Pin für die Status-LED (einfache LED, Standard-Build)
/// Die Zuordnung selbst passiert in main.rs (peripherals.GPIO2)
pub const LED_GPIO_PIN: u8 = 2;

/// true: LED leuchtet bei High-Pegel, false: LED gegen VCC geschaltet
pub const LED_ACTIVE_HIGH: bool = true;

/// GPIO-Pin der Onboard RGB LED (WS2812, Feature "onboard-rgb")
pub const RGB_LED_GPIO_PIN: u8 = 8;

/// Helligkeits-Level für die RGB LED (0-255)
/// Wert ist gedimmt für Augenschonung
pub const LED_BRIGHTNESS: u8 = 10;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

// ============================================================================
// Serielle Schnittstelle (UART0 über USB-UART-Bridge)
// ============================================================================

/// Baudrate der Kommando-Schnittstelle
pub const SERIAL_BAUDRATE: u32 = 115_200;

/// UART0 TX/RX Pins am ESP32-C6
pub const UART_TX_GPIO_PIN: u8 = 16;
pub const UART_RX_GPIO_PIN: u8 = 17;

/// Maximale Länge einer JSON-Nachricht in Bytes
/// Längere Zeilen werden verworfen und als Lesefehler gemeldet
pub const FRAME_CAPACITY: usize = 256;

// ============================================================================
// Controller-Loop Timing
// ============================================================================

/// Wartezeit am Ende jedes Zyklus
pub const LOOP_INTERVAL_MS: u32 = 1000;

/// Haltezeit je Phase des Fehler-Blinkens (an bzw. aus)
pub const BLINK_HOLD_MS: u32 = 250;

/// Anzahl der Blink-Wiederholungen bei Fehler
pub const BLINK_REPETITIONS: u8 = 3;

/// Verhalten bei kaputtem JSON
/// SkipRender = kompatibel zur ursprünglichen Firmware (kein Rendern, keine Pause)
pub const PARSE_FAILURE_POLICY: ParseFailurePolicy = ParseFailurePolicy::SkipRender;

/// Zusammengefasste Einstellungen für esp_core::ControlLoop
pub const CONTROLLER_SETTINGS: ControllerSettings = ControllerSettings {
    loop_interval_ms: LOOP_INTERVAL_MS,
    blink_hold_ms: BLINK_HOLD_MS,
    blink_repetitions: BLINK_REPETITIONS,
    parse_failure: PARSE_FAILURE_POLICY,
};

// ============================================================================
// Speicher
// ============================================================================

/// Heap-Größe (Bytes) für den JSON-Baum
/// Eine Nachricht mit FRAME_CAPACITY Bytes braucht nur wenige KB
pub const HEAP_SIZE: usize = 16384; // 16 KB
