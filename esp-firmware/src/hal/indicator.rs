// Status-LED Implementierungen
//
// Setzen den logischen PinLevel aus esp-core auf echte Hardware um.

use esp_core::{IndicatorLed, LedError, PinLevel};
use esp_hal::gpio::{Level, Output, OutputConfig, OutputPin};

// ============================================================================
// Einfache LED an einem GPIO-Pin
// ============================================================================

/// LED an einem GPIO-Ausgang
///
/// `active_high` legt fest welcher Pin-Pegel die LED einschaltet.
pub struct GpioIndicator<'a> {
    pin: Output<'a>,
    active_high: bool,
}

impl<'a> GpioIndicator<'a> {
    /// Erstellt den Ausgang, LED startet ausgeschaltet
    pub fn new(pin: impl OutputPin + 'a, active_high: bool) -> Self {
        let off = Self::physical(PinLevel::Inactive, active_high);
        let pin = Output::new(pin, off, OutputConfig::default());
        Self { pin, active_high }
    }

    fn physical(level: PinLevel, active_high: bool) -> Level {
        match (level, active_high) {
            (PinLevel::Active, true) | (PinLevel::Inactive, false) => Level::High,
            (PinLevel::Inactive, true) | (PinLevel::Active, false) => Level::Low,
        }
    }
}

impl<'a> IndicatorLed for GpioIndicator<'a> {
    fn set_level(&mut self, level: PinLevel) -> Result<(), LedError> {
        // GPIO-Schreiben kann nicht fehlschlagen
        self.pin.set_level(Self::physical(level, self.active_high));
        Ok(())
    }
}

// ============================================================================
// Onboard RGB LED (WS2812) über RMT Peripheral
// ============================================================================

#[cfg(feature = "onboard-rgb")]
mod rgb_impl {
    use super::*;
    use esp_hal::Blocking;
    use esp_hal::rmt::Rmt;
    use esp_hal::time::Rate;
    use esp_hal_smartled::SmartLedsAdapter;
    use rgb::RGB8;
    use smart_leds_trait::SmartLedsWrite;

    // Buffer-Größe für 1 LED (3 Farben * 8 Bits + 1 Reset)
    const LED_BUFFER_SIZE: usize = 25;

    /// WS2812 als An/Aus-Anzeige
    ///
    /// Active = weiß mit `brightness`, Inactive = aus.
    ///
    /// Hinweis: Der Buffer muss länger leben als der Writer, daher wird er im Task
    /// erstellt und als Parameter übergeben statt im Constructor allokiert.
    pub struct RmtIndicator<'a> {
        led: SmartLedsAdapter<'a, LED_BUFFER_SIZE>,
        brightness: u8,
    }

    impl<'a> RmtIndicator<'a> {
        /// Erstellt einen neuen RmtIndicator
        ///
        /// # Parameter
        /// - `gpio8`: GPIO8 Peripheral für LED-Datenleitung
        /// - `rmt_peripheral`: RMT Peripheral
        /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
        /// - `brightness`: Helligkeit im eingeschalteten Zustand
        /// - `buffer`: Buffer für LED-Daten (erstellt mit smart_led_buffer!(1) Macro)
        pub fn new(
            gpio8: esp_hal::peripherals::GPIO8<'a>,
            rmt_peripheral: esp_hal::peripherals::RMT<'a>,
            rmt_clock_mhz: u32,
            brightness: u8,
            buffer: &'a mut [esp_hal::rmt::PulseCode; LED_BUFFER_SIZE],
        ) -> Result<Self, LedError> {
            let rmt: Rmt<'a, Blocking> = Rmt::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz))
                .map_err(|_| LedError::WriteFailed)?;

            let led = SmartLedsAdapter::new(rmt.channel0, gpio8, buffer);

            Ok(Self { led, brightness })
        }
    }

    impl<'a> IndicatorLed for RmtIndicator<'a> {
        fn set_level(&mut self, level: PinLevel) -> Result<(), LedError> {
            let color = match level {
                PinLevel::Active => RGB8::new(self.brightness, self.brightness, self.brightness),
                PinLevel::Inactive => RGB8::default(),
            };
            self.led
                .write([color].into_iter())
                .map_err(|_| LedError::WriteFailed)
        }
    }
}

#[cfg(feature = "onboard-rgb")]
pub use rgb_impl::RmtIndicator;
