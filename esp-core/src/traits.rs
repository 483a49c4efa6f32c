//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use crate::types::PinLevel;

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedError {
    WriteFailed,
}

/// Fehler-Typ für die serielle Schnittstelle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SerialError {
    ReadFailed,
    WriteFailed,
}

/// Trait für die Status-LED
///
/// # Implementierungen
/// - **Production:** GpioIndicator (GPIO-Pin), RmtIndicator (WS2812 über RMT)
/// - **Testing:** MockIndicator (zeichnet Pegel auf)
pub trait IndicatorLed {
    /// Setzt den logischen Pegel der LED
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn set_level(&mut self, level: PinLevel) -> Result<(), LedError>;
}

/// Trait für die serielle Verbindung (Kommandos rein, Diagnose raus)
pub trait SerialLink {
    /// Liest ein bereits empfangenes Byte, ohne zu blockieren
    ///
    /// `Ok(None)` bedeutet: aktuell keine Daten verfügbar.
    fn read_byte(&mut self) -> Result<Option<u8>, SerialError>;

    /// Schreibt eine Textzeile inklusive Zeilenende
    fn write_line(&mut self, line: &str) -> Result<(), SerialError>;
}
