//! Core Types für die JSON-gesteuerte LED
//!
//! Datenstrukturen ohne Hardware-Dependencies

/// Logischer Pegel des Ausgangs-Pins
///
/// Die physikalische Polarität (active-high / active-low) entscheidet
/// der Hardware-Adapter, nicht die Logik.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinLevel {
    Active,
    Inactive,
}

/// Was der Render-Schritt auf dem Pin darstellt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Indication {
    /// Pin bleibt dauerhaft auf diesem Pegel
    Steady(PinLevel),
    /// Fehler-Blinkmuster, endet auf `Inactive`
    ErrorBlink,
}

/// Ein Schritt des Blinkmusters: Pegel setzen, dann `hold_ms` warten
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinStep {
    pub level: PinLevel,
    pub hold_ms: u32,
}

/// Zustand des zuletzt empfangenen Kommandos
///
/// `command_value` ist nur aussagekräftig wenn `was_processed == true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LastCommand {
    pub was_processed: bool,
    pub command_value: bool,
}

impl LastCommand {
    /// Kommando erfolgreich gelesen
    pub const fn accepted(value: bool) -> Self {
        Self {
            was_processed: true,
            command_value: value,
        }
    }

    /// Feld fehlt oder hat falschen Typ
    pub const fn rejected() -> Self {
        Self {
            was_processed: false,
            command_value: false,
        }
    }

    /// Leitet die Pin-Darstellung ab (reine Funktion des Zustands)
    pub fn indication(&self) -> Indication {
        match (self.was_processed, self.command_value) {
            (true, true) => Indication::Steady(PinLevel::Active),
            (true, false) => Indication::Steady(PinLevel::Inactive),
            (false, _) => Indication::ErrorBlink,
        }
    }
}

/// Verhalten bei nicht parsebarem JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseFailurePolicy {
    /// Kein Render und keine Wartezeit in diesem Zyklus (kompatibles Verhalten)
    #[default]
    SkipRender,
    /// Wie ein Schema-Fehler behandeln: Render (Blinken) und normale Wartezeit
    Indicate,
}

/// Timing- und Verhaltens-Parameter des Controller-Loops
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControllerSettings {
    pub loop_interval_ms: u32,
    pub blink_hold_ms: u32,
    pub blink_repetitions: u8,
    pub parse_failure: ParseFailurePolicy,
}

impl ControllerSettings {
    pub const fn new() -> Self {
        Self {
            loop_interval_ms: 1000,
            blink_hold_ms: 250,
            blink_repetitions: 3,
            parse_failure: ParseFailurePolicy::SkipRender,
        }
    }
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self::new()
    }
}

/// Diagnose-Zeilen auf der seriellen Schnittstelle
///
/// Die Texte sind Teil des beobachtbaren Verhaltens und dürfen
/// nicht verändert werden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Diagnostic {
    Ready,
    Received,
    ReadFailed,
    KeyFound,
    KeyMissing,
    LedOn,
    LedOff,
    ProcessingError,
}

impl Diagnostic {
    pub fn as_str(self) -> &'static str {
        match self {
            Diagnostic::Ready => "ESP32 iniciada. Aguardando dados JSON...",
            Diagnostic::Received => "JSON recebido:",
            Diagnostic::ReadFailed => "Erro ao ler o JSON",
            Diagnostic::KeyFound => "Chave 'process' encontrada no JSON.",
            Diagnostic::KeyMissing => "Chave 'process' não encontrada ou não é booleana.",
            Diagnostic::LedOn => "LED ligado: JSON processado com sucesso!",
            Diagnostic::LedOff => "LED apagado: JSON processado, mas não acionou o processo.",
            Diagnostic::ProcessingError => "Erro no processamento do JSON.",
        }
    }
}
