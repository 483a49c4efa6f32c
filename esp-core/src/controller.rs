//! Controller-Loop
//!
//! `Controller` hält den Zustand und entscheidet (pure Logik),
//! `ControlLoop` führt einen Zyklus gegen die Hardware-Traits aus.

use embedded_hal_async::delay::DelayNs;

use crate::framing::{Frame, FrameError, LineFramer};
use crate::logic::{MessageError, ParseFault, blink_pattern, parse_command};
use crate::traits::{IndicatorLed, LedError, SerialError, SerialLink};
use crate::types::{
    ControllerSettings, Diagnostic, Indication, LastCommand, ParseFailurePolicy, PinLevel,
};

/// Soll nach der Auswertung gerendert werden?
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderDecision {
    Render,
    Skip,
}

/// Zustand und Entscheidungslogik ohne Hardware
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controller {
    state: LastCommand,
    settings: ControllerSettings,
}

impl Controller {
    pub const fn new(settings: ControllerSettings) -> Self {
        Self {
            state: LastCommand {
                was_processed: false,
                command_value: false,
            },
            settings,
        }
    }

    pub fn state(&self) -> LastCommand {
        self.state
    }

    pub fn settings(&self) -> &ControllerSettings {
        &self.settings
    }

    /// Übernimmt das Ergebnis einer Nachricht in den Zustand
    pub fn apply(&mut self, result: Result<bool, MessageError>) -> RenderDecision {
        match result {
            Ok(value) => {
                self.state = LastCommand::accepted(value);
                RenderDecision::Render
            }
            Err(MessageError::Schema(_)) => {
                self.state = LastCommand::rejected();
                RenderDecision::Render
            }
            Err(MessageError::Parse(_)) => {
                // command_value bleibt stehen, wird ohne was_processed nie gelesen
                self.state.was_processed = false;
                match self.settings.parse_failure {
                    ParseFailurePolicy::SkipRender => RenderDecision::Skip,
                    ParseFailurePolicy::Indicate => RenderDecision::Render,
                }
            }
        }
    }

    pub fn indication(&self) -> Indication {
        self.state.indication()
    }
}

/// Ergebnis eines Loop-Zyklus (für Logging und Tests)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleReport {
    /// Ausgewertete Nachricht, `None` wenn keine vollständige vorlag
    pub input: Option<Result<bool, MessageError>>,
    /// Dargestellte Anzeige, `None` wenn das Rendern übersprungen wurde
    pub rendered: Option<Indication>,
    /// Erster LED-Fehler in diesem Zyklus
    pub led_fault: Option<LedError>,
    /// Erster Fehler der seriellen Schnittstelle in diesem Zyklus
    pub serial_fault: Option<SerialError>,
}

/// Der komplette Controller-Loop über austauschbarer Hardware
///
/// # Parameter
/// - `S`: serielle Verbindung (Kommandos + Diagnose)
/// - `L`: Status-LED
/// - `D`: Async-Delay (embassy-time im Firmware-Build, Mock in Tests)
/// - `N`: maximale Nachrichtenlänge in Bytes
pub struct ControlLoop<S, L, D, const N: usize> {
    serial: S,
    led: L,
    delay: D,
    framer: LineFramer<N>,
    controller: Controller,
}

impl<S, L, D, const N: usize> ControlLoop<S, L, D, N>
where
    S: SerialLink,
    L: IndicatorLed,
    D: DelayNs,
{
    pub fn new(serial: S, led: L, delay: D, settings: ControllerSettings) -> Self {
        Self {
            serial,
            led,
            delay,
            framer: LineFramer::new(),
            controller: Controller::new(settings),
        }
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Initialisierung: LED aus, Startmeldung senden
    pub fn begin(&mut self) -> CycleReport {
        let mut report = CycleReport::default();
        self.drive(PinLevel::Inactive, &mut report);
        self.say(Diagnostic::Ready.as_str(), &mut report);
        report
    }

    /// Führt einen Loop-Zyklus aus: Eingabe prüfen, auswerten, rendern, warten
    pub async fn run_cycle(&mut self) -> CycleReport {
        let mut report = CycleReport::default();

        if let Some(frame) = self.poll_frame(&mut report) {
            let result = self.receive(frame, &mut report);
            report.input = Some(result);

            if self.controller.apply(result) == RenderDecision::Skip {
                return report;
            }
        }

        let indication = self.controller.indication();
        self.render(indication, &mut report).await;
        report.rendered = Some(indication);

        let interval = self.controller.settings().loop_interval_ms;
        self.delay.delay_ms(interval).await;
        report
    }

    /// Liest verfügbare Bytes bis zur ersten vollständigen Nachricht
    ///
    /// Restliche Bytes bleiben im Empfangspuffer der Hardware.
    fn poll_frame(&mut self, report: &mut CycleReport) -> Option<Result<Frame<N>, FrameError>> {
        let mut received = false;
        loop {
            match self.serial.read_byte() {
                Ok(Some(byte)) => {
                    received = true;
                    if let Some(frame) = self.framer.push(byte) {
                        return Some(frame);
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    // Angefangene Nachricht bleibt im Framer, Rest kommt im nächsten Zyklus
                    report.serial_fault.get_or_insert(e);
                    return None;
                }
            }
        }

        // Keine neuen Bytes seit dem letzten Zyklus → Nachricht ist vollständig
        if received || !self.framer.has_pending() {
            None
        } else {
            self.framer.flush()
        }
    }

    fn receive(
        &mut self,
        frame: Result<Frame<N>, FrameError>,
        report: &mut CycleReport,
    ) -> Result<bool, MessageError> {
        let result = match frame {
            Ok(bytes) => {
                self.say(Diagnostic::Received.as_str(), report);
                self.say(printable(&bytes), report);
                parse_command(&bytes)
            }
            Err(FrameError::Overflow) => Err(MessageError::Parse(ParseFault::Overflow)),
        };

        let diagnostic = match result {
            Ok(_) => Diagnostic::KeyFound,
            Err(MessageError::Parse(_)) => Diagnostic::ReadFailed,
            Err(MessageError::Schema(_)) => Diagnostic::KeyMissing,
        };
        self.say(diagnostic.as_str(), report);
        result
    }

    async fn render(&mut self, indication: Indication, report: &mut CycleReport) {
        match indication {
            Indication::Steady(level) => {
                self.drive(level, report);
                let diagnostic = match level {
                    PinLevel::Active => Diagnostic::LedOn,
                    PinLevel::Inactive => Diagnostic::LedOff,
                };
                self.say(diagnostic.as_str(), report);
            }
            Indication::ErrorBlink => {
                let settings = *self.controller.settings();
                for step in blink_pattern(&settings) {
                    self.drive(step.level, report);
                    self.delay.delay_ms(step.hold_ms).await;
                }
                self.say(Diagnostic::ProcessingError.as_str(), report);
            }
        }
    }

    fn drive(&mut self, level: PinLevel, report: &mut CycleReport) {
        if let Err(e) = self.led.set_level(level) {
            report.led_fault.get_or_insert(e);
        }
    }

    fn say(&mut self, line: &str, report: &mut CycleReport) {
        if let Err(e) = self.serial.write_line(line) {
            report.serial_fault.get_or_insert(e);
        }
    }
}

/// Gültiger UTF-8-Anfang der Nachricht (für das Echo)
fn printable(bytes: &[u8]) -> &str {
    match core::str::from_utf8(bytes) {
        Ok(text) => text,
        // valid_up_to() markiert eine gültige Grenze
        Err(e) => core::str::from_utf8(&bytes[..e.valid_up_to()]).unwrap_or_default(),
    }
}
