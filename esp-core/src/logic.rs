//! Pure Business Logic Functions
//!
//! Funktionen ohne Hardware-Dependencies (testbar!)

use alloc::string::String;
use core::fmt;

use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde_json::Value;
use serde_json::error::Category;

use crate::types::{ControllerSettings, PinLevel, PinStep};

/// Name des ausgewerteten JSON-Feldes
pub const PROCESS_KEY: &str = "process";

/// Warum der Text kein gültiges JSON war
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseFault {
    /// Syntaxfehler (inkl. ungültigem UTF-8)
    Syntax,
    /// Text endet vor dem Ende des Wertes (auch: leerer Text)
    Eof,
    /// Nachricht passte nicht in den Empfangspuffer
    Overflow,
}

/// Warum gültiges JSON kein Kommando enthielt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFault {
    /// Feld fehlt oder der Wert ist kein Objekt
    Missing,
    /// Feld vorhanden, aber nicht boolesch
    NotBoolean,
}

/// Fehler beim Auswerten einer Nachricht
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageError {
    Parse(ParseFault),
    Schema(SchemaFault),
}

/// Liest das `"process"`-Flag aus einer Nachricht
///
/// Ausgewertet wird nur der erste JSON-Wert, Text danach wird ignoriert.
/// Der Schlüssel wird ohne Beachtung der Groß-/Kleinschreibung gesucht,
/// bei mehrfachem Vorkommen zählt das erste. Der Wert des Feldes lebt nur
/// innerhalb dieser Funktion und wird auf jedem Rückweg freigegeben.
///
/// # Beispiele
///
/// ```
/// # use esp_core::{parse_command, MessageError, SchemaFault};
/// assert_eq!(parse_command(br#"{"process": true}"#), Ok(true));
/// assert_eq!(parse_command(br#"{"Process": false} rest"#), Ok(false));
/// assert_eq!(
///     parse_command(b"{}"),
///     Err(MessageError::Schema(SchemaFault::Missing))
/// );
/// ```
pub fn parse_command(text: &[u8]) -> Result<bool, MessageError> {
    let field = serde_json::Deserializer::from_slice(text)
        .into_iter::<ProcessField>()
        .next()
        .ok_or(MessageError::Parse(ParseFault::Eof))?
        .map_err(|e| {
            MessageError::Parse(match e.classify() {
                Category::Eof => ParseFault::Eof,
                _ => ParseFault::Syntax,
            })
        })?;

    match field.0 {
        Some(Value::Bool(value)) => Ok(value),
        Some(_) => Err(MessageError::Schema(SchemaFault::NotBoolean)),
        None => Err(MessageError::Schema(SchemaFault::Missing)),
    }
}

/// Wert des ersten `"process"`-Feldes eines Top-Level-Objekts
///
/// `None` wenn das Feld fehlt oder der Wert kein Objekt ist.
struct ProcessField(Option<Value>);

impl<'de> Deserialize<'de> for ProcessField {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ProcessFieldVisitor)
    }
}

struct ProcessFieldVisitor;

impl<'de> Visitor<'de> for ProcessFieldVisitor {
    type Value = ProcessField;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a JSON value")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<ProcessField, A::Error> {
        let mut found = None;
        while let Some(key) = map.next_key::<String>()? {
            if found.is_none() && key.eq_ignore_ascii_case(PROCESS_KEY) {
                found = Some(map.next_value::<Value>()?);
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(ProcessField(found))
    }

    // Alles andere ist gültiges JSON ohne Feld
    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<ProcessField, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(ProcessField(None))
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<ProcessField, E> {
        Ok(ProcessField(None))
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<ProcessField, E> {
        Ok(ProcessField(None))
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<ProcessField, E> {
        Ok(ProcessField(None))
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<ProcessField, E> {
        Ok(ProcessField(None))
    }

    fn visit_str<E: de::Error>(self, _: &str) -> Result<ProcessField, E> {
        Ok(ProcessField(None))
    }

    fn visit_unit<E: de::Error>(self) -> Result<ProcessField, E> {
        Ok(ProcessField(None))
    }
}

/// Fehler-Blinkmuster: `blink_repetitions` × (an, warten, aus, warten)
///
/// Endet immer auf `Inactive`.
pub fn blink_pattern(settings: &ControllerSettings) -> impl Iterator<Item = PinStep> {
    let hold_ms = settings.blink_hold_ms;
    (0..settings.blink_repetitions).flat_map(move |_| {
        [
            PinStep {
                level: PinLevel::Active,
                hold_ms,
            },
            PinStep {
                level: PinLevel::Inactive,
                hold_ms,
            },
        ]
    })
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for MessageError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            MessageError::Parse(ParseFault::Syntax) => defmt::write!(fmt, "JSON syntax error"),
            MessageError::Parse(ParseFault::Eof) => defmt::write!(fmt, "JSON incomplete"),
            MessageError::Parse(ParseFault::Overflow) => defmt::write!(fmt, "Message too long"),
            MessageError::Schema(SchemaFault::Missing) => defmt::write!(fmt, "Key missing"),
            MessageError::Schema(SchemaFault::NotBoolean) => defmt::write!(fmt, "Key not boolean"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_true_and_false() {
        assert_eq!(parse_command(br#"{"process": true}"#), Ok(true));
        assert_eq!(parse_command(br#"{"process":false}"#), Ok(false));
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let text = br#"{"id": 7, "process": true, "meta": {"a": [1, 2]}}"#;
        assert_eq!(parse_command(text), Ok(true));
    }

    #[test]
    fn test_malformed_is_parse_error() {
        assert_eq!(
            parse_command(b"not json"),
            Err(MessageError::Parse(ParseFault::Syntax))
        );
    }

    #[test]
    fn test_empty_is_parse_error() {
        assert_eq!(parse_command(b""), Err(MessageError::Parse(ParseFault::Eof)));
        assert_eq!(
            parse_command(b"   "),
            Err(MessageError::Parse(ParseFault::Eof))
        );
    }

    #[test]
    fn test_truncated_is_parse_error() {
        assert_eq!(
            parse_command(br#"{"process": tr"#),
            Err(MessageError::Parse(ParseFault::Eof))
        );
    }

    #[test]
    fn test_trailing_whitespace_accepted() {
        assert_eq!(parse_command(b"{\"process\": true}  \t"), Ok(true));
    }

    #[test]
    fn test_text_after_first_value_is_ignored() {
        assert_eq!(parse_command(br#"{"process": true} x"#), Ok(true));
        assert_eq!(parse_command(br#"{"process": false}{"process": true}"#), Ok(false));
    }

    #[test]
    fn test_invalid_utf8_is_parse_error() {
        assert_eq!(
            parse_command(b"{\"process\": \"\xff\"}"),
            Err(MessageError::Parse(ParseFault::Syntax))
        );
    }

    #[test]
    fn test_missing_key() {
        assert_eq!(
            parse_command(b"{}"),
            Err(MessageError::Schema(SchemaFault::Missing))
        );
        assert_eq!(
            parse_command(br#"{"processed": true}"#),
            Err(MessageError::Schema(SchemaFault::Missing))
        );
    }

    #[test]
    fn test_key_ignores_case() {
        assert_eq!(parse_command(br#"{"Process": true}"#), Ok(true));
        assert_eq!(parse_command(br#"{"PROCESS": false}"#), Ok(false));
    }

    #[test]
    fn test_first_duplicate_key_wins() {
        assert_eq!(parse_command(br#"{"process": true, "process": "x"}"#), Ok(true));
        assert_eq!(
            parse_command(br#"{"process": 1, "Process": true}"#),
            Err(MessageError::Schema(SchemaFault::NotBoolean))
        );
    }

    #[test]
    fn test_truncated_after_key_is_parse_error() {
        assert_eq!(
            parse_command(br#"{"process": true, "id"#),
            Err(MessageError::Parse(ParseFault::Eof))
        );
    }

    #[test]
    fn test_wrong_type() {
        let cases: [&[u8]; 4] = [
            br#"{"process": "yes"}"#,
            br#"{"process": 1}"#,
            br#"{"process": null}"#,
            br#"{"process": [true]}"#,
        ];
        for text in cases {
            assert_eq!(
                parse_command(text),
                Err(MessageError::Schema(SchemaFault::NotBoolean))
            );
        }
    }

    #[test]
    fn test_non_object_top_level() {
        assert_eq!(
            parse_command(b"true"),
            Err(MessageError::Schema(SchemaFault::Missing))
        );
        assert_eq!(
            parse_command(b"[1, 2]"),
            Err(MessageError::Schema(SchemaFault::Missing))
        );
    }

    #[test]
    fn test_blink_pattern_default() {
        let settings = ControllerSettings::default();
        let steps: heapless::Vec<PinStep, 8> = blink_pattern(&settings).collect();

        assert_eq!(steps.len(), 6);
        for pair in steps.chunks(2) {
            assert_eq!(pair[0].level, PinLevel::Active);
            assert_eq!(pair[1].level, PinLevel::Inactive);
            assert!(pair.iter().all(|s| s.hold_ms == 250));
        }
        assert_eq!(steps.last().map(|s| s.level), Some(PinLevel::Inactive));
    }

    #[test]
    fn test_blink_pattern_zero_repetitions() {
        let settings = ControllerSettings {
            blink_repetitions: 0,
            ..ControllerSettings::default()
        };
        assert_eq!(blink_pattern(&settings).count(), 0);
    }
}
