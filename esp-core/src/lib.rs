//! ESP Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, das Nachrichten-Framing, die JSON-Auswertung
//! und den Controller-Loop.
//!
//! `alloc` wird nur für den kurzlebigen JSON-Baum benötigt.

#![no_std]

extern crate alloc;

pub mod controller;
pub mod framing;
pub mod logic;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use controller::{ControlLoop, Controller, CycleReport, RenderDecision};
pub use framing::{Frame, FrameError, LineFramer};
pub use logic::{MessageError, ParseFault, SchemaFault, blink_pattern, parse_command};
pub use traits::{IndicatorLed, LedError, SerialError, SerialLink};
pub use types::{
    ControllerSettings, Diagnostic, Indication, LastCommand, ParseFailurePolicy, PinLevel, PinStep,
};
