//! Zeilenbasiertes Framing für serielle Nachrichten
//!
//! Nachrichten enden mit `\n`, ein abschließendes `\r` wird entfernt.
//! Sender ohne Zeilenende werden über [`LineFramer::flush`] bedient:
//! bleibt ein Abfrage-Zyklus ohne neue Bytes, gilt der Puffer als Nachricht.

use heapless::Vec;

/// Eine vollständige Nachricht (ohne Zeilenende)
pub type Frame<const N: usize> = Vec<u8, N>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Zeile länger als der Puffer, Inhalt verworfen
    Overflow,
}

/// Sammelt Bytes bis zum Zeilenende
pub struct LineFramer<const N: usize> {
    line: Vec<u8, N>,
    overflowed: bool,
}

impl<const N: usize> LineFramer<N> {
    pub const fn new() -> Self {
        Self {
            line: Vec::new(),
            overflowed: false,
        }
    }

    /// Nimmt ein Byte auf; liefert eine Nachricht sobald `\n` kommt
    pub fn push(&mut self, byte: u8) -> Option<Result<Frame<N>, FrameError>> {
        if byte == b'\n' {
            return Some(self.take());
        }

        // Bei Überlauf wird der Rest der Zeile verworfen
        if !self.overflowed && self.line.push(byte).is_err() {
            self.overflowed = true;
            self.line.clear();
        }
        None
    }

    /// Liefert angefangene Bytes als Nachricht (Idle-Flush)
    pub fn flush(&mut self) -> Option<Result<Frame<N>, FrameError>> {
        if self.line.is_empty() && !self.overflowed {
            return None;
        }
        Some(self.take())
    }

    /// Gibt es unvollständige Daten im Puffer?
    pub fn has_pending(&self) -> bool {
        !self.line.is_empty() || self.overflowed
    }

    fn take(&mut self) -> Result<Frame<N>, FrameError> {
        if core::mem::replace(&mut self.overflowed, false) {
            self.line.clear();
            return Err(FrameError::Overflow);
        }

        let mut frame = core::mem::take(&mut self.line);
        if frame.last() == Some(&b'\r') {
            frame.pop();
        }
        Ok(frame)
    }
}

impl<const N: usize> Default for LineFramer<N> {
    fn default() -> Self {
        Self::new()
    }
}
