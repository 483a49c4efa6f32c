// UART-Adapter für die Kommando-Schnittstelle

use esp_core::{SerialError, SerialLink};
use esp_hal::Blocking;
use esp_hal::uart::Uart;

/// Zeilenende wie bei Serial.println()
const LINE_ENDING: &[u8] = b"\r\n";

/// Serielle Verbindung über einen esp-hal UART
///
/// Empfang ist non-blocking (nur bereits im FIFO liegende Bytes),
/// Senden blockiert bis die Zeile im FIFO ist.
pub struct UartLink<'a> {
    uart: Uart<'a, Blocking>,
}

impl<'a> UartLink<'a> {
    pub fn new(uart: Uart<'a, Blocking>) -> Self {
        Self { uart }
    }

    fn write_all(&mut self, mut data: &[u8]) -> Result<(), SerialError> {
        while !data.is_empty() {
            let written = self
                .uart
                .write(data)
                .map_err(|_| SerialError::WriteFailed)?;
            data = &data[written..];
        }
        Ok(())
    }
}

impl<'a> SerialLink for UartLink<'a> {
    fn read_byte(&mut self) -> Result<Option<u8>, SerialError> {
        let mut byte = [0u8; 1];
        match self.uart.read_buffered(&mut byte) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(byte[0])),
            Err(_) => Err(SerialError::ReadFailed),
        }
    }

    fn write_line(&mut self, line: &str) -> Result<(), SerialError> {
        self.write_all(line.as_bytes())?;
        self.write_all(LINE_ENDING)?;
        self.uart.flush().map_err(|_| SerialError::WriteFailed)
    }
}
