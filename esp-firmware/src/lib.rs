// Library-Root: Hardware-Anbindung für den JSON-LED-Controller
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// ============================================================================
// Testing-Strategie
// ============================================================================
//
// Dieses Crate kompiliert nur für riscv32imac-unknown-none-elf (esp-hal).
// Die komplette Loop-Logik liegt daher in esp-core und wird dort bzw. in
// esp-tests auf dem Host getestet (Mock-Serial, Mock-LED, Mock-Delay).
// Hier bleiben nur die dünnen Adapter (UartLink, GpioIndicator, RmtIndicator)
// und die Task-Verdrahtung.
